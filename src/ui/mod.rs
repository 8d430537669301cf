//! Terminal output of the stats views.

pub mod colors;
pub mod page;
pub mod views;

pub use page::{PageRow, StatsPage, outcome_letter};
pub use views::{dashboard_page, statistics_page, tournament_page};
