use crossterm::style::Color;

use crate::models::MatchOutcome;

pub fn header_bg() -> Color {
    Color::AnsiValue(22)
} // Dark green
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn heading_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn detail_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan

pub fn outcome_fg(outcome: MatchOutcome) -> Color {
    match outcome {
        MatchOutcome::Win => Color::AnsiValue(46),  // Bright green
        MatchOutcome::Loss => Color::AnsiValue(196), // Bright red
        MatchOutcome::Draw => Color::AnsiValue(250), // Light grey
    }
}
