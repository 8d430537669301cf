use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only reads or edits the config file.
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.config_storage.is_some()
        || args.set_data_dir.is_some()
        || args.set_token.is_some()
        || args.clear_token
}

/// Di Gröne team statistics
///
/// Shows the season dashboard, scoring leaders and match history, and the
/// Regionscupen tournament tables. Admin subcommands edit the roster, matches
/// and goals in the configured store (local JSON files or a GitHub repository).
///
/// Without a subcommand the dashboard is shown.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Select the storage backend in config: `local` or `github`
    #[arg(long = "config-storage", value_name = "BACKEND", help_heading = "Configuration")]
    pub config_storage: Option<String>,

    /// Set the directory of the local JSON store in config
    #[arg(long = "set-data-dir", value_name = "DIR", help_heading = "Configuration")]
    pub set_data_dir: Option<String>,

    /// Store a GitHub token in config. Needed to save changes in github mode.
    #[arg(long = "set-token", value_name = "TOKEN", help_heading = "Configuration")]
    pub set_token: Option<String>,

    /// Remove the GitHub token from config
    #[arg(long = "clear-token", help_heading = "Configuration")]
    pub clear_token: bool,

    /// Evaluate views at this instant (RFC 3339) instead of the current time
    #[arg(long = "now", value_name = "DATETIME", global = true, help_heading = "Display Options")]
    pub now: Option<String>,

    /// Also print logs to the terminal
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Season overview: played matches, last five results, goal ratio, previous and next match
    Dashboard,
    /// Scoring leaders and match history with goal logs
    Stats,
    /// Regionscupen group table, fixtures and player statistics
    Tournament,
    /// Manage the roster
    Player {
        /// Edit the tournament roster instead of the season roster
        #[arg(long)]
        tournament: bool,
        #[command(subcommand)]
        action: PlayerAction,
    },
    /// Manage matches
    Match {
        #[command(subcommand)]
        action: MatchAction,
    },
    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    /// Add a player with all counters at zero
    Add {
        name: String,
        /// Jersey number
        #[arg(short, long)]
        number: u32,
    },
    /// Remove a player
    Delete { id: String },
    /// Add penalty minutes
    Penalty { id: String, minutes: u32 },
    /// Add a fine to the player's tab
    Fine { id: String, amount: u32 },
    /// Move an amount from the tab to paid off. Settles the whole tab if no amount is given.
    Settle { id: String, amount: Option<u32> },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MatchAction {
    /// Add a match and credit the lineup with an appearance
    Add {
        /// Kick-off, e.g. 2025-03-08T18:00 or 2025-03-08
        #[arg(long)]
        date: String,
        #[arg(long)]
        opponent: String,
        /// Played at home
        #[arg(long)]
        home: bool,
        #[arg(long = "goals-for", default_value_t = 0)]
        goals_for: u32,
        #[arg(long = "goals-against", default_value_t = 0)]
        goals_against: u32,
        /// Comma separated player ids
        #[arg(long, value_delimiter = ',')]
        lineup: Vec<String>,
    },
    /// Remove a match and take back the lineup appearances
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GoalAction {
    /// Record a goal
    Add {
        #[arg(long = "match")]
        match_id: String,
        /// Scorer's player id
        #[arg(long)]
        scorer: String,
        /// Assisting player's id
        #[arg(long)]
        assist: Option<String>,
        /// Period 1 to 3
        #[arg(long)]
        period: u8,
        /// Time within the period as mm:ss
        #[arg(long)]
        time: String,
    },
    /// Remove a goal and take back the scorer and assist credit
    Delete { id: String },
}
