use crate::admin::{self, NewGoal, NewMatch};
use crate::cli::{Args, Command, GoalAction, MatchAction, PlayerAction, is_config_operation};
use crate::config::{Config, StorageBackend};
use crate::error::AppError;
use crate::models::{Goal, Match, Player, parse_match_date};
use crate::stats::Dashboard;
use crate::store::{Collection, EntityStore, Store, load_snapshot};
use crate::tournament::{group_matches, group_standings};
use crate::ui::{StatsPage, dashboard_page, statistics_page, tournament_page};
use chrono::{DateTime, Utc};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use tracing::{info, instrument};

/// Resolves the instant views are evaluated at: `--now` if given, else the clock.
pub fn resolve_now(args: &Args) -> Result<DateTime<Utc>, AppError> {
    match &args.now {
        Some(value) => parse_match_date(value).map_err(AppError::datetime_parse_error),
        None => Ok(Utc::now()),
    }
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update flags (--config-storage, --set-data-dir,
/// --set-token, --clear-token) and saves the result.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(&Config::get_config_path(), args).await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Edits the stored file only. Environment overrides are never read here, so
/// they cannot end up persisted, and a broken file is reported, not replaced.
async fn update_config_file(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load_stored(path).await?;
    apply_config_updates(&mut config, args)?;
    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}

fn apply_config_updates(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(storage) = &args.config_storage {
        config.storage = storage.parse::<StorageBackend>()?;
    }

    if let Some(data_dir) = &args.set_data_dir {
        config.data_dir = Some(data_dir.clone());
    }

    if let Some(token) = &args.set_token {
        config.github_token = Some(token.clone());
    } else if args.clear_token {
        config.github_token = None;
        println!("GitHub token cleared.");
    }

    Ok(())
}

pub async fn dashboard<S: EntityStore>(store: &S, now: DateTime<Utc>) -> Result<StatsPage, AppError> {
    let matches: Vec<Match> = store.read(Collection::Matches).await?;
    Ok(dashboard_page(&Dashboard::build(&matches, now)))
}

pub async fn statistics<S: EntityStore>(store: &S) -> Result<StatsPage, AppError> {
    let snapshot = load_snapshot(store).await?;
    Ok(statistics_page(&snapshot))
}

pub async fn tournament<S: EntityStore>(store: &S) -> Result<StatsPage, AppError> {
    let roster: Vec<Player> = store.read(Collection::TournamentPlayers).await?;
    let fixtures = group_matches();
    let table = group_standings(&fixtures);
    Ok(tournament_page(&fixtures, &table, &roster))
}

/// Applies a roster edit and saves the roster. Returns a confirmation line.
#[instrument(skip(store))]
pub async fn player_action<S: EntityStore>(
    store: &S,
    tournament: bool,
    action: PlayerAction,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let collection = if tournament {
        Collection::TournamentPlayers
    } else {
        Collection::Players
    };
    let players: Vec<Player> = store.read(collection).await?;

    let (updated, message) = match action {
        PlayerAction::Add { name, number } => {
            let (updated, player) = admin::add_player(&players, &name, number, now)?;
            let message = format!("Added {} (#{}) with id {}", player.name, player.number, player.id);
            (updated, message)
        }
        PlayerAction::Delete { id } => {
            (admin::delete_player(&players, &id)?, format!("Deleted player {id}"))
        }
        PlayerAction::Penalty { id, minutes } => (
            admin::add_penalty_minutes(&players, &id, minutes)?,
            format!("Added {minutes} penalty minutes to player {id}"),
        ),
        PlayerAction::Fine { id, amount } => (
            admin::add_fine(&players, &id, amount)?,
            format!("Added a fine of {amount} to player {id}"),
        ),
        PlayerAction::Settle { id, amount } => {
            let (updated, settled) = admin::settle_tab(&players, &id, amount.unwrap_or(u32::MAX))?;
            (updated, format!("Settled {settled} of player {id}'s tab"))
        }
    };

    store.write(collection, &updated).await?;
    info!("{message}");
    Ok(message)
}

/// Adds or deletes a match, saving matches first and then the roster.
#[instrument(skip(store))]
pub async fn match_action<S: EntityStore>(
    store: &S,
    action: MatchAction,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let (players, matches) = tokio::try_join!(
        store.read::<Player>(Collection::Players),
        store.read::<Match>(Collection::Matches),
    )?;

    let (matches, players, message) = match action {
        MatchAction::Add {
            date,
            opponent,
            home,
            goals_for,
            goals_against,
            lineup,
        } => {
            let date = parse_match_date(&date).map_err(AppError::datetime_parse_error)?;
            let input = NewMatch {
                date,
                opponent,
                home_game: home,
                goals_for,
                goals_against,
                lineup,
            };
            let (matches, players, game) = admin::add_match(&matches, &players, input, now)?;
            let message = format!(
                "Added match {} against {} ({}-{})",
                game.id, game.opponent, game.goals_for, game.goals_against
            );
            (matches, players, message)
        }
        MatchAction::Delete { id } => {
            let (matches, players) = admin::delete_match(&matches, &players, &id)?;
            (matches, players, format!("Deleted match {id}"))
        }
    };

    store.write(Collection::Matches, &matches).await?;
    store.write(Collection::Players, &players).await?;
    info!("{message}");
    Ok(message)
}

/// Adds or deletes a goal, saving goals first and then the roster.
#[instrument(skip(store))]
pub async fn goal_action<S: EntityStore>(
    store: &S,
    action: GoalAction,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let snapshot = load_snapshot(store).await?;

    let (goals, players, message): (Vec<Goal>, Vec<Player>, String) = match action {
        GoalAction::Add {
            match_id,
            scorer,
            assist,
            period,
            time,
        } => {
            let input = NewGoal {
                player_id: scorer,
                assist_id: assist,
                match_id,
                period,
                time,
            };
            let (goals, players, goal) = admin::add_goal(
                &snapshot.goals,
                &snapshot.players,
                &snapshot.matches,
                input,
                now,
            )?;
            let message = format!(
                "Added goal {} in match {} (period {}, {})",
                goal.id, goal.match_id, goal.period, goal.time
            );
            (goals, players, message)
        }
        GoalAction::Delete { id } => {
            let (goals, players) = admin::delete_goal(&snapshot.goals, &snapshot.players, &id)?;
            (goals, players, format!("Deleted goal {id}"))
        }
    };

    store.write(Collection::Goals, &goals).await?;
    store.write(Collection::Players, &players).await?;
    info!("{message}");
    Ok(message)
}

fn print_page(page: &StatsPage) -> Result<(), AppError> {
    execute!(stdout(), SetTitle("Di Gröne"))?;
    page.render(&mut stdout())?;
    println!();
    Ok(())
}

/// Runs the command line invocation.
pub async fn run(args: Args) -> Result<(), AppError> {
    if args.list_config {
        return handle_list_config_command().await;
    }
    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    let now = resolve_now(&args)?;
    let config = Config::load().await?;
    let store = Store::from_config(&config)?;

    match args.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => print_page(&dashboard(&store, now).await?),
        Command::Stats => print_page(&statistics(&store).await?),
        Command::Tournament => print_page(&tournament(&store).await?),
        Command::Player { tournament, action } => {
            println!("{}", player_action(&store, tournament, action, now).await?);
            Ok(())
        }
        Command::Match { action } => {
            println!("{}", match_action(&store, action, now).await?);
            Ok(())
        }
        Command::Goal { action } => {
            println!("{}", goal_action(&store, action, now).await?);
            Ok(())
        }
    }
}
