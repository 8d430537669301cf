//! Page builders for the dashboard, statistics and tournament views.

use chrono::{DateTime, Utc};

use super::page::{StatsPage, outcome_letter};
use crate::constants::{DEFAULT_TOP_PERFORMERS, TEAM_NAME};
use crate::models::{Fixture, Match, Player};
use crate::stats::{
    Dashboard, PlayerOrder, Standing, active_roster, average_points_per_player, goals_for_match,
    lineup_players, matches_by_date, points_table, season_totals, top_performers,
};
use crate::store::Snapshot;
use crate::tournament::{
    TOURNAMENT_ARENA, TOURNAMENT_DAY, TOURNAMENT_NAME, TOURNAMENT_YEAR, team_fixtures,
};

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

fn venue(game: &Match) -> &'static str {
    if game.home_game { "Hemma" } else { "Borta" }
}

fn match_line(game: &Match) -> String {
    format!(
        "{}  {:<22} {:<5} {}-{} {}",
        format_date(game.date),
        game.opponent,
        venue(game),
        game.goals_for,
        game.goals_against,
        outcome_letter(game.outcome())
    )
}

pub fn dashboard_page(dashboard: &Dashboard) -> StatsPage {
    let mut page = StatsPage::new("ÖVERSIKT", "Säsongen i siffror");
    let chronology = &dashboard.chronology;

    page.add_heading("Matcher spelade");
    page.add_text(format!(
        "{} ({} vinster)",
        chronology.played_count, chronology.win_count
    ));

    page.add_heading("Senaste 5 matcherna");
    if dashboard.recent_results.is_empty() {
        page.add_text("Inga matcher än");
    } else {
        page.add_results(dashboard.recent_results.clone());
    }

    page.add_heading("Målratio");
    page.add_text(format!(
        "{} - {}",
        dashboard.totals.goals_for, dashboard.totals.goals_against
    ));
    page.add_detail("Gjorda mål - Insläppta mål");

    page.add_heading("Föregående match");
    match &chronology.previous {
        Some(game) => page.add_text(match_line(game)),
        None => page.add_text("Ingen tidigare match"),
    }

    page.add_heading("Kommande match");
    match &chronology.next {
        Some(game) => page.add_text(format!(
            "{}  {} ({})",
            format_date(game.date),
            game.opponent,
            venue(game)
        )),
        None => page.add_text("Ingen kommande match"),
    }

    page
}

fn player_line(rank: usize, player: &Player) -> String {
    format!(
        "{:>4}. {:>3} {:<24} {:>4} {:>6} {:>6} {:>7}",
        rank,
        player.number,
        player.name,
        player.goals,
        player.assists,
        player.points(),
        player.matches
    )
}

pub fn statistics_page(snapshot: &Snapshot) -> StatsPage {
    let mut page = StatsPage::new("STATISTIK", "Skytteliga och matchhistorik");

    page.add_heading("Skytteliga");
    page.add_text(format!(
        "{:>5} {:>3} {:<24} {:>4} {:>6} {:>6} {:>7}",
        "Plac.", "Nr", "Spelare", "Mål", "Assist", "Poäng", "Matcher"
    ));
    for (i, player) in season_totals(&snapshot.players, PlayerOrder::Goals)
        .iter()
        .enumerate()
    {
        page.add_text(player_line(i + 1, player));
    }

    page.add_heading("Matchhistorik");
    let history = matches_by_date(&snapshot.matches);
    if history.is_empty() {
        page.add_text("Inga matcher än");
    }
    for game in &history {
        page.add_text(match_line(game));
        for goal in goals_for_match(&snapshot.goals, &snapshot.players, &game.id) {
            let assist = goal
                .assist
                .map(|name| format!(" ({name})"))
                .unwrap_or_default();
            page.add_detail(format!(
                "P{} {} {}{}",
                goal.period, goal.time, goal.scorer, assist
            ));
        }
        let lineup = lineup_players(game, &snapshot.players);
        if !lineup.is_empty() {
            let names: Vec<&str> = lineup.iter().map(|p| p.name.as_str()).collect();
            page.add_detail(format!("Laguppställning: {}", names.join(", ")));
        }
    }

    page
}

fn standing_line(standing: &Standing) -> String {
    format!(
        "{:<16} {:>2} {:>2} {:>2} {:>2} {:>7} {:>5}",
        standing.team,
        standing.played,
        standing.wins,
        standing.draws,
        standing.losses,
        format!("{}-{}", standing.goals_for, standing.goals_against),
        standing.points
    )
}

pub fn tournament_page(fixtures: &[Fixture], table: &[Standing], roster: &[Player]) -> StatsPage {
    let mut page = StatsPage::new(
        format!("{} {}", TOURNAMENT_NAME.to_uppercase(), TOURNAMENT_YEAR),
        format!("Speldag {TOURNAMENT_DAY} • {TOURNAMENT_ARENA}"),
    );

    page.add_heading("Grupp 1-tabell");
    page.add_text(format!(
        "{:<16} {:>2} {:>2} {:>2} {:>2} {:>7} {:>5}",
        "Lag", "M", "V", "O", "F", "Mål", "Poäng"
    ));
    for standing in table {
        page.add_text(standing_line(standing));
    }

    page.add_heading("Matcher & slutspelet");
    for fixture in fixtures {
        page.add_text(format!(
            "{:<14} {:<12} {} - {}  {}",
            fixture.slot,
            fixture.stage,
            fixture.home(),
            fixture.away(),
            fixture.result_text().unwrap_or_else(|| "-".to_string())
        ));
    }

    page.add_heading(format!("{TEAM_NAME} i gruppspelet"));
    for fixture in team_fixtures(fixtures, TEAM_NAME) {
        let score = fixture
            .score
            .map(|(ours, theirs)| format!("{ours}-{theirs}"))
            .unwrap_or_else(|| "-".to_string());
        page.add_text(format!(
            "{:<22} {:<14} {} {}",
            fixture.stage, fixture.slot, fixture.opponent, score
        ));
    }

    if roster.is_empty() {
        page.add_heading("Spelarstatistik");
        page.add_text("Inga spelare registrerade ännu.");
        return page;
    }

    page.add_heading("Nyckelspelare");
    for player in top_performers(roster, DEFAULT_TOP_PERFORMERS) {
        page.add_text(format!("{:<24} {} poäng", player.name, player.points()));
    }
    page.add_detail(format!(
        "Snitt {:.1} poäng per spelare",
        average_points_per_player(roster)
    ));

    page.add_heading("Spelare");
    for player in active_roster(roster) {
        page.add_text(format!(
            "{:>3} {:<24} {:>2} matcher",
            player.number, player.name, player.matches
        ));
    }

    page.add_heading("Spelarstatistik");
    page.add_text(format!(
        "{:<24} {:>4} {:>6} {:>6} {:>13}",
        "Spelare", "Mål", "Assist", "Poäng", "Utvisningsmin"
    ));
    for player in points_table(roster) {
        page.add_text(format!(
            "{:<24} {:>4} {:>6} {:>6} {:>13}",
            player.name,
            player.goals,
            player.assists,
            player.points(),
            player.penalty_mins
        ));
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchOutcome;
    use crate::testing_utils::TestDataBuilder;
    use crate::tournament::{group_matches, group_standings};
    use chrono::TimeZone;

    fn lines(page: &StatsPage) -> Vec<String> {
        page.plain_lines()
    }

    #[test]
    fn test_dashboard_page_for_empty_season() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let page = dashboard_page(&Dashboard::build(&[], now));
        let lines = lines(&page);

        assert!(lines.contains(&"0 (0 vinster)".to_string()));
        assert!(lines.contains(&"Inga matcher än".to_string()));
        assert!(lines.contains(&"Ingen tidigare match".to_string()));
        assert!(lines.contains(&"Ingen kommande match".to_string()));
    }

    #[test]
    fn test_dashboard_page_shows_neighbours() {
        let season = TestDataBuilder::sample_season();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let dashboard = Dashboard::build(&season, now);
        let lines = lines(&dashboard_page(&dashboard));

        let previous = lines.iter().position(|l| l == "Föregående match").unwrap();
        assert!(lines[previous + 1].starts_with("2025-02-27 18:00"));
        let next = lines.iter().position(|l| l == "Kommande match").unwrap();
        assert!(lines[next + 1].starts_with("2025-03-08 18:00"));

        let results = lines
            .iter()
            .position(|l| l == "Senaste 5 matcherna")
            .unwrap();
        let expected: Vec<String> = dashboard
            .recent_results
            .iter()
            .map(|o| outcome_letter(*o).to_string())
            .collect();
        assert_eq!(lines[results + 1], expected.join(" "));
    }

    #[test]
    fn test_statistics_page_lists_goals_under_match() {
        let roster = TestDataBuilder::sample_roster();
        let matches = vec![TestDataBuilder::played_match("m1", 2025, 1, 11, 2, 1)];
        let goals = vec![
            TestDataBuilder::goal("g2", "2", None, "m1", 2, "03:00"),
            TestDataBuilder::goal("g1", "1", Some("3"), "m1", 1, "12:30"),
        ];
        let snapshot = Snapshot {
            players: roster,
            matches,
            goals,
        };
        let lines = lines(&statistics_page(&snapshot));

        let game = lines.iter().position(|l| l.contains("2-1 V")).unwrap();
        assert_eq!(lines[game + 1], "  P1 12:30 Erik Andersson (Magnus Karlsson)");
        assert_eq!(lines[game + 2], "  P2 03:00 Johan Svensson");
        assert!(!lines.iter().any(|l| l.contains("Laguppställning")));
    }

    #[test]
    fn test_statistics_page_shows_lineup_after_goals() {
        let mut game = TestDataBuilder::played_match("m1", 2025, 1, 11, 1, 0);
        game.lineup = vec!["3".to_string(), "ghost".to_string(), "1".to_string()];
        let snapshot = Snapshot {
            players: TestDataBuilder::sample_roster(),
            matches: vec![game],
            goals: vec![TestDataBuilder::goal("g1", "3", None, "m1", 3, "18:01")],
        };
        let lines = lines(&statistics_page(&snapshot));

        let game = lines.iter().position(|l| l.contains("1-0 V")).unwrap();
        assert_eq!(lines[game + 1], "  P3 18:01 Magnus Karlsson");
        assert_eq!(
            lines[game + 2],
            "  Laguppställning: Magnus Karlsson, Erik Andersson"
        );
    }

    #[test]
    fn test_tournament_page_without_roster() {
        let fixtures = group_matches();
        let table = group_standings(&fixtures);
        let lines = lines(&tournament_page(&fixtures, &table, &[]));

        assert!(lines[0].starts_with("REGIONSCUPEN 2025"));
        assert!(lines.contains(&"Inga spelare registrerade ännu.".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("Tröccas")));
    }

    #[test]
    fn test_tournament_page_average_has_one_decimal() {
        let fixtures = group_matches();
        let roster = vec![
            TestDataBuilder::player_with_stats("1", "Erik Andersson", 2, 1, 3),
            TestDataBuilder::player_with_stats("2", "Johan Svensson", 1, 0, 3),
            TestDataBuilder::player_with_stats("3", "Magnus Karlsson", 0, 0, 1),
        ];
        let lines = lines(&tournament_page(&fixtures, &[], &roster));

        assert!(lines.contains(&"  Snitt 1.3 poäng per spelare".to_string()));
        let key = lines.iter().position(|l| l == "Nyckelspelare").unwrap();
        assert!(lines[key + 1].starts_with("Erik Andersson"));
    }

    #[test]
    fn test_outcome_letters() {
        assert_eq!(outcome_letter(MatchOutcome::Win), 'V');
        assert_eq!(outcome_letter(MatchOutcome::Loss), 'F');
        assert_eq!(outcome_letter(MatchOutcome::Draw), 'O');
    }
}
