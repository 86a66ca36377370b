//! Tests for tennis rules and score labels.

use scorekeeper_rules::{
    Advance, AnyEngine, Present, ScoringEngine, Sport, SportPreset, TennisRules,
    TennisScoreLabel,
};

fn tennis(players: usize) -> ScoringEngine<TennisRules> {
    let sport = Sport::new("Tennis", true, players, 6, "Game", true).unwrap();
    ScoringEngine::new(sport, TennisRules)
}

fn points(game: &mut ScoringEngine<TennisRules>, team: usize, count: usize) {
    for _ in 0..count {
        game.add_score(team, 1).unwrap();
    }
}

#[test]
fn test_score_labels() {
    assert_eq!(TennisScoreLabel::score(0, 0), TennisScoreLabel::Love);
    assert_eq!(TennisScoreLabel::score(3, 3), TennisScoreLabel::Deuce);
    assert_eq!(TennisScoreLabel::score(4, 2), TennisScoreLabel::Game);
    assert_eq!(TennisScoreLabel::score(3, 4), TennisScoreLabel::Disadvantage);
    assert_eq!(TennisScoreLabel::score(4, 3), TennisScoreLabel::Advantage);
}

#[test]
fn test_interval_ends_on_two_point_lead_from_game() {
    let mut game = tennis(2);
    points(&mut game, 1, 3);
    points(&mut game, 2, 2);
    assert!(!game.is_interval_over(1));

    points(&mut game, 1, 1);
    points(&mut game, 2, 2);
    assert!(!game.is_interval_over(1), "4-4 is level");

    points(&mut game, 2, 1);
    assert!(!game.is_interval_over(1));
    points(&mut game, 2, 1);
    assert!(game.is_interval_over(1), "4-6 is decided");
}

#[test]
fn test_advance_if_over_moves_to_next_game() {
    let mut game = tennis(2);
    points(&mut game, 1, 4);
    assert_eq!(game.advance_if_over(), Ok(Some(Advance::Next(2))));
    assert_eq!(game.current_interval_text(), "2nd Game");
    assert_eq!(game.advance_if_over(), Ok(None));
}

#[test]
fn test_in_progress_game_never_counts_as_win() {
    let mut game = tennis(2);
    points(&mut game, 1, 4);
    game.advance_if_over().unwrap();
    points(&mut game, 2, 3);

    assert_eq!(game.total_wins(1), 1);
    assert_eq!(game.total_wins(2), 0);
}

#[test]
fn test_doubles_board_needs_every_match_finished() {
    let mut game = tennis(4);
    points(&mut game, 1, 4);
    assert!(!game.is_interval_over(1));
    assert_eq!(game.total_wins(1), 0);

    points(&mut game, 4, 4);
    assert!(game.is_interval_over(1));
    assert_eq!(game.total_wins(1), 1);
    assert_eq!(game.total_wins(2), 0);
    assert_eq!(game.total_wins(3), 0);
    assert_eq!(game.total_wins(4), 1);
}

#[test]
fn test_team_without_opponent_has_no_wins() {
    let mut game = tennis(3);
    points(&mut game, 3, 10);
    points(&mut game, 1, 4);
    assert_eq!(game.total_wins(3), 0);
    assert_eq!(game.total_wins(1), 1);
    assert_eq!(game.score_label(3, 1), None);
}

#[test]
fn test_six_games_then_final_score() {
    let mut game = tennis(2);
    for interval in 1..=6 {
        let winner = if interval % 3 == 0 { 2 } else { 1 };
        points(&mut game, winner, 4);
        let advance = game.advance_if_over().unwrap();
        if interval < 6 {
            assert_eq!(advance, Some(Advance::Next(interval + 1)));
        } else {
            assert_eq!(advance, Some(Advance::Completed));
        }
    }
    assert!(game.is_game_over());
    assert_eq!(game.total_wins(1), 4);
    assert_eq!(game.total_wins(2), 2);

    let board = game.scoreboard();
    assert_eq!(board.title(), "Game over");
    assert_eq!(board.totals().cells(), &vec!["4".to_string(), "2".to_string()]);
    assert_eq!(board.rows()[2].cells()[1], "Game");
}

#[test]
fn test_any_engine_reports_wins_as_standing() {
    let mut game = SportPreset::tennis().start(2).unwrap();
    assert!(game.auto_advance());
    for _ in 0..4 {
        game.add_score(2, 1).unwrap();
    }
    game.advance_if_over().unwrap();
    assert_eq!(game.standing(2), 1);
    assert_eq!(game.run_total(2), 4);

    let AnyEngine::Tennis(engine) = &game else {
        panic!("Expected tennis engine");
    };
    assert_eq!(engine.score_label(2, 1), Some(TennisScoreLabel::Game));
    assert_eq!(engine.score_label(1, 1), Some(TennisScoreLabel::Love));
}

#[test]
fn test_final_scoreboard_serializes_without_layout() {
    let mut game = tennis(2);
    for _ in 1..=6 {
        points(&mut game, 1, 4);
        game.advance_if_over().unwrap();
    }
    assert!(game.is_game_over());

    let json = serde_json::to_value(game.scoreboard()).unwrap();
    assert_eq!(json["title"], "Game over");
    assert_eq!(json["totals"]["label"], "Final score:");
    assert_eq!(json["totals"]["cells"], serde_json::json!(["6", "0"]));
    assert_eq!(json["headers"], serde_json::json!(["Team 1", "Team 2"]));
    assert!(json.get("label_width").is_none());
    assert!(json.get("cell_width").is_none());
}
