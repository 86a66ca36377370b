//! Menu loop tests.

use scorekeeper::{Console, Menu, SportCatalog};
use scorekeeper_rules::Ending;
use std::io::Cursor;

fn run_menu(script: &str) -> (usize, Vec<Option<Ending>>, String) {
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let games = Menu::new(SportCatalog::builtin()).run(&mut console).unwrap();
    let endings = games.iter().map(|game| game.ending()).collect();
    let output = String::from_utf8(console.into_parts().1).unwrap();
    (games.len(), endings, output)
}

#[test]
fn test_unknown_choice_reprompts() {
    let (games, _, output) = run_menu("x\nq\n");
    assert_eq!(games, 0);
    assert!(output.contains("Enter valid choice (h for help):"));
}

#[test]
fn test_golf_asks_for_players() {
    let (games, endings, output) = run_menu("g\n7\n2\n1 4\n2 5\nq\nq\n");
    assert_eq!(games, 1);
    assert_eq!(endings, vec![Some(Ending::Quit)]);
    assert!(output.contains("Enter number of players (1->4): "));
    assert!(output.contains("(try again)"));
    // Instructions are shown again after the game.
    assert_eq!(output.matches("'q' to quit the program").count(), 2);
}

#[test]
fn test_football_skips_player_prompt() {
    let (games, _, output) = run_menu("F\nq\n");
    assert_eq!(games, 1);
    assert!(!output.contains("Enter number of players"));
}

#[test]
fn test_end_of_input_leaves_menu() {
    let (games, _, _) = run_menu("t\n");
    assert_eq!(games, 0);
}
