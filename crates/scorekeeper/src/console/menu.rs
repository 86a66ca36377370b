//! The top-level sport menu.

use super::{Console, GameSession};
use crate::config::SportCatalog;
use anyhow::Result;
use scorekeeper_rules::{AnyEngine, SportPreset};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const CHOICE_PROMPT: &str = "Enter choice: ";
const INVALID_CHOICE_PROMPT: &str = "Enter valid choice (h for help):";

/// Lets the scorer pick sports from a catalog and score games until they quit.
#[derive(Debug, Clone)]
pub struct Menu {
    catalog: SportCatalog,
    json: bool,
}

impl Menu {
    /// Creates a menu over a validated catalog.
    pub fn new(catalog: SportCatalog) -> Self {
        Self {
            catalog,
            json: false,
        }
    }

    /// Also prints final scoreboards as JSON.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// The sports on offer.
    pub fn catalog(&self) -> &SportCatalog {
        &self.catalog
    }

    /// The menu text: one line per sport, then help and quit.
    pub fn instructions(&self) -> String {
        let mut text =
            String::from("\n\n\nEnter one of the following characters below (no quotes):\n");
        for preset in self.catalog.sports() {
            text.push_str(&format!(
                "'{}' to score a {} game\n",
                preset.key(),
                preset.name().to_lowercase()
            ));
        }
        text.push_str("\n'h' help (this text)\n");
        text.push_str("'q' to quit the program");
        text
    }

    /// Runs the menu until `q` or end of input, returning every game played.
    #[instrument(skip_all, fields(sports = self.catalog.sports().len()))]
    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Vec<AnyEngine>> {
        let mut played = Vec::new();
        let mut choice = Some('h');

        loop {
            let mut prompt = CHOICE_PROMPT;
            match choice {
                None => {
                    info!("Input closed, leaving menu");
                    break;
                }
                Some('q' | 'Q') => {
                    info!("Leaving menu");
                    break;
                }
                Some('h' | 'H') => console.say(self.instructions())?,
                Some(key) => match self.catalog.by_key(key) {
                    Some(preset) => {
                        if let Some(engine) = self.play(preset, None, console)? {
                            played.push(engine);
                        }
                        choice = Some('h');
                        continue;
                    }
                    None => {
                        debug!(%key, "Unknown menu choice");
                        prompt = INVALID_CHOICE_PROMPT;
                    }
                },
            }
            choice = console.prompt(prompt)?.map(|line| first_char(&line));
        }

        Ok(played)
    }

    /// Scores one game of `preset`.
    ///
    /// Asks for the player count unless it is given or fixed by the preset.
    /// Returns `None` when input ends before a count is chosen.
    #[instrument(skip(self, preset, console), fields(sport = %preset.name()))]
    pub fn play<R: BufRead, W: Write>(
        &self,
        preset: &SportPreset,
        players: Option<usize>,
        console: &mut Console<R, W>,
    ) -> Result<Option<AnyEngine>> {
        let players = match players.or_else(|| preset.fixed_players()) {
            Some(players) => players,
            None => match ask_players(preset, console)? {
                Some(players) => players,
                None => return Ok(None),
            },
        };

        let engine = preset.start(players)?;
        info!(players, "Starting game");
        let mut session = GameSession::new(engine, *preset.entry()).with_json(self.json);
        session.run(console)?;
        Ok(Some(session.into_engine()))
    }
}

/// The menu choice on a line: its first non-blank character.
fn first_char(line: &str) -> char {
    line.trim().chars().next().unwrap_or(' ')
}

/// Prompts until a count within the preset's range is entered.
fn ask_players<R: BufRead, W: Write>(
    preset: &SportPreset,
    console: &mut Console<R, W>,
) -> Result<Option<usize>> {
    let (min, max) = (*preset.min_players(), *preset.max_players());
    let base = format!("Enter number of players ({}->{}): ", min, max);
    let mut prompt = base.clone();

    loop {
        let Some(line) = console.prompt(&prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(players) if (min..=max).contains(&players) => return Ok(Some(players)),
            _ => {
                warn!(input = %line, min, max, "Invalid player count");
                prompt = format!("{} (try again): ", base);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_instructions_list_every_sport() {
        let text = Menu::new(SportCatalog::builtin()).instructions();
        assert!(text.contains("'f' to score a football game"));
        assert!(text.contains("'t' to score a tennis game"));
        assert!(text.contains("'g' to score a golf game"));
        assert!(text.contains("'q' to quit the program"));
    }

    #[test]
    fn test_first_char_handles_blank_lines() {
        assert_eq!(first_char("  g "), 'g');
        assert_eq!(first_char(""), ' ');
    }

    #[test]
    fn test_ask_players_retries_out_of_range() {
        let mut console = Console::new(Cursor::new("9\nx\n3\n"), Vec::new());
        let players = ask_players(&SportPreset::golf(), &mut console).unwrap();
        assert_eq!(players, Some(3));

        let output = String::from_utf8(console.into_parts().1).unwrap();
        assert_eq!(output.matches("(try again)").count(), 2);
    }

    #[test]
    fn test_ask_players_gives_up_at_end_of_input() {
        let mut console = Console::new(Cursor::new("0\n"), Vec::new());
        let players = ask_players(&SportPreset::tennis(), &mut console).unwrap();
        assert_eq!(players, None);
    }
}
