//! Scoring one game from the console.

use super::{Console, Request};
use anyhow::Result;
use scorekeeper_rules::{Advance, AnyEngine, EntryMode, Present};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Reply to a line that is neither a command nor a valid score.
pub const INVALID_REQUEST: &str = "Invalid request, hit letter h for help";

/// A game being scored from the console.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: AnyEngine,
    entry: EntryMode,
    json: bool,
}

impl GameSession {
    /// Creates a session for a freshly started game.
    #[instrument(skip(engine), fields(sport = %engine.sport().name()))]
    pub fn new(engine: AnyEngine, entry: EntryMode) -> Self {
        Self {
            engine,
            entry,
            json: false,
        }
    }

    /// Also prints the final scoreboard as JSON.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// The game being scored.
    pub fn engine(&self) -> &AnyEngine {
        &self.engine
    }

    /// Ends the session, handing back the game.
    pub fn into_engine(self) -> AnyEngine {
        self.engine
    }

    /// How to score this game.
    pub fn scoring_text(&self) -> &'static str {
        let team_sport = *self.engine.sport().team_sport();
        match (self.entry, team_sport) {
            (EntryMode::EnterPoints, true) => {
                "Enter team id followed by score (i.e. 1 7 meaning team 1 got 7 points)"
            }
            (EntryMode::EnterPoints, false) => {
                "Enter player id followed by score (i.e. 1 3 means person 1 got 3 points)"
            }
            (EntryMode::OnePoint, true) => "Enter team id and I'll bump the score by 1 point :)",
            (EntryMode::OnePoint, false) => {
                "Enter player id and I'll bump the score by 1 point :)"
            }
        }
    }

    /// Help shown at the start of the game and on `h`.
    pub fn help_text(&self) -> String {
        let sport = self.engine.sport();
        let competitors = if *sport.team_sport() {
            "Teams available"
        } else {
            "Players"
        };

        let mut text = String::from("\n\n");
        text.push_str(&format!("{:<18}{}\n", "Sport", sport.name()));
        text.push_str(&format!("{:<18}{}\n", competitors, sport.teams()));
        text.push_str(&format!(
            "{:<18}{}\n\n",
            "Currently",
            self.engine.current_interval_text()
        ));
        text.push_str(self.scoring_text());
        text.push('\n');
        if !self.engine.auto_advance() {
            text.push_str(&format!(
                "Enter + to advance to the next {}\n",
                sport.interval_name()
            ));
        }
        text.push_str("Enter s to see current score\n");
        text.push_str("Enter h to see this help\n");
        text.push_str("Enter q to quit early :(\n");
        text.push_str("\nEnter your request and hit enter >");
        text
    }

    /// Scores the game until it ends, the scorer quits, or input runs out.
    #[instrument(skip_all, fields(sport = %self.engine.sport().name()))]
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.say(self.help_text())?;

        while !self.engine.is_game_over() {
            let prompt = format!("{}>", self.engine.current_interval_text());
            let Some(line) = console.prompt(&prompt)? else {
                info!("Input closed, quitting game");
                self.engine.quit();
                break;
            };

            match Request::parse(&line, self.entry, self.engine.teams()) {
                Ok(request) => self.apply(request, console)?,
                Err(e) => {
                    debug!(error = %e, line = %line, "Rejected request");
                    console.say(INVALID_REQUEST)?;
                }
            }

            if let Some(advance) = self.engine.advance_if_over()? {
                self.announce(advance, console)?;
            }
        }

        info!(ending = ?self.engine.ending(), "Session finished");
        Ok(())
    }

    /// Applies one parsed request.
    #[instrument(skip(self, console))]
    pub fn apply<R: BufRead, W: Write>(
        &mut self,
        request: Request,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        match request {
            Request::Help => console.say(self.help_text())?,
            Request::Quit => self.engine.quit(),
            Request::Advance if self.engine.auto_advance() => {
                debug!("Ignoring manual advance, intervals end on score");
            }
            Request::Advance => {
                let advance = self.engine.advance_interval()?;
                self.announce(advance, console)?;
            }
            Request::Show => console.say(self.engine.scoreboard())?,
            Request::Score { team, points } => self.engine.add_score(team, points)?,
        }
        Ok(())
    }

    fn announce<R: BufRead, W: Write>(
        &self,
        advance: Advance,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        info!(%advance, "Interval closed");
        if advance == Advance::Completed {
            let scoreboard = self.engine.scoreboard();
            console.say(format!("\n\n{}", scoreboard))?;
            if self.json {
                console.say(serde_json::to_string_pretty(&scoreboard)?)?;
            }
        }
        Ok(())
    }
}
