//! Parsing of scorer requests.

use derive_more::{Display, Error};
use scorekeeper_rules::EntryMode;
use tracing::instrument;

/// One scorer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Show the help text (`h`).
    Help,
    /// Quit the game early (`q`).
    Quit,
    /// Advance to the next interval (`+`).
    Advance,
    /// Show the scoreboard (`s`).
    Show,
    /// Credit points to a team.
    Score {
        /// 1-based team id.
        team: usize,
        /// Points scored.
        points: i64,
    },
}

/// Why a line is not a valid request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RequestError {
    /// Nothing was typed.
    #[display("Empty request")]
    Empty,
    /// The wrong number of values for the sport's entry mode.
    #[display("Expected {expected} values, got {got}")]
    WrongCount {
        /// Values the entry mode needs.
        expected: usize,
        /// Values typed.
        got: usize,
    },
    /// A value is not a whole number.
    #[display("Not a number: {token}")]
    NotANumber {
        /// Offending text.
        token: String,
    },
    /// The team id is outside the game.
    #[display("No team {team} (teams are 1 to {teams})")]
    UnknownTeam {
        /// Team id typed.
        team: usize,
        /// Teams in the game.
        teams: usize,
    },
}

impl Request {
    /// Parses a line typed during a game.
    ///
    /// Single-letter commands are case-insensitive. Anything else is a score
    /// entry: `<team> <points>` when the scorer enters points, `<team>` when
    /// each entry is worth one point.
    #[instrument]
    pub fn parse(line: &str, entry: EntryMode, teams: usize) -> Result<Self, RequestError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => return Err(RequestError::Empty),
            [command] => match *command {
                "h" | "H" => return Ok(Request::Help),
                "q" | "Q" => return Ok(Request::Quit),
                "+" => return Ok(Request::Advance),
                "s" | "S" => return Ok(Request::Show),
                _ => {}
            },
            _ => {}
        }

        let expected = match entry {
            EntryMode::EnterPoints => 2,
            EntryMode::OnePoint => 1,
        };
        if tokens.len() != expected {
            return Err(RequestError::WrongCount {
                expected,
                got: tokens.len(),
            });
        }

        let team = parse_number::<usize>(tokens[0])?;
        let points = match tokens.get(1) {
            Some(token) => parse_number::<i64>(token)?,
            None => EntryMode::DEFAULT_POINTS,
        };
        if team == 0 || team > teams {
            return Err(RequestError::UnknownTeam { team, teams });
        }
        Ok(Request::Score { team, points })
    }
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, RequestError> {
    token.parse().map_err(|_| RequestError::NotANumber {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        let parse = |line| Request::parse(line, EntryMode::EnterPoints, 2);
        assert_eq!(parse("h"), Ok(Request::Help));
        assert_eq!(parse(" Q "), Ok(Request::Quit));
        assert_eq!(parse("+"), Ok(Request::Advance));
        assert_eq!(parse("S"), Ok(Request::Show));
    }

    #[test]
    fn test_score_with_points() {
        assert_eq!(
            Request::parse("1   7", EntryMode::EnterPoints, 2),
            Ok(Request::Score { team: 1, points: 7 })
        );
        assert_eq!(
            Request::parse("2 -3", EntryMode::EnterPoints, 2),
            Ok(Request::Score {
                team: 2,
                points: -3
            })
        );
    }

    #[test]
    fn test_one_point_entry() {
        assert_eq!(
            Request::parse("2", EntryMode::OnePoint, 2),
            Ok(Request::Score { team: 2, points: 1 })
        );
        assert_eq!(
            Request::parse("2 3", EntryMode::OnePoint, 2),
            Err(RequestError::WrongCount {
                expected: 1,
                got: 2
            })
        );
    }

    #[test]
    fn test_missing_points() {
        assert_eq!(
            Request::parse("1", EntryMode::EnterPoints, 2),
            Err(RequestError::WrongCount {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_bad_numbers() {
        assert!(matches!(
            Request::parse("x 7", EntryMode::EnterPoints, 2),
            Err(RequestError::NotANumber { .. })
        ));
        assert!(matches!(
            Request::parse("1 seven", EntryMode::EnterPoints, 2),
            Err(RequestError::NotANumber { .. })
        ));
        assert_eq!(Request::parse("   ", EntryMode::OnePoint, 2), Err(RequestError::Empty));
    }

    #[test]
    fn test_team_out_of_range() {
        assert_eq!(
            Request::parse("3 7", EntryMode::EnterPoints, 2),
            Err(RequestError::UnknownTeam { team: 3, teams: 2 })
        );
        assert!(Request::parse("0", EntryMode::OnePoint, 2).is_err());
    }
}
