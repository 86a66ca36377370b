//! Line-oriented console front end.
//!
//! The console reads one request per line and writes prompts, help and
//! scoreboards. Input and output are generic so sessions can be scripted.

mod menu;
mod request;
mod session;

pub use menu::Menu;
pub use request::{Request, RequestError};
pub use session::{GameSession, INVALID_REQUEST};

use derive_new::new;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::trace;

/// A line reader paired with a writer.
#[derive(Debug, new)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Reads one line without its line ending. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("End of input");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(line = %trimmed, "Read line");
        Ok(Some(trimmed))
    }

    /// Writes `text` without a newline, flushes, then reads a line.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// The writer, for inspecting scripted sessions.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Splits the console back into its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
