//! Output stream plus the terminal facts that decide how text is decorated.

use crate::status::{Outcome, Tone};
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Stdout, Write};

pub struct IoStreams<W: Write> {
    pub out: W,
    stdin_tty: bool,
    stdout_tty: bool,
    stderr_tty: bool,
    color_enabled: bool,
}

impl IoStreams<Stdout> {
    pub fn system() -> Self {
        let stdout_tty = io::stdout().is_terminal();
        let color_enabled = stdout_tty
            && std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").map_or(true, |t| t != "dumb");
        Self {
            out: io::stdout(),
            stdin_tty: io::stdin().is_terminal(),
            stdout_tty,
            stderr_tty: io::stderr().is_terminal(),
            color_enabled,
        }
    }
}

impl IoStreams<Vec<u8>> {
    /// In-memory streams: nothing is a terminal and color is off.
    pub fn test() -> Self {
        Self {
            out: Vec::new(),
            stdin_tty: false,
            stdout_tty: false,
            stderr_tty: false,
            color_enabled: false,
        }
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> IoStreams<W> {
    pub fn is_stderr_tty(&self) -> bool {
        self.stderr_tty
    }

    pub fn set_stdin_tty(&mut self, tty: bool) {
        self.stdin_tty = tty;
    }

    pub fn set_stdout_tty(&mut self, tty: bool) {
        self.stdout_tty = tty;
    }

    /// Prompting and spinners both need a person on both ends.
    pub fn can_prompt(&self) -> bool {
        self.stdin_tty && self.stdout_tty
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            color: self.color_enabled,
            unicode: self.stdout_tty,
        }
    }
}

/// Decorates text for the current output stream.
///
/// With color off every method returns its input unchanged, and with unicode
/// off the status glyphs fall back to ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    color: bool,
    unicode: bool,
}

impl ColorScheme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self { color, unicode }
    }

    pub fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn cyan(&self, s: &str) -> String {
        if self.color {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn gray(&self, s: &str) -> String {
        self.tone(Tone::Gray, s)
    }

    pub fn tone(&self, tone: Tone, s: &str) -> String {
        if !self.color {
            return s.to_string();
        }
        match tone {
            Tone::Green => s.green().to_string(),
            Tone::Red => s.red().to_string(),
            Tone::Yellow => s.yellow().to_string(),
            Tone::Gray => s.dark_grey().to_string(),
        }
    }

    /// Colored glyph for an outcome.
    pub fn symbol(&self, outcome: Outcome) -> String {
        let glyph = if self.unicode {
            outcome.glyph()
        } else {
            outcome.ascii_glyph()
        };
        self.tone(outcome.tone(), glyph)
    }

    /// Separates the run name from its ID in the header.
    pub fn separator(&self) -> &'static str {
        if self.unicode {
            "·"
        } else {
            "-"
        }
    }

    /// Marks text cut short by [`crate::text::truncate`].
    pub fn ellipsis(&self) -> &'static str {
        if self.unicode {
            "…"
        } else {
            "..."
        }
    }

    pub fn failure_icon(&self) -> String {
        self.symbol(Outcome::Failure)
    }
}
