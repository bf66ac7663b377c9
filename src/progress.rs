//! Braille spinner on stderr while requests are in flight.

use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::time::Duration;
use tokio::task::JoinHandle;

const BRAILLE_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const TICK: Duration = Duration::from_millis(80);

pub fn frame(idx: usize) -> char {
    BRAILLE_FRAMES[idx % BRAILLE_FRAMES.len()]
}

/// Spinner task; dropping it stops the animation and clears the line.
pub struct Progress {
    handle: JoinHandle<()>,
}

impl Progress {
    /// Must be called from inside a tokio runtime.
    pub fn start(label: &'static str) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TICK);
            let mut idx = 0usize;
            loop {
                ticker.tick().await;
                let mut err = io::stderr();
                if write!(err, "\r{} {label}", frame(idx)).and_then(|()| err.flush()).is_err() {
                    break;
                }
                idx = idx.wrapping_add(1);
            }
        });
        Self { handle }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.handle.abort();
        if let Err(e) = execute!(io::stderr(), MoveToColumn(0), Clear(ClearType::CurrentLine)) {
            tracing::warn!("failed to clear progress line: {e}");
        }
    }
}
