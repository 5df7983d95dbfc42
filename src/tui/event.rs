//! Terminal event polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events delivered to TUI applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Key press (releases and repeats are dropped)
    Key(KeyEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal was resized
    Resize,
    /// No input within the tick interval
    Tick,
}

/// Blocking event source backed by crossterm.
#[derive(Debug, Clone, Copy)]
pub struct EventHandler {
    tick_rate: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

impl EventHandler {
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, or returns `Tick` after the tick interval.
    pub fn next(&self) -> Result<TuiEvent> {
        loop {
            if !event::poll(self.tick_rate)? {
                return Ok(TuiEvent::Tick);
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(TuiEvent::Key(key)),
                Event::Paste(text) => return Ok(TuiEvent::Paste(text)),
                Event::Resize(..) => return Ok(TuiEvent::Resize),
                _ => {}
            }
        }
    }
}
