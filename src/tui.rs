//! Terminal session
//!
//! Owns the crossterm backend for the lifetime of the app: raw mode, the
//! alternate screen and mouse capture go on in `enter` and come off in
//! `exit`, which is safe to call more than once.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// How long `next_event` waits before reporting a tick
    tick_rate: Duration,
    /// Raw mode and alternate screen are on
    active: bool,
}

impl Tui {
    pub fn new(tick_rate: Duration) -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            tick_rate,
            active: false,
        })
    }

    /// Switch the terminal into application mode
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        self.active = true;
        self.terminal.clear()?;
        debug!("terminal session started, tick rate {:?}", self.tick_rate);
        Ok(())
    }

    /// Give the terminal back to the shell
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        )?;
        debug!("terminal session ended");
        Ok(())
    }

    /// Wait up to the tick rate for an input worth handling.
    ///
    /// `None` means the wait timed out, or the event was filtered out by
    /// `is_relevant`.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }
        let event = event::read()?;
        Ok(is_relevant(&event).then_some(event))
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Key releases and repeats (reported on Windows) and bare pointer motion
/// are dropped; nothing on screen reacts to them.
fn is_relevant(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind == KeyEventKind::Press,
        Event::Mouse(mouse) => mouse.kind != MouseEventKind::Moved,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    };

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_release_is_dropped() {
        let press = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        assert!(is_relevant(&Event::Key(press)));
        assert!(!is_relevant(&Event::Key(release)));
    }

    #[test]
    fn test_hover_is_dropped_but_drag_kept() {
        assert!(!is_relevant(&mouse(MouseEventKind::Moved)));
        assert!(is_relevant(&mouse(MouseEventKind::Drag(MouseButton::Left))));
        assert!(is_relevant(&mouse(MouseEventKind::Up(MouseButton::Left))));
        assert!(is_relevant(&Event::Resize(80, 24)));
    }
}
