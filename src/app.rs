//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to the booking screen and the
//! dialogs laid over it. App coordinates; it does not own booking state.

use crate::action::Action;
use crate::component::Component;
use crate::components::{BookingSummaryScreen, HelpDialog, QuitDialog};
use crate::config::Config;
use crate::model::Booking;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use log::{debug, info};
use ratatui::{layout::Rect, Frame};

/// Dialog drawn over the booking screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    QuitConfirm,
}

/// Main application state - coordinates between components
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Dialog currently capturing input, if any
    pub overlay: Option<Overlay>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub screen: BookingSummaryScreen,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

impl App {
    pub fn new(config: &Config) -> App {
        Self::with_booking(Booking::sample(), config)
    }

    pub fn with_booking(booking: Booking, config: &Config) -> App {
        App {
            should_quit: false,
            overlay: None,
            screen: BookingSummaryScreen::new(booking, config.slider),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog::default(),
        }
    }

    fn open(&mut self, overlay: Overlay) {
        debug!("opening {:?}", overlay);
        self.screen.cancel_slide();
        self.overlay = Some(overlay);
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.overlay {
            Some(Overlay::Help) => self.help_dialog.handle_key_event(key),
            Some(Overlay::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            None => self.screen.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.overlay.is_some() && matches!(mouse.kind, MouseEventKind::Up(_)) {
            if let Some(action) = self.screen.handle_mouse_event(mouse)? {
                return Ok(Some(action));
            }
        }
        match self.overlay {
            Some(Overlay::Help) => self.help_dialog.handle_mouse_event(mouse),
            Some(Overlay::QuitConfirm) => self.quit_dialog.handle_mouse_event(mouse),
            None => self.screen.handle_mouse_event(mouse),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(w, h) => {
                debug!("terminal resized to {}x{}", w, h);
            }
            Action::ForceQuit => {
                info!("quitting");
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Dialogs
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.open(Overlay::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.open(Overlay::Help);
            }
            Action::CloseDialog => {
                self.overlay = None;
            }

            // Everything else belongs to the booking screen
            other => return self.screen.update(other),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.screen.draw(frame, area)?;

        match self.overlay {
            Some(Overlay::Help) => self.help_dialog.draw(frame, area)?,
            Some(Overlay::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            None => {}
        }
        Ok(())
    }
}
