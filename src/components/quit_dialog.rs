//! Leave-checkout confirmation dialog

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::components::layout::contains;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const WIDTH: u16 = 44;
const HEIGHT: u16 = 8;

/// Asks before abandoning an unpaid booking
#[derive(Default)]
pub struct QuitDialog {
    /// Popup area from the last draw
    area: Rect,
}

impl QuitDialog {
    /// Row of the yes/no choices inside the popup
    fn choices_row(&self) -> u16 {
        self.area.y + HEIGHT - 3
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                Some(Action::CloseDialog)
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        if !contains(self.area, mouse.column, mouse.row) {
            return Ok(Some(Action::CloseDialog));
        }
        if mouse.row != self.choices_row() {
            return Ok(None);
        }
        // Left half is "leave", right half is "stay"
        let middle = self.area.x + self.area.width / 2;
        if mouse.column < middle {
            Ok(Some(Action::ForceQuit))
        } else {
            Ok(Some(Action::CloseDialog))
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.area = centered_popup(area, WIDTH, HEIGHT);
        frame.render_widget(Clear, self.area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Leave without paying?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "This booking has not been paid yet.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Leave      "),
                Span::styled(
                    " n ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Stay"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Leave checkout ")
                    .title_style(
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, self.area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn drawn() -> QuitDialog {
        let mut dialog = QuitDialog::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();
        dialog
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keys() {
        let mut dialog = QuitDialog::default();
        let y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(dialog.handle_key_event(y).unwrap(), Some(Action::ForceQuit));
        assert_eq!(dialog.handle_key_event(esc).unwrap(), Some(Action::CloseDialog));
    }

    #[test]
    fn test_clicks() {
        let mut dialog = drawn();
        // popup is 44x8 centred in 60x20: x 8..52, y 6..14
        assert_eq!(dialog.area, Rect::new(8, 6, 44, 8));
        assert_eq!(dialog.handle_mouse_event(click(15, 11)).unwrap(), Some(Action::ForceQuit));
        assert_eq!(dialog.handle_mouse_event(click(40, 11)).unwrap(), Some(Action::CloseDialog));
        assert_eq!(dialog.handle_mouse_event(click(20, 8)).unwrap(), None);
        assert_eq!(dialog.handle_mouse_event(click(0, 0)).unwrap(), Some(Action::CloseDialog));
    }
}
