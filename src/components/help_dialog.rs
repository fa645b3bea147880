//! Help dialog component
//!
//! Lists the keyboard and mouse controls of the booking screen.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseDialog),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = centered_popup(area, 58, area.height.saturating_sub(4));

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(Clear, dialog_area);
        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible_height))
                .position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.chars().count() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default()
                    .fg(Color::Rgb(249, 115, 22))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Trip Details");
    add_shortcut(&mut lines, "p", "Expand / collapse passengers & baggage");
    add_shortcut(&mut lines, "b", "Expand / collapse price breakdown");
    add_shortcut(&mut lines, "r", "Open rules & transit info");

    add_section(&mut lines, "Payment Method");
    add_shortcut(&mut lines, "1 / 2", "Card / BCA Virtual Account");
    add_shortcut(&mut lines, "j / ↓", "Next payment method");
    add_shortcut(&mut lines, "k / ↑", "Previous payment method");

    add_section(&mut lines, "Slide to Pay");
    add_shortcut(&mut lines, "Drag thumb", "Slide right past 90% to pay");
    add_shortcut(&mut lines, "l / →", "Push the thumb right");
    add_shortcut(&mut lines, "h / ←", "Pull the thumb left");
    add_shortcut(&mut lines, "Enter", "Let go of the thumb");

    add_section(&mut lines, "Scrolling");
    add_shortcut(&mut lines, "Wheel", "Scroll the summary");
    add_shortcut(&mut lines, "Ctrl+e / y", "Scroll down / up one line");
    add_shortcut(&mut lines, "Ctrl+d / u", "Scroll down / up one page");
    add_shortcut(&mut lines, "PgDn / PgUp", "Scroll down / up one page");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q / Esc", "Quit / Close dialog");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_lists_booking_shortcuts() {
        let content = text(&build_help_content());
        assert!(content.contains("Open rules & transit info"));
        assert!(content.contains("Slide right past 90% to pay"));
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(dialog.handle_key_event(key).unwrap(), Some(Action::CloseDialog));
        }
    }

    #[test]
    fn test_scroll_does_not_underflow() {
        let mut dialog = HelpDialog::default();
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        dialog.handle_key_event(up).unwrap();
        assert_eq!(dialog.scroll_offset, 0);
    }
}
