//! Fare rules sheet
//!
//! A bottom sheet with fare rules, transit information and the baggage
//! policy. Whether it is shown is decided by the screen state; this view
//! only renders and reports dismissal.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{contains, fit, spread};
use crate::model::Booking;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const BUTTON_LABEL: &str = "I Understand";

/// Rules & info sheet
pub struct RulesModalView {
    booking: Booking,
    /// Sheet area from the last draw
    sheet: Rect,
    /// Dismiss button area from the last draw
    button: Rect,
}

impl RulesModalView {
    pub fn new(booking: Booking) -> Self {
        Self {
            booking,
            sheet: Rect::default(),
            button: Rect::default(),
        }
    }

    #[cfg(test)]
    pub fn sheet_area(&self) -> Rect {
        self.sheet
    }

    #[cfg(test)]
    pub fn button_area(&self) -> Rect {
        self.button
    }

    /// Content lines for the given inner width
    pub fn content(&self, width: u16) -> Vec<Line<'static>> {
        let rules = &self.booking.fare_rules;
        let label = Style::default().fg(Color::Gray);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            section_title("⚠ FARE RULES", Color::Rgb(249, 115, 22)),
            spread(
                vec![Span::styled("Cancellation Fee", label)],
                vec![Span::styled(rules.cancellation_fee.clone(), value)],
                width,
            ),
            spread(
                vec![Span::styled("Reschedule Fee", label)],
                vec![Span::styled(rules.reschedule_fee.clone(), value)],
                width,
            ),
            spread(
                vec![Span::styled("Refundable", label)],
                vec![Span::styled(
                    rules.refundable.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )],
                width,
            ),
            Line::from(""),
            section_title("⌖ TRANSIT INFORMATION", Color::Blue),
            Line::from(Span::styled(self.booking.transit_note(), label)),
            Line::from(""),
            section_title("ⓘ BAGGAGE POLICY", Color::Magenta),
        ];

        for item in &rules.baggage_policy {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Magenta)),
                Span::styled(item.clone(), label),
            ]));
        }

        lines
    }
}

fn section_title(title: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

impl Component for RulesModalView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('r') => {
                Some(Action::CloseRules)
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        // Backdrop or button dismisses; clicks on the sheet itself do not
        let on_button = contains(self.button, mouse.column, mouse.row);
        let on_sheet = contains(self.sheet, mouse.column, mouse.row);
        if on_button || !on_sheet {
            Ok(Some(Action::CloseRules))
        } else {
            Ok(None)
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Dim the screen behind the sheet
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(20, 20, 20)).fg(Color::DarkGray)),
            area,
        );

        let inner_width = area.width.saturating_sub(4);
        let content = self.content(inner_width);
        // Wrapped paragraphs may take more rows than lines
        let content_rows: u16 = content
            .iter()
            .map(|l| {
                let w = l.width() as u16;
                if inner_width == 0 {
                    1
                } else {
                    w.div_ceil(inner_width).max(1)
                }
            })
            .sum();

        // borders + title gap + content + gap + button
        let height = (content_rows + 6).min(area.height);
        let sheet = Rect::new(
            area.x,
            area.y + area.height - height,
            area.width,
            height,
        );
        self.sheet = sheet;

        frame.render_widget(Clear, sheet);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray))
            .title(" Rules & Info ")
            .title_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(Line::from(" Esc close ").right_aligned());
        let inner = block.inner(sheet).inner(Margin {
            vertical: 0,
            horizontal: 1,
        });
        frame.render_widget(block, sheet);

        let bounds = frame.area();
        let text_area = Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            inner.height.saturating_sub(3),
        );
        if let Some(text_area) = fit(text_area, bounds) {
            frame.render_widget(
                Paragraph::new(content).wrap(Wrap { trim: false }),
                text_area,
            );
        }

        let button_width = (BUTTON_LABEL.len() as u16 + 4).min(inner.width);
        let button = Rect::new(
            inner.x + (inner.width.saturating_sub(button_width)) / 2,
            inner.y + inner.height.saturating_sub(1),
            button_width,
            1,
        );
        let Some(button) = fit(button, inner.intersection(bounds)) else {
            self.button = Rect::default();
            return Ok(());
        };
        self.button = button;
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                BUTTON_LABEL,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )))
            .style(Style::default().bg(Color::White))
            .alignment(Alignment::Center),
            button,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drawn_modal() -> RulesModalView {
        let mut modal = RulesModalView::new(Booking::sample());
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal
            .draw(|frame| modal.draw(frame, frame.area()).unwrap())
            .unwrap();
        modal
    }

    #[test]
    fn test_content_lists_fees_and_policy() {
        let modal = RulesModalView::new(Booking::sample());
        let text: Vec<String> = modal
            .content(50)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert!(text.iter().any(|l| l.contains("Rp 500.000 / pax")));
        assert!(text.iter().any(|l| l.contains("Yes (Partial)")));
        assert!(text.iter().any(|l| l.contains("GA880")));
        assert!(text.iter().any(|l| l.contains("20.000 mAh")));
    }

    #[test]
    fn test_escape_closes() {
        let mut modal = RulesModalView::new(Booking::sample());
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(modal.handle_key_event(key).unwrap(), Some(Action::CloseRules));
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut modal = drawn_modal();
        let sheet = modal.sheet_area();
        assert!(sheet.y > 0);
        assert_eq!(modal.handle_mouse_event(click(1, 0)).unwrap(), Some(Action::CloseRules));
        assert_eq!(
            modal
                .handle_mouse_event(click(sheet.x + 2, sheet.y + 2))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_button_click_closes() {
        let mut modal = drawn_modal();
        let button = modal.button_area();
        assert!(button.width > 0);
        assert_eq!(
            modal.handle_mouse_event(click(button.x, button.y)).unwrap(),
            Some(Action::CloseRules)
        );
    }
}
