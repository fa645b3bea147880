//! Booking confirmed view
//!
//! Replaces the whole screen once payment is confirmed. The only thing
//! left to do from here is leave.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::PaymentOption;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

pub struct ConfirmationView {
    pub paid_with: PaymentOption,
}

impl ConfirmationView {
    pub fn new(paid_with: PaymentOption) -> Self {
        Self { paid_with }
    }

    pub fn content(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "  ✔  ",
                Style::default()
                    .fg(Color::Green)
                    .bg(Color::Rgb(20, 60, 30))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Booking Confirmed!",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Your payment has been received. Your e-ticket is being processed.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format!("Paid with {}", self.paid_with.label()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " q ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Exit"),
            ]),
        ]
    }
}

impl Component for ConfirmationView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Some(Action::ForceQuit),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(Color::Reset)), area);

        let content = self.content();
        let popup = centered_popup(area, 44, content.len() as u16 + 2);
        let paragraph = Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup);
        Ok(())
    }
}
