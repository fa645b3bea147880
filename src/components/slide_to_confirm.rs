//! Slide-to-pay control
//!
//! Translates terminal mouse and key input into gesture actions, drives the
//! `SlideGesture` state machine and reports `SlideComplete` once a release
//! crosses the commit threshold.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::contains;
use crate::config::SliderConfig;
use crate::model::{SlideGeometry, SlideGesture, SlideOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Cells moved per arrow key press
const NUDGE_CELLS: f32 = 2.0;

const LABEL: &str = "Slide to pay ";
const CHEVRONS: &str = ">>>";

pub struct SlideToConfirmControl {
    gesture: SlideGesture,
    config: SliderConfig,
    /// Track interior (inside the border) from the last draw
    track: Rect,
}

impl SlideToConfirmControl {
    pub fn new(config: SliderConfig) -> Self {
        let geometry = SlideGeometry::cells(
            config.fixed_track_width.unwrap_or(0),
            config.thumb_width,
            config.track_padding,
        );
        Self {
            gesture: SlideGesture::new(geometry),
            config,
            track: Rect::default(),
        }
    }

    #[cfg(test)]
    pub fn gesture(&self) -> &SlideGesture {
        &self.gesture
    }

    /// Interior of the track from the last draw
    #[cfg(test)]
    pub fn track_area(&self) -> Rect {
        self.track
    }

    /// Drop any drag in progress; the thumb goes back to the start
    pub fn cancel(&mut self) {
        if self.gesture.is_dragging() {
            debug!("slide cancelled");
        }
        self.gesture.cancel();
    }

    /// Rows the control occupies
    pub fn height() -> u16 {
        3
    }

    /// Screen column where the thumb starts
    pub fn thumb_column(&self) -> u16 {
        let offset = self.gesture.offset().round() as u16;
        let column = self.track.x + self.config.track_padding + offset;
        let last = (self.track.x + self.track.width).saturating_sub(self.config.thumb_width);
        column.min(last.max(self.track.x))
    }

    /// Pointer column relative to the start of the track
    fn track_x(&self, column: u16) -> f32 {
        f32::from(column) - f32::from(self.track.x)
    }

    fn over_thumb(&self, column: u16, row: u16) -> bool {
        let thumb = Rect::new(self.thumb_column(), self.track.y, self.config.thumb_width, 1);
        contains(thumb, column, row)
    }

    /// Re-measure the track, unless a fixed width is configured
    fn measure(&mut self, track: Rect) {
        self.track = track;
        let width = self.config.fixed_track_width.unwrap_or(track.width);
        let geometry =
            SlideGeometry::cells(width, self.config.thumb_width, self.config.track_padding);
        if geometry != self.gesture.geometry() {
            self.gesture.set_geometry(geometry);
        }
    }
}

impl Component for SlideToConfirmControl {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Right | KeyCode::Char('l') => Some(Action::SlideNudge(NUDGE_CELLS)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::SlideNudge(-NUDGE_CELLS)),
            KeyCode::Enter if self.gesture.is_dragging() => Some(Action::SlideRelease),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let on_track = contains(self.track, mouse.column, mouse.row);
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left)
                if self.over_thumb(mouse.column, mouse.row) =>
            {
                Some(Action::SlidePress(self.track_x(mouse.column)))
            }
            // Only a held button moves the thumb; a bare hover never does
            MouseEventKind::Drag(MouseButton::Left) if self.gesture.is_dragging() => {
                if on_track {
                    Some(Action::SlideDrag(self.track_x(mouse.column)))
                } else {
                    // Leaving the track ends the gesture
                    Some(Action::SlideRelease)
                }
            }
            MouseEventKind::Up(MouseButton::Left) if self.gesture.is_dragging() => {
                Some(Action::SlideRelease)
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SlidePress(x) => {
                self.gesture.press(x);
                debug!("slide started at {:.1}", x);
            }
            Action::SlideDrag(x) => {
                self.gesture.drag_to(x);
            }
            Action::SlideNudge(dx) => {
                self.gesture.nudge(dx);
            }
            Action::SlideRelease => match self.gesture.release() {
                Some(SlideOutcome::Completed) => {
                    debug!("slide released past threshold");
                    return Ok(Some(Action::SlideComplete));
                }
                Some(SlideOutcome::SnappedBack) => {
                    debug!("slide released short of threshold, snapping back");
                }
                None => {}
            },
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray))
            .style(Style::default().bg(Color::Black));
        let track = block.inner(area);
        frame.render_widget(block, area);
        self.measure(track);

        // Squeezed footer: nothing fits inside the border
        if track.is_empty() {
            return Ok(());
        }

        let chevron_style = if self.gesture.progress() > 0.0 {
            Style::default().fg(Color::Rgb(249, 115, 22))
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label = Paragraph::new(Line::from(vec![
            Span::styled(
                LABEL,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(CHEVRONS, chevron_style),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(label, track);

        if track.width >= self.config.thumb_width {
            let thumb = Rect::new(self.thumb_column(), track.y, self.config.thumb_width, 1);
            let thumb_style = if self.gesture.is_dragging() {
                Style::default().fg(Color::Black).bg(Color::Gray)
            } else {
                Style::default().fg(Color::Black).bg(Color::White)
            };
            frame.render_widget(
                Paragraph::new(Span::styled("›", thumb_style.add_modifier(Modifier::BOLD)))
                    .style(thumb_style)
                    .alignment(Alignment::Center),
                thumb,
            );
        }

        Ok(())
    }
}
