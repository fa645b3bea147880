//! Booking summary screen
//!
//! Owns the `ScreenState` and the static booking, composes the flight,
//! passenger, price and payment cards, and hosts the rules sheet and the
//! slide-to-pay control. Child components report intent as Actions; every
//! state change goes through `ScreenState::apply`.

use crate::action::Action;
use crate::component::Component;
use crate::components::cards::{build_cards, stack_cards, StackedCards};
use crate::components::layout::{calculate_screen_layout, contains, fit, ScreenLayout};
use crate::components::{ConfirmationView, RulesModalView, SlideToConfirmControl};
use crate::config::SliderConfig;
use crate::model::{Booking, Panel, PaymentOption, ScreenEvent, ScreenState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::info;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Widget,
    },
    Frame,
};

/// Deadline row, slider and the footer's top border
const FOOTER_HEIGHT: u16 = 5;

/// Width of the back button in the header
const BACK_BUTTON_WIDTH: u16 = 5;

pub struct BookingSummaryScreen {
    booking: Booking,
    state: ScreenState,
    slider: SlideToConfirmControl,
    rules_modal: RulesModalView,
    confirmation: ConfirmationView,
    /// Body scroll offset in rows
    scroll: u16,
    /// Areas from the last draw, for hit-testing
    layout: Option<ScreenLayout>,
    /// Card placement from the last draw
    stacked: StackedCards,
}

impl BookingSummaryScreen {
    pub fn new(booking: Booking, slider: SliderConfig) -> Self {
        let rules_modal = RulesModalView::new(booking.clone());
        Self {
            booking,
            state: ScreenState::new(),
            slider: SlideToConfirmControl::new(slider),
            rules_modal,
            confirmation: ConfirmationView::new(PaymentOption::default()),
            scroll: 0,
            layout: None,
            stacked: StackedCards::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    #[cfg(test)]
    pub fn slider(&self) -> &SlideToConfirmControl {
        &self.slider
    }

    #[cfg(test)]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    #[cfg(test)]
    pub fn layout(&self) -> Option<ScreenLayout> {
        self.layout
    }

    /// Drop a slide in progress, e.g. when a dialog takes over input and
    /// the button release may never reach the slider
    pub fn cancel_slide(&mut self) {
        self.slider.cancel();
    }

    /// Apply an event to the screen state, logging what changed
    pub fn apply(&mut self, event: ScreenEvent) {
        if event == ScreenEvent::OpenRulesModal {
            self.cancel_slide();
        }

        let next = self.state.apply(event);
        if next == self.state {
            return;
        }

        match event {
            ScreenEvent::Toggle(panel) => {
                info!("{:?} panel expanded: {}", panel, next.is_expanded(panel));
            }
            ScreenEvent::OpenRulesModal => info!("rules sheet opened"),
            ScreenEvent::CloseRulesModal => info!("rules sheet closed"),
            ScreenEvent::SelectPayment(option) => info!("payment method selected: {}", option),
            ScreenEvent::SlideCompleted => {
                info!("payment confirmed with {}", next.selected_payment);
                self.confirmation = ConfirmationView::new(next.selected_payment);
            }
        }
        self.state = next;
    }

    fn body_height(&self) -> u16 {
        self.layout.map(|l| l.body.height).unwrap_or(0)
    }

    fn max_scroll(&self) -> u16 {
        self.stacked.height.saturating_sub(self.body_height())
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = next as u16;
    }

    fn handle_screen_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('p') => Some(Action::TogglePassengers),
            KeyCode::Char('b') => Some(Action::TogglePrice),
            KeyCode::Char('r') => Some(Action::OpenRules),
            KeyCode::Char('1') => Some(Action::SelectPayment(PaymentOption::CreditDebitCard)),
            KeyCode::Char('2') => Some(Action::SelectPayment(PaymentOption::BcaVirtualAccount)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextPayment),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevPayment),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('d') if ctrl => Some(Action::PageDown),
            KeyCode::Char('u') if ctrl => Some(Action::PageUp),
            KeyCode::Char('e') if ctrl => Some(Action::ScrollDown),
            KeyCode::Char('y') if ctrl => Some(Action::ScrollUp),
            _ => return self.slider.handle_key_event(key),
        };
        Ok(action)
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let bounds = frame.area();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Booking Summary",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        let Some(row) = fit(row, bounds) else {
            return;
        };
        frame.render_widget(title, row);

        let back = Paragraph::new(Line::from(Span::styled(
            " ‹ ",
            Style::default()
                .fg(Color::Rgb(249, 115, 22))
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(
            back,
            Rect::new(row.x, row.y, BACK_BUTTON_WIDTH.min(row.width), 1),
        );
    }

    /// Render all cards onto an off-screen canvas, then copy the visible
    /// window into the frame
    fn draw_body(&mut self, frame: &mut Frame, area: Rect) {
        let area = area.intersection(frame.area());
        let cards = build_cards(&self.booking, &self.state, area.width);
        self.stacked = stack_cards(&cards, area.width);
        self.scroll = self.scroll.min(self.max_scroll());

        let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, self.stacked.height.max(1)));
        for (card, card_area) in cards.iter().zip(&self.stacked.areas) {
            let mut block = Block::default().padding(Padding::horizontal(1));
            if card.bordered {
                let border_color = if card.highlighted {
                    Color::Rgb(249, 115, 22)
                } else {
                    Color::DarkGray
                };
                block = block
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color));
            }
            Paragraph::new(card.lines.clone())
                .block(block)
                .render(*card_area, &mut canvas);
        }

        let buf = frame.buffer_mut();
        for row in 0..area.height {
            let src_y = row + self.scroll;
            if src_y >= self.stacked.height {
                break;
            }
            for col in 0..area.width {
                if let Some(cell) = canvas.cell((col, src_y)) {
                    buf[(area.x + col, area.y + row)] = cell.clone();
                }
            }
        }

        let scrollbar_area = area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        });
        if self.stacked.height > area.height && !scrollbar_area.is_empty() {
            let mut scrollbar_state =
                ScrollbarState::new(self.max_scroll() as usize).position(self.scroll as usize);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                scrollbar_area,
                &mut scrollbar_state,
            );
        }
    }

    fn draw_footer(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let deadline = Paragraph::new(Line::from(vec![
            Span::styled(
                "PAY BEFORE  ",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("◷ {}", self.booking.formatted_deadline()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        let bounds = frame.area();
        if let Some(row) = fit(Rect::new(inner.x, inner.y, inner.width, 1), bounds) {
            frame.render_widget(deadline, row);
        }

        let slider_area = Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            SlideToConfirmControl::height().min(inner.height.saturating_sub(1)),
        );
        self.slider.draw(frame, slider_area.intersection(bounds))
    }
}

impl Component for BookingSummaryScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.state.is_confirmed() {
            return self.confirmation.handle_key_event(key);
        }
        if self.state.rules_modal_open {
            return self.rules_modal.handle_key_event(key);
        }
        self.handle_screen_key(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.state.is_confirmed() {
            return Ok(None);
        }
        // A release always belongs to the slider first, whatever is on top
        if matches!(mouse.kind, MouseEventKind::Up(_)) {
            if let Some(action) = self.slider.handle_mouse_event(mouse)? {
                return Ok(Some(action));
            }
        }
        if self.state.rules_modal_open {
            return self.rules_modal.handle_mouse_event(mouse);
        }
        if let Some(action) = self.slider.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }

        let Some(layout) = self.layout else {
            return Ok(None);
        };
        let in_body = contains(layout.body, mouse.column, mouse.row);

        let action = match mouse.kind {
            MouseEventKind::ScrollDown if in_body => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp if in_body => Some(Action::ScrollUp),
            MouseEventKind::Down(MouseButton::Left) => {
                let header = layout.header;
                let back = Rect::new(header.x, header.y, BACK_BUTTON_WIDTH, header.height);
                if contains(back, mouse.column, mouse.row) {
                    Some(Action::OpenQuitDialog)
                } else if in_body {
                    let x = mouse.column - layout.body.x;
                    let y = mouse.row - layout.body.y + self.scroll;
                    self.stacked.hit(x, y)
                } else {
                    None
                }
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::TogglePassengers => self.apply(ScreenEvent::Toggle(Panel::Passengers)),
            Action::TogglePrice => self.apply(ScreenEvent::Toggle(Panel::Price)),
            Action::OpenRules => self.apply(ScreenEvent::OpenRulesModal),
            Action::CloseRules => self.apply(ScreenEvent::CloseRulesModal),
            Action::SelectPayment(option) => self.apply(ScreenEvent::SelectPayment(option)),
            Action::NextPayment => {
                let option = self.state.selected_payment.cycle(1);
                self.apply(ScreenEvent::SelectPayment(option));
            }
            Action::PrevPayment => {
                let option = self.state.selected_payment.cycle(-1);
                self.apply(ScreenEvent::SelectPayment(option));
            }

            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => {
                let page = i32::from(self.body_height().saturating_sub(1).max(1));
                self.scroll_by(-page);
            }
            Action::PageDown => {
                let page = i32::from(self.body_height().saturating_sub(1).max(1));
                self.scroll_by(page);
            }

            Action::SlidePress(_)
            | Action::SlideDrag(_)
            | Action::SlideRelease
            | Action::SlideNudge(_) => {
                if !self.state.is_confirmed() {
                    return self.slider.update(action);
                }
            }
            Action::SlideComplete => self.apply(ScreenEvent::SlideCompleted),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if self.state.is_confirmed() {
            return self.confirmation.draw(frame, area);
        }

        let layout = calculate_screen_layout(area, FOOTER_HEIGHT);
        self.layout = Some(layout);

        self.draw_header(frame, layout.header);
        self.draw_body(frame, layout.body);
        self.draw_footer(frame, layout.footer)?;

        if self.state.rules_modal_open {
            let column = Rect::new(
                layout.header.x,
                area.y,
                layout.header.width,
                area.height,
            );
            self.rules_modal.draw(frame, column)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen() -> BookingSummaryScreen {
        BookingSummaryScreen::new(Booking::sample(), SliderConfig::default())
    }

    fn render(screen: &mut BookingSummaryScreen, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| screen.draw(frame, frame.area()).unwrap())
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Handle an action and every follow-up it produces
    fn dispatch(screen: &mut BookingSummaryScreen, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = screen.update(a).unwrap();
        }
    }

    #[test]
    fn test_renders_summary() {
        let mut screen = screen();
        let text = render(&mut screen, 60, 50);

        assert!(text.contains("Booking Summary"));
        assert!(text.contains("GA880"));
        assert!(text.contains("2 Adults, 2 Children, 1 Infant"));
        assert!(text.contains("Rp 10.000.000"));
        assert!(text.contains("Credit/Debit Card ****1234"));
        assert!(text.contains("Fri, 3 Oct 2025, 08:30 AM"));
        assert!(text.contains("Slide to pay"));
    }

    #[test]
    fn test_keys_map_to_actions() {
        let mut screen = screen();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('p'))).unwrap(),
            Some(Action::TogglePassengers)
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('2'))).unwrap(),
            Some(Action::SelectPayment(PaymentOption::BcaVirtualAccount))
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Right)).unwrap(),
            Some(Action::SlideNudge(2.0))
        );
    }

    #[test]
    fn test_next_payment_cycles() {
        let mut screen = screen();
        dispatch(&mut screen, Action::NextPayment);
        assert_eq!(screen.state().selected_payment, PaymentOption::BcaVirtualAccount);
        dispatch(&mut screen, Action::NextPayment);
        assert_eq!(screen.state().selected_payment, PaymentOption::CreditDebitCard);
        dispatch(&mut screen, Action::PrevPayment);
        assert_eq!(screen.state().selected_payment, PaymentOption::BcaVirtualAccount);
    }

    #[test]
    fn test_click_toggles_passenger_panel() {
        let mut screen = screen();
        render(&mut screen, 60, 50);
        let body = screen.layout().unwrap().body;

        // passengers card sits right after the flights card
        let row = body.y + 17;
        let action = screen.handle_mouse_event(click(body.x + 3, row)).unwrap();
        assert_eq!(action, Some(Action::TogglePassengers));
        dispatch(&mut screen, action.unwrap());
        assert!(screen.state().passengers_expanded);

        let text = render(&mut screen, 60, 50);
        assert!(text.contains("DEPARTURE: DPS → BKK"));
    }

    #[test]
    fn test_rules_modal_captures_input() {
        let mut screen = screen();
        dispatch(&mut screen, Action::OpenRules);
        let text = render(&mut screen, 60, 50);
        assert!(text.contains("Rules & Info"));
        assert!(text.contains("I Understand"));

        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('p'))).unwrap(),
            None
        );
        let close = screen.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(close, Some(Action::CloseRules));
        dispatch(&mut screen, close.unwrap());
        assert!(!screen.state().rules_modal_open);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut screen = screen();
        dispatch(&mut screen, Action::TogglePassengers);
        render(&mut screen, 60, 30);

        dispatch(&mut screen, Action::ScrollUp);
        assert_eq!(screen.scroll(), 0);
        for _ in 0..200 {
            dispatch(&mut screen, Action::ScrollDown);
        }
        let body = screen.layout().unwrap().body;
        let max = screen.scroll();
        assert!(max > 0);
        // last content row is visible at the bottom of the body
        assert_eq!(max + body.height, 15 + 1 + 27 + 1 + 3 + 1 + 1 + 3 + 3);

        dispatch(&mut screen, Action::PageUp);
        assert!(screen.scroll() < max);
    }

    #[test]
    fn test_slide_through_screen_confirms() {
        let mut screen = screen();
        dispatch(&mut screen, Action::SelectPayment(PaymentOption::BcaVirtualAccount));
        render(&mut screen, 60, 50);

        let track = screen.slider().track_area();
        let thumb = screen.slider().thumb_column();
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: thumb,
            row: track.y,
            modifiers: KeyModifiers::NONE,
        };
        let drag = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: track.x + track.width - 1,
            ..press
        };
        let up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..drag
        };

        for event in [press, drag, up] {
            if let Some(action) = screen.handle_mouse_event(event).unwrap() {
                dispatch(&mut screen, action);
            }
        }

        assert!(screen.state().is_confirmed());
        let text = render(&mut screen, 60, 50);
        assert!(text.contains("Booking Confirmed!"));
        assert!(text.contains("BCA Virtual Account"));
        assert!(!text.contains("Slide to pay"));
    }

    #[test]
    fn test_confirmed_screen_ignores_interaction() {
        let mut screen = screen();
        dispatch(&mut screen, Action::SlideComplete);
        let before = *screen.state();

        for action in [
            Action::TogglePassengers,
            Action::TogglePrice,
            Action::OpenRules,
            Action::SelectPayment(PaymentOption::BcaVirtualAccount),
            Action::NextPayment,
            Action::SlideNudge(2.0),
        ] {
            dispatch(&mut screen, action);
        }
        assert_eq!(*screen.state(), before);
        assert_eq!(screen.slider().gesture().offset(), 0.0);
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::ForceQuit)
        );
    }

    #[test]
    fn test_opening_rules_mid_slide_ends_the_drag() {
        let mut screen = screen();
        render(&mut screen, 60, 50);
        let track = screen.slider().track_area();
        let thumb = screen.slider().thumb_column();
        let at = |kind, column| MouseEvent {
            kind,
            column,
            row: track.y,
            modifiers: KeyModifiers::NONE,
        };
        let end = track.x + track.width - 1;

        for event in [
            at(MouseEventKind::Down(MouseButton::Left), thumb),
            at(MouseEventKind::Drag(MouseButton::Left), end),
        ] {
            if let Some(action) = screen.handle_mouse_event(event).unwrap() {
                dispatch(&mut screen, action);
            }
        }
        assert!(screen.slider().gesture().is_dragging());

        // Sheet opens while the button is still held
        let open = screen.handle_key_event(key(KeyCode::Char('r'))).unwrap();
        dispatch(&mut screen, open.unwrap());
        assert!(!screen.slider().gesture().is_dragging());
        assert_eq!(screen.slider().gesture().offset(), 0.0);
        render(&mut screen, 60, 50);

        let released = screen
            .handle_mouse_event(at(MouseEventKind::Up(MouseButton::Left), 30))
            .unwrap();
        assert_eq!(released, None);
        let close = screen.handle_key_event(key(KeyCode::Esc)).unwrap();
        dispatch(&mut screen, close.unwrap());
        render(&mut screen, 60, 50);

        // Hovering across and off the track with no button held
        for event in [at(MouseEventKind::Moved, end), at(MouseEventKind::Moved, 0)] {
            assert_eq!(screen.handle_mouse_event(event).unwrap(), None);
        }
        let off_track = MouseEvent {
            row: track.y - 2,
            ..at(MouseEventKind::Moved, end)
        };
        assert_eq!(screen.handle_mouse_event(off_track).unwrap(), None);

        assert!(!screen.state().is_confirmed());
        assert!(!screen.slider().gesture().is_dragging());
    }

    #[test]
    fn test_release_reaches_slider_under_rules_sheet() {
        let mut screen = screen();
        render(&mut screen, 60, 50);
        let track = screen.slider().track_area();
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: screen.slider().thumb_column(),
            row: track.y,
            modifiers: KeyModifiers::NONE,
        };
        let pressed = screen.handle_mouse_event(press).unwrap().unwrap();
        dispatch(&mut screen, pressed);

        // Sheet flag set without going through the screen's cancel path
        screen.state = screen.state.apply(ScreenEvent::OpenRulesModal);
        let up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..press
        };
        assert_eq!(screen.handle_mouse_event(up).unwrap(), Some(Action::SlideRelease));
    }

    #[test]
    fn test_draws_at_any_small_size() {
        for width in 1..30 {
            for height in 1..14 {
                let mut screen = screen();
                render(&mut screen, width, height);

                dispatch(&mut screen, Action::OpenRules);
                render(&mut screen, width, height);

                dispatch(&mut screen, Action::SlideComplete);
                render(&mut screen, width, height);
            }
        }
    }
}
