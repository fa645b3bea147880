//! Booking summary view state
//!
//! All toggles, the payment selection and the confirmation flag live in one
//! `ScreenState` record. Updates go through `ScreenState::apply`, a pure
//! transition function, so the screen logic can be exercised without a
//! terminal.

use super::payment::PaymentOption;

/// Collapsible panels on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Passengers,
    Price,
}

/// Lifecycle of the screen. `Confirmed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenPhase {
    #[default]
    Idle,
    Confirmed,
}

/// Events the screen state reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Toggle(Panel),
    OpenRulesModal,
    CloseRulesModal,
    SelectPayment(PaymentOption),
    /// The slide control reported a completed gesture
    SlideCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenState {
    pub selected_payment: PaymentOption,
    pub passengers_expanded: bool,
    pub price_expanded: bool,
    pub rules_modal_open: bool,
    pub phase: ScreenPhase,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_confirmed(&self) -> bool {
        self.phase == ScreenPhase::Confirmed
    }

    pub fn is_expanded(&self, panel: Panel) -> bool {
        match panel {
            Panel::Passengers => self.passengers_expanded,
            Panel::Price => self.price_expanded,
        }
    }

    /// Apply one event and return the next state.
    ///
    /// Once confirmed, every event is ignored.
    pub fn apply(self, event: ScreenEvent) -> ScreenState {
        if self.is_confirmed() {
            return self;
        }

        let mut next = self;
        match event {
            ScreenEvent::Toggle(Panel::Passengers) => {
                next.passengers_expanded = !next.passengers_expanded;
            }
            ScreenEvent::Toggle(Panel::Price) => {
                next.price_expanded = !next.price_expanded;
            }
            ScreenEvent::OpenRulesModal => next.rules_modal_open = true,
            ScreenEvent::CloseRulesModal => next.rules_modal_open = false,
            ScreenEvent::SelectPayment(option) => next.selected_payment = option,
            ScreenEvent::SlideCompleted => next.phase = ScreenPhase::Confirmed,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ScreenState::new();
        assert_eq!(state.selected_payment, PaymentOption::CreditDebitCard);
        assert!(!state.passengers_expanded);
        assert!(!state.price_expanded);
        assert!(!state.rules_modal_open);
        assert_eq!(state.phase, ScreenPhase::Idle);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let state = ScreenState::new();
        for panel in [Panel::Passengers, Panel::Price] {
            let once = state.apply(ScreenEvent::Toggle(panel));
            assert!(once.is_expanded(panel));
            assert_eq!(once.apply(ScreenEvent::Toggle(panel)), state);
        }
    }

    #[test]
    fn test_panels_are_independent() {
        let state = ScreenState::new()
            .apply(ScreenEvent::Toggle(Panel::Passengers))
            .apply(ScreenEvent::Toggle(Panel::Price));
        assert!(state.passengers_expanded);
        assert!(state.price_expanded);

        let state = state.apply(ScreenEvent::Toggle(Panel::Passengers));
        assert!(!state.passengers_expanded);
        assert!(state.price_expanded);
    }

    #[test]
    fn test_rules_modal_open_close() {
        let state = ScreenState::new().apply(ScreenEvent::OpenRulesModal);
        assert!(state.rules_modal_open);
        let closed = state.apply(ScreenEvent::CloseRulesModal);
        assert!(!closed.rules_modal_open);
        assert_eq!(closed.apply(ScreenEvent::CloseRulesModal), closed);
        assert_eq!(closed, ScreenState::new());
    }

    #[test]
    fn test_select_payment() {
        let state = ScreenState::new();
        let same = state.apply(ScreenEvent::SelectPayment(PaymentOption::CreditDebitCard));
        assert_eq!(same, state);

        let bca = state.apply(ScreenEvent::SelectPayment(PaymentOption::BcaVirtualAccount));
        assert_eq!(bca.selected_payment, PaymentOption::BcaVirtualAccount);
        assert_eq!(
            bca.apply(ScreenEvent::SelectPayment(PaymentOption::BcaVirtualAccount)),
            bca
        );
    }

    #[test]
    fn test_confirmation_is_terminal() {
        let confirmed = ScreenState::new()
            .apply(ScreenEvent::Toggle(Panel::Price))
            .apply(ScreenEvent::SlideCompleted);
        assert!(confirmed.is_confirmed());

        let events = [
            ScreenEvent::Toggle(Panel::Passengers),
            ScreenEvent::Toggle(Panel::Price),
            ScreenEvent::OpenRulesModal,
            ScreenEvent::CloseRulesModal,
            ScreenEvent::SelectPayment(PaymentOption::BcaVirtualAccount),
            ScreenEvent::SlideCompleted,
        ];
        for event in events {
            assert_eq!(confirmed.apply(event), confirmed);
        }
    }
}
