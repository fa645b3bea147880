//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::PaymentOption;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick, emitted when no input arrived within the tick rate
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all shortcuts
    OpenHelp,
    /// Close the current dialog
    CloseDialog,

    // ─────────────────────────────────────────────────────────────────────────
    // Booking Summary
    // ─────────────────────────────────────────────────────────────────────────
    /// Expand or collapse the passengers & baggage panel
    TogglePassengers,
    /// Expand or collapse the price breakdown panel
    TogglePrice,
    /// Show the fare rules sheet
    OpenRules,
    /// Dismiss the fare rules sheet
    CloseRules,
    /// Choose a payment method
    SelectPayment(PaymentOption),
    /// Select the next payment method
    NextPayment,
    /// Select the previous payment method
    PrevPayment,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll body up one line
    ScrollUp,
    /// Scroll body down one line
    ScrollDown,
    /// Scroll body up one page
    PageUp,
    /// Scroll body down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Slide to pay
    // ─────────────────────────────────────────────────────────────────────────
    /// Pointer pressed on the thumb at the given track-relative column
    SlidePress(f32),
    /// Pointer dragged to the given track-relative column
    SlideDrag(f32),
    /// Pointer released or left the track
    SlideRelease,
    /// Keyboard nudge of the thumb by the given number of cells
    SlideNudge(f32),
    /// The slide gesture crossed the commit threshold
    SlideComplete,
}
