//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod booking_summary;
pub mod cards;
pub mod confirmation;
pub mod flight_segment;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod rules_modal;
pub mod slide_to_confirm;

pub use booking_summary::BookingSummaryScreen;
pub use confirmation::ConfirmationView;
pub use help_dialog::HelpDialog;
pub use layout::centered_popup;
pub use quit_dialog::QuitDialog;
pub use rules_modal::RulesModalView;
pub use slide_to_confirm::SlideToConfirmControl;
