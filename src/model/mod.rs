//! Model layer - booking data and view state
//!
//! This module contains:
//! - `Booking` and its parts (legs, passengers, prices) - static display data
//! - `ScreenState` - toggles, payment selection and confirmation
//! - `SlideGesture` - the slide-to-confirm state machine

pub mod booking;
pub mod flight;
pub mod gesture;
pub mod passenger;
pub mod payment;
pub mod screen;

// Re-export commonly used types
pub use booking::Booking;
pub use flight::{FlightLeg, LegDirection};
pub use gesture::{SlideGeometry, SlideGesture, SlideOutcome};
pub use passenger::{BaggageAllowance, Passenger, PassengerCategory};
pub use payment::PaymentOption;
pub use screen::{Panel, ScreenEvent, ScreenState};
