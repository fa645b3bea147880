//! The itinerary being paid for
//!
//! Everything here is static display data; the screen never mutates it.

use super::flight::{FlightLeg, LegDirection};
use super::passenger::{passenger_summary, LegServices, Passenger, PassengerCategory};
use super::payment::{PriceBreakdown, Rupiah};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Fare conditions shown in the rules sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareRules {
    pub cancellation_fee: String,
    pub reschedule_fee: String,
    pub refundable: String,
    pub baggage_policy: Vec<String>,
}

/// A complete booking awaiting payment
#[derive(Debug, Clone)]
pub struct Booking {
    pub outbound: FlightLeg,
    pub inbound: FlightLeg,
    pub passengers: Vec<Passenger>,
    pub price: PriceBreakdown,
    pub payment_deadline: NaiveDateTime,
    pub fare_rules: FareRules,
}

impl Booking {
    pub fn leg(&self, direction: LegDirection) -> &FlightLeg {
        match direction {
            LegDirection::Departure => &self.outbound,
            LegDirection::Return => &self.inbound,
        }
    }

    pub fn passenger_summary(&self) -> String {
        passenger_summary(&self.passengers)
    }

    /// e.g. `Fri, 3 Oct 2025, 08:30 AM`
    pub fn formatted_deadline(&self) -> String {
        self.payment_deadline
            .format("%a, %-d %b %Y, %I:%M %p")
            .to_string()
    }

    /// Transit paragraph for the rules sheet
    pub fn transit_note(&self) -> String {
        format!(
            "Both flights {} and {} are Direct Flights. No layovers or aircraft changes are \
             scheduled for this itinerary. Please arrive at the airport 3 hours before \
             departure for international document verification.",
            self.outbound.flight_code, self.inbound.flight_code
        )
    }

    /// The hardcoded itinerary shown by the app
    pub fn sample() -> Booking {
        Booking {
            outbound: FlightLeg {
                airline: "Garuda Indonesia".to_string(),
                flight_code: "GA880".to_string(),
                departure_time: time(10, 0),
                departure_city: "DPS".to_string(),
                departure_terminal: Some("T1".to_string()),
                arrival_time: time(13, 30),
                arrival_city: "BKK".to_string(),
                arrival_terminal: Some("T2".to_string()),
                date: date(2025, 10, 3),
                duration_minutes: 210,
            },
            inbound: FlightLeg {
                airline: "AirAsia".to_string(),
                flight_code: "QZ202".to_string(),
                departure_time: time(18, 0),
                departure_city: "BKK".to_string(),
                departure_terminal: Some("T1".to_string()),
                arrival_time: time(22, 0),
                arrival_city: "CGK".to_string(),
                arrival_terminal: None,
                date: date(2025, 11, 5),
                duration_minutes: 240,
            },
            passengers: vec![
                Passenger {
                    name: "Reviana L".to_string(),
                    category: PassengerCategory::Adult,
                    outbound: LegServices::new(7, 20, "Standard Meal"),
                    inbound: LegServices::new(7, 25, "Premium Meal"),
                },
                Passenger {
                    name: "Mayang S".to_string(),
                    category: PassengerCategory::Adult,
                    outbound: LegServices::new(7, 20, "Standard Meal"),
                    inbound: LegServices::new(7, 25, "Standard Meal"),
                },
                Passenger {
                    name: "Dimas P".to_string(),
                    category: PassengerCategory::Child,
                    outbound: LegServices::new(7, 20, "No Meal"),
                    inbound: LegServices::new(7, 20, "No Meal"),
                },
                Passenger {
                    name: "Anisa K".to_string(),
                    category: PassengerCategory::Child,
                    outbound: LegServices::new(7, 20, "Snack Box"),
                    inbound: LegServices::new(7, 25, "Premium Meal"),
                },
                Passenger {
                    name: "Rizky O".to_string(),
                    category: PassengerCategory::Infant,
                    outbound: LegServices::without_baggage("Baby Food"),
                    inbound: LegServices::without_baggage("Baby Food"),
                },
            ],
            price: PriceBreakdown {
                fare: Rupiah(9_200_000),
                tax_and_service: Rupiah(800_000),
            },
            payment_deadline: date(2025, 10, 3).and_time(time(8, 30)),
            fare_rules: FareRules {
                cancellation_fee: "Rp 500.000 / pax".to_string(),
                reschedule_fee: "Rp 200.000 + Fare Diff".to_string(),
                refundable: "Yes (Partial)".to_string(),
                baggage_policy: vec![
                    "Liquid, Aerosol and Gel (LAG) must be in containers of max 100ml."
                        .to_string(),
                    "Powerbanks must be under 20.000 mAh and carried in cabin baggage only."
                        .to_string(),
                ],
            },
        }
    }
}

// Literals below are known-valid calendar values.
fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or(NaiveTime::MIN)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_summary() {
        let booking = Booking::sample();
        assert_eq!(booking.passenger_summary(), "2 Adults, 2 Children, 1 Infant");
    }

    #[test]
    fn test_sample_deadline_format() {
        let booking = Booking::sample();
        assert_eq!(booking.formatted_deadline(), "Fri, 3 Oct 2025, 08:30 AM");
    }

    #[test]
    fn test_sample_total() {
        let booking = Booking::sample();
        assert_eq!(booking.price.total().to_string(), "Rp 10.000.000");
    }

    #[test]
    fn test_leg_lookup_and_routes() {
        let booking = Booking::sample();
        assert_eq!(booking.leg(LegDirection::Departure).route(), "DPS → BKK");
        assert_eq!(booking.leg(LegDirection::Return).route(), "BKK → CGK");
        assert_eq!(booking.leg(LegDirection::Return).arrival_terminal_label(), "");
    }

    #[test]
    fn test_transit_note_names_both_flights() {
        let note = Booking::sample().transit_note();
        assert!(note.contains("GA880"));
        assert!(note.contains("QZ202"));
    }
}
