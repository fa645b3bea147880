//! Passengers, their per-leg services and the headcount summary

use super::flight::LegDirection;
use std::fmt;

/// Fare category of a passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerCategory {
    Adult,
    Child,
    Infant,
}

impl PassengerCategory {
    /// Fixed display order used by the headcount summary
    pub fn all() -> [PassengerCategory; 3] {
        [
            PassengerCategory::Adult,
            PassengerCategory::Child,
            PassengerCategory::Infant,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PassengerCategory::Adult => "Adult",
            PassengerCategory::Child => "Child",
            PassengerCategory::Infant => "Infant",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            PassengerCategory::Adult => "Adults",
            PassengerCategory::Child => "Children",
            PassengerCategory::Infant => "Infants",
        }
    }

    /// `1 Adult`, `2 Children`
    pub fn count_label(&self, count: usize) -> String {
        if count == 1 {
            format!("{} {}", count, self.name())
        } else {
            format!("{} {}", count, self.plural())
        }
    }
}

impl fmt::Display for PassengerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Baggage allowance on one leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaggageAllowance {
    Weights { cabin_kg: u16, checked_kg: u16 },
    NotApplicable,
}

/// Services booked for a passenger on one leg
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegServices {
    pub baggage: BaggageAllowance,
    pub meal: String,
}

impl LegServices {
    pub fn new(cabin_kg: u16, checked_kg: u16, meal: &str) -> Self {
        Self {
            baggage: BaggageAllowance::Weights {
                cabin_kg,
                checked_kg,
            },
            meal: meal.to_string(),
        }
    }

    pub fn without_baggage(meal: &str) -> Self {
        Self {
            baggage: BaggageAllowance::NotApplicable,
            meal: meal.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub name: String,
    pub category: PassengerCategory,
    pub outbound: LegServices,
    pub inbound: LegServices,
}

impl Passenger {
    pub fn services(&self, direction: LegDirection) -> &LegServices {
        match direction {
            LegDirection::Departure => &self.outbound,
            LegDirection::Return => &self.inbound,
        }
    }

    /// Baggage for a leg. Infants never carry an allowance, whatever was booked.
    pub fn baggage(&self, direction: LegDirection) -> BaggageAllowance {
        if self.category == PassengerCategory::Infant {
            return BaggageAllowance::NotApplicable;
        }
        self.services(direction).baggage
    }

    pub fn meal(&self, direction: LegDirection) -> &str {
        &self.services(direction).meal
    }
}

/// Headcount summary such as `2 Adults, 2 Children, 1 Infant`
///
/// Categories appear in fixed order and are omitted when empty; an empty
/// passenger list yields an empty string.
pub fn derive_passenger_summary<'a, I>(categories: I) -> String
where
    I: IntoIterator<Item = &'a PassengerCategory>,
{
    let mut counts = [0usize; 3];
    for category in categories {
        counts[*category as usize] += 1;
    }

    PassengerCategory::all()
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| category.count_label(count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary for a slice of passengers
pub fn passenger_summary(passengers: &[Passenger]) -> String {
    derive_passenger_summary(passengers.iter().map(|p| &p.category))
}
