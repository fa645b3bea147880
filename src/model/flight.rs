//! Flight legs of the itinerary

use chrono::{NaiveDate, NaiveTime};
use std::fmt;

/// Which way a leg flies relative to the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegDirection {
    Departure,
    Return,
}

impl LegDirection {
    pub fn all() -> [LegDirection; 2] {
        [LegDirection::Departure, LegDirection::Return]
    }

    pub fn label(&self) -> &'static str {
        match self {
            LegDirection::Departure => "Departure",
            LegDirection::Return => "Return",
        }
    }
}

impl fmt::Display for LegDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One directional flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightLeg {
    pub airline: String,
    pub flight_code: String,
    pub departure_time: NaiveTime,
    pub departure_city: String,
    pub departure_terminal: Option<String>,
    pub arrival_time: NaiveTime,
    pub arrival_city: String,
    pub arrival_terminal: Option<String>,
    pub date: NaiveDate,
    /// Block time in whole minutes
    pub duration_minutes: u32,
}

impl FlightLeg {
    pub fn formatted_departure_time(&self) -> String {
        self.departure_time.format("%H:%M").to_string()
    }

    pub fn formatted_arrival_time(&self) -> String {
        self.arrival_time.format("%H:%M").to_string()
    }

    /// e.g. `Fri, 3 Oct 2025`
    pub fn formatted_date(&self) -> String {
        self.date.format("%a, %-d %b %Y").to_string()
    }

    /// e.g. `3h 30m`, `4h 00m`
    pub fn formatted_duration(&self) -> String {
        format!(
            "{}h {:02}m",
            self.duration_minutes / 60,
            self.duration_minutes % 60
        )
    }

    /// Route heading such as `DPS → BKK`
    pub fn route(&self) -> String {
        format!("{} → {}", self.departure_city, self.arrival_city)
    }

    /// Departure terminal label, blank when unknown
    pub fn departure_terminal_label(&self) -> &str {
        self.departure_terminal.as_deref().unwrap_or("")
    }

    /// Arrival terminal label, blank when unknown
    pub fn arrival_terminal_label(&self) -> &str {
        self.arrival_terminal.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(duration_minutes: u32, arrival_terminal: Option<&str>) -> FlightLeg {
        FlightLeg {
            airline: "AirAsia".to_string(),
            flight_code: "QZ202".to_string(),
            departure_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            departure_city: "BKK".to_string(),
            departure_terminal: Some("T1".to_string()),
            arrival_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            arrival_city: "CGK".to_string(),
            arrival_terminal: arrival_terminal.map(str::to_string),
            date: NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
            duration_minutes,
        }
    }

    #[test]
    fn test_formatted_fields() {
        let leg = leg(240, None);
        assert_eq!(leg.formatted_departure_time(), "18:00");
        assert_eq!(leg.formatted_arrival_time(), "22:00");
        assert_eq!(leg.formatted_date(), "Wed, 5 Nov 2025");
        assert_eq!(leg.formatted_duration(), "4h 00m");
        assert_eq!(leg.route(), "BKK → CGK");
    }

    #[test]
    fn test_duration_pads_minutes() {
        assert_eq!(leg(210, None).formatted_duration(), "3h 30m");
        assert_eq!(leg(65, None).formatted_duration(), "1h 05m");
    }

    #[test]
    fn test_missing_terminal_is_blank() {
        let leg = leg(240, None);
        assert_eq!(leg.departure_terminal_label(), "T1");
        assert_eq!(leg.arrival_terminal_label(), "");
    }
}
