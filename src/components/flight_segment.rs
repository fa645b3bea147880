//! Flight segment view
//!
//! Pure rendering of one leg: direction, airline, times, cities, date and
//! duration. Missing terminals render blank.

use crate::components::layout::spread;
use crate::model::{FlightLeg, LegDirection};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Renders one flight leg into lines of the given width
pub struct FlightSegmentView<'a> {
    pub leg: &'a FlightLeg,
    pub direction: LegDirection,
}

impl<'a> FlightSegmentView<'a> {
    pub fn new(leg: &'a FlightLeg, direction: LegDirection) -> Self {
        Self { leg, direction }
    }

    fn icon(&self) -> &'static str {
        match self.direction {
            LegDirection::Departure => "↗",
            LegDirection::Return => "↘",
        }
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let leg = self.leg;
        let muted = Style::default().fg(Color::DarkGray);
        let time_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let heading = spread(
            vec![
                Span::styled(
                    format!(" {} ", self.icon()),
                    Style::default()
                        .fg(Color::Rgb(249, 115, 22))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.direction.label().to_uppercase(),
                    muted.add_modifier(Modifier::BOLD),
                ),
            ],
            vec![
                Span::styled(leg.airline.clone(), Style::default().fg(Color::Gray)),
                Span::styled(format!("  {}", leg.flight_code), muted),
            ],
            width,
        );

        // Departure time, a route rule, then arrival time
        let departure = leg.formatted_departure_time();
        let arrival = leg.formatted_arrival_time();
        let rule_width = (width as usize)
            .saturating_sub(departure.len() + arrival.len() + 4)
            .max(1);
        let times = Line::from(vec![
            Span::styled(departure, time_style),
            Span::raw("  "),
            Span::styled(
                format!("{}●", "─".repeat(rule_width.saturating_sub(1))),
                muted,
            ),
            Span::raw("  "),
            Span::styled(arrival, time_style),
        ]);

        let cities = spread(
            vec![
                Span::styled(leg.departure_city.clone(), Style::default().fg(Color::Gray)),
                Span::styled(format!(" {}", leg.departure_terminal_label()), muted),
            ],
            vec![
                Span::styled(leg.arrival_city.clone(), Style::default().fg(Color::Gray)),
                Span::styled(format!(" {}", leg.arrival_terminal_label()), muted),
            ],
            width,
        );

        let schedule = spread(
            vec![Span::styled(leg.formatted_date(), muted)],
            vec![Span::styled(format!("◷ {}", leg.formatted_duration()), muted)],
            width,
        );

        vec![heading, Line::from(""), times, cities, schedule]
    }
}
