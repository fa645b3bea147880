//! Body cards of the booking summary
//!
//! The scrolling body is a vertical stack of cards. Each card knows its
//! lines, its border and what a click on it means; `stack_cards` places
//! them on a virtual canvas and records the clickable hotspots.

use crate::action::Action;
use crate::components::flight_segment::FlightSegmentView;
use crate::components::layout::{spread, truncate};
use crate::model::{
    BaggageAllowance, Booking, LegDirection, Passenger, PassengerCategory, PaymentOption,
    ScreenState,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const ACCENT: Color = Color::Rgb(249, 115, 22);

/// Columns used by borders and horizontal padding
const CARD_CHROME: u16 = 4;

/// Widest the passenger summary may get in the collapsed header
const SUMMARY_MAX_WIDTH: usize = 30;

/// One card in the body stack
#[derive(Debug, Clone)]
pub struct Card {
    pub lines: Vec<Line<'static>>,
    pub bordered: bool,
    pub highlighted: bool,
    /// Action when anything on the card is clicked
    pub on_click: Option<Action>,
    /// A single clickable line inside the card, taking precedence
    pub link: Option<(usize, Action)>,
    /// Blank rows after the card
    pub gap: u16,
}

impl Card {
    fn new(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            bordered: true,
            highlighted: false,
            on_click: None,
            link: None,
            gap: 1,
        }
    }

    pub fn height(&self) -> u16 {
        let chrome = if self.bordered { 2 } else { 0 };
        self.lines.len() as u16 + chrome
    }
}

/// A clickable region on the body canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub area: Rect,
    pub action: Action,
}

/// Cards placed on the canvas
#[derive(Debug, Clone, Default)]
pub struct StackedCards {
    pub areas: Vec<Rect>,
    pub hotspots: Vec<Hotspot>,
    pub height: u16,
}

impl StackedCards {
    /// Action for a click at canvas coordinates; inner links win over cards
    pub fn hit(&self, x: u16, y: u16) -> Option<Action> {
        self.hotspots
            .iter()
            .rev()
            .find(|h| crate::components::layout::contains(h.area, x, y))
            .map(|h| h.action.clone())
    }
}

/// Place cards top to bottom on a canvas of the given width
pub fn stack_cards(cards: &[Card], width: u16) -> StackedCards {
    let mut stacked = StackedCards::default();
    let mut y = 0u16;

    for card in cards {
        let area = Rect::new(0, y, width, card.height());
        if let Some(action) = &card.on_click {
            stacked.hotspots.push(Hotspot {
                area,
                action: action.clone(),
            });
        }
        if let Some((line, action)) = &card.link {
            let top = if card.bordered { 1 } else { 0 };
            stacked.hotspots.push(Hotspot {
                area: Rect::new(0, y + top + *line as u16, width, 1),
                action: action.clone(),
            });
        }
        stacked.areas.push(area);
        y += card.height() + card.gap;
    }

    stacked.height = y;
    stacked
}

/// Content width available inside a card of the given outer width
pub fn inner_width(width: u16) -> u16 {
    width.saturating_sub(CARD_CHROME)
}

/// All body cards for the current state
pub fn build_cards(booking: &Booking, state: &ScreenState, width: u16) -> Vec<Card> {
    let inner = inner_width(width);
    let mut cards = vec![
        flights_card(booking, inner),
        passengers_card(booking, state.passengers_expanded, inner),
        price_card(booking, state.price_expanded, inner),
    ];

    let mut title = Card::new(vec![Line::from(Span::styled(
        " PAYMENT METHOD",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ))]);
    title.bordered = false;
    title.gap = 0;
    cards.push(title);

    for option in PaymentOption::all() {
        cards.push(payment_card(option, state.selected_payment == option, inner));
    }

    cards
}

fn flights_card(booking: &Booking, width: u16) -> Card {
    let mut lines = FlightSegmentView::new(&booking.outbound, LegDirection::Departure).lines(width);
    lines.push(Line::from(Span::styled(
        "╌".repeat(width as usize),
        Style::default().fg(Color::DarkGray),
    )));
    lines.extend(FlightSegmentView::new(&booking.inbound, LegDirection::Return).lines(width));
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "VIEW DETAILED RULES & TRANSIT INFO >",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );

    let link_line = lines.len() - 1;
    let mut card = Card::new(lines);
    card.link = Some((link_line, Action::OpenRules));
    card
}

fn chevron(expanded: bool) -> &'static str {
    if expanded {
        " ▴"
    } else {
        " ▾"
    }
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn category_style(category: PassengerCategory) -> Style {
    let color = match category {
        PassengerCategory::Adult => ACCENT,
        PassengerCategory::Child => Color::LightBlue,
        PassengerCategory::Infant => Color::LightMagenta,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn passengers_card(booking: &Booking, expanded: bool, width: u16) -> Card {
    let muted = Style::default().fg(Color::DarkGray);
    let summary = truncate(&booking.passenger_summary(), SUMMARY_MAX_WIDTH);

    let mut lines = vec![spread(
        vec![Span::styled("Passengers & Baggage", header_style())],
        vec![
            Span::styled(summary, muted),
            Span::styled(chevron(expanded), muted),
        ],
        width,
    )];

    if expanded {
        for direction in LegDirection::all() {
            let leg = booking.leg(direction);
            lines.push(Line::from(""));
            let bar_color = match direction {
                LegDirection::Departure => ACCENT,
                LegDirection::Return => Color::LightBlue,
            };
            lines.push(Line::from(vec![
                Span::styled("▌ ", Style::default().fg(bar_color)),
                Span::styled(
                    format!("{}: {}", direction.label().to_uppercase(), leg.route()),
                    muted.add_modifier(Modifier::BOLD),
                ),
            ]));

            for (i, passenger) in booking.passengers.iter().enumerate() {
                lines.extend(passenger_lines(i + 1, passenger, direction, width));
            }
        }
    }

    let mut card = Card::new(lines);
    card.on_click = Some(Action::TogglePassengers);
    card
}

/// Two lines per passenger: name with category badge, then baggage and meal
pub fn passenger_lines(
    number: usize,
    passenger: &Passenger,
    direction: LegDirection,
    width: u16,
) -> Vec<Line<'static>> {
    let detail = Style::default().fg(Color::Gray);

    let name = spread(
        vec![Span::styled(
            format!("  {}. {}", number, passenger.name),
            header_style(),
        )],
        vec![Span::styled(
            passenger.category.name().to_uppercase(),
            category_style(passenger.category),
        )],
        width,
    );

    let baggage = match passenger.baggage(direction) {
        BaggageAllowance::Weights {
            cabin_kg,
            checked_kg,
        } => vec![Span::styled(
            format!("     Cabin: {}kg  Checked: {}kg", cabin_kg, checked_kg),
            detail,
        )],
        BaggageAllowance::NotApplicable => vec![Span::styled(
            "     No baggage allowance",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )],
    };
    let services = spread(
        baggage,
        vec![Span::styled(passenger.meal(direction).to_string(), detail)],
        width,
    );

    vec![name, services]
}

fn price_card(booking: &Booking, expanded: bool, width: u16) -> Card {
    let muted = Style::default().fg(Color::DarkGray);
    let amount = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![spread(
        vec![Span::styled("Price Breakdown", header_style())],
        vec![
            Span::styled(
                booking.price.total().to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(chevron(expanded), muted),
        ],
        width,
    )];

    if expanded {
        lines.push(Line::from(""));
        lines.push(spread(
            vec![Span::styled(
                format!("Fare ({})", booking.passenger_summary()),
                muted,
            )],
            vec![Span::styled(booking.price.fare.to_string(), amount)],
            width,
        ));
        lines.push(spread(
            vec![Span::styled("Tax & Service", muted)],
            vec![Span::styled(booking.price.tax_and_service.to_string(), amount)],
            width,
        ));
    }

    let mut card = Card::new(lines);
    card.on_click = Some(Action::TogglePrice);
    card
}

fn payment_card(option: PaymentOption, selected: bool, width: u16) -> Card {
    let radio = if selected { "(●)" } else { "( )" };
    let radio_style = if selected {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = spread(
        vec![
            Span::styled(
                format!(" {} ", option.badge()),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            Span::raw("  "),
            Span::styled(option.label(), header_style()),
        ],
        vec![Span::styled(radio, radio_style)],
        width,
    );

    let mut card = Card::new(vec![line]);
    card.highlighted = selected;
    card.on_click = Some(Action::SelectPayment(option));
    card.gap = 0;
    card
}
