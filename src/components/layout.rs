//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Widest the phone-style column grows on large terminals
pub const MAX_COLUMN_WIDTH: u16 = 64;

/// Screen layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Narrow the area to a centered column no wider than `MAX_COLUMN_WIDTH`
pub fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_COLUMN_WIDTH);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

/// Calculate booking screen layout: fixed header, scrolling body, fixed footer
pub fn calculate_screen_layout(area: Rect, footer_height: u16) -> ScreenLayout {
    let column = centered_column(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(column);

    ScreenLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// The part of `rect` inside `bounds`, or `None` if nothing is left
pub fn fit(rect: Rect, bounds: Rect) -> Option<Rect> {
    let clipped = rect.intersection(bounds);
    (!clipped.is_empty()).then_some(clipped)
}

/// Whether a terminal cell lies inside the rect
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Lay out left and right spans on one line of the given width
///
/// The right group is pushed to the right edge; when both don't fit the
/// gap collapses to a single space.
pub fn spread<'a>(left: Vec<Span<'a>>, right: Vec<Span<'a>>, width: u16) -> Line<'a> {
    let used: usize = left
        .iter()
        .chain(right.iter())
        .map(|s| s.content.width())
        .sum();
    let gap = (width as usize).saturating_sub(used).max(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}

/// Truncate text to a display width, ending with `…` when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
