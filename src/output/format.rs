use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::DayStatus;

const WEEKDAY_ABBREV: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

pub(super) fn status_symbol(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Completed => "●",
        DayStatus::Partial => "◐",
        DayStatus::Missed => "○",
        DayStatus::Future => "·",
        DayStatus::Empty => " ",
    }
}

pub(super) fn status_color(status: DayStatus, use_color: bool) -> Option<Color> {
    if !use_color {
        return None;
    }
    match status {
        DayStatus::Completed => Some(Color::Green),
        DayStatus::Partial => Some(Color::Yellow),
        DayStatus::Missed => Some(Color::Red),
        DayStatus::Future | DayStatus::Empty => Some(Color::DarkGrey),
    }
}

/// Streak color tiers: >10 magenta, >3 red, >0 yellow
pub(super) fn streak_color(streak: u32, use_color: bool) -> Option<Color> {
    if !use_color {
        return None;
    }
    match streak {
        0 => None,
        1..=3 => Some(Color::Yellow),
        4..=10 => Some(Color::Red),
        _ => Some(Color::Magenta),
    }
}

pub(super) fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

pub(super) fn format_days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

/// "Daily" for all seven days, otherwise abbreviations in Sunday-first order
pub(super) fn schedule_label(days_of_week: &[u8]) -> String {
    if days_of_week.len() == WEEKDAY_ABBREV.len() {
        return "Daily".to_string();
    }
    days_of_week
        .iter()
        .filter_map(|&d| WEEKDAY_ABBREV.get(usize::from(d).wrapping_sub(1)))
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// First 8 characters of a habit id
pub(crate) fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

pub(super) fn paint(text: &str, ansi: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[{ansi}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}
