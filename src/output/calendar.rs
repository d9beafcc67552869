use chrono::Datelike;
use comfy_table::{Cell, CellAlignment};

use crate::consts::DATE_FORMAT;
use crate::core::{CalendarDay, DayStat, MonthNames, MonthSummary, MonthView};
use crate::error::AppError;
use crate::output::format::{
    create_styled_table, format_percent, header_cell, paint, status_color, status_symbol,
    styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct CalendarOptions {
    pub(crate) use_color: bool,
    pub(crate) today: CalendarDay,
    pub(crate) names: MonthNames,
    pub(crate) habit_count: usize,
}

fn day_cell(stat: &DayStat, opts: &CalendarOptions) -> Cell {
    let text = format!("{:>2} {}", stat.day.day(), status_symbol(stat.status));
    styled_cell(&text, status_color(stat.status, opts.use_color), stat.day == opts.today)
        .set_alignment(CellAlignment::Center)
}

/// Monday-first rows of seven, padded with blanks before the 1st and after the last day
fn week_rows(days: &[DayStat]) -> Vec<Vec<Option<&DayStat>>> {
    let lead = days
        .first()
        .map(|d| d.day.weekday().num_days_from_monday() as usize)
        .unwrap_or(0);

    let mut slots: Vec<Option<&DayStat>> = vec![None; lead];
    slots.extend(days.iter().map(Some));
    while slots.len() % 7 != 0 {
        slots.push(None);
    }
    slots.chunks(7).map(|w| w.to_vec()).collect()
}

pub(crate) fn print_calendar(view: &MonthView, opts: CalendarOptions) {
    let mut table = create_styled_table();
    table.set_header(
        opts.names
            .weekday_headers()
            .iter()
            .map(|h| header_cell(h, opts.use_color))
            .collect::<Vec<_>>(),
    );

    for week in week_rows(&view.days) {
        table.add_row(
            week.into_iter()
                .map(|slot| match slot {
                    Some(stat) => day_cell(stat, &opts),
                    None => Cell::new(""),
                })
                .collect::<Vec<_>>(),
        );
    }

    println!("\n  {}\n", paint(&view.label, "1", opts.use_color));
    println!("{table}");
    print_month_summary(&MonthSummary::from_days(&view.days), opts);
}

fn print_month_summary(summary: &MonthSummary, opts: CalendarOptions) {
    if opts.habit_count == 0 {
        println!("\n  No habits yet. Add one with `habitcal add <TITLE>`.\n");
        return;
    }
    let c = opts.use_color;
    let counts = format!(
        "{} completed · {} partial · {} missed",
        paint(&summary.completed.to_string(), "32", c),
        paint(&summary.partial.to_string(), "33", c),
        paint(&summary.missed.to_string(), "31", c),
    );
    match summary.average_ratio {
        Some(avg) => println!(
            "\n  {} | {} consistency across {} habits\n",
            counts,
            paint(&format_percent(avg), "36", c),
            opts.habit_count
        ),
        None => println!("\n  {counts}\n"),
    }
}

pub(crate) fn output_calendar_json(view: &MonthView) -> Result<String, AppError> {
    let summary = MonthSummary::from_days(&view.days);
    let days: Vec<serde_json::Value> = view
        .days
        .iter()
        .map(|s| {
            serde_json::json!({
                "date": s.day.format(DATE_FORMAT).to_string(),
                "timestamp": s.timestamp,
                "status": s.status.as_str(),
                "ratio": s.ratio,
            })
        })
        .collect();

    let output = serde_json::json!({
        "year": view.year,
        "month": view.month,
        "label": view.label,
        "days": days,
        "summary": {
            "completed": summary.completed,
            "partial": summary.partial,
            "missed": summary.missed,
            "future": summary.future,
            "empty": summary.empty,
            "average_ratio": summary.average_ratio,
        },
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DayStatus, month_view};
    use crate::utils::Timezone;
    use chrono::NaiveDate;

    const UTC: Timezone = Timezone::Named(chrono_tz::UTC);

    fn october() -> MonthView {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        month_view(&[], 0, today, UTC, MonthNames::default())
    }

    #[test]
    fn weeks_start_on_monday() {
        // 2026-10-01 is a Thursday
        let view = october();
        let rows = week_rows(&view.days);
        assert_eq!(rows.len(), 5);
        assert!(rows[0][..3].iter().all(Option::is_none));
        assert_eq!(rows[0][3].map(|s| s.day.day()), Some(1));
        assert_eq!(rows[4][5].map(|s| s.day.day()), Some(31));
        assert!(rows[4][6].is_none());
        assert!(rows.iter().all(|r| r.len() == 7));
    }

    #[test]
    fn json_has_one_entry_per_day() {
        let json: serde_json::Value =
            serde_json::from_str(&output_calendar_json(&october()).unwrap()).unwrap();
        let days = json["days"].as_array().unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0]["date"], "2026-10-01");
        assert_eq!(days[0]["status"], DayStatus::Empty.as_str());
        assert_eq!(days[30]["status"], "future");
        assert_eq!(json["label"], "October 2026");
        assert_eq!(json["summary"]["empty"], 19);
        assert!(json["summary"]["average_ratio"].is_null());
    }
}
