//! Axis tick labels for millisecond push timestamps.

use crate::data_types::AxisBounds;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    MonthYear,  // Jan 2024
    MonthDay,   // Jan 12
    DayHourMin, // Jan 12 10:30
    HourMin,    // 10:30
}

/// Picks a label format for the visible x range of the detail chart.
pub fn tick_format_for(x: AxisBounds) -> TickFormat {
    const HOUR_MS: f64 = 3_600_000.0;
    const DAY_MS: f64 = 24.0 * HOUR_MS;

    let span = x.span().abs();
    if span > DAY_MS * 180.0 {
        TickFormat::MonthYear
    } else if span > DAY_MS * 3.0 {
        TickFormat::MonthDay
    } else if span > HOUR_MS * 12.0 {
        TickFormat::DayHourMin
    } else {
        TickFormat::HourMin
    }
}

/// Formats a millisecond timestamp. Non-finite values and values outside
/// chrono's range fall back to the raw number.
pub fn format_tick(value_ms: f64, format: TickFormat) -> String {
    let dt = if value_ms.is_finite() {
        DateTime::<Utc>::from_timestamp_millis(value_ms as i64)
    } else {
        None
    };
    let Some(dt) = dt else {
        return format!("{:.0}", value_ms);
    };

    match format {
        TickFormat::MonthYear => dt.format("%b %Y").to_string(),
        TickFormat::MonthDay => dt.format("%b %d").to_string(),
        TickFormat::DayHourMin => dt.format("%b %d %H:%M").to_string(),
        TickFormat::HourMin => dt.format("%H:%M").to_string(),
    }
}

/// The overview strip always labels by day.
pub fn format_overview_tick(value_ms: f64) -> String {
    format_tick(value_ms, TickFormat::MonthDay)
}
