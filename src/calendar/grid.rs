use serde::Serialize;
use time::{Date, Month};

use crate::error::ApiError;
use crate::events::repo::Event;

/// A (year, month) position in the calendar. Navigation delegates to
/// `Month`'s own arithmetic so the December/January year roll needs no
/// special-casing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: Month,
}

impl MonthCursor {
    pub fn next(self) -> Self {
        let month = self.month.next();
        let year = if month == Month::January {
            self.year + 1
        } else {
            self.year
        };
        Self { year, month }
    }

    pub fn prev(self) -> Self {
        let month = self.month.previous();
        let year = if month == Month::December {
            self.year - 1
        } else {
            self.year
        };
        Self { year, month }
    }

    /// Header text, e.g. "March 2024".
    pub fn label(self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

/// One slot of the rendered month view. Padding serializes as JSON
/// `null`, matching the leading filler slots a week-aligned grid shows
/// before day 1.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GridCell {
    Padding,
    Day(DayCell),
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub day: u8,
    pub events: Vec<Event>,
}

/// Bucket a month's events into an ordered sequence of day cells.
///
/// Leading padding count is the weekday index (0 = Sunday) of day 1.
/// Each day cell carries the events whose start falls on that calendar
/// day, in input order. Linear scan per day; fine at personal-calendar
/// scale.
pub fn month_grid(year: i32, month: Month, events: &[Event]) -> Result<Vec<GridCell>, ApiError> {
    let invalid = || ApiError::invalid("Invalid year or month.");

    let first = Date::from_calendar_date(year, month, 1).map_err(|_| invalid())?;

    // The day before the 1st of the next month is the last day of this
    // one; leap years and the year roll fall out of date arithmetic.
    let next = MonthCursor { year, month }.next();
    let days_in_month = Date::from_calendar_date(next.year, next.month, 1)
        .map_err(|_| invalid())?
        .previous_day()
        .ok_or_else(invalid)?
        .day();

    let padding = first.weekday().number_days_from_sunday() as usize;
    let mut cells = Vec::with_capacity(padding + days_in_month as usize);
    cells.extend(std::iter::repeat_with(|| GridCell::Padding).take(padding));

    for day in 1..=days_in_month {
        let date = first.replace_day(day).map_err(|_| invalid())?;
        let day_events = events
            .iter()
            .filter(|e| e.start_time.date() == date)
            .cloned()
            .collect();
        cells.push(GridCell::Day(DayCell {
            day,
            events: day_events,
        }));
    }

    Ok(cells)
}
