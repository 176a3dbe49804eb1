use std::cmp::Ordering;

use chrono::{Datelike, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Weekday display names indexed by day-of-week, 0 = Sunday through
/// 6 = Saturday (the `Date.getDay()` numbering the schedule table uses).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// Looks up the display name for `day_of_week`, if it is a valid day.
pub fn weekday_name(day_of_week: i32) -> Option<&'static str> {
    usize::try_from(day_of_week)
        .ok()
        .and_then(|index| WEEKDAY_NAMES.get(index).copied())
}

/// One weekday's operating-hours record.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScheduleEntry {
    /// Unique identifier of the schedule row.
    pub id: i32,
    /// Day of week, 0 = Sunday through 6 = Saturday. Unique per row.
    pub day_of_week: i32,
    /// Display name shown on the hours screen ("Lunes", "Martes", ...).
    pub day_name: String,
    /// Time the business opens on this day.
    pub open_time: NaiveTime,
    /// Time the business closes on this day.
    pub close_time: NaiveTime,
    /// Manual override: false keeps the business closed all day.
    pub is_open: bool,
    /// Timestamp for when the schedule row was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the schedule row.
    pub updated_at: NaiveDateTime,
}

/// Payload upserted by the schedule admin form, keyed by `day_of_week`.
#[derive(Debug, Clone)]
pub struct UpsertSchedule {
    /// Day of week the row is keyed by.
    pub day_of_week: i32,
    /// Display name derived from the weekday table.
    pub day_name: String,
    /// Time the business opens on this day.
    pub open_time: NaiveTime,
    /// Time the business closes on this day.
    pub close_time: NaiveTime,
    /// Manual override submitted by the owner.
    pub is_open: bool,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl UpsertSchedule {
    /// Build an upsert payload with the supplied values and current timestamp.
    pub fn new(
        day_of_week: i32,
        day_name: impl Into<String>,
        open_time: NaiveTime,
        close_time: NaiveTime,
        is_open: bool,
    ) -> Self {
        Self {
            day_of_week,
            day_name: day_name.into(),
            open_time,
            close_time,
            is_open,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Evaluates whether the business is open at the local instant `now`.
///
/// The entry matching the current weekday must exist and have its manual
/// flag set; the window is half-open `[open_time, close_time)`. A close
/// time earlier than the open time wraps past midnight; equal times are
/// an empty window and read as closed.
pub fn is_open_at(now: NaiveDateTime, entries: &[ScheduleEntry]) -> bool {
    let today = now.weekday().num_days_from_sunday() as i32;
    let Some(entry) = entries.iter().find(|entry| entry.day_of_week == today) else {
        return false;
    };
    if !entry.is_open {
        return false;
    }

    let time = now.time();
    match entry.open_time.cmp(&entry.close_time) {
        Ordering::Less => time >= entry.open_time && time < entry.close_time,
        Ordering::Greater => time >= entry.open_time || time < entry.close_time,
        Ordering::Equal => false,
    }
}
