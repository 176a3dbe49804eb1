use chrono::NaiveTime;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::schedule::{UpsertSchedule, weekday_name};

/// Result type returned by the schedule form helpers.
pub type ScheduleFormResult<T> = Result<T, ScheduleFormError>;

/// Errors that can occur while processing the schedule form.
#[derive(Debug, Error)]
pub enum ScheduleFormError {
    /// The submitted day is outside the 0..=6 weekday range.
    #[error("unknown day of week `{0}`")]
    UnknownDay(i32),
    /// A time field could not be parsed as `HH:MM`.
    #[error("invalid {field} `{value}`")]
    InvalidTime { field: &'static str, value: String },
}

/// Form payload emitted by the schedule admin screen. Required-field
/// enforcement stays on the native inputs; this type only normalizes.
#[derive(Debug, Deserialize)]
pub struct UpsertScheduleForm {
    /// Day selected in the picker, 0 = Sunday through 6 = Saturday.
    pub day_of_week: i32,
    /// Opening time as produced by `<input type="time">` (`HH:MM`).
    pub open_time: String,
    /// Closing time (`HH:MM`).
    pub close_time: String,
    /// Whether the business opens at all on this day. Unchecked boxes are
    /// absent from the form body, hence the default.
    #[serde(default)]
    pub is_open: bool,
}

impl UpsertScheduleForm {
    /// Validates the payload into a domain `UpsertSchedule`, deriving the
    /// display name from the weekday table.
    pub fn into_upsert_schedule(self) -> ScheduleFormResult<UpsertSchedule> {
        let day_name =
            weekday_name(self.day_of_week).ok_or(ScheduleFormError::UnknownDay(self.day_of_week))?;
        let open_time = parse_time("open time", &self.open_time)?;
        let close_time = parse_time("close time", &self.close_time)?;

        Ok(UpsertSchedule::new(
            self.day_of_week,
            day_name,
            open_time,
            close_time,
            self.is_open,
        ))
    }
}

fn parse_time(field: &'static str, value: &str) -> ScheduleFormResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ScheduleFormError::InvalidTime {
            field,
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_schedule_form_converts_and_derives_day_name() {
        let form = UpsertScheduleForm {
            day_of_week: 1,
            open_time: "09:00".to_string(),
            close_time: " 22:30 ".to_string(),
            is_open: true,
        };

        let entry = form
            .into_upsert_schedule()
            .expect("expected conversion to succeed");

        assert_eq!(entry.day_of_week, 1);
        assert_eq!(entry.day_name, "Lunes");
        assert_eq!(entry.open_time.to_string(), "09:00:00");
        assert_eq!(entry.close_time.to_string(), "22:30:00");
        assert!(entry.is_open);
    }

    #[test]
    fn upsert_schedule_form_accepts_seconds_suffix() {
        let form = UpsertScheduleForm {
            day_of_week: 0,
            open_time: "09:00:00".to_string(),
            close_time: "13:15:00".to_string(),
            is_open: false,
        };

        let entry = form
            .into_upsert_schedule()
            .expect("expected conversion to succeed");

        assert_eq!(entry.day_name, "Domingo");
        assert!(!entry.is_open);
    }

    #[test]
    fn upsert_schedule_form_rejects_out_of_range_day() {
        for day in [-1, 7] {
            let form = UpsertScheduleForm {
                day_of_week: day,
                open_time: "09:00".to_string(),
                close_time: "22:00".to_string(),
                is_open: true,
            };

            let result = form.into_upsert_schedule();

            assert!(matches!(
                result,
                Err(ScheduleFormError::UnknownDay(value)) if value == day
            ));
        }
    }

    #[test]
    fn upsert_schedule_form_rejects_malformed_time() {
        let form = UpsertScheduleForm {
            day_of_week: 3,
            open_time: "9 en punto".to_string(),
            close_time: "22:00".to_string(),
            is_open: true,
        };

        let result = form.into_upsert_schedule();

        assert!(matches!(
            result,
            Err(ScheduleFormError::InvalidTime { field, value })
                if field == "open time" && value == "9 en punto"
        ));
    }
}
