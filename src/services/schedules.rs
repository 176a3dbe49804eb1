use serde::{Deserialize, Serialize};

use crate::domain::schedule::{ScheduleEntry, WEEKDAY_NAMES};
use crate::forms::schedule::UpsertScheduleForm;
use crate::repository::{ScheduleReader, ScheduleWriter};
use crate::services::{ServiceError, ServiceResult};

/// Day-picker order used by the admin screen: Monday first, Sunday last.
const PICKER_ORDER: [usize; 7] = [1, 2, 3, 4, 5, 6, 0];

/// Query parameters accepted by the schedule admin screen.
#[derive(Debug, Default, Deserialize)]
pub struct SchedulesQuery {
    /// Day picked for editing; defaults to Monday.
    pub day: Option<i32>,
}

/// View of one schedule row for the templates.
#[derive(Debug, Serialize)]
pub struct ScheduleView {
    pub day_of_week: i32,
    pub day_name: String,
    pub open: String,
    pub close: String,
    pub is_open: bool,
}

impl From<&ScheduleEntry> for ScheduleView {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            day_of_week: entry.day_of_week,
            day_name: entry.day_name.clone(),
            open: entry.open_time.format("%H:%M").to_string(),
            close: entry.close_time.format("%H:%M").to_string(),
            is_open: entry.is_open,
        }
    }
}

/// One entry of the admin day picker.
#[derive(Debug, Serialize)]
pub struct WeekdayOption {
    pub day_of_week: i32,
    pub name: &'static str,
    /// Whether a stored row already exists for this day.
    pub has_schedule: bool,
}

/// Data required to render the schedule admin template.
pub struct SchedulesPageData {
    pub schedules: Vec<ScheduleView>,
    pub weekdays: Vec<WeekdayOption>,
    /// Day currently being edited.
    pub selected_day: i32,
    /// Stored row for the selected day, used to prefill the form.
    pub selected: Option<ScheduleView>,
}

/// Loads the stored schedule rows, the day picker and the prefill values
/// for the selected day.
pub fn load_schedules_page<R>(repo: &R, query: SchedulesQuery) -> ServiceResult<SchedulesPageData>
where
    R: ScheduleReader + ?Sized,
{
    let schedules = repo.list_schedules()?;

    let selected_day = query.day.filter(|day| (0..=6).contains(day)).unwrap_or(1);
    let selected = repo
        .get_schedule_by_day(selected_day)?
        .as_ref()
        .map(ScheduleView::from);

    let weekdays = PICKER_ORDER
        .into_iter()
        .map(|day| WeekdayOption {
            day_of_week: day as i32,
            name: WEEKDAY_NAMES[day],
            has_schedule: schedules
                .iter()
                .any(|entry| entry.day_of_week == day as i32),
        })
        .collect();

    Ok(SchedulesPageData {
        schedules: schedules.iter().map(ScheduleView::from).collect(),
        weekdays,
        selected_day,
        selected,
    })
}

/// Upserts one weekday row from the admin form and returns the stored
/// entry. The follow-up page load is the refetch.
pub fn save_schedule<R>(repo: &R, form: UpsertScheduleForm) -> ServiceResult<ScheduleEntry>
where
    R: ScheduleWriter + ?Sized,
{
    let entry = form
        .into_upsert_schedule()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let stored = repo.upsert_schedule(&entry)?;
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime};

    use crate::repository::mock::{MockScheduleReader, MockScheduleWriter};

    fn entry(day_of_week: i32, day_name: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: day_of_week + 1,
            day_of_week,
            day_name: day_name.to_string(),
            open_time: NaiveTime::parse_from_str("09:00", "%H:%M").expect("open time"),
            close_time: NaiveTime::parse_from_str("22:00", "%H:%M").expect("close time"),
            is_open: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn load_schedules_page_marks_days_with_rows() {
        let mut repo = MockScheduleReader::new();
        repo.expect_list_schedules()
            .times(1)
            .returning(|| Ok(vec![entry(1, "Lunes"), entry(6, "Sábado")]));
        repo.expect_get_schedule_by_day()
            .times(1)
            .withf(|day| *day == 1)
            .returning(|day| Ok(Some(entry(day, "Lunes"))));

        let data =
            load_schedules_page(&repo, SchedulesQuery::default()).expect("expected success");

        assert_eq!(data.schedules.len(), 2);
        assert_eq!(data.schedules[0].open, "09:00");
        assert_eq!(data.schedules[0].close, "22:00");

        assert_eq!(data.weekdays.len(), 7);
        // Monday first, Sunday last.
        assert_eq!(data.weekdays[0].name, "Lunes");
        assert_eq!(data.weekdays[6].name, "Domingo");
        assert!(data.weekdays[0].has_schedule);
        assert!(data.weekdays[5].has_schedule);
        assert!(!data.weekdays[6].has_schedule);

        assert_eq!(data.selected_day, 1);
        let selected = data.selected.expect("prefill for Monday");
        assert_eq!(selected.open, "09:00");
    }

    #[test]
    fn load_schedules_page_prefills_the_requested_day() {
        let mut repo = MockScheduleReader::new();
        repo.expect_list_schedules()
            .times(1)
            .returning(|| Ok(Vec::new()));
        repo.expect_get_schedule_by_day()
            .times(1)
            .withf(|day| *day == 4)
            .returning(|_| Ok(None));

        let data = load_schedules_page(&repo, SchedulesQuery { day: Some(4) })
            .expect("expected success");

        assert_eq!(data.selected_day, 4);
        assert!(data.selected.is_none());
    }

    #[test]
    fn load_schedules_page_falls_back_to_monday_for_invalid_days() {
        let mut repo = MockScheduleReader::new();
        repo.expect_list_schedules()
            .times(1)
            .returning(|| Ok(Vec::new()));
        repo.expect_get_schedule_by_day()
            .times(1)
            .withf(|day| *day == 1)
            .returning(|_| Ok(None));

        let data = load_schedules_page(&repo, SchedulesQuery { day: Some(11) })
            .expect("expected success");

        assert_eq!(data.selected_day, 1);
    }

    #[test]
    fn save_schedule_upserts_the_derived_payload() {
        let mut repo = MockScheduleWriter::new();
        repo.expect_upsert_schedule()
            .times(1)
            .withf(|payload| {
                assert_eq!(payload.day_of_week, 2);
                assert_eq!(payload.day_name, "Martes");
                assert_eq!(payload.open_time.to_string(), "08:30:00");
                assert_eq!(payload.close_time.to_string(), "21:00:00");
                assert!(payload.is_open);
                true
            })
            .returning(|payload| {
                let mut stored = entry(payload.day_of_week, &payload.day_name);
                stored.open_time = payload.open_time;
                stored.close_time = payload.close_time;
                Ok(stored)
            });

        let form = UpsertScheduleForm {
            day_of_week: 2,
            open_time: "08:30".to_string(),
            close_time: "21:00".to_string(),
            is_open: true,
        };

        let stored = save_schedule(&repo, form).expect("expected success");
        assert_eq!(stored.day_name, "Martes");
    }

    #[test]
    fn save_schedule_surfaces_form_errors() {
        let repo = MockScheduleWriter::new();

        let form = UpsertScheduleForm {
            day_of_week: 9,
            open_time: "08:30".to_string(),
            close_time: "21:00".to_string(),
            is_open: true,
        };

        let result = save_schedule(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
