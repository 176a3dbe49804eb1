use chrono::{NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::schedule::{
    ScheduleEntry as DomainScheduleEntry, UpsertSchedule as DomainUpsertSchedule,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::schedules)]
pub struct Schedule {
    pub id: i32,
    pub day_of_week: i32,
    pub day_name: String,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub is_open: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::schedules)]
pub struct UpsertSchedule<'a> {
    pub day_of_week: i32,
    pub day_name: &'a str,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub is_open: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Schedule> for DomainScheduleEntry {
    fn from(value: Schedule) -> Self {
        Self {
            id: value.id,
            day_of_week: value.day_of_week,
            day_name: value.day_name,
            open_time: value.open_time,
            close_time: value.close_time,
            is_open: value.is_open,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpsertSchedule> for UpsertSchedule<'a> {
    fn from(value: &'a DomainUpsertSchedule) -> Self {
        Self {
            day_of_week: value.day_of_week,
            day_name: value.day_name.as_str(),
            open_time: value.open_time,
            close_time: value.close_time,
            is_open: value.is_open,
            updated_at: value.updated_at,
        }
    }
}
