use diesel::prelude::*;

use crate::domain::schedule::{
    ScheduleEntry as DomainScheduleEntry, UpsertSchedule as DomainUpsertSchedule,
};
use crate::models::schedule::{Schedule as DbSchedule, UpsertSchedule as DbUpsertSchedule};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ScheduleReader, ScheduleWriter};

impl ScheduleReader for DieselRepository {
    fn get_schedule_by_day(
        &self,
        day_of_week: i32,
    ) -> RepositoryResult<Option<DomainScheduleEntry>> {
        use crate::schema::schedules;

        let mut conn = self.conn()?;
        let schedule = schedules::table
            .filter(schedules::day_of_week.eq(day_of_week))
            .first::<DbSchedule>(&mut conn)
            .optional()?;

        Ok(schedule.map(Into::into))
    }

    fn list_schedules(&self) -> RepositoryResult<Vec<DomainScheduleEntry>> {
        use crate::schema::schedules;

        let mut conn = self.conn()?;
        let db_schedules = schedules::table
            .order(schedules::day_of_week.asc())
            .load::<DbSchedule>(&mut conn)?;

        Ok(db_schedules.into_iter().map(Into::into).collect())
    }
}

impl ScheduleWriter for DieselRepository {
    fn upsert_schedule(
        &self,
        entry: &DomainUpsertSchedule,
    ) -> RepositoryResult<DomainScheduleEntry> {
        use crate::schema::schedules;

        let mut conn = self.conn()?;
        let db_row = DbUpsertSchedule::from(entry);

        let stored = diesel::insert_into(schedules::table)
            .values(&db_row)
            .on_conflict(schedules::day_of_week)
            .do_update()
            .set(&db_row)
            .get_result::<DbSchedule>(&mut conn)?;

        Ok(stored.into())
    }
}
