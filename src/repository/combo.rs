use diesel::prelude::*;

use crate::domain::combo::{Combo as DomainCombo, NewCombo as DomainNewCombo};
use crate::models::combo::{Combo as DbCombo, NewCombo as DbNewCombo};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ComboReader, ComboWriter, DieselRepository};

impl ComboReader for DieselRepository {
    fn list_combos(&self) -> RepositoryResult<Vec<DomainCombo>> {
        use crate::schema::combos;

        let mut conn = self.conn()?;
        let db_combos = combos::table
            .filter(combos::is_archived.eq(false))
            .order(combos::created_at.desc())
            .load::<DbCombo>(&mut conn)?;

        Ok(db_combos.into_iter().map(Into::into).collect())
    }
}

impl ComboWriter for DieselRepository {
    fn create_combo(&self, new_combo: &DomainNewCombo) -> RepositoryResult<DomainCombo> {
        use crate::schema::combos;

        let mut conn = self.conn()?;
        let db_new = DbNewCombo::from(new_combo);

        let created = diesel::insert_into(combos::table)
            .values(&db_new)
            .get_result::<DbCombo>(&mut conn)?;

        Ok(created.into())
    }
}
