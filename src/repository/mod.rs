use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::combo::{Combo, NewCombo};
use crate::domain::product::{NewProduct, Product, ProductListQuery};
use crate::domain::schedule::{ScheduleEntry, UpsertSchedule};

pub mod errors;

pub mod category;
pub mod combo;
pub mod product;
pub mod schedule;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read operations over catalog products.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over catalog products (the seeding surface; the web
/// routes never mutate the catalog).
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
}

/// Read operations over menu categories.
pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over menu categories (seeding surface).
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read operations over promotional combos.
pub trait ComboReader {
    fn list_combos(&self) -> RepositoryResult<Vec<Combo>>;
}

/// Write operations over promotional combos (seeding surface).
pub trait ComboWriter {
    fn create_combo(&self, new_combo: &NewCombo) -> RepositoryResult<Combo>;
}

/// Read operations over the weekly schedule.
pub trait ScheduleReader {
    fn get_schedule_by_day(&self, day_of_week: i32) -> RepositoryResult<Option<ScheduleEntry>>;
    fn list_schedules(&self) -> RepositoryResult<Vec<ScheduleEntry>>;
}

/// Write operations over the weekly schedule.
pub trait ScheduleWriter {
    fn upsert_schedule(&self, entry: &UpsertSchedule) -> RepositoryResult<ScheduleEntry>;
}
