use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, ComboReader, ComboWriter, ProductReader, ProductWriter,
    ScheduleReader, ScheduleWriter,
};
use crate::domain::{
    category::{Category, NewCategory},
    combo::{Combo, NewCombo},
    product::{NewProduct, Product, ProductListQuery},
    schedule::{ScheduleEntry, UpsertSchedule},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    }
}

mock! {
    pub ComboReader {}

    impl ComboReader for ComboReader {
        fn list_combos(&self) -> RepositoryResult<Vec<Combo>>;
    }
}

mock! {
    pub ComboWriter {}

    impl ComboWriter for ComboWriter {
        fn create_combo(&self, new_combo: &NewCombo) -> RepositoryResult<Combo>;
    }
}

mock! {
    pub ScheduleReader {}

    impl ScheduleReader for ScheduleReader {
        fn get_schedule_by_day(&self, day_of_week: i32) -> RepositoryResult<Option<ScheduleEntry>>;
        fn list_schedules(&self) -> RepositoryResult<Vec<ScheduleEntry>>;
    }
}

mock! {
    pub ScheduleWriter {}

    impl ScheduleWriter for ScheduleWriter {
        fn upsert_schedule(&self, entry: &UpsertSchedule) -> RepositoryResult<ScheduleEntry>;
    }
}
