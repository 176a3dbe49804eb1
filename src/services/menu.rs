use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::combo::Combo;
use crate::domain::product::{Product, ProductListQuery};
use crate::domain::schedule::{self, ScheduleEntry};
use crate::repository::{CategoryReader, ComboReader, ProductReader, ScheduleReader};
use crate::services::schedules::ScheduleView;
use crate::services::{ServiceError, ServiceResult, format_price};

/// Copy shown when a product has no description of its own.
const DEFAULT_PRODUCT_DESCRIPTION: &str = "Nuestra preparación especial con ingredientes \
                                           premium seleccionados por Rubén para garantizar \
                                           el mejor sabor.";

/// Query parameters accepted by the menu index page.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// Optional category filter selected in the header chips.
    pub category: Option<i32>,
}

/// Composite snapshot of the four menu tables, fetched in one pass.
#[derive(Debug, Serialize)]
pub struct MenuData {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub combos: Vec<Combo>,
    pub schedules: Vec<ScheduleEntry>,
}

/// Loads categories, products, combos and schedules together.
pub fn load_menu<R>(repo: &R) -> ServiceResult<MenuData>
where
    R: CategoryReader + ProductReader + ComboReader + ScheduleReader + ?Sized,
{
    let categories = repo.list_categories()?;
    let products = repo.list_products(ProductListQuery::new())?;
    let combos = repo.list_combos()?;
    let schedules = repo.list_schedules()?;

    Ok(MenuData {
        categories,
        products,
        combos,
        schedules,
    })
}

/// Payload answered by the composite menu endpoint.
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub is_open: bool,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub combos: Vec<Combo>,
    pub schedules: Vec<ScheduleEntry>,
}

/// Loads the composite menu payload plus the open/closed status at `now`.
pub fn load_menu_response<R>(repo: &R, now: NaiveDateTime) -> ServiceResult<MenuResponse>
where
    R: CategoryReader + ProductReader + ComboReader + ScheduleReader + ?Sized,
{
    let menu = load_menu(repo)?;
    let is_open = schedule::is_open_at(now, &menu.schedules);

    let MenuData {
        categories,
        products,
        combos,
        schedules,
    } = menu;

    Ok(MenuResponse {
        is_open,
        categories,
        products,
        combos,
        schedules,
    })
}

/// View model for a product card on the menu and detail templates.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price_formatted: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price_formatted: format_price(i64::from(product.price_cents)),
        }
    }
}

/// View model for a combo card on the promo slider.
#[derive(Debug, Serialize)]
pub struct ComboView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price_formatted: String,
}

impl From<&Combo> for ComboView {
    fn from(combo: &Combo) -> Self {
        Self {
            id: combo.id,
            name: combo.name.clone(),
            description: combo.description.clone(),
            image_url: combo.image_url.clone(),
            price_formatted: format_price(i64::from(combo.price_cents)),
        }
    }
}

/// One category section of the menu with its products.
#[derive(Debug, Serialize)]
pub struct MenuSection {
    pub category: Category,
    pub products: Vec<ProductView>,
}

/// Data required to render the menu index template.
pub struct MenuPageData {
    /// All categories, for the filter chips.
    pub categories: Vec<Category>,
    /// Product sections, restricted when a filter is active.
    pub sections: Vec<MenuSection>,
    pub combos: Vec<ComboView>,
    /// Hours shown in the info modal.
    pub schedules: Vec<ScheduleView>,
    pub is_open: bool,
    pub category_filter: Option<i32>,
}

/// Loads the menu index page, grouping products under their categories.
pub fn load_menu_page<R>(repo: &R, now: NaiveDateTime, query: MenuQuery) -> ServiceResult<MenuPageData>
where
    R: CategoryReader + ProductReader + ComboReader + ScheduleReader + ?Sized,
{
    let menu = load_menu(repo)?;
    let is_open = schedule::is_open_at(now, &menu.schedules);

    let MenuData {
        categories,
        products,
        combos,
        schedules,
    } = menu;

    let sections = categories
        .iter()
        .filter(|category| query.category.map_or(true, |id| id == category.id))
        .map(|category| MenuSection {
            category: category.clone(),
            products: products
                .iter()
                .filter(|product| product.category_id == Some(category.id))
                .map(ProductView::from)
                .collect(),
        })
        .collect();

    Ok(MenuPageData {
        categories,
        sections,
        combos: combos.iter().map(ComboView::from).collect(),
        schedules: schedules.iter().map(ScheduleView::from).collect(),
        is_open,
        category_filter: query.category,
    })
}

/// Data required to render the product detail template.
pub struct ProductPageData {
    pub product: ProductView,
    pub category_name: Option<String>,
    /// Description with the house fallback applied.
    pub description: String,
}

/// Loads the product detail page. Missing and archived products both read
/// as not found.
pub fn load_product_page<R>(repo: &R, product_id: i32) -> ServiceResult<ProductPageData>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    let Some(product) = repo.get_product_by_id(product_id)? else {
        return Err(ServiceError::NotFound);
    };
    if product.is_archived {
        return Err(ServiceError::NotFound);
    }

    let category_name = match product.category_id {
        Some(category_id) => repo
            .list_categories()?
            .into_iter()
            .find(|category| category.id == category_id)
            .map(|category| category.name),
        None => None,
    };

    let description = product
        .description
        .clone()
        .unwrap_or_else(|| DEFAULT_PRODUCT_DESCRIPTION.to_string());

    Ok(ProductPageData {
        product: ProductView::from(&product),
        category_name,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    use crate::repository::mock::{
        MockCategoryReader, MockComboReader, MockProductReader, MockScheduleReader,
    };
    use crate::repository::{
        CategoryReader, ComboReader, ProductReader, RepositoryResult, ScheduleReader,
    };

    fn category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn product(id: i32, category_id: Option<i32>, name: &str) -> Product {
        Product {
            id,
            category_id,
            name: name.to_string(),
            description: None,
            price_cents: 150_000,
            image_url: None,
            is_archived: false,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn monday_entry() -> ScheduleEntry {
        ScheduleEntry {
            id: 1,
            day_of_week: 1,
            day_name: "Lunes".to_string(),
            open_time: NaiveTime::parse_from_str("09:00", "%H:%M").expect("open time"),
            close_time: NaiveTime::parse_from_str("22:00", "%H:%M").expect("close time"),
            is_open: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    // 2024-01-01 is a Monday.
    fn monday_at(time: &str) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .expect("date")
            .and_time(NaiveTime::parse_from_str(time, "%H:%M").expect("time"))
    }

    struct FakeRepo {
        categories: MockCategoryReader,
        products: MockProductReader,
        combos: MockComboReader,
        schedules: MockScheduleReader,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                categories: MockCategoryReader::new(),
                products: MockProductReader::new(),
                combos: MockComboReader::new(),
                schedules: MockScheduleReader::new(),
            }
        }
    }

    impl CategoryReader for FakeRepo {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
            self.categories.list_categories()
        }
    }

    impl ProductReader for FakeRepo {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
            self.products.get_product_by_id(id)
        }

        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
            self.products.list_products(query)
        }
    }

    impl ComboReader for FakeRepo {
        fn list_combos(&self) -> RepositoryResult<Vec<Combo>> {
            self.combos.list_combos()
        }
    }

    impl ScheduleReader for FakeRepo {
        fn get_schedule_by_day(&self, day_of_week: i32) -> RepositoryResult<Option<ScheduleEntry>> {
            self.schedules.get_schedule_by_day(day_of_week)
        }

        fn list_schedules(&self) -> RepositoryResult<Vec<ScheduleEntry>> {
            self.schedules.list_schedules()
        }
    }

    fn stocked_repo() -> FakeRepo {
        let mut repo = FakeRepo::new();
        repo.categories
            .expect_list_categories()
            .returning(|| Ok(vec![category(1, "Panchos"), category(2, "Bebidas")]));
        repo.products.expect_list_products().returning(|_| {
            Ok(vec![
                product(10, Some(1), "Pancho a la masa"),
                product(11, Some(2), "Coca 500ml"),
                product(12, None, "Huérfano"),
            ])
        });
        repo.combos.expect_list_combos().returning(|| Ok(Vec::new()));
        repo.schedules
            .expect_list_schedules()
            .returning(|| Ok(vec![monday_entry()]));
        repo
    }

    #[test]
    fn load_menu_page_groups_products_under_categories() {
        let repo = stocked_repo();

        let data = load_menu_page(&repo, monday_at("10:00"), MenuQuery::default())
            .expect("expected success");

        assert!(data.is_open);
        assert_eq!(data.categories.len(), 2);
        assert_eq!(data.sections.len(), 2);
        assert_eq!(data.sections[0].category.name, "Panchos");
        assert_eq!(data.sections[0].products.len(), 1);
        assert_eq!(data.sections[0].products[0].name, "Pancho a la masa");
        assert_eq!(data.sections[0].products[0].price_formatted, "1500.00");
        assert_eq!(data.sections[1].products[0].name, "Coca 500ml");
        assert_eq!(data.schedules.len(), 1);
    }

    #[test]
    fn load_menu_page_applies_the_category_filter() {
        let repo = stocked_repo();

        let data = load_menu_page(&repo, monday_at("10:00"), MenuQuery { category: Some(2) })
            .expect("expected success");

        assert_eq!(data.sections.len(), 1);
        assert_eq!(data.sections[0].category.name, "Bebidas");
        // The chips still list every category.
        assert_eq!(data.categories.len(), 2);
        assert_eq!(data.category_filter, Some(2));
    }

    #[test]
    fn load_menu_page_reads_closed_outside_the_window() {
        let repo = stocked_repo();

        let data = load_menu_page(&repo, monday_at("23:30"), MenuQuery::default())
            .expect("expected success");

        assert!(!data.is_open);
    }

    #[test]
    fn load_menu_response_carries_the_full_snapshot() {
        let repo = stocked_repo();

        let response =
            load_menu_response(&repo, monday_at("10:00")).expect("expected success");

        assert!(response.is_open);
        assert_eq!(response.categories.len(), 2);
        assert_eq!(response.products.len(), 3);
        assert_eq!(response.schedules.len(), 1);
    }

    #[test]
    fn load_product_page_resolves_category_and_fallback_copy() {
        let mut repo = FakeRepo::new();
        repo.products
            .expect_get_product_by_id()
            .times(1)
            .returning(|_| Ok(Some(product(10, Some(1), "Pancho a la masa"))));
        repo.categories
            .expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![category(1, "Panchos")]));

        let data = load_product_page(&repo, 10).expect("expected success");

        assert_eq!(data.product.name, "Pancho a la masa");
        assert_eq!(data.category_name.as_deref(), Some("Panchos"));
        assert!(data.description.contains("ingredientes premium"));
    }

    #[test]
    fn load_product_page_rejects_missing_and_archived_products() {
        let mut repo = FakeRepo::new();
        repo.products
            .expect_get_product_by_id()
            .returning(|id| match id {
                77 => {
                    let mut archived = product(77, None, "Viejo");
                    archived.is_archived = true;
                    Ok(Some(archived))
                }
                _ => Ok(None),
            });

        assert!(matches!(
            load_product_page(&repo, 1),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            load_product_page(&repo, 77),
            Err(ServiceError::NotFound)
        ));
    }
}
