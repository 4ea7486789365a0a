//! The category registry: owns the mutable set of named, colored, iconed
//! categories and persists the full list on every mutation.

use crate::{
    Error,
    models::{Category, CategoryId, Rgb},
    store::{BlobStore, CATEGORIES_KEY},
};

/// Owns the category list and persists it whole under
/// [CATEGORIES_KEY](crate::store::CATEGORIES_KEY).
#[derive(Debug)]
pub struct CategoryRegistry<S: BlobStore> {
    store: S,
    categories: Vec<Category>,
}

impl<S: BlobStore> CategoryRegistry<S> {
    /// Create a registry, loading any previously persisted categories.
    pub fn new(store: S) -> Result<Self, Error> {
        let categories = store.read_json(CATEGORIES_KEY)?.unwrap_or_default();

        Ok(Self { store, categories })
    }

    /// Populate an empty registry with the default category set and persist
    /// it. A no-op when any categories already exist, so calling this twice
    /// never duplicates the defaults.
    pub fn seed_defaults(&mut self) -> Result<(), Error> {
        if !self.categories.is_empty() {
            return Ok(());
        }

        self.categories = default_categories();
        self.persist()?;
        tracing::info!(count = self.categories.len(), "seeded default categories");

        Ok(())
    }

    /// Create a new category with a fresh ID, append it and persist the full
    /// list. No validation is applied to the inputs.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        icon: impl Into<String>,
        color_spec: impl Into<String>,
    ) -> Result<&Category, Error> {
        let category = Category::new(name, icon, color_spec);
        self.categories.push(category);
        self.persist()?;

        Ok(self.categories.last().expect("category just added"))
    }

    /// Remove the category with the given ID and persist the remaining list.
    ///
    /// # Errors
    /// Returns [Error::NotFound] when no category has that ID.
    pub fn remove(&mut self, id: &CategoryId) -> Result<(), Error> {
        let index = self
            .categories
            .iter()
            .position(|category| category.id() == id)
            .ok_or(Error::NotFound)?;

        self.categories.remove(index);
        self.persist()
    }

    /// All categories in insertion order.
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    /// Resolve the display color for a category name.
    ///
    /// Looks the name up in the registry first; for categories that no
    /// longer exist there (historical transactions keep their embedded
    /// names) a fixed name→color table is used, defaulting to gray.
    pub fn color_for_name(&self, name: &str) -> Rgb {
        self.categories
            .iter()
            .find(|category| category.name() == name)
            .map(Category::color)
            .unwrap_or_else(|| fallback_color(name))
    }

    fn persist(&mut self) -> Result<(), Error> {
        let Self { store, categories } = self;
        store.write_json(CATEGORIES_KEY, categories)
    }
}

/// The color assigned to well-known category names that are missing from the
/// registry.
fn fallback_color(name: &str) -> Rgb {
    match name {
        "Їжа" => Rgb::RED,
        "Транспорт" => Rgb::BLUE,
        "Житло" => Rgb::ORANGE,
        "Розваги" => Rgb::PURPLE,
        "Здоров'я" => Rgb::GREEN,
        "Одяг" => Rgb::PINK,
        "Техніка" => Rgb::GRAY,
        "Подарунки" => Rgb::YELLOW,
        "Освіта" => Rgb::BLUE,
        "Податки" => Rgb::GRAY,
        _ => Rgb::GRAY,
    }
}

/// The category set seeded on first run: income-oriented entries first, then
/// expense-oriented ones.
fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Розробка", "💻", "#4CAF50"),
        Category::new("Дизайн", "🎨", "#2196F3"),
        Category::new("Консультація", "📊", "#9C27B0"),
        Category::new("Маркетинг", "📣", "#FFC107"),
        Category::new("Продажі", "💰", "#FF9800"),
        Category::new("Інвестиції", "📈", "#4CAF50"),
        Category::new("Фріланс", "👨‍💻", "#2196F3"),
        Category::new("Оренда", "🏠", "#9C27B0"),
        Category::new("Їжа", "🍔", "#FF5252"),
        Category::new("Транспорт", "🚗", "#FF9800"),
        Category::new("Житло", "🏠", "#2196F3"),
        Category::new("Розваги", "🎬", "#9C27B0"),
        Category::new("Здоров'я", "💊", "#4CAF50"),
        Category::new("Одяг", "👕", "#E91E63"),
        Category::new("Техніка", "📱", "#607D8B"),
        Category::new("Подарунки", "🎁", "#FF5252"),
        Category::new("Освіта", "📚", "#2196F3"),
        Category::new("Податки", "📝", "#607D8B"),
        Category::new("Інше", "❓", "#607D8B"),
    ]
}

#[cfg(test)]
mod registry_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use super::CategoryRegistry;
    use crate::{
        Error,
        models::{CategoryId, Rgb},
        store::{MemoryBlobStore, SqliteBlobStore, initialize},
    };

    fn get_test_registry() -> CategoryRegistry<MemoryBlobStore> {
        CategoryRegistry::new(MemoryBlobStore::new()).unwrap()
    }

    #[test]
    fn seed_defaults_populates_empty_registry() {
        let mut registry = get_test_registry();

        registry.seed_defaults().unwrap();

        assert_eq!(registry.list().len(), 19);
        assert_eq!(registry.list()[0].name(), "Розробка");
    }

    #[test]
    fn seed_defaults_is_idempotent() {
        let mut registry = get_test_registry();

        registry.seed_defaults().unwrap();
        let count = registry.list().len();
        registry.seed_defaults().unwrap();

        assert_eq!(registry.list().len(), count);
    }

    #[test]
    fn seed_defaults_skips_non_empty_registry() {
        let mut registry = get_test_registry();
        registry.add("Кава", "☕", "#795548").unwrap();

        registry.seed_defaults().unwrap();

        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut registry = get_test_registry();

        registry.add("Кава", "☕", "#795548").unwrap();
        registry.add("Книги", "📖", "blue").unwrap();

        let names: Vec<&str> = registry.list().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Кава", "Книги"]);
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut registry = get_test_registry();
        let id = registry.add("Кава", "☕", "#795548").unwrap().id().clone();

        registry.remove(&id).unwrap();

        assert!(registry.list().is_empty());
    }

    #[test]
    fn remove_missing_id_returns_not_found() {
        let mut registry = get_test_registry();

        let result = registry.remove(&CategoryId::new("no-such-id"));

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn color_for_name_prefers_registry_entries() {
        let mut registry = get_test_registry();
        registry.add("Їжа", "🍔", "#4CAF50").unwrap();

        assert_eq!(registry.color_for_name("Їжа"), Rgb::new(76, 175, 80));
    }

    #[test]
    fn color_for_name_falls_back_for_vanished_categories() {
        let registry = get_test_registry();

        assert_eq!(registry.color_for_name("Їжа"), Rgb::RED);
        assert_eq!(registry.color_for_name("Щось інше"), Rgb::GRAY);
    }

    #[test]
    fn categories_survive_a_reload() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let store = SqliteBlobStore::new(Arc::new(Mutex::new(connection)));

        let mut registry = CategoryRegistry::new(store.clone()).unwrap();
        registry.add("Кава", "☕", "#795548").unwrap();
        let original = registry.list().to_vec();

        let reloaded = CategoryRegistry::new(store).unwrap();

        assert_eq!(reloaded.list(), original.as_slice());
        assert_eq!(reloaded.list()[0].color_spec(), "#795548");
    }
}
