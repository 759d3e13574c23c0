use std::collections::HashSet;
use std::path::Path;
use tracing::info;
use crate::error::{CatalogError, Result};
use crate::models::restaurant::{MAX_SPICY_LEVEL, Restaurant};

const DEFAULT_CATALOG: &str = include_str!("../../data/restaurants.json");

/// The bundled mock dataset.
pub fn default_catalog() -> Result<Vec<Restaurant>> {
    parse_catalog(DEFAULT_CATALOG)
}

pub fn load_catalog_from_path(path: &Path) -> Result<Vec<Restaurant>> {
    let raw = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&raw)?;
    info!("Loaded {} restaurants from {}", catalog.len(), path.display());
    Ok(catalog)
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Restaurant>> {
    let catalog: Vec<Restaurant> = serde_json::from_str(raw)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn validate_catalog(catalog: &[Restaurant]) -> Result<()> {
    let mut restaurant_ids = HashSet::new();
    for restaurant in catalog {
        if !restaurant_ids.insert(restaurant.id.as_str()) {
            return Err(invalid(format!("duplicate restaurant id '{}'", restaurant.id)));
        }
        if !(restaurant.distance >= 0.0) {
            return Err(invalid(format!("restaurant '{}' has a negative distance", restaurant.id)));
        }
        if !(restaurant.rating >= 0.0) {
            return Err(invalid(format!("restaurant '{}' has a negative rating", restaurant.id)));
        }

        let mut category_ids = HashSet::new();
        for category in &restaurant.menu {
            if !category_ids.insert(category.id.as_str()) {
                return Err(invalid(format!(
                    "restaurant '{}' has duplicate menu category '{}'",
                    restaurant.id, category.id
                )));
            }

            let mut item_ids = HashSet::new();
            for item in &category.items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(invalid(format!(
                        "category '{}' of restaurant '{}' has duplicate item '{}'",
                        category.id, restaurant.id, item.id
                    )));
                }
                if !(item.price >= 0.0) {
                    return Err(invalid(format!("menu item '{}' has a negative price", item.id)));
                }
                if item.spicy_level.unwrap_or(0) > MAX_SPICY_LEVEL {
                    return Err(invalid(format!("menu item '{}' is spicier than {}", item.id, MAX_SPICY_LEVEL)));
                }
            }
        }
    }
    Ok(())
}

fn invalid(reason: String) -> CatalogError {
    CatalogError::InvalidCatalog(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = default_catalog().unwrap();
        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert!(catalog.iter().all(|r| !r.is_favorite));

        let pasta = &catalog[1];
        assert_eq!(pasta.name, "Pasta Paradise");
        let menu_order: Vec<&str> = pasta.menu.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(menu_order, vec!["starters", "pasta"]);
        assert_eq!(pasta.find_menu_item("pasta", "p2").unwrap().spice_level(), 2);
    }

    #[test]
    fn popular_items_follow_menu_order() {
        let catalog = default_catalog().unwrap();
        let popular: Vec<&str> = catalog[2].popular_items().into_iter().map(|item| item.id.as_str()).collect();
        assert_eq!(popular, vec!["bg1", "bg2"]);
    }

    #[test]
    fn item_ids_only_need_to_be_unique_within_a_category() {
        // Taco Town reuses "s1"/"s2" from Pasta Paradise's starters.
        let catalog = default_catalog().unwrap();
        assert!(catalog[4].find_menu_item("sides", "s1").is_some());
    }

    #[test]
    fn rejects_duplicate_restaurant_ids() {
        let mut catalog = default_catalog().unwrap();
        catalog[1].id = "1".to_string();

        let err = validate_catalog(&catalog).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCatalog(_)));
    }

    #[test]
    fn rejects_negative_prices() {
        let mut catalog = default_catalog().unwrap();
        catalog[0].menu[0].items[0].price = -1.0;

        assert!(matches!(validate_catalog(&catalog), Err(CatalogError::InvalidCatalog(_))));
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEFAULT_CATALOG.as_bytes()).unwrap();

        let catalog = load_catalog_from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": 1}]").unwrap();

        assert!(matches!(load_catalog_from_path(file.path()), Err(CatalogError::Json(_))));
    }
}
