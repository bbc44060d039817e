use super::*;
use crate::catalog::ProductCard;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn card(category: &str) -> ProductCard {
    ProductCard {
        title: String::new(),
        description: String::new(),
        category: category.to_string(),
        size: String::new(),
        color: String::new(),
        price: 0.0,
    }
}

// ==================== parsing tests ====================

#[test]
fn empty_config_enables_every_control() {
    let config = WidgetConfig::from_toml_str("").unwrap();
    assert_eq!(config.controls, ControlLayout::default());
    assert!(config.controls.suggestion_panel);
    assert!(config.quick_filters.is_none());
}

#[test]
fn controls_can_be_disabled_individually() {
    let config = WidgetConfig::from_toml_str(
        r#"
[controls]
search = false
suggestion_panel = false
"#,
    )
    .unwrap();
    assert!(!config.controls.search);
    assert!(!config.controls.suggestion_panel);
    assert!(config.controls.category);
    assert!(config.controls.apply);
}

#[test]
fn quick_filters_are_parsed_in_order() {
    let config = WidgetConfig::from_toml_str(
        r#"
[[quick_filters]]
label = "Все"
token = "all"

[[quick_filters]]
label = "Обувь"
token = "shoes"
"#,
    )
    .unwrap();
    let filters = config.quick_filters.unwrap();
    assert_eq!(filters.len(), 2);
    assert_eq!(filters[0], QuickFilter::new("Все", "all"));
    assert_eq!(filters[1].token, "shoes");
}

#[test]
fn unknown_keys_are_rejected() {
    let result = WidgetConfig::from_toml_str("[controls]\nsearchbox = true\n");
    assert!(matches!(result, Err(CardsiftError::Toml(_))));
}

#[test]
fn empty_quick_filter_token_is_rejected() {
    let result = WidgetConfig::from_toml_str(
        r#"
[[quick_filters]]
label = "Broken"
token = ""
"#,
    );
    assert!(matches!(result, Err(CardsiftError::Config(_))));
}

// ==================== load tests ====================

#[test]
fn load_from_missing_file_returns_default() {
    let dir = TempDir::new().unwrap();
    let config = WidgetConfig::load_from(&dir.path().join("cardsift.toml")).unwrap();
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn load_with_explicit_path_reads_file() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "[controls]\nreset = false").unwrap();

    let config = WidgetConfig::load(Some(file.path())).unwrap();
    assert!(!config.controls.reset);
}

// ==================== resolve_quick_filters tests ====================

#[test]
fn default_quick_filters_come_from_catalog_categories() {
    let catalog = Catalog::new(vec![card("shoes"), card("bags"), card("shoes"), card("")]);
    let filters = WidgetConfig::default().resolve_quick_filters(&catalog);
    let tokens: Vec<&str> = filters.iter().map(|f| f.token.as_str()).collect();
    assert_eq!(tokens, vec!["all", "shoes", "bags"]);
}

#[test]
fn configured_quick_filters_override_catalog() {
    let catalog = Catalog::new(vec![card("shoes")]);
    let config = WidgetConfig {
        quick_filters: Some(vec![QuickFilter::new("Hats", "hats")]),
        ..WidgetConfig::default()
    };
    let filters = config.resolve_quick_filters(&catalog);
    assert_eq!(filters, vec![QuickFilter::new("Hats", "hats")]);
}
