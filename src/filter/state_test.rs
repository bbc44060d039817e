use super::*;

// ============================================================================
// Selection
// ============================================================================

#[test]
fn all_token_is_unconstrained() {
    let selection = Selection::from_token("all");
    assert_eq!(selection, Selection::All);
    assert!(!selection.is_active());
    assert!(selection.matches("anything"));
    assert!(selection.matches(""));
}

#[test]
fn specific_token_matches_exactly() {
    let selection = Selection::from_token("shoes");
    assert!(selection.is_active());
    assert!(selection.matches("shoes"));
    assert!(!selection.matches("Shoes"));
    assert!(!selection.matches("shoes "));
}

#[test]
fn all_sentinel_is_case_sensitive() {
    // "All" は通常のトークンとして扱う
    assert_eq!(
        Selection::from_token("All"),
        Selection::Only("All".to_string())
    );
}

#[test]
fn token_round_trips_through_selection() {
    assert_eq!(Selection::All.token(), "all");
    assert_eq!(Selection::from_token("bags").token(), "bags");
}

// ============================================================================
// FilterState
// ============================================================================

#[test]
fn default_state_is_unset() {
    let state = FilterState::default();
    assert_eq!(state.search, "");
    assert_eq!(state.category, Selection::All);
    assert_eq!(state.size, Selection::All);
    assert_eq!(state.color, Selection::All);
    assert_eq!(state.price_min, None);
    assert_eq!(state.price_max, None);
    assert!(!state.is_active());
}

#[test]
fn set_search_normalizes() {
    let mut state = FilterState::default();
    state.set_search("  Wool SOCKS ");
    assert_eq!(state.search, "wool socks");
    assert!(state.is_active());
}

#[test]
fn reset_clears_every_field() {
    let mut state = FilterState {
        search: "boots".to_string(),
        category: Selection::from_token("shoes"),
        size: Selection::from_token("42"),
        color: Selection::from_token("red"),
        price_min: Some(10.0),
        price_max: Some(100.0),
    };
    state.reset();
    assert_eq!(state, FilterState::default());
}

#[test]
fn state_serializes_selection_as_token() {
    let state = FilterState {
        category: Selection::from_token("shoes"),
        ..FilterState::default()
    };
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["category"], "shoes");
    assert_eq!(json["size"], "all");
    assert!(json["price_min"].is_null());
}

// ============================================================================
// normalize_value / parse_price
// ============================================================================

#[test]
fn normalize_value_trims_and_lowercases() {
    assert_eq!(normalize_value("  ХЛОПОК "), "хлопок");
    assert_eq!(normalize_value(""), "");
}

#[test]
fn parse_price_accepts_non_negative_numbers() {
    assert_eq!(parse_price("100"), Some(100.0));
    assert_eq!(parse_price(" 49.90 "), Some(49.9));
    assert_eq!(parse_price("0"), Some(0.0));
}

#[test]
fn parse_price_rejects_negative_and_non_numeric() {
    assert_eq!(parse_price("-1"), None);
    assert_eq!(parse_price("abc"), None);
    assert_eq!(parse_price("12abc"), None);
    assert_eq!(parse_price("NaN"), None);
    assert_eq!(parse_price("inf"), None);
}

#[test]
fn parse_price_treats_empty_as_unset() {
    assert_eq!(parse_price(""), None);
    assert_eq!(parse_price("   "), None);
}

#[test]
fn parse_price_normalizes_negative_zero() {
    let parsed = parse_price("-0").unwrap();
    assert_eq!(parsed, 0.0);
    assert!(parsed.is_sign_positive());
}
