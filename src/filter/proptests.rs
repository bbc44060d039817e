use super::*;
use crate::catalog::ProductCard;
use proptest::prelude::*;

/// ファセットトークン（少数の値で衝突を起こしやすくする）
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("shoes".to_string()),
        Just("bags".to_string()),
        Just("hats".to_string()),
        Just("".to_string()),
    ]
}

fn card_strategy() -> impl Strategy<Value = ProductCard> {
    (
        "[a-zA-Z ]{0,12}",
        "[a-zA-Z ]{0,12}",
        token_strategy(),
        token_strategy(),
        token_strategy(),
        0u32..500,
    )
        .prop_map(|(title, description, category, size, color, price)| ProductCard {
            title,
            description,
            category,
            size,
            color,
            price: price as f64,
        })
}

fn selection_strategy() -> impl Strategy<Value = Selection> {
    prop_oneof![
        Just(Selection::All),
        token_strategy().prop_map(|t| Selection::from_token(&t)),
    ]
}

fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        "[a-z]{0,3}",
        selection_strategy(),
        selection_strategy(),
        selection_strategy(),
        proptest::option::of(0u32..500),
        proptest::option::of(0u32..500),
    )
        .prop_map(|(search, category, size, color, min, max)| FilterState {
            search,
            category,
            size,
            color,
            price_min: min.map(f64::from),
            price_max: max.map(f64::from),
        })
}

proptest! {
    /// 未設定状態では全カードが可視
    #[test]
    fn prop_unset_state_shows_everything(cards in prop::collection::vec(card_strategy(), 0..20)) {
        let outcome = apply_filters(&FilterState::default(), &cards, true);
        prop_assert_eq!(outcome.visible_count, cards.len());
        prop_assert!(outcome.visibility.iter().all(|v| *v));
        prop_assert_eq!(outcome.suggestion.is_some(), cards.is_empty());
    }

    /// 検索語がある場合、可視カードは必ず検索語を含む
    #[test]
    fn prop_search_visible_cards_contain_query(
        cards in prop::collection::vec(card_strategy(), 0..20),
        query in "[a-zA-Z]{1,3}",
    ) {
        let mut state = FilterState::default();
        state.set_search(&query);
        let outcome = apply_filters(&state, &cards, true);
        for (card, visible) in cards.iter().zip(&outcome.visibility) {
            let contains = card.search_target().contains(&query.to_lowercase());
            prop_assert_eq!(*visible, contains);
        }
    }

    /// カテゴリ指定時は一致するカードだけが可視
    #[test]
    fn prop_category_partitions_cards(
        cards in prop::collection::vec(card_strategy(), 0..20),
        token in token_strategy(),
    ) {
        let state = FilterState {
            category: Selection::from_token(&token),
            ..FilterState::default()
        };
        let outcome = apply_filters(&state, &cards, true);
        for (card, visible) in cards.iter().zip(&outcome.visibility) {
            prop_assert_eq!(*visible, card.category == token);
        }
    }

    /// 可視件数と候補表示は排他で、候補は最大 3 件・元の文書順
    #[test]
    fn prop_suggestion_only_when_nothing_visible(
        cards in prop::collection::vec(card_strategy(), 0..20),
        state in state_strategy(),
    ) {
        let outcome = apply_filters(&state, &cards, true);
        prop_assert_eq!(outcome.visibility.len(), cards.len());
        prop_assert_eq!(
            outcome.visible_count,
            outcome.visibility.iter().filter(|v| **v).count()
        );

        match &outcome.suggestion {
            None => prop_assert!(outcome.visible_count > 0),
            Some(suggestion) => {
                prop_assert_eq!(outcome.visible_count, 0);
                prop_assert!(suggestion.cards.len() <= SUGGESTION_LIMIT);

                // 候補はカタログ内の部分列（文書順）
                let mut remaining = cards.iter();
                for suggested in &suggestion.cards {
                    prop_assert!(remaining.any(|c| c == suggested));
                }
            }
        }
    }
}
