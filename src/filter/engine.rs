//! フィルタ判定
//!
//! 各カードを独立に評価し、6 条件すべてを満たすものだけを可視とする。

use super::state::FilterState;
use super::suggestion::{select_suggestion, Suggestion};
use crate::catalog::ProductCard;

/// 1 回のフィルタ処理の結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    /// カードごとの可視状態（文書順）
    pub visibility: Vec<bool>,
    pub visible_count: usize,
    /// 0 件時の代替候補（パネルがない場合・1 件以上ある場合は `None`）
    pub suggestion: Option<Suggestion>,
}

impl FilterOutcome {
    /// 可視カードを文書順で取得
    pub fn visible_cards<'a>(&'a self, cards: &'a [ProductCard]) -> Vec<&'a ProductCard> {
        cards
            .iter()
            .zip(&self.visibility)
            .filter(|(_, visible)| **visible)
            .map(|(card, _)| card)
            .collect()
    }
}

/// カードがフィルタ状態に一致するか
pub fn card_matches(state: &FilterState, card: &ProductCard) -> bool {
    let matches_search = state.search.is_empty() || card.search_target().contains(&state.search);
    let matches_category = state.category.matches(&card.category);
    let matches_size = state.size.matches(&card.size);
    let matches_color = state.color.matches(&card.color);
    let matches_min = state.price_min.is_none_or(|min| card.price >= min);
    let matches_max = state.price_max.is_none_or(|max| card.price <= max);

    matches_search
        && matches_category
        && matches_size
        && matches_color
        && matches_min
        && matches_max
}

/// フィルタを適用
///
/// `panel_present` が false の場合は代替候補を計算しない。
pub fn apply_filters(
    state: &FilterState,
    cards: &[ProductCard],
    panel_present: bool,
) -> FilterOutcome {
    let visibility: Vec<bool> = cards.iter().map(|card| card_matches(state, card)).collect();
    let visible_count = visibility.iter().filter(|v| **v).count();

    log::debug!(
        "filter pass: {}/{} card(s) visible (constrained: {})",
        visible_count,
        cards.len(),
        state.is_active()
    );

    let suggestion = if visible_count == 0 && panel_present {
        Some(select_suggestion(state, cards))
    } else {
        None
    };

    FilterOutcome {
        visibility,
        visible_count,
        suggestion,
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
