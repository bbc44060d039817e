//! 代替候補の選択
//!
//! 表示件数 0 のときに提示する候補を、
//! カテゴリ → 色 → サイズ → 全件 の順で最初に空でない集合から選ぶ。

use super::state::{FilterState, Selection};
use crate::catalog::{Facet, ProductCard};
use serde::Serialize;

/// 候補の最大件数
pub const SUGGESTION_LIMIT: usize = 3;

/// 候補パネルの見出し
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionHeading {
    /// カテゴリ指定ありで候補あり
    Similar,
    /// カテゴリ指定なしで候補あり
    Popular,
    /// 候補なし（カタログが空）
    NoResults,
}

impl SuggestionHeading {
    pub fn text(&self) -> &'static str {
        match self {
            SuggestionHeading::Similar => "Мы подобрали похожие позиции «Тихоходка»",
            SuggestionHeading::Popular => "Популярные товары «Тихоходка»",
            SuggestionHeading::NoResults => {
                "Популярные подборки «Тихоходка» — попробуйте изменить фильтры"
            }
        }
    }
}

/// 候補を得たフォールバック段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    Category,
    Color,
    Size,
    All,
}

/// 代替候補（カードの複製、最大 `SUGGESTION_LIMIT` 件、文書順）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub heading: SuggestionHeading,
    pub source: SuggestionSource,
    pub cards: Vec<ProductCard>,
}

/// ファセットが一致するカードを抽出（未指定なら空）
fn cards_with<'a>(
    cards: &'a [ProductCard],
    facet: Facet,
    selection: &Selection,
) -> Vec<&'a ProductCard> {
    match selection {
        Selection::All => Vec::new(),
        Selection::Only(token) => cards.iter().filter(|c| c.facet(facet) == token).collect(),
    }
}

/// 代替候補を選択
pub fn select_suggestion(state: &FilterState, cards: &[ProductCard]) -> Suggestion {
    let chain = [
        (SuggestionSource::Category, Facet::Category, &state.category),
        (SuggestionSource::Color, Facet::Color, &state.color),
        (SuggestionSource::Size, Facet::Size, &state.size),
    ];

    let (source, candidates) = chain
        .into_iter()
        .map(|(source, facet, selection)| (source, cards_with(cards, facet, selection)))
        .find(|(_, found)| !found.is_empty())
        .unwrap_or_else(|| (SuggestionSource::All, cards.iter().collect()));

    log::trace!(
        "suggestion source: {:?} ({} candidate(s))",
        source,
        candidates.len()
    );

    let heading = if !candidates.is_empty() && state.category.is_active() {
        SuggestionHeading::Similar
    } else if !candidates.is_empty() {
        SuggestionHeading::Popular
    } else {
        SuggestionHeading::NoResults
    };

    Suggestion {
        heading,
        source,
        cards: candidates
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
#[path = "suggestion_test.rs"]
mod tests;
