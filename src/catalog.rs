//! 商品カタログ
//!
//! 商品カード（読み取り専用レコード）とカタログの読み込み・ファセット抽出。

mod load;

use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

// ============================================================================
// ProductCard（商品カード）
// ============================================================================

/// 商品カード
///
/// 表示状態は持たない。可視性はフィルタ結果（`FilterOutcome`）側で管理する。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub title: String,
    pub description: String,
    pub category: String,
    pub size: String,
    pub color: String,
    pub price: f64,
}

impl ProductCard {
    /// 検索対象文字列（タイトル + 説明、小文字化）
    pub fn search_target(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }

    /// ファセットの値を取得
    pub fn facet(&self, facet: Facet) -> &str {
        match facet {
            Facet::Category => &self.category,
            Facet::Size => &self.size,
            Facet::Color => &self.color,
        }
    }
}

// ============================================================================
// Facet（絞り込み軸）
// ============================================================================

/// トークン一致で絞り込むファセット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Category,
    Size,
    Color,
}

impl Facet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Category => "category",
            Facet::Size => "size",
            Facet::Color => "color",
        }
    }

    /// 全ファセットを取得
    pub fn all() -> &'static [Facet] {
        &[Facet::Category, Facet::Size, Facet::Color]
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Catalog（カード集合）
// ============================================================================

/// 商品カタログ（文書順を保持する固定のカード集合）
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: Vec<ProductCard>,
}

impl Catalog {
    pub fn new(cards: Vec<ProductCard>) -> Self {
        Self { cards }
    }

    /// ファイルから読み込む（形式は拡張子で判定）
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let cards = load::load_cards(path)?;
        log::info!("loaded {} card(s) from {}", cards.len(), path.display());
        Ok(Self::new(cards))
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// ファセットの値一覧（初出順、重複と空文字を除外）
    pub fn facet_values(&self, facet: Facet) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for card in &self.cards {
            let value = card.facet(facet);
            if !value.is_empty() && !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        values
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
