//! カタログファイルの読み込み
//!
//! 属性値はマークアップの data 属性と同じく寛容に解釈する。
//! 文字列属性の欠落は空文字、価格の欠落・非数値は 0。

use super::ProductCard;
use crate::error::{CardsiftError, Result};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::path::Path;

/// カタログファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
    Yaml,
}

impl CatalogFormat {
    /// 拡張子から形式を判定
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(CatalogFormat::Json),
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            _ => Err(CardsiftError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 属性値（文字列・数値・真偽値のいずれか）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AttrValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Other(IgnoredAny),
}

impl AttrValue {
    fn into_text(self) -> String {
        match self {
            AttrValue::Text(s) => s,
            AttrValue::Int(n) => n.to_string(),
            AttrValue::Float(n) => n.to_string(),
            AttrValue::Bool(b) => b.to_string(),
            AttrValue::Other(_) => String::new(),
        }
    }

    fn into_price(self) -> f64 {
        let value = match self {
            AttrValue::Int(n) => n as f64,
            AttrValue::Float(n) => n,
            AttrValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            AttrValue::Bool(_) | AttrValue::Other(_) => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCard {
    #[serde(default)]
    title: Option<AttrValue>,
    #[serde(default)]
    description: Option<AttrValue>,
    #[serde(default)]
    category: Option<AttrValue>,
    #[serde(default)]
    size: Option<AttrValue>,
    #[serde(default)]
    color: Option<AttrValue>,
    #[serde(default)]
    price: Option<AttrValue>,
}

impl RawCard {
    fn into_card(self) -> ProductCard {
        let text = |v: Option<AttrValue>| v.map(AttrValue::into_text).unwrap_or_default();
        ProductCard {
            title: text(self.title),
            description: text(self.description),
            category: text(self.category),
            size: text(self.size),
            color: text(self.color),
            price: self.price.map(AttrValue::into_price).unwrap_or(0.0),
        }
    }
}

/// `cards` キーのみを持つテーブル
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogTable {
    cards: Vec<RawCard>,
}

/// カタログ文書のルート（カード配列 or `cards` テーブル）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<RawCard>),
    Table(CatalogTable),
}

impl CatalogDocument {
    fn into_cards(self) -> Vec<ProductCard> {
        let raw = match self {
            CatalogDocument::List(cards) => cards,
            CatalogDocument::Table(table) => table.cards,
        };
        raw.into_iter().map(RawCard::into_card).collect()
    }
}

/// ファイルからカードを読み込む
pub(super) fn load_cards(path: &Path) -> Result<Vec<ProductCard>> {
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_cards(&content, format)
}

/// 文字列からカードを解析
pub(super) fn parse_cards(content: &str, format: CatalogFormat) -> Result<Vec<ProductCard>> {
    let document: CatalogDocument = match format {
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Toml => toml::from_str(content)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(document.into_cards())
}
