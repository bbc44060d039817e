//! ウィジェット設定（cardsift.toml）
//!
//! どの任意コントロールが存在するか、クイックフィルタボタンの並びを定義する。

use crate::catalog::{Catalog, Facet};
use crate::env::{EnvVar, CONFIG_VAR};
use crate::error::{CardsiftError, Result};
use crate::filter::ALL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 任意コントロールの有無
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlLayout {
    pub search: bool,
    pub category: bool,
    pub size: bool,
    pub color: bool,
    pub price_min: bool,
    pub price_max: bool,
    pub apply: bool,
    pub reset: bool,
    pub suggestion_panel: bool,
}

impl Default for ControlLayout {
    fn default() -> Self {
        Self {
            search: true,
            category: true,
            size: true,
            color: true,
            price_min: true,
            price_max: true,
            apply: true,
            reset: true,
            suggestion_panel: true,
        }
    }
}

/// クイックフィルタボタン
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickFilter {
    pub label: String,
    pub token: String,
}

impl QuickFilter {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// ウィジェット設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub controls: ControlLayout,
    /// 未指定ならカタログのカテゴリから生成
    pub quick_filters: Option<Vec<QuickFilter>>,
}

impl WidgetConfig {
    /// 設定を読み込む
    ///
    /// 優先順位: 明示的なパス > 環境変数 `CARDSIFT_CONFIG` > デフォルト
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| EnvVar::get(CONFIG_VAR).map(PathBuf::from));

        match path {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 指定パスから読み込む（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(filters) = &self.quick_filters {
            if let Some(empty) = filters.iter().find(|f| f.token.is_empty()) {
                return Err(CardsiftError::Config(format!(
                    "quick filter '{}' has an empty token",
                    empty.label
                )));
            }
        }
        Ok(())
    }

    /// クイックフィルタボタン一覧を解決
    ///
    /// 設定があればそれを使い、なければ `all` + カタログの各カテゴリ。
    pub fn resolve_quick_filters(&self, catalog: &Catalog) -> Vec<QuickFilter> {
        if let Some(filters) = &self.quick_filters {
            return filters.clone();
        }

        std::iter::once(QuickFilter::new(ALL, ALL))
            .chain(
                catalog
                    .facet_values(Facet::Category)
                    .into_iter()
                    .filter(|token| token != ALL)
                    .map(|token| QuickFilter::new(token.clone(), token)),
            )
            .collect()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
