//! フィルタウィジェット
//!
//! フィルタ状態・コントロール値・クイックフィルタの強調表示・最新のフィルタ結果を
//! 一つの構造体で所有する。状態の変更は `dispatch` 経由のみ。
//!
//! - `dispatch`: アクション → 状態遷移 → 再フィルタ方針 の対応表

mod dispatch;

use crate::catalog::{Catalog, Facet};
use crate::config::{ControlLayout, QuickFilter, WidgetConfig};
use crate::filter::{apply_filters, parse_price, FilterOutcome, FilterState, ALL};

pub use dispatch::{Action, Control, Dispatch};

// ============================================================================
// Controls（コントロールの生の入力値）
// ============================================================================

/// 各コントロールの現在値（`None` はコントロールが存在しない）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Controls {
    pub search: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
}

impl Controls {
    /// レイアウトに従って初期値で生成
    pub fn from_layout(layout: &ControlLayout) -> Self {
        let text = |present: bool| present.then(String::new);
        let select = |present: bool| present.then(|| ALL.to_string());
        Self {
            search: text(layout.search),
            category: select(layout.category),
            size: select(layout.size),
            color: select(layout.color),
            price_min: text(layout.price_min),
            price_max: text(layout.price_max),
        }
    }

    /// 存在するコントロールを初期値に戻す
    pub fn clear(&mut self) {
        for text in [&mut self.search, &mut self.price_min, &mut self.price_max] {
            if let Some(value) = text {
                value.clear();
            }
        }
        for select in [&mut self.category, &mut self.size, &mut self.color] {
            if let Some(value) = select {
                *value = ALL.to_string();
            }
        }
    }

    pub fn value(&self, control: Control) -> Option<&str> {
        match control {
            Control::Search => self.search.as_deref(),
            Control::Category => self.category.as_deref(),
            Control::Size => self.size.as_deref(),
            Control::Color => self.color.as_deref(),
            Control::PriceMin => self.price_min.as_deref(),
            Control::PriceMax => self.price_max.as_deref(),
        }
    }

    pub fn is_present(&self, control: Control) -> bool {
        self.value(control).is_some()
    }
}

// ============================================================================
// FilterWidget
// ============================================================================

/// フィルタウィジェット
#[derive(Debug, Clone)]
pub struct FilterWidget {
    catalog: Catalog,
    layout: ControlLayout,
    buttons: Vec<QuickFilter>,
    active_button: Option<usize>,
    state: FilterState,
    controls: Controls,
    outcome: FilterOutcome,
}

impl FilterWidget {
    /// 新しいウィジェットを作成（フィルタ処理は `init` まで行わない）
    pub fn new(catalog: Catalog, config: &WidgetConfig) -> Self {
        let buttons = config.resolve_quick_filters(&catalog);
        let layout = config.controls.clone();
        let controls = Controls::from_layout(&layout);

        Self {
            catalog,
            layout,
            buttons,
            active_button: None,
            state: FilterState::default(),
            controls,
            outcome: FilterOutcome::default(),
        }
    }

    /// 初期化（ボタン強調の同期 + 全入力を反映してフィルタ）
    pub fn init(&mut self) {
        self.dispatch(Action::Init);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    pub fn buttons(&self) -> &[QuickFilter] {
        &self.buttons
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn outcome(&self) -> &FilterOutcome {
        &self.outcome
    }

    /// セレクトの選択肢（`all` + カタログのトークン）
    pub fn select_options(&self, facet: Facet) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(
                self.catalog
                    .facet_values(facet)
                    .into_iter()
                    .filter(|v| v != ALL),
            )
            .collect()
    }

    /// 現在のカテゴリに対応するボタンを強調（該当なしなら強調なし）
    fn sync_category_button(&mut self) {
        let token = self.state.category.token();
        self.active_button = self.buttons.iter().position(|b| b.token == token);
    }

    /// 保存済みの状態でフィルタを実行
    fn refilter(&mut self) {
        self.outcome = apply_filters(
            &self.state,
            self.catalog.cards(),
            self.layout.suggestion_panel,
        );
    }

    /// 検索語と価格をコントロールから再取得してフィルタを実行
    fn apply_pending(&mut self) {
        let read = |control: Control| self.controls.value(control).unwrap_or("").to_string();
        let search = read(Control::Search);
        let price_min = read(Control::PriceMin);
        let price_max = read(Control::PriceMax);

        self.state.set_search(&search);
        self.state.price_min = parse_price(&price_min);
        self.state.price_max = parse_price(&price_max);
        self.refilter();
    }
}

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;
