//! アクションの振り分け
//!
//! UI アクションごとに「状態遷移」と「再フィルタ方針」を明示的な表で定義する。
//! カテゴリ（ボタン・セレクト）の変更だけは即時に再フィルタし、
//! 検索語・サイズ・色・価格の入力は適用（Apply / Enter）まで保留する。

use super::FilterWidget;
use crate::filter::{parse_price, Selection};

// ============================================================================
// Control（入力コントロール）
// ============================================================================

/// 入力コントロール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Search,
    Category,
    Size,
    Color,
    PriceMin,
    PriceMax,
}

impl Control {
    /// 全コントロールを取得（画面上の並び順）
    pub fn all() -> &'static [Control] {
        &[
            Control::Search,
            Control::Category,
            Control::Size,
            Control::Color,
            Control::PriceMin,
            Control::PriceMax,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Control::Search => "Search",
            Control::Category => "Category",
            Control::Size => "Size",
            Control::Color => "Color",
            Control::PriceMin => "Price from",
            Control::PriceMax => "Price to",
        }
    }

    /// テキスト入力欄かどうか（セレクトでなければテキスト）
    pub fn is_text(&self) -> bool {
        matches!(self, Control::Search | Control::PriceMin | Control::PriceMax)
    }
}

// ============================================================================
// Action / ActionKind / RefilterPolicy
// ============================================================================

/// UI アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// クイックフィルタボタンのクリック（トークン）
    ClickQuickFilter(String),
    /// 検索欄の入力（入力欄の値全体）
    SearchInput(String),
    /// カテゴリセレクトの変更
    CategoryChange(String),
    /// サイズセレクトの変更
    SizeChange(String),
    /// 色セレクトの変更
    ColorChange(String),
    /// 最低価格欄の入力
    PriceMinInput(String),
    /// 最高価格欄の入力
    PriceMaxInput(String),
    /// コントロール上での Enter
    Submit(Control),
    /// 適用ボタン
    Apply,
    /// リセットボタン
    Reset,
    /// 初回表示
    Init,
}

/// アクション種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    ClickQuickFilter,
    SearchInput,
    CategoryChange,
    SizeChange,
    ColorChange,
    PriceMinInput,
    PriceMaxInput,
    Submit,
    Apply,
    Reset,
    Init,
}

/// 再フィルタ方針
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefilterPolicy {
    /// 再フィルタしない（適用まで保留）
    Deferred,
    /// 保存済みの状態で即時フィルタ
    Immediate,
    /// 検索語・価格をコントロールから再取得してからフィルタ
    ApplyPending,
}

impl ActionKind {
    #[cfg(test)]
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::ClickQuickFilter,
            ActionKind::SearchInput,
            ActionKind::CategoryChange,
            ActionKind::SizeChange,
            ActionKind::ColorChange,
            ActionKind::PriceMinInput,
            ActionKind::PriceMaxInput,
            ActionKind::Submit,
            ActionKind::Apply,
            ActionKind::Reset,
            ActionKind::Init,
        ]
    }

    /// 再フィルタ方針の対応表
    pub fn policy(&self) -> RefilterPolicy {
        match self {
            ActionKind::ClickQuickFilter => RefilterPolicy::Immediate,
            ActionKind::CategoryChange => RefilterPolicy::Immediate,
            ActionKind::Reset => RefilterPolicy::Immediate,
            ActionKind::SearchInput => RefilterPolicy::Deferred,
            ActionKind::SizeChange => RefilterPolicy::Deferred,
            ActionKind::ColorChange => RefilterPolicy::Deferred,
            ActionKind::PriceMinInput => RefilterPolicy::Deferred,
            ActionKind::PriceMaxInput => RefilterPolicy::Deferred,
            ActionKind::Submit => RefilterPolicy::ApplyPending,
            ActionKind::Apply => RefilterPolicy::ApplyPending,
            ActionKind::Init => RefilterPolicy::ApplyPending,
        }
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ClickQuickFilter(_) => ActionKind::ClickQuickFilter,
            Action::SearchInput(_) => ActionKind::SearchInput,
            Action::CategoryChange(_) => ActionKind::CategoryChange,
            Action::SizeChange(_) => ActionKind::SizeChange,
            Action::ColorChange(_) => ActionKind::ColorChange,
            Action::PriceMinInput(_) => ActionKind::PriceMinInput,
            Action::PriceMaxInput(_) => ActionKind::PriceMaxInput,
            Action::Submit(_) => ActionKind::Submit,
            Action::Apply => ActionKind::Apply,
            Action::Reset => ActionKind::Reset,
            Action::Init => ActionKind::Init,
        }
    }
}

/// dispatch の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// 対象のコントロール・ボタンが存在しないため無視
    Ignored,
    /// 状態遷移を行い、方針に従って再フィルタした（または保留した）
    Handled(RefilterPolicy),
}

// ============================================================================
// dispatch（状態遷移 + 再フィルタ）
// ============================================================================

impl FilterWidget {
    /// アクションを処理
    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        let kind = action.kind();
        if !self.transition(action) {
            log::debug!("ignored {:?}: control not present", kind);
            return Dispatch::Ignored;
        }

        let policy = kind.policy();
        match policy {
            RefilterPolicy::Deferred => {}
            RefilterPolicy::Immediate => self.refilter(),
            RefilterPolicy::ApplyPending => self.apply_pending(),
        }
        Dispatch::Handled(policy)
    }

    /// 状態遷移（対象が存在しなければ false）
    fn transition(&mut self, action: Action) -> bool {
        match action {
            Action::ClickQuickFilter(token) => {
                if !self.buttons.iter().any(|b| b.token == token) {
                    return false;
                }
                if let Some(select) = self.controls.category.as_mut() {
                    select.clone_from(&token);
                }
                self.state.category = Selection::from_token(&token);
                self.sync_category_button();
            }
            Action::SearchInput(value) => {
                let Some(slot) = self.controls.search.as_mut() else {
                    return false;
                };
                self.state.set_search(&value);
                *slot = value;
            }
            Action::CategoryChange(token) => {
                let Some(slot) = self.controls.category.as_mut() else {
                    return false;
                };
                self.state.category = Selection::from_token(&token);
                *slot = token;
                self.sync_category_button();
            }
            Action::SizeChange(token) => {
                let Some(slot) = self.controls.size.as_mut() else {
                    return false;
                };
                self.state.size = Selection::from_token(&token);
                *slot = token;
            }
            Action::ColorChange(token) => {
                let Some(slot) = self.controls.color.as_mut() else {
                    return false;
                };
                self.state.color = Selection::from_token(&token);
                *slot = token;
            }
            Action::PriceMinInput(value) => {
                let Some(slot) = self.controls.price_min.as_mut() else {
                    return false;
                };
                self.state.price_min = parse_price(&value);
                *slot = value;
            }
            Action::PriceMaxInput(value) => {
                let Some(slot) = self.controls.price_max.as_mut() else {
                    return false;
                };
                self.state.price_max = parse_price(&value);
                *slot = value;
            }
            Action::Submit(control) => {
                if !self.controls.is_present(control) {
                    return false;
                }
            }
            Action::Apply => {
                if !self.layout.apply {
                    return false;
                }
            }
            Action::Reset => {
                if !self.layout.reset {
                    return false;
                }
                self.state.reset();
                self.controls.clear();
                self.sync_category_button();
            }
            Action::Init => self.sync_category_button(),
        }
        true
    }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;
