//! フィルタウィジェット TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: ウィジェット + フォーカス + 一覧のスクロール状態
//! - `Msg`: キー入力から変換されたメッセージ
//! - `update`: メッセージを `Action` に変換してウィジェットへ dispatch

use crate::catalog::Facet;
use crate::widget::{Action, Control, FilterWidget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

// ============================================================================
// Focus（フォーカス位置）
// ============================================================================

/// フォーカス位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    QuickFilters,
    Field(Control),
    Apply,
    Reset,
    Grid,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub widget: FilterWidget,
    pub focus: Focus,
    /// クイックフィルタボタン上のカーソル
    pub button_cursor: usize,
    /// カード一覧の選択状態
    pub grid: ListState,
    pub should_quit: bool,
}

impl Model {
    pub fn new(widget: FilterWidget) -> Self {
        let button_cursor = widget.active_button().unwrap_or(0);
        let mut model = Self {
            widget,
            focus: Focus::Grid,
            button_cursor,
            grid: ListState::default(),
            should_quit: false,
        };
        model.focus = model.focus_ring()[0];
        clamp_grid(&mut model);
        model
    }

    /// 存在するコントロールのみで構成したフォーカス順
    pub fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = Vec::new();
        if !self.widget.buttons().is_empty() {
            ring.push(Focus::QuickFilters);
        }
        let controls = self.widget.controls();
        ring.extend(
            Control::all()
                .iter()
                .filter(|c| controls.is_present(**c))
                .map(|c| Focus::Field(*c)),
        );
        if self.widget.layout().apply {
            ring.push(Focus::Apply);
        }
        if self.widget.layout().reset {
            ring.push(Focus::Reset);
        }
        ring.push(Focus::Grid);
        ring
    }

    /// テキスト入力欄にフォーカスしているか
    pub fn is_editing_text(&self) -> bool {
        matches!(self.focus, Focus::Field(c) if c.is_text())
    }
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Quit,
    FocusNext,
    FocusPrev,
    /// クイックフィルタのカーソル / セレクトの選択肢を前へ
    Prev,
    /// クイックフィルタのカーソル / セレクトの選択肢を次へ
    Next,
    Input(char),
    Backspace,
    /// Enter / Space（ボタン押下、入力欄では適用）
    Activate,
    Up,
    Down,
}

/// キー入力をメッセージに変換
pub fn key_to_msg(model: &Model, key: KeyEvent) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }

    match key.code {
        KeyCode::Esc => return Some(Msg::Quit),
        KeyCode::Tab => return Some(Msg::FocusNext),
        KeyCode::BackTab => return Some(Msg::FocusPrev),
        _ => {}
    }

    if model.is_editing_text() {
        // テキスト入力中は文字キーをすべて入力として扱う
        return match key.code {
            KeyCode::Char(c) => Some(Msg::Input(c)),
            KeyCode::Backspace => Some(Msg::Backspace),
            KeyCode::Enter => Some(Msg::Activate),
            _ => None,
        };
    }

    match (model.focus, key.code) {
        (_, KeyCode::Char('q')) => Some(Msg::Quit),
        (Focus::Grid, KeyCode::Up | KeyCode::Char('k')) => Some(Msg::Up),
        (Focus::Grid, KeyCode::Down | KeyCode::Char('j')) => Some(Msg::Down),
        (Focus::Grid, _) => None,
        (Focus::QuickFilters | Focus::Field(_), KeyCode::Left) => Some(Msg::Prev),
        (Focus::QuickFilters | Focus::Field(_), KeyCode::Right) => Some(Msg::Next),
        (Focus::Field(_), KeyCode::Enter) => Some(Msg::Activate),
        (
            Focus::QuickFilters | Focus::Apply | Focus::Reset,
            KeyCode::Enter | KeyCode::Char(' '),
        ) => Some(Msg::Activate),
        _ => None,
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::FocusNext => move_focus(model, 1),
        Msg::FocusPrev => move_focus(model, -1),
        Msg::Prev => step(model, -1),
        Msg::Next => step(model, 1),
        Msg::Input(c) => edit_text(model, |value| value.push(c)),
        Msg::Backspace => edit_text(model, |value| {
            value.pop();
        }),
        Msg::Activate => activate(model),
        Msg::Up => {
            let current = model.grid.selected().unwrap_or(0);
            model.grid.select(Some(current.saturating_sub(1)));
            clamp_grid(model);
        }
        Msg::Down => {
            let current = model.grid.selected().unwrap_or(0);
            model.grid.select(Some(current + 1));
            clamp_grid(model);
        }
    }
}

/// フォーカスを前後に移動（循環）
fn move_focus(model: &mut Model, delta: isize) {
    let ring = model.focus_ring();
    let current = ring.iter().position(|f| *f == model.focus).unwrap_or(0);
    let len = ring.len() as isize;
    let next = (current as isize + delta).rem_euclid(len) as usize;
    model.focus = ring[next];
}

/// セレクトのコントロールに対応するファセット
fn facet_of(control: Control) -> Option<Facet> {
    match control {
        Control::Category => Some(Facet::Category),
        Control::Size => Some(Facet::Size),
        Control::Color => Some(Facet::Color),
        Control::Search | Control::PriceMin | Control::PriceMax => None,
    }
}

/// コントロールの値変更に対応するアクション
fn change_action(control: Control, value: String) -> Action {
    match control {
        Control::Search => Action::SearchInput(value),
        Control::Category => Action::CategoryChange(value),
        Control::Size => Action::SizeChange(value),
        Control::Color => Action::ColorChange(value),
        Control::PriceMin => Action::PriceMinInput(value),
        Control::PriceMax => Action::PriceMaxInput(value),
    }
}

/// クイックフィルタのカーソル移動 / セレクトの選択肢変更
fn step(model: &mut Model, delta: isize) {
    match model.focus {
        Focus::QuickFilters => {
            let len = model.widget.buttons().len();
            if len == 0 {
                return;
            }
            let next = (model.button_cursor as isize + delta).clamp(0, len as isize - 1);
            model.button_cursor = next as usize;
        }
        Focus::Field(control) => {
            let Some(facet) = facet_of(control) else {
                return;
            };
            let options = model.widget.select_options(facet);
            let current = model.widget.controls().value(control).unwrap_or("");
            let index = options.iter().position(|o| o == current).unwrap_or(0);
            let next = (index as isize + delta).rem_euclid(options.len() as isize) as usize;
            let value = options[next].clone();
            model.widget.dispatch(change_action(control, value));
            after_dispatch(model);
        }
        _ => {}
    }
}

/// テキスト入力欄の値を編集して入力アクションを dispatch
fn edit_text(model: &mut Model, edit: impl FnOnce(&mut String)) {
    let Focus::Field(control) = model.focus else {
        return;
    };
    if !control.is_text() {
        return;
    }
    let Some(current) = model.widget.controls().value(control) else {
        return;
    };
    let mut value = current.to_string();
    edit(&mut value);
    model.widget.dispatch(change_action(control, value));
}

/// Enter / Space
fn activate(model: &mut Model) {
    let action = match model.focus {
        Focus::QuickFilters => model
            .widget
            .buttons()
            .get(model.button_cursor)
            .map(|b| Action::ClickQuickFilter(b.token.clone())),
        Focus::Field(control) => Some(Action::Submit(control)),
        Focus::Apply => Some(Action::Apply),
        Focus::Reset => Some(Action::Reset),
        Focus::Grid => None,
    };

    if let Some(action) = action {
        model.widget.dispatch(action);
        after_dispatch(model);
    }
}

/// フィルタ結果の変化に合わせてカーソル・選択状態を整合させる
fn after_dispatch(model: &mut Model) {
    if let Some(active) = model.widget.active_button() {
        model.button_cursor = active;
    }
    clamp_grid(model);
}

/// カード一覧の選択を可視件数に収める
fn clamp_grid(model: &mut Model) {
    let len = model.widget.outcome().visible_count;
    if len == 0 {
        model.grid.select(None);
    } else {
        let current = model.grid.selected().unwrap_or(0);
        model.grid.select(Some(current.min(len - 1)));
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
