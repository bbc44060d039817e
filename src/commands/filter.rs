//! cardsift filter コマンド
//!
//! 指定された値をコントロールへの入力として順に dispatch し、最後に適用する。

use crate::output::{self, FilterReport};
use crate::widget::{Action, Control, Dispatch, FilterWidget};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(after_help = "CATALOG FORMATS:
  .json         list of cards, or {\"cards\": [...]}
  .toml         [[cards]] tables
  .yaml, .yml   list of cards, or cards: [...]

Each card may carry title, description, category, size, color and price.
Use \"all\" to leave a category, size or color unconstrained.")]
pub struct Args {
    /// Catalog file
    pub catalog: PathBuf,

    /// Text to search for in card titles and descriptions
    #[arg(long)]
    pub search: Option<String>,

    /// Category token
    #[arg(long)]
    pub category: Option<String>,

    /// Size token
    #[arg(long)]
    pub size: Option<String>,

    /// Color token
    #[arg(long)]
    pub color: Option<String>,

    /// Minimum price, inclusive (invalid or negative values are ignored)
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Maximum price, inclusive (invalid or negative values are ignored)
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Widget config file (defaults to $CARDSIFT_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only card titles
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args) -> Result<(), String> {
    let mut widget = super::load_widget(&args.catalog, args.config.as_deref())?;

    for action in replay_actions(&args, &widget) {
        let kind = action.kind();
        if widget.dispatch(action) == Dispatch::Ignored {
            log::warn!("{:?} ignored: the control is disabled in the widget config", kind);
        }
    }

    let report = FilterReport::from_widget(&widget);
    if args.json {
        output::print_json(&report)?;
    } else if args.simple {
        output::print_simple(&report);
    } else {
        output::print_table(&report);
    }

    Ok(())
}

/// 引数をユーザー操作の列に変換
///
/// カテゴリはセレクトがあればセレクト、なければクイックフィルタボタンで指定する。
/// 最後に適用ボタン（なければ入力欄での Enter）で保留中の入力を反映する。
fn replay_actions(args: &Args, widget: &FilterWidget) -> Vec<Action> {
    let mut actions = Vec::new();
    let controls = widget.controls();

    if let Some(category) = &args.category {
        if controls.is_present(Control::Category) {
            actions.push(Action::CategoryChange(category.clone()));
        } else {
            actions.push(Action::ClickQuickFilter(category.clone()));
        }
    }
    if let Some(size) = &args.size {
        actions.push(Action::SizeChange(size.clone()));
    }
    if let Some(color) = &args.color {
        actions.push(Action::ColorChange(color.clone()));
    }
    if let Some(search) = &args.search {
        actions.push(Action::SearchInput(search.clone()));
    }
    if let Some(min) = &args.min {
        actions.push(Action::PriceMinInput(min.clone()));
    }
    if let Some(max) = &args.max {
        actions.push(Action::PriceMaxInput(max.clone()));
    }

    if widget.layout().apply {
        actions.push(Action::Apply);
    } else if let Some(control) = Control::all().iter().find(|c| controls.is_present(**c)) {
        actions.push(Action::Submit(*control));
    }

    actions
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
