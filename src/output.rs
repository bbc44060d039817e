//! フィルタ結果の出力（テーブル / JSON / 名前のみ）

use crate::catalog::ProductCard;
use crate::filter::{FilterState, Suggestion};
use crate::widget::FilterWidget;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

/// 出力用のフィルタ結果
#[derive(Debug, Serialize)]
pub struct FilterReport<'a> {
    pub state: &'a FilterState,
    pub total: usize,
    pub visible_count: usize,
    pub cards: Vec<&'a ProductCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a Suggestion>,
}

impl<'a> FilterReport<'a> {
    pub fn from_widget(widget: &'a FilterWidget) -> Self {
        let outcome = widget.outcome();
        Self {
            state: widget.state(),
            total: widget.catalog().len(),
            visible_count: outcome.visible_count,
            cards: outcome.visible_cards(widget.catalog().cards()),
            suggestion: outcome.suggestion.as_ref(),
        }
    }
}

/// 結果の一行サマリ
pub struct ResultSummary {
    pub prefix: String,
    pub message: String,
}

impl ResultSummary {
    pub fn format(visible: usize, total: usize) -> Self {
        match (visible, total) {
            (_, 0) => Self {
                prefix: "•".yellow().to_string(),
                message: "Catalog is empty".to_string(),
            },
            (0, t) => Self {
                prefix: "✗".red().to_string(),
                message: format!("No cards matched ({} total)", t),
            },
            (v, t) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} of {} card(s) shown", v.green(), t),
            },
        }
    }
}

/// 価格表示（整数ならそのまま、端数があれば小数 2 桁）
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

fn card_table(cards: &[&ProductCard]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Title", "Category", "Size", "Color", "Price"]);

    for card in cards {
        let price = format_price(card.price);
        table.add_row(vec![
            card.title.as_str(),
            card.category.as_str(),
            card.size.as_str(),
            card.color.as_str(),
            price.as_str(),
        ]);
    }
    table
}

/// テーブル形式で描画
pub fn render_table(report: &FilterReport) -> String {
    let mut out = String::new();

    if !report.cards.is_empty() {
        out.push_str(&card_table(&report.cards).to_string());
        out.push('\n');
    }

    let summary = ResultSummary::format(report.visible_count, report.total);
    out.push_str(&format!("{} {}\n", summary.prefix, summary.message));

    if let Some(suggestion) = report.suggestion {
        out.push('\n');
        out.push_str(&format!("{}\n", suggestion.heading.text().bold()));
        if !suggestion.cards.is_empty() {
            let cards: Vec<&ProductCard> = suggestion.cards.iter().collect();
            out.push_str(&card_table(&cards).to_string());
            out.push('\n');
        }
    }
    out
}

/// 名前のみで描画（候補は見出しの後に `~` 付きで列挙）
pub fn render_simple(report: &FilterReport) -> String {
    let mut lines: Vec<String> = report.cards.iter().map(|c| c.title.clone()).collect();

    if let Some(suggestion) = report.suggestion {
        lines.push(format!("# {}", suggestion.heading.text()));
        lines.extend(suggestion.cards.iter().map(|c| format!("~ {}", c.title)));
    }

    lines.iter().map(|l| format!("{l}\n")).collect()
}

pub fn print_table(report: &FilterReport) {
    print!("{}", render_table(report));
}

pub fn print_simple(report: &FilterReport) {
    print!("{}", render_simple(report));
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    serde_json::to_string_pretty(value)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize output: {}", e))
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
