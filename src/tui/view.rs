//! 画面描画
//!
//! クイックフィルタ → 入力フォーム → カード一覧 → 代替候補パネル → ヘルプ の縦並び。

use super::app::{Focus, Model};
use crate::catalog::ProductCard;
use crate::output::format_price;
use crate::widget::Control;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

/// フォーカス中の要素のスタイル
fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn card_line(card: &ProductCard) -> String {
    format!(
        "{}  [{} / {} / {}]  {}",
        card.title,
        card.category,
        card.size,
        card.color,
        format_price(card.price)
    )
}

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let outcome = model.widget.outcome();
    let field_count = Control::all()
        .iter()
        .filter(|c| model.widget.controls().is_present(**c))
        .count() as u16;
    let suggestion_height = outcome
        .suggestion
        .as_ref()
        .map(|s| s.cards.len().max(1) as u16 + 2)
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // クイックフィルタ
            Constraint::Length(field_count + 3),   // フォーム
            Constraint::Min(3),                    // カード一覧
            Constraint::Length(suggestion_height), // 代替候補
            Constraint::Length(1),                 // ヘルプ
        ])
        .split(f.area());

    draw_quick_filters(f, model, chunks[0]);
    draw_form(f, model, chunks[1]);
    draw_grid(f, model, chunks[2]);
    if suggestion_height > 0 {
        draw_suggestion(f, model, chunks[3]);
    }

    let help = Paragraph::new(
        " Tab: next control | ←/→: choose | Enter: apply | ↑/↓: scroll | Esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}

/// クイックフィルタボタンを描画
fn draw_quick_filters(f: &mut Frame, model: &Model, area: Rect) {
    let focused = model.focus == Focus::QuickFilters;
    let active = model.widget.active_button();

    let mut spans = Vec::new();
    for (i, button) in model.widget.buttons().iter().enumerate() {
        let mut style = if active == Some(i) {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if focused && model.button_cursor == i {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", button.label), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 入力フォームを描画
fn draw_form(f: &mut Frame, model: &Model, area: Rect) {
    let controls = model.widget.controls();
    let mut lines: Vec<Line> = Vec::new();

    for control in Control::all() {
        let Some(value) = controls.value(*control) else {
            continue;
        };
        let focused = model.focus == Focus::Field(*control);
        let shown = if control.is_text() {
            if focused {
                format!("{}▏", value)
            } else {
                value.to_string()
            }
        } else {
            format!("< {} >", value)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>11}: ", control.label()), focus_style(focused)),
            Span::raw(shown),
        ]));
    }

    let mut buttons = Vec::new();
    if model.widget.layout().apply {
        buttons.push(Span::styled("[ Apply ]", focus_style(model.focus == Focus::Apply)));
        buttons.push(Span::raw("  "));
    }
    if model.widget.layout().reset {
        buttons.push(Span::styled("[ Reset ]", focus_style(model.focus == Focus::Reset)));
    }
    lines.push(Line::from(buttons));

    let form =
        Paragraph::new(lines).block(Block::default().title(" Filters ").borders(Borders::ALL));
    f.render_widget(form, area);
}

/// カード一覧を描画
fn draw_grid(f: &mut Frame, model: &Model, area: Rect) {
    let outcome = model.widget.outcome();
    let cards = outcome.visible_cards(model.widget.catalog().cards());

    let items: Vec<ListItem> = cards.iter().map(|c| ListItem::new(card_line(c))).collect();
    let title = format!(
        " Catalog ({}/{}) ",
        outcome.visible_count,
        model.widget.catalog().len()
    );
    let border_style = focus_style(model.focus == Focus::Grid);
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    let mut state: ListState = model.grid.clone();
    f.render_stateful_widget(list, area, &mut state);
}

/// 代替候補パネルを描画（グリッド上の可視状態に関わらず表示）
fn draw_suggestion(f: &mut Frame, model: &Model, area: Rect) {
    let Some(suggestion) = model.widget.outcome().suggestion.as_ref() else {
        return;
    };

    let items: Vec<ListItem> = suggestion
        .cards
        .iter()
        .map(|c| ListItem::new(format!("  {}", card_line(c))))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", suggestion.heading.text()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(list, area);
}
