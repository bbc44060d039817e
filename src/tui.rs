//! フィルタウィジェット TUI
//!
//! ratatui/crossterm を使用してクイックフィルタ・入力欄・カード一覧・
//! 代替候補パネルを表示する。
//!
//! ## モジュール構成
//!
//! - `app`: Model / Msg / key_to_msg / update
//! - `view`: 画面描画

mod app;
mod view;

use crate::widget::FilterWidget;
use app::Model;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};

/// TUI を実行
pub fn run(widget: FilterWidget) -> io::Result<()> {
    // 代替スクリーン中は stderr へのログを止める
    with_logging_muted(|| run_in_terminal(widget))
}

/// ログを止めて処理を実行し、結果に関わらずレベルを戻す
fn with_logging_muted<T>(f: impl FnOnce() -> T) -> T {
    let log_level = log::max_level();
    log::set_max_level(log::LevelFilter::Off);
    let result = f();
    log::set_max_level(log_level);
    result
}

/// ターミナルを設定してメインループを実行
///
/// 途中で失敗してもターミナルは必ず復元する。
fn run_in_terminal(widget: FilterWidget) -> io::Result<()> {
    terminal::enable_raw_mode()?;

    let result = stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout())))
        .and_then(|mut terminal| {
            let mut model = Model::new(widget);
            event_loop(&mut terminal, &mut model)
        });

    result.and(restore_terminal())
}

/// ターミナルを復元
fn restore_terminal() -> io::Result<()> {
    let raw_mode = terminal::disable_raw_mode();
    let screen = stdout().execute(LeaveAlternateScreen).map(|_| ());
    raw_mode.and(screen)
}

/// メインループ
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    model: &mut Model,
) -> io::Result<()> {
    while !model.should_quit {
        terminal.draw(|f| view::view(f, model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = app::key_to_msg(model, key) {
                    app::update(model, msg);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tui_test.rs"]
mod tests;
