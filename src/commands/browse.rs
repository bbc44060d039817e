//! cardsift browse コマンド
//!
//! フィルタウィジェットを TUI で操作する。

use crate::error::CardsiftError;
use crate::tui;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(after_help = "KEYS:
  Tab / Shift+Tab   move between controls
  Left / Right      choose a quick filter or select option
  Enter             apply (on buttons: press)
  Up / Down         scroll the card grid
  Esc, Ctrl+C       quit (q also quits outside text fields)")]
pub struct Args {
    /// Catalog file
    pub catalog: PathBuf,

    /// Widget config file (defaults to $CARDSIFT_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    let widget = super::load_widget(&args.catalog, args.config.as_deref())?;
    tui::run(widget).map_err(|e| CardsiftError::Tui(e.to_string()).to_string())
}
