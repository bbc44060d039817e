//! フィルタエンジン
//!
//! - `state`: フィルタ状態（検索語・ファセット選択・価格範囲）
//! - `engine`: カードごとの可視判定と件数集計
//! - `suggestion`: 0 件時の代替候補選択

mod engine;
mod state;
mod suggestion;

pub use engine::{apply_filters, FilterOutcome};
pub use state::{parse_price, FilterState, Selection, ALL};
pub use suggestion::Suggestion;

#[cfg(test)]
pub use suggestion::{SuggestionHeading, SuggestionSource, SUGGESTION_LIMIT};

#[cfg(test)]
#[path = "filter/proptests.rs"]
mod proptests;
