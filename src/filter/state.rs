//! フィルタ状態

use serde::Serialize;

/// 「制約なし」を表すセンチネルトークン
pub const ALL: &str = "all";

/// ファセットの選択状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// 制約なし（トークン `"all"`）
    #[default]
    All,
    /// 指定トークンと完全一致するもののみ
    Only(String),
}

impl Selection {
    /// コントロールの値（トークン）から生成
    pub fn from_token(token: &str) -> Self {
        if token == ALL {
            Selection::All
        } else {
            Selection::Only(token.to_string())
        }
    }

    /// トークン表現
    pub fn token(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(token) => token,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Only(_))
    }

    /// 値が選択に一致するか（大文字小文字を区別する完全一致）
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(token) => token == value,
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

/// フィルタ状態
///
/// 全フィールドは常に有効値か未設定値（空文字 / `All` / `None`）を持つ。
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterState {
    /// 正規化済み検索語（空なら検索しない）
    pub search: String,
    pub category: Selection,
    pub size: Selection,
    pub color: Selection,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl FilterState {
    /// 検索語を正規化して設定
    pub fn set_search(&mut self, raw: &str) {
        self.search = normalize_value(raw);
    }

    /// すべての軸を未設定に戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 何らかの制約が有効か
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || self.category.is_active()
            || self.size.is_active()
            || self.color.is_active()
            || self.price_min.is_some()
            || self.price_max.is_some()
    }
}

/// 入力値の正規化（前後空白除去 + 小文字化）
pub fn normalize_value(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 価格入力の解析
///
/// 有限かつ非負の数値のみ受け付ける。空文字・非数値・負数は未設定。
pub fn parse_price(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
        // -0 を 0 に揃える
        .map(|n| n + 0.0)
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
