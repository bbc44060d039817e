use thiserror::Error;

/// cardsift 統一エラー型
#[derive(Debug, Error)]
pub enum CardsiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported catalog format: {0}. Expected .json, .toml, .yaml or .yml")]
    UnsupportedFormat(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("TUI error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, CardsiftError>;
