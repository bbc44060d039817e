use crate::catalog::Catalog;
use crate::cli::Command;
use crate::config::WidgetConfig;
use crate::widget::FilterWidget;
use std::path::Path;

pub mod browse;
pub mod facets;
pub mod filter;

pub fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::Filter(args) => filter::run(args),
        Command::Facets(args) => facets::run(args),
        Command::Browse(args) => browse::run(args),
    }
}

/// カタログを読み込む
fn load_catalog(path: &Path) -> Result<Catalog, String> {
    let catalog = Catalog::load(path)
        .map_err(|e| format!("Failed to load catalog {}: {}", path.display(), e))?;
    if catalog.is_empty() {
        log::warn!("catalog {} has no cards", path.display());
    }
    Ok(catalog)
}

/// 設定とカタログからウィジェットを作成し、初回フィルタまで行う
fn load_widget(catalog_path: &Path, config_path: Option<&Path>) -> Result<FilterWidget, String> {
    let config = WidgetConfig::load(config_path).map_err(|e| e.to_string())?;
    let catalog = load_catalog(catalog_path)?;

    let mut widget = FilterWidget::new(catalog, &config);
    widget.init();
    Ok(widget)
}
