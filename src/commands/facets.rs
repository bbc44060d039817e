//! cardsift facets コマンド
//!
//! カタログに含まれるカテゴリ・サイズ・色のトークンを表示する。

use crate::catalog::{Catalog, Facet};
use crate::output;
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Catalog file
    pub catalog: PathBuf,

    /// Show only one facet
    #[arg(long, value_enum)]
    pub facet: Option<Facet>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// ファセットごとのトークン一覧
#[derive(Debug, Serialize, PartialEq)]
struct FacetValues {
    facet: Facet,
    values: Vec<String>,
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = super::load_catalog(&args.catalog)?;
    let facets = collect_facets(&catalog, args.facet);

    if args.json {
        output::print_json(&facets)?;
    } else {
        for entry in &facets {
            let values = if entry.values.is_empty() {
                "-".to_string()
            } else {
                entry.values.join(", ")
            };
            println!("{}: {}", entry.facet.bold(), values);
        }
    }

    Ok(())
}

fn collect_facets(catalog: &Catalog, only: Option<Facet>) -> Vec<FacetValues> {
    Facet::all()
        .iter()
        .filter(|f| only.is_none_or(|o| o == **f))
        .map(|f| FacetValues {
            facet: *f,
            values: catalog.facet_values(*f),
        })
        .collect()
}
