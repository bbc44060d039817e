use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{browse, facets, filter};

#[derive(Debug, Parser)]
#[command(name = "cardsift")]
#[command(about = "Product catalog filter", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter a catalog and print the visible cards
    Filter(filter::Args),

    /// List the category, size and color tokens of a catalog
    Facets(facets::Args),

    /// Browse a catalog in an interactive filter widget
    Browse(browse::Args),
}
