//! Utils

use clap::Parser;

/// Arguments for the ordering demo
#[derive(Debug, Parser)]
pub struct ExampleOrderArgs {
    /// Menu fixture to load from `fixtures/menus`
    #[clap(short, long, default_value = "firehouse")]
    pub fixture: String,

    /// Only list the menu section with this category id
    #[clap(short, long)]
    pub category: Option<String>,
}
