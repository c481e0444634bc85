//! Data inspection command CLI definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub enum DataCommand {
    /// Print the champions document
    Champions,

    /// Print the items document
    Items,

    /// Print the traits document
    Traits,

    /// Print all three documents as one object
    All,

    /// Per-category item counts
    Stats,
}
