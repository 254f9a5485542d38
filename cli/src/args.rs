use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "items", version, about = "Browse and edit the remote items collection")]
pub struct Cli {
    /// Base URL of the items API. Falls back to the ITEMS_API_URL
    /// environment variable, then to http://127.0.0.1:3000.
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the collection and print it
    List,
    /// Fetch the collection and print one item in detail
    Show { id: String },
    /// Create an item, then refresh so it becomes observable
    Add { id: String, name: String },
    /// Rename an existing item
    Edit { id: String, name: String },
    /// Delete an item
    Remove { id: String },
}
