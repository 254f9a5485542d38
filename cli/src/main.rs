//! Command-line view over the remote items collection.
//!
//! Pure glue: every command fetches into an `ItemStore`, triggers at most
//! one mutating operation through `ItemClient`, and renders the store's
//! published collection. Fetch/update/delete failures are logged and leave
//! the rendered state unchanged; create failures abort the command with an
//! error the user sees.

mod args;
mod transport;

use anyhow::{bail, Result};
use clap::Parser;
use items_core::{Item, ItemClient, ItemStore};
use tracing::warn;

use args::{Cli, Commands};

const DEFAULT_URL: &str = "http://127.0.0.1:3000";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli
        .url
        .or_else(|| std::env::var("ITEMS_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    let client = ItemClient::new(&base_url)?;
    let mut store = ItemStore::new();

    match cli.command {
        Commands::List => {
            refresh(&client, &mut store);
            print_collection(&store);
        }
        Commands::Show { id } => {
            refresh(&client, &mut store);
            let Some(item) = store.get(&id) else {
                bail!("no item with id {id:?}");
            };
            print_detail(item);
        }
        Commands::Add { id, name } => {
            if id.trim().is_empty() || name.trim().is_empty() {
                bail!("id and name must both be non-empty");
            }
            let req = client.build_create(&Item::new(id, name))?;
            let created = client.parse_create(transport::execute(req)?)?;
            println!(
                "created {} ({})",
                created.name,
                created.id.as_deref().unwrap_or("-")
            );
            // Create alone does not mutate the collection; a follow-up
            // fetch makes the new item observable.
            refresh(&client, &mut store);
            print_collection(&store);
        }
        Commands::Edit { id, name } => {
            refresh(&client, &mut store);
            match client
                .build_update(&id, &name)
                .and_then(|req| transport::execute(req))
                .and_then(|resp| client.parse_update(resp))
            {
                Ok(updated) => {
                    store.apply_update(updated);
                }
                Err(err) => warn!(%err, %id, "update failed; collection unchanged"),
            }
            print_collection(&store);
        }
        Commands::Remove { id } => {
            refresh(&client, &mut store);
            match client
                .build_delete(&id)
                .and_then(|req| transport::execute(req))
                .and_then(|resp| client.parse_delete(resp))
            {
                Ok(resp) => {
                    store.apply_delete(&id, resp.success);
                }
                Err(err) => warn!(%err, %id, "delete failed; collection unchanged"),
            }
            print_collection(&store);
        }
    }

    Ok(())
}

/// One fetch round trip. A failure of any kind is logged and the store is
/// left exactly as it was.
fn refresh(client: &ItemClient, store: &mut ItemStore) {
    let seq = store.begin_fetch();
    match transport::execute(client.build_fetch_all())
        .and_then(|resp| client.parse_fetch_all(resp))
    {
        Ok(items) => {
            if !store.replace_all(seq, items) {
                warn!("stale fetch response dropped");
            }
        }
        Err(err) => warn!(%err, "fetch failed; keeping current collection"),
    }
}

fn print_collection(store: &ItemStore) {
    if store.is_empty() {
        println!("(no items)");
        return;
    }
    for item in store.items() {
        println!("{:<12} {}", item.id.as_deref().unwrap_or("-"), item.name);
    }
}

fn print_detail(item: &Item) {
    println!("id:   {}", item.id.as_deref().unwrap_or("-"));
    println!("name: {}", item.name);
}
