//! # Phonebook CLI
//!
//! A terminal front end for the contacts backend.
//!
//! ```bash
//! # List everything
//! phonebook --base-url https://example.mockapi.io/api/v1 list
//!
//! # List contacts whose name contains "jo"
//! CONTACTS_API_URL=http://localhost:3000 phonebook --filter jo list
//!
//! # Add and remove
//! phonebook add --name "Rosie Simpson" --phone 459-12-56
//! phonebook remove 7
//! ```
//!
//! Every run fetches the full list first, runs the command, then prints either the error
//! banner or the (filtered) list. `RUST_LOG=debug` shows each store transition.

use anyhow::Context;
use clap::{Parser, Subcommand};
use phonebook::config::{PhonebookConfig, BASE_URL_ENV};
use phonebook::error::PhonebookError;
use phonebook::lifecycle::Phonebook;
use phonebook::operations::Operation;
use store_framework::tracing::setup_tracing;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "Manage contacts stored on a REST backend")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the contacts backend (overrides CONTACTS_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Only show contacts whose name contains this text (case-insensitive)
    #[arg(long, short, global = true, default_value = "")]
    filter: String,

    /// Mailbox capacity of each store (overrides PHONEBOOK_STORE_BUFFER)
    #[arg(long, global = true)]
    store_buffer: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the contact list
    List,

    /// Add a contact
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,
    },

    /// Delete a contact by id
    Remove {
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let cli = Cli::parse();
    let config = match cli.base_url.as_deref() {
        Some(base_url) => PhonebookConfig::new(base_url)?.with_buffer_from_env()?,
        None => PhonebookConfig::from_env()
            .with_context(|| format!("Pass --base-url or set {BASE_URL_ENV}"))?,
    };
    let config = match cli.store_buffer {
        Some(store_buffer) => config.with_store_buffer(store_buffer)?,
        None => config,
    };

    info!(base_url = %config.api_base_url, "Starting phonebook");
    let phonebook = Phonebook::from_config(&config);

    report(phonebook.fetch_contacts()).await?;

    match cli.command {
        Commands::List => {}
        Commands::Add { name, phone } => match phonebook.submit_contact(&name, &phone) {
            Ok(operation) => report(operation).await?,
            Err(e) => eprintln!("{e}"),
        },
        Commands::Remove { id } => report(phonebook.delete_contact(id)).await?,
    }

    phonebook.set_filter(cli.filter).await?;
    print_contacts(&phonebook);

    phonebook.shutdown().await?;
    Ok(())
}

/// Request failures end up in the store and are printed from there; anything else is fatal.
async fn report<T: Send + 'static>(operation: Operation<T>) -> Result<(), PhonebookError> {
    let kind = operation.kind();
    match operation.join().await {
        Ok(_) => Ok(()),
        Err(PhonebookError::RequestFailed(failure)) => {
            warn!(%kind, error = %failure, "Request failed");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn print_contacts(phonebook: &Phonebook) {
    if let Some(message) = phonebook.current_error() {
        println!("Error: {message}");
        return;
    }

    let contacts = phonebook.filtered_contacts();
    if contacts.is_empty() {
        println!("No contacts found. Add your first contact!");
        return;
    }

    for contact in contacts.iter() {
        println!("{:>6}  {:<30} {}", contact.id, contact.name, contact.phone);
    }
}
