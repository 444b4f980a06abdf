//! Aavakaaram CLI - inspect and edit a file-backed cart.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! cart show
//!
//! # Add two jars of mango pickle at ₹350
//! cart add A "Mango Pickle" 350 --quantity 2 --image /img/mango.jpg
//!
//! # Set the quantity of a line (0 removes it)
//! cart update A 3
//!
//! # Remove a line, or empty the cart
//! cart remove A
//! cart clear
//! ```
//!
//! Storage location, namespace and display currency come from
//! `CART_STORAGE_DIR`, `CART_NAMESPACE` and `CART_CURRENCY`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::cart::PriceArg;

#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about = "Aavakaaram cart tools")]
struct Cli {
    /// Print the resulting cart as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every line with totals
    Show,
    /// Add a product, merging with an existing line
    Add {
        /// Product identifier
        product_id: String,

        /// Display name
        product_name: String,

        /// Unit price in the store currency
        price: PriceArg,

        /// Image path or URL
        #[arg(short, long, default_value = "")]
        image: String,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product's line
    Remove {
        /// Product identifier
        product_id: String,
    },
    /// Set a line's quantity (0 or less removes it)
    Update {
        /// Product identifier
        product_id: String,

        /// New absolute quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove every line
    Clear,
    /// Print the cart total
    Total,
    /// Print the number of items in the cart
    Count,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    let mut session = commands::cart::Session::open()?;

    match cli.command {
        Commands::Show => {}
        Commands::Add {
            product_id,
            product_name,
            price,
            image,
            quantity,
        } => session.add(product_id, product_name, price, image, quantity),
        Commands::Remove { product_id } => session.remove(product_id),
        Commands::Update {
            product_id,
            quantity,
        } => session.update(product_id, quantity),
        Commands::Clear => session.clear(),
        Commands::Total => {
            session.print_total();
            return Ok(());
        }
        Commands::Count => {
            session.print_count();
            return Ok(());
        }
    }

    session.print(cli.json)
}
