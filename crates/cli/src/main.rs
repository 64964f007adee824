//! Burger Cart CLI - menu browsing and ordering.
//!
//! # Usage
//!
//! ```bash
//! # Browse the menu
//! burger-cli menu --search burguer
//!
//! # Fill the cart
//! burger-cli add "Cheese Burguer"
//! burger-cli add "Combo da Casa" --price "R$ 39,90" --image combo.jpg
//! burger-cli remove "Cheese Burguer"
//! burger-cli show --delivery entrega
//!
//! # Preview and send the order
//! burger-cli message --delivery entrega --address "Rua A, 10" --phone 11999990000
//! burger-cli checkout --delivery retirada --phone 11999990000 --payment pix
//! ```
//!
//! # Commands
//!
//! - `menu` / `gallery` - Catalog browsing
//! - `add` / `remove` / `show` / `clear` - Cart management
//! - `message` / `checkout` - Order preview and WhatsApp hand-off

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use burger_cart_core::DeliveryMethod;
use burger_cart_ordering::OrderingConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::order::OrderArgs;

#[derive(Parser)]
#[command(name = "burger-cli")]
#[command(author, version, about = "Burger Cart ordering tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List menu items
    Menu {
        /// Only show items whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a product's image gallery
    Gallery {
        /// Menu item name
        name: String,

        /// Image position (wraps around)
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
    /// Add one unit of an item to the cart
    Add {
        /// Menu item name
        name: String,

        /// Price for items not on the menu (e.g. "R$ 12,90")
        #[arg(long)]
        price: Option<String>,

        /// Image for items not on the menu
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove one unit of an item from the cart
    Remove {
        /// Cart item name
        name: String,
    },
    /// Show the cart and its total
    Show {
        /// Delivery method used for the total (`pickup`, `delivery`)
        #[arg(short, long, default_value_t = DeliveryMethod::Pickup)]
        delivery: DeliveryMethod,
    },
    /// Empty the cart
    Clear,
    /// Preview the order message without sending it
    Message(OrderArgs),
    /// Send the order via WhatsApp and empty the cart
    Checkout(OrderArgs),
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "burger_cart_ordering=info,burger_cart_cli=info";

fn main() {
    // Logs go to stderr; stdout carries command output
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = OrderingConfig::from_env()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Menu { search } => commands::menu::list(&config, search.as_deref(), &mut out)?,
        Commands::Gallery { name, index } => {
            commands::menu::gallery(&config, &name, index, &mut out)?;
        }
        Commands::Add { name, price, image } => {
            commands::cart::add(&config, &name, price.as_deref(), image.as_deref(), &mut out)?;
        }
        Commands::Remove { name } => commands::cart::remove(&config, &name, &mut out)?,
        Commands::Show { delivery } => commands::cart::show(&config, delivery, &mut out)?,
        Commands::Clear => commands::cart::clear(&config, &mut out)?,
        Commands::Message(args) => commands::order::preview(&config, &args, &mut out)?,
        Commands::Checkout(args) => commands::order::checkout(&config, &args, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
