//! # Register
//!
//! Runs one transaction from the command line.
//!
//! ## Usage
//! ```bash
//! # Scan the basket from ./register.toml (if present)
//! cargo run -p store-register
//!
//! # Scan extra items: NAME=CENTS[@WEIGHT][+tax]
//! cargo run -p store-register -- --item Beans=499 --item Beef=500@1.999 --item Lamp=1999+tax
//!
//! # Use a settings file and print the receipt as JSON
//! cargo run -p store-register -- --config ./coupon.toml --json
//! ```

mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use store_core::ItemConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
struct Args {
    #[arg(long, help = "Settings file (TOML). Defaults to ./register.toml if present.")]
    config: Option<PathBuf>,

    #[arg(
        long = "item",
        help = "Item to scan after the configured basket: NAME=CENTS[@WEIGHT][+tax]"
    )]
    items: Vec<ItemConfig>,

    #[arg(long, help = "Print the finalized receipt as JSON.")]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref()).context("loading settings")?;
    info!(store = %settings.store_name, "Register opened");

    let mut register = settings
        .register
        .build()
        .context("building register from settings")?;
    if let Some(rule) = register.scheme() {
        debug!(kind = rule.kind(), "Pricing rule active");
    }

    for config in settings.basket.iter().chain(&args.items) {
        register.scan(config.to_priceable()?);
    }

    let amount_due = register.subtotal();
    let receipt = register.total();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&receipt.summary())?);
    } else {
        println!("{}", settings.store_name);
        println!("{}", receipt.output());
        if !receipt.tax_total().is_zero() {
            println!("TAX: {}", receipt.tax_total());
        }
        println!("AMOUNT DUE: {amount_due}");
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every scan
/// - Default: INFO, DEBUG for the store crates
///
/// Logs go to stderr so receipts on stdout stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,store_core=debug,register=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
