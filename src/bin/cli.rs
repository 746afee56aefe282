//! Stockroom Console Binary
//!
//! Loads the inventory, drives the interactive session, and persists on
//! exit, whether through the menu or an interrupt.

use std::io;

use clap::Parser;
use stockroom::config::DEFAULT_INVENTORY_FILE;
use stockroom::{Config, Session, Shop};
use tracing_subscriber::{fmt, EnvFilter};

/// Stockroom console
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Console inventory manager for instrument shops")]
#[command(version)]
struct Args {
    /// Inventory file path
    #[arg(short, long, default_value = DEFAULT_INVENTORY_FILE)]
    file: String,
}

fn main() {
    // Initialize tracing/logging; stderr keeps diagnostics out of the
    // interactive prompt stream
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stockroom=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Stockroom v{}", stockroom::VERSION);
    tracing::info!("Inventory file: {}", args.file);

    let config = Config::builder().inventory_path(&args.file).build();
    let shop = Shop::open(config);

    // Both termination paths converge on the same guarded write routine:
    // the interrupt handler and the normal close below share one guard
    let guard = shop.persist_guard();
    if let Err(err) = ctrlc::set_handler(move || {
        if let Err(err) = guard.persist() {
            tracing::error!("Persist on interrupt failed: {err}");
            std::process::exit(1);
        }
        std::process::exit(130);
    }) {
        tracing::warn!("Could not install the interrupt handler: {err}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(shop.inventory(), stdin.lock(), stdout.lock());

    // A closed stdin unwinds the session; the shutdown write still runs
    if let Err(err) = session.run() {
        tracing::error!("Session ended early: {err}");
    }
    drop(session);

    if let Err(err) = shop.close() {
        tracing::error!("Persist on exit failed: {err}");
        std::process::exit(1);
    }
}
