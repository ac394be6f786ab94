//! Storefront CLI - browse the catalog, build a cart and check out from the
//! terminal.
//!
//! Commands:
//! - `storefront catalog` - List and filter products
//! - `storefront categories` - List categories
//! - `storefront product` - Show product details
//! - `storefront shipping` - List shipping methods
//! - `storefront checkout` - Price a cart and place an order
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, CheckoutArgs, ConfigArgs, ProductArgs};

/// Storefront CLI - browse products and check out
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, with optional filters and sorting
    Catalog(CatalogArgs),

    /// List product categories
    Categories,

    /// Show product details, reviews and related products
    Product(ProductArgs),

    /// List shipping methods
    Shipping,

    /// Price a cart and optionally place the order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    ctx.config.logging.init(cli.verbose);
    tracing::debug!(config = ?ctx.config_path, "configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Categories => commands::catalog::run_categories(&ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Shipping => commands::shipping::run(&ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
