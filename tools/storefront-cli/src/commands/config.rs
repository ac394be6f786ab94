//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use storefront_commerce::catalog::CatalogSource;
use storefront_commerce::ShippingMethodId;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::{load_catalog, Context};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("currency", &ctx.config.store.currency);
    ctx.output.kv(
        "catalog_path",
        ctx.config.store.catalog_path.as_deref().unwrap_or("(demo catalog)"),
    );

    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv(
        "default_shipping",
        ctx.config
            .checkout
            .default_shipping
            .as_deref()
            .unwrap_or("(first method)"),
    );
    ctx.output.kv("strict_shipping", &ctx.config.checkout.strict_shipping.to_string());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &ctx.config.logging.format);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config, ctx);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect configuration errors and warnings.
fn check_config(config: &CliConfig, ctx: &Context) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    // Currency and shipping methods
    match config.calculator() {
        Ok(calculator) => {
            if let Some(id) = &config.checkout.default_shipping {
                let id = ShippingMethodId::new(id.as_str());
                if calculator.shipping_method(&id).is_none() {
                    errors.push(format!(
                        "checkout.default_shipping '{}' is not a shipping method",
                        id
                    ));
                }
            }
        }
        Err(e) => errors.push(format!("store.currency: {}", e)),
    }

    // Catalog file
    if let Some(path) = &config.store.catalog_path {
        match load_catalog(&ctx.resolve_path(path)) {
            Ok(catalog) => {
                if catalog.is_empty() {
                    warnings.push("store.catalog_path holds no products".to_string());
                }
                let currency = config.currency().ok();
                let mismatched = catalog
                    .products()
                    .iter()
                    .filter(|p| Some(p.price.currency) != currency)
                    .count();
                if currency.is_some() && mismatched > 0 {
                    warnings.push(format!(
                        "{} product(s) are not priced in {}",
                        mismatched, config.store.currency
                    ));
                }
            }
            Err(e) => errors.push(format!("store.catalog_path: {:#}", e)),
        }
    }

    // Logging
    if !matches!(config.logging.format.as_str(), "pretty" | "json") {
        warnings.push(format!(
            "logging.format '{}' is unknown, falling back to pretty",
            config.logging.format
        ));
    }

    (errors, warnings)
}
