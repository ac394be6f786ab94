//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod product;
pub mod shipping;

use std::str::FromStr;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use storefront_commerce::catalog::SortOption;
use storefront_commerce::checkout::PaymentMethod;
use storefront_commerce::ProductId;
use thiserror::Error;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show this category ("All" for every category).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum price, inclusive.
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Maximum price, inclusive.
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Case-insensitive text to look for in names and categories.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Sort order: featured, price-asc, price-desc, rating, name-asc.
    #[arg(short, long, default_value = "featured", value_parser = parse_sort)]
    pub sort: SortOption,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: u32,

    /// Number of related products to show.
    #[arg(long, default_value = "4")]
    pub related: usize,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to add, as `ID` or `ID:QTY`. Repeatable.
    #[arg(short, long = "item", required = true, value_parser = parse_item)]
    pub items: Vec<ItemArg>,

    /// Shipping method ID.
    #[arg(short, long)]
    pub shipping: Option<String>,

    /// Payment method: credit-card, paypal, apple-pay.
    #[arg(short, long, default_value = "credit-card", value_parser = parse_payment)]
    pub payment: PaymentMethod,

    /// Place the order after pricing it.
    #[arg(long)]
    pub place_order: bool,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// One `--item` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemArg {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemArgError {
    #[error("invalid product id in '{0}'")]
    InvalidId(String),
    #[error("invalid quantity in '{0}' (must be at least 1)")]
    InvalidQuantity(String),
}

impl FromStr for ItemArg {
    type Err = ItemArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, qty)) => (id, Some(qty)),
            None => (s, None),
        };
        let product_id = id
            .trim()
            .parse::<u32>()
            .map(ProductId::new)
            .map_err(|_| ItemArgError::InvalidId(s.to_string()))?;
        let quantity = match quantity {
            Some(qty) => qty
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|q| *q >= 1)
                .ok_or_else(|| ItemArgError::InvalidQuantity(s.to_string()))?,
            None => 1,
        };
        Ok(Self {
            product_id,
            quantity,
        })
    }
}

fn parse_item(s: &str) -> Result<ItemArg, ItemArgError> {
    s.parse()
}

fn parse_payment(s: &str) -> Result<PaymentMethod, String> {
    PaymentMethod::parse(s).ok_or_else(|| format!("unknown payment method '{}'", s))
}

fn parse_sort(s: &str) -> Result<SortOption, String> {
    SortOption::parse(s).ok_or_else(|| format!("unknown sort order '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_arg_parsing() {
        assert_eq!(
            "3".parse::<ItemArg>().unwrap(),
            ItemArg {
                product_id: ProductId::new(3),
                quantity: 1
            }
        );
        assert_eq!("1:2".parse::<ItemArg>().unwrap().quantity, 2);
        assert_eq!(
            "x:2".parse::<ItemArg>().unwrap_err(),
            ItemArgError::InvalidId("x:2".to_string())
        );
        assert_eq!(
            "1:0".parse::<ItemArg>().unwrap_err(),
            ItemArgError::InvalidQuantity("1:0".to_string())
        );
        assert!("1:".parse::<ItemArg>().is_err());
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!(parse_sort("price-asc").unwrap(), SortOption::PriceAsc);
        assert!(parse_sort("cheapest").is_err());
    }

    #[test]
    fn test_payment_parsing() {
        assert_eq!(parse_payment("apple-pay").unwrap(), PaymentMethod::ApplePay);
        assert!(parse_payment("cash").is_err());
    }
}
