//! Catalog browsing commands.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::{
    categories, filter, price_bounds, sort_products, CatalogQuery, CatalogSource, Product,
    ALL_CATEGORIES,
};

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let query = build_query(&args);
    ctx.output.debug(&format!("Query: {:?}", query));

    let mut products = filter(catalog.products(), &query);
    sort_products(&mut products, args.sort);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} of {} products ({})",
        products.len(),
        catalog.products().len(),
        args.sort.display_name()
    ));

    if products.is_empty() {
        ctx.output.info("No products match the current filters.");
        return Ok(());
    }

    print_product_table(ctx, &products);
    Ok(())
}

/// Run the categories command.
pub fn run_categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products = catalog.products();
    let counts: Vec<CategoryCount> = categories(products)
        .into_iter()
        .map(|name| {
            let products = if name == ALL_CATEGORIES {
                products.len()
            } else {
                products.iter().filter(|p| p.category == name).count()
            };
            CategoryCount { name, products }
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&counts);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &counts {
        ctx.output.list_item(&format!("{} ({})", category.name, category.products));
    }

    if let Some((lo, hi)) = price_bounds(products) {
        let currency = catalog.products()[0].price.currency;
        ctx.output.info("");
        ctx.output.kv(
            "price range",
            &format!("{}{:.2} - {}{:.2}", currency.symbol(), lo, currency.symbol(), hi),
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct CategoryCount {
    name: String,
    products: usize,
}

fn build_query(args: &CatalogArgs) -> CatalogQuery {
    let defaults = CatalogQuery::default();
    let mut query = CatalogQuery::new().with_price_range(
        args.min_price.unwrap_or(defaults.min_price),
        args.max_price.unwrap_or(defaults.max_price),
    );
    if let Some(category) = &args.category {
        query = query.with_category(category.as_str());
    }
    if let Some(text) = &args.query {
        query = query.with_query(text.as_str());
    }
    query
}

fn print_product_table(ctx: &Context, products: &[&Product]) {
    let widths = [4, 26, 12, 10, 8, 6];
    ctx.output.table_header(&["ID", "NAME", "CATEGORY", "PRICE", "RATING", "STOCK"], &widths);
    for product in products {
        let id = product.id.to_string();
        let price = product.price.display();
        let rating = format!("{:.1}", product.rating);
        let stock = if product.is_available() { "yes" } else { "no" };
        ctx.output.table_row(
            &[&id, &product.name, &product.category, &price, &rating, stock],
            &widths,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use storefront_commerce::catalog::SortOption;

    fn args() -> CatalogArgs {
        CatalogArgs {
            category: None,
            min_price: None,
            max_price: None,
            query: None,
            sort: SortOption::Featured,
        }
    }

    #[test]
    fn test_build_query_defaults() {
        assert_eq!(build_query(&args()), CatalogQuery::default());
    }

    #[test]
    fn test_build_query_partial_range() {
        let mut args = args();
        args.max_price = Some(dec!(50));
        args.category = Some("Clothing".to_string());

        let query = build_query(&args);
        assert_eq!(query.min_price, dec!(0));
        assert_eq!(query.max_price, dec!(50));
        assert_eq!(query.category, "Clothing");
    }
}
