//! Product detail command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::{
    related_products, CatalogSource, Product, Review, ReviewSummary, StarRating, VariantSelection,
};
use storefront_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct ProductDetail<'a> {
    product: &'a Product,
    selection: VariantSelection,
    stars: StarRating,
    reviews: Vec<&'a Review>,
    summary: ReviewSummary,
    related: Vec<&'a Product>,
}

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(ProductId::new(args.id))?;
    let reviews = catalog.reviews(product.id);

    let detail = ProductDetail {
        product,
        selection: VariantSelection::default_for(product),
        stars: StarRating::from_rating(product.rating),
        summary: ReviewSummary::from_reviews(product.id, reviews.iter().copied()),
        reviews,
        related: related_products(&catalog, product, args.related),
    };

    if ctx.output.is_json() {
        ctx.output.json(&detail);
        return Ok(());
    }

    print_detail(ctx, &detail);
    Ok(())
}

fn print_detail(ctx: &Context, detail: &ProductDetail<'_>) {
    let product = detail.product;

    ctx.output.header(&product.name);
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("category", &product.category);
    ctx.output.kv(
        "rating",
        &format!(
            "{} {:.1} ({} reviews)",
            detail.stars.render(),
            product.rating,
            product.review_count
        ),
    );
    ctx.output.kv("availability", &stock_badge(product));

    if !product.colors.is_empty() {
        let colors: Vec<&str> = product.colors.iter().map(|c| c.name.as_str()).collect();
        ctx.output.kv("colors", &colors.join(", "));
    }
    if !product.sizes.is_empty() {
        ctx.output.kv("sizes", &product.sizes.join(", "));
    }
    if let Some(label) = detail.selection.label() {
        ctx.output.kv("selected", &label);
    }

    if let Some(description) = &product.description {
        ctx.output.info("");
        ctx.output.line(description);
    }
    if !product.features.is_empty() {
        ctx.output.header("Features");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }

    if !detail.reviews.is_empty() {
        ctx.output.header(&format!(
            "Reviews ({}, average {:.1})",
            detail.summary.total_reviews, detail.summary.average_rating
        ));
        for stars in (1..=5).rev() {
            ctx.output.kv(
                &format!("{} star", stars),
                &format!(
                    "{:>3.0}% ({})",
                    detail.summary.percentage(stars),
                    detail.summary.rating_distribution.count(stars)
                ),
            );
        }
        for review in &detail.reviews {
            ctx.output.info("");
            ctx.output.line(&format!(
                "{} {} · {}",
                review.render_stars(),
                review.author,
                review.date
            ));
            ctx.output.line(&review.content);
        }
    }

    if !detail.related.is_empty() {
        ctx.output.header("You may also like");
        for related in &detail.related {
            ctx.output.list_item(&format!(
                "#{} {} {}",
                related.id,
                related.name,
                related.price.display()
            ));
        }
    }
}
