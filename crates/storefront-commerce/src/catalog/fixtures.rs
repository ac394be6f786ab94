//! Built-in demo catalog.
//!
//! Nothing here is global: callers build a fresh [`StaticCatalog`] from
//! these values and pass it to whatever needs it.

use crate::catalog::{Product, Review, StaticCatalog};
use crate::ids::{ProductId, ReviewId};
use crate::money::{Currency, Money};

const APPAREL_SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

fn usd(minor: i64) -> Money {
    Money::from_minor(minor, Currency::USD)
}

/// The eight demo products.
pub fn demo_products() -> Vec<Product> {
    let mut tee = Product::new(ProductId::new(1), "Premium Cotton T-Shirt", usd(3999), "Clothing")
        .with_rating(4.5, 127)
        .with_tag("cotton")
        .with_tag("basics")
        .with_color("Black", "#000000")
        .with_color("White", "#ffffff")
        .with_color("Navy", "#0a192f")
        .with_color("Red", "#e11d48")
        .with_sizes(APPAREL_SIZES);
    tee.description = Some(
        "Our premium cotton t-shirt is made from 100% organic cotton, providing exceptional \
         comfort and durability."
            .to_string(),
    );
    tee.features = vec![
        "100% organic cotton".to_string(),
        "Classic fit".to_string(),
        "Pre-shrunk fabric".to_string(),
        "Reinforced stitching".to_string(),
        "Machine washable".to_string(),
    ];

    vec![
        tee,
        Product::new(ProductId::new(2), "Slim Fit Jeans", usd(5999), "Clothing")
            .with_rating(4.3, 89)
            .with_tag("denim")
            .with_color("Indigo", "#3f51b5")
            .with_color("Black", "#000000")
            .with_sizes(["28", "30", "32", "34", "36"]),
        Product::new(ProductId::new(3), "Casual Hoodie", usd(4999), "Clothing")
            .with_rating(4.7, 112)
            .with_tag("cotton")
            .with_color("Grey", "#9ca3af")
            .with_color("Black", "#000000")
            .with_sizes(APPAREL_SIZES),
        Product::new(ProductId::new(4), "Canvas Sneakers", usd(4499), "Footwear")
            .with_rating(4.2, 76)
            .with_tag("canvas")
            .with_color("White", "#ffffff")
            .with_sizes(["7", "8", "9", "10", "11", "12"]),
        Product::new(ProductId::new(5), "Denim Jacket", usd(7999), "Clothing")
            .with_rating(4.6, 95)
            .with_tag("denim")
            .with_color("Blue", "#1e3a8a")
            .with_sizes(APPAREL_SIZES),
        Product::new(ProductId::new(6), "Leather Belt", usd(2999), "Accessories")
            .with_rating(4.1, 41)
            .with_tag("leather")
            .with_color("Brown", "#78350f")
            .with_color("Black", "#000000"),
        Product::new(ProductId::new(7), "Wireless Headphones", usd(12999), "Electronics")
            .with_rating(4.4, 203)
            .with_tag("audio")
            .with_color("Silver", "#c0c0c0")
            .with_color("Black", "#000000"),
        Product::new(ProductId::new(8), "Smart Watch", usd(19999), "Electronics")
            .with_rating(4.0, 58)
            .with_tag("wearable")
            .out_of_stock(),
    ]
}

/// Reviews for the demo products.
pub fn demo_reviews() -> Vec<Review> {
    vec![
        Review::new(
            ReviewId::new(1),
            ProductId::new(1),
            "Alex Johnson",
            5,
            "2 months ago",
            "This is the best t-shirt I've ever owned. The fabric is soft and comfortable, \
             and it fits perfectly.",
        ),
        Review::new(
            ReviewId::new(2),
            ProductId::new(1),
            "Sarah Miller",
            4,
            "1 month ago",
            "Great quality shirt. The material is nice and thick, and the stitching is well done.",
        ),
        Review::new(
            ReviewId::new(3),
            ProductId::new(1),
            "Michael Brown",
            5,
            "3 weeks ago",
            "Excellent product! The color is exactly as shown and it has held up after washes.",
        ),
    ]
}

/// A catalog holding the demo products and reviews.
pub fn demo_catalog() -> StaticCatalog {
    StaticCatalog::new(demo_products()).with_reviews(demo_reviews())
}
