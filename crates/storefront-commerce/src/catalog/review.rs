//! Review models and star ratings.

use crate::ids::{ProductId, ReviewId};
use serde::{Deserialize, Deserializer, Serialize};

/// Individual review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub author: String,
    /// Whole stars, 1 to 5.
    #[serde(deserialize_with = "clamped_rating")]
    pub rating: u8,
    /// Relative date label (e.g., "2 months ago").
    pub date: String,
    pub content: String,
}

impl Review {
    pub fn new(
        id: ReviewId,
        product_id: ProductId,
        author: impl Into<String>,
        rating: u8,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            product_id,
            author: author.into(),
            rating: rating.clamp(1, 5),
            date: date.into(),
            content: content.into(),
        }
    }

    /// Render star rating as text.
    pub fn render_stars(&self) -> String {
        StarRating::from_rating(f32::from(self.rating)).render()
    }
}

fn clamped_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    u8::deserialize(deserializer).map(|rating| rating.clamp(1, 5))
}

/// Full, half and empty star counts for a 0-5 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Whole part gives full stars, any fractional part gives one half star,
    /// the remainder of five is empty.
    pub fn from_rating(rating: f32) -> Self {
        let rating = rating.clamp(0.0, 5.0);
        let full = rating.floor() as u8;
        let half = rating.fract() != 0.0;
        let empty = 5 - full - u8::from(half);
        Self { full, half, empty }
    }

    /// Render as text, using `½` for the half star.
    pub fn render(&self) -> String {
        format!(
            "{}{}{}",
            "★".repeat(self.full as usize),
            if self.half { "½" } else { "" },
            "☆".repeat(self.empty as usize)
        )
    }
}

/// Distribution of ratings (1-5 stars).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingDistribution {
    pub five_star: u32,
    pub four_star: u32,
    pub three_star: u32,
    pub two_star: u32,
    pub one_star: u32,
}

impl RatingDistribution {
    fn record(&mut self, stars: u8) {
        match stars {
            5 => self.five_star += 1,
            4 => self.four_star += 1,
            3 => self.three_star += 1,
            2 => self.two_star += 1,
            1 => self.one_star += 1,
            _ => {}
        }
    }

    /// Number of reviews with the given star count.
    pub fn count(&self, stars: u8) -> u32 {
        match stars {
            5 => self.five_star,
            4 => self.four_star,
            3 => self.three_star,
            2 => self.two_star,
            1 => self.one_star,
            _ => 0,
        }
    }

    /// Get percentage for a rating level.
    pub fn percentage(&self, stars: u8, total: u32) -> f32 {
        if total == 0 {
            return 0.0;
        }
        (self.count(stars) as f32 / total as f32) * 100.0
    }
}

/// Product reviews summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    pub product_id: ProductId,
    pub average_rating: f32,
    pub total_reviews: u32,
    pub rating_distribution: RatingDistribution,
}

impl ReviewSummary {
    /// Summarize the reviews belonging to `product_id`; others are ignored.
    pub fn from_reviews<'a>(
        product_id: ProductId,
        reviews: impl IntoIterator<Item = &'a Review>,
    ) -> Self {
        let mut distribution = RatingDistribution::default();
        let mut total = 0u32;
        let mut sum = 0u32;
        for review in reviews.into_iter().filter(|r| r.product_id == product_id) {
            distribution.record(review.rating);
            total += 1;
            sum += u32::from(review.rating);
        }
        let average_rating = if total == 0 {
            0.0
        } else {
            sum as f32 / total as f32
        };
        Self {
            product_id,
            average_rating,
            total_reviews: total,
            rating_distribution: distribution,
        }
    }

    /// Get percentage of reviews with the given star count.
    pub fn percentage(&self, stars: u8) -> f32 {
        self.rating_distribution.percentage(stars, self.total_reviews)
    }
}
