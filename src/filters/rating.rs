//! Rating threshold filter.

use super::Filter;
use crate::listing::Product;

/// Keeps products rated strictly above a threshold.
pub struct RatingFilter {
    above: f64,
}

impl RatingFilter {
    /// Creates a new rating filter.
    pub fn new(above: f64) -> Self {
        Self { above }
    }
}

impl Filter for RatingFilter {
    fn matches(&self, product: &Product) -> bool {
        // Unrated products never clear a threshold
        product.product_rating.is_some_and(|rating| rating > self.above)
    }

    fn description(&self) -> String {
        format!("Rating: > {:.1} stars", self.above)
    }
}
