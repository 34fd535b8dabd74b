//! Best-seller filter.

use super::Filter;
use crate::listing::Product;

/// Keeps only products carrying a best-seller marker.
pub struct BestSellerFilter;

impl BestSellerFilter {
    /// Creates a new best-seller filter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BestSellerFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for BestSellerFilter {
    fn matches(&self, product: &Product) -> bool {
        product.best_seller
    }

    fn description(&self) -> String {
        "Best sellers only".to_string()
    }
}
