//! Exact product name filter.

use super::Filter;
use crate::listing::Product;

/// Keeps products whose name equals the given one exactly.
pub struct NameFilter {
    name: String,
}

impl NameFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Filter for NameFilter {
    fn matches(&self, product: &Product) -> bool {
        product.name == self.name
    }

    fn description(&self) -> String {
        format!("Name: {:?}", self.name)
    }
}
