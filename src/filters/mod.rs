//! Query filters applied to the products of a listing page.

pub mod best_seller;
pub mod name;
pub mod rating;

use crate::listing::{Product, ProductQuery};

pub use best_seller::BestSellerFilter;
pub use name::NameFilter;
pub use rating::RatingFilter;

/// A single listing query condition.
pub trait Filter: Send + Sync {
    fn matches(&self, product: &Product) -> bool;

    /// Short human-readable form, used in debug logs.
    fn description(&self) -> String;
}

/// The filters a listing query asks for. A product is listed only if every
/// filter accepts it; with no filters, every product is listed.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Collects the filters named by the query parameters.
    pub fn from_query(query: &ProductQuery) -> Self {
        let mut chain = Self::default();

        if query.best_seller_only() {
            chain.push(BestSellerFilter::new());
        }
        if let Some(above) = query.rating {
            chain.push(RatingFilter::new(above));
        }
        if let Some(name) = &query.name {
            chain.push(NameFilter::new(name.as_str()));
        }

        chain
    }

    pub fn push(&mut self, filter: impl Filter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Returns true if every filter accepts the product.
    pub fn accepts(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Drops rejected products in place; survivors keep their page order.
    pub fn retain(&self, products: &mut Vec<Product>) {
        if !self.filters.is_empty() {
            products.retain(|p| self.accepts(p));
        }
    }

    /// One-line description of the active filters, or `None` when unfiltered.
    pub fn summary(&self) -> Option<String> {
        if self.filters.is_empty() {
            return None;
        }

        let parts: Vec<_> = self.filters.iter().map(|f| f.description()).collect();
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(name: &str, best_seller: bool, rating: Option<f64>) -> Product {
        Product::new(name, 99.9, best_seller, rating)
    }

    #[test]
    fn test_empty_chain_accepts_everything() {
        let chain = FilterChain::default();
        assert!(chain.accepts(&make_product("A", false, None)));
        assert_eq!(chain.summary(), None);
    }

    #[test]
    fn test_chain_requires_every_filter() {
        let mut chain = FilterChain::default();
        chain.push(BestSellerFilter::new());
        chain.push(RatingFilter::new(4.0));

        assert!(chain.accepts(&make_product("A", true, Some(4.5))));
        assert!(!chain.accepts(&make_product("A", false, Some(4.5))));
        assert!(!chain.accepts(&make_product("A", true, Some(4.0))));
        assert!(!chain.accepts(&make_product("A", true, None)));
    }

    #[test]
    fn test_retain_keeps_page_order() {
        let mut chain = FilterChain::default();
        chain.push(RatingFilter::new(3.0));

        let mut products = vec![
            make_product("first", false, Some(4.0)),
            make_product("skipped", false, Some(2.0)),
            make_product("second", false, Some(3.5)),
        ];
        chain.retain(&mut products);

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_summary() {
        let query = ProductQuery {
            best_seller: Some("true".to_string()),
            rating: Some(4.0),
            name: Some("Kindle".to_string()),
        };
        let summary = FilterChain::from_query(&query).summary().unwrap();

        assert_eq!(summary, r#"Best sellers only, Rating: > 4.0 stars, Name: "Kindle""#);
    }

    #[test]
    fn test_from_query_skips_absent_parameters() {
        assert_eq!(FilterChain::from_query(&ProductQuery::default()).summary(), None);

        // Only the literal "true" turns the best-seller filter on
        let query = ProductQuery { best_seller: Some("yes".to_string()), ..Default::default() };
        assert_eq!(FilterChain::from_query(&query).summary(), None);
    }

    #[test]
    fn test_from_query_all_filters() {
        let query = ProductQuery {
            best_seller: Some("true".to_string()),
            rating: Some(4.0),
            name: Some("Echo Dot".to_string()),
        };
        let chain = FilterChain::from_query(&query);

        assert!(chain.accepts(&make_product("Echo Dot", true, Some(4.8))));
        assert!(!chain.accepts(&make_product("Echo Dot", false, Some(4.8))));
        assert!(!chain.accepts(&make_product("Echo Dot", true, Some(3.8))));
        assert!(!chain.accepts(&make_product("Echo Show", true, Some(4.8))));
    }
}
