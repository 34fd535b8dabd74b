//! Product extraction from a parsed listing page.

use crate::listing::error::ExtractError;
use crate::listing::models::Product;
use crate::listing::selectors;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Extracts product records from a listing document.
pub struct Parser<'a> {
    document: &'a Html,
}

impl<'a> Parser<'a> {
    /// Creates a parser over an already parsed document.
    pub fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// Parses every product link in the document, in document order.
    pub fn parse_products(&self) -> Result<Vec<Product>, ExtractError> {
        let mut products = Vec::new();

        for link in self.document.select(&selectors::PRODUCT_LINK) {
            let product = self.parse_product(link)?;
            trace!("Parsed product: {} - {:.2}", product.name, product.price);
            products.push(product);
        }

        debug!("Parsed {} products from listing", products.len());
        Ok(products)
    }

    /// Builds a product from its price link.
    fn parse_product(&self, link: ElementRef) -> Result<Product, ExtractError> {
        // The selector only matches anchors carrying an href
        let href = link.value().attr("href").unwrap_or_default();

        let product_id = product_id(href)?;
        let name = self.parse_name(href)?;
        let price = parse_price(link, href)?;
        let best_seller = self.is_best_seller(product_id);
        let product_rating = self.parse_rating(href)?;

        Ok(Product { name, price, best_seller, product_rating })
    }

    /// Reads the name from the alt text of the first image link sharing the href.
    fn parse_name(&self, href: &str) -> Result<String, ExtractError> {
        self.document
            .select(&selectors::ANY_LINK)
            .filter(|a| a.value().attr("href") == Some(href))
            .find_map(|a| a.select(&selectors::IMAGE).next())
            .and_then(|img| img.value().attr("alt"))
            .map(String::from)
            .ok_or_else(|| ExtractError::MissingName { href: href.to_string() })
    }

    /// Checks for a best-seller marker anywhere in the document.
    fn is_best_seller(&self, product_id: &str) -> bool {
        let marker = selectors::best_seller_marker(product_id);
        self.document.select(&selectors::MARKER).any(|e| e.value().id() == Some(marker.as_str()))
    }

    /// Reads the rating from the row linking to the product's reviews.
    fn parse_rating(&self, href: &str) -> Result<Option<f64>, ExtractError> {
        let reviews = selectors::reviews_href(href);

        let Some(row) = self.document.select(&selectors::RATING_ROW).find(|row| {
            row.select(&selectors::ANY_LINK).any(|a| a.value().attr("href") == Some(reviews.as_str()))
        }) else {
            trace!("No rating row for {}", href);
            return Ok(None);
        };

        let text = row.text().collect::<String>();
        parse_rating_value(&text)
            .map(Some)
            .ok_or_else(|| ExtractError::InvalidRating { href: href.to_string(), text })
    }
}

/// Returns the product id segment of a product href. The segment may be empty.
fn product_id(href: &str) -> Result<&str, ExtractError> {
    href.split('/')
        .nth(selectors::PRODUCT_ID_SEGMENT)
        .ok_or_else(|| ExtractError::MissingProductId { href: href.to_string() })
}

/// Rebuilds the price from the whole and fractional fragments inside the link.
fn parse_price(link: ElementRef, href: &str) -> Result<f64, ExtractError> {
    let whole = price_fragment(link, &selectors::PRICE_WHOLE, href, "whole")?;
    let fraction = price_fragment(link, &selectors::PRICE_FRACTION, href, "fraction")?;

    parse_price_value(&whole, &fraction).ok_or_else(|| ExtractError::InvalidPrice {
        href: href.to_string(),
        text: format!("{}|{}", whole.trim(), fraction.trim()),
    })
}

fn price_fragment(
    link: ElementRef,
    selector: &Selector,
    href: &str,
    part: &'static str,
) -> Result<String, ExtractError> {
    link.select(selector)
        .next()
        .map(|e| e.text().collect::<String>())
        .ok_or_else(|| ExtractError::MissingPrice { href: href.to_string(), part })
}

/// Joins "1.299," and "90" into 1299.90; separators in the whole part are dropped.
fn parse_price_value(whole: &str, fraction: &str) -> Option<f64> {
    let whole: String =
        whole.chars().filter(|c| *c != '.' && *c != ',' && !c.is_whitespace()).collect();
    let fraction = fraction.trim();

    if whole.is_empty() || fraction.is_empty() {
        return None;
    }

    format!("{whole}.{fraction}").parse().ok()
}

/// Extracts the rating from text like "4,5 de 5 estrelas".
fn parse_rating_value(text: &str) -> Option<f64> {
    text.split_whitespace().next()?.replace(',', ".").parse().ok()
}
