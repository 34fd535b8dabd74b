//! CSS selectors and markup conventions for the saved listing page.
//!
//! Update this file when the snapshot markup changes, and add a fixture
//! covering the new layout.

use scraper::Selector;
use std::sync::LazyLock;

/// Anchor wrapping a product's price; one per listed product.
///
/// The class attribute must be exactly this string. Anchors with extra
/// classes or a different class order are other page links.
pub static PRODUCT_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[class="a-size-base a-link-normal a-text-normal"][href]"#).unwrap()
});

/// Any anchor with an href, used to find the image link for a product.
pub static ANY_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Product image inside the image link.
pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Whole units of the price (e.g. "1.299,").
pub static PRICE_WHOLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-price-whole").unwrap());

/// Fractional units of the price (e.g. "90").
pub static PRICE_FRACTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-price-fraction").unwrap());

/// Spans carrying an id; best-seller markers are among them.
pub static MARKER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span[id]").unwrap());

/// Small-text row holding the star rating and the reviews link (exact class attribute).
pub static RATING_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"div[class="a-row a-size-small"]"#).unwrap());

/// Index of the product id among the `/`-separated href segments.
pub const PRODUCT_ID_SEGMENT: usize = 3;

/// Suffix appended to a product id to form its best-seller marker id.
pub const BEST_SELLER_SUFFIX: &str = "-best-seller";

/// Fragment appended to a product href to form its reviews link.
pub const REVIEWS_FRAGMENT: &str = "#customerReviews";

/// Returns the best-seller marker id for a product.
pub fn best_seller_marker(product_id: &str) -> String {
    format!("{product_id}{BEST_SELLER_SUFFIX}")
}

/// Returns the reviews link href for a product.
pub fn reviews_href(product_href: &str) -> String {
    format!("{product_href}{REVIEWS_FRAGMENT}")
}
