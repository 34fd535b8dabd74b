//! Data models for listed products and the query used to filter them.

use serde::{Deserialize, Deserializer, Serialize};

/// A product extracted from the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name, taken from the image alt text
    pub name: String,
    /// Price in the page's currency
    pub price: f64,
    /// Whether the page carries a best-seller marker for this product
    pub best_seller: bool,
    /// Star rating, if the page shows one
    pub product_rating: Option<f64>,
}

impl Product {
    /// Creates a new product record.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        best_seller: bool,
        product_rating: Option<f64>,
    ) -> Self {
        Self { name: name.into(), price, best_seller, product_rating }
    }
}

/// Filter parameters accepted by the listing endpoint and the `list` command.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductQuery {
    /// Only the literal value `"true"` enables the best-seller filter
    #[serde(default)]
    pub best_seller: Option<String>,

    /// Keep products rated strictly above this value
    #[serde(default, deserialize_with = "empty_string_as_none_parse")]
    pub rating: Option<f64>,

    /// Keep only the product with exactly this name
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub name: Option<String>,
}

impl ProductQuery {
    /// Returns true if only best sellers should be listed.
    pub fn best_seller_only(&self) -> bool {
        self.best_seller.as_deref() == Some("true")
    }

    /// Returns true if no filter is active.
    pub fn is_unfiltered(&self) -> bool {
        !self.best_seller_only() && self.rating.is_none() && self.name.is_none()
    }
}

fn empty_string_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

fn empty_string_as_none_parse<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|err| serde::de::Error::custom(format!("invalid value {s:?}: {err}"))),
    }
}
