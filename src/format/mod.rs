//! Output formatting for products (JSON, table, CSV).

use crate::config::OutputFormat;
use crate::listing::Product;

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats multiple products.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                OutputFormat::Table => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    // JSON formatting

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_products(&self, products: &[Product]) -> String {
        let price_width = 12;
        let rating_width = 8;
        let best_width = 11;
        let name_width = 60;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:>price_width$}  {:>rating_width$}  {:<best_width$}  {}",
            "Price", "Rating", "Best seller", "Name"
        ));
        lines.push(format!(
            "{:-<price_width$}  {:-<rating_width$}  {:-<best_width$}  {:-<name_width$}",
            "", "", "", ""
        ));

        for product in products {
            let rating_str = match product.product_rating {
                Some(r) => format!("{:.1}", r),
                None => "N/A".to_string(),
            };

            let best_str = if product.best_seller { "Yes" } else { "No" };

            lines.push(format!(
                "{:>price_width$.2}  {:>rating_width$}  {:<best_width$}  {}",
                product.price,
                rating_str,
                best_str,
                Self::truncate(&product.name, name_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    /// Shortens a name to `width` characters, marking the cut with "...".
    fn truncate(name: &str, width: usize) -> String {
        if name.chars().count() > width {
            let head: String = name.chars().take(width - 3).collect();
            format!("{}...", head)
        } else {
            name.to_string()
        }
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "name,price,best_seller,product_rating".to_string()
    }

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            let rating = product.product_rating.map(|r| r.to_string()).unwrap_or_default();

            lines.push(format!(
                "{},{},{},{}",
                Self::csv_escape(&product.name),
                product.price,
                product.best_seller,
                rating
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
