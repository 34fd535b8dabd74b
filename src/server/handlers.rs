//! Request handlers.

use crate::listing::{ListingPage, ProductQuery};
use crate::server::error::ApiError;
use actix_web::get;
use actix_web::web::{Data, Query, QueryConfig};
use actix_web::HttpResponse;
use tracing::debug;

/// Query extractor settings: malformed parameters become JSON 400 responses.
pub fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| ApiError::BadQuery(err.to_string()).into())
}

/// Lists the products on the listing page, optionally filtered.
#[get("/list_products")]
pub async fn list_products(
    query: Query<ProductQuery>,
    page: Data<ListingPage>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    debug!("Listing products for {:?}", query);

    let products = page.list_products(&query)?;
    debug!("Returning {} products", products.len());

    Ok(HttpResponse::Ok().json(products))
}
