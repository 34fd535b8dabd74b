//! End-to-end tests for GET /list_products against the fixture page.

use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{test, App};
use listing_api::server::configure;
use listing_api::ListingPage;
use serde_json::Value;

const LISTING_FIXTURE: &str = include_str!("fixtures/listing.html");

async fn get(uri: &str) -> (StatusCode, Value) {
    get_page(LISTING_FIXTURE, uri).await
}

async fn get_page(html: &str, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new().app_data(Data::new(ListingPage::parse(html))).configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    (status, serde_json::from_slice(&body).unwrap())
}

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_no_filters_returns_every_product() {
    let (status, body) = get("/list_products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);

    let first = &body[0];
    assert_eq!(first["price"], 379.05);
    assert_eq!(first["best_seller"], true);
    assert_eq!(first["product_rating"], 4.8);
    assert!(body[4]["product_rating"].is_null());
}

#[actix_web::test]
async fn test_best_seller_filter() {
    let (status, body) = get("/list_products?best_seller=true").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p["best_seller"] == true));
}

#[actix_web::test]
async fn test_best_seller_other_values_ignored() {
    let (_, body) = get("/list_products?best_seller=false").await;
    assert_eq!(body.as_array().unwrap().len(), 6);

    let (_, body) = get("/list_products?best_seller=1").await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[actix_web::test]
async fn test_rating_filter() {
    let (status, body) = get("/list_products?rating=4.5").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p["product_rating"].as_f64().unwrap() > 4.5));
}

#[actix_web::test]
async fn test_empty_rating_means_no_filter() {
    let (status, body) = get("/list_products?rating=&name=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[actix_web::test]
async fn test_name_filter() {
    let (status, body) = get("/list_products?name=Cabo%20Lightning%20USB%201m%20Branco").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Cabo Lightning USB 1m Branco"]);
    assert_eq!(body[0]["price"], 29.9);
}

#[actix_web::test]
async fn test_name_filter_no_match() {
    let (status, body) = get("/list_products?name=Echo").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_combined_filters() {
    let (_, body) = get("/list_products?best_seller=true&rating=4.0").await;

    let names = names(&body);
    assert_eq!(names.len(), 2);
    assert!(names[0].starts_with("Echo Dot"));
    assert!(names[1].starts_with("Kindle"));
}

#[actix_web::test]
async fn test_invalid_rating_is_bad_request() {
    let (status, body) = get("/list_products?rating=great").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("great"));
}

#[actix_web::test]
async fn test_broken_markup_is_server_error() {
    let html = r#"
        <a href="/Kindle/dp/K1"><img alt="Kindle"></a>
        <a class="a-size-base a-link-normal a-text-normal" href="/Kindle/dp/K1">
            <span class="a-price-whole">499,</span>
        </a>"#;

    let (status, body) = get_page(html, "/list_products").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("fraction"));
}
