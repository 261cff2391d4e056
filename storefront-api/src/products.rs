use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use storefront_catalog::Product;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/first", get(first_product))
}

/// GET /products
/// The whole catalog, in file order
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.calculator.catalog().products().to_vec())
}

/// GET /products/first
/// An empty catalog still answers 200, with an error body
pub async fn first_product(State(state): State<AppState>) -> Response {
    match state.calculator.catalog().first() {
        Some(product) => Json(product.clone()).into_response(),
        None => Json(json!({ "error": "No products available" })).into_response(),
    }
}
