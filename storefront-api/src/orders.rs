use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use storefront_order::{CartItem, Order, OrderError};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(place_order))
        .route("/cart", get(load_cart))
}

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub cart: Vec<CartItem>,
}

/// POST /orders
/// Price the submitted cart and return the receipt
pub async fn place_order(
    State(state): State<AppState>,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<Json<Order>, AppError> {
    // A missing, non-array or malformed cart is reported the same way as an empty one
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Unreadable order body: {}", rejection.body_text());
        OrderError::EmptyOrInvalidCart
    })?;

    let order = state.calculator.compute(&request.cart, state.clock.now())?;
    tracing::info!(order_id = %order.id, total_cost = order.total_cost, "Order placed");

    Ok(Json(order))
}

/// GET /cart
pub async fn load_cart() -> &'static str {
    "Load cart"
}
