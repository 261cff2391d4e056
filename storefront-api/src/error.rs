use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storefront_order::OrderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The cart itself was at fault; the client can fix and resubmit
    #[error(transparent)]
    Order(#[from] OrderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Order(err) => {
                tracing::warn!("Rejected cart: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: OrderError) -> (StatusCode, Value) {
        let response = AppError::from(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_every_order_error_is_a_client_error() {
        let errors = [
            OrderError::EmptyOrInvalidCart,
            OrderError::ProductNotFound("p-1".to_string()),
            OrderError::InvalidDeliveryOption("9".to_string()),
            OrderError::InvalidQuantity { product_id: "p-1".to_string(), quantity: -3 },
            OrderError::AmountOverflow,
            OrderError::DeliveryDateOutOfRange,
        ];

        for err in errors {
            let message = err.to_string();
            let (status, body) = render(err).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": message }));
        }
    }
}
