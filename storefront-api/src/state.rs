use std::sync::Arc;
use storefront_order::{Clock, OrderCalculator};

#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<OrderCalculator>,
    pub clock: Arc<dyn Clock>,
}
