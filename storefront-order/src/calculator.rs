use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use storefront_catalog::{Catalog, DeliveryOptionTable};

use crate::models::{CartItem, Order, OrderLine};
use crate::promotion::Promotion;
use crate::providers::{OrderIdGenerator, RandomOrderIds};
use crate::schedule;

/// Turns a cart into a priced, dated receipt.
///
/// Stateless between calls: the catalog and delivery table are shared
/// read-only, and every running total lives on the stack of `compute`.
pub struct OrderCalculator {
    catalog: Arc<Catalog>,
    delivery_options: Arc<DeliveryOptionTable>,
    promotion: Promotion,
    ids: Arc<dyn OrderIdGenerator>,
}

impl OrderCalculator {
    pub fn new(catalog: Arc<Catalog>, delivery_options: Arc<DeliveryOptionTable>) -> Self {
        Self {
            catalog,
            delivery_options,
            promotion: Promotion::default(),
            ids: Arc::new(RandomOrderIds),
        }
    }

    pub fn with_promotion(mut self, promotion: Promotion) -> Self {
        self.promotion = promotion;
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn OrderIdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Price `cart` as of `now`.
    ///
    /// Lines are validated in cart order and the first bad line aborts the
    /// whole computation.
    pub fn compute(&self, cart: &[CartItem], now: DateTime<FixedOffset>) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyOrInvalidCart);
        }

        let mut total_cost: u64 = 0;
        let products = cart
            .iter()
            .map(|item| {
                let (line, line_total) = self.price_line(item, &now)?;
                total_cost = total_cost
                    .checked_add(line_total)
                    .ok_or(OrderError::AmountOverflow)?;
                Ok(line)
            })
            .collect::<Result<Vec<_>, OrderError>>()?;

        let final_total = self.promotion.apply(total_cost);
        let order = Order {
            id: self.ids.next_id(),
            order_time: now.with_timezone(&Utc),
            total_cost: final_total,
            products,
        };

        tracing::debug!(
            order_id = %order.id,
            lines = order.products.len(),
            subtotal = total_cost,
            total = final_total,
            "Order computed"
        );

        Ok(order)
    }

    /// Resolve one cart line; returns the line and its cost including shipping
    fn price_line(&self, item: &CartItem, now: &DateTime<FixedOffset>) -> Result<(OrderLine, u64), OrderError> {
        let product = self
            .catalog
            .get(&item.product_id)
            .ok_or_else(|| OrderError::ProductNotFound(item.product_id.clone()))?;

        let delivery_option = self
            .delivery_options
            .get(&item.delivery_option_id)
            .ok_or_else(|| OrderError::InvalidDeliveryOption(item.delivery_option_id.clone()))?;

        let quantity = u32::try_from(item.quantity)
            .ok()
            .filter(|&quantity| quantity > 0)
            .ok_or_else(|| OrderError::InvalidQuantity {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
            })?;

        let line_total = product
            .price_cents
            .checked_mul(u64::from(quantity))
            .and_then(|goods| goods.checked_add(delivery_option.price_cents))
            .ok_or(OrderError::AmountOverflow)?;

        let estimated_delivery_time = schedule::project_delivery(now, delivery_option.delivery_days)
            .ok_or(OrderError::DeliveryDateOutOfRange)?;

        Ok((
            OrderLine::new(product.id.clone(), quantity, estimated_delivery_time),
            line_total,
        ))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Cart is empty or invalid.")]
    EmptyOrInvalidCart,

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid delivery option: {0}")]
    InvalidDeliveryOption(String),

    #[error("Invalid quantity {quantity} for product: {product_id}")]
    InvalidQuantity {
        product_id: String,
        quantity: i64,
    },

    #[error("Order total exceeds the supported amount")]
    AmountOverflow,

    #[error("Estimated delivery date is out of range")]
    DeliveryDateOutOfRange,
}
