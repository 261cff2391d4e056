pub mod models;
pub mod schedule;
pub mod promotion;
pub mod providers;
pub mod calculator;

pub use models::{CartItem, Order, OrderLine};
pub use promotion::Promotion;
pub use providers::{Clock, FixedClock, OrderIdGenerator, RandomOrderIds, SystemClock};
pub use calculator::{OrderCalculator, OrderError};
