use serde::{Deserialize, Serialize};

/// Flat-amount promotion: once the cart total reaches `threshold_cents`,
/// a fixed `discount_cents` comes off. Not a percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Promotion {
    pub threshold_cents: u64,
    pub discount_cents: u64,
}

impl Promotion {
    pub const fn new(threshold_cents: u64, discount_cents: u64) -> Self {
        Self { threshold_cents, discount_cents }
    }

    /// Discount earned by a cart totalling `total_cents`
    pub fn discount_for(&self, total_cents: u64) -> u64 {
        if total_cents >= self.threshold_cents {
            self.discount_cents.min(total_cents)
        } else {
            0
        }
    }

    /// Total after the promotion; never below zero
    pub fn apply(&self, total_cents: u64) -> u64 {
        total_cents - self.discount_for(total_cents)
    }
}

impl Default for Promotion {
    fn default() -> Self {
        Self::new(999, 40)
    }
}
