use chrono::{DateTime, FixedOffset, Local};
use uuid::Uuid;

/// Source of the current instant, in the offset used for delivery dates
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the server's local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Source of order identifiers
pub trait OrderIdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random v4 ids; never derived from order content
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOrderIds;

impl OrderIdGenerator for RandomOrderIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
