//! Injected dependencies.
//!
//! Anything non-deterministic that the domain needs (the current time, fresh
//! order numbers) is reached through a trait so tests can pin it down.

use crate::cart::OrderNumber;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, TimeZone, Utc};
/// use meadowlark_core::Clock;
///
/// struct FixedClock(DateTime<Utc>);
///
/// impl Clock for FixedClock {
///     fn now(&self) -> DateTime<Utc> {
///         self.0
///     }
/// }
///
/// let clock = FixedClock(Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap());
/// assert_eq!(clock.now().format("%Y").to_string(), "2026");
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of order numbers.
pub trait OrderNumberGenerator: Send + Sync {
    /// Produce a fresh order number.
    fn next_order_number(&self) -> OrderNumber;
}

/// Order numbers drawn from 122 random bits, written in decimal.
///
/// Uniqueness is probabilistic: there is no registry of issued numbers to
/// check against, but a collision needs on the order of 2^61 orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOrderNumbers;

impl OrderNumberGenerator for RandomOrderNumbers {
    fn next_order_number(&self) -> OrderNumber {
        OrderNumber::new(Uuid::new_v4().as_u128().to_string())
    }
}
