//! Fork Rules Module
//!
//! This module holds the protocol-upgrade schedule and the fee-market rules
//! that depend on it:
//! - `ForkSchedule`: which named upgrade activates at which height
//! - `FeeFloorRule`: the base-fee floor a dynamic-fee transaction must clear
//!
//! Galactica is the fee-market fork. It introduces the per-block base fee and
//! the dynamic-fee transaction type.

mod fee;
mod schedule;

pub use fee::{BaseFeeFloor, FeeFloorError, FeeFloorRule, INITIAL_BASE_FEE};
pub use schedule::{FEE_MARKET_FORK, Fork, ForkSchedule};
