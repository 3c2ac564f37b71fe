//! Transaction Pool Module
//!
//! This module is the pool intake: it runs both validation stages against
//! the current head and keeps the transactions that pass in arrival order.

mod tx_pool;

pub use tx_pool::{AddError, PendingTx, TxPool};
