//! Transaction Model Module
//!
//! This module defines the transactions the pool admits:
//! - `Transaction`: legacy-priced or dynamic-fee-priced, one variant each
//! - `Features`: optional protocol capabilities a transaction declares
//! - `TxBuilder`: chainable construction of either kind
//!
//! The canonical RLP encoding lives here as well, since the encoded size is
//! what the admission size limit is measured against.

mod builder;
mod features;
mod transaction;

pub use builder::TxBuilder;
pub use features::Features;
pub use transaction::{
    Clause, DynamicFeeTx, LegacyTx, MAX_TX_SIZE, Transaction, TxBody, TxType, TxTypeNotSupported,
};
