//! This crate implements transaction admission for a node's pending-transaction pool.
//! It decides whether an incoming transaction is well formed and currently admissible
//! before it may enter the pool, under the fork schedule and fee market of the chain.

pub mod types; // Admission verdicts returned to submitters.
pub mod tx; // Transaction model, features and canonical encoding.
pub mod fork; // Fork schedule and fee-market floor rules.
pub mod chain; // Chain identity and block header views.
pub mod state; // Ledger state opened at a header.
pub mod validation; // Stateless and state-dependent admission checks.
pub mod pool; // Pool intake composing both validation stages.
pub mod api; // JSON-RPC submission endpoint.
pub mod config; // Defines and loads node configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use validation::{ValidationError, validate, validate_with_state};
