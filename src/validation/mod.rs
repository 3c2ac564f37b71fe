//! Transaction Validation Module
//!
//! This module decides whether a transaction may enter the pool.
//! Validation runs in two stages the caller composes:
//! - `validate`: structural and policy checks against the chain head, no state
//! - `validate_with_state`: fee-market floor against the governing header
//!
//! Both are pure functions of their inputs and stop at the first failing rule.

mod error;
mod validator;


pub use error::ValidationError;
pub use validator::{needs_state, validate, validate_with_state, validate_with_state_using};
