//! Ledger State Module
//!
//! The pool opens ledger state at its head before the state-dependent
//! validation stage. `StateProvider` is that seam; `MemoryStater` is an
//! in-memory implementation keyed by state root.

mod memory;

pub use memory::{MemoryState, MemoryStater};

use crate::chain::Header;
use ethers::types::H256;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("state root {0:?} not found")]
    MissingRoot(H256),
}

/// Opens ledger state as of a block header
pub trait StateProvider {
    type State;

    fn state_at(&self, header: &Header) -> Result<Self::State, StateError>;
}
