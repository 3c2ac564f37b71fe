//! Chain Context Module
//!
//! Read-only views of the chain that admission consults:
//! - `ChainIdentity`: the network tag every transaction must carry
//! - `HeaderView`: height, permitted transaction features and base fee of
//!   the block whose rules govern validation
//!
//! `Header` and `BlockSummary` are the concrete views the pool tracks as its
//! head. The consensus engine produces them; nothing here mutates them.

mod header;

pub use header::{BlockSummary, ChainIdentity, Header, HeaderBuilder, HeaderView};
