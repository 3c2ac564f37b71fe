use ethers::types::H256;
use std::collections::HashMap;
use std::sync::Arc;

use super::{StateError, StateProvider};
use crate::chain::Header;

/// Immutable snapshot under one state root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryState {
    root: H256,
}

impl MemoryState {
    pub fn new(root: H256) -> Self {
        Self { root }
    }

    pub fn root(&self) -> H256 {
        self.root
    }
}

/// Snapshots by state root
///
/// Built up front and shared read-only; opening a state hands out the
/// snapshot behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStater {
    states: HashMap<H256, Arc<MemoryState>>,
}

impl MemoryStater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a snapshot, replacing any previous one with the same root.
    pub fn insert(&mut self, state: MemoryState) -> H256 {
        let root = state.root();
        self.states.insert(root, Arc::new(state));
        root
    }
}

impl StateProvider for MemoryStater {
    type State = Arc<MemoryState>;

    fn state_at(&self, header: &Header) -> Result<Self::State, StateError> {
        self.states
            .get(&header.state_root)
            .cloned()
            .ok_or(StateError::MissingRoot(header.state_root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::HeaderBuilder;

    #[test]
    fn test_state_at_known_root() {
        let root = H256::repeat_byte(1);
        let mut stater = MemoryStater::new();
        assert_eq!(stater.insert(MemoryState::new(root)), root);

        let header = HeaderBuilder::new().state_root(root).build();
        let state = stater.state_at(&header).unwrap();
        assert_eq!(state.root(), root);
    }

    #[test]
    fn test_state_at_unknown_root() {
        let stater = MemoryStater::new();
        let header = HeaderBuilder::new().state_root(H256::repeat_byte(9)).build();
        assert_eq!(
            stater.state_at(&header).unwrap_err(),
            StateError::MissingRoot(H256::repeat_byte(9))
        );
    }
}
