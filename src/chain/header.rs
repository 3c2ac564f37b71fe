use ethers::types::{H256, U256};
use ethers::utils::keccak256;
use ethers::utils::rlp::RlpStream;
use serde::{Deserialize, Serialize};

use crate::tx::Features;

/// Identifies the chain a transaction is bound to
pub trait ChainIdentity {
    fn chain_tag(&self) -> u8;
}

impl ChainIdentity for u8 {
    fn chain_tag(&self) -> u8 {
        *self
    }
}

/// The header fields admission rules depend on
pub trait HeaderView {
    fn number(&self) -> u32;
    fn tx_features(&self) -> Features;
    /// Present once the fee-market fork is active
    fn base_fee(&self) -> Option<U256>;
}

/// Block header as seen by the pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub parent_id: H256,
    pub timestamp: u64,
    pub gas_limit: u64,
    pub tx_features: Features,
    pub base_fee: Option<U256>,
    pub state_root: H256,
}

impl Header {
    /// Block number, carried in the first four bytes of the parent id.
    pub fn number(&self) -> u32 {
        let parent = self.parent_id.as_bytes();
        u32::from_be_bytes([parent[0], parent[1], parent[2], parent[3]]).wrapping_add(1)
    }

    pub fn id(&self) -> H256 {
        let mut s = RlpStream::new_list(6);
        s.append(&self.parent_id);
        s.append(&self.timestamp);
        s.append(&self.gas_limit);
        s.append(&self.tx_features.bits());
        match &self.base_fee {
            Some(fee) => s.append(fee),
            None => s.append_empty_data(),
        };
        s.append(&self.state_root);

        let mut id = keccak256(s.out());
        // embed the number so children can derive theirs
        id[..4].copy_from_slice(&self.number().to_be_bytes());
        H256::from(id)
    }
}

impl HeaderView for Header {
    fn number(&self) -> u32 {
        Header::number(self)
    }

    fn tx_features(&self) -> Features {
        self.tx_features
    }

    fn base_fee(&self) -> Option<U256> {
        self.base_fee
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeaderBuilder {
    header: Header,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent_id(mut self, id: H256) -> Self {
        self.header.parent_id = id;
        self
    }

    /// Sets the parent id so that the built header has the given number.
    pub fn number(mut self, number: u32) -> Self {
        let mut parent = [0u8; 32];
        parent[..4].copy_from_slice(&number.wrapping_sub(1).to_be_bytes());
        self.header.parent_id = H256::from(parent);
        self
    }

    pub fn timestamp(mut self, timestamp: u64) -> Self {
        self.header.timestamp = timestamp;
        self
    }

    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.header.gas_limit = gas_limit;
        self
    }

    pub fn tx_features(mut self, features: Features) -> Self {
        self.header.tx_features = features;
        self
    }

    pub fn base_fee(mut self, base_fee: U256) -> Self {
        self.header.base_fee = Some(base_fee);
        self
    }

    pub fn state_root(mut self, root: H256) -> Self {
        self.header.state_root = root;
        self
    }

    pub fn build(self) -> Header {
        self.header
    }
}

/// Header of the chain head plus what the pool needs to know about its body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub header: Header,
    pub tx_ids: Vec<H256>,
    pub size: u64,
}

impl BlockSummary {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            tx_ids: Vec::new(),
            size: 0,
        }
    }
}

impl HeaderView for BlockSummary {
    fn number(&self) -> u32 {
        self.header.number()
    }

    fn tx_features(&self) -> Features {
        self.header.tx_features
    }

    fn base_fee(&self) -> Option<U256> {
        self.header.base_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_from_parent_id() {
        let mut parent = [0u8; 32];
        parent[..4].copy_from_slice(&1u32.to_be_bytes());
        let header = HeaderBuilder::new().parent_id(H256::from(parent)).build();
        assert_eq!(header.number(), 2);

        assert_eq!(Header::default().number(), 1);
        assert_eq!(HeaderBuilder::new().number(100).build().number(), 100);
        assert_eq!(HeaderBuilder::new().number(0).build().number(), 0);
    }

    #[test]
    fn test_child_links_to_parent() {
        let parent = HeaderBuilder::new().number(7).timestamp(10).build();
        let child = HeaderBuilder::new().parent_id(parent.id()).build();
        assert_eq!(child.number(), 8);
    }

    #[test]
    fn test_summary_delegates_to_header() {
        let header = HeaderBuilder::new()
            .number(5)
            .tx_features(Features::DELEGATION)
            .base_fee(U256::from(42))
            .build();
        let summary = BlockSummary::new(header);
        assert_eq!(HeaderView::number(&summary), 5);
        assert_eq!(summary.tx_features(), Features::DELEGATION);
        assert_eq!(summary.base_fee(), Some(U256::from(42)));
    }

    #[test]
    fn test_id_changes_with_base_fee() {
        let a = HeaderBuilder::new().number(3).build();
        let b = HeaderBuilder::new().number(3).base_fee(U256::one()).build();
        assert_ne!(a.id(), b.id());
    }
}
