use ethers::types::{Address, Bytes, H256, U256};
use ethers::utils::keccak256;
use ethers::utils::rlp::RlpStream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Features;

/// Maximum canonical encoded size of a transaction accepted into the pool.
pub const MAX_TX_SIZE: usize = 64 * 1024;

/// Returned when a transaction variant is not enabled at the current height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("transaction type not supported")]
pub struct TxTypeNotSupported;

/// Transaction type byte, prefixed to typed encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxType {
    Legacy = 0x00,
    DynamicFee = 0x51,
}

/// A single recipient/value/data triple
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// `None` deploys a contract
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
}

impl Clause {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(3);
        match &self.to {
            Some(to) => s.append(to),
            None => s.append_empty_data(),
        };
        s.append(&self.value);
        s.append(&self.data.as_ref());
    }
}

/// Fields shared by every transaction type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxBody {
    pub chain_tag: u8,
    pub block_ref: u64,
    pub expiration: u32,
    pub clauses: Vec<Clause>,
    pub gas: u64,
    pub depends_on: Option<H256>,
    pub nonce: u64,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub signature: Bytes,
}

impl TxBody {
    fn append_head(&self, s: &mut RlpStream) {
        s.append(&self.chain_tag);
        s.append(&self.block_ref);
        s.append(&self.expiration);
        s.begin_list(self.clauses.len());
        for clause in &self.clauses {
            clause.rlp_append(s);
        }
    }

    fn append_tail(&self, s: &mut RlpStream) {
        s.append(&self.gas);
        match &self.depends_on {
            Some(id) => s.append(id),
            None => s.append_empty_data(),
        };
        s.append(&self.nonce);
        // reserved: trailing zero features are dropped
        if self.features.is_empty() {
            s.begin_list(0);
        } else {
            s.begin_list(1);
            s.append(&self.features.bits());
        }
        s.append(&self.signature.as_ref());
    }
}

/// Transaction priced by a coefficient over the chain's base gas price
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTx {
    #[serde(flatten)]
    pub body: TxBody,
    pub gas_price_coef: u8,
}

/// Transaction priced against the per-block base fee
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFeeTx {
    #[serde(flatten)]
    pub body: TxBody,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
}

/// A transaction submitted to the pool
///
/// Each variant carries only its own fee fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Transaction {
    Legacy(LegacyTx),
    DynamicFee(DynamicFeeTx),
}

impl Transaction {
    pub fn tx_type(&self) -> TxType {
        match self {
            Transaction::Legacy(_) => TxType::Legacy,
            Transaction::DynamicFee(_) => TxType::DynamicFee,
        }
    }

    pub fn body(&self) -> &TxBody {
        match self {
            Transaction::Legacy(tx) => &tx.body,
            Transaction::DynamicFee(tx) => &tx.body,
        }
    }

    pub fn chain_tag(&self) -> u8 {
        self.body().chain_tag
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.body().clauses
    }

    pub fn features(&self) -> Features {
        self.body().features
    }

    /// `None` for dynamic-fee transactions
    pub fn gas_price_coef(&self) -> Option<u8> {
        match self {
            Transaction::Legacy(tx) => Some(tx.gas_price_coef),
            Transaction::DynamicFee(_) => None,
        }
    }

    /// `None` for legacy transactions
    pub fn max_fee_per_gas(&self) -> Option<U256> {
        match self {
            Transaction::Legacy(_) => None,
            Transaction::DynamicFee(tx) => Some(tx.max_fee_per_gas),
        }
    }

    /// `None` for legacy transactions
    pub fn max_priority_fee_per_gas(&self) -> Option<U256> {
        match self {
            Transaction::Legacy(_) => None,
            Transaction::DynamicFee(tx) => Some(tx.max_priority_fee_per_gas),
        }
    }

    /// Canonical encoding: plain RLP list for legacy, type byte plus RLP
    /// list for dynamic fee.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Transaction::Legacy(tx) => {
                let mut s = RlpStream::new_list(10);
                tx.body.append_head(&mut s);
                s.append(&tx.gas_price_coef);
                tx.body.append_tail(&mut s);
                s.out().to_vec()
            }
            Transaction::DynamicFee(tx) => {
                let mut s = RlpStream::new_list(11);
                tx.body.append_head(&mut s);
                s.append(&tx.max_priority_fee_per_gas);
                s.append(&tx.max_fee_per_gas);
                tx.body.append_tail(&mut s);

                let payload = s.out();
                let mut out = Vec::with_capacity(payload.len() + 1);
                out.push(TxType::DynamicFee as u8);
                out.extend_from_slice(&payload);
                out
            }
        }
    }

    pub fn encoded_size(&self) -> usize {
        self.encode().len()
    }

    /// Keccak-256 of the canonical encoding, used to key pool entries
    pub fn hash(&self) -> H256 {
        H256::from(keccak256(self.encode()))
    }
}
