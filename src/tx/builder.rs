use ethers::types::{Bytes, H256, U256};

use super::{Clause, DynamicFeeTx, Features, LegacyTx, Transaction, TxBody, TxType};

/// Chainable transaction builder
///
/// Fee fields that do not belong to the chosen type are ignored by `build`,
/// so the resulting `Transaction` never carries both sets.
#[derive(Debug, Clone)]
pub struct TxBuilder {
    tx_type: TxType,
    body: TxBody,
    gas_price_coef: u8,
    max_fee_per_gas: U256,
    max_priority_fee_per_gas: U256,
}

impl TxBuilder {
    pub fn new(tx_type: TxType) -> Self {
        Self {
            tx_type,
            body: TxBody::default(),
            gas_price_coef: 0,
            max_fee_per_gas: U256::zero(),
            max_priority_fee_per_gas: U256::zero(),
        }
    }

    pub fn chain_tag(mut self, tag: u8) -> Self {
        self.body.chain_tag = tag;
        self
    }

    pub fn block_ref(mut self, block_ref: u64) -> Self {
        self.body.block_ref = block_ref;
        self
    }

    pub fn expiration(mut self, expiration: u32) -> Self {
        self.body.expiration = expiration;
        self
    }

    pub fn clause(mut self, clause: Clause) -> Self {
        self.body.clauses.push(clause);
        self
    }

    pub fn gas(mut self, gas: u64) -> Self {
        self.body.gas = gas;
        self
    }

    pub fn depends_on(mut self, id: H256) -> Self {
        self.body.depends_on = Some(id);
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.body.nonce = nonce;
        self
    }

    pub fn features(mut self, features: Features) -> Self {
        self.body.features = features;
        self
    }

    pub fn signature(mut self, signature: Bytes) -> Self {
        self.body.signature = signature;
        self
    }

    /// Legacy only
    pub fn gas_price_coef(mut self, coef: u8) -> Self {
        self.gas_price_coef = coef;
        self
    }

    /// Dynamic fee only
    pub fn max_fee_per_gas(mut self, fee: U256) -> Self {
        self.max_fee_per_gas = fee;
        self
    }

    /// Dynamic fee only
    pub fn max_priority_fee_per_gas(mut self, fee: U256) -> Self {
        self.max_priority_fee_per_gas = fee;
        self
    }

    pub fn build(self) -> Transaction {
        match self.tx_type {
            TxType::Legacy => Transaction::Legacy(LegacyTx {
                body: self.body,
                gas_price_coef: self.gas_price_coef,
            }),
            TxType::DynamicFee => Transaction::DynamicFee(DynamicFeeTx {
                body: self.body,
                max_fee_per_gas: self.max_fee_per_gas,
                max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_drops_fields_of_other_type() {
        let tx = TxBuilder::new(TxType::Legacy)
            .gas_price_coef(7)
            .max_fee_per_gas(U256::from(1000))
            .build();
        assert_eq!(tx.tx_type(), TxType::Legacy);
        assert_eq!(tx.max_fee_per_gas(), None);

        let tx = TxBuilder::new(TxType::DynamicFee)
            .gas_price_coef(7)
            .max_fee_per_gas(U256::from(1000))
            .build();
        assert_eq!(tx.tx_type(), TxType::DynamicFee);
        assert_eq!(tx.gas_price_coef(), None);
    }

    #[test]
    fn test_body_fields_are_set() {
        let dep = H256::repeat_byte(0xab);
        let tx = TxBuilder::new(TxType::Legacy)
            .chain_tag(0x27)
            .block_ref(42)
            .expiration(720)
            .gas(21000)
            .depends_on(dep)
            .nonce(9)
            .clause(Clause::default())
            .build();

        let body = tx.body();
        assert_eq!(body.chain_tag, 0x27);
        assert_eq!(body.block_ref, 42);
        assert_eq!(body.expiration, 720);
        assert_eq!(body.gas, 21000);
        assert_eq!(body.depends_on, Some(dep));
        assert_eq!(body.nonce, 9);
        assert_eq!(tx.clauses().len(), 1);
    }
}
