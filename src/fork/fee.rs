use ethers::types::U256;
use thiserror::Error;

use crate::chain::HeaderView;

/// Base fee of the first block after the fee-market fork, 10^13 wei.
pub const INITIAL_BASE_FEE: U256 = U256([10_000_000_000_000, 0, 0, 0]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeFloorError {
    #[error("gas price is less than block base fee: expected {expected} got {actual}")]
    BelowBaseFee { expected: U256, actual: U256 },
    #[error("block base fee is missing")]
    MissingBaseFee,
}

/// Fee floor a dynamic-fee transaction must clear to be admitted
///
/// `S` is the ledger state at the governing header. It is opaque here; a
/// rule that derives its floor from on-chain parameters reads them from it.
pub trait FeeFloorRule<S: ?Sized> {
    fn check_fee_floor<H: HeaderView + ?Sized>(
        &self,
        header: &H,
        max_fee_per_gas: U256,
        state: &S,
    ) -> Result<(), FeeFloorError>;
}

/// The header's base fee is the floor, inclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseFeeFloor;

impl<S: ?Sized> FeeFloorRule<S> for BaseFeeFloor {
    fn check_fee_floor<H: HeaderView + ?Sized>(
        &self,
        header: &H,
        max_fee_per_gas: U256,
        _state: &S,
    ) -> Result<(), FeeFloorError> {
        let base_fee = header.base_fee().ok_or(FeeFloorError::MissingBaseFee)?;
        if max_fee_per_gas < base_fee {
            return Err(FeeFloorError::BelowBaseFee {
                expected: base_fee,
                actual: max_fee_per_gas,
            });
        }
        Ok(())
    }
}
