use tracing::debug;

use super::ValidationError;
use crate::chain::{ChainIdentity, HeaderView};
use crate::fork::{BaseFeeFloor, FEE_MARKET_FORK, FeeFloorRule, ForkSchedule};
use crate::tx::{MAX_TX_SIZE, Transaction, TxTypeNotSupported};

/// Validate a transaction against the chain head without touching state
///
/// Rules, first failure wins:
/// 1. chain tag matches the chain
/// 2. encoded size within `MAX_TX_SIZE`
/// 3. transaction type enabled at the head's height
/// 4. declared features permitted by the head
pub fn validate<C, H>(
    tx: &Transaction,
    chain: &C,
    head: &H,
    forks: &ForkSchedule,
) -> Result<(), ValidationError>
where
    C: ChainIdentity + ?Sized,
    H: HeaderView + ?Sized,
{
    check_chain_tag(tx, chain)?;
    check_size(tx)?;
    check_type(tx, head, forks)?;
    check_features(tx, head)?;
    Ok(())
}

/// Validate the fee-market floor of a transaction against `header`,
/// using the header's base fee as the floor.
///
/// `state` is the ledger state at `header`, handed to the floor rule.
pub fn validate_with_state<H, S>(
    tx: &Transaction,
    header: &H,
    forks: &ForkSchedule,
    state: &S,
) -> Result<(), ValidationError>
where
    H: HeaderView + ?Sized,
    S: ?Sized,
{
    validate_with_state_using(&BaseFeeFloor, tx, header, forks, state)
}

/// Same as [`validate_with_state`] with a caller-supplied floor rule.
pub fn validate_with_state_using<R, H, S>(
    rule: &R,
    tx: &Transaction,
    header: &H,
    forks: &ForkSchedule,
    state: &S,
) -> Result<(), ValidationError>
where
    R: FeeFloorRule<S> + ?Sized,
    H: HeaderView + ?Sized,
    S: ?Sized,
{
    if !needs_state(tx, header, forks) {
        return Ok(());
    }
    let Transaction::DynamicFee(dyn_tx) = tx else {
        return Ok(());
    };

    rule.check_fee_floor(header, dyn_tx.max_fee_per_gas, state)
        .map_err(|e| {
            debug!("Fee floor check failed at block {}: {}", header.number(), e);
            ValidationError::rejected(e.to_string())
        })
}

/// Whether the state-dependent stage has any rule to apply to `tx`.
///
/// Only dynamic-fee transactions under an active fee market have a floor;
/// legacy pricing has no admission floor.
pub fn needs_state<H: HeaderView + ?Sized>(
    tx: &Transaction,
    header: &H,
    forks: &ForkSchedule,
) -> bool {
    matches!(tx, Transaction::DynamicFee(_)) && forks.is_active(FEE_MARKET_FORK, header.number())
}

fn check_chain_tag<C: ChainIdentity + ?Sized>(
    tx: &Transaction,
    chain: &C,
) -> Result<(), ValidationError> {
    if tx.chain_tag() != chain.chain_tag() {
        debug!(
            "Chain tag mismatch: expected {:#04x}, got {:#04x}",
            chain.chain_tag(),
            tx.chain_tag()
        );
        return Err(ValidationError::malformed("chain tag mismatch"));
    }
    Ok(())
}

fn check_size(tx: &Transaction) -> Result<(), ValidationError> {
    let size = tx.encoded_size();
    if size > MAX_TX_SIZE {
        debug!("Transaction size {} exceeds {}", size, MAX_TX_SIZE);
        return Err(ValidationError::rejected("size too large"));
    }
    Ok(())
}

fn check_type<H: HeaderView + ?Sized>(
    tx: &Transaction,
    head: &H,
    forks: &ForkSchedule,
) -> Result<(), ValidationError> {
    match tx {
        Transaction::Legacy(_) => Ok(()),
        Transaction::DynamicFee(_) => {
            if forks.is_active(FEE_MARKET_FORK, head.number()) {
                Ok(())
            } else {
                debug!(
                    "Dynamic fee transaction before {:?} at block {}",
                    FEE_MARKET_FORK,
                    head.number()
                );
                Err(TxTypeNotSupported.into())
            }
        }
    }
}

fn check_features<H: HeaderView + ?Sized>(
    tx: &Transaction,
    head: &H,
) -> Result<(), ValidationError> {
    let allowed = head.tx_features();
    if !allowed.contains(tx.features()) {
        debug!(
            "Unsupported features {:#x}, allowed {:#x}",
            tx.features().bits(),
            allowed.bits()
        );
        return Err(ValidationError::rejected("unsupported features"));
    }
    Ok(())
}
