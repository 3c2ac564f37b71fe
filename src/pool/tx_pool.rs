//! Transaction Pool Module
//!
//! This module implements the admission path for pending transactions.
//! Admitted transactions are stored in a FIFO queue.

use crate::{
    chain::BlockSummary,
    fork::ForkSchedule,
    state::{StateError, StateProvider},
    tx::Transaction,
    validation::{self, ValidationError},
};
use ethers::types::H256;
use std::collections::VecDeque;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum AddError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to open state at head: {0}")]
    State(#[from] StateError),
}

/// A transaction that passed admission
#[derive(Debug, Clone)]
pub struct PendingTx {
    pub id: H256,
    pub tx: Transaction,
    /// Canonical encoded size in bytes
    pub size: usize,
    /// Unix timestamp (seconds) of admission
    pub admitted_at: i64,
}

/// Pool for pending transactions
///
/// Admission reads the head under a read lock, so many intake paths can
/// validate concurrently; only the queue insertion takes the write lock.
pub struct TxPool<P> {
    chain_tag: u8,
    forks: ForkSchedule,
    stater: P,
    /// Block whose rules govern admission
    head: RwLock<BlockSummary>,
    /// Queue of admitted transactions, protected by a read-write lock
    transactions: RwLock<VecDeque<PendingTx>>,
}

impl<P: StateProvider> TxPool<P> {
    pub fn new(chain_tag: u8, forks: ForkSchedule, stater: P, head: BlockSummary) -> Self {
        Self {
            chain_tag,
            forks,
            stater,
            head: RwLock::new(head),
            transactions: RwLock::new(VecDeque::new()),
        }
    }

    pub fn chain_tag(&self) -> u8 {
        self.chain_tag
    }

    /// Validate a transaction against the current head and queue it
    ///
    /// Stateless checks run first so that cheap rejections never open state.
    /// State is opened only when the fee-market floor applies to `tx`.
    ///
    /// # Returns
    /// The transaction id on admission, or the first rule it failed
    pub async fn add(&self, tx: Transaction) -> Result<H256, AddError> {
        let id = tx.hash();
        let size = {
            let head = self.head.read().await;
            debug!(
                "Validating transaction {:?} at block {} (delegated: {})",
                id,
                head.header.number(),
                tx.features().is_delegated()
            );

            validation::validate(&tx, &self.chain_tag, &*head, &self.forks)?;

            if validation::needs_state(&tx, &head.header, &self.forks) {
                let state = self.stater.state_at(&head.header)?;
                validation::validate_with_state(&tx, &head.header, &self.forks, &state)?;
            }

            tx.encoded_size()
        };

        let pending = PendingTx {
            id,
            tx,
            size,
            admitted_at: chrono::Utc::now().timestamp(),
        };

        let mut txs = self.transactions.write().await;
        txs.push_back(pending);
        info!("Transaction {:?} admitted ({} bytes, {} pending)", id, size, txs.len());

        Ok(id)
    }

    /// Advance the head that admission is validated against
    pub async fn set_head(&self, summary: BlockSummary) {
        let mut head = self.head.write().await;
        if summary.header.number() < head.header.number() {
            warn!(
                "Head moved back from block {} to {}",
                head.header.number(),
                summary.header.number()
            );
        }
        info!("Pool head set to block {} ({:?})", summary.header.number(), summary.header.id());
        *head = summary;
    }

    pub async fn head(&self) -> BlockSummary {
        self.head.read().await.clone()
    }

    /// Removes and returns up to `max` transactions from the front of the queue.
    pub async fn pending(&self, max: usize) -> Vec<PendingTx> {
        let mut txs = self.transactions.write().await;
        let len = txs.len();
        txs.drain(..max.min(len)).collect()
    }

    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.transactions.read().await.is_empty()
    }
}
