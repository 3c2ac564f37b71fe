use ethers::types::H256;
use serde::{Deserialize, Serialize};

/// Admission verdict sent back to the submitter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftConfirmation {
    pub tx_id: H256,
    pub status: ConfirmationStatus,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConfirmationStatus {
    Accepted,
    /// `retryable` is set when the transaction may be admitted at a later
    /// height, so the submitter can hold on to it.
    Rejected { reason: String, retryable: bool },
}
