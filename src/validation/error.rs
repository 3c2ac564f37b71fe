use thiserror::Error;

use crate::tx::TxTypeNotSupported;

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The transaction can never be valid on this chain.
    #[error("bad tx: {0}")]
    MalformedTransaction(String),
    /// Well formed, but inadmissible under the current policy.
    #[error("tx rejected: {0}")]
    PolicyRejected(String),
    /// The transaction type is not enabled at the current height.
    #[error(transparent)]
    TypeNotSupported(#[from] TxTypeNotSupported),
}

impl ValidationError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        ValidationError::MalformedTransaction(msg.into())
    }

    pub(crate) fn rejected(msg: impl Into<String>) -> Self {
        ValidationError::PolicyRejected(msg.into())
    }

    /// Whether the same transaction may become admissible as the chain
    /// advances.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ValidationError::MalformedTransaction(_))
    }
}
