use thiserror::Error;

use crate::remote::ClientError;

/// Argument validation failures raised by the transfer gate.
///
/// Messages carry the offending value verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is invalid bizain address.")]
    InvalidAddress(String),

    #[error("{0} is invalid bizain secret.")]
    InvalidSecret(String),

    #[error("{0} is invalid amount.")]
    InvalidAmount(String),

    #[error("{0} is invalid jingtum address in memo.")]
    InvalidMemoAddress(String),

    /// Positive, but not representable as a ledger amount.
    #[error("{0} is out of range for a bizain amount.")]
    AmountOutOfRange(String),
}

#[derive(Debug, Error)]
pub enum FingateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The client could not establish its session.
    #[error(transparent)]
    Connection(ClientError),

    /// A ledger query failed.
    #[error(transparent)]
    Request(ClientError),

    /// Submitting a transaction failed before the ledger produced a result.
    #[error(transparent)]
    Submission(ClientError),

    /// The ledger processed the transaction and refused it. Displays the
    /// ledger's own message.
    #[error("{message}")]
    Rejected { code: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("malformed ledger response: {0}")]
    MalformedResponse(String),

    #[error("remote client not initialized, call init() first")]
    NotInitialized,

    #[error("remote client not connected")]
    NotConnected,

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FingateError>;
