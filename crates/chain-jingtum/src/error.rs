use thiserror::Error;

/// Jingtum-family wallet derivation errors.
#[derive(Debug, Error)]
pub enum JingtumError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid secret: {0}")]
    InvalidSecret(String),

    #[error("invalid base58: {0}")]
    InvalidEncoding(String),

    #[error("checksum mismatch")]
    InvalidChecksum,

    #[error("unexpected version byte: expected {expected}, got {actual}")]
    InvalidVersion { expected: u8, actual: u8 },

    #[error("key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("unknown token namespace: {0}")]
    InvalidNetwork(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = JingtumError::InvalidAddress("expected 20 bytes, got 3".into());
        assert_eq!(err.to_string(), "invalid address: expected 20 bytes, got 3");
    }

    #[test]
    fn display_invalid_version() {
        let err = JingtumError::InvalidVersion {
            expected: 33,
            actual: 0,
        };
        assert!(err.to_string().contains("33"));
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn display_checksum() {
        assert_eq!(JingtumError::InvalidChecksum.to_string(), "checksum mismatch");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(JingtumError::InvalidNetwork("eth".into()));
        assert!(err.to_string().contains("eth"));
    }
}
