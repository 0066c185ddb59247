//! Base58Check encoding shared by account addresses and family seeds.
//!
//! Layout: `version (1 byte) || payload || checksum (4 bytes)` where the
//! checksum is the first four bytes of SHA-256d over version and payload.
//! The alphabet comes from the token namespace.

use sha2::{Digest, Sha256};

use crate::error::JingtumError;
use crate::network::TokenNamespace;

/// Version byte of a 20-byte account id.
pub const ACCOUNT_ID_VERSION: u8 = 0;

/// Version byte of a 16-byte family seed (the "secret").
pub const FAMILY_SEED_VERSION: u8 = 33;

/// Base58Check-encode `payload` under `version`.
pub fn encode_check(version: u8, payload: &[u8], namespace: TokenNamespace) -> String {
    let mut data = Vec::with_capacity(payload.len() + 5);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256_checksum(&data);
    data.extend_from_slice(&checksum);

    bs58::encode(data)
        .with_alphabet(namespace.alphabet())
        .into_string()
}

/// Decode a Base58Check string, verify its checksum and version and return
/// the payload without version byte.
///
/// `payload_len` is the exact payload size the caller expects.
pub fn decode_check(
    input: &str,
    version: u8,
    payload_len: usize,
    namespace: TokenNamespace,
) -> Result<Vec<u8>, JingtumError> {
    let decoded = bs58::decode(input)
        .with_alphabet(namespace.alphabet())
        .into_vec()
        .map_err(|e| JingtumError::InvalidEncoding(e.to_string()))?;

    let expected_len = payload_len + 5;
    if decoded.len() != expected_len {
        return Err(JingtumError::InvalidEncoding(format!(
            "expected {expected_len} bytes, got {}",
            decoded.len()
        )));
    }

    let (body, checksum) = decoded.split_at(payload_len + 1);
    if checksum != double_sha256_checksum(body) {
        return Err(JingtumError::InvalidChecksum);
    }

    if body[0] != version {
        return Err(JingtumError::InvalidVersion {
            expected: version,
            actual: body[0],
        });
    }

    Ok(body[1..].to_vec())
}

/// Double SHA-256 checksum (first 4 bytes).
fn double_sha256_checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&second[..4]);
    checksum
}
