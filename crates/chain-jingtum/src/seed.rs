use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::codec::{self, FAMILY_SEED_VERSION};
use crate::error::JingtumError;
use crate::network::TokenNamespace;

/// Length of a family seed in bytes.
pub const SEED_LEN: usize = 16;

/// Decode a secret string (Base58Check family seed) into its 16 seed bytes.
pub fn decode_secret(secret: &str, namespace: TokenNamespace) -> Result<[u8; SEED_LEN], JingtumError> {
    let mut payload = codec::decode_check(secret, FAMILY_SEED_VERSION, SEED_LEN, namespace)
        .map_err(|e| JingtumError::InvalidSecret(e.to_string()))?;

    let mut seed = [0u8; SEED_LEN];
    seed.copy_from_slice(&payload);
    payload.zeroize();
    Ok(seed)
}

/// Encode 16 seed bytes as a secret string for `namespace`.
pub fn encode_secret(seed: &[u8; SEED_LEN], namespace: TokenNamespace) -> String {
    codec::encode_check(FAMILY_SEED_VERSION, seed, namespace)
}

/// Whether `secret` is a well-formed family seed in `namespace`.
pub fn is_valid_secret(secret: &str, namespace: TokenNamespace) -> bool {
    match decode_secret(secret, namespace) {
        Ok(mut seed) => {
            seed.zeroize();
            true
        }
        Err(_) => false,
    }
}

/// Draw a fresh seed from the operating system RNG.
pub fn generate_seed() -> [u8; SEED_LEN] {
    let mut seed = [0u8; SEED_LEN];
    OsRng.fill_bytes(&mut seed);
    seed
}
