use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::codec::{self, ACCOUNT_ID_VERSION};
use crate::error::JingtumError;
use crate::network::TokenNamespace;

/// Length of an account id in bytes.
pub const ACCOUNT_ID_LEN: usize = 20;

/// Compute the account id of a 33-byte compressed secp256k1 public key.
///
/// RIPEMD-160(SHA-256(pubkey)), the same hash160 Bitcoin uses for P2PKH.
pub fn pubkey_to_account_id(pubkey_bytes: &[u8; 33]) -> Result<[u8; ACCOUNT_ID_LEN], JingtumError> {
    if pubkey_bytes[0] != 0x02 && pubkey_bytes[0] != 0x03 {
        return Err(JingtumError::DerivationFailed(
            "compressed key must start with 0x02 or 0x03".into(),
        ));
    }

    let sha256_hash = Sha256::digest(pubkey_bytes);
    Ok(Ripemd160::digest(sha256_hash).into())
}

/// Encode an account id as an address in `namespace`.
pub fn account_id_to_address(account_id: &[u8; ACCOUNT_ID_LEN], namespace: TokenNamespace) -> String {
    codec::encode_check(ACCOUNT_ID_VERSION, account_id, namespace)
}

/// Derive the address of a compressed public key in `namespace`.
pub fn pubkey_to_address(pubkey_bytes: &[u8; 33], namespace: TokenNamespace) -> Result<String, JingtumError> {
    let account_id = pubkey_to_account_id(pubkey_bytes)?;
    Ok(account_id_to_address(&account_id, namespace))
}

/// Decode an address back to its 20-byte account id.
pub fn address_to_account_id(
    address: &str,
    namespace: TokenNamespace,
) -> Result<[u8; ACCOUNT_ID_LEN], JingtumError> {
    let payload = codec::decode_check(address, ACCOUNT_ID_VERSION, ACCOUNT_ID_LEN, namespace)
        .map_err(|e| JingtumError::InvalidAddress(e.to_string()))?;

    let mut account_id = [0u8; ACCOUNT_ID_LEN];
    account_id.copy_from_slice(&payload);
    Ok(account_id)
}

/// Validate an address string for `namespace`.
///
/// Returns `Ok(true)` if it decodes, or the reason it does not.
pub fn validate_address(address: &str, namespace: TokenNamespace) -> Result<bool, JingtumError> {
    address_to_account_id(address, namespace).map(|_| true)
}

/// Boolean form of [`validate_address`].
pub fn is_valid_address(address: &str, namespace: TokenNamespace) -> bool {
    validate_address(address, namespace).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIZAIN_ADDRESS: &str = "bMAy4Pu8CSf5apR44HbYyLFKeC9Dbau16Q";
    const BIZAIN_ISSUER: &str = "bf42S78serP2BeSx7HGtwQR2QASYaHVqyb";
    const JINGTUM_ADDRESS: &str = "jpgWGpfHz8GxqUjz5nb6ej8eZJQtiF6KhH";

    const TEST_PUBKEY_HEX: &str =
        "0305907425bf03cd414d089eb48fe0ab7898b74985f43b0a42eb06588da6ffc58e";

    fn test_pubkey() -> [u8; 33] {
        hex::decode(TEST_PUBKEY_HEX).unwrap().try_into().unwrap()
    }

    #[test]
    fn known_pubkey_to_bizain_address() {
        let addr = pubkey_to_address(&test_pubkey(), TokenNamespace::Bizain).unwrap();
        assert_eq!(addr, BIZAIN_ADDRESS);
    }

    #[test]
    fn known_pubkey_to_jingtum_address() {
        let addr = pubkey_to_address(&test_pubkey(), TokenNamespace::Jingtum).unwrap();
        assert_eq!(addr, "jMAy4Pu8CSf5apR44HjYyLFKeC9Djau16Q");
    }

    #[test]
    fn invalid_pubkey_prefix_rejected() {
        let mut bad = test_pubkey();
        bad[0] = 0x04;
        assert!(pubkey_to_account_id(&bad).is_err());
    }

    #[test]
    fn bizain_addresses_valid() {
        assert!(is_valid_address(BIZAIN_ADDRESS, TokenNamespace::Bizain));
        assert!(is_valid_address(BIZAIN_ISSUER, TokenNamespace::Bizain));
        assert!(is_valid_address(
            "bwtC9ARd3wo7Kx3gKQ49uVgcKxoAiV1iM2",
            TokenNamespace::Bizain
        ));
    }

    #[test]
    fn jingtum_address_valid_only_in_jingtum() {
        assert!(is_valid_address(JINGTUM_ADDRESS, TokenNamespace::Jingtum));
        assert!(!is_valid_address(JINGTUM_ADDRESS, TokenNamespace::Bizain));
        assert!(!is_valid_address(BIZAIN_ADDRESS, TokenNamespace::Jingtum));
    }

    #[test]
    fn garbage_rejected() {
        assert!(!is_valid_address("111", TokenNamespace::Bizain));
        assert!(!is_valid_address("", TokenNamespace::Bizain));
        assert!(validate_address("notanaddress!!!", TokenNamespace::Bizain).is_err());
    }

    #[test]
    fn secret_is_not_an_address() {
        assert!(!is_valid_address(
            "ssySqG4BhxpngV2FjAe1SJYFD4dcm",
            TokenNamespace::Bizain
        ));
    }

    #[test]
    fn single_character_flip_rejected() {
        let mut chars: Vec<char> = BIZAIN_ADDRESS.chars().collect();
        chars[10] = if chars[10] == 'a' { 'c' } else { 'a' };
        let flipped: String = chars.into_iter().collect();
        assert!(!is_valid_address(&flipped, TokenNamespace::Bizain));
    }

    #[test]
    fn account_id_roundtrip() {
        let id = address_to_account_id(BIZAIN_ISSUER, TokenNamespace::Bizain).unwrap();
        assert_eq!(hex::encode(id), "45e567535138ae582c51f4904d6a67499593b795");
        assert_eq!(account_id_to_address(&id, TokenNamespace::Bizain), BIZAIN_ISSUER);
    }

    #[test]
    fn decode_error_is_invalid_address() {
        let err = address_to_account_id("111", TokenNamespace::Bizain).unwrap_err();
        assert!(matches!(err, JingtumError::InvalidAddress(_)));
    }
}
