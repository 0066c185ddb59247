//! Jingtum-family wallet derivation.
//!
//! Address and secret (family seed) codecs, secp256k1 account key derivation
//! and validity checks for the Jingtum ledger and the Bizain chain that shares
//! its formats. Everything here is pure and synchronous.

pub mod address;
pub mod codec;
pub mod error;
pub mod keypair;
pub mod network;
pub mod seed;
pub mod wallet;

pub use address::{
    account_id_to_address, address_to_account_id, is_valid_address, pubkey_to_address,
    validate_address,
};
pub use error::JingtumError;
pub use keypair::Keypair;
pub use network::TokenNamespace;
pub use seed::{decode_secret, encode_secret, is_valid_secret};
pub use wallet::{get_address, Wallet};
