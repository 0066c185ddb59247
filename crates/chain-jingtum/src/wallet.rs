use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::address;
use crate::error::JingtumError;
use crate::keypair::Keypair;
use crate::network::TokenNamespace;
use crate::seed;

/// A secret together with the account address it controls.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Wallet {
    secret: String,
    #[zeroize(skip)]
    address: String,
    #[zeroize(skip)]
    namespace: TokenNamespace,
}

impl Wallet {
    /// Create a wallet with a fresh random seed.
    pub fn generate(namespace: TokenNamespace) -> Result<Self, JingtumError> {
        let mut seed = seed::generate_seed();
        let secret = seed::encode_secret(&seed, namespace);
        seed.zeroize();
        Self::from_secret(&secret, namespace)
    }

    /// Restore a wallet from its secret string.
    pub fn from_secret(secret: &str, namespace: TokenNamespace) -> Result<Self, JingtumError> {
        let mut seed = seed::decode_secret(secret, namespace)?;
        let keypair = Keypair::from_seed(&seed);
        seed.zeroize();

        let address = address::pubkey_to_address(keypair?.public_key(), namespace)?;
        Ok(Self {
            secret: secret.to_owned(),
            address,
            namespace,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn namespace(&self) -> TokenNamespace {
        self.namespace
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

/// Derive the address a secret controls, or `None` if the secret is invalid.
pub fn get_address(secret: &str, namespace: TokenNamespace) -> Option<String> {
    Wallet::from_secret(secret, namespace)
        .ok()
        .map(|wallet| wallet.address().to_owned())
}
