//! secp256k1 keypair derivation from a family seed.
//!
//! The Jingtum ledgers inherit the family-seed scheme:
//! 1. private generator = first SHA-512-half(seed || seq) that is a valid scalar
//! 2. public generator  = compressed point of the private generator
//! 3. additional key    = first SHA-512-half(public generator || 0 || subseq)
//!    that is a valid scalar (0 is the account family index)
//! 4. account private key = private generator + additional key (mod n)

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{NonZeroScalar, Scalar, SecretKey};
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::JingtumError;
use crate::seed::SEED_LEN;

/// Account keypair. The private half is wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Keypair {
    private_key: [u8; 32],
    #[zeroize(skip)]
    public_key: [u8; 33],
}

impl Keypair {
    /// Derive the account keypair (family index 0) for a seed.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Result<Self, JingtumError> {
        let generator =
            first_valid_scalar(|seq| sha512_half(&[seed.as_slice(), seq.to_be_bytes().as_slice()]))?;
        let public_generator = compressed(&generator)?;

        let additional = first_valid_scalar(|subseq| {
            sha512_half(&[
                public_generator.as_slice(),
                0u32.to_be_bytes().as_slice(),
                subseq.to_be_bytes().as_slice(),
            ])
        })?;

        let sum: Scalar = *generator.to_nonzero_scalar() + *additional.to_nonzero_scalar();
        let scalar = Option::<NonZeroScalar>::from(NonZeroScalar::new(sum))
            .ok_or_else(|| JingtumError::DerivationFailed("account key is zero".into()))?;
        let secret = SecretKey::from(scalar);

        let public_key = compressed(&secret)?;
        let private_key: [u8; 32] = secret.to_bytes().into();

        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// 33-byte compressed public key.
    pub fn public_key(&self) -> &[u8; 33] {
        &self.public_key
    }

    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

fn sha512_half(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[..32]);
    half
}

/// Hash with an increasing counter until the output is a valid secp256k1 scalar.
fn first_valid_scalar<F>(mut hash: F) -> Result<SecretKey, JingtumError>
where
    F: FnMut(u32) -> [u8; 32],
{
    for seq in 0..=u32::MAX {
        let mut candidate = hash(seq);
        let key = SecretKey::from_slice(&candidate);
        candidate.zeroize();
        if let Ok(key) = key {
            return Ok(key);
        }
    }
    Err(JingtumError::DerivationFailed(
        "no valid scalar in sequence space".into(),
    ))
}

fn compressed(secret: &SecretKey) -> Result<[u8; 33], JingtumError> {
    secret
        .public_key()
        .to_encoded_point(true)
        .as_bytes()
        .try_into()
        .map_err(|_| JingtumError::DerivationFailed("invalid compressed key length".into()))
}
