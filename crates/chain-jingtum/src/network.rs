use std::str::FromStr;

use crate::error::JingtumError;

/// Base58 alphabet of the Jingtum (SWTC) ledger. Version byte 0 encodes to `j`.
pub static JINGTUM_ALPHABET: bs58::Alphabet =
    bs58::Alphabet::new_unwrap(b"jpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65rkm8oFqi1tuvAxyz");

/// Base58 alphabet of the Bizain chain: Jingtum's with `j` and `b` swapped,
/// so account addresses start with `b`.
pub static BIZAIN_ALPHABET: bs58::Alphabet =
    bs58::Alphabet::new_unwrap(b"bpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2jcdeCg65rkm8oFqi1tuvAxyz");

/// Token namespaces sharing the Jingtum account and seed formats.
///
/// Each namespace only differs in its base58 alphabet and native currency,
/// so the same 16-byte seed yields a different secret string and address in
/// each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenNamespace {
    #[default]
    Jingtum,
    Bizain,
}

impl TokenNamespace {
    /// Short token name the ledger libraries use to select a namespace.
    pub fn token(self) -> &'static str {
        match self {
            TokenNamespace::Jingtum => "swt",
            TokenNamespace::Bizain => "bwt",
        }
    }

    /// Native currency symbol. Amounts in it carry no issuer.
    pub fn native_currency(self) -> &'static str {
        match self {
            TokenNamespace::Jingtum => "SWT",
            TokenNamespace::Bizain => "BWT",
        }
    }

    pub fn alphabet(self) -> &'static bs58::Alphabet {
        match self {
            TokenNamespace::Jingtum => &JINGTUM_ALPHABET,
            TokenNamespace::Bizain => &BIZAIN_ALPHABET,
        }
    }

    /// Whether `currency` is this namespace's native token (case-insensitive).
    pub fn is_native(self, currency: &str) -> bool {
        currency.eq_ignore_ascii_case(self.native_currency())
    }
}

impl FromStr for TokenNamespace {
    type Err = JingtumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "swt" | "swtc" | "jingtum" => Ok(TokenNamespace::Jingtum),
            "bwt" | "bizain" => Ok(TokenNamespace::Bizain),
            other => Err(JingtumError::InvalidNetwork(other.to_string())),
        }
    }
}

impl std::fmt::Display for TokenNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenNamespace::Jingtum => write!(f, "jingtum"),
            TokenNamespace::Bizain => write!(f, "bizain"),
        }
    }
}
