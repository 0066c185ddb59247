use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Engine result code of an unconditionally applied transaction.
pub const ENGINE_SUCCESS: &str = "tesSUCCESS";

/// Memo attached to a transfer. Names a Jingtum address the gateway should
/// credit on the base ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    #[serde(rename = "jtaddress")]
    pub target_address: String,
}

impl Memo {
    pub fn new(target_address: impl Into<String>) -> Self {
        Self {
            target_address: target_address.into(),
        }
    }

    /// Wire form attached to the payment, e.g. `{"jtaddress":"j..."}`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Amount of a payment. `issuer` is empty for the native token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    pub issuer: String,
    pub value: Decimal,
}

/// Payment handed to the ledger client's transaction builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Sender, derived from the signing secret.
    pub account: String,
    pub to: String,
    pub amount: Amount,
}

/// Account relations query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationsQuery {
    pub account: String,
    #[serde(rename = "type")]
    pub relation_type: String,
}

impl RelationsQuery {
    /// Trust-line relations of `account`.
    pub fn trust(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            relation_type: "trust".to_string(),
        }
    }
}

/// One line of a relations response. Only the fields the gateway reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrustLine {
    pub currency: String,
    pub balance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxJson {
    #[serde(default)]
    pub hash: Option<String>,
}

/// Ledger answer to a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub engine_result: String,
    #[serde(default)]
    pub engine_result_message: Option<String>,
    #[serde(default)]
    pub tx_json: TxJson,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.engine_result == ENGINE_SUCCESS
    }
}
