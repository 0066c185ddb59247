//! Seam to the external ledger client.
//!
//! Connection management, signing and submission belong to the client. The
//! gateway only shapes requests for it and interprets its answers.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::types::{RelationsQuery, SubmitResponse, TransferRequest};

/// Errors reported by a ledger client. Displayed as the client's own message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Connection(String),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Protocol(String),
}

/// What a client is constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOptions {
    pub server: String,
    pub local_sign: bool,
    /// Token namespace of the ledger, e.g. `"bwt"`.
    pub token: String,
}

/// A payment being prepared for submission.
#[derive(Debug)]
pub struct PaymentTransaction {
    request: TransferRequest,
    transfer_rate: Option<u32>,
    secret: Option<SecretString>,
    memos: Vec<String>,
}

impl PaymentTransaction {
    pub fn new(request: TransferRequest) -> Self {
        Self {
            request,
            transfer_rate: None,
            secret: None,
            memos: Vec::new(),
        }
    }

    pub fn set_transfer_rate(&mut self, rate: u32) -> &mut Self {
        self.transfer_rate = Some(rate);
        self
    }

    /// Secret used to sign the payment, locally or by the server.
    pub fn set_secret(&mut self, secret: &str) -> &mut Self {
        self.secret = Some(SecretString::from(secret.to_owned()));
        self
    }

    pub fn add_memo(&mut self, memo: impl Into<String>) -> &mut Self {
        self.memos.push(memo.into());
        self
    }

    pub fn request(&self) -> &TransferRequest {
        &self.request
    }

    pub fn transfer_rate(&self) -> Option<u32> {
        self.transfer_rate
    }

    pub fn secret(&self) -> Option<&SecretString> {
        self.secret.as_ref()
    }

    pub fn memos(&self) -> &[String] {
        &self.memos
    }
}

/// A live ledger client. One instance serializes its own requests over a
/// single connection.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Resolve once the session is live.
    async fn connect(&self) -> Result<(), ClientError>;

    /// Request teardown. Does not wait for it.
    fn disconnect(&self);

    /// Raw relations response, expected to carry a `lines` array.
    async fn request_account_relations(&self, query: &RelationsQuery) -> Result<Value, ClientError>;

    fn build_payment(&self, request: TransferRequest) -> PaymentTransaction {
        PaymentTransaction::new(request)
    }

    async fn submit(&self, transaction: PaymentTransaction) -> Result<SubmitResponse, ClientError>;
}

/// Builds ledger clients for the gateway's `init`.
pub trait Connector {
    type Client: LedgerClient;

    fn open(&self, options: &RemoteOptions) -> Result<Self::Client, ClientError>;
}

impl<F, C> Connector for F
where
    F: Fn(&RemoteOptions) -> Result<C, ClientError>,
    C: LedgerClient,
{
    type Client = C;

    fn open(&self, options: &RemoteOptions) -> Result<C, ClientError> {
        self(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Amount;
    use rust_decimal::Decimal;
    use secrecy::ExposeSecret;

    fn request() -> TransferRequest {
        TransferRequest {
            account: "bMAy4Pu8CSf5apR44HbYyLFKeC9Dbau16Q".into(),
            to: "bwtC9ARd3wo7Kx3gKQ49uVgcKxoAiV1iM2".into(),
            amount: Amount {
                currency: "BIZ".into(),
                issuer: "bf42S78serP2BeSx7HGtwQR2QASYaHVqyb".into(),
                value: Decimal::ONE,
            },
        }
    }

    #[test]
    fn new_transaction_is_bare() {
        let tx = PaymentTransaction::new(request());
        assert_eq!(tx.transfer_rate(), None);
        assert!(tx.secret().is_none());
        assert!(tx.memos().is_empty());
        assert_eq!(tx.request(), &request());
    }

    #[test]
    fn builder_methods_chain() {
        let mut tx = PaymentTransaction::new(request());
        tx.set_transfer_rate(10)
            .set_secret("ssySqG4BhxpngV2FjAe1SJYFD4dcm")
            .add_memo("first")
            .add_memo("second");

        assert_eq!(tx.transfer_rate(), Some(10));
        assert_eq!(
            tx.secret().unwrap().expose_secret(),
            "ssySqG4BhxpngV2FjAe1SJYFD4dcm"
        );
        assert_eq!(tx.memos(), ["first", "second"]);
    }

    #[test]
    fn debug_redacts_secret() {
        let mut tx = PaymentTransaction::new(request());
        tx.set_secret("ssySqG4BhxpngV2FjAe1SJYFD4dcm");
        let debug = format!("{tx:?}");
        assert!(!debug.contains("ssySqG4BhxpngV2FjAe1SJYFD4dcm"));
    }

    #[test]
    fn client_error_displays_message() {
        assert_eq!(ClientError::Connection("connect error".into()).to_string(), "connect error");
    }
}
