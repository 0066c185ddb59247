//! Gateway client for the BIZ token on the Bizain chain.
//!
//! Validates transfer arguments, shapes payment and relations requests and
//! maps ledger answers to typed results. Connection handling, signing and
//! submission are delegated to a [`LedgerClient`] implementation.

pub mod config;
pub mod error;
pub mod fingate;
pub mod gate;
pub mod remote;
pub mod types;
pub mod validator;

pub use config::GatewayConfig;
pub use error::{FingateError, Result, ValidationError};
pub use fingate::{
    get_address, is_valid_address, is_valid_secret, Fingate, SessionState, TOKEN_NAMESPACE,
};
pub use gate::{Arg, Gate, Validator};
pub use remote::{ClientError, Connector, LedgerClient, PaymentTransaction, RemoteOptions};
pub use types::{
    Amount, Memo, RelationsQuery, SubmitResponse, TransferRequest, TxJson, ENGINE_SUCCESS,
};
