use std::future::Future;
use std::sync::LazyLock;

use chain_jingtum::TokenNamespace;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::GatewayConfig;
use crate::error::{FingateError, Result, ValidationError};
use crate::gate::{Arg, Gate};
use crate::remote::{Connector, LedgerClient, RemoteOptions};
use crate::types::{Amount, Memo, RelationsQuery, TransferRequest, TrustLine};
use crate::validator;

/// Namespace of the Bizain chain.
pub const TOKEN_NAMESPACE: TokenNamespace = TokenNamespace::Bizain;

/// `transfer(secret, destination, value, memo)`
static TRANSFER_GATE: LazyLock<Gate> = LazyLock::new(|| {
    Gate::new()
        .bind(0, validator::check_secret)
        .bind(1, validator::check_address)
        .bind(2, validator::check_amount)
        .bind(3, validator::check_memo)
});

/// Whether `address` is a valid Bizain address.
pub fn is_valid_address(address: &str) -> bool {
    chain_jingtum::is_valid_address(address, TOKEN_NAMESPACE)
}

/// Whether `secret` is a valid Bizain secret.
pub fn is_valid_secret(secret: &str) -> bool {
    chain_jingtum::is_valid_secret(secret, TOKEN_NAMESPACE)
}

/// Bizain address controlled by `secret`, `None` if the secret is invalid.
pub fn get_address(secret: &str) -> Option<String> {
    chain_jingtum::get_address(secret, TOKEN_NAMESPACE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unconfigured,
    Initialized,
    Connected,
    Disconnected,
}

/// Owned client handle plus where it is in its lifecycle.
enum Session<C> {
    Unconfigured,
    Initialized(C),
    Connected(C),
    Disconnected,
}

impl<C> Session<C> {
    fn state(&self) -> SessionState {
        match self {
            Session::Unconfigured => SessionState::Unconfigured,
            Session::Initialized(_) => SessionState::Initialized,
            Session::Connected(_) => SessionState::Connected,
            Session::Disconnected => SessionState::Disconnected,
        }
    }

    fn client(&self) -> Option<&C> {
        match self {
            Session::Initialized(client) | Session::Connected(client) => Some(client),
            Session::Unconfigured | Session::Disconnected => None,
        }
    }
}

/// Gateway to the BIZ token on the Bizain chain.
pub struct Fingate<K: Connector> {
    config: GatewayConfig,
    connector: K,
    session: Session<K::Client>,
}

impl<K: Connector> Fingate<K> {
    pub fn new(server: impl Into<String>, connector: K) -> Self {
        Self::with_config(GatewayConfig::new(server), connector)
    }

    pub fn with_config(config: GatewayConfig, connector: K) -> Self {
        Self {
            config,
            connector,
            session: Session::Unconfigured,
        }
    }

    pub fn set_local_sign(&mut self, local_sign: bool) {
        self.config.local_sign = local_sign;
    }

    /// Transfer rate for subsequent payments.
    pub fn set_fee(&mut self, fee: u32) {
        self.config.fee = fee;
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.config.currency = currency.into();
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// The live client, if `init` has run and `disconnect` has not.
    pub fn client(&self) -> Option<&K::Client> {
        self.session.client()
    }

    /// Build a fresh client from the current configuration. A previous
    /// client is disconnected and replaced.
    pub fn init(&mut self) -> Result<&mut Self> {
        let options = RemoteOptions {
            server: self.config.server.clone(),
            local_sign: self.config.local_sign,
            token: TOKEN_NAMESPACE.token().to_string(),
        };
        let client = self.connector.open(&options).map_err(FingateError::Connection)?;

        let previous = std::mem::replace(&mut self.session, Session::Initialized(client));
        if let Session::Connected(previous) = previous {
            debug!("replacing connected client");
            previous.disconnect();
        }
        info!(server = %options.server, local_sign = options.local_sign, "remote client initialized");
        Ok(self)
    }

    /// Establish the client's session. No timeout is applied here.
    ///
    /// A failed attempt leaves the client `Initialized`, even if it was
    /// connected before.
    pub async fn connect(&mut self) -> Result<()> {
        let client = self.session.client().ok_or(FingateError::NotInitialized)?;
        let outcome = client.connect().await;

        let previous = std::mem::replace(&mut self.session, Session::Unconfigured);
        self.session = match (previous, &outcome) {
            (Session::Initialized(client) | Session::Connected(client), Ok(())) => {
                Session::Connected(client)
            }
            (Session::Initialized(client) | Session::Connected(client), Err(_)) => {
                Session::Initialized(client)
            }
            (other, _) => other,
        };

        outcome.map_err(|e| {
            warn!(server = %self.config.server, error = %e, "connection failed");
            FingateError::Connection(e)
        })?;
        info!(server = %self.config.server, "connected");
        Ok(())
    }

    /// Ask the client to tear down and drop it. Does not wait for teardown.
    pub fn disconnect(&mut self) {
        match std::mem::replace(&mut self.session, Session::Disconnected) {
            Session::Initialized(client) | Session::Connected(client) => {
                client.disconnect();
                info!(server = %self.config.server, "disconnected");
            }
            Session::Unconfigured => self.session = Session::Unconfigured,
            Session::Disconnected => {}
        }
    }

    /// Balance of the configured currency held by `address`.
    ///
    /// Resolves `"0"` when the account has no matching trust line or the
    /// response does not look like a relations answer. Only a failed query is
    /// an error.
    pub async fn balance_of(&self, address: &str) -> Result<String> {
        let client = self.connected_client()?;
        let response = client
            .request_account_relations(&RelationsQuery::trust(address))
            .await
            .map_err(FingateError::Request)?;

        match matching_balance(&response, &self.config.currency) {
            Some(balance) => Ok(balance),
            None => {
                debug!(%address, currency = %self.config.currency, "no matching trust line");
                Ok("0".to_string())
            }
        }
    }

    /// Send `value` of the configured currency from the account of `secret`
    /// to `destination`, with `memo` attached. The returned future resolves
    /// the transaction hash.
    ///
    /// Arguments are validated in order when this is called. A rejected
    /// argument fails here, before any future exists or the client is used.
    pub fn transfer<'a>(
        &'a self,
        secret: &'a str,
        destination: &'a str,
        value: &'a str,
        memo: &'a Memo,
    ) -> Result<impl Future<Output = Result<String>> + 'a> {
        let args = [
            Arg::Text(secret),
            Arg::Text(destination),
            Arg::Text(value),
            Arg::Memo(memo),
        ];
        let submission =
            TRANSFER_GATE.run(&args, || self.submit_transfer(secret, destination, value, memo))?;
        Ok(submission)
    }

    /// Payment request for `value` of the configured currency.
    ///
    /// The issuer is left empty only for the chain's native token.
    pub fn transfer_request(
        &self,
        account: String,
        destination: &str,
        value: &str,
    ) -> std::result::Result<TransferRequest, ValidationError> {
        let currency = self.config.currency.to_uppercase();
        let issuer = if TOKEN_NAMESPACE.is_native(&currency) {
            String::new()
        } else {
            self.config.issuer.clone()
        };

        Ok(TransferRequest {
            account,
            to: destination.to_string(),
            amount: Amount {
                currency,
                issuer,
                value: validator::parse_amount(value)?,
            },
        })
    }

    async fn submit_transfer(
        &self,
        secret: &str,
        destination: &str,
        value: &str,
        memo: &Memo,
    ) -> Result<String> {
        let client = self.connected_client()?;
        let account =
            get_address(secret).ok_or_else(|| ValidationError::InvalidSecret(secret.to_string()))?;
        let request = self.transfer_request(account, destination, value)?;
        debug!(
            account = %request.account,
            to = %request.to,
            currency = %request.amount.currency,
            value = %request.amount.value,
            "submitting payment"
        );

        let mut transaction = client.build_payment(request);
        transaction
            .set_transfer_rate(self.config.fee)
            .set_secret(secret)
            .add_memo(memo.to_json()?);

        let response = client.submit(transaction).await.map_err(|e| {
            warn!(error = %e, "payment submission failed");
            FingateError::Submission(e)
        })?;

        if !response.is_success() {
            let message = response
                .engine_result_message
                .unwrap_or_else(|| response.engine_result.clone());
            warn!(code = %response.engine_result, %message, "payment rejected by ledger");
            return Err(FingateError::Rejected {
                code: response.engine_result,
                message,
            });
        }

        let hash = response.tx_json.hash.ok_or_else(|| {
            FingateError::MalformedResponse("tesSUCCESS without tx_json.hash".into())
        })?;
        info!(%hash, "payment applied");
        Ok(hash)
    }

    fn connected_client(&self) -> Result<&K::Client> {
        match &self.session {
            Session::Connected(client) => Ok(client),
            Session::Initialized(_) | Session::Disconnected => Err(FingateError::NotConnected),
            Session::Unconfigured => Err(FingateError::NotInitialized),
        }
    }
}

/// First trust line in a relations response whose currency matches
/// (case-insensitive).
fn matching_balance(response: &Value, currency: &str) -> Option<String> {
    response
        .get("lines")?
        .as_array()?
        .iter()
        .filter_map(|line| TrustLine::deserialize(line).ok())
        .find(|line| line.currency.eq_ignore_ascii_case(currency))
        .map(|line| line.balance)
}
