//! A [`WalletClient`] backed by an alloy provider with a local signer.

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::TxHash,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use anyhow::{Context, Result};
use cookie_jar_minter::wallet::{PreparedWrite, WalletClient, WriteContractRequest};

/// Submits mints through a JSON-RPC provider that signs with a local key.
pub struct ProviderWallet<P> {
    provider: P,
}

impl<P: Provider> ProviderWallet<P> {
    /// Wraps a provider that can sign transactions.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl ProviderWallet<DynProvider> {
    /// Connects to `rpc_url` with the hex-encoded `private_key`.
    ///
    /// # Errors
    /// Returns an error if the key is invalid or the endpoint cannot be reached.
    pub async fn connect(rpc_url: &str, private_key: &str) -> Result<Self> {
        let signer = private_key
            .strip_prefix("0x")
            .unwrap_or(private_key)
            .parse::<PrivateKeySigner>()
            .context("Failed to parse private key")?;
        tracing::info!(account = %signer.address(), "using local signer");

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(rpc_url)
            .await
            .with_context(|| format!("failed to connect to {rpc_url}"))?;

        Ok(Self::new(provider.erased()))
    }
}

fn transaction_request(request: &WriteContractRequest) -> TransactionRequest {
    let tx = TransactionRequest::default()
        .with_to(request.address)
        .with_input(request.calldata());
    match request.value {
        Some(value) => tx.with_value(value),
        None => tx,
    }
}

#[async_trait::async_trait]
impl<P: Provider> WalletClient for ProviderWallet<P> {
    #[tracing::instrument(skip_all, fields(to = %request.address))]
    async fn prepare_write_contract(&self, request: WriteContractRequest) -> Result<PreparedWrite> {
        let tx = transaction_request(&request);

        self.provider
            .call(tx.clone())
            .await
            .context("cookieMint simulation failed")?;
        let gas_limit = self
            .provider
            .estimate_gas(tx)
            .await
            .context("failed to estimate cookieMint gas")?;

        tracing::debug!(gas_limit, "cookieMint simulated");
        Ok(PreparedWrite { request, gas_limit })
    }

    #[tracing::instrument(skip_all, fields(to = %prepared.request.address))]
    async fn write_contract(&self, prepared: PreparedWrite) -> Result<TxHash> {
        let tx = transaction_request(&prepared.request).with_gas_limit(prepared.gas_limit);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("failed to send cookieMint")?;
        tracing::info!(tx_hash = %pending.tx_hash(), "cookieMint sent, waiting for inclusion");

        Ok(pending.watch().await?)
    }
}
