//! Defines the [`WalletClient`] trait through which mints are submitted.

use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_sol_types::SolCall;
use anyhow::Result;
use cookie_jar_solidity_types::cookie_nft::ICookieNFT;

/// A contract call ready to be simulated and sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteContractRequest {
    /// The contract to call.
    pub address: Address,
    /// The decoded `cookieMint` call.
    pub call: ICookieNFT::cookieMintCall,
    /// Native value attached to the call, in wei.
    pub value: Option<U256>,
}

impl WriteContractRequest {
    /// Returns the ABI-encoded calldata, selector included.
    #[must_use]
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }
}

/// A request that passed simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedWrite {
    /// The simulated request.
    pub request: WriteContractRequest,
    /// The gas limit estimated during simulation.
    pub gas_limit: u64,
}

/// The `WalletClient` trait defines the interface of a connected wallet that can submit
/// contract calls.
#[async_trait::async_trait]
pub trait WalletClient: Send + Sync {
    /// Simulates the call against the latest state and estimates its gas.
    ///
    /// # Errors
    /// Returns an error if the call reverts or the node cannot be reached.
    async fn prepare_write_contract(&self, request: WriteContractRequest) -> Result<PreparedWrite>;

    /// Signs and sends a prepared call, returning the transaction hash once it is
    /// included.
    ///
    /// # Errors
    /// Returns an error if the user rejects the call or it cannot be sent.
    async fn write_contract(&self, prepared: PreparedWrite) -> Result<TxHash>;
}

#[async_trait::async_trait]
impl<T: WalletClient + ?Sized> WalletClient for &T {
    async fn prepare_write_contract(&self, request: WriteContractRequest) -> Result<PreparedWrite> {
        (**self).prepare_write_contract(request).await
    }

    async fn write_contract(&self, prepared: PreparedWrite) -> Result<TxHash> {
        (**self).write_contract(prepared).await
    }
}
