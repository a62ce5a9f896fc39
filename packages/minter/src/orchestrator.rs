//! Drives a mint from the submitted form to the `cookieMint` transaction.

use alloy_primitives::{Address, Selector, TxHash};
use alloy_sol_types::SolCall;
use cookie_jar_solidity_types::cookie_nft::{ICookieNFT, COOKIE_NFT_CONTRACT_NAME};

use crate::{
    deployment::{ContractRecord, Deployment},
    details::JarDetails,
    donation::{donation_argument, donation_value, DonationArgument, DonationError},
    encoder::{encode_cookie_mint_parameters, EncodeError},
    form::MintFormInput,
    notice::{Notice, Notifier},
    wallet::{WalletClient, WriteContractRequest},
};

/// A prerequisite of the mint that is not met.
///
/// These are reported to the user as a [`Notice`] rather than returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Precondition {
    /// No wallet is connected.
    #[error("no wallet connected")]
    WalletNotConnected,
    /// No deployment manifest is available for the chain.
    #[error("no deployment found")]
    DeploymentMissing,
    /// The manifest has no `CookieNFT` minter.
    #[error("no `CookieNFT` contract in the deployment")]
    MinterMissing,
    /// The manifest has no implementation for the selected variant.
    #[error("no `{0}` implementation in the deployment")]
    ImplementationMissing(String),
}

impl Precondition {
    /// Returns the notice shown to the user.
    #[must_use]
    pub const fn notice(&self) -> Notice {
        match self {
            Self::WalletNotConnected => {
                Notice::destructive("Oops! Not connected?", "We couldn't find a wallet")
            }
            Self::DeploymentMissing => Notice::destructive(
                "What? No contracts found!",
                "We couldn't find a deployment",
            ),
            Self::MinterMissing => Notice::destructive(
                "What? No cookie minter contract found!",
                "We couldn't find a minter contract for the cookie jar",
            ),
            Self::ImplementationMissing(_) => Notice::destructive(
                "What? No cookie jar implementation found!",
                "We couldn't find a cookie jar implementation",
            ),
        }
    }
}

/// Errors returned by a mint.
#[derive(Debug, thiserror::Error)]
pub enum MintError {
    /// A prerequisite is not met.
    #[error(transparent)]
    Precondition(#[from] Precondition),
    /// The form does not describe a valid jar.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// The donation amount cannot be read.
    #[error(transparent)]
    Donation(#[from] DonationError),
    /// The minter ABI in the manifest does not declare the expected `cookieMint`.
    #[error("minter ABI does not declare `cookieMint` with selector {expected}")]
    AbiMismatch {
        /// The selector of the compiled `cookieMint` binding.
        expected: Selector,
    },
    /// The jar details could not be serialized.
    #[error("failed to serialize jar details: {0}")]
    Details(#[from] serde_json::Error),
    /// The wallet failed to simulate or send the call.
    #[error(transparent)]
    Wallet(#[from] anyhow::Error),
}

/// Builds the `cookieMint` call for `form` against `deployment`.
///
/// Checks that the deployment and both contracts exist, in that order, before reading
/// the form.
///
/// # Errors
/// Returns [`MintError::Precondition`] if a contract is missing, and any other variant
/// if the form is invalid or the minter ABI does not match.
pub fn build_mint_request(
    deployment: Option<&Deployment>,
    form: &MintFormInput,
    argument: DonationArgument,
) -> Result<WriteContractRequest, MintError> {
    let deployment = deployment.ok_or(Precondition::DeploymentMissing)?;
    let minter = deployment
        .find(COOKIE_NFT_CONTRACT_NAME)
        .ok_or(Precondition::MinterMissing)?;
    let implementation = deployment
        .find(&form.cookie_jar)
        .ok_or_else(|| Precondition::ImplementationMissing(form.cookie_jar.clone()))?;

    check_minter_abi(minter)?;

    let value = donation_value(form)?;
    let initializer = encode_cookie_mint_parameters(form)?;
    let details = JarDetails::from(form).to_json()?;

    let call = ICookieNFT::cookieMintCall {
        cookieJarImp: implementation.contract_address,
        initializer,
        details,
        donationToken: Address::ZERO,
        donationAmount: donation_argument(form, argument, value)?,
    };

    Ok(WriteContractRequest {
        address: minter.contract_address,
        call,
        value,
    })
}

/// Verifies that a manifest-provided minter ABI declares the compiled `cookieMint`.
fn check_minter_abi(minter: &ContractRecord) -> Result<(), MintError> {
    let Some(abi) = &minter.abi else {
        return Ok(());
    };

    let expected = Selector::from(ICookieNFT::cookieMintCall::SELECTOR);
    let declared = abi
        .function("cookieMint")
        .is_some_and(|overloads| overloads.iter().any(|f| f.selector() == expected));

    if declared {
        Ok(())
    } else {
        Err(MintError::AbiMismatch { expected })
    }
}

/// Mints cookie jar NFTs through a connected wallet.
pub struct MintOrchestrator<W, N> {
    wallet: Option<W>,
    deployment: Option<Deployment>,
    notifier: N,
    donation_argument: DonationArgument,
}

impl<W: WalletClient, N: Notifier> MintOrchestrator<W, N> {
    /// Creates an orchestrator over an optional wallet and deployment.
    #[must_use]
    pub const fn new(wallet: Option<W>, deployment: Option<Deployment>, notifier: N) -> Self {
        Self {
            wallet,
            deployment,
            notifier,
            donation_argument: DonationArgument::Raw,
        }
    }

    /// Sets what is passed as the `donationAmount` argument.
    #[must_use]
    pub fn with_donation_argument(mut self, donation_argument: DonationArgument) -> Self {
        self.donation_argument = donation_argument;
        self
    }

    /// Mints a cookie jar NFT for `form`.
    ///
    /// Returns `Ok(None)` after notifying the user if a prerequisite is missing, and the
    /// transaction hash otherwise.
    ///
    /// # Errors
    /// Returns an error if the form is invalid or the wallet fails.
    #[tracing::instrument(skip_all, fields(cookie_jar = %form.cookie_jar))]
    pub async fn mint_cookie_jar_nft(
        &self,
        form: &MintFormInput,
    ) -> Result<Option<TxHash>, MintError> {
        tracing::debug!(?form, "minting cookie jar");

        let request = self
            .wallet
            .as_ref()
            .ok_or(Precondition::WalletNotConnected)
            .map_err(MintError::from)
            .and_then(|wallet| {
                build_mint_request(self.deployment.as_ref(), form, self.donation_argument)
                    .map(|request| (wallet, request))
            });

        let (wallet, request) = match request {
            Ok(ready) => ready,
            Err(MintError::Precondition(precondition)) => {
                tracing::info!(%precondition, "mint not started");
                self.notifier.notify(&precondition.notice());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            minter = %request.address,
            implementation = %request.call.cookieJarImp,
            value = ?request.value,
            "submitting cookieMint"
        );

        let prepared = wallet.prepare_write_contract(request).await?;
        let tx_hash = wallet.write_contract(prepared).await?;

        tracing::info!(%tx_hash, "cookie jar minted");
        Ok(Some(tx_hash))
    }
}
