//! ABI encoding of the jar initializer.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;
use cookie_jar_solidity_types::initializers::{
    BaalJarInitializer, Erc20JarInitializer, Erc721JarInitializer, ListJarInitializer,
};
use cookie_jar_utils::{
    ensure,
    parse::{address_or_zero, is_address, parse_big_int, ParseError},
};

use crate::{
    form::MintFormInput,
    variant::{JarVariant, UnsupportedVariant},
};

/// Errors returned when the form does not describe a valid jar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The variant tag names no known jar implementation.
    #[error(transparent)]
    UnsupportedVariant(#[from] UnsupportedVariant),
    /// A numeric field could not be parsed.
    #[error("invalid `{field}`: {source}")]
    Parse {
        /// The form field, as named in the form JSON.
        field: &'static str,
        /// The parse failure.
        source: ParseError,
    },
    /// The jar owner is missing, malformed or the zero address.
    #[error("invalid jar owner")]
    InvalidOwner,
    /// The claim period is zero.
    #[error("cookie period must be greater than zero")]
    ZeroPeriod,
    /// The claim amount is zero.
    #[error("cookie amount must be greater than zero")]
    ZeroCookieAmount,
    /// The gating token or DAO is missing, malformed or the zero address.
    #[error("invalid `{0}` address")]
    InvalidGate(&'static str),
    /// The gating threshold is zero.
    #[error("`{0}` must be greater than zero")]
    ZeroThreshold(&'static str),
    /// A Baal jar counts neither shares nor loot.
    #[error("a Baal jar must use shares, loot or both")]
    NoBaalBalance,
    /// An allowlist entry is malformed or the zero address.
    #[error("invalid allowlist entry {index}: {value:?}")]
    InvalidAllowlistEntry {
        /// Position of the entry in the allowlist.
        index: usize,
        /// The entry as typed.
        value: String,
    },
}

/// The parameters shared by every jar initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CommonParameters {
    owner: Address,
    period_length: U256,
    cookie_amount: U256,
    cookie_token: Address,
}

/// Validates the form and ABI-encodes the initializer of the selected jar variant.
///
/// The leading parameters `(owner, periodLength, cookieAmount, cookieToken)` are
/// common to every variant; the gating parameters that follow depend on it.
///
/// # Errors
/// Returns an error if the variant is unknown or any required field is missing,
/// malformed or zero.
pub fn encode_cookie_mint_parameters(data: &MintFormInput) -> Result<Bytes, EncodeError> {
    let variant = data.cookie_jar.parse::<JarVariant>()?;
    let common = common_parameters(data)?;

    let encoded = match variant {
        JarVariant::Erc20 => {
            let (erc20_addr, threshold) =
                gate(&data.erc20_token, "erc20Token", &data.erc20_threshold, "erc20Threshold")?;
            Erc20JarInitializer {
                owner: common.owner,
                periodLength: common.period_length,
                cookieAmount: common.cookie_amount,
                cookieToken: common.cookie_token,
                erc20Addr: erc20_addr,
                threshold,
            }
            .abi_encode_params()
        }
        JarVariant::Erc721 => {
            let (erc721_addr, threshold) = gate(
                &data.erc721_token,
                "erc721Token",
                &data.erc721_threshold,
                "erc721Threshold",
            )?;
            Erc721JarInitializer {
                owner: common.owner,
                periodLength: common.period_length,
                cookieAmount: common.cookie_amount,
                cookieToken: common.cookie_token,
                erc721Addr: erc721_addr,
                threshold,
            }
            .abi_encode_params()
        }
        JarVariant::Baal => {
            let (dao, threshold) =
                gate(&data.dao_address, "daoAddress", &data.dao_threshold, "daoThreshold")?;
            ensure!(data.use_shares || data.use_loot, EncodeError::NoBaalBalance);
            BaalJarInitializer {
                owner: common.owner,
                periodLength: common.period_length,
                cookieAmount: common.cookie_amount,
                cookieToken: common.cookie_token,
                dao,
                threshold,
                useShares: data.use_shares,
                useLoot: data.use_loot,
            }
            .abi_encode_params()
        }
        JarVariant::List => ListJarInitializer {
            owner: common.owner,
            periodLength: common.period_length,
            cookieAmount: common.cookie_amount,
            cookieToken: common.cookie_token,
            allowlist: allowlist(&data.allowlist)?,
        }
        .abi_encode_params(),
    };

    tracing::debug!(%variant, len = encoded.len(), "encoded cookie jar initializer");
    Ok(encoded.into())
}

fn common_parameters(data: &MintFormInput) -> Result<CommonParameters, EncodeError> {
    let owner = address_or_zero(&data.receiver);
    let period_length = parse_field(&data.cookie_period, "cookiePeriod")?;
    let cookie_amount = parse_field(&data.cookie_amount, "cookieAmount")?;
    let cookie_token = address_or_zero(&data.cookie_token);

    ensure!(!owner.is_zero(), EncodeError::InvalidOwner);
    ensure!(!period_length.is_zero(), EncodeError::ZeroPeriod);
    ensure!(!cookie_amount.is_zero(), EncodeError::ZeroCookieAmount);

    Ok(CommonParameters {
        owner,
        period_length,
        cookie_amount,
        cookie_token,
    })
}

/// Parses a gating address and its threshold, both of which must be non-zero.
fn gate(
    address: &str,
    address_field: &'static str,
    threshold: &str,
    threshold_field: &'static str,
) -> Result<(Address, U256), EncodeError> {
    let address = address_or_zero(address);
    let threshold = parse_field(threshold, threshold_field)?;

    ensure!(!address.is_zero(), EncodeError::InvalidGate(address_field));
    ensure!(
        !threshold.is_zero(),
        EncodeError::ZeroThreshold(threshold_field)
    );
    Ok((address, threshold))
}

fn allowlist(entries: &[String]) -> Result<Vec<Address>, EncodeError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, value)| {
            is_address(value)
                .filter(|address| !address.is_zero())
                .ok_or_else(|| EncodeError::InvalidAllowlistEntry {
                    index,
                    value: value.clone(),
                })
        })
        .collect()
}

pub(crate) fn parse_field(value: &str, field: &'static str) -> Result<U256, EncodeError> {
    parse_big_int(value).map_err(|source| EncodeError::Parse { field, source })
}
