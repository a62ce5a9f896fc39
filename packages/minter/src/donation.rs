//! The optional native-token donation attached to a mint.

use alloy_primitives::{utils::parse_ether, U256};

use crate::{
    encoder::{parse_field, EncodeError},
    form::MintFormInput,
};

/// Errors returned when the donation amount cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DonationError {
    /// The donation is not a decimal ether amount.
    #[error("invalid donation amount {0:?}: {1}")]
    InvalidAmount(String, String),
    /// The raw donation argument is not an integer.
    #[error(transparent)]
    Argument(#[from] EncodeError),
}

/// What to pass as the `donationAmount` argument of `cookieMint`.
///
/// The attached transaction value is always the donation converted to wei; the two
/// options differ only in the call argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationArgument {
    /// Pass the amount as typed, read as an integer. Matches the web front-end.
    #[default]
    Raw,
    /// Pass the same wei amount that is attached as value, zero without a donation.
    Wei,
}

/// Returns the wei value to attach to the mint.
///
/// The value is only set if the user opted into a donation and the amount is positive.
///
/// # Errors
/// Returns an error if the user opted in and the amount is not a decimal ether amount.
pub fn donation_value(form: &MintFormInput) -> Result<Option<U256>, DonationError> {
    let amount = form.donation_amount.trim();
    if !form.donation || amount.is_empty() {
        return Ok(None);
    }
    // non-positive amounts attach no value
    if amount.starts_with('-') {
        return Ok(None);
    }

    let value = parse_ether(amount)
        .map_err(|e| DonationError::InvalidAmount(amount.to_string(), e.to_string()))?;
    Ok(Some(value).filter(|value| !value.is_zero()))
}

/// Returns the `donationAmount` argument of `cookieMint`.
///
/// # Errors
/// Returns an error if `argument` is [`DonationArgument::Raw`] and the typed amount is
/// not an integer.
pub fn donation_argument(
    form: &MintFormInput,
    argument: DonationArgument,
    value: Option<U256>,
) -> Result<U256, DonationError> {
    match argument {
        DonationArgument::Raw => Ok(parse_field(&form.donation_amount, "donationAmount")?),
        DonationArgument::Wei => Ok(value.unwrap_or_default()),
    }
}
