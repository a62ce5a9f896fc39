//! Defines the configuration of the `cookie-jar` tool.

use std::{path::PathBuf, str::FromStr};

use cookie_jar_minter::{donation::DonationArgument, form::MintFormInput};
use tracing::Level;

/// The top level configuration.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::module_name_repetitions)]
pub struct MinterConfig {
    /// The JSON-RPC endpoint of the chain to mint on.
    pub rpc_url: String,
    /// The hex private key of the minting account.
    #[serde(default)]
    pub private_key: Option<String>,
    /// Path to the deployment manifest.
    pub deployment: PathBuf,
    /// What to pass as the `donationAmount` argument of `cookieMint`.
    #[serde(default)]
    pub donation_argument: DonationArgument,
    /// The configuration for logging.
    #[serde(default)]
    pub tracing: TracingConfig,
}

/// The configuration for logging.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
#[allow(clippy::module_name_repetitions)]
pub struct TracingConfig {
    /// The log level, `info` if unset or unknown.
    #[serde(default)]
    pub level: String,
}

impl TracingConfig {
    /// Returns the log level.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_str(&self.level).unwrap_or(Level::INFO)
    }
}

/// Parse a configuration value into the target struct while producing detailed
/// path-aware error messages.
///
/// # Errors
/// Returns an [`anyhow::Error`] with the precise path and the original serde
/// error message.
pub fn parse_config<T>(value: serde_json::Value) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    deserialize_with_path(&value, "config")
}

/// Parse a submitted jar form, reporting the path of the offending field.
///
/// # Errors
/// Returns an [`anyhow::Error`] naming the form field that failed to deserialize.
pub fn parse_form(value: serde_json::Value) -> anyhow::Result<MintFormInput> {
    deserialize_with_path(&value, "form")
}

fn deserialize_with_path<T>(value: &serde_json::Value, what: &str) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    // Going through the string keeps line/column information in the error.
    let json_string = value.to_string();

    let mut deserializer = serde_json::Deserializer::from_str(&json_string);
    serde_path_to_error::deserialize::<_, T>(&mut deserializer)
        .map_err(|e| anyhow::anyhow!("{what} error at {}: {}", e.path(), e))
}
