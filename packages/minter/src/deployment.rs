//! The deployment manifest listing the contracts a mint can reach.

use std::{fs, path::Path};

use alloy_json_abi::JsonAbi;
use alloy_primitives::Address;

/// A deployed contract.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    /// The contract name, e.g. `CookieNFT` or `ERC20CookieJar6551`.
    pub contract_name: String,
    /// The address the contract is deployed at.
    pub contract_address: Address,
    /// The contract ABI, if the manifest ships one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<JsonAbi>,
}

/// Errors returned when loading a deployment manifest.
#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    /// The manifest file could not be read.
    #[error("failed to read deployment manifest: {0}")]
    Io(#[from] std::io::Error),
    /// The manifest is not a JSON list of contract records.
    #[error("failed to parse deployment manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// The ordered list of deployed contracts on one chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Deployment(pub Vec<ContractRecord>);

impl Deployment {
    /// Loads a manifest from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeploymentError> {
        let bz = fs::read(path)?;
        Ok(serde_json::from_slice(&bz)?)
    }

    /// Returns the first contract named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ContractRecord> {
        self.0.iter().find(|contract| contract.contract_name == name)
    }

    /// Returns the number of contracts in the manifest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the manifest lists no contracts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ContractRecord>> for Deployment {
    fn from(contracts: Vec<ContractRecord>) -> Self {
        Self(contracts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use serde_json::json;
    use std::io::Write;

    fn manifest_json() -> serde_json::Value {
        json!([
            {
                "contractName": "CookieNFT",
                "contractAddress": "0x00000000000000000000000000000000000000aa",
                "abi": [
                    {
                        "type": "function",
                        "name": "cookieMint",
                        "inputs": [
                            { "name": "cookieJarImp", "type": "address", "internalType": "address" },
                            { "name": "_initializer", "type": "bytes", "internalType": "bytes" },
                            { "name": "details", "type": "string", "internalType": "string" },
                            { "name": "donationToken", "type": "address", "internalType": "address" },
                            { "name": "donationAmount", "type": "uint256", "internalType": "uint256" }
                        ],
                        "outputs": [],
                        "stateMutability": "payable"
                    }
                ]
            },
            {
                "contractName": "ERC20CookieJar6551",
                "contractAddress": "0x00000000000000000000000000000000000000bb"
            },
            {
                "contractName": "ERC20CookieJar6551",
                "contractAddress": "0x00000000000000000000000000000000000000cc"
            }
        ])
    }

    #[test]
    fn test_find_first_match() {
        let deployment: Deployment = serde_json::from_value(manifest_json()).unwrap();
        assert_eq!(deployment.len(), 3);

        let minter = deployment.find("CookieNFT").unwrap();
        assert_eq!(
            minter.contract_address,
            address!("0x00000000000000000000000000000000000000aa")
        );
        assert!(minter.abi.as_ref().unwrap().function("cookieMint").is_some());

        let jar = deployment.find("ERC20CookieJar6551").unwrap();
        assert_eq!(
            jar.contract_address,
            address!("0x00000000000000000000000000000000000000bb")
        );
        assert!(jar.abi.is_none());

        assert!(deployment.find("cookienft").is_none());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(manifest_json().to_string().as_bytes())
            .unwrap();

        let deployment = Deployment::from_path(file.path()).unwrap();
        assert!(deployment.find("CookieNFT").is_some());
    }

    #[test]
    fn test_empty_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let deployment = Deployment::from_path(file.path()).unwrap();
        assert!(deployment.is_empty());
        assert_eq!(deployment.len(), 0);
        assert!(deployment.find("CookieNFT").is_none());
    }

    #[test]
    fn test_from_path_errors() {
        assert!(matches!(
            Deployment::from_path("/nonexistent/deployment.json"),
            Err(DeploymentError::Io(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"contractName": "CookieNFT"}"#).unwrap();
        assert!(matches!(
            Deployment::from_path(file.path()),
            Err(DeploymentError::Json(_))
        ));
    }
}
