//! The jar metadata stored on-chain with the NFT.

use crate::form::MintFormInput;

/// Jar metadata, stored by the minter as a JSON string.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct JarDetails {
    /// The jar variant tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Jar title.
    pub name: String,
    /// Jar description.
    pub description: String,
    /// Link to the DAO or jar page.
    pub link: String,
}

impl JarDetails {
    /// Serializes the details as compact JSON with keys `type`, `name`, `description`,
    /// `link` in that order.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&MintFormInput> for JarDetails {
    fn from(form: &MintFormInput) -> Self {
        Self {
            kind: form.cookie_jar.clone(),
            name: form.title.clone(),
            description: form.description.clone(),
            link: form.link.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_json() {
        let form = MintFormInput {
            cookie_jar: "ERC20CookieJar6551".to_string(),
            title: "Moloch Pastries".to_string(),
            description: "This is where you add some \"more\" content".to_string(),
            link: "app.daohaus.club/0x64/0x0".to_string(),
            ..Default::default()
        };

        assert_eq!(
            JarDetails::from(&form).to_json().unwrap(),
            r#"{"type":"ERC20CookieJar6551","name":"Moloch Pastries","description":"This is where you add some \"more\" content","link":"app.daohaus.club/0x64/0x0"}"#
        );
    }
}
