//! The mint form as submitted by the user.

/// The fields of the create-jar form.
///
/// Numeric fields hold the text the user typed; they are parsed during encoding.
/// Deserializes from the form's camelCase JSON, with every field optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MintFormInput {
    /// The jar variant tag, e.g. `ERC20CookieJar6551`.
    pub cookie_jar: String,
    /// The owner of the jar (an EOA or a Safe).
    pub receiver: String,
    /// Seconds between two claims of the same claimant.
    pub cookie_period: String,
    /// Amount of `cookie_token` paid per claim.
    pub cookie_amount: String,
    /// The token paid out. Empty or invalid means the native token.
    pub cookie_token: String,

    /// ERC-20 gating token.
    pub erc20_token: String,
    /// Minimum ERC-20 balance to claim.
    pub erc20_threshold: String,

    /// ERC-721 gating collection.
    pub erc721_token: String,
    /// Minimum number of ERC-721 tokens to claim.
    pub erc721_threshold: String,

    /// Baal DAO whose members may claim.
    pub dao_address: String,
    /// Minimum shares and/or loot balance to claim.
    pub dao_threshold: String,
    /// Count DAO shares towards the threshold.
    pub use_shares: bool,
    /// Count DAO loot towards the threshold.
    pub use_loot: bool,

    /// Addresses allowed to claim from a list jar.
    pub allowlist: Vec<String>,

    /// Whether the user opted into a donation.
    pub donation: bool,
    /// The donation in ether.
    pub donation_amount: String,

    /// Jar title.
    pub title: String,
    /// Jar description.
    pub description: String,
    /// Link to the DAO or jar page.
    pub link: String,
}
