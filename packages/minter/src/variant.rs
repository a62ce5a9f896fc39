//! The cookie jar implementation kinds a mint can target.

use std::{fmt, str::FromStr};

/// A jar implementation kind.
///
/// The tag of each variant is also the name of its implementation contract in the
/// deployment manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JarVariant {
    /// Claimants must hold at least `threshold` of an ERC-20 token.
    Erc20,
    /// Claimants must hold at least `threshold` tokens of an ERC-721 collection.
    Erc721,
    /// Claimants must hold at least `threshold` shares and/or loot of a Baal DAO.
    Baal,
    /// Claimants must be on a fixed allowlist.
    List,
}

/// Returned when a tag does not name a known jar implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported cookie jar variant: {0:?}")]
pub struct UnsupportedVariant(pub String);

impl JarVariant {
    /// All supported variants.
    pub const ALL: [Self; 4] = [Self::Erc20, Self::Erc721, Self::Baal, Self::List];

    /// Returns the variant tag, which is also the implementation contract name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Erc20 => "ERC20CookieJar6551",
            Self::Erc721 => "ERC721CookieJar6551",
            Self::Baal => "BaalCookieJar6551",
            Self::List => "ListCookieJar6551",
        }
    }
}

impl fmt::Display for JarVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JarVariant {
    type Err = UnsupportedVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| UnsupportedVariant(s.to_string()))
    }
}
