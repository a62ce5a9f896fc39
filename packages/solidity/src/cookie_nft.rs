//! Solidity types for CookieNFT.sol

alloy_sol_types::sol! {
    #[derive(Debug, PartialEq, Eq)]
    #[allow(missing_docs)]
    interface ICookieNFT {
        function cookieMint(
            address cookieJarImp,
            bytes memory initializer,
            string memory details,
            address donationToken,
            uint256 donationAmount
        ) external payable;
    }
}

/// The deployment manifest name of the minter contract.
pub const COOKIE_NFT_CONTRACT_NAME: &str = "CookieNFT";
