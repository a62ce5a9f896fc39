//! Initializer tuples of the cookie jar implementations.
//!
//! Each struct is encoded with `abi_encode_params`, i.e. as a flat parameter list
//! without an outer tuple offset, which is what the jar implementations decode in
//! their `setUp`.

alloy_sol_types::sol! {
    /// Initializer of `ERC20CookieJar6551`.
    #[derive(Debug, PartialEq, Eq)]
    struct Erc20JarInitializer {
        address owner;
        uint256 periodLength;
        uint256 cookieAmount;
        address cookieToken;
        address erc20Addr;
        uint256 threshold;
    }

    /// Initializer of `ERC721CookieJar6551`.
    #[derive(Debug, PartialEq, Eq)]
    struct Erc721JarInitializer {
        address owner;
        uint256 periodLength;
        uint256 cookieAmount;
        address cookieToken;
        address erc721Addr;
        uint256 threshold;
    }

    /// Initializer of `BaalCookieJar6551`.
    #[derive(Debug, PartialEq, Eq)]
    struct BaalJarInitializer {
        address owner;
        uint256 periodLength;
        uint256 cookieAmount;
        address cookieToken;
        address dao;
        uint256 threshold;
        bool useShares;
        bool useLoot;
    }

    /// Initializer of `ListCookieJar6551`.
    #[derive(Debug, PartialEq, Eq)]
    struct ListJarInitializer {
        address owner;
        uint256 periodLength;
        uint256 cookieAmount;
        address cookieToken;
        address[] allowlist;
    }
}
