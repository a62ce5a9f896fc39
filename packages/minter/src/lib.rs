//! Validation, encoding and submission of Cookie Jar NFT mints.
//!
//! A mint turns a [`form::MintFormInput`] into a single `cookieMint` call on the
//! `CookieNFT` minter listed in a [`deployment::Deployment`]. The
//! [`orchestrator::MintOrchestrator`] drives the whole action through an injected
//! [`wallet::WalletClient`] and reports missing prerequisites through a
//! [`notice::Notifier`].

#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod deployment;
pub mod details;
pub mod donation;
pub mod encoder;
pub mod form;
pub mod notice;
pub mod orchestrator;
pub mod variant;
pub mod wallet;
