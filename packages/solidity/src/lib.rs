//! Solidity types for the Cookie Jar contracts

#![deny(clippy::nursery, clippy::pedantic, warnings, unused_crate_dependencies)]

pub mod cookie_nft;
pub mod initializers;
