//! The `cookie-jar` command line tool.

#![deny(clippy::nursery, clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod observability;
pub mod wallet;
