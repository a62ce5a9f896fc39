//! Contains the command line interface for the application.

use std::path::PathBuf;

use clap::{command, Parser};

/// The command line interface for minting cookie jars.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CookieJarCli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// The subcommands of the cli.
#[derive(Clone, Debug, Parser)]
pub enum Commands {
    /// Print the ABI-encoded initializer of a jar form.
    Encode(EncodeCmd),
    /// Mint a cookie jar NFT.
    Mint(MintCmd),
}

/// The arguments for the `encode` subcommand.
#[derive(Clone, Debug, Parser)]
#[command(about = "Print the ABI-encoded initializer of a jar form")]
pub struct EncodeCmd {
    /// Path to the jar form JSON.
    #[clap(long, short = 'f')]
    pub form: PathBuf,
}

/// The arguments for the `mint` subcommand.
#[derive(Clone, Debug, Parser)]
#[command(about = "Mint a cookie jar NFT through the CookieNFT minter")]
pub struct MintCmd {
    /// Path to the configuration JSON.
    #[clap(long, short = 'c')]
    pub config: PathBuf,

    /// Path to the jar form JSON.
    #[clap(long, short = 'f')]
    pub form: PathBuf,

    /// The hex private key of the minting account. Overrides the config.
    #[clap(long, env = "COOKIE_JAR_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Print the prepared call instead of sending it.
    #[clap(long)]
    pub dry_run: bool,
}
