use std::path::Path;

use anyhow::Context;
use clap::Parser;
use cookie_jar_cli::{
    cli::{Commands, CookieJarCli, EncodeCmd, MintCmd},
    config::{parse_config, parse_form, MinterConfig, TracingConfig},
    observability::init_subscriber,
    wallet::ProviderWallet,
};
use cookie_jar_minter::{
    deployment::Deployment,
    encoder::encode_cookie_mint_parameters,
    form::MintFormInput,
    notice::{Notifier, TracingNotifier},
    orchestrator::{build_mint_request, MintError, MintOrchestrator},
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if dotenv::dotenv().is_err() {
        tracing::debug!("No .env file found");
    }

    let cli = CookieJarCli::parse();
    match cli.command {
        Commands::Encode(args) => encode(&args),
        Commands::Mint(args) => mint(args).await,
    }
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let bz = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&bz).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_config(path: &Path) -> anyhow::Result<MinterConfig> {
    parse_config(read_json(path)?).with_context(|| format!("invalid config {}", path.display()))
}

fn read_form(path: &Path) -> anyhow::Result<MintFormInput> {
    parse_form(read_json(path)?).with_context(|| format!("invalid jar form {}", path.display()))
}

fn encode(args: &EncodeCmd) -> anyhow::Result<()> {
    init_subscriber(&TracingConfig::default())?;

    let form = read_form(&args.form)?;
    let initializer = encode_cookie_mint_parameters(&form)?;
    println!("{initializer}");
    Ok(())
}

async fn mint(args: MintCmd) -> anyhow::Result<()> {
    let config = read_config(&args.config)?;
    init_subscriber(&config.tracing)?;
    info!("Logging initialized with level: {}", config.tracing.level());

    let form = read_form(&args.form)?;
    let deployment = Deployment::from_path(&config.deployment)
        .map_err(|e| tracing::warn!(path = %config.deployment.display(), "{e}"))
        .ok();
    if let Some(deployment) = &deployment {
        if deployment.is_empty() {
            tracing::warn!(path = %config.deployment.display(), "deployment lists no contracts");
        } else {
            info!(contracts = deployment.len(), "Loaded deployment");
        }
    }

    if args.dry_run {
        return dry_run(deployment.as_ref(), &form, &config);
    }

    let wallet = match args.private_key.or(config.private_key) {
        Some(private_key) => Some(ProviderWallet::connect(&config.rpc_url, &private_key).await?),
        None => None,
    };

    let orchestrator = MintOrchestrator::new(wallet, deployment, TracingNotifier)
        .with_donation_argument(config.donation_argument);
    if let Some(tx_hash) = orchestrator.mint_cookie_jar_nft(&form).await? {
        println!("{tx_hash}");
    }
    Ok(())
}

fn dry_run(
    deployment: Option<&Deployment>,
    form: &MintFormInput,
    config: &MinterConfig,
) -> anyhow::Result<()> {
    match build_mint_request(deployment, form, config.donation_argument) {
        Ok(request) => {
            println!("to:       {}", request.address);
            println!("value:    {}", request.value.unwrap_or_default());
            println!("calldata: {}", request.calldata());
            Ok(())
        }
        Err(MintError::Precondition(precondition)) => {
            TracingNotifier.notify(&precondition.notice());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
