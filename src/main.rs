mod cli;
mod commands;
mod error;
mod output;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use cli::{Cli, Command};
use easypost::{ClientConfig, EasyPostClient, RequestContext};
use error::CliError;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    let cancel = setup_signal_handlers();

    if let Err(e) = run(cli, cancel).await {
        tracing::error!(error = %e, "easypost-cli failed");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli, cancel: CancellationToken) -> Result<(), CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
    }
    info!(base_url = %config.base_url, timeout = ?config.timeout, "easypost-cli starting");

    let client = EasyPostClient::new(config)?;
    let ctx = RequestContext::new().with_cancellation(cancel);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Addresses(args) => {
            commands::list_addresses(&client, &ctx, &args, cli.json, &mut out).await?;
        }
        Command::Shipments(args) => {
            commands::list_shipments(&client, &ctx, &args, cli.json, &mut out).await?;
        }
        Command::Address { id } => {
            let address = client.get_address(&ctx, &id).await?;
            output::write_address(&mut out, cli.json, &address)?;
        }
        Command::Verify { id } => {
            let address = client.verify_address(&ctx, &id).await?;
            output::write_address(&mut out, cli.json, &address)?;
        }
        Command::PaymentMethods => {
            let methods = client.retrieve_payment_methods(&ctx).await?;
            output::write_payment_methods(&mut out, cli.json, &methods)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Register SIGINT and SIGTERM handlers that trigger the returned token.
fn setup_signal_handlers() -> CancellationToken {
    let cancel = CancellationToken::new();

    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("received SIGINT, shutting down");
        cancel_clone.cancel();
    });

    #[cfg(unix)]
    {
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            let mut sig = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(sig) => sig,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to register SIGTERM handler");
                    return;
                }
            };
            sig.recv().await;
            info!("received SIGTERM, shutting down");
            cancel_clone.cancel();
        });
    }

    cancel
}
