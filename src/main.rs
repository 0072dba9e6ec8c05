use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use yac::api::{HttpRemoteApi, RemoteApi};
use yac::cli::{run_headless, Cli};
use yac::config::Config;
use yac::identity::{EnvTokenSource, IdentityBackend, RestIdentityBackend};
use yac::logging::{init_stderr_tracing, init_tracing};
use yac::saga::Coordinator;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_some() {
        init_stderr_tracing();
    } else {
        init_tracing();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate().context("Invalid --api-url")?;
    }

    let identity: Arc<dyn IdentityBackend> = Arc::new(
        RestIdentityBackend::new(&config.identity, Arc::new(EnvTokenSource))
            .context("Failed to build identity client")?,
    );
    let api: Arc<dyn RemoteApi> =
        Arc::new(HttpRemoteApi::new(&config.api).context("Failed to build API client")?);

    let coordinator = Coordinator::new(Arc::clone(&identity), api)
        .log_actions(config.coordinator.log_actions)
        .start();

    let Some(command) = cli.command else {
        let handle = coordinator.clone();
        let runtime = tokio::runtime::Handle::current();
        tokio::task::spawn_blocking(move || yac::ui::run(handle, identity, runtime))
            .await
            .context("UI thread panicked")?
            .context("Terminal error")?;
        coordinator.shutdown();
        return Ok(());
    };

    let mut stdout = std::io::stdout();
    let failed = tokio::select! {
        result = run_headless(&coordinator, command.into_intent(), &mut stdout) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted");
            coordinator.shutdown();
            std::process::exit(130);
        }
    };
    coordinator.shutdown();

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
