// Main entry point - Dependency injection and publishing
use std::sync::Arc;

use signal_dashboards::infrastructure::config::{load_api_config, load_dashboards_config};
use signal_dashboards::infrastructure::signalfx_repository::SignalFxRepository;
use signal_dashboards::infrastructure::terminal_confirmation::TerminalConfirmation;
use signal_dashboards::{DashboardResolver, PublishOutcome};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let api_config = load_api_config()?;
    let dashboards_config = load_dashboards_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(SignalFxRepository::new(
        api_config.api.base_url,
        api_config.api.token,
    ));

    // Create resolver (application layer)
    let resolver = DashboardResolver::new(repository, Arc::new(TerminalConfirmation));

    let options = dashboards_config.publish_options();
    let mut definitions = dashboards_config.definitions();
    tracing::info!("Publishing {} dashboards ({:?})", definitions.len(), options);

    let results = resolver.publish_all(&mut definitions, options).await;

    let mut failures = 0;
    for (definition, result) in definitions.iter().zip(results) {
        let name = definition.name.as_deref().unwrap_or("<unnamed>");
        match result {
            Ok(PublishOutcome::DryRun { action, body }) => {
                tracing::info!("{}: would {:?}", name, action);
                println!("{}", body);
            }
            Ok(outcome) => {
                tracing::info!("{}: {:?}", name, outcome);
            }
            Err(e) => {
                failures += 1;
                tracing::error!("{}: {}", name, e);
                if e.is_recoverable_conflict() {
                    tracing::info!("Set mode = \"force\" or \"interactive\" to overwrite it");
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} dashboards failed to publish", failures, definitions.len());
    }

    Ok(())
}
