#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod commands;
mod navigator;

use std::process::ExitCode;
use std::sync::Arc;

use args::Args;
use clap::Parser;
use scriptorium_client::{ApiClient, ApiError, CredentialStore, FileCredentialStore};
use scriptorium_config::Config;
use scriptorium_controller::{ErrorController, ErrorView};

use crate::navigator::TerminalNavigator;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(environment) = args.env {
        config.environment = environment;
    }

    // Initialize telemetry
    scriptorium_telemetry::init(&config.telemetry, args.log_filter.as_deref())?;

    let endpoint = config.endpoint();
    let base_url = endpoint.base_url()?;

    tracing::debug!(
        config_path = %args.config.display(),
        environment = %config.environment,
        base_url = %base_url,
        "starting scriptorium"
    );

    let credentials: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new(config.session.token_path()));
    let navigator = TerminalNavigator::new(&endpoint.host, &config.session.login_path)?;

    let client = ApiClient::builder(base_url)
        .timeout(config.api.timeout)
        .credentials(Arc::clone(&credentials))
        .navigator(Arc::new(navigator))
        .build()?;

    let controller = ErrorController::new();
    let outcome = controller
        .execute(commands::run(&client, credentials.as_ref(), args.command))
        .await;

    match outcome {
        Some(output) => {
            if let Some(value) = output {
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            if let Some(error) = controller.state().error {
                eprintln!("{}", failure_report(&error, args.details));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Text printed for a failed command; re-running is up to the user, so no actions are offered
fn failure_report(error: &ApiError, details: bool) -> String {
    ErrorView::new(error).show_details(details).render()
}
