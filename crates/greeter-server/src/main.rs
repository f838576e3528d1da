use anyhow::Context;

use greeter_core::Config;
use greeter_server::{server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before logging so RUST_LOG may come from .env; real environment
    // variables take precedence.
    let dotenv_error = telemetry::load_dotenv();

    telemetry::init_logging();

    if let Some(err) = dotenv_error {
        tracing::warn!("Failed to load .env: {err}");
    }

    let config = Config::from_env().inspect_err(|err| {
        tracing::error!("Invalid configuration: {err}");
    })?;
    let addr = config.socket_addr();

    let listener = server::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    server::serve(listener, server::shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Greeter server stopped");
    Ok(())
}
