mod config;
mod error;
mod routes;


use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::ServeError;

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "depot host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let config = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServeError::LeptosConfig(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(ServeError::Bind)?;

    tracing::info!(%addr, "depot listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
