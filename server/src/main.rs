mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is the normal case.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "valentine server exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;

    let app = routes::app(&config, conf.leptos_options);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "valentine listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
