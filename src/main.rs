//! Health Risk server entry point.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use health_risk::adapters::classifier::ArtifactLoader;
use health_risk::adapters::http::{app_router, PredictionAppState};
use health_risk::application::PredictHealthHandler;
use health_risk::config::{AppConfig, ServerConfig};
use health_risk::ports::RiskClassifier;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.server);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Server failed to start");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let classifier = ArtifactLoader::from_config(&config.model).load().await?;
    let info = classifier.info();
    info!(
        backend = %info.name,
        classes = ?info.classes,
        fingerprint = info.fingerprint.as_deref().unwrap_or("-"),
        "Classifier ready"
    );

    let handler = PredictHealthHandler::new(Arc::new(classifier), config.scoring.to_policy());
    let app = app_router(PredictionAppState::new(handler), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Health risk server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
