mod config;
mod error;
mod models;
mod services;

use axum::{
    Router,
    body::Bytes,
    http::Method,
    response::{IntoResponse, Response},
    routing::{any, get},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::ProcessError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,card_processor=debug"));
    fmt().with_env_filter(env_filter).init();

    let config = config::ServerConfig::from_env()?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app()).await?;

    Ok(())
}

fn app() -> Router {
    Router::new()
        .route("/process-audio", any(process_audio))
        .route("/.netlify/functions/process-audio", any(process_audio))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn process_audio(method: Method, body: Bytes) -> Response {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("process_audio", %request_id, %method);

    async move {
        match services::processor::handle(&method, &body) {
            Ok(outcome) => outcome.into_response(),
            Err(err) => {
                match &err {
                    ProcessError::Internal(source) => {
                        tracing::error!("Processing error: {:#}", source);
                    }
                    _ => tracing::debug!("Rejected card request: {}", err),
                }
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await
}
