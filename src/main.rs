mod config;
mod error;
mod models;
mod routes;
mod sources;
mod storage;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Config};
use crate::models::collection::VacancyCollection;
use crate::routes::AppState;
use crate::sources::headhunter::HeadHunter;

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn serve(config: Config, listen_addr: String) -> anyhow::Result<()> {
    let source = HeadHunter::new(&config.api_base_url, config.per_page)?;
    let state = AppState {
        collection: VacancyCollection::shared(),
        source: Arc::new(source),
        data_dir: config.data_dir.clone(),
    };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .merge(routes::ui::router())
        .merge(routes::api::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!("Listening on {listen_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vacancyhub=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();

    match config.resolved_command() {
        Command::Serve { listen_addr } => serve(config, listen_addr).await,
        Command::Fetch {
            keyword,
            pages,
            format,
        } => sources::runner::run_once(&config, &keyword, pages, &format).await,
    }
}
