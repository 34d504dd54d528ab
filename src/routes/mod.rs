pub mod projects;
pub mod race;
use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::{error::Error, sync::Arc, time::Duration};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    routes::{projects::project_routes, race::race_routes},
    utils::{
        clock::SystemClock,
        config::Config,
        ergast_client::ErgastClient,
        projects::ProjectCatalog,
        rate_limiter::RateLimiter,
        season_loader::prebuild_season_pages,
        state::AppState,
    },
};

pub async fn make_app(config: Config) -> Result<Router, Box<dyn Error>> {
    info!("Initializing application...");

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let rate_limiter = RateLimiter::new(config.max_concurrent_requests, config.min_request_delay_ms);
    let stats_client = Arc::new(ErgastClient::new(
        http_client,
        config.ergast_base_url.clone(),
        rate_limiter,
    ));
    info!(base_url = %config.ergast_base_url, "External clients initialized successfully");

    let projects = ProjectCatalog::load(config.projects_path.as_deref()).await?;

    let state = Arc::new(AppState::new(
        config,
        stats_client,
        Arc::new(SystemClock),
        projects,
    ));

    if state.config.prebuild_on_startup {
        tokio::spawn(prebuild_season_pages(
            state.season_pages.clone(),
            state.stats_client.clone(),
            state.clock.clone(),
        ));
    }

    let app = build_router(state);
    info!("Application initialized successfully");

    Ok(app)
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .nest("/f1", race_routes())
        .nest("/work/code", project_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    return (StatusCode::OK, Json(json!({"message": "Hello World"}))).into_response();
}
