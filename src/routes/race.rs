use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::race::{
        get_current_season, get_season_page, get_season_paths, go_next_season, go_previous_season,
        select_season,
    },
    utils::state::AppState,
};

pub fn race_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_current_season))
        .route("/paths", get(get_season_paths))
        .route("/select", get(select_season))
        .route("/{year}", get(get_season_page))
        .route("/{year}/previous", get(go_previous_season))
        .route("/{year}/next", get(go_next_season))
}
