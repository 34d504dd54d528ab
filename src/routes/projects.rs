use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::projects::{get_project, list_projects},
    utils::state::AppState,
};

pub fn project_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_projects))
        .route("/{slug}", get(get_project))
}
