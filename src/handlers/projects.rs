use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::error::Error,
    utils::{
        carousel::{CarouselEvent, CarouselState},
        project_card::CodeProjectCard,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct CardQuery {
    preview: Option<usize>,
}

pub async fn list_projects(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let cards: Vec<CodeProjectCard> = state
        .projects
        .all()
        .iter()
        .map(|project| CodeProjectCard::new(project, CarouselState::default()))
        .collect();
    (StatusCode::OK, Json(json!({ "projects": cards })))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<CardQuery>,
) -> Result<Response, Error> {
    let project = state.projects.get(&slug)?;

    let mut carousel = CarouselState::default();
    if let Some(i) = params.preview {
        (carousel, _) = carousel.transition(CarouselEvent::Select(i), project.previews.len());
    }

    Ok((StatusCode::OK, Json(CodeProjectCard::new(project, carousel))).into_response())
}
