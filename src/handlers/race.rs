use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use tracing::info;

use crate::{
    models::{error::Error, page::SeasonPathsResponse, season::{season_href, Season}},
    utils::{
        navigator::SeasonNavigator, season_loader::season_page_builder, season_paths::season_paths,
        state::AppState,
    },
};

pub const PAGE_CACHE_HEADER: &str = "x-page-cache";

pub async fn get_season_page(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Result<Response, Error> {
    let season: Season = year.parse()?;
    let build = season_page_builder(state.stats_client.clone(), state.clock.clone(), season);
    let (props, status) = state.season_pages.get_or_build(season, build).await?;
    info!(%season, cache = status.as_str(), "serving season page");

    Ok((
        StatusCode::OK,
        [(PAGE_CACHE_HEADER, status.as_str())],
        Json(props.as_ref()),
    )
        .into_response())
}

pub async fn get_current_season(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Redirect::temporary(&season_href(state.clock.current_year()))
}

#[derive(Deserialize)]
pub struct SelectQuery {
    year: i32,
}

/// Target of the year selector form.
pub async fn select_season(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectQuery>,
) -> Result<Redirect, Error> {
    let current_year = state.clock.current_year();
    let navigator = SeasonNavigator::new(Season::new(current_year)?, current_year);
    navigator
        .select(query.year)
        .map(|href| Redirect::to(&href))
        .ok_or_else(|| Error::new(StatusCode::NOT_FOUND, "No such season to select"))
}

pub async fn go_previous_season(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Result<Redirect, Error> {
    let navigator = SeasonNavigator::new(year.parse()?, state.clock.current_year());
    navigator
        .go_previous()
        .map(|href| Redirect::to(&href))
        .ok_or_else(|| Error::new(StatusCode::NOT_FOUND, "No earlier season"))
}

pub async fn go_next_season(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Result<Redirect, Error> {
    let navigator = SeasonNavigator::new(year.parse()?, state.clock.current_year());
    navigator
        .go_next()
        .map(|href| Redirect::to(&href))
        .ok_or_else(|| Error::new(StatusCode::NOT_FOUND, "No later season"))
}

pub async fn get_season_paths(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let paths = season_paths(state.clock.current_year());
    (
        StatusCode::OK,
        Json(SeasonPathsResponse {
            paths: paths.paths,
            fallback: paths.fallback.as_str(),
        }),
    )
}
