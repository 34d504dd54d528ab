use std::{future::Future, pin::Pin, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    models::{
        error::StatsError,
        page::{F1PageProps, SeasonPageInput},
        season::Season,
    },
    utils::{
        clock::Clock, ergast_client::SeasonStatsClient, navigator::SeasonNavigator, page_cache::PageCache,
        race_utils::cumulative_points_series, season_paths::season_paths,
    },
};

pub type PageBuild = Pin<Box<dyn Future<Output = Result<F1PageProps, StatsError>> + Send>>;

/// Retrieves the three season datasets concurrently. The first failure fails
/// the whole load and nothing is returned.
pub async fn load_season_page(
    client: &dyn SeasonStatsClient,
    season: &Season,
) -> Result<SeasonPageInput, StatsError> {
    let (season_race_results, season_race_results_by_driver, season_races) = tokio::try_join!(
        client.fetch_season_race_results(season),
        client.fetch_season_race_results_by_driver(season),
        client.fetch_season_races(season),
    )?;

    Ok(SeasonPageInput {
        season_race_results,
        season_race_results_by_driver,
        season_races,
    })
}

pub async fn build_season_page(
    client: &dyn SeasonStatsClient,
    season: Season,
    current_year: i32,
) -> Result<F1PageProps, StatsError> {
    let input = load_season_page(client, &season).await?;
    let graph = cumulative_points_series(
        &input.season_race_results_by_driver,
        &input.season_races.races,
    )?;
    info!(%season, drivers = graph.len(), "built season page");

    Ok(F1PageProps {
        year: season,
        navigator: SeasonNavigator::new(season, current_year),
        season_race_results: input.season_race_results,
        season_race_results_by_driver: input.season_race_results_by_driver,
        season_races: input.season_races,
        graph,
    })
}

/// A rebuildable page build for `season`, as handed to the page cache. The
/// current year is read when the build runs, not when it is created.
pub fn season_page_builder(
    client: Arc<dyn SeasonStatsClient>,
    clock: Arc<dyn Clock>,
    season: Season,
) -> impl Fn() -> PageBuild + Send + Sync + 'static {
    move || -> PageBuild {
        let client = client.clone();
        let clock = clock.clone();
        Box::pin(async move { build_season_page(client.as_ref(), season, clock.current_year()).await })
    }
}

/// Builds the pages of the most recent seasons ahead of any request.
pub async fn prebuild_season_pages(
    cache: Arc<PageCache<F1PageProps>>,
    client: Arc<dyn SeasonStatsClient>,
    clock: Arc<dyn Clock>,
) {
    let paths = season_paths(clock.current_year());
    info!(seasons = paths.paths.len(), "prebuilding season pages");
    for season in paths.paths {
        let build = season_page_builder(client.clone(), clock.clone(), season);
        match cache.get_or_build(season, build).await {
            Ok((_, status)) => debug!(%season, cache = status.as_str(), "prebuilt season page"),
            Err(e) => warn!(%season, "prebuild failed, page will be built on request: {e}"),
        }
    }
}
