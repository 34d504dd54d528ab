use std::sync::Arc;

use crate::models::page::F1PageProps;
use crate::utils::{
    clock::Clock, config::Config, ergast_client::SeasonStatsClient, page_cache::PageCache,
    projects::ProjectCatalog,
};

pub struct AppState {
    pub config: Config,
    pub stats_client: Arc<dyn SeasonStatsClient>,
    pub clock: Arc<dyn Clock>,
    pub season_pages: Arc<PageCache<F1PageProps>>,
    pub projects: ProjectCatalog,
}

impl AppState {
    pub fn new(
        config: Config,
        stats_client: Arc<dyn SeasonStatsClient>,
        clock: Arc<dyn Clock>,
        projects: ProjectCatalog,
    ) -> Self {
        let season_pages = Arc::new(PageCache::new(config.revalidate_seconds, clock.clone()));
        AppState {
            config,
            stats_client,
            clock,
            season_pages,
            projects,
        }
    }
}
