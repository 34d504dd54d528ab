pub mod carousel;
pub mod clock;
pub mod config;
pub mod ergast_client;
pub mod logging;
pub mod navigator;
pub mod page_cache;
pub mod project_card;
pub mod projects;
pub mod race_utils;
pub mod rate_limiter;
pub mod season_loader;
pub mod season_paths;
pub mod state;
