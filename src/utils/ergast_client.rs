use async_trait::async_trait;
use reqwest::Client;
use serde_json::from_str;
use tracing::debug;

use crate::{
    models::{
        error::StatsError,
        race::{ErgastResponse, MrData, Race, RaceDriverWithResultsAndConstructor, SeasonRaceResults, SeasonRaces},
        season::Season,
    },
    utils::{
        race_utils::{group_results_by_driver, merge_race_page},
        rate_limiter::RateLimiter,
    },
};

/// Largest page the Jolpica mirror of Ergast will serve.
pub const PAGE_LIMIT: u32 = 100;

/// Upper bound on pages read for one table. A full season of results is well under ten.
pub const MAX_PAGES: usize = 50;

#[async_trait]
pub trait SeasonStatsClient: Send + Sync {
    async fn fetch_season_race_results(&self, season: &Season) -> Result<SeasonRaceResults, StatsError>;

    async fn fetch_season_race_results_by_driver(
        &self,
        season: &Season,
    ) -> Result<Vec<RaceDriverWithResultsAndConstructor>, StatsError>;

    async fn fetch_season_races(&self, season: &Season) -> Result<SeasonRaces, StatsError>;
}

#[derive(Clone)]
pub struct ErgastClient {
    http_client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl ErgastClient {
    pub fn new(http_client: Client, base_url: impl Into<String>, rate_limiter: RateLimiter) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            rate_limiter,
        }
    }

    /// Reads every page of a race table endpoint.
    async fn fetch_race_table(&self, path: &str) -> Result<Vec<Race>, StatsError> {
        let mut races: Vec<Race> = Vec::new();
        let mut offset: u32 = 0;

        for _ in 0..MAX_PAGES {
            let url = format!(
                "{}/{path}/?format=json&limit={PAGE_LIMIT}&offset={offset}",
                self.base_url
            );
            let page = self.fetch_page(&url).await?;
            let limit = parse_count(&page.limit, &url)?;
            let total = parse_count(&page.total, &url)?;
            let rows = page.race_table.races.len();
            debug!(%url, total, rows, "fetched ergast page");

            if offset >= total || limit == 0 {
                merge_race_page(&mut races, page.race_table.races);
                return Ok(races);
            }
            if rows == 0 {
                return Err(malformed(&url, format!("empty page at offset {offset} of {total}")));
            }
            merge_race_page(&mut races, page.race_table.races);

            offset = offset
                .checked_add(limit)
                .ok_or_else(|| malformed(&url, format!("paging overflows at offset {offset} + {limit}")))?;
            if offset >= total {
                return Ok(races);
            }
        }

        Err(StatsError::Malformed {
            url: format!("{}/{path}/", self.base_url),
            message: format!("more than {MAX_PAGES} pages"),
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<MrData, StatsError> {
        let _permit = self.rate_limiter.acquire().await?;

        let res = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| StatsError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(StatsError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = res.text().await.map_err(|source| StatsError::Request {
            url: url.to_string(),
            source,
        })?;
        let res: ErgastResponse = from_str(&body).map_err(|e| StatsError::Malformed {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(res.mr_data)
    }
}

fn parse_count(raw: &str, url: &str) -> Result<u32, StatsError> {
    raw.trim()
        .parse()
        .map_err(|_| malformed(url, format!("non-numeric paging value {raw:?}")))
}

fn malformed(url: &str, message: String) -> StatsError {
    StatsError::Malformed {
        url: url.to_string(),
        message,
    }
}

#[async_trait]
impl SeasonStatsClient for ErgastClient {
    async fn fetch_season_race_results(&self, season: &Season) -> Result<SeasonRaceResults, StatsError> {
        let races = self.fetch_race_table(&format!("{season}/results")).await?;
        Ok(SeasonRaceResults {
            season: season.to_string(),
            races,
        })
    }

    async fn fetch_season_race_results_by_driver(
        &self,
        season: &Season,
    ) -> Result<Vec<RaceDriverWithResultsAndConstructor>, StatsError> {
        let races = self.fetch_race_table(&format!("{season}/results")).await?;
        group_results_by_driver(&races)
    }

    async fn fetch_season_races(&self, season: &Season) -> Result<SeasonRaces, StatsError> {
        let races = self.fetch_race_table(&season.to_string()).await?;
        Ok(SeasonRaces {
            season: season.to_string(),
            races,
        })
    }
}
