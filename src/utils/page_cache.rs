use std::{fmt::Display, future::Future, sync::Arc};

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::{models::cache::CacheEntry, models::season::Season, utils::clock::Clock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    /// Served from an expired entry while a rebuild runs in the background.
    Stale,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "hit",
            CacheStatus::Stale => "stale",
            CacheStatus::Miss => "miss",
        }
    }
}

/// Built season pages, fresh for `revalidate_seconds` and then rebuilt in the
/// background on the next request. Failed builds are never stored.
pub struct PageCache<T> {
    entries: DashMap<Season, CacheEntry<Arc<T>>>,
    revalidating: DashMap<Season, ()>,
    revalidate_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl<T: Send + Sync + 'static> PageCache<T> {
    pub fn new(revalidate_seconds: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            revalidating: DashMap::new(),
            revalidate_seconds,
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub async fn get_or_build<F, Fut, E>(
        self: &Arc<Self>,
        key: Season,
        build: F,
    ) -> Result<(Arc<T>, CacheStatus), E>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let now = self.clock.now();
        let cached = self
            .entries
            .get(&key)
            .map(|entry| (entry.value.clone(), entry.is_expired(now)));

        match cached {
            Some((value, false)) => Ok((value, CacheStatus::Hit)),
            Some((value, true)) => {
                self.revalidate_in_background(key, build);
                Ok((value, CacheStatus::Stale))
            }
            None => {
                debug!(%key, "page cache miss, building");
                let value = Arc::new(build().await?);
                self.store(key, value.clone());
                Ok((value, CacheStatus::Miss))
            }
        }
    }

    fn store(&self, key: Season, value: Arc<T>) {
        let entry = CacheEntry::new(value, self.revalidate_seconds, self.clock.now());
        self.entries.insert(key, entry);
    }

    fn revalidate_in_background<F, Fut, E>(self: &Arc<Self>, key: Season, build: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        if self.revalidating.insert(key, ()).is_some() {
            return;
        }

        let cache = Arc::clone(self);
        tokio::spawn(async move {
            match build().await {
                Ok(value) => {
                    cache.store(key, Arc::new(value));
                    debug!(%key, "page revalidated");
                }
                Err(e) => warn!(%key, "page revalidation failed, keeping stale page: {e}"),
            }
            cache.revalidating.remove(&key);
        });
    }
}
