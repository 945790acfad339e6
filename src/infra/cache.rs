//! On-disk fallback copy of the last good headline fetch.

use std::{
    fs, io,
    path::PathBuf,
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

use crate::domain::Article;

const CACHE_FILENAME: &str = "headline_cache.json";

/// Disk copies older than this are still shown, but flagged as stale.
pub const HEADLINE_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineCache {
    /// Unix timestamp (seconds) when the articles were fetched.
    pub cached_at: u64,
    pub articles: Vec<Article>,
}

impl HeadlineCache {
    pub fn new(articles: Vec<Article>) -> Self {
        let cached_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            cached_at,
            articles,
        }
    }

    pub fn fetched_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.cached_at)
    }

    pub fn age(&self) -> Duration {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Duration::from_secs(now.saturating_sub(self.cached_at))
    }

    pub fn is_expired(&self) -> bool {
        self.age() > HEADLINE_CACHE_TTL
    }
}

fn cache_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("landed-cost-planner");

        let _ = fs::create_dir_all(&base);

        base.join(CACHE_FILENAME)
    })
    .clone()
}

/// Load the last saved headline batch, if any.
pub fn load_headline_cache() -> Option<HeadlineCache> {
    let path = cache_path();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no headline cache on disk");
        return None;
    }

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(cache) => {
                tracing::debug!(path = %path.display(), "loaded headline cache");
                Some(cache)
            }
            Err(err) => {
                tracing::warn!(%err, "headline cache unreadable, ignoring");
                None
            }
        },
        Err(err) => {
            tracing::warn!(%err, "failed to read headline cache");
            None
        }
    }
}

pub fn save_headline_cache(cache: &HeadlineCache) -> Result<(), CacheWriteError> {
    let path = cache_path();
    let json = serde_json::to_string_pretty(cache)?;
    fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), articles = cache.articles.len(), "saved headline cache");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum CacheWriteError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cache_is_not_expired() {
        let cache = HeadlineCache::new(Vec::new());
        assert!(!cache.is_expired());
        assert!(cache.age() < Duration::from_secs(5));
    }

    #[test]
    fn old_cache_is_expired() {
        let cache = HeadlineCache {
            cached_at: 0,
            articles: Vec::new(),
        };
        assert!(cache.is_expired());
    }
}
