#![allow(dead_code)]

//! Thin asynchronous client for the rss2json bridge.
//!
//! - Fetches the two bilateral-economy Google News feeds in parallel.
//! - Maintains a 5-minute in-memory cache with stale fallbacks, backed by
//!   the on-disk copy when both feeds are unreachable.

use std::{
    sync::{Arc, OnceLock},
    time::{Duration, SystemTime},
};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use time::{format_description, format_description::BorrowedFormatItem, PrimitiveDateTime};
use tokio::sync::Mutex;

use crate::domain::{merge_headlines, strip_tags, Article};
use crate::infra::cache::{load_headline_cache, save_headline_cache, HeadlineCache};

const DEFAULT_BASE_URL: &str = "https://api.rss2json.com/v1/";
const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
const USER_AGENT: &str = "landed-cost-planner/0.3.0";

/// Google News searches merged into the insights panel.
const FEED_SOURCES: &[(&str, &str)] = &[
    (
        "italy-economy",
        "https://news.google.com/rss/search?q=italy+economy+business&hl=en-US&gl=US&ceid=US:en",
    ),
    (
        "india-economy",
        "https://news.google.com/rss/search?q=india+economy+business&hl=en-US&gl=US&ceid=US:en",
    ),
];

/// Number of article cards the panel shows.
pub const MAX_HEADLINES: usize = 4;

/// How often the app re-fetches the feed while it is enabled.
pub const FEED_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Error)]
pub enum NewsClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed error: {0}")]
    Feed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
    Stale,
}

#[derive(Clone, Debug)]
pub struct CachedPayload<T> {
    pub data: T,
    pub fetched_at: SystemTime,
    pub status: CacheStatus,
}

impl<T> CachedPayload<T> {
    fn new(data: T, fetched_at: SystemTime, status: CacheStatus) -> Self {
        Self {
            data,
            fetched_at,
            status,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeedEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    items: Vec<ArticleDto>,
}

#[derive(Debug, Deserialize)]
struct ArticleDto {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default, rename = "pubDate")]
    pub_date: Option<String>,
}

impl From<ArticleDto> for Article {
    fn from(dto: ArticleDto) -> Self {
        let title = dto
            .title
            .map(|raw| strip_tags(&raw))
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| "Untitled Article".to_string());
        Article {
            title,
            link: dto.link.unwrap_or_else(|| "#".to_string()),
            source: dto.author.unwrap_or_else(|| "Google News".to_string()),
            published_at: dto.pub_date.as_deref().and_then(parse_pub_date),
        }
    }
}

/// rss2json normalizes publish dates to `YYYY-MM-DD HH:MM:SS` (UTC).
fn parse_pub_date(raw: &str) -> Option<SystemTime> {
    static FORMAT: OnceLock<Vec<BorrowedFormatItem<'static>>> = OnceLock::new();
    let format = FORMAT.get_or_init(|| {
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
            .expect("publish date format is well-formed")
    });
    PrimitiveDateTime::parse(raw.trim(), format)
        .ok()
        .map(|datetime| SystemTime::from(datetime.assume_utc()))
}

#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    base_url: Url,
    cache: Arc<Mutex<Option<Cached>>>,
    ttl: Duration,
}

impl NewsClient {
    pub fn new() -> Result<Self, NewsClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, NewsClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            cache: Arc::new(Mutex::new(None)),
            ttl: DEFAULT_TTL,
        })
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Current headline batch: fresh when the feeds answer, cached within
    /// the TTL, stale (memory or disk) when both feeds fail.
    pub async fn get_headlines(&self) -> Result<CachedPayload<Vec<Article>>, NewsClientError> {
        if let Some(payload) = self.cached_headlines().await {
            return Ok(payload);
        }

        let (italy, india) = (FEED_SOURCES[0], FEED_SOURCES[1]);
        let joined = tokio::try_join!(
            self.fetch_feed(italy.0, italy.1),
            self.fetch_feed(india.0, india.1)
        );
        match joined {
            Ok((italy_batch, india_batch)) => {
                let merged = merge_headlines(vec![italy_batch, india_batch], MAX_HEADLINES);
                if merged.is_empty() {
                    return self
                        .stale_fallback(NewsClientError::Feed("no headlines in either feed".into()))
                        .await;
                }
                Ok(self.store_headlines(merged).await)
            }
            Err(error) => self.stale_fallback(error).await,
        }
    }

    pub async fn clear_cache(&self) {
        *self.cache.lock().await = None;
    }

    async fn fetch_feed(
        &self,
        label: &str,
        rss_url: &str,
    ) -> Result<Vec<Article>, NewsClientError> {
        let mut url = self.base_url.join("api.json")?;
        url.query_pairs_mut().append_pair("rss_url", rss_url);

        tracing::debug!(feed = label, "requesting headlines");

        let envelope: FeedEnvelope = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !envelope.status.eq_ignore_ascii_case("ok") {
            return Err(NewsClientError::Feed(
                envelope.message.unwrap_or(envelope.status),
            ));
        }

        tracing::debug!(feed = label, items = envelope.items.len(), "feed answered");
        Ok(envelope.items.into_iter().map(Article::from).collect())
    }

    async fn cached_headlines(&self) -> Option<CachedPayload<Vec<Article>>> {
        let cache = self.cache.lock().await;
        cache.as_ref().and_then(|entry| entry.if_fresh(self.ttl))
    }

    async fn store_headlines(&self, articles: Vec<Article>) -> CachedPayload<Vec<Article>> {
        let fetched_at = SystemTime::now();
        *self.cache.lock().await = Some(Cached::new(articles.clone(), fetched_at));

        if let Err(err) = save_headline_cache(&HeadlineCache::new(articles.clone())) {
            tracing::warn!(%err, "failed to write headline cache");
        }

        CachedPayload::new(articles, fetched_at, CacheStatus::Fresh)
    }

    async fn stale_fallback(
        &self,
        error: NewsClientError,
    ) -> Result<CachedPayload<Vec<Article>>, NewsClientError> {
        tracing::warn!(%error, "headline fetch failed, trying fallbacks");

        if let Some(entry) = self.cache.lock().await.as_ref() {
            return Ok(entry.as_stale());
        }

        if let Some(disk) = load_headline_cache() {
            if disk.is_expired() {
                tracing::warn!("serving expired headline cache from disk");
            }
            if !disk.articles.is_empty() {
                let fetched_at = disk.fetched_at();
                let payload =
                    CachedPayload::new(disk.articles.clone(), fetched_at, CacheStatus::Stale);
                *self.cache.lock().await = Some(Cached::new(disk.articles, fetched_at));
                return Ok(payload);
            }
        }

        Err(error)
    }
}

struct Cached {
    articles: Vec<Article>,
    fetched_at: SystemTime,
}

impl Cached {
    fn new(articles: Vec<Article>, fetched_at: SystemTime) -> Self {
        Self {
            articles,
            fetched_at,
        }
    }

    fn if_fresh(&self, ttl: Duration) -> Option<CachedPayload<Vec<Article>>> {
        if self
            .fetched_at
            .elapsed()
            .map(|elapsed| elapsed <= ttl)
            .unwrap_or(false)
        {
            Some(CachedPayload::new(
                self.articles.clone(),
                self.fetched_at,
                CacheStatus::Cached,
            ))
        } else {
            None
        }
    }

    fn as_stale(&self) -> CachedPayload<Vec<Article>> {
        CachedPayload::new(self.articles.clone(), self.fetched_at, CacheStatus::Stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pub_date_parsing() {
        let parsed = parse_pub_date("2024-05-18 09:30:00").unwrap();
        let later = parse_pub_date("2024-05-18 10:30:00").unwrap();
        assert!(later > parsed);
        assert!(parse_pub_date("yesterday-ish").is_none());
        assert!(parse_pub_date("").is_none());
    }

    #[test]
    fn dto_conversion_cleans_titles_and_fills_fallbacks() {
        let article = Article::from(ArticleDto {
            title: Some("<b>Trade</b> talks resume".to_string()),
            link: None,
            author: None,
            pub_date: Some("2024-05-18 09:30:00".to_string()),
        });
        assert_eq!(article.title, "Trade talks resume");
        assert_eq!(article.link, "#");
        assert_eq!(article.source, "Google News");
        assert!(article.published_at.is_some());
    }

    #[test]
    fn blank_title_becomes_placeholder() {
        let article = Article::from(ArticleDto {
            title: Some("<i></i>".to_string()),
            link: Some("https://example.com".to_string()),
            author: Some("Reuters".to_string()),
            pub_date: None,
        });
        assert_eq!(article.title, "Untitled Article");
        assert_eq!(article.source, "Reuters");
        assert_eq!(article.published_at, None);
    }
}
