use super::matcher::HeadlineMatcher;
use super::types::Rss;
use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::Client;

/// Pulls titles from a fixed list of RSS feeds and picks one AI headline.
pub struct FeedAggregator {
    client: Client,
    urls: Vec<String>,
    matcher: HeadlineMatcher,
}

impl FeedAggregator {
    pub fn new(client: Client, urls: Vec<String>) -> Result<Self> {
        Ok(Self {
            client,
            urls,
            matcher: HeadlineMatcher::new()?,
        })
    }

    /// Fetch every feed in order and return the matching titles from all of them.
    /// A feed that fails to download or parse is logged and skipped. The body is
    /// parsed whatever the HTTP status.
    pub async fn collect_matching_titles(&self) -> Vec<String> {
        let mut pool = Vec::new();
        for url in &self.urls {
            match self.fetch_titles(url).await {
                Ok(titles) => {
                    let before = pool.len();
                    pool.extend(titles.into_iter().filter(|t| self.matcher.is_match(t)));
                    tracing::debug!(url = %url, matched = pool.len() - before, "feed processed");
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = %format!("{:#}", e), "skipping feed");
                }
            }
        }
        tracing::info!(count = pool.len(), "found matching possible titles");
        pool
    }

    async fn fetch_titles(&self, url: &str) -> Result<Vec<String>> {
        let resp = self.client.get(url).send().await.context("GET feed failed")?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = %status, "feed returned non-success status, parsing body anyway");
        }
        let body = resp.text().await.context("failed to read feed body")?;
        parse_titles(&body)
    }

    /// Choose one matching headline at random and rewrite it for posting.
    pub async fn headline<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let pool = self.collect_matching_titles().await;
        self.select_headline(&pool, rng)
    }

    pub fn select_headline<R: Rng + ?Sized>(&self, pool: &[String], rng: &mut R) -> Result<String> {
        let title = pool
            .choose(rng)
            .ok_or_else(|| anyhow::anyhow!("no matching content found"))?;
        Ok(self.matcher.rewrite(title))
    }
}

/// Item titles from an RSS document, in document order.
pub fn parse_titles(xml: &str) -> Result<Vec<String>> {
    let rss: Rss = quick_xml::de::from_str(xml).context("failed to parse feed XML")?;
    Ok(rss.channel.items.into_iter().map(|item| item.title().to_string()).collect())
}
