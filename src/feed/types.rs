use serde::Deserialize;

/// Just enough of an RSS 2.0 document to reach `channel/item/title`.
/// Everything else in the feed is ignored.
#[derive(Debug, Deserialize, Default)]
pub struct Rss {
    #[serde(default)]
    pub channel: RssChannel,
}

#[derive(Debug, Deserialize, Default)]
pub struct RssChannel {
    #[serde(default, rename = "item")]
    pub items: Vec<RssItem>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RssItem {
    /// Elements are matched by local name, so `<media:title>` and
    /// `<itunes:title>` land here next to the plain `<title>`.
    #[serde(default, rename = "title")]
    pub titles: Vec<String>,
}

impl RssItem {
    /// The item's headline: the first title element in document order.
    pub fn title(&self) -> &str {
        self.titles.first().map(String::as_str).unwrap_or_default()
    }
}
