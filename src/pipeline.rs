use crate::bluesky::{BlueskyRest, Credentials, PostRecord};
use crate::config::Config;
use crate::feed::FeedAggregator;
use crate::images::ImagePicker;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;

/// What a successful run posted.
#[derive(Debug, Clone)]
pub struct PublishedPost {
    pub text: String,
    pub image_name: String,
    pub uri: Option<String>,
}

/// One full run: log in, pick an image and a headline, upload, post.
/// Holds only immutable configuration, so a single instance can serve
/// any number of concurrent runs.
pub struct Publisher {
    credentials: Credentials,
    rest: BlueskyRest,
    feeds: FeedAggregator,
    images: ImagePicker,
}

impl Publisher {
    pub fn new(config: &Config, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            credentials,
            rest: BlueskyRest::new(client.clone(), &config.bluesky.api_base),
            feeds: FeedAggregator::new(client, config.feeds.urls.clone())?,
            images: ImagePicker::new(config.images.dir.clone()),
        })
    }

    pub async fn run(&self) -> Result<PublishedPost> {
        let mut rng = StdRng::from_entropy();

        let session = self
            .rest
            .create_session(&self.credentials)
            .await
            .context("authentication failed")?;

        let image = self.images.pick(&mut rng).context("image selection failed")?;
        let text = self.feeds.headline(&mut rng).await.context("headline selection failed")?;

        tracing::info!(bytes = image.data.len(), name = %image.name, "uploading image");
        let blob = self
            .rest
            .upload_blob(&session, image.data)
            .await
            .context("image upload failed")?;

        tracing::info!(text = %text, "posting");
        let record = PostRecord::with_image(text.clone(), blob, image.name.clone(), chrono::Utc::now());
        let created = self
            .rest
            .create_post(&session, &record)
            .await
            .context("posting failed")?;

        tracing::info!("message posted successfully");
        Ok(PublishedPost {
            text,
            image_name: image.name,
            uri: created.uri,
        })
    }
}
