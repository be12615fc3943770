//! Podcast Index API endpoint explorer.
//!
//! Reads the key pair from `PODCAST_INDEX_API_KEY` and `PODCAST_INDEX_API_SECRET`, searches for a
//! term, then walks the lookup endpoints using the first feed found.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example search --features tracing -- "batman university"
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=search.log RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example search --features tracing
//! ```

use std::fs::File;

use podcastindex_client_sdk::Client;
use podcastindex_client_sdk::auth::Credentials;
use podcastindex_client_sdk::types::request::{
    EpisodesByFeedIdRequest, PodcastByFeedIdRequest, RecentEpisodesRequest, SearchRequest,
    ValueByFeedIdRequest,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let term = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "batman university".to_owned());
    let client = Client::with_credentials(Credentials::from_env()?)?;

    // Fallback feed (Podcasting 2.0) when the search comes back empty
    let fallback_feed = 920_666;

    let search = client
        .search_podcasts(&SearchRequest::builder().q(term.as_str()).max(5).build())
        .await;

    let feed_id = match &search {
        Ok(response) => {
            let feeds = response.feeds.as_deref().unwrap_or_default();
            info!(endpoint = "search/byterm", term = %term, count = feeds.len());
            for feed in feeds {
                info!(
                    endpoint = "search/byterm",
                    id = ?feed.id,
                    title = ?feed.title,
                    author = ?feed.author
                );
            }
            feeds.first().and_then(|feed| feed.id).unwrap_or(fallback_feed)
        }
        Err(e) => {
            warn!(endpoint = "search/byterm", error = %e, "using fallback feed");
            fallback_feed
        }
    };

    match client
        .podcast_by_feed_id(&PodcastByFeedIdRequest::builder().id(feed_id).build())
        .await
    {
        Ok(response) => match response.feed {
            Some(feed) => info!(
                endpoint = "podcasts/byfeedid",
                id = feed_id,
                title = ?feed.title,
                episodes = ?feed.episode_count,
                updated = ?feed.last_updated_at()
            ),
            None => warn!(endpoint = "podcasts/byfeedid", id = feed_id, "feed not found"),
        },
        Err(e) => error!(endpoint = "podcasts/byfeedid", id = feed_id, error = %e),
    }

    match client
        .episodes_by_feed_id(
            &EpisodesByFeedIdRequest::builder()
                .id(vec![feed_id])
                .max(3)
                .build(),
        )
        .await
    {
        Ok(response) => {
            for episode in response.items.unwrap_or_default() {
                info!(
                    endpoint = "episodes/byfeedid",
                    title = ?episode.title,
                    published = ?episode.published_at(),
                    enclosure = ?episode.enclosure_url
                );
            }
        }
        Err(e) => error!(endpoint = "episodes/byfeedid", id = feed_id, error = %e),
    }

    match client
        .value_by_feed_id(&ValueByFeedIdRequest::builder().id(feed_id).build())
        .await
    {
        Ok(response) => {
            let destinations = response
                .value
                .and_then(|value| value.destinations)
                .unwrap_or_default();
            info!(endpoint = "value/byfeedid", destinations = destinations.len());
        }
        Err(e) => error!(endpoint = "value/byfeedid", id = feed_id, error = %e),
    }

    match client
        .recent_episodes(&RecentEpisodesRequest::builder().max(5).build())
        .await
    {
        Ok(response) => info!(endpoint = "recent/episodes", count = ?response.count),
        Err(e) => error!(endpoint = "recent/episodes", error = %e),
    }

    match client.stats().await {
        Ok(response) => {
            if let Some(stats) = response.stats {
                info!(
                    endpoint = "stats/current",
                    feeds = ?stats.feed_count_total,
                    episodes = ?stats.episode_count_total
                );
            }
        }
        Err(e) => error!(endpoint = "stats/current", error = %e),
    }

    match client.categories().await {
        Ok(response) => info!(
            endpoint = "categories/list",
            count = response.feeds.map_or(0, |categories| categories.len())
        ),
        Err(e) => error!(endpoint = "categories/list", error = %e),
    }

    Ok(())
}
