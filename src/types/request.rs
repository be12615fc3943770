//! Request types for the Podcast Index API.
//!
//! This module contains builder-pattern structs for each API endpoint.
//! All request types use the [`bon`](https://docs.rs/bon) crate for the builder pattern.
//! Every field is sent as a query parameter under the name the API expects; unset
//! optional fields are left out of the query string entirely.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as, skip_serializing_none};

use super::Medium;
use crate::Timestamp;

/// Request parameters for the `/search/byterm`, `/search/bytitle` and `/search/byperson`
/// endpoints.
///
/// # Example
///
/// ```
/// use podcastindex_client_sdk::types::request::SearchRequest;
///
/// let request = SearchRequest::builder()
///     .q("batman university")
///     .max(5)
///     .clean(true)
///     .build();
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SearchRequest {
    /// Terms to search for (required).
    #[builder(into)]
    pub q: String,
    /// Only return feeds with a value block of this type, e.g. `any` or `lightning`.
    #[builder(into)]
    pub val: Option<String>,
    /// Maximum number of results to return.
    pub max: Option<u32>,
    /// Only return feeds that also have an iTunes id.
    pub aponly: Option<bool>,
    /// Only return non-explicit feeds.
    pub clean: Option<bool>,
    /// Return full text in text fields instead of truncating at 100 words.
    pub fulltext: Option<bool>,
    /// Ask the API to pretty-print its JSON.
    pub pretty: Option<bool>,
}

/// Request parameters for the `/podcasts/byfeedid` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PodcastByFeedIdRequest {
    /// Podcast Index feed id.
    pub id: u64,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/podcasts/byfeedurl` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PodcastByFeedUrlRequest {
    #[builder(into)]
    pub url: String,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/podcasts/byguid` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PodcastByGuidRequest {
    /// The `podcast:guid` of the feed.
    #[builder(into)]
    pub guid: String,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/podcasts/byitunesid` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PodcastByItunesIdRequest {
    /// Apple Podcasts (iTunes) collection id.
    pub id: u64,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/podcasts/bymedium` endpoint.
///
/// # Example
///
/// ```
/// use podcastindex_client_sdk::types::Medium;
/// use podcastindex_client_sdk::types::request::PodcastsByMediumRequest;
///
/// let request = PodcastsByMediumRequest::builder()
///     .medium(Medium::Music)
///     .max(20)
///     .build();
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PodcastsByMediumRequest {
    pub medium: Medium,
    pub max: Option<u32>,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/episodes/byfeedid` endpoint.
///
/// Several feeds can be queried at once; their ids are sent comma separated.
///
/// # Example
///
/// ```
/// use podcastindex_client_sdk::types::request::EpisodesByFeedIdRequest;
///
/// let request = EpisodesByFeedIdRequest::builder()
///     .id(vec![75075, 920666])
///     .max(10)
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct EpisodesByFeedIdRequest {
    /// One or more Podcast Index feed ids.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    pub id: Vec<u64>,
    /// Only return episodes published since this unix timestamp.
    pub since: Option<Timestamp>,
    pub max: Option<u32>,
    pub fulltext: Option<bool>,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/episodes/byfeedurl` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct EpisodesByFeedUrlRequest {
    #[builder(into)]
    pub url: String,
    pub since: Option<Timestamp>,
    pub max: Option<u32>,
    pub fulltext: Option<bool>,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/episodes/byitunesid` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct EpisodesByItunesIdRequest {
    pub id: u64,
    pub since: Option<Timestamp>,
    pub max: Option<u32>,
    pub fulltext: Option<bool>,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/episodes/byguid` endpoint.
///
/// Episode GUIDs are only unique within a feed, so the feed should be identified with either
/// `feedid` or `feedurl`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct EpisodeByGuidRequest {
    #[builder(into)]
    pub guid: String,
    pub feedid: Option<u64>,
    #[builder(into)]
    pub feedurl: Option<String>,
    pub fulltext: Option<bool>,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/recent/episodes` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Builder, Serialize)]
#[non_exhaustive]
pub struct RecentEpisodesRequest {
    pub max: Option<u32>,
    /// Leave out episodes whose title or URL contains this string.
    #[serde(rename = "excludeString")]
    #[builder(into)]
    pub exclude_string: Option<String>,
    /// Only return episodes older than the episode with this id.
    pub before: Option<u64>,
    pub fulltext: Option<bool>,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/recent/feeds` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Builder, Serialize)]
#[non_exhaustive]
pub struct RecentFeedsRequest {
    pub max: Option<u32>,
    pub since: Option<Timestamp>,
    /// Language code(s) of the feeds to return, e.g. `en` or `en,es`.
    #[builder(into)]
    pub lang: Option<String>,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/value/byfeedid` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ValueByFeedIdRequest {
    pub id: u64,
    pub pretty: Option<bool>,
}

/// Request parameters for the `/value/byfeedurl` endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ValueByFeedUrlRequest {
    #[builder(into)]
    pub url: String,
    pub pretty: Option<bool>,
}
