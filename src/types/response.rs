//! Response types for the Podcast Index API.
//!
//! Every endpoint answers with the same [`ApiResponse`] envelope; only the payload type and the
//! slot it is carried in differ. The API is the source of truth for its own schema, so nothing is
//! assumed to be present: every field is optional, a value of an unexpected JSON type decodes as
//! `None` rather than failing the call, and keys this crate does not model are kept in `extra`.

#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use std::collections::BTreeMap;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

use super::{Medium, Value};
use crate::Timestamp;
use crate::serde_helpers::{BoolFromAny, EmptyArrayAsNone, Lenient, StringFromAny};

/// Top-level object returned by every endpoint.
///
/// List endpoints fill `feeds` or `items` (alongside `count`), lookups fill `feed` or
/// `episode`, the value endpoints fill `value` and the stats endpoint fills `stats`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
#[non_exhaustive]
pub struct ApiResponse<T> {
    /// `"true"` on success.
    #[serde_as(as = "Lenient<StringFromAny>")]
    #[serde(default)]
    pub status: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub count: Option<u64>,
    pub feeds: Option<Vec<T>>,
    pub items: Option<Vec<T>>,
    /// Lookups that find nothing answer with an empty array here, which decodes as `None`.
    #[serde_as(as = "EmptyArrayAsNone")]
    #[serde(default)]
    pub feed: Option<T>,
    #[serde_as(as = "EmptyArrayAsNone")]
    #[serde(default)]
    pub episode: Option<T>,
    pub value: Option<T>,
    pub stats: Option<T>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub description: Option<String>,
    /// The query as understood by the API. Searches echo a string, lookups an object.
    pub query: Option<Value>,
    /// Fields not modelled above, kept as sent.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: BTreeMap<String, Value>,
}

/// A podcast feed.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct PodcastFeed {
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub id: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub podcast_guid: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub title: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub url: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub link: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub description: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub author: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub image: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub artwork: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub last_update_time: Option<Timestamp>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub last_crawl_time: Option<Timestamp>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub last_parse_time: Option<Timestamp>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub last_good_http_status_time: Option<Timestamp>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub last_http_status: Option<u16>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub itunes_id: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub generator: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub language: Option<String>,
    /// 0 for RSS, 1 for Atom.
    #[serde(rename = "type")]
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub kind: Option<u8>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub dead: Option<u8>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub crawl_errors: Option<u32>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub parse_errors: Option<u32>,
    /// Category id to category name.
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub categories: Option<BTreeMap<String, String>>,
    #[serde_as(as = "Lenient<BoolFromAny>")]
    #[serde(default)]
    pub locked: Option<bool>,
    #[serde_as(as = "Lenient<BoolFromAny>")]
    #[serde(default)]
    pub explicit: Option<bool>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub medium: Option<Medium>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub episode_count: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub newest_item_pubdate: Option<Timestamp>,
    /// Fields not modelled above, kept as sent.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: BTreeMap<String, Value>,
}

impl PodcastFeed {
    /// When the feed content last changed, if reported.
    #[must_use]
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_update_time
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// A single episode.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Episode {
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub id: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub title: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub link: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub description: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub guid: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub date_published: Option<Timestamp>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub date_published_pretty: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub date_crawled: Option<Timestamp>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub enclosure_url: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub enclosure_type: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub enclosure_length: Option<u64>,
    /// Length in seconds.
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde_as(as = "Lenient<BoolFromAny>")]
    #[serde(default)]
    pub explicit: Option<bool>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub episode: Option<u32>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub episode_type: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub season: Option<u32>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub image: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feed_itunes_id: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feed_image: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feed_id: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feed_title: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feed_language: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub chapters_url: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub transcript_url: Option<String>,
    /// Fields not modelled above, kept as sent.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: BTreeMap<String, Value>,
}

impl Episode {
    /// Publication time, if reported.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.date_published
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// Counters returned by `/stats/current`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Stats {
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feed_count_total: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub episode_count_total: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feeds_with_new_episodes: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feeds_with_value: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feeds_with_live_items: Option<u64>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub feeds_with_value_blocks: Option<u64>,
    /// Fields not modelled above, kept as sent.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: BTreeMap<String, Value>,
}

/// One entry of `/categories/list`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Category {
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub id: Option<u32>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub name: Option<String>,
    /// Fields not modelled above, kept as sent.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: BTreeMap<String, Value>,
}

/// The `podcast:value` block of a feed, describing how listeners can stream payments.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ValueBlock {
    pub model: Option<ValueModel>,
    pub destinations: Option<Vec<ValueDestination>>,
    /// Fields not modelled above, kept as sent.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: BTreeMap<String, Value>,
}

/// Payment model of a [`ValueBlock`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct ValueModel {
    /// Payment layer, e.g. `lightning`.
    #[serde(rename = "type")]
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub kind: Option<String>,
    /// Transport method, e.g. `keysend`.
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub method: Option<String>,
    /// Suggested amount per minute.
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub suggested: Option<String>,
    /// Fields not modelled above, kept as sent.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: BTreeMap<String, Value>,
}

/// A payment recipient of a [`ValueBlock`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct ValueDestination {
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "type")]
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub kind: Option<String>,
    /// Share of the payment, relative to the other destinations.
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub split: Option<u32>,
    #[serde_as(as = "Lenient<BoolFromAny>")]
    #[serde(default)]
    pub fee: Option<bool>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub custom_key: Option<String>,
    #[serde_as(as = "Lenient")]
    #[serde(default)]
    pub custom_value: Option<String>,
    /// Fields not modelled above, kept as sent.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: BTreeMap<String, Value>,
}
