//! Request and response types for the Podcast Index API, plus re-exports from external crates
//! so users don't need to add these dependencies to their `Cargo.toml`.

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// Date and time types for converting the unix timestamps found in responses.
pub use chrono::{DateTime, Utc};
/// Untyped JSON, used where the API echoes back arbitrary data.
pub use serde_json::Value;

/// The `podcast:medium` of a feed.
///
/// Used to filter [`crate::Client::podcasts_by_medium`] and reported on each
/// [`response::PodcastFeed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Medium {
    Podcast,
    Music,
    Video,
    Film,
    Audiobook,
    Newsletter,
    Blog,
    /// Medium not known to this client (captures the raw value).
    #[serde(untagged)]
    Unknown(String),
}
