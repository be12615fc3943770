#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod client;
pub mod error;
pub(crate) mod serde_helpers;
pub mod types;

pub use client::{Client, Config};

use reqwest::Request;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL of the public Podcast Index API, version 1.0.
pub const DEFAULT_HOST: &str = "https://api.podcastindex.org/api/1.0/";

/// Timestamp in seconds since [`std::time::UNIX_EPOCH`]
pub type Timestamp = i64;

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`error::Kind::Configuration`] error if the request cannot be encoded as a
    /// flat query string, e.g. because it contains a nested map.
    fn query_params(&self) -> Result<String> {
        let params = serde_html_form::to_string(self)?;

        if params.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("?{params}"))
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, headers),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    mut request: Request,
    headers: HeaderMap,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    request.headers_mut().extend(headers);

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let json_value = response.json::<serde_json::Value>().await?;
    serde_helpers::deserialize_with_warnings(json_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::request::{EpisodesByFeedIdRequest, RecentEpisodesRequest, SearchRequest};

    #[test]
    fn query_params_should_succeed() -> Result<()> {
        let request = SearchRequest::builder().q("batman university").build();

        assert_eq!(request.query_params()?, "?q=batman+university");

        Ok(())
    }

    #[test]
    fn empty_query_params_should_be_empty() -> Result<()> {
        assert_eq!(RecentEpisodesRequest::default().query_params()?, "");
        assert_eq!(().query_params()?, "");

        Ok(())
    }

    #[test]
    fn query_params_keep_field_order() -> Result<()> {
        let request = EpisodesByFeedIdRequest::builder()
            .id(vec![75075])
            .max(10)
            .fulltext(true)
            .build();

        assert_eq!(request.query_params()?, "?id=75075&max=10&fulltext=true");

        Ok(())
    }

    #[derive(Serialize)]
    struct Nested {
        q: &'static str,
        filter: std::collections::BTreeMap<&'static str, u32>,
    }

    #[test]
    fn unencodable_query_should_be_configuration_error() {
        let request = Nested {
            q: "test",
            filter: std::collections::BTreeMap::from([("max", 1)]),
        };

        let error = request.query_params().unwrap_err();

        assert_eq!(error.kind(), crate::error::Kind::Configuration);
    }
}
