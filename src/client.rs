//! Client for the Podcast Index API.
//!
//! Every operation is a single signed `GET` against one endpoint. The typed request is
//! forwarded as the query string and the JSON body is decoded into an [`ApiResponse`].
//!
//! # Example
//!
//! ```no_run
//! use podcastindex_client_sdk::auth::Credentials;
//! use podcastindex_client_sdk::types::request::SearchRequest;
//! use podcastindex_client_sdk::{Client, Config, DEFAULT_HOST};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("UXKCGDSYGUUEVQJSYDZH", "yzJe2eE7XV-3eY576dyRZ6wXyAbndh6LUrCZ8KN|")?;
//! let client = Client::new(DEFAULT_HOST, Config::builder().credentials(credentials).build())?;
//!
//! let request = SearchRequest::builder().q("batman university").build();
//! let response = client.search_podcasts(&request).await?;
//!
//! for feed in response.feeds.unwrap_or_default() {
//!     println!("{:?}: {:?}", feed.id, feed.title);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use bon::Builder;
use chrono::Utc;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{self, Credentials};
use crate::error::{Error, Kind};
use crate::types::request::{
    EpisodeByGuidRequest, EpisodesByFeedIdRequest, EpisodesByFeedUrlRequest,
    EpisodesByItunesIdRequest, PodcastByFeedIdRequest, PodcastByFeedUrlRequest,
    PodcastByGuidRequest, PodcastByItunesIdRequest, PodcastsByMediumRequest,
    RecentEpisodesRequest, RecentFeedsRequest, SearchRequest, ValueByFeedIdRequest,
    ValueByFeedUrlRequest,
};
use crate::types::response::{ApiResponse, Category, Episode, PodcastFeed, Stats, ValueBlock};
use crate::{DEFAULT_HOST, Result, ToQueryParams as _};

/// User agent sent when the [`Config`] does not name one.
pub const DEFAULT_USER_AGENT: &str = concat!("podcastindex-client-sdk/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`Client`]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Key pair used to sign every request.
    credentials: Credentials,
    /// Sent as `User-Agent` on every request. The API asks integrators to identify themselves.
    #[builder(into, default = DEFAULT_USER_AGENT.to_owned())]
    user_agent: String,
    /// Total time allowed for a single request, from connect until the body is read.
    timeout: Option<Duration>,
}

/// One remote endpoint, relative to the API host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::IntoStaticStr)]
#[non_exhaustive]
pub enum Endpoint {
    #[strum(serialize = "search/byterm")]
    SearchByTerm,
    #[strum(serialize = "search/bytitle")]
    SearchByTitle,
    #[strum(serialize = "search/byperson")]
    SearchByPerson,
    #[strum(serialize = "podcasts/byfeedid")]
    PodcastByFeedId,
    #[strum(serialize = "podcasts/byfeedurl")]
    PodcastByFeedUrl,
    #[strum(serialize = "podcasts/byguid")]
    PodcastByGuid,
    #[strum(serialize = "podcasts/byitunesid")]
    PodcastByItunesId,
    #[strum(serialize = "podcasts/bymedium")]
    PodcastsByMedium,
    #[strum(serialize = "episodes/byfeedid")]
    EpisodesByFeedId,
    #[strum(serialize = "episodes/byfeedurl")]
    EpisodesByFeedUrl,
    #[strum(serialize = "episodes/byitunesid")]
    EpisodesByItunesId,
    #[strum(serialize = "episodes/byguid")]
    EpisodeByGuid,
    #[strum(serialize = "recent/episodes")]
    RecentEpisodes,
    #[strum(serialize = "recent/feeds")]
    RecentFeeds,
    #[strum(serialize = "value/byfeedid")]
    ValueByFeedId,
    #[strum(serialize = "value/byfeedurl")]
    ValueByFeedUrl,
    #[strum(serialize = "stats/current")]
    StatsCurrent,
    #[strum(serialize = "categories/list")]
    CategoriesList,
}

impl Endpoint {
    /// Path of the endpoint relative to the API host, without a leading slash.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.into()
    }
}

/// HTTP client for the Podcast Index API.
///
/// Cloning is cheap: clones share the credentials and the underlying connection pool.
///
/// # API Base URL
///
/// The default API endpoint is [`DEFAULT_HOST`].
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    /// The [`Url`] against which endpoint paths are resolved. Always ends in `/`.
    host: Url,
    /// The inner [`ReqwestClient`] used to make requests to `host`.
    client: ReqwestClient,
    credentials: Credentials,
    user_agent: HeaderValue,
}

impl Client {
    /// Creates a new client for `host`.
    ///
    /// `host` may carry a path prefix, e.g. `https://api.podcastindex.org/api/1.0`; endpoint
    /// paths are appended beneath it whether or not it ends in a slash.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Configuration`] error if the host is not a valid base URL, the user
    /// agent is not a valid header value, or the HTTP client cannot be built. Nothing is sent
    /// over the network.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let user_agent: HeaderValue = config.user_agent.parse()?;

        let mut headers = HeaderMap::new();

        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));

        let mut builder = ReqwestClient::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::with_source(Kind::Configuration, e))?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                host: base_url(host)?,
                client,
                credentials: config.credentials,
                user_agent,
            }),
        })
    }

    /// Creates a client for [`DEFAULT_HOST`] with the default configuration.
    pub fn with_credentials(credentials: Credentials) -> Result<Client> {
        Client::new(
            DEFAULT_HOST,
            Config::builder().credentials(credentials).build(),
        )
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.inner.host
    }

    /// Returns the credentials requests are signed with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        req: &Req,
    ) -> Result<Res> {
        let query = req.query_params()?;
        let request = self
            .inner
            .client
            .request(Method::GET, format!("{}{endpoint}{query}", self.inner.host))
            .build()?;
        let headers = self.create_headers()?;

        crate::request(&self.inner.client, request, headers).await
    }

    fn create_headers(&self) -> Result<HeaderMap> {
        auth::create_headers(
            &self.inner.credentials,
            &self.inner.user_agent,
            Utc::now().timestamp(),
        )
    }

    /// Searches podcasts whose title, author or owner match the terms in `q`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use podcastindex_client_sdk::Client;
    /// use podcastindex_client_sdk::auth::Credentials;
    /// use podcastindex_client_sdk::types::request::SearchRequest;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::with_credentials(Credentials::from_env()?)?;
    /// let request = SearchRequest::builder().q("no agenda").max(5).build();
    ///
    /// let response = client.search_podcasts(&request).await?;
    /// println!("{:?} feeds found", response.count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_podcasts(&self, request: &SearchRequest) -> Result<ApiResponse<PodcastFeed>> {
        self.get(Endpoint::SearchByTerm, request).await
    }

    /// Searches podcasts by title only.
    pub async fn search_podcasts_by_title(
        &self,
        request: &SearchRequest,
    ) -> Result<ApiResponse<PodcastFeed>> {
        self.get(Endpoint::SearchByTitle, request).await
    }

    /// Searches episodes that mention a person, either in `podcast:person` tags or in the
    /// title, description or feed author.
    pub async fn search_episodes_by_person(
        &self,
        request: &SearchRequest,
    ) -> Result<ApiResponse<Episode>> {
        self.get(Endpoint::SearchByPerson, request).await
    }

    /// Looks up a podcast by its Podcast Index feed id. The result is in `feed`.
    pub async fn podcast_by_feed_id(
        &self,
        request: &PodcastByFeedIdRequest,
    ) -> Result<ApiResponse<PodcastFeed>> {
        self.get(Endpoint::PodcastByFeedId, request).await
    }

    /// Looks up a podcast by its feed URL. The result is in `feed`.
    pub async fn podcast_by_feed_url(
        &self,
        request: &PodcastByFeedUrlRequest,
    ) -> Result<ApiResponse<PodcastFeed>> {
        self.get(Endpoint::PodcastByFeedUrl, request).await
    }

    /// Looks up a podcast by its `podcast:guid`. The result is in `feed`.
    pub async fn podcast_by_guid(
        &self,
        request: &PodcastByGuidRequest,
    ) -> Result<ApiResponse<PodcastFeed>> {
        self.get(Endpoint::PodcastByGuid, request).await
    }

    /// Looks up a podcast by its Apple Podcasts id. The result is in `feed`.
    pub async fn podcast_by_itunes_id(
        &self,
        request: &PodcastByItunesIdRequest,
    ) -> Result<ApiResponse<PodcastFeed>> {
        self.get(Endpoint::PodcastByItunesId, request).await
    }

    /// Lists feeds declaring the given `podcast:medium`. The results are in `feeds`.
    pub async fn podcasts_by_medium(
        &self,
        request: &PodcastsByMediumRequest,
    ) -> Result<ApiResponse<PodcastFeed>> {
        self.get(Endpoint::PodcastsByMedium, request).await
    }

    /// Lists the episodes of one or more feeds, newest first. The results are in `items`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use podcastindex_client_sdk::Client;
    /// use podcastindex_client_sdk::auth::Credentials;
    /// use podcastindex_client_sdk::types::request::EpisodesByFeedIdRequest;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::with_credentials(Credentials::from_env()?)?;
    /// let request = EpisodesByFeedIdRequest::builder().id(vec![75075]).max(3).build();
    ///
    /// for episode in client.episodes_by_feed_id(&request).await?.items.unwrap_or_default() {
    ///     println!("{:?} published {:?}", episode.title, episode.published_at());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn episodes_by_feed_id(
        &self,
        request: &EpisodesByFeedIdRequest,
    ) -> Result<ApiResponse<Episode>> {
        self.get(Endpoint::EpisodesByFeedId, request).await
    }

    /// Lists the episodes of the feed at `url`. The results are in `items`.
    pub async fn episodes_by_feed_url(
        &self,
        request: &EpisodesByFeedUrlRequest,
    ) -> Result<ApiResponse<Episode>> {
        self.get(Endpoint::EpisodesByFeedUrl, request).await
    }

    /// Lists the episodes of the feed with the given Apple Podcasts id. The results are in
    /// `items`.
    pub async fn episodes_by_itunes_id(
        &self,
        request: &EpisodesByItunesIdRequest,
    ) -> Result<ApiResponse<Episode>> {
        self.get(Endpoint::EpisodesByItunesId, request).await
    }

    /// Looks up a single episode by its GUID. The result is in `episode`.
    pub async fn episode_by_guid(
        &self,
        request: &EpisodeByGuidRequest,
    ) -> Result<ApiResponse<Episode>> {
        self.get(Endpoint::EpisodeByGuid, request).await
    }

    /// Lists the most recently published episodes across the whole index.
    pub async fn recent_episodes(
        &self,
        request: &RecentEpisodesRequest,
    ) -> Result<ApiResponse<Episode>> {
        self.get(Endpoint::RecentEpisodes, request).await
    }

    /// Lists the most recently updated feeds.
    pub async fn recent_feeds(
        &self,
        request: &RecentFeedsRequest,
    ) -> Result<ApiResponse<PodcastFeed>> {
        self.get(Endpoint::RecentFeeds, request).await
    }

    /// Fetches the `podcast:value` block of a feed by id. The result is in `value`.
    pub async fn value_by_feed_id(
        &self,
        request: &ValueByFeedIdRequest,
    ) -> Result<ApiResponse<ValueBlock>> {
        self.get(Endpoint::ValueByFeedId, request).await
    }

    /// Fetches the `podcast:value` block of a feed by URL. The result is in `value`.
    pub async fn value_by_feed_url(
        &self,
        request: &ValueByFeedUrlRequest,
    ) -> Result<ApiResponse<ValueBlock>> {
        self.get(Endpoint::ValueByFeedUrl, request).await
    }

    /// Fetches index-wide counters. The result is in `stats`.
    pub async fn stats(&self) -> Result<ApiResponse<Stats>> {
        self.get(Endpoint::StatsCurrent, &()).await
    }

    /// Lists every category known to the index. The results are in `feeds`.
    pub async fn categories(&self) -> Result<ApiResponse<Category>> {
        self.get(Endpoint::CategoriesList, &()).await
    }
}

fn base_url(host: &str) -> Result<Url> {
    let mut url = Url::parse(host)?;

    if url.cannot_be_a_base() {
        return Err(Error::configuration(format!("{host} cannot be used as a base URL")));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
