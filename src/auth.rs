//! Request authentication for the Podcast Index API.
//!
//! Every request carries four headers: the API key, the unix timestamp the request was signed at,
//! a user agent, and an `Authorization` digest. The digest is the lowercase hex SHA-1 of
//! `key + secret + timestamp`, so it is only valid for a short window around the timestamp and is
//! recomputed for every call.

use reqwest::header::{HeaderMap, HeaderValue};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest as _, Sha1};

use crate::error::Error;
use crate::{Result, Timestamp};

pub(crate) const X_AUTH_KEY: &str = "X-Auth-Key";
pub(crate) const X_AUTH_DATE: &str = "X-Auth-Date";
pub(crate) const AUTHORIZATION: &str = "Authorization";
pub(crate) const USER_AGENT: &str = "User-Agent";

/// Environment variable read by [`Credentials::from_env`] for the API key.
pub const API_KEY_VAR: &str = "PODCAST_INDEX_API_KEY";
/// Environment variable read by [`Credentials::from_env`] for the API secret.
pub const API_SECRET_VAR: &str = "PODCAST_INDEX_API_SECRET";

/// Key pair issued by <https://api.podcastindex.org>. Both halves are required; the secret never
/// leaves the client and is redacted from `Debug` output.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) key: String,
    pub(crate) secret: SecretString,
}

impl Credentials {
    /// Creates a new key pair.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Configuration`] error if either the key or the secret is
    /// empty or only whitespace.
    pub fn new<K: Into<String>, S: Into<String>>(key: K, secret: S) -> Result<Self> {
        let key = key.into();
        let secret = secret.into();

        if key.trim().is_empty() {
            return Err(Error::configuration("API key must not be empty"));
        }
        if secret.trim().is_empty() {
            return Err(Error::configuration("API secret must not be empty"));
        }

        Ok(Self {
            key,
            secret: SecretString::from(secret),
        })
    }

    /// Reads the key pair from [`API_KEY_VAR`] and [`API_SECRET_VAR`].
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(API_SECRET_VAR).ok(),
        )
    }

    fn from_vars(key: Option<String>, secret: Option<String>) -> Result<Self> {
        let key = key.ok_or_else(|| Error::configuration(format!("{API_KEY_VAR} is not set")))?;
        let secret =
            secret.ok_or_else(|| Error::configuration(format!("{API_SECRET_VAR} is not set")))?;

        Self::new(key, secret)
    }

    /// Returns the API key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the secret.
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Signs with these credentials at `timestamp`.
    #[must_use]
    pub fn sign(&self, timestamp: Timestamp) -> RequestSignature {
        sign(&self.key, self.secret.expose_secret(), timestamp)
    }
}

/// The timestamp a request was signed at, and the digest proving knowledge of the secret.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSignature {
    /// Seconds since the unix epoch, sent as `X-Auth-Date`.
    pub timestamp: Timestamp,
    /// Lowercase hex SHA-1, sent as `Authorization`.
    pub digest: String,
}

/// Computes the signature for `key`, `secret` and `timestamp`.
///
/// The timestamp is appended in its decimal form, e.g. `sign("k", "s", 5)` hashes `"ks5"`.
#[must_use]
pub fn sign(key: &str, secret: &str, timestamp: Timestamp) -> RequestSignature {
    let mut hasher = Sha1::new();
    hasher.update(key.as_bytes());
    hasher.update(secret.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());

    RequestSignature {
        timestamp,
        digest: hex::encode(hasher.finalize()),
    }
}

/// Returns the [`HeaderMap`] that authenticates a single request signed at `timestamp`.
pub(crate) fn create_headers(
    credentials: &Credentials,
    user_agent: &HeaderValue,
    timestamp: Timestamp,
) -> Result<HeaderMap> {
    let signature = credentials.sign(timestamp);

    let mut map = HeaderMap::new();

    map.insert(X_AUTH_KEY, credentials.key.parse()?);
    map.insert(X_AUTH_DATE, signature.timestamp.to_string().parse()?);
    map.insert(AUTHORIZATION, signature.digest.parse()?);
    map.insert(USER_AGENT, user_agent.clone());

    Ok(map)
}
