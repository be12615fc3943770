#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use httpmock::MockServer;
use podcastindex_client_sdk::auth::{Credentials, sign};
use podcastindex_client_sdk::{Client, Config};

pub const API_KEY: &str = "test-auth-key";
pub const API_SECRET: &str = "test-secret-key";
pub const USER_AGENT: &str = "podcastindex-client-sdk-tests/1.0";

#[must_use]
pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).unwrap()
}

#[must_use]
pub fn client(server: &MockServer) -> Client {
    let config = Config::builder()
        .credentials(credentials())
        .user_agent(USER_AGENT)
        .build();

    Client::new(&server.base_url(), config).unwrap()
}

/// Returns true when `digest` is the signature of the test key pair at `timestamp`.
#[must_use]
pub fn is_valid_signature(timestamp: &str, digest: &str) -> bool {
    timestamp
        .parse()
        .is_ok_and(|timestamp| sign(API_KEY, API_SECRET, timestamp).digest == digest)
}
