//! Client for the styx session-management service.
//!
//! A session carries an opaque payload, a list of policy identifiers, an
//! optional owner token and an optional expiration. The service assigns each
//! session a lookup token; this crate only marshals requests and hands back
//! what the service answers. There is no caching, no retry and no pooling:
//! every call opens its own plaintext connection and closes it before
//! returning.
//!
//! # Example
//!
//! ```ignore
//! use std::time::{Duration, SystemTime};
//!
//! let created = styx::create_session("127.0.0.1:3000", b"hello".to_vec(), ["admin"]).await?;
//! let found = styx::get_session("127.0.0.1:3000", &created.token).await?;
//! assert_eq!(found.payload, b"hello");
//!
//! // Owned session valid for one hour, with a per-call deadline.
//! let client = styx::SessionClient::with_config(
//!     styx::ClientConfig::new("127.0.0.1:3000").request_timeout(Duration::from_secs(5)),
//! );
//! let options = styx::CreateOptions::new()
//!     .owner_token(&created.token)
//!     .expiration(SystemTime::now() + Duration::from_secs(3600));
//! client.create_with(b"child".to_vec(), ["read"], options).await?;
//! ```

mod client;
mod config;
mod error;
mod options;

use std::time::SystemTime;

pub use client::SessionClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use options::CreateOptions;
pub use styx_protocol as protocol;
pub use styx_protocol::{Session, Timestamp};

/// Creates a session with only `payload` and `policies` set.
pub async fn create_session<I>(address: &str, payload: impl Into<Vec<u8>>, policies: I) -> Result<Session>
where
	I: IntoIterator,
	I::Item: Into<String>,
{
	SessionClient::new(address).create(payload, policies).await
}

/// Creates a session owned by `owner_token`.
pub async fn create_session_with_token<I>(address: &str, owner_token: &str, payload: impl Into<Vec<u8>>, policies: I) -> Result<Session>
where
	I: IntoIterator,
	I::Item: Into<String>,
{
	SessionClient::new(address).create_with_token(owner_token, payload, policies).await
}

/// Creates a session owned by `owner_token` that expires at `expiration`.
pub async fn create_session_with_validity<I>(
	address: &str,
	owner_token: &str,
	expiration: SystemTime,
	payload: impl Into<Vec<u8>>,
	policies: I,
) -> Result<Session>
where
	I: IntoIterator,
	I::Item: Into<String>,
{
	SessionClient::new(address)
		.create_with_validity(owner_token, expiration, payload, policies)
		.await
}

/// Creates a session with the optional fields in `options` set.
pub async fn create_session_with<I>(address: &str, payload: impl Into<Vec<u8>>, policies: I, options: CreateOptions) -> Result<Session>
where
	I: IntoIterator,
	I::Item: Into<String>,
{
	SessionClient::new(address).create_with(payload, policies, options).await
}

/// Finds the session identified by `token`.
pub async fn get_session(address: &str, token: &str) -> Result<Session> {
	SessionClient::new(address).get(token).await
}

/// Deletes the session identified by `token` and returns its last state.
pub async fn delete_session(address: &str, token: &str) -> Result<Session> {
	SessionClient::new(address).delete(token).await
}
