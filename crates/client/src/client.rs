use jsonrpsee::core::ClientError;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use styx_protocol::{CreateSessionRequest, DeleteSessionByTokenRequest, FindSessionByTokenRequest, Session, SessionManagementClient};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::options::CreateOptions;

/// Handle to a session service.
///
/// Holds configuration only. Every call opens its own connection and drops it
/// before returning, on success and on error alike, so a `SessionClient` can
/// be cloned and shared between tasks freely.
#[derive(Debug, Clone)]
pub struct SessionClient {
	config: ClientConfig,
}

impl SessionClient {
	/// Creates a client for the service at `address` with default settings.
	pub fn new(address: impl Into<String>) -> Self {
		Self::with_config(ClientConfig::new(address))
	}

	pub fn with_config(config: ClientConfig) -> Self {
		Self { config }
	}

	/// Creates a session holding `payload` and `policies`.
	pub async fn create<I>(&self, payload: impl Into<Vec<u8>>, policies: I) -> Result<Session>
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.create_with(payload, policies, CreateOptions::new()).await
	}

	/// Creates a session owned by the credential `owner_token`.
	pub async fn create_with_token<I>(&self, owner_token: impl Into<String>, payload: impl Into<Vec<u8>>, policies: I) -> Result<Session>
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		let options = CreateOptions::new().owner_token(owner_token);
		self.create_with(payload, policies, options).await
	}

	/// Creates an owned session that expires at `expiration`.
	pub async fn create_with_validity<I>(
		&self,
		owner_token: impl Into<String>,
		expiration: std::time::SystemTime,
		payload: impl Into<Vec<u8>>,
		policies: I,
	) -> Result<Session>
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		let options = CreateOptions::new().owner_token(owner_token).expiration(expiration);
		self.create_with(payload, policies, options).await
	}

	/// Creates a session with the optional fields in `options` set.
	///
	/// Returns the session as stored by the service, including its token.
	pub async fn create_with<I>(&self, payload: impl Into<Vec<u8>>, policies: I, options: CreateOptions) -> Result<Session>
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		let session = options.apply(Session::new(payload, policies));
		debug!(
			target = "styx.client",
			address = %self.config.address(),
			policies = session.policies.len(),
			owned = session.owner().is_some(),
			expires = session.valid_to.is_some(),
			"creating session"
		);

		let client = self.connect()?;
		let reply = client.create_session(CreateSessionRequest { session }).await;
		self.finish("createSession", reply).map(|reply| reply.session)
	}

	/// Looks up the session identified by `token`.
	///
	/// A missing session is reported by the service as a remote error, see
	/// [`Error::is_not_found`].
	pub async fn get(&self, token: impl Into<String>) -> Result<Session> {
		debug!(target = "styx.client", address = %self.config.address(), "finding session");

		let client = self.connect()?;
		let reply = client.find_session_by_token(FindSessionByTokenRequest { token: token.into() }).await;
		self.finish("findSessionByToken", reply).map(|reply| reply.session)
	}

	/// Deletes the session identified by `token`, returning its last state.
	pub async fn delete(&self, token: impl Into<String>) -> Result<Session> {
		debug!(target = "styx.client", address = %self.config.address(), "deleting session");

		let client = self.connect()?;
		let reply = client.delete_session_by_token(DeleteSessionByTokenRequest { token: token.into() }).await;
		self.finish("deleteSessionByToken", reply).map(|reply| reply.session)
	}

	fn connect(&self) -> Result<HttpClient> {
		let mut builder = HttpClientBuilder::default();
		if let Some(timeout) = self.config.request_timeout_limit() {
			builder = builder.request_timeout(timeout);
		}
		if let Some(bytes) = self.config.request_size_limit() {
			builder = builder.max_request_size(bytes);
		}
		if let Some(bytes) = self.config.response_size_limit() {
			builder = builder.max_response_size(bytes);
		}

		let url = self.config.endpoint_url();
		builder.build(&url).map_err(|err| {
			debug!(target = "styx.client", url, error = %err, "failed to build session client");
			Error::Transport(err)
		})
	}

	fn finish<T>(&self, method: &'static str, reply: std::result::Result<T, ClientError>) -> Result<T> {
		reply.map_err(|err| {
			let err = Error::from(err);
			debug!(target = "styx.client", method, address = %self.config.address(), error = %err, "session call failed");
			err
		})
	}
}
