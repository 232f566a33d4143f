//! Client configuration.

use std::time::Duration;

/// Where and how to reach a session service.
///
/// Only the address is required. Everything else defaults to the transport's
/// own behavior; in particular no request timeout is applied unless one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
	address: String,
	request_timeout: Option<Duration>,
	max_request_size: Option<u32>,
	max_response_size: Option<u32>,
}

impl ClientConfig {
	/// Creates a configuration for the service at `address`.
	///
	/// Accepts `host:port` or an `http://` URL.
	pub fn new(address: impl Into<String>) -> Self {
		Self {
			address: address.into(),
			request_timeout: None,
			max_request_size: None,
			max_response_size: None,
		}
	}

	/// Sets a deadline for each call.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = Some(timeout);
		self
	}

	/// Sets the maximum encoded request size in bytes.
	pub fn max_request_size(mut self, bytes: u32) -> Self {
		self.max_request_size = Some(bytes);
		self
	}

	/// Sets the maximum accepted response size in bytes.
	pub fn max_response_size(mut self, bytes: u32) -> Self {
		self.max_response_size = Some(bytes);
		self
	}

	pub fn address(&self) -> &str {
		&self.address
	}

	pub(crate) fn request_timeout_limit(&self) -> Option<Duration> {
		self.request_timeout
	}

	pub(crate) fn request_size_limit(&self) -> Option<u32> {
		self.max_request_size
	}

	pub(crate) fn response_size_limit(&self) -> Option<u32> {
		self.max_response_size
	}

	/// Returns the URL the transport connects to.
	///
	/// Bare `host:port` addresses get the plaintext `http://` scheme.
	pub fn endpoint_url(&self) -> String {
		let address = self.address.trim();
		if address.contains("://") {
			address.to_string()
		} else {
			format!("http://{address}")
		}
	}
}
