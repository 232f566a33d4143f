//! Error types for session client calls.

use std::io::ErrorKind;

use jsonrpsee::core::ClientError;
use styx_protocol::codes;
use thiserror::Error;

/// Result type alias for session client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by session client operations.
///
/// Transport failures and service answers are passed through as received;
/// the client never retries or substitutes a value.
#[derive(Debug, Error)]
pub enum Error {
	/// The connection could not be established, broke during the call, timed
	/// out, or the reply could not be decoded.
	#[error("transport error: {0}")]
	Transport(#[source] ClientError),

	/// The service answered the request with an error object.
	#[error("remote error {code}: {message}")]
	Remote {
		/// JSON-RPC error code, see [`styx_protocol::codes`].
		code: i32,
		message: String,
		/// Raw JSON of the error's `data` member, if any.
		data: Option<String>,
	},
}

impl Error {
	/// Returns the remote error code, if the service answered with one.
	pub fn code(&self) -> Option<i32> {
		match self {
			Error::Remote { code, .. } => Some(*code),
			Error::Transport(_) => None,
		}
	}

	/// Returns true if the service reported that no session matches the token.
	pub fn is_not_found(&self) -> bool {
		self.code() == Some(codes::NOT_FOUND)
	}

	/// Returns true if the call ran past the configured request timeout.
	pub fn is_timeout(&self) -> bool {
		matches!(self, Error::Transport(ClientError::RequestTimeout))
	}

	/// Returns true if this is a remote error.
	pub fn is_remote(&self) -> bool {
		matches!(self, Error::Remote { .. })
	}

	/// Returns true if the service could not be reached at all: the connection
	/// was refused, reset, or timed out while connecting.
	///
	/// A request deadline expiring against a reachable service is not
	/// unreachability; see [`Error::is_timeout`].
	pub fn is_unreachable(&self) -> bool {
		match self {
			Error::Transport(err) => is_unreachable_error(err),
			Error::Remote { .. } => false,
		}
	}
}

impl From<ClientError> for Error {
	fn from(err: ClientError) -> Self {
		match err {
			ClientError::Call(obj) => Error::Remote {
				code: obj.code(),
				message: obj.message().to_string(),
				data: obj.data().map(|raw| raw.get().to_string()),
			},
			other => Error::Transport(other),
		}
	}
}

fn is_unreachable_error(err: &ClientError) -> bool {
	let ClientError::Transport(transport_err) = err else {
		return false;
	};

	// HTTP transports nest the io error a few sources below the payload.
	let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&**transport_err);
	while let Some(current) = source {
		if let Some(io_err) = current.downcast_ref::<std::io::Error>() {
			if matches!(
				io_err.kind(),
				ErrorKind::ConnectionRefused | ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::NotConnected | ErrorKind::TimedOut
			) {
				return true;
			}
		}
		source = current.source();
	}

	// hyper reports resolver failures and dropped sockets only as text.
	let msg = transport_err.to_string().to_ascii_lowercase();
	msg.contains("dns error") || msg.contains("tcp connect error") || msg.contains("connection closed before message completed")
}
