//! Options for creating a session.

use std::time::SystemTime;

use styx_protocol::{Session, Timestamp};

/// Optional fields of a new session.
///
/// Collapses the owner-token and expiration variants of session creation into
/// one call:
///
/// ```ignore
/// let options = CreateOptions::new().owner_token("user-token").expiration(expires);
/// client.create_with(payload, ["admin"], options).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOptions {
	pub owner_token: Option<String>,
	pub expiration: Option<Timestamp>,
}

impl CreateOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the credential owning the session.
	pub fn owner_token(mut self, token: impl Into<String>) -> Self {
		self.owner_token = Some(token.into());
		self
	}

	/// Sets the absolute time after which the session expires.
	pub fn expiration(mut self, at: SystemTime) -> Self {
		self.expiration = Some(Timestamp::from(at));
		self
	}

	/// Builds the session sent in a create request.
	pub(crate) fn apply(self, mut session: Session) -> Session {
		if let Some(token) = self.owner_token {
			session.owner_token = token;
		}
		session.valid_to = self.expiration;
		session
	}
}
