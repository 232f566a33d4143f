//! Session record and timestamp as they appear on the wire.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A session held by the remote service.
///
/// The client never assigns [`token`](Self::token) or
/// [`created`](Self::created); both are filled in by the service in replies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
	/// Lookup token assigned by the service, empty in create requests.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub token: String,
	/// Token of the credential owning this session, empty when unowned.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub owner_token: String,
	/// Creation time assigned by the service.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created: Option<Timestamp>,
	/// Absolute expiration, [`None`] for sessions without one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub valid_to: Option<Timestamp>,
	/// Opaque caller-defined bytes, base64 on the wire.
	#[serde(default, with = "base64_bytes")]
	pub payload: Vec<u8>,
	/// Policy identifiers the service authorizes actions against.
	#[serde(default)]
	pub policies: Vec<String>,
}

impl Session {
	/// Creates a session carrying only a payload and its policies.
	pub fn new<I>(payload: impl Into<Vec<u8>>, policies: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self {
			payload: payload.into(),
			policies: policies.into_iter().map(Into::into).collect(),
			..Self::default()
		}
	}

	/// Sets the owner token.
	pub fn with_owner_token(mut self, owner_token: impl Into<String>) -> Self {
		self.owner_token = owner_token.into();
		self
	}

	/// Sets the expiration.
	pub fn with_valid_to(mut self, valid_to: impl Into<Timestamp>) -> Self {
		self.valid_to = Some(valid_to.into());
		self
	}

	/// Returns the owner token, or [`None`] when the session is unowned.
	pub fn owner(&self) -> Option<&str> {
		(!self.owner_token.is_empty()).then_some(self.owner_token.as_str())
	}

	/// Returns the expiration as a [`SystemTime`], if set and representable.
	pub fn expires_at(&self) -> Option<SystemTime> {
		self.valid_to.and_then(|ts| ts.to_system_time())
	}
}

/// Point in time as whole seconds since the Unix epoch plus a nanosecond remainder.
///
/// `nanos` is always in `0..1_000_000_000`, also for times before the epoch:
/// one nanosecond before the epoch is `{ seconds: -1, nanos: 999_999_999 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
	pub seconds: i64,
	pub nanos: i32,
}

impl Timestamp {
	pub const fn new(seconds: i64, nanos: i32) -> Self {
		Self { seconds, nanos }
	}

	/// Returns true if `nanos` lies in the canonical range.
	pub fn is_valid(&self) -> bool {
		(0..NANOS_PER_SECOND as i32).contains(&self.nanos)
	}

	/// Converts back to a [`SystemTime`].
	///
	/// Returns [`None`] for non-canonical nanos or values the platform clock
	/// cannot represent.
	pub fn to_system_time(self) -> Option<SystemTime> {
		if !self.is_valid() {
			return None;
		}
		let nanos = Duration::from_nanos(self.nanos as u64);
		if self.seconds >= 0 {
			UNIX_EPOCH.checked_add(Duration::from_secs(self.seconds as u64))?.checked_add(nanos)
		} else {
			UNIX_EPOCH.checked_sub(Duration::from_secs(self.seconds.unsigned_abs()))?.checked_add(nanos)
		}
	}
}

impl From<SystemTime> for Timestamp {
	fn from(time: SystemTime) -> Self {
		match time.duration_since(UNIX_EPOCH) {
			Ok(since) => Self::new(since.as_secs() as i64, since.subsec_nanos() as i32),
			Err(err) => {
				let before = err.duration();
				let seconds = -(before.as_secs() as i64);
				match before.subsec_nanos() {
					0 => Self::new(seconds, 0),
					nanos => Self::new(seconds - 1, (NANOS_PER_SECOND - nanos) as i32),
				}
			}
		}
	}
}

mod base64_bytes {
	use base64::Engine;
	use base64::prelude::BASE64_STANDARD;
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&BASE64_STANDARD.encode(bytes))
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
		let encoded = String::deserialize(deserializer)?;
		BASE64_STANDARD.decode(encoded).map_err(serde::de::Error::custom)
	}
}
