//! Request envelopes and the `SessionManagement` RPC surface.
//!
//! Methods are exposed under the `session` namespace, e.g.
//! `session_createSession`. Every reply carries exactly one [`Session`]; an
//! envelope without one fails to decode.

use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;
use serde::{Deserialize, Serialize};

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
	pub session: Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionResponse {
	pub session: Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindSessionByTokenRequest {
	pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindSessionByTokenResponse {
	pub session: Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSessionByTokenRequest {
	pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSessionByTokenResponse {
	pub session: Session,
}

#[rpc(client, server, namespace = "session")]
pub trait SessionManagement {
	/// Stores a new session and returns it with its service-assigned token.
	#[method(name = "createSession")]
	async fn create_session(&self, request: CreateSessionRequest) -> RpcResult<CreateSessionResponse>;

	#[method(name = "findSessionByToken")]
	async fn find_session_by_token(&self, request: FindSessionByTokenRequest) -> RpcResult<FindSessionByTokenResponse>;

	/// Removes a session and returns its last known state.
	#[method(name = "deleteSessionByToken")]
	async fn delete_session_by_token(&self, request: DeleteSessionByTokenRequest) -> RpcResult<DeleteSessionByTokenResponse>;
}
