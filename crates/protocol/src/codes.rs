//! JSON-RPC error codes used by session services.
//!
//! Service-specific codes sit in the implementation-defined
//! `-32099..=-32000` range; malformed and internal failures reuse the
//! pre-defined JSON-RPC codes.

use jsonrpsee::types::ErrorObjectOwned;

/// Malformed request (JSON-RPC "invalid params").
pub const INVALID_ARGUMENT: i32 = -32602;

/// Unexpected failure inside the service (JSON-RPC "internal error").
pub const INTERNAL: i32 = -32603;

/// The caller may not perform this action under the given policies.
pub const PERMISSION_DENIED: i32 = -32003;

/// No session exists for the given token.
pub const NOT_FOUND: i32 = -32004;

/// Builds an error object without attached data.
pub fn error_object(code: i32, message: impl Into<String>) -> ErrorObjectOwned {
	ErrorObjectOwned::owned(code, message.into(), None::<()>)
}

/// Not-found error for a session token.
pub fn session_not_found(token: &str) -> ErrorObjectOwned {
	error_object(NOT_FOUND, format!("session not found: {token}"))
}
