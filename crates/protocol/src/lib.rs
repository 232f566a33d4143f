//! Wire types for the styx session-management protocol.
//!
//! This crate contains the serde-serializable types exchanged with a styx
//! session service over JSON-RPC, and the [`SessionManagement`](rpc) RPC
//! trait declared for both the client and the server side.
//!
//! # Main Types
//!
//! - [`Session`] - The remote session record
//! - [`Timestamp`] - Seconds + nanoseconds since the Unix epoch
//! - [`CreateSessionRequest`], [`FindSessionByTokenRequest`],
//!   [`DeleteSessionByTokenRequest`] - Request envelopes
//! - [`codes`] - Error codes a session service answers with

pub mod codes;
pub mod rpc;
pub mod session;

pub use rpc::*;
pub use session::*;
