#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use jsonrpsee::core::{RpcResult, async_trait};
use jsonrpsee::server::{Server, ServerHandle};
use styx::protocol::codes;
use styx::protocol::{
	CreateSessionRequest, CreateSessionResponse, DeleteSessionByTokenRequest, DeleteSessionByTokenResponse, FindSessionByTokenRequest,
	FindSessionByTokenResponse, Session, SessionManagementServer, Timestamp,
};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,styx=debug"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_test_writer()
		.compact()
		.try_init();
}

/// Running stub service; stops when dropped.
pub struct StubServer {
	pub addr: SocketAddr,
	handle: ServerHandle,
}

impl StubServer {
	/// Address in the bare `host:port` form callers usually pass.
	pub fn address(&self) -> String {
		self.addr.to_string()
	}
}

impl Drop for StubServer {
	fn drop(&mut self) {
		let _ = self.handle.stop();
	}
}

pub async fn spawn<S: SessionManagementServer>(service: S) -> anyhow::Result<StubServer> {
	init_tracing();
	let server = Server::builder().build("127.0.0.1:0").await?;
	let addr = server.local_addr()?;
	let handle = server.start(service.into_rpc());
	Ok(StubServer { addr, handle })
}

/// Answers every request with the session it was sent.
pub struct EchoService;

#[async_trait]
impl SessionManagementServer for EchoService {
	async fn create_session(&self, request: CreateSessionRequest) -> RpcResult<CreateSessionResponse> {
		Ok(CreateSessionResponse { session: request.session })
	}

	async fn find_session_by_token(&self, request: FindSessionByTokenRequest) -> RpcResult<FindSessionByTokenResponse> {
		Ok(FindSessionByTokenResponse {
			session: Session {
				token: request.token,
				..Session::default()
			},
		})
	}

	async fn delete_session_by_token(&self, request: DeleteSessionByTokenRequest) -> RpcResult<DeleteSessionByTokenResponse> {
		Ok(DeleteSessionByTokenResponse {
			session: Session {
				token: request.token,
				..Session::default()
			},
		})
	}
}

/// In-memory session store that assigns tokens on create.
///
/// Rejects sessions without policies with `INVALID_ARGUMENT`.
#[derive(Default)]
pub struct MemoryService {
	sessions: RwLock<HashMap<String, Session>>,
	next_id: AtomicU64,
}

#[async_trait]
impl SessionManagementServer for MemoryService {
	async fn create_session(&self, request: CreateSessionRequest) -> RpcResult<CreateSessionResponse> {
		let mut session = request.session;
		if session.policies.is_empty() {
			return Err(codes::error_object(codes::INVALID_ARGUMENT, "session needs at least one policy"));
		}

		let id = self.next_id.fetch_add(1, Ordering::SeqCst);
		session.token = format!("tok-{id}");
		session.created = Some(Timestamp::from(SystemTime::now()));
		self.sessions.write().await.insert(session.token.clone(), session.clone());
		Ok(CreateSessionResponse { session })
	}

	async fn find_session_by_token(&self, request: FindSessionByTokenRequest) -> RpcResult<FindSessionByTokenResponse> {
		match self.sessions.read().await.get(&request.token) {
			Some(session) => Ok(FindSessionByTokenResponse { session: session.clone() }),
			None => Err(codes::session_not_found(&request.token)),
		}
	}

	async fn delete_session_by_token(&self, request: DeleteSessionByTokenRequest) -> RpcResult<DeleteSessionByTokenResponse> {
		match self.sessions.write().await.remove(&request.token) {
			Some(session) => Ok(DeleteSessionByTokenResponse { session }),
			None => Err(codes::session_not_found(&request.token)),
		}
	}
}

/// Echoes after a fixed delay.
pub struct SlowService(pub Duration);

#[async_trait]
impl SessionManagementServer for SlowService {
	async fn create_session(&self, request: CreateSessionRequest) -> RpcResult<CreateSessionResponse> {
		tokio::time::sleep(self.0).await;
		EchoService.create_session(request).await
	}

	async fn find_session_by_token(&self, request: FindSessionByTokenRequest) -> RpcResult<FindSessionByTokenResponse> {
		tokio::time::sleep(self.0).await;
		EchoService.find_session_by_token(request).await
	}

	async fn delete_session_by_token(&self, request: DeleteSessionByTokenRequest) -> RpcResult<DeleteSessionByTokenResponse> {
		tokio::time::sleep(self.0).await;
		EchoService.delete_session_by_token(request).await
	}
}

/// TCP proxy in front of a stub that counts the connections passing through.
pub struct CountingProxy {
	pub addr: SocketAddr,
	live: Arc<AtomicUsize>,
	total: Arc<AtomicUsize>,
}

impl CountingProxy {
	pub fn address(&self) -> String {
		self.addr.to_string()
	}

	pub fn live(&self) -> usize {
		self.live.load(Ordering::SeqCst)
	}

	pub fn total(&self) -> usize {
		self.total.load(Ordering::SeqCst)
	}

	/// Waits up to `timeout` for the number of open connections to drop to `max` or below.
	pub async fn wait_for_live_at_most(&self, max: usize, timeout: Duration) -> bool {
		let deadline = tokio::time::Instant::now() + timeout;
		while tokio::time::Instant::now() < deadline {
			if self.live() <= max {
				return true;
			}
			tokio::time::sleep(Duration::from_millis(20)).await;
		}
		self.live() <= max
	}
}

pub async fn spawn_counting_proxy(upstream: SocketAddr) -> anyhow::Result<CountingProxy> {
	let listener = TcpListener::bind("127.0.0.1:0").await?;
	let addr = listener.local_addr()?;
	let live = Arc::new(AtomicUsize::new(0));
	let total = Arc::new(AtomicUsize::new(0));

	let (live_accept, total_accept) = (Arc::clone(&live), Arc::clone(&total));
	tokio::spawn(async move {
		while let Ok((mut inbound, _)) = listener.accept().await {
			live_accept.fetch_add(1, Ordering::SeqCst);
			total_accept.fetch_add(1, Ordering::SeqCst);
			let live = Arc::clone(&live_accept);
			tokio::spawn(async move {
				if let Ok(mut outbound) = TcpStream::connect(upstream).await {
					let _ = tokio::io::copy_bidirectional(&mut inbound, &mut outbound).await;
				}
				live.fetch_sub(1, Ordering::SeqCst);
			});
		}
	});

	Ok(CountingProxy { addr, live, total })
}

/// Address nothing is listening on.
pub fn unused_address() -> anyhow::Result<String> {
	let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
	let addr = listener.local_addr()?;
	drop(listener);
	Ok(addr.to_string())
}
