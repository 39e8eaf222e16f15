//! Gateway client: session ownership plus the typed business operations.
//!
//! [`Daraja`] owns the immutable [`Config`], the shared transport behind an [`Executor`], and
//! the single [`Session`] all clones share. The session manager lives in [`authorize`] and the
//! business operations in [`operations`]; both are `impl` blocks on [`Daraja`].

pub mod authorize;
pub mod operations;

mod metrics;

pub use authorize::*;
pub use metrics::AuthorizeMetrics;
pub use operations::*;

// self
use crate::{
	_prelude::*,
	auth::Session,
	config::Config,
	executor::Executor,
	http::GatewayTransport,
	payload::StkPassword,
};
#[cfg(feature = "reqwest")] use crate::{error::ConfigError, http::ReqwestTransport};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestDaraja = Daraja<ReqwestTransport>;

/// Typed client for one set of gateway credentials.
///
/// Clones share the transport, configuration, session, and single-flight guard, so a client
/// can be handed to many tasks while the gateway sees at most one token exchange at a time.
/// The session is read and written as a token/expiry pair under one lock and never held
/// across an `.await`.
pub struct Daraja<T>
where
	T: ?Sized + GatewayTransport,
{
	/// Immutable configuration (environment, credentials, endpoints).
	pub config: Arc<Config>,
	/// Executor performing every business exchange.
	pub executor: Executor<T>,
	/// Counters for token exchanges.
	pub authorize_metrics: Arc<AuthorizeMetrics>,
	session: Arc<RwLock<Session>>,
	authorize_guard: Arc<AsyncMutex<()>>,
}
impl<T> Daraja<T>
where
	T: ?Sized + GatewayTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(config: impl Into<Arc<Config>>, transport: impl Into<Arc<T>>) -> Self {
		Self {
			config: config.into(),
			executor: Executor::new(transport),
			authorize_metrics: Default::default(),
			session: Default::default(),
			authorize_guard: Default::default(),
		}
	}

	/// Returns a copy of the current token/expiry pair.
	pub fn session(&self) -> Session {
		self.session.read().clone()
	}

	/// Returns `true` when the stored token has expired (or was never issued) and must be
	/// re-acquired before the next request.
	///
	/// The check is `now > expires_at`; a token is still usable at its exact expiry instant.
	pub fn requires_authorization(&self) -> bool {
		self.session.read().requires_authorization()
	}

	/// Derives the STK push password for `instant` from the configured shortcode + passkey.
	pub fn stk_password(&self, instant: OffsetDateTime) -> Result<StkPassword> {
		let credentials = &self.config.credentials;
		let shortcode = credentials.require_shortcode()?;
		let passkey = credentials.require_passkey()?;

		Ok(StkPassword::generate(shortcode, passkey, instant))
	}

	pub(crate) fn store_session(&self, session: Session) {
		*self.session.write() = session;
	}
}
#[cfg(feature = "reqwest")]
impl Daraja<ReqwestTransport> {
	/// Creates a new client that provisions its own reqwest transport.
	pub fn new(config: impl Into<Arc<Config>>) -> Result<Self, ConfigError> {
		Ok(Self::with_transport(config, ReqwestTransport::new()?))
	}
}
impl<T> Clone for Daraja<T>
where
	T: ?Sized + GatewayTransport,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			executor: self.executor.clone(),
			authorize_metrics: self.authorize_metrics.clone(),
			session: self.session.clone(),
			authorize_guard: self.authorize_guard.clone(),
		}
	}
}
impl<T> Debug for Daraja<T>
where
	T: ?Sized + GatewayTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Daraja")
			.field("environment", &self.config.environment)
			.field("base_url", &self.config.base_url.as_str())
			.field("session", &*self.session.read())
			.finish()
	}
}
