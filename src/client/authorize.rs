//! Session manager: client-credential token exchange with single-flight re-authorization.
//!
//! [`Daraja::authorize`] trades the consumer key/secret for a bearer token and stores it
//! together with its absolute expiry. Business operations call the crate-private
//! `ensure_authorized` first, which re-checks staleness after taking the single-flight
//! guard so concurrent callers share one exchange. [`Daraja::refresh_task`] packages an
//! exchange as an owned future for callers that want to drive it on their own runtime.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	auth::Session,
	client::Daraja,
	config::Endpoint,
	executor,
	http::{GatewayTransport, Method, TransportRequest},
	obs::{self, OperationOutcome, OperationSpan},
	payload::{GatewayFault, TokenResponse},
};

/// Owned token exchange returned by [`Daraja::refresh_task`].
///
/// The future can be awaited in place or handed to a runtime; dropping it cancels the exchange.
pub type AuthorizeTask = Pin<Box<dyn Future<Output = AuthorizeOutcome> + Send>>;

/// Result of one token exchange.
#[derive(Debug)]
pub struct AuthorizeOutcome {
	/// HTTP status, or `0` when no response arrived.
	pub status: u16,
	/// `true` iff `errors` is empty and a new session was stored.
	pub success: bool,
	/// Errors in the order they were observed.
	pub errors: Vec<Error>,
}
impl AuthorizeOutcome {
	fn new(status: u16, errors: Vec<Error>) -> Self {
		Self { status, success: errors.is_empty(), errors }
	}
}

impl<T> Daraja<T>
where
	T: ?Sized + GatewayTransport,
{
	/// Exchanges the consumer credentials for a bearer token.
	///
	/// On success the token and its expiry (`received_at + expires_in`) replace the current
	/// session in one write. Any failure leaves the session untouched. Concurrent calls on
	/// the same client are serialized.
	pub async fn authorize(&self) -> AuthorizeOutcome {
		let _singleflight = self.authorize_guard.lock().await;

		self.authorize_locked().await
	}

	/// Returns an owned, `Send` future performing one [`authorize`](Self::authorize) call.
	pub fn refresh_task(&self) -> AuthorizeTask {
		let client = self.clone();

		Box::pin(async move { client.authorize().await })
	}

	/// Re-authorizes when the session is stale, returning the exchange errors on failure.
	pub(crate) async fn ensure_authorized(&self) -> Result<(), Vec<Error>> {
		if !self.requires_authorization() {
			return Ok(());
		}

		let _singleflight = self.authorize_guard.lock().await;

		// Another caller may have refreshed while this one waited.
		if !self.requires_authorization() {
			return Ok(());
		}

		let outcome = self.authorize_locked().await;

		if outcome.success { Ok(()) } else { Err(outcome.errors) }
	}

	async fn authorize_locked(&self) -> AuthorizeOutcome {
		const ENDPOINT: Endpoint = Endpoint::Token;

		let span = OperationSpan::new(ENDPOINT, "authorize");

		obs::record_operation_outcome(ENDPOINT, OperationOutcome::Attempt);
		self.authorize_metrics.record_attempt();

		let outcome = span.instrument(self.exchange_credentials()).await;

		obs::record_operation_outcome(ENDPOINT, OperationOutcome::from_success(outcome.success));

		if outcome.success {
			self.authorize_metrics.record_success();
		} else {
			self.authorize_metrics.record_failure();

			#[cfg(feature = "tracing")]
			tracing::warn!(
				status = outcome.status,
				errors = outcome.errors.len(),
				"Gateway authorization failed."
			);
		}

		outcome
	}

	async fn exchange_credentials(&self) -> AuthorizeOutcome {
		let credentials = &self.config.credentials;
		let basic = STANDARD.encode(format!(
			"{}:{}",
			credentials.consumer_key,
			credentials.consumer_secret.expose()
		));
		let request = TransportRequest::new(Method::Get, self.config.url(Endpoint::Token).clone())
			.header("Authorization", format!("Basic {basic}"))
			.header("Accept", "application/json");
		let response = match self.executor.transport().send(request).await {
			Ok(response) => response,
			Err(err) => return AuthorizeOutcome::new(0, vec![err.into()]),
		};
		let received_at = OffsetDateTime::now_utc();
		let status = response.status;

		if status != 200 {
			let fault = GatewayFault::from_body(&response.body);

			return AuthorizeOutcome::new(status, vec![Error::TokenEndpoint { status, fault }]);
		}

		let mut exchange = executor::decode::<TokenResponse>(response);

		if !exchange.errors.is_empty() {
			return AuthorizeOutcome::new(status, exchange.errors);
		}

		match issue_session(exchange.result, received_at) {
			Ok(session) => {
				self.store_session(session);

				AuthorizeOutcome::new(status, Vec::new())
			},
			Err(err) => {
				exchange.errors.push(err);

				AuthorizeOutcome::new(status, exchange.errors)
			},
		}
	}
}

fn issue_session(token: TokenResponse, received_at: OffsetDateTime) -> Result<Session> {
	let seconds = token
		.expires_in
		.parse::<i64>()
		.map_err(|_| Error::InvalidExpiresIn { value: token.expires_in.clone() })?;

	if seconds <= 0 {
		return Err(Error::NonPositiveExpiresIn);
	}

	let expires_at = received_at
		.checked_add(Duration::seconds(seconds))
		.ok_or_else(|| Error::InvalidExpiresIn { value: token.expires_in.clone() })?;

	Ok(Session::new(token.access_token, expires_at))
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	fn token(expires_in: &str) -> TokenResponse {
		TokenResponse { access_token: "T".into(), expires_in: expires_in.into() }
	}

	#[test]
	fn issue_session_adds_lifetime_to_receipt_instant() {
		let received_at = macros::datetime!(2025-03-01 08:00 UTC);
		let session =
			issue_session(token("3599"), received_at).expect("Integer lifetime should issue.");

		assert_eq!(session.access_token.expose(), "T");
		assert_eq!(session.expires_at, macros::datetime!(2025-03-01 08:59:59 UTC));
	}

	#[test]
	fn issue_session_rejects_unusable_lifetimes() {
		let received_at = macros::datetime!(2025-03-01 08:00 UTC);

		assert!(matches!(
			issue_session(token("soon"), received_at),
			Err(Error::InvalidExpiresIn { value }) if value == "soon"
		));
		assert!(matches!(
			issue_session(token(" 3599"), received_at),
			Err(Error::InvalidExpiresIn { .. })
		));
		assert!(matches!(issue_session(token("0"), received_at), Err(Error::NonPositiveExpiresIn)));
		assert!(matches!(
			issue_session(token("-60"), received_at),
			Err(Error::NonPositiveExpiresIn)
		));
		assert!(matches!(
			issue_session(token(&i64::MAX.to_string()), received_at),
			Err(Error::InvalidExpiresIn { .. })
		));
	}
}
