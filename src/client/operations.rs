//! Business operations: one authenticated JSON `POST` per gateway action.
//!
//! Every operation follows the same template. A stale session is re-authorized first and a
//! failed exchange is reported without contacting the business endpoint. The request is
//! then encoded, posted with the current bearer token, and decoded into the matching
//! response record. Operations never return `Err`; failures are listed in [`Outcome`].

// self
use crate::{
	_prelude::*,
	client::Daraja,
	config::Endpoint,
	executor::Exchange,
	http::GatewayTransport,
	obs::{self, OperationOutcome, OperationSpan},
	payload::{
		AccountBalanceRequest, AccountBalanceResponse, B2bPaymentRequest, B2bPaymentResponse,
		B2cPaymentRequest, B2cPaymentResponse, C2bSimulateRequest, C2bSimulateResponse,
		RegisterUrlRequest, RegisterUrlResponse, RequestPayload, ResponsePayload,
		ReversalRequest, ReversalResponse, StkPushQueryRequest, StkPushQueryResponse,
		StkPushRequest, StkPushResponse, TransactionStatusRequest, TransactionStatusResponse,
	},
};

/// Result of one business operation.
///
/// `success` is `true` iff `errors` is empty and the status is 2xx. Whenever `success` is
/// `false`, `response` is `R::default()`.
#[derive(Debug)]
pub struct Outcome<R> {
	/// Decoded response record.
	pub response: R,
	/// HTTP status, or `0` when the business request was never answered.
	pub status: u16,
	/// Whether the operation completed without errors.
	pub success: bool,
	/// Errors in the order they were observed.
	pub errors: Vec<Error>,
}
impl<R> Outcome<R>
where
	R: Default,
{
	fn failed(status: u16, errors: Vec<Error>) -> Self {
		Self { response: R::default(), status, success: false, errors }
	}
}
impl<R> From<Exchange<R>> for Outcome<R>
where
	R: Default,
{
	fn from(exchange: Exchange<R>) -> Self {
		if exchange.is_success() {
			Self {
				response: exchange.result,
				status: exchange.status,
				success: true,
				errors: Vec::new(),
			}
		} else {
			Self::failed(exchange.status, exchange.errors)
		}
	}
}

impl<T> Daraja<T>
where
	T: ?Sized + GatewayTransport,
{
	/// Moves funds between two business shortcodes.
	pub async fn b2b_payment(&self, request: &B2bPaymentRequest) -> Outcome<B2bPaymentResponse> {
		self.submit(Endpoint::B2bPayment, request).await
	}

	/// Requests the reversal of a completed transaction.
	pub async fn reverse_transaction(&self, request: &ReversalRequest) -> Outcome<ReversalResponse> {
		self.submit(Endpoint::Reversal, request).await
	}

	/// Queries the status of a transaction.
	pub async fn query_transaction_status(
		&self,
		request: &TransactionStatusRequest,
	) -> Outcome<TransactionStatusResponse> {
		self.submit(Endpoint::TransactionStatus, request).await
	}

	/// Pays out from a business shortcode to a customer.
	pub async fn b2c_payment(&self, request: &B2cPaymentRequest) -> Outcome<B2cPaymentResponse> {
		self.submit(Endpoint::B2cPayment, request).await
	}

	/// Starts a Lipa na M-Pesa Online checkout on the customer's handset.
	///
	/// See [`Daraja::stk_password`] for deriving the password + timestamp pair.
	pub async fn stk_push(&self, request: &StkPushRequest) -> Outcome<StkPushResponse> {
		self.submit(Endpoint::StkPush, request).await
	}

	/// Queries the result of an earlier [`stk_push`](Self::stk_push).
	pub async fn query_stk_push(
		&self,
		request: &StkPushQueryRequest,
	) -> Outcome<StkPushQueryResponse> {
		self.submit(Endpoint::StkPushQuery, request).await
	}

	/// Requests the balance of a shortcode account.
	pub async fn query_account_balance(
		&self,
		request: &AccountBalanceRequest,
	) -> Outcome<AccountBalanceResponse> {
		self.submit(Endpoint::AccountBalance, request).await
	}

	/// Registers the C2B confirmation and validation callbacks.
	pub async fn register_urls(&self, request: &RegisterUrlRequest) -> Outcome<RegisterUrlResponse> {
		self.submit(Endpoint::RegisterUrl, request).await
	}

	/// Simulates a customer payment; only the sandbox honors it.
	pub async fn simulate_c2b(&self, request: &C2bSimulateRequest) -> Outcome<C2bSimulateResponse> {
		self.submit(Endpoint::C2bSimulate, request).await
	}

	async fn submit<Req, Res>(&self, endpoint: Endpoint, request: &Req) -> Outcome<Res>
	where
		Req: RequestPayload,
		Res: ResponsePayload,
	{
		let span = OperationSpan::new(endpoint, "submit");

		obs::record_operation_outcome(endpoint, OperationOutcome::Attempt);

		let outcome = span.instrument(self.submit_authorized(endpoint, request)).await;

		obs::record_operation_outcome(endpoint, OperationOutcome::from_success(outcome.success));

		outcome
	}

	async fn submit_authorized<Req, Res>(&self, endpoint: Endpoint, request: &Req) -> Outcome<Res>
	where
		Req: RequestPayload,
		Res: ResponsePayload,
	{
		if let Err(errors) = self.ensure_authorized().await {
			return Outcome::failed(0, errors);
		}

		let body = match serde_json::to_vec(request) {
			Ok(body) => body,
			Err(source) => return Outcome::failed(0, vec![Error::Serialization { source }]),
		};
		let token = self.session().access_token;

		self.executor.post::<Res>(self.config.url(endpoint), Some(&token), body).await.into()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use parking_lot::Mutex;
	// self
	use super::*;
	use crate::{
		config::{Config, Environment},
		http::{TransportFuture, TransportRequest, TransportResponse},
	};

	#[derive(Default)]
	struct TokenOnlyTransport {
		seen: Mutex<Vec<TransportRequest>>,
	}
	impl GatewayTransport for TokenOnlyTransport {
		fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
			self.seen.lock().push(request);

			Box::pin(async {
				Ok(TransportResponse::new(200, r#"{"access_token":"T","expires_in":"3599"}"#))
			})
		}
	}

	struct Unencodable;
	impl Serialize for Unencodable {
		fn serialize<S>(&self, _: S) -> Result<S::Ok, S::Error>
		where
			S: serde::Serializer,
		{
			Err(serde::ser::Error::custom("amount overflowed"))
		}
	}
	impl RequestPayload for Unencodable {}

	#[tokio::test]
	async fn unencodable_request_short_circuits_before_sending() {
		let config = Config::builder(Environment::Sandbox)
			.consumer_key("key")
			.consumer_secret("secret")
			.build()
			.expect("Config should build.");
		let transport = Arc::new(TokenOnlyTransport::default());
		let client = <Daraja<TokenOnlyTransport>>::with_transport(config, transport.clone());
		let outcome = client
			.submit::<Unencodable, AccountBalanceResponse>(Endpoint::AccountBalance, &Unencodable)
			.await;

		assert!(!outcome.success);
		assert_eq!(outcome.status, 0);
		assert_eq!(outcome.response, AccountBalanceResponse::default());
		assert_eq!(outcome.errors.len(), 1);
		assert!(matches!(outcome.errors[0], Error::Serialization { .. }));

		let seen = transport.seen.lock();

		assert_eq!(seen.len(), 1);
		assert_eq!(seen[0].url, *client.config.url(Endpoint::Token));
	}
}
