//! Typed request executor: one JSON exchange, decoded into a caller-chosen record.
//!
//! The executor knows nothing about individual business endpoints. It attaches the bearer
//! token and JSON headers, hands the request to the [`GatewayTransport`], and decodes the
//! body into any [`ResponsePayload`]. Failures are collected into an ordered list instead
//! of short-circuiting:
//!
//! - a transport failure is the only entry and the status is `0`;
//! - a non-2xx status records [`Error::Gateway`] first;
//! - an undecodable body records [`Error::Deserialization`] next, still reporting the real
//!   status;
//! - bytes left after a complete JSON value record [`Error::TrailingData`] instead.

// self
use crate::{
	_prelude::*,
	auth::Secret,
	http::{GatewayTransport, Method, TransportRequest, TransportResponse},
	payload::{GatewayFault, ResponsePayload},
};

/// Result of one executor exchange.
#[derive(Debug)]
pub struct Exchange<R> {
	/// HTTP status, or `0` when no response arrived.
	pub status: u16,
	/// Decoded body, or `R::default()` when decoding failed or nothing arrived.
	pub result: R,
	/// Errors in the order they were observed.
	pub errors: Vec<Error>,
}
impl<R> Exchange<R>
where
	R: Default,
{
	/// Builds an exchange that never produced a decodable body.
	pub fn failed(status: u16, errors: Vec<Error>) -> Self {
		Self { status, result: R::default(), errors }
	}

	/// Returns `true` when no error was recorded and the status is 2xx.
	pub fn is_success(&self) -> bool {
		self.errors.is_empty() && (200..300).contains(&self.status)
	}
}

/// Performs typed JSON exchanges over a shared transport.
pub struct Executor<T>
where
	T: ?Sized + GatewayTransport,
{
	transport: Arc<T>,
}
impl<T> Executor<T>
where
	T: ?Sized + GatewayTransport,
{
	/// Creates an executor over `transport`.
	pub fn new(transport: impl Into<Arc<T>>) -> Self {
		Self { transport: transport.into() }
	}

	/// Returns the underlying transport.
	pub fn transport(&self) -> &Arc<T> {
		&self.transport
	}

	/// Sends one request and decodes the response into `R`.
	///
	/// `token` is attached as `Authorization: Bearer <token>` unless it is absent or empty.
	/// `Content-Type: application/json` is always sent.
	pub async fn execute<R>(
		&self,
		method: Method,
		url: &Url,
		token: Option<&Secret>,
		body: Option<Vec<u8>>,
	) -> Exchange<R>
	where
		R: ResponsePayload,
	{
		let mut request = TransportRequest::new(method, url.clone());

		if let Some(token) = token.filter(|token| !token.is_empty()) {
			request = request.header("Authorization", format!("Bearer {}", token.expose()));
		}

		request = request
			.header("Content-Type", "application/json")
			.header("Accept", "application/json");

		if let Some(body) = body {
			request = request.body(body);
		}

		let exchange = match self.transport.send(request).await {
			Ok(response) => decode(response),
			Err(err) => Exchange::failed(0, vec![err.into()]),
		};

		#[cfg(feature = "tracing")]
		tracing::debug!(
			method = method.as_str(),
			url = url.as_str(),
			status = exchange.status,
			errors = exchange.errors.len(),
			"Gateway exchange completed."
		);

		exchange
	}

	/// Sends a `GET` request; `token` may be `None` for unauthenticated endpoints.
	pub async fn get<R>(&self, url: &Url, token: Option<&Secret>) -> Exchange<R>
	where
		R: ResponsePayload,
	{
		self.execute(Method::Get, url, token, None).await
	}

	/// Sends a `POST` request carrying an already encoded JSON body.
	pub async fn post<R>(&self, url: &Url, token: Option<&Secret>, body: Vec<u8>) -> Exchange<R>
	where
		R: ResponsePayload,
	{
		self.execute(Method::Post, url, token, Some(body)).await
	}
}
impl<T> Clone for Executor<T>
where
	T: ?Sized + GatewayTransport,
{
	fn clone(&self) -> Self {
		Self { transport: self.transport.clone() }
	}
}
impl<T> Debug for Executor<T>
where
	T: ?Sized + GatewayTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("Executor(..)")
	}
}

/// Decodes a raw response, collecting the status and body errors.
pub(crate) fn decode<R>(response: TransportResponse) -> Exchange<R>
where
	R: ResponsePayload,
{
	let status = response.status;
	let mut errors = Vec::new();

	if !response.is_success() {
		errors.push(Error::Gateway { status, fault: GatewayFault::from_body(&response.body) });
	}

	let mut de = serde_json::Deserializer::from_slice(&response.body);
	let result = match serde_path_to_error::deserialize::<_, R>(&mut de) {
		Ok(result) => match de.end() {
			Ok(()) => result,
			Err(source) => {
				errors.push(Error::TrailingData { source, status });

				R::default()
			},
		},
		Err(source) => {
			errors.push(Error::Deserialization { source, status });

			R::default()
		},
	};

	Exchange { status, result, errors }
}

#[cfg(test)]
mod tests {
	// crates.io
	use parking_lot::Mutex;
	// self
	use super::*;
	use crate::{
		error::TransportError,
		http::{REQUEST_TIMEOUT, TransportFuture},
		payload::{AccountBalanceResponse, TokenResponse},
	};

	#[derive(Default)]
	struct CannedTransport {
		response: Option<TransportResponse>,
		seen: Mutex<Vec<TransportRequest>>,
	}
	impl CannedTransport {
		fn responding(status: u16, body: &str) -> Self {
			Self { response: Some(TransportResponse::new(status, body)), ..Default::default() }
		}

		fn last(&self) -> TransportRequest {
			self.seen.lock().last().cloned().expect("Transport should have seen a request.")
		}
	}
	impl GatewayTransport for CannedTransport {
		fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
			self.seen.lock().push(request);

			let response = self.response.clone();

			Box::pin(async move {
				response.ok_or_else(|| {
					TransportError::Io(std::io::Error::new(
						std::io::ErrorKind::ConnectionRefused,
						"connection refused",
					))
				})
			})
		}
	}

	fn executor(transport: CannedTransport) -> Executor<CannedTransport> {
		Executor::new(transport)
	}

	fn url() -> Url {
		Url::parse("https://sandbox.safaricom.co.ke/mpesa/accountbalance/v1/query")
			.expect("Endpoint URL should parse.")
	}

	#[tokio::test]
	async fn malformed_body_keeps_real_status() {
		let executor = executor(CannedTransport::responding(200, "not-json"));
		let exchange: Exchange<AccountBalanceResponse> =
			executor.post(&url(), Some(&Secret::new("token")), b"{}".to_vec()).await;

		assert_eq!(exchange.status, 200);
		assert_eq!(exchange.result, AccountBalanceResponse::default());
		assert_eq!(exchange.errors.len(), 1);
		assert!(matches!(exchange.errors[0], Error::Deserialization { status: 200, .. }));
		assert!(!exchange.is_success());
	}

	#[tokio::test]
	async fn transport_failure_reports_zero_status() {
		let executor = executor(CannedTransport::default());
		let exchange: Exchange<AccountBalanceResponse> = executor.get(&url(), None).await;

		assert_eq!(exchange.status, 0);
		assert_eq!(exchange.result, AccountBalanceResponse::default());
		assert_eq!(exchange.errors.len(), 1);
		assert!(matches!(exchange.errors[0], Error::Transport(TransportError::Io(_))));
	}

	#[tokio::test]
	async fn headers_follow_token_presence() {
		let transport = Arc::new(CannedTransport::responding(200, r#"{"ResponseCode":"0"}"#));
		let executor = <Executor<CannedTransport>>::new(transport.clone());
		let exchange: Exchange<AccountBalanceResponse> =
			executor.post(&url(), Some(&Secret::new("abc")), b"{}".to_vec()).await;
		let sent = transport.last();

		assert!(exchange.is_success());
		assert_eq!(exchange.result.response_code, "0");
		assert_eq!(sent.method, Method::Post);
		assert_eq!(sent.header_value("Authorization"), Some("Bearer abc"));
		assert_eq!(sent.header_value("Content-Type"), Some("application/json"));
		assert_eq!(sent.body.as_deref(), Some(b"{}".as_slice()));
		assert_eq!(sent.timeout, REQUEST_TIMEOUT);

		let _: Exchange<AccountBalanceResponse> =
			executor.get(&url(), Some(&Secret::default())).await;
		let sent = transport.last();

		assert_eq!(sent.method, Method::Get);
		assert!(sent.header_value("Authorization").is_none());
		assert_eq!(sent.header_value("Content-Type"), Some("application/json"));
		assert!(sent.body.is_none());
	}

	#[tokio::test]
	async fn non_success_status_records_gateway_fault_before_decode_error() {
		let executor = executor(CannedTransport::responding(503, "<html>busy</html>"));
		let exchange: Exchange<AccountBalanceResponse> = executor.get(&url(), None).await;

		assert_eq!(exchange.status, 503);
		assert_eq!(exchange.errors.len(), 2);
		assert!(matches!(exchange.errors[0], Error::Gateway { status: 503, .. }));
		assert!(matches!(exchange.errors[1], Error::Deserialization { status: 503, .. }));
	}

	#[tokio::test]
	async fn non_success_status_with_fault_body_decodes_fault() {
		let executor = executor(CannedTransport::responding(
			401,
			r#"{"requestId":"r-1","errorCode":"404.001.03","errorMessage":"Invalid Access Token"}"#,
		));
		let exchange: Exchange<AccountBalanceResponse> = executor.get(&url(), None).await;

		assert_eq!(exchange.errors.len(), 1);

		match &exchange.errors[0] {
			Error::Gateway { status, fault } => {
				assert_eq!(*status, 401);
				assert_eq!(fault.error_code, "404.001.03");
				assert_eq!(fault.error_message, "Invalid Access Token");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn trailing_bytes_after_record_fail_decoding() {
		let exchange = decode::<AccountBalanceResponse>(TransportResponse::new(
			200,
			r#"{"ResponseCode":"0"}not-json"#,
		));

		assert_eq!(exchange.status, 200);
		assert_eq!(exchange.result, AccountBalanceResponse::default());
		assert_eq!(exchange.errors.len(), 1);
		assert!(matches!(exchange.errors[0], Error::TrailingData { status: 200, .. }));
		assert_eq!(exchange.errors[0].status(), Some(200));
		assert!(!exchange.is_success());

		let padded = decode::<AccountBalanceResponse>(TransportResponse::new(
			200,
			"{\"ResponseCode\":\"0\"}\n  ",
		));

		assert!(padded.is_success());
		assert_eq!(padded.result.response_code, "0");
	}

	#[test]
	fn trailing_bytes_after_token_body_fail_decoding() {
		let exchange = decode::<TokenResponse>(TransportResponse::new(
			200,
			r#"{"access_token":"T","expires_in":"3600"}}}}"#,
		));

		assert_eq!(exchange.result, TokenResponse::default());
		assert_eq!(exchange.errors.len(), 1);
		assert!(matches!(exchange.errors[0], Error::TrailingData { status: 200, .. }));
	}
}
