//! Transport primitives for gateway exchanges.
//!
//! The module exposes [`GatewayTransport`] alongside [`TransportRequest`] and
//! [`TransportResponse`] so downstream crates can plug in a custom HTTP stack (or a fake one
//! in tests) without touching the executor. The executor builds a fully specified request
//! (method, absolute URL, headers, body, deadline) and the transport only moves bytes:
//! status codes are never interpreted here.

// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Fixed deadline applied to every gateway request.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Boxed future returned by [`GatewayTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing gateway requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by every
/// clone of a client, and the returned future must be `Send` so operations can hop executors.
/// A transport reports only failures that prevented a response from arriving (DNS, TCP, TLS,
/// timeout); any HTTP status, including 4xx/5xx, is a successful send.
pub trait GatewayTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and resolves with the raw response.
	fn send(&self, request: TransportRequest) -> TransportFuture<'_>;
}

/// HTTP methods used by the gateway API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
}
impl Method {
	/// Returns the method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully specified outbound request.
#[derive(Clone)]
pub struct TransportRequest {
	/// Request method.
	pub method: Method,
	/// Absolute destination URL.
	pub url: Url,
	/// Header name/value pairs, in insertion order.
	pub headers: Vec<(&'static str, String)>,
	/// Encoded body, if any.
	pub body: Option<Vec<u8>>,
	/// Deadline for the whole exchange.
	pub timeout: std::time::Duration,
}
impl TransportRequest {
	/// Creates a request with no headers, no body, and the fixed [`REQUEST_TIMEOUT`].
	pub fn new(method: Method, url: Url) -> Self {
		Self { method, url, headers: Vec::new(), body: None, timeout: REQUEST_TIMEOUT }
	}

	/// Appends a header.
	pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.headers.push((name, value.into()));

		self
	}

	/// Sets the body.
	pub fn body(mut self, body: Vec<u8>) -> Self {
		self.body = Some(body);

		self
	}

	/// Returns the first value recorded for `name` (case-insensitive).
	pub fn header_value(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}
impl Debug for TransportRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let headers = self
			.headers
			.iter()
			.map(|(name, value)| {
				if name.eq_ignore_ascii_case("authorization") {
					(*name, "<redacted>")
				} else {
					(*name, value.as_str())
				}
			})
			.collect::<Vec<_>>();

		f.debug_struct("TransportRequest")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("headers", &headers)
			.field("body_len", &self.body.as_ref().map(Vec::len))
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// Raw response returned by a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Full response body.
	pub body: Vec<u8>,
}
impl TransportResponse {
	/// Creates a response from a status and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Gateway endpoints answer directly, so [`ReqwestTransport::new`] disables redirect
/// following; a client passed to [`ReqwestTransport::with_client`] is used as is.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a transport with redirects disabled.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl GatewayTransport for ReqwestTransport {
	fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let timeout = request.timeout;
			let mut builder = match request.method {
				Method::Get => client.get(request.url),
				Method::Post => client.post(request.url),
			}
			.timeout(timeout);

			for (name, value) in request.headers {
				builder = builder.header(name, value);
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response =
				builder.send().await.map_err(|err| map_reqwest_error(err, timeout))?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(|err| map_reqwest_error(err, timeout))?;

			Ok(TransportResponse { status, body: body.to_vec() })
		})
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(err: ReqwestError, after: std::time::Duration) -> TransportError {
	if err.is_timeout() { TransportError::Timeout { after } } else { TransportError::network(err) }
}
