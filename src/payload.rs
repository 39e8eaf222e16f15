//! Request and response records exchanged with the gateway.
//!
//! Every field is a string and keeps the gateway's exact key name, including its
//! misspellings. Response records tolerate missing keys so partial gateway bodies decode into
//! empty strings instead of failing.

pub mod b2b;
pub mod b2c;
pub mod balance;
pub mod c2b;
pub mod reversal;
pub mod status;
pub mod stk;

pub use b2b::*;
pub use b2c::*;
pub use balance::*;
pub use c2b::*;
pub use reversal::*;
pub use status::*;
pub use stk::*;

// self
use crate::_prelude::*;

/// Record that can be sent as a JSON request body.
pub trait RequestPayload
where
	Self: Serialize + Send + Sync,
{
}

/// Record that a JSON response body can be decoded into.
///
/// The `Default` bound provides the value reported whenever an exchange fails, and restricts
/// executor destinations to record-like types at compile time.
pub trait ResponsePayload
where
	Self: 'static + DeserializeOwned + Default + Send,
{
}

macro_rules! impl_payloads {
	(request: [$($req:ty),* $(,)?], response: [$($res:ty),* $(,)?] $(,)?) => {
		$(impl RequestPayload for $req {})*
		$(impl ResponsePayload for $res {})*
	};
}

impl_payloads! {
	request: [
		B2bPaymentRequest,
		B2cPaymentRequest,
		AccountBalanceRequest,
		RegisterUrlRequest,
		C2bSimulateRequest,
		ReversalRequest,
		TransactionStatusRequest,
		StkPushRequest,
		StkPushQueryRequest,
	],
	response: [
		B2bPaymentResponse,
		B2cPaymentResponse,
		AccountBalanceResponse,
		RegisterUrlResponse,
		C2bSimulateResponse,
		ReversalResponse,
		TransactionStatusResponse,
		StkPushResponse,
		StkPushQueryResponse,
		TokenResponse,
		GatewayFault,
	],
}

/// Error body the gateway returns alongside non-success statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayFault {
	/// Gateway-assigned request identifier.
	#[serde(rename = "requestId")]
	pub request_id: String,
	/// Gateway error code, e.g. `404.001.03`.
	#[serde(rename = "errorCode")]
	pub error_code: String,
	/// Human-readable error message.
	#[serde(rename = "errorMessage")]
	pub error_message: String,
}
impl GatewayFault {
	/// Parses a fault from a raw body, yielding an empty fault when the body is not one.
	pub fn from_body(body: &[u8]) -> Self {
		serde_json::from_slice(body).unwrap_or_default()
	}

	/// Returns `true` when the gateway supplied no fault details.
	pub fn is_empty(&self) -> bool {
		self.request_id.is_empty() && self.error_code.is_empty() && self.error_message.is_empty()
	}
}
impl Display for GatewayFault {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		if self.is_empty() {
			return f.write_str("no fault details");
		}

		write!(f, "{} {}", self.error_code, self.error_message)?;

		if !self.request_id.is_empty() {
			write!(f, " (request {})", self.request_id)?;
		}

		Ok(())
	}
}

/// Token endpoint response body.
///
/// The gateway sends `expires_in` as a string of seconds; the raw value is kept so the
/// session manager can report it verbatim when it is not an integer.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
	/// Issued bearer token.
	pub access_token: String,
	/// Token lifetime in seconds.
	#[serde(deserialize_with = "expires_in_as_string")]
	pub expires_in: String,
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse")
			.field("access_token", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.finish()
	}
}

fn expires_in_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Text(String),
		Integer(i64),
	}

	Ok(match Raw::deserialize(deserializer)? {
		Raw::Text(text) => text,
		Raw::Integer(value) => value.to_string(),
	})
}
