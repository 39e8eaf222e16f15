//! Client-level error types shared by the session manager, executor, and operations.

// self
use crate::{_prelude::*, payload::GatewayFault};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error recorded in operation outcomes.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Caller-supplied request could not be encoded as JSON.
	#[error("Request payload could not be serialized.")]
	Serialization {
		/// Underlying encoder failure.
		#[source]
		source: serde_json::Error,
	},
	/// Response body could not be decoded into the expected record.
	#[error("Response body with HTTP {status} could not be deserialized at `{}`.", .source.path())]
	Deserialization {
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Response body held extra bytes after a complete JSON value.
	#[error("Response body with HTTP {status} has trailing data after the JSON value.")]
	TrailingData {
		/// Decoder failure raised at the first trailing byte.
		#[source]
		source: serde_json::Error,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Business endpoint responded with a non-success status.
	#[error("Gateway responded with HTTP {status}: {fault}.")]
	Gateway {
		/// HTTP status code of the response.
		status: u16,
		/// Error body reported by the gateway; empty when the body was not a fault record.
		fault: GatewayFault,
	},
	/// Token endpoint rejected the credential exchange.
	#[error("Token endpoint responded with HTTP {status}: {fault}.")]
	TokenEndpoint {
		/// HTTP status code of the response.
		status: u16,
		/// Error body reported by the gateway; empty when the body was not a fault record.
		fault: GatewayFault,
	},
	/// Token endpoint returned an `expires_in` that is not an integer.
	#[error("The expires_in value `{value}` is not an integer.")]
	InvalidExpiresIn {
		/// Raw value supplied by the token endpoint.
		value: String,
	},
	/// Token endpoint returned a non-positive `expires_in`.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
}
impl Error {
	/// Returns the HTTP status attached to the error, if the request reached the gateway.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Deserialization { status, .. }
			| Self::TrailingData { status, .. }
			| Self::Gateway { status, .. }
			| Self::TokenEndpoint { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed or cannot carry endpoint paths.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Offending URL string.
		url: String,
	},
	/// Endpoint path could not be resolved against the base URL.
	#[error("Endpoint `{endpoint}` could not be resolved against the base URL.")]
	InvalidEndpoint {
		/// Endpoint label.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},

	/// Consumer key is missing or empty.
	#[error("Consumer key is required.")]
	MissingConsumerKey,
	/// Consumer secret is missing or empty.
	#[error("Consumer secret is required.")]
	MissingConsumerSecret,
	/// Operation needs a shortcode but none was configured.
	#[error("Shortcode is not configured.")]
	MissingShortcode,
	/// Operation needs a passkey but none was configured.
	#[error("Passkey is not configured.")]
	MissingPasskey,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, timeout).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the gateway.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request exceeded the fixed deadline.
	#[error("Request to the gateway timed out after {after:?}.")]
	Timeout {
		/// Deadline that elapsed.
		after: std::time::Duration,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the gateway.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
