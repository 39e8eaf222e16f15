//! Typed async client for the M-Pesa Daraja API: cached bearer sessions, single-flight
//! re-authorization, and error-list outcomes for every payment operation.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod obs;
pub mod payload;
pub mod result_code;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::{Daraja, ReqwestDaraja},
		config::{Config, Environment},
		http::ReqwestTransport,
	};

	/// Consumer key used by the test clients.
	pub const TEST_CONSUMER_KEY: &str = "test-consumer-key";
	/// Consumer secret used by the test clients.
	pub const TEST_CONSUMER_SECRET: &str = "test-consumer-secret";
	/// Shortcode used by the test clients.
	pub const TEST_SHORTCODE: &str = "174379";
	/// Passkey used by the test clients.
	pub const TEST_PASSKEY: &str = "test-passkey";

	/// Builds a reqwest transport that accepts the self-signed certificates some local mock
	/// servers produce during tests.
	pub fn test_reqwest_transport() -> ReqwestTransport {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestTransport::with_client(client)
	}

	/// Builds a sandbox [`Config`] whose endpoints resolve against `base_url`.
	pub fn test_config(base_url: &str) -> Config {
		Config::builder(Environment::Sandbox)
			.base_url(Url::parse(base_url).expect("Mock server base URL should parse."))
			.consumer_key(TEST_CONSUMER_KEY)
			.consumer_secret(TEST_CONSUMER_SECRET)
			.shortcode(TEST_SHORTCODE)
			.passkey(TEST_PASSKEY)
			.account_type("4")
			.build()
			.expect("Test configuration should build successfully.")
	}

	/// Constructs a [`Daraja`] client backed by the insecure reqwest transport used across
	/// integration tests.
	pub fn build_test_client(base_url: &str) -> ReqwestDaraja {
		Daraja::with_transport(test_config(base_url), test_reqwest_transport())
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
