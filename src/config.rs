//! Immutable client configuration: environment, credentials, and resolved endpoints.
//!
//! A [`Config`] is assembled once through [`ConfigBuilder`] and shared by the client for its
//! whole lifetime. The environment selects the gateway host through the pure
//! [`Environment::base_url`] mapping; every endpoint URL is resolved during
//! [`ConfigBuilder::build`] so request paths never fail at call time.

mod endpoint;

pub use endpoint::*;

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Gateway deployment the client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	#[default]
	/// Developer sandbox.
	Sandbox,
	/// Live production gateway.
	Production,
}
impl Environment {
	/// Returns the gateway host for this environment.
	pub const fn base_url(self) -> &'static str {
		match self {
			Environment::Sandbox => "https://sandbox.safaricom.co.ke",
			Environment::Production => "https://api.safaricom.co.ke",
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Environment::Sandbox => "sandbox",
			Environment::Production => "production",
		}
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// App credentials issued by the developer portal.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	/// Consumer key used as the Basic-auth username.
	pub consumer_key: String,
	/// Consumer secret used as the Basic-auth password.
	pub consumer_secret: Secret,
	/// Business shortcode (paybill or till number).
	pub shortcode: Option<String>,
	/// Lipa na M-Pesa Online passkey.
	pub passkey: Option<Secret>,
	/// Identifier type of the organisation account.
	pub account_type: Option<String>,
}
impl Credentials {
	/// Returns the configured shortcode or [`ConfigError::MissingShortcode`].
	pub fn require_shortcode(&self) -> Result<&str, ConfigError> {
		self.shortcode.as_deref().ok_or(ConfigError::MissingShortcode)
	}

	/// Returns the configured passkey or [`ConfigError::MissingPasskey`].
	pub fn require_passkey(&self) -> Result<&Secret, ConfigError> {
		self.passkey.as_ref().ok_or(ConfigError::MissingPasskey)
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("consumer_key", &self.consumer_key)
			.field("consumer_secret", &"<redacted>")
			.field("shortcode", &self.shortcode)
			.field("passkey_set", &self.passkey.is_some())
			.field("account_type", &self.account_type)
			.finish()
	}
}

/// Immutable configuration consumed by [`Daraja`](crate::client::Daraja).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	/// Selected deployment.
	pub environment: Environment,
	/// Host every endpoint is resolved against.
	pub base_url: Url,
	/// App credentials.
	pub credentials: Credentials,
	/// Absolute endpoint URLs.
	pub endpoints: Endpoints,
}
impl Config {
	/// Creates a new builder for the provided environment.
	pub fn builder(environment: Environment) -> ConfigBuilder {
		ConfigBuilder::new(environment)
	}

	/// Returns the absolute URL for `endpoint`.
	pub fn url(&self, endpoint: Endpoint) -> &Url {
		self.endpoints.get(endpoint)
	}
}

/// Builder for [`Config`] values.
#[derive(Debug)]
pub struct ConfigBuilder {
	environment: Environment,
	base_url: Option<Url>,
	consumer_key: Option<String>,
	consumer_secret: Option<Secret>,
	shortcode: Option<String>,
	passkey: Option<Secret>,
	account_type: Option<String>,
}
impl ConfigBuilder {
	/// Creates a new builder seeded with the provided environment.
	pub fn new(environment: Environment) -> Self {
		Self {
			environment,
			base_url: None,
			consumer_key: None,
			consumer_secret: None,
			shortcode: None,
			passkey: None,
			account_type: None,
		}
	}

	/// Overrides the environment host, e.g. to route through a proxy or a local mock.
	///
	/// A path on `url` is kept as a prefix of every endpoint path.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Sets the consumer key.
	pub fn consumer_key(mut self, key: impl Into<String>) -> Self {
		self.consumer_key = Some(key.into());

		self
	}

	/// Sets the consumer secret.
	pub fn consumer_secret(mut self, secret: impl Into<Secret>) -> Self {
		self.consumer_secret = Some(secret.into());

		self
	}

	/// Sets the business shortcode.
	pub fn shortcode(mut self, shortcode: impl Into<String>) -> Self {
		self.shortcode = Some(shortcode.into());

		self
	}

	/// Sets the Lipa na M-Pesa Online passkey.
	pub fn passkey(mut self, passkey: impl Into<Secret>) -> Self {
		self.passkey = Some(passkey.into());

		self
	}

	/// Sets the organisation account identifier type.
	pub fn account_type(mut self, account_type: impl Into<String>) -> Self {
		self.account_type = Some(account_type.into());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<Config, ConfigError> {
		let consumer_key = self
			.consumer_key
			.filter(|key| !key.trim().is_empty())
			.ok_or(ConfigError::MissingConsumerKey)?;
		let consumer_secret = self
			.consumer_secret
			.filter(|secret| !secret.expose().trim().is_empty())
			.ok_or(ConfigError::MissingConsumerSecret)?;
		let base_url = match self.base_url {
			Some(url) => url,
			None => {
				let raw = self.environment.base_url();

				Url::parse(raw).map_err(|_| ConfigError::InvalidBaseUrl { url: raw.into() })?
			},
		};

		validate_base_url(&base_url)?;

		let endpoints = Endpoints::resolve(&base_url)?;

		Ok(Config {
			environment: self.environment,
			base_url,
			credentials: Credentials {
				consumer_key,
				consumer_secret,
				shortcode: self.shortcode,
				passkey: self.passkey,
				account_type: self.account_type,
			},
			endpoints,
		})
	}
}

fn validate_base_url(url: &Url) -> Result<(), ConfigError> {
	if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
		Err(ConfigError::InvalidBaseUrl { url: url.to_string() })
	} else {
		Ok(())
	}
}
