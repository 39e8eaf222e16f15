// self
use crate::{_prelude::*, error::ConfigError};

/// Fixed gateway endpoints known to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
	/// Client-credentials token generation.
	Token,
	/// Confirmation/validation callback URL registration.
	RegisterUrl,
	/// Account balance query.
	AccountBalance,
	/// Lipa na M-Pesa Online checkout push.
	StkPush,
	/// Lipa na M-Pesa Online status query.
	StkPushQuery,
	/// Transaction reversal.
	Reversal,
	/// Business-to-business transfer.
	B2bPayment,
	/// Transaction status query.
	TransactionStatus,
	/// Business-to-customer disbursement.
	B2cPayment,
	/// Customer-to-business payment simulation (sandbox only).
	C2bSimulate,
}
impl Endpoint {
	/// Every endpoint, in resolution order.
	pub const ALL: [Endpoint; 10] = [
		Endpoint::Token,
		Endpoint::RegisterUrl,
		Endpoint::AccountBalance,
		Endpoint::StkPush,
		Endpoint::StkPushQuery,
		Endpoint::Reversal,
		Endpoint::B2bPayment,
		Endpoint::TransactionStatus,
		Endpoint::B2cPayment,
		Endpoint::C2bSimulate,
	];

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::Token => "token",
			Endpoint::RegisterUrl => "register_url",
			Endpoint::AccountBalance => "account_balance",
			Endpoint::StkPush => "stk_push",
			Endpoint::StkPushQuery => "stk_push_query",
			Endpoint::Reversal => "reversal",
			Endpoint::B2bPayment => "b2b_payment",
			Endpoint::TransactionStatus => "transaction_status",
			Endpoint::B2cPayment => "b2c_payment",
			Endpoint::C2bSimulate => "c2b_simulate",
		}
	}

	/// Path (and query, for the token endpoint) relative to the environment host.
	pub const fn path(self) -> &'static str {
		match self {
			Endpoint::Token => "/oauth/v1/generate?grant_type=client_credentials",
			Endpoint::RegisterUrl => "/mpesa/c2b/v1/registerurl",
			Endpoint::AccountBalance => "/mpesa/accountbalance/v1/query",
			Endpoint::StkPush => "/mpesa/stkpush/v1/processrequest",
			Endpoint::StkPushQuery => "/mpesa/stkpushquery/v1/query",
			Endpoint::Reversal => "/mpesa/reversal/v1/request",
			Endpoint::B2bPayment => "/mpesa/b2b/v1/paymentrequest",
			Endpoint::TransactionStatus => "/mpesa/transactionstatus/v1/query",
			Endpoint::B2cPayment => "/mpesa/b2c/v1/paymentrequest",
			Endpoint::C2bSimulate => "/mpesa/c2b/v1/simulate",
		}
	}

	const fn slot(self) -> usize {
		self as usize
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Absolute endpoint URLs resolved once against a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
	urls: Vec<Url>,
}
impl Endpoints {
	/// Resolves every [`Endpoint`] against `base`.
	///
	/// Endpoint paths are appended to whatever path `base` already carries, so a proxy prefix
	/// such as `https://proxy.example/daraja` is kept.
	pub fn resolve(base: &Url) -> Result<Self, ConfigError> {
		let mut base = base.clone();

		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());

			base.set_path(&path);
		}

		let urls = Endpoint::ALL
			.iter()
			.map(|endpoint| {
				let relative = endpoint.path().trim_start_matches('/');

				base.join(relative).map_err(|source| ConfigError::InvalidEndpoint {
					endpoint: endpoint.as_str(),
					source,
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { urls })
	}

	/// Returns the absolute URL for `endpoint`.
	pub fn get(&self, endpoint: Endpoint) -> &Url {
		&self.urls[endpoint.slot()]
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn slots_follow_declaration_order() {
		for (idx, endpoint) in Endpoint::ALL.iter().enumerate() {
			assert_eq!(endpoint.slot(), idx);
		}
	}

	#[test]
	fn token_endpoint_keeps_grant_query() {
		let base = Url::parse("https://sandbox.safaricom.co.ke").expect("Base URL should parse.");
		let endpoints = Endpoints::resolve(&base).expect("Endpoints should resolve.");
		let token = endpoints.get(Endpoint::Token);

		assert_eq!(token.path(), "/oauth/v1/generate");
		assert_eq!(token.query(), Some("grant_type=client_credentials"));
		assert_eq!(
			endpoints.get(Endpoint::B2cPayment).as_str(),
			"https://sandbox.safaricom.co.ke/mpesa/b2c/v1/paymentrequest"
		);
	}

	#[test]
	fn base_path_prefix_is_kept() {
		for raw in ["http://proxy.local/daraja", "http://proxy.local/daraja/"] {
			let base = Url::parse(raw).expect("Proxy URL should parse.");
			let endpoints = Endpoints::resolve(&base).expect("Endpoints should resolve.");

			assert_eq!(
				endpoints.get(Endpoint::StkPush).as_str(),
				"http://proxy.local/daraja/mpesa/stkpush/v1/processrequest"
			);
			assert_eq!(
				endpoints.get(Endpoint::Token).as_str(),
				"http://proxy.local/daraja/oauth/v1/generate?grant_type=client_credentials"
			);
		}
	}
}
