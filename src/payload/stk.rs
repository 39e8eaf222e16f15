//! Lipa na M-Pesa Online (STK push) records and password derivation.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use time::{UtcOffset, macros::offset};
// self
use crate::{_prelude::*, auth::Secret};

/// Offset the gateway expects STK timestamps in (East Africa Time).
pub const EAST_AFRICA_TIME: UtcOffset = offset!(+3);

/// Formats `instant` as the `YYYYMMDDHHMMSS` timestamp used by STK requests, in East Africa
/// Time.
pub fn stk_timestamp(instant: OffsetDateTime) -> String {
	let local = instant.to_offset(EAST_AFRICA_TIME);

	format!(
		"{:04}{:02}{:02}{:02}{:02}{:02}",
		local.year(),
		u8::from(local.month()),
		local.day(),
		local.hour(),
		local.minute(),
		local.second()
	)
}

/// Password and timestamp pair that authenticates an STK request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StkPassword {
	/// `base64(shortcode + passkey + timestamp)`.
	pub password: Secret,
	/// Timestamp embedded in the password.
	pub timestamp: String,
}
impl StkPassword {
	/// Derives the password for `shortcode` and `passkey` at `instant`.
	pub fn generate(shortcode: &str, passkey: &Secret, instant: OffsetDateTime) -> Self {
		Self::from_timestamp(shortcode, passkey, stk_timestamp(instant))
	}

	/// Derives the password from an already formatted timestamp.
	pub fn from_timestamp(shortcode: &str, passkey: &Secret, timestamp: impl Into<String>) -> Self {
		let timestamp = timestamp.into();
		let password = STANDARD.encode(format!("{shortcode}{}{timestamp}", passkey.expose()));

		Self { password: Secret::new(password), timestamp }
	}
}

/// Checkout push prompting a customer to authorize a payment on their handset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StkPushRequest {
	/// Organisation shortcode receiving the payment.
	#[serde(rename = "BusinessShortCode")]
	pub business_short_code: String,
	/// Password derived by [`StkPassword`].
	#[serde(rename = "Password")]
	pub password: String,
	/// Timestamp embedded in the password.
	#[serde(rename = "Timestamp")]
	pub timestamp: String,
	/// `CustomerPayBillOnline` or `CustomerBuyGoodsOnline`.
	#[serde(rename = "TransactionType")]
	pub transaction_type: String,
	/// Amount to charge.
	#[serde(rename = "Amount")]
	pub amount: String,
	/// Paying phone number.
	#[serde(rename = "PartyA")]
	pub party_a: String,
	/// Receiving shortcode.
	#[serde(rename = "PartyB")]
	pub party_b: String,
	/// Phone number receiving the prompt.
	#[serde(rename = "PhoneNumber")]
	pub phone_number: String,
	/// Callback receiving the payment result.
	#[serde(rename = "CallBackURL")]
	pub callback_url: String,
	/// Account reference shown to the customer.
	#[serde(rename = "AccountReference")]
	pub account_reference: String,
	/// Short description shown to the customer.
	#[serde(rename = "TransactionDesc")]
	pub transaction_desc: String,
}
impl StkPushRequest {
	/// Copies the password and timestamp into the request.
	pub fn with_password(mut self, password: &StkPassword) -> Self {
		self.password = password.password.expose().to_owned();
		self.timestamp = password.timestamp.clone();

		self
	}
}

/// Synchronous acknowledgement of a [`StkPushRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StkPushResponse {
	/// Identifier of the merchant request.
	#[serde(rename = "MerchantRequestID")]
	pub merchant_request_id: String,
	/// Identifier of the checkout, used by status queries.
	#[serde(rename = "CheckoutRequestID")]
	pub checkout_request_id: String,
	/// `0` when the prompt was sent.
	#[serde(rename = "ResponseCode")]
	pub response_code: String,
	/// Description of the response code.
	#[serde(rename = "ResponseDescription")]
	pub response_description: String,
	/// Message suitable for the paying customer.
	#[serde(rename = "CustomerMessage")]
	pub customer_message: String,
}

/// Status query for a previously pushed checkout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StkPushQueryRequest {
	/// Organisation shortcode that initiated the checkout.
	#[serde(rename = "BusinessShortCode")]
	pub business_short_code: String,
	/// Password derived by [`StkPassword`].
	#[serde(rename = "Password")]
	pub password: String,
	/// Timestamp embedded in the password.
	#[serde(rename = "Timestamp")]
	pub timestamp: String,
	/// Checkout identifier returned by the push.
	#[serde(rename = "CheckoutRequestID")]
	pub checkout_request_id: String,
}
impl StkPushQueryRequest {
	/// Copies the password and timestamp into the request.
	pub fn with_password(mut self, password: &StkPassword) -> Self {
		self.password = password.password.expose().to_owned();
		self.timestamp = password.timestamp.clone();

		self
	}
}

/// Outcome of a [`StkPushQueryRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StkPushQueryResponse {
	/// Identifier of the merchant request.
	#[serde(rename = "MerchantRequestID")]
	pub merchant_request_id: String,
	/// Identifier of the checkout.
	#[serde(rename = "CheckoutRequestID")]
	pub checkout_request_id: String,
	/// `0` when the query was accepted.
	#[serde(rename = "ResponseCode")]
	pub response_code: String,
	/// Description of the response code.
	#[serde(rename = "ResponseDescription")]
	pub response_description: String,
	/// Payment result code (`0` for a completed payment).
	#[serde(rename = "ResultCode")]
	pub result_code: String,
	/// Description of the payment result.
	#[serde(rename = "ResultDesc")]
	pub result_desc: String,
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn password_matches_gateway_reference_vector() {
		let passkey =
			Secret::new("bfb279f9aa9bdbcf158e97dd71a467cd2e0c893059b10f78e6b72ada1ed2c919");
		let password = StkPassword::from_timestamp("174379", &passkey, "20160216165627");

		assert_eq!(
			password.password.expose(),
			"MTc0Mzc5YmZiMjc5ZjlhYTliZGJjZjE1OGU5N2RkNzFhNDY3Y2QyZTBjODkzMDU5YjEwZjc4ZTZiNzJhZGExZWQyYzkxOTIwMTYwMjE2MTY1NjI3"
		);
		assert!(!format!("{password:?}").contains(passkey.expose()));
	}

	#[test]
	fn timestamp_uses_east_africa_time() {
		assert_eq!(stk_timestamp(macros::datetime!(2025-01-01 00:00 UTC)), "20250101030000");
		assert_eq!(stk_timestamp(macros::datetime!(2024-12-31 22:05:09 UTC)), "20250101010509");
	}

	#[test]
	fn request_carries_password_and_timestamp() {
		let password = StkPassword::generate(
			"174379",
			&Secret::new("test-passkey"),
			macros::datetime!(2025-01-01 00:00 UTC),
		);
		let request = StkPushRequest {
			business_short_code: "174379".into(),
			transaction_type: "CustomerPayBillOnline".into(),
			amount: "1".into(),
			..Default::default()
		}
		.with_password(&password);
		let value = serde_json::to_value(&request).expect("Request should serialize.");

		assert_eq!(value["Timestamp"], "20250101030000");
		assert_eq!(value["Password"], "MTc0Mzc5dGVzdC1wYXNza2V5MjAyNTAxMDEwMzAwMDA=");
		assert_eq!(value["CallBackURL"], "");
	}
}
