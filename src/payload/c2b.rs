//! Customer-to-business records: callback registration, sandbox simulation, and the
//! validation webhook contract.

// self
use crate::{_prelude::*, result_code::ResultCode};

/// Registers the confirmation and validation callbacks for a shortcode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUrlRequest {
	/// Shortcode whose callbacks are registered.
	#[serde(rename = "ShortCode")]
	pub short_code: String,
	/// `Completed` or `Cancelled`; applied when the validation URL is unreachable.
	#[serde(rename = "ResponseType")]
	pub response_type: String,
	/// Callback receiving payment confirmations.
	#[serde(rename = "ConfirmationURL")]
	pub confirmation_url: String,
	/// Callback asked to validate payments before completion.
	#[serde(rename = "ValidationURL")]
	pub validation_url: String,
}

/// Acknowledgement of a [`RegisterUrlRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterUrlResponse {
	/// Identifier assigned by the originator's system.
	#[serde(rename = "OriginatorConversationID")]
	pub originator_conversation_id: String,
	/// Same identifier under the key the sandbox actually emits.
	#[serde(rename = "OriginatorCoversationID")]
	pub originator_coversation_id: String,
	/// `0` when the registration succeeded.
	#[serde(rename = "ResponseCode")]
	pub response_code: String,
	/// Description of the response code.
	#[serde(rename = "ResponseDescription")]
	pub response_description: String,
}

/// Simulated customer payment (sandbox only).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct C2bSimulateRequest {
	/// Receiving shortcode.
	#[serde(rename = "ShortCode")]
	pub short_code: String,
	/// `CustomerPayBillOnline` or `CustomerBuyGoodsOnline`.
	#[serde(rename = "CommandID")]
	pub command_id: String,
	/// Amount paid.
	#[serde(rename = "Amount")]
	pub amount: String,
	/// Paying phone number.
	#[serde(rename = "Msisdn")]
	pub msisdn: String,
	/// Bill reference (account number) entered by the customer.
	#[serde(rename = "BillRefNumber")]
	pub bill_ref_number: String,
}

/// Acknowledgement of a [`C2bSimulateRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct C2bSimulateResponse {
	/// Identifier assigned by the originator's system.
	#[serde(rename = "OriginatorCoversationID")]
	pub originator_coversation_id: String,
	/// `0` when the simulation was accepted.
	#[serde(rename = "ResponseCode")]
	pub response_code: String,
	/// Description of the response code.
	#[serde(rename = "ResponseDescription")]
	pub response_description: String,
}

/// Payment the gateway posts to the registered validation URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRequest {
	/// Transaction type, e.g. `Pay Bill`.
	#[serde(rename = "TransactionType")]
	pub transaction_type: String,
	/// Gateway receipt number.
	#[serde(rename = "TransID")]
	pub trans_id: String,
	/// Transaction time as `YYYYMMDDHHMMSS`.
	#[serde(rename = "TransTime")]
	pub trans_time: String,
	/// Amount paid.
	#[serde(rename = "TransAmount")]
	pub trans_amount: String,
	/// Receiving shortcode.
	#[serde(rename = "BusinessShortCode")]
	pub business_short_code: String,
	/// Bill reference (account number) entered by the customer.
	#[serde(rename = "BillRefNumber")]
	pub bill_ref_number: String,
	/// Invoice number, when supplied.
	#[serde(rename = "InvoiceNumber", skip_serializing_if = "String::is_empty")]
	pub invoice_number: String,
	/// Organisation balance after the payment, when supplied.
	#[serde(rename = "OrgAccountBalance", skip_serializing_if = "String::is_empty")]
	pub org_account_balance: String,
	/// Caller-side transaction identifier, when supplied.
	#[serde(rename = "ThirdPartyTransID", skip_serializing_if = "String::is_empty")]
	pub third_party_trans_id: String,
	/// Paying phone number.
	#[serde(rename = "MSISDN")]
	pub msisdn: String,
	/// Payer's first name, when supplied.
	#[serde(rename = "FirstName", skip_serializing_if = "String::is_empty")]
	pub first_name: String,
	/// Payer's middle name, when supplied.
	#[serde(rename = "MiddleName", skip_serializing_if = "String::is_empty")]
	pub middle_name: String,
	/// Payer's last name, when supplied.
	#[serde(rename = "LastName", skip_serializing_if = "String::is_empty")]
	pub last_name: String,
}
impl ValidationRequest {
	/// Shapes the webhook reply for this payment.
	///
	/// `ResultDesc` is `"Accepted"` when `accept` is true and `"Rejected"` otherwise.
	pub fn to_response(&self, result_code: impl Into<String>, accept: bool) -> ValidationResponse {
		ValidationResponse {
			result_code: result_code.into(),
			result_desc: if accept { ACCEPTED } else { REJECTED }.into(),
		}
	}
}

const ACCEPTED: &str = "Accepted";
const REJECTED: &str = "Rejected";

/// Reply returned from a validation webhook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
	/// `0` to accept, or one of the [`ResultCode`] values to reject.
	#[serde(rename = "ResultCode")]
	pub result_code: String,
	/// `Accepted` or `Rejected`.
	#[serde(rename = "ResultDesc")]
	pub result_desc: String,
}
impl ValidationResponse {
	/// Accepts the payment with result code `0`.
	pub fn accepted() -> Self {
		Self { result_code: "0".into(), result_desc: ACCEPTED.into() }
	}

	/// Rejects the payment with the given reason.
	pub fn rejected(code: ResultCode) -> Self {
		Self { result_code: code.as_str().into(), result_desc: REJECTED.into() }
	}

	/// Returns `true` when the reply accepts the payment.
	pub fn is_accepted(&self) -> bool {
		self.result_desc == ACCEPTED
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn validation_reply_uses_literal_descriptions() {
		let request = ValidationRequest { trans_id: "RKTQDM7W6S".into(), ..Default::default() };
		let accepted = request.to_response("0", true);
		let rejected = request.to_response(ResultCode::InvalidAmount.as_str(), false);

		assert_eq!(accepted.result_desc, "Accepted");
		assert!(accepted.is_accepted());
		assert_eq!(rejected.result_code, "C2B00013");
		assert_eq!(rejected.result_desc, "Rejected");
		assert_eq!(
			serde_json::to_string(&rejected).expect("Reply should serialize."),
			r#"{"ResultCode":"C2B00013","ResultDesc":"Rejected"}"#
		);
		assert_eq!(ValidationResponse::rejected(ResultCode::InvalidAmount), rejected);
		assert_eq!(ValidationResponse::accepted(), accepted);
	}

	#[test]
	fn validation_request_omits_blank_optional_fields() {
		let request: ValidationRequest = serde_json::from_str(
			r#"{"TransactionType":"Pay Bill","TransID":"RKTQDM7W6S","TransTime":"20191122063845","TransAmount":"10","BusinessShortCode":"600638","BillRefNumber":"invoice008","MSISDN":"25470****149","FirstName":"John"}"#,
		)
		.expect("Webhook body should decode.");

		assert_eq!(request.first_name, "John");
		assert!(request.invoice_number.is_empty());

		let value = serde_json::to_value(&request).expect("Webhook body should serialize.");

		assert!(value.get("InvoiceNumber").is_none());
		assert_eq!(value["FirstName"], "John");
		assert_eq!(value["MSISDN"], "25470****149");
	}
}
