//! Business-to-customer disbursement records.

// self
use crate::_prelude::*;

/// Disbursement from a business shortcode to a customer's phone number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct B2cPaymentRequest {
	/// API operator username.
	#[serde(rename = "InitiatorName")]
	pub initiator_name: String,
	/// Encrypted initiator password.
	#[serde(rename = "SecurityCredential")]
	pub security_credential: String,
	/// Transaction type, e.g. `BusinessPayment` or `SalaryPayment`.
	#[serde(rename = "CommandID")]
	pub command_id: String,
	/// Amount to disburse.
	#[serde(rename = "Amount")]
	pub amount: String,
	/// Paying shortcode.
	#[serde(rename = "PartyA")]
	pub party_a: String,
	/// Receiving phone number.
	#[serde(rename = "PartyB")]
	pub party_b: String,
	/// Free-form comment.
	#[serde(rename = "Remarks")]
	pub remarks: String,
	/// Callback invoked when the request times out in the gateway queue.
	#[serde(rename = "QueueTimeOutURL")]
	pub queue_timeout_url: String,
	/// Callback receiving the final result.
	#[serde(rename = "ResultURL")]
	pub result_url: String,
	/// Optional occasion note.
	#[serde(rename = "Occasion")]
	pub occasion: String,
}

/// Synchronous acknowledgement of a [`B2cPaymentRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct B2cPaymentResponse {
	/// Identifier assigned by the originator's system.
	#[serde(rename = "OriginatorConversationID")]
	pub originator_conversation_id: String,
	/// Identifier assigned by the gateway.
	#[serde(rename = "ConversationID")]
	pub conversation_id: String,
	/// `0` when the request was accepted for processing.
	#[serde(rename = "ResponseCode")]
	pub response_code: String,
	/// Description of the response code.
	#[serde(rename = "ResponseDescription")]
	pub response_description: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_uses_gateway_key_names() {
		let request = B2cPaymentRequest {
			initiator_name: "testapi".into(),
			security_credential: "c2VjcmV0".into(),
			command_id: "BusinessPayment".into(),
			amount: "10".into(),
			party_a: "600999".into(),
			party_b: "254708374149".into(),
			remarks: "payout".into(),
			queue_timeout_url: "https://example.com/timeout".into(),
			result_url: "https://example.com/result".into(),
			occasion: "".into(),
		};
		let value = serde_json::to_value(&request).expect("Request should serialize.");

		assert_eq!(value["InitiatorName"], "testapi");
		assert_eq!(value["QueueTimeOutURL"], "https://example.com/timeout");
		assert_eq!(value["PartyB"], "254708374149");
		assert_eq!(value.as_object().map(|fields| fields.len()), Some(10));

		let decoded: B2cPaymentRequest =
			serde_json::from_value(value).expect("Request should decode from its own JSON.");

		assert_eq!(decoded, request);
	}

	#[test]
	fn response_decodes_gateway_acknowledgement() {
		let response: B2cPaymentResponse = serde_json::from_str(
			r#"{"ConversationID":"AG_20191219_00005797af5d7d75f652","OriginatorConversationID":"16740-34861180-1","ResponseCode":"0","ResponseDescription":"Accept the service request successfully."}"#,
		)
		.expect("Acknowledgement should decode.");

		assert_eq!(response.conversation_id, "AG_20191219_00005797af5d7d75f652");
		assert_eq!(response.originator_conversation_id, "16740-34861180-1");
		assert_eq!(response.response_code, "0");
		assert_eq!(response.response_description, "Accept the service request successfully.");
	}
}
