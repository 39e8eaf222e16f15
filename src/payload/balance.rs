//! Account balance query records.

// self
use crate::_prelude::*;

/// Balance query for an organisation shortcode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalanceRequest {
	/// API operator username.
	#[serde(rename = "Initiator")]
	pub initiator: String,
	/// Encrypted initiator password.
	#[serde(rename = "SecurityCredential")]
	pub security_credential: String,
	/// Always `AccountBalance`.
	#[serde(rename = "CommandID")]
	pub command_id: String,
	/// Shortcode being queried.
	#[serde(rename = "PartyA")]
	pub party_a: String,
	/// Identifier type of `PartyA`.
	#[serde(rename = "IdentifierType")]
	pub identifier_type: String,
	/// Free-form comment.
	#[serde(rename = "Remarks")]
	pub remarks: String,
	/// Callback invoked when the request times out in the gateway queue.
	#[serde(rename = "QueueTimeOutURL")]
	pub queue_timeout_url: String,
	/// Callback receiving the balance result.
	#[serde(rename = "ResultURL")]
	pub result_url: String,
}

/// Synchronous acknowledgement of an [`AccountBalanceRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountBalanceResponse {
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
	fn request_and_response_keep_exact_keys() {
		let request = AccountBalanceRequest {
			initiator: "testapi".into(),
			security_credential: "Y3JlZA==".into(),
			command_id: "AccountBalance".into(),
			party_a: "600426".into(),
			identifier_type: "4".into(),
			remarks: "ok".into(),
			queue_timeout_url: "https://example.com/timeout".into(),
			result_url: "https://example.com/result".into(),
		};
		let json = serde_json::to_string(&request).expect("Request should serialize.");

		assert!(json.contains("\"Initiator\":\"testapi\""));
		assert!(json.contains("\"IdentifierType\":\"4\""));
		assert!(json.contains("\"ResultURL\":\"https://example.com/result\""));

		let response: AccountBalanceResponse = serde_json::from_str(
			r#"{"OriginatorConversationID":"515-5258779-3","ConversationID":"AG_20200123_0000417fed8ed666e976","ResponseCode":"0","ResponseDescription":"Accept the service request successfully."}"#,
		)
		.expect("Acknowledgement should decode.");

		assert_eq!(response.originator_conversation_id, "515-5258779-3");
		assert_eq!(response.conversation_id, "AG_20200123_0000417fed8ed666e976");
		assert_eq!(response.response_code, "0");
	}

	#[test]
	fn missing_response_keys_default_to_empty() {
		let response: AccountBalanceResponse =
			serde_json::from_str(r#"{"ResponseCode":"1"}"#).expect("Partial body should decode.");

		assert_eq!(response.response_code, "1");
		assert!(response.conversation_id.is_empty());
	}
}
