//! Transaction status query records.

// self
use crate::_prelude::*;

/// Status query for a single transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatusRequest {
	/// API operator username.
	#[serde(rename = "Initiator")]
	pub initiator: String,
	/// Encrypted initiator password.
	#[serde(rename = "SecurityCredential")]
	pub security_credential: String,
	/// Always `TransactionStatusQuery`.
	#[serde(rename = "CommandID")]
	pub command_id: String,
	/// Gateway receipt number being queried.
	#[serde(rename = "TransactionID")]
	pub transaction_id: String,
	/// Organisation shortcode or phone number that took part in the transaction.
	#[serde(rename = "PartyA")]
	pub party_a: String,
	/// Identifier type of `PartyA`.
	#[serde(rename = "IdentifierType")]
	pub identifier_type: String,
	/// Callback receiving the status result.
	#[serde(rename = "ResultURL")]
	pub result_url: String,
	/// Callback invoked when the request times out in the gateway queue.
	#[serde(rename = "QueueTimeOutURL")]
	pub queue_timeout_url: String,
	/// Free-form comment.
	#[serde(rename = "Remarks")]
	pub remarks: String,
	/// Optional occasion note.
	#[serde(rename = "Occasion")]
	pub occasion: String,
}

/// Synchronous acknowledgement of a [`TransactionStatusRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionStatusResponse {
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
