//! Transaction reversal records.

// self
use crate::_prelude::*;

/// Request to reverse a completed transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversalRequest {
	/// API operator username.
	#[serde(rename = "Initiator")]
	pub initiator: String,
	/// Encrypted initiator password.
	#[serde(rename = "SecurityCredential")]
	pub security_credential: String,
	/// Always `TransactionReversal`.
	#[serde(rename = "CommandID")]
	pub command_id: String,
	/// Gateway receipt number of the transaction to reverse.
	#[serde(rename = "TransactionID")]
	pub transaction_id: String,
	/// Amount to reverse.
	#[serde(rename = "Amount")]
	pub amount: String,
	/// Organisation receiving the reversal.
	#[serde(rename = "ReceiverParty")]
	pub receiver_party: String,
	/// Identifier type of `ReceiverParty`.
	#[serde(rename = "RecieverIdentifierType")]
	pub receiver_identifier_type: String,
	/// Callback receiving the final result.
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

/// Synchronous acknowledgement of a [`ReversalRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReversalResponse {
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
