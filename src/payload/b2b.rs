//! Business-to-business transfer records.

// self
use crate::_prelude::*;

/// Transfer request from one business shortcode to another.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct B2bPaymentRequest {
	/// API operator username.
	#[serde(rename = "Initiator")]
	pub initiator: String,
	/// Encrypted initiator password.
	#[serde(rename = "SecurityCredential")]
	pub security_credential: String,
	/// Transaction type, e.g. `BusinessPayBill`.
	#[serde(rename = "CommandID")]
	pub command_id: String,
	/// Identifier type of the sending organisation.
	#[serde(rename = "SenderIdentifierType")]
	pub sender_identifier_type: String,
	/// Identifier type of the receiving organisation.
	#[serde(rename = "RecieverIdentifierType")]
	pub receiver_identifier_type: String,
	/// Amount to transfer.
	#[serde(rename = "Amount")]
	pub amount: String,
	/// Sending shortcode.
	#[serde(rename = "PartyA")]
	pub party_a: String,
	/// Receiving shortcode.
	#[serde(rename = "PartyB")]
	pub party_b: String,
	/// Account reference shown to the receiver.
	#[serde(rename = "AccountReference")]
	pub account_reference: String,
	/// Free-form comment.
	#[serde(rename = "Remarks")]
	pub remarks: String,
	/// Callback invoked when the request times out in the gateway queue.
	#[serde(rename = "QueueTimeOutURL")]
	pub queue_timeout_url: String,
	/// Callback receiving the final result.
	#[serde(rename = "ResultURL")]
	pub result_url: String,
}

/// Synchronous acknowledgement of a [`B2bPaymentRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct B2bPaymentResponse {
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
