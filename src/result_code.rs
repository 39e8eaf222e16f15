//! Validation result codes and their descriptions.

// self
use crate::_prelude::*;

/// Reasons a validation webhook can give for rejecting a payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResultCode {
	/// `C2B00011`
	InvalidMsisdn,
	/// `C2B00012`
	InvalidAccount,
	/// `C2B00013`
	InvalidAmount,
	/// `C2B00014`
	InvalidKyc,
	/// `C2B00015`
	InvalidShortcode,
	/// `C2B00016`
	Other,
}
impl ResultCode {
	/// Every known code.
	pub const ALL: [ResultCode; 6] = [
		ResultCode::InvalidMsisdn,
		ResultCode::InvalidAccount,
		ResultCode::InvalidAmount,
		ResultCode::InvalidKyc,
		ResultCode::InvalidShortcode,
		ResultCode::Other,
	];

	/// Returns the wire code.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResultCode::InvalidMsisdn => "C2B00011",
			ResultCode::InvalidAccount => "C2B00012",
			ResultCode::InvalidAmount => "C2B00013",
			ResultCode::InvalidKyc => "C2B00014",
			ResultCode::InvalidShortcode => "C2B00015",
			ResultCode::Other => "C2B00016",
		}
	}

	/// Returns the human-readable description.
	pub const fn description(self) -> &'static str {
		match self {
			ResultCode::InvalidMsisdn => "Invalid MSISDN",
			ResultCode::InvalidAccount => "Invalid Account Number",
			ResultCode::InvalidAmount => "Invalid Amount",
			ResultCode::InvalidKyc => "Invalid KYC Details",
			ResultCode::InvalidShortcode => "Invalid Shortcode",
			ResultCode::Other => "Other Error",
		}
	}
}
impl Display for ResultCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ResultCode {
	type Err = UnknownResultCode;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|code| code.as_str() == s)
			.ok_or_else(|| UnknownResultCode { code: s.to_owned() })
	}
}
impl TryFrom<String> for ResultCode {
	type Error = UnknownResultCode;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
impl From<ResultCode> for String {
	fn from(value: ResultCode) -> Self {
		value.as_str().to_owned()
	}
}

/// Error returned when a string is not a known [`ResultCode`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown result code `{code}`.")]
pub struct UnknownResultCode {
	/// The unrecognized code.
	pub code: String,
}

/// Looks up the description for a wire code; unknown codes yield `None`.
pub fn describe(code: &str) -> Option<&'static str> {
	code.parse::<ResultCode>().ok().map(ResultCode::description)
}
