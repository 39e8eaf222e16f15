//! Bearer-token session state and staleness helpers.

// crates.io
use time::UtcOffset;
// self
use crate::{_prelude::*, auth::Secret};

/// Freshness of a [`Session`] at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
	/// The token is within its validity window (`instant <= expires_at`).
	Fresh,
	/// The token expired or was never issued (`instant > expires_at`).
	Stale,
}

/// Bearer token plus the absolute UTC instant at which it stops being valid.
///
/// A never-authorized session carries an empty token and expires at the Unix epoch, so it is
/// [`SessionState::Stale`] from the start. Token and expiry are only ever replaced together.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
	/// Bearer token; callers must avoid logging it.
	pub access_token: Secret,
	/// Expiry instant in UTC.
	pub expires_at: OffsetDateTime,
}
impl Session {
	/// Creates a session from a token and an absolute expiry, normalized to UTC.
	pub fn new(access_token: impl Into<Secret>, expires_at: OffsetDateTime) -> Self {
		Self { access_token: access_token.into(), expires_at: expires_at.to_offset(UtcOffset::UTC) }
	}

	/// Creates a session whose expiry is `received_at + expires_in`.
	pub fn issued(
		access_token: impl Into<Secret>,
		received_at: OffsetDateTime,
		expires_in: Duration,
	) -> Self {
		Self::new(access_token, received_at + expires_in)
	}

	/// Computes the session state at a given instant.
	pub fn state_at(&self, instant: OffsetDateTime) -> SessionState {
		if instant > self.expires_at { SessionState::Stale } else { SessionState::Fresh }
	}

	/// Convenience helper that checks the state using the current UTC instant.
	pub fn state(&self) -> SessionState {
		self.state_at(OffsetDateTime::now_utc())
	}

	/// Returns `true` when `instant` is strictly after the expiry, i.e. a new token must be
	/// acquired before the next request.
	pub fn requires_authorization_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.state_at(instant), SessionState::Stale)
	}

	/// Returns `true` when the session is stale relative to the current clock.
	pub fn requires_authorization(&self) -> bool {
		self.requires_authorization_at(OffsetDateTime::now_utc())
	}

	/// Returns the validity left at `instant`, clamped at zero.
	pub fn remaining_at(&self, instant: OffsetDateTime) -> Duration {
		let remaining = self.expires_at - instant;

		if remaining.is_negative() { Duration::ZERO } else { remaining }
	}
}
impl Default for Session {
	fn default() -> Self {
		Self { access_token: Secret::default(), expires_at: OffsetDateTime::UNIX_EPOCH }
	}
}
impl Debug for Session {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session")
			.field("access_token", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn default_session_is_stale() {
		let session = Session::default();

		assert_eq!(session.expires_at, OffsetDateTime::UNIX_EPOCH);
		assert!(session.access_token.is_empty());
		assert!(session.requires_authorization());
		assert_eq!(session.state(), SessionState::Stale);
	}

	#[test]
	fn staleness_boundary_is_strictly_after_expiry() {
		let received = macros::datetime!(2025-01-01 00:00 UTC);
		let session = Session::issued("token", received, Duration::seconds(3600));

		assert_eq!(session.expires_at, macros::datetime!(2025-01-01 01:00 UTC));
		assert!(!session.requires_authorization_at(macros::datetime!(2025-01-01 00:59:59 UTC)));
		assert!(!session.requires_authorization_at(macros::datetime!(2025-01-01 01:00 UTC)));
		assert!(session.requires_authorization_at(macros::datetime!(2025-01-01 01:00:01 UTC)));
	}

	#[test]
	fn expiry_is_normalized_to_utc() {
		let received = macros::datetime!(2025-01-01 03:00 +3);
		let session = Session::issued("token", received, Duration::minutes(30));

		assert_eq!(session.expires_at.offset(), UtcOffset::UTC);
		assert_eq!(session.expires_at, macros::datetime!(2025-01-01 00:30 UTC));
	}

	#[test]
	fn remaining_is_clamped() {
		let session = Session::new("token", macros::datetime!(2025-01-01 01:00 UTC));

		assert_eq!(
			session.remaining_at(macros::datetime!(2025-01-01 00:45 UTC)),
			Duration::minutes(15)
		);
		assert_eq!(session.remaining_at(macros::datetime!(2025-01-01 02:00 UTC)), Duration::ZERO);
	}

	#[test]
	fn debug_redacts_token() {
		let session = Session::new("very-secret", OffsetDateTime::UNIX_EPOCH);

		assert!(!format!("{session:?}").contains("very-secret"));
	}
}
