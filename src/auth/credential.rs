//! Cached bearer credential and its redacted token wrapper.

// self
use crate::{_prelude::*, auth::AccessToken};

/// Redacted bearer token wrapper keeping the secret out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);
impl BearerToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for BearerToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("BearerToken").field(&"<redacted>").finish()
	}
}
impl Display for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Cached credential owned by one refresher. Never partially updated: a
/// successful token exchange replaces the whole value.
#[derive(Clone, Debug)]
pub struct Credential {
	/// Bearer token attached to outgoing requests.
	pub bearer_token: BearerToken,
	/// Instant past which the credential must not be reused.
	pub expires_at: OffsetDateTime,
}
impl Credential {
	/// Safety margin subtracted from `expires_in` to avoid racing against
	/// imminent expiry.
	pub const EXPIRY_MARGIN: Duration = Duration::seconds(60);

	/// Derives a credential from a token exchange completed at `issued_at`.
	pub fn from_access_token(token: &AccessToken, issued_at: OffsetDateTime) -> Self {
		Self {
			bearer_token: BearerToken::new(token.access_token.clone()),
			expires_at: issued_at + Duration::seconds(token.expires_in) - Self::EXPIRY_MARGIN,
		}
	}

	/// Returns `true` while the credential remains within its validity window.
	pub fn is_fresh_at(&self, instant: OffsetDateTime) -> bool {
		instant < self.expires_at
	}
}
