//! Redacted bearer-credential wrapper keeping token material out of logs.

// self
use crate::_prelude::*;

/// Opaque bearer token proving session identity.
///
/// Created by the external identity provider on sign-in; this crate only stores
/// and attaches it. Sign-out writes an empty credential, which the token store
/// reads back as absent.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential(String);
impl Credential {
	/// Wraps a new credential string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Empty credential written by sign-out to invalidate the session.
	pub fn empty() -> Self {
		Self(String::new())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Whether the credential carries no token material.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for Credential {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Credential").field(&"<redacted>").finish()
	}
}
impl Display for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn credential_formatters_redact() {
		let credential = Credential::new("bearer-material");

		assert_eq!(format!("{credential:?}"), "Credential(\"<redacted>\")");
		assert_eq!(format!("{credential}"), "<redacted>");
		assert_eq!(credential.expose(), "bearer-material");
	}

	#[test]
	fn empty_credential_is_detectable() {
		assert!(Credential::empty().is_empty());
		assert!(!Credential::new("t").is_empty());
	}
}
