//! Originating-request handle used for server-side credential reads.

// crates.io
use percent_encoding::percent_decode_str;

/// Server-side representation of the inbound HTTP request.
///
/// Only the headers matter to this crate: the token store scans the `Cookie`
/// header when a call executes in a server context where no interactive cookie
/// storage exists. Header lookup is case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct IncomingRequest {
	headers: Vec<(String, String)>,
}
impl IncomingRequest {
	/// Creates a handle with no headers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends one header to the handle.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}

	/// Returns the first header with the given name, ignoring case.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Extracts and percent-decodes the named cookie from the `Cookie` header.
	pub(crate) fn cookie(&self, name: &str) -> Option<String> {
		let header = self.header("cookie")?;

		header.split(';').find_map(|pair| {
			let (candidate, value) = pair.trim().split_once('=')?;

			if candidate != name {
				return None;
			}

			percent_decode_str(value).decode_utf8().ok().map(|decoded| decoded.into_owned())
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn header_lookup_ignores_case() {
		let request = IncomingRequest::new().with_header("Cookie", "auth_token=abc");

		assert_eq!(request.header("cookie"), Some("auth_token=abc"));
		assert_eq!(request.header("COOKIE"), Some("auth_token=abc"));
		assert_eq!(request.header("accept"), None);
	}

	#[test]
	fn cookie_scan_matches_exact_names_only() {
		let request = IncomingRequest::new()
			.with_header("Cookie", "not_auth_token=wrong; auth_token=right; theme=dark");

		assert_eq!(request.cookie("auth_token").as_deref(), Some("right"));
		assert_eq!(request.cookie("session"), None);
	}

	#[test]
	fn cookie_values_are_percent_decoded() {
		let request =
			IncomingRequest::new().with_header("Cookie", "auth_token=a%3Db%20c%2Fd");

		assert_eq!(request.cookie("auth_token").as_deref(), Some("a=b c/d"));
	}

	#[test]
	fn missing_cookie_header_yields_absent() {
		let request = IncomingRequest::new().with_header("Accept", "application/json");

		assert_eq!(request.cookie("auth_token"), None);
	}

	#[test]
	fn values_containing_equals_are_kept_whole() {
		let request = IncomingRequest::new().with_header("Cookie", "auth_token=left=right");

		assert_eq!(request.cookie("auth_token").as_deref(), Some("left=right"));
	}
}
