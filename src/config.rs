//! Deployment selection and base-URL configuration for the API client.

// self
use crate::_prelude::*;

/// Deployment the client was built for.
///
/// Selection happens at construction time, never by runtime environment
/// sniffing; the deployment drives both the default base URL and whether the
/// session cookie carries the `Secure` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deployment {
	/// Local development against a backend on the developer machine.
	Development,
	/// Production deployment against the remote backend.
	Production,
}
impl Deployment {
	/// Default API base URL baked in for this deployment.
	pub const fn base_url_str(self) -> &'static str {
		match self {
			Deployment::Development => "http://localhost:8000/api",
			Deployment::Production => "https://test-be-dashboard.forweb.tech/api",
		}
	}

	/// Whether session cookies must carry the `Secure` attribute.
	pub const fn secure_cookies(self) -> bool {
		matches!(self, Deployment::Production)
	}

	/// Parses the deployment's default base URL.
	pub fn base_url(self) -> Url {
		Url::parse(self.base_url_str()).expect("Compiled-in base URLs are valid.")
	}
}

/// Immutable configuration handed to [`ApiClient`](crate::client::ApiClient).
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Base URL every descriptor path is appended to.
	pub base_url: Url,
	/// Deployment the client runs under.
	pub deployment: Deployment,
}
impl ClientConfig {
	/// Builds a configuration with the deployment's default base URL.
	pub fn for_deployment(deployment: Deployment) -> Self {
		Self { base_url: deployment.base_url(), deployment }
	}

	/// Replaces the base URL while keeping the deployment's cookie policy.
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = base_url;

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn deployments_select_base_url_and_cookie_policy() {
		assert_eq!(
			Deployment::Development.base_url_str(),
			"http://localhost:8000/api",
		);
		assert_eq!(
			Deployment::Production.base_url_str(),
			"https://test-be-dashboard.forweb.tech/api",
		);
		assert!(!Deployment::Development.secure_cookies());
		assert!(Deployment::Production.secure_cookies());
	}

	#[test]
	fn base_url_override_keeps_deployment() {
		let config = ClientConfig::for_deployment(Deployment::Production).with_base_url(
			Url::parse("https://staging.internal/api").expect("Override URL should parse."),
		);

		assert_eq!(config.base_url.as_str(), "https://staging.internal/api");
		assert_eq!(config.deployment, Deployment::Production);
	}
}
