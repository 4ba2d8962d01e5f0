//! Credential persistence over a cookie-jar abstraction.
//!
//! The store reads in two contexts: an interactive context backed by a
//! [`CookieJar`], and a server-side context where the credential is scraped
//! from an inbound request's `Cookie` header. Absence of a credential is a
//! normal outcome in both, never an error.

pub mod jar;
pub mod request;

pub use jar::*;
pub use request::*;

// self
use crate::{_prelude::*, auth::Credential, config::Deployment};

/// Cookie name carrying the session credential.
pub const AUTH_COOKIE: &str = "auth_token";
/// Path scope of the session cookie.
pub const AUTH_COOKIE_PATH: &str = "/";
/// Fixed lifetime of the session cookie.
pub const AUTH_COOKIE_TTL: Duration = Duration::days(7);

/// Cross-site policy attached to a cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SameSite {
	/// Sent on top-level navigations and same-site requests.
	Lax,
	/// Sent on same-site requests only.
	Strict,
	/// Sent cross-site; requires `Secure`.
	None,
}
impl SameSite {
	/// Returns the attribute's wire representation.
	pub const fn as_str(self) -> &'static str {
		match self {
			SameSite::Lax => "Lax",
			SameSite::Strict => "Strict",
			SameSite::None => "None",
		}
	}
}
impl Display for SameSite {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One cookie write, with every attribute the jar must honor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCookie {
	/// Cookie name.
	pub name: String,
	/// Cookie value; may be empty (sign-out writes an empty credential).
	pub value: String,
	/// Path scope.
	pub path: String,
	/// Relative lifetime; the jar derives the expiry instant at write time.
	pub max_age: Duration,
	/// Cross-site policy.
	pub same_site: SameSite,
	/// Whether the cookie is restricted to secure transports.
	pub secure: bool,
}

/// Single-credential store with a server-side read path and an interactive
/// read/write path.
///
/// The credential is exclusively owned here; no other component persists it.
/// Reads are never cached — every outbound call consults the store fresh.
#[derive(Clone)]
pub struct TokenStore {
	jar: Option<Arc<dyn CookieJar>>,
	secure: bool,
}
impl TokenStore {
	/// Builds a store over an interactive context's cookie jar.
	///
	/// The deployment decides whether written cookies carry `Secure`.
	pub fn new(jar: Arc<dyn CookieJar>, deployment: Deployment) -> Self {
		Self { jar: Some(jar), secure: deployment.secure_cookies() }
	}

	/// Builds a store with no interactive storage attached.
	///
	/// Reads without an originating request yield `None` and writes are no-ops;
	/// both are deliberate in a non-interactive context, not failures.
	pub fn detached() -> Self {
		Self { jar: None, secure: false }
	}

	/// Reads the credential for one outbound call.
	///
	/// With an originating request, the credential comes from that request's
	/// `Cookie` header and interactive storage is never consulted. Without one,
	/// the jar is read when attached. Empty values (left behind by
	/// [`clear`](Self::clear)) read as absent.
	pub fn read(&self, request: Option<&IncomingRequest>) -> Option<Credential> {
		let value = match request {
			Some(request) => request.cookie(AUTH_COOKIE),
			None => self.jar.as_ref().and_then(|jar| jar.get(AUTH_COOKIE)),
		};

		value.filter(|value| !value.is_empty()).map(Credential::new)
	}

	/// Persists the credential into interactive storage.
	pub fn write(&self, credential: &Credential) {
		let Some(jar) = self.jar.as_ref() else {
			return;
		};

		jar.set(SetCookie {
			name: AUTH_COOKIE.into(),
			value: credential.expose().into(),
			path: AUTH_COOKIE_PATH.into(),
			max_age: AUTH_COOKIE_TTL,
			same_site: SameSite::Lax,
			secure: self.secure,
		});
	}

	/// Invalidates the credential by writing an empty value.
	///
	/// The cookie entry itself is kept; whether stale empty cookies should be
	/// deleted outright is an open question inherited from the original
	/// behavior, so the asymmetry is preserved rather than silently fixed.
	pub fn clear(&self) {
		self.write(&Credential::empty());
	}
}
impl Debug for TokenStore {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenStore")
			.field("jar", &self.jar.as_ref().map(|_| "<jar>"))
			.field("secure", &self.secure)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug, Default)]
	struct RecordingJar(Mutex<Vec<SetCookie>>);
	impl RecordingJar {
		fn writes(&self) -> Vec<SetCookie> {
			self.0.lock().clone()
		}
	}
	impl CookieJar for RecordingJar {
		fn get(&self, name: &str) -> Option<String> {
			self.0.lock().iter().rev().find(|cookie| cookie.name == name).map(|c| c.value.clone())
		}

		fn set(&self, cookie: SetCookie) {
			self.0.lock().push(cookie);
		}
	}

	#[test]
	fn write_applies_the_cookie_contract() {
		let jar = Arc::new(RecordingJar::default());
		let store = TokenStore::new(jar.clone(), Deployment::Production);

		store.write(&Credential::new("tok-1"));

		let writes = jar.writes();

		assert_eq!(writes.len(), 1);
		assert_eq!(writes[0].name, AUTH_COOKIE);
		assert_eq!(writes[0].value, "tok-1");
		assert_eq!(writes[0].path, AUTH_COOKIE_PATH);
		assert_eq!(writes[0].max_age, Duration::days(7));
		assert_eq!(writes[0].same_site, SameSite::Lax);
		assert!(writes[0].secure);
	}

	#[test]
	fn secure_flag_follows_deployment() {
		let jar = Arc::new(RecordingJar::default());
		let store = TokenStore::new(jar.clone(), Deployment::Development);

		store.write(&Credential::new("tok-1"));

		assert!(!jar.writes()[0].secure);
	}

	#[test]
	fn write_is_idempotent() {
		let jar = Arc::new(MemoryJar::default());
		let store = TokenStore::new(jar, Deployment::Development);

		store.write(&Credential::new("same"));
		store.write(&Credential::new("same"));

		assert_eq!(
			store.read(None).expect("Credential should be readable after writes.").expose(),
			"same",
		);
	}

	#[test]
	fn clear_writes_an_empty_value_that_reads_as_absent() {
		let jar = Arc::new(RecordingJar::default());
		let store = TokenStore::new(jar.clone(), Deployment::Development);

		store.write(&Credential::new("tok-1"));
		store.clear();

		let writes = jar.writes();

		assert_eq!(writes.len(), 2);
		assert_eq!(writes[1].value, "");
		assert!(store.read(None).is_none());
	}

	#[test]
	fn server_side_read_never_consults_the_jar() {
		let jar = Arc::new(MemoryJar::default());
		let store = TokenStore::new(jar, Deployment::Development);

		store.write(&Credential::new("interactive"));

		let request = IncomingRequest::new().with_header("Accept", "application/json");

		assert!(store.read(Some(&request)).is_none());

		let request =
			IncomingRequest::new().with_header("Cookie", "auth_token=from%20request; theme=dark");

		assert_eq!(
			store
				.read(Some(&request))
				.expect("Cookie header with auth_token should yield a credential.")
				.expose(),
			"from request",
		);
	}

	#[test]
	fn detached_store_reads_absent_and_ignores_writes() {
		let store = TokenStore::detached();

		store.write(&Credential::new("dropped"));

		assert!(store.read(None).is_none());
	}
}
