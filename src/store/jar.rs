//! Cookie-jar contract and the built-in in-memory implementation.

// self
use crate::{_prelude::*, store::SetCookie};

/// Interactive-context cookie storage consumed by the token store.
///
/// Browser-embedded hosts adapt their native jar; non-browser hosts and tests
/// use [`MemoryJar`]. Reads and writes are not synchronized against each other:
/// writes only happen on explicit sign-in/sign-out, never per request.
pub trait CookieJar
where
	Self: Send + Sync,
{
	/// Returns the live value stored under `name`, if any.
	fn get(&self, name: &str) -> Option<String>;

	/// Stores a cookie, replacing any previous entry with the same name.
	fn set(&self, cookie: SetCookie);
}

#[derive(Clone, Debug)]
struct StoredCookie {
	value: String,
	expires_at: OffsetDateTime,
}

/// Thread-safe jar that keeps cookies in-process, with expiry enforcement.
#[derive(Debug, Default)]
pub struct MemoryJar(RwLock<HashMap<String, StoredCookie>>);
impl CookieJar for MemoryJar {
	fn get(&self, name: &str) -> Option<String> {
		let guard = self.0.read();
		let cookie = guard.get(name)?;

		if cookie.expires_at <= OffsetDateTime::now_utc() {
			return None;
		}

		Some(cookie.value.clone())
	}

	fn set(&self, cookie: SetCookie) {
		let stored = StoredCookie {
			value: cookie.value,
			expires_at: OffsetDateTime::now_utc() + cookie.max_age,
		};

		self.0.write().insert(cookie.name, stored);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::store::{AUTH_COOKIE_PATH, SameSite};

	fn cookie(name: &str, value: &str, max_age: Duration) -> SetCookie {
		SetCookie {
			name: name.into(),
			value: value.into(),
			path: AUTH_COOKIE_PATH.into(),
			max_age,
			same_site: SameSite::Lax,
			secure: false,
		}
	}

	#[test]
	fn set_then_get_round_trips_live_cookies() {
		let jar = MemoryJar::default();

		jar.set(cookie("auth_token", "tok-1", Duration::days(7)));

		assert_eq!(jar.get("auth_token").as_deref(), Some("tok-1"));
		assert_eq!(jar.get("missing"), None);
	}

	#[test]
	fn replacement_overwrites_the_previous_entry() {
		let jar = MemoryJar::default();

		jar.set(cookie("auth_token", "old", Duration::days(7)));
		jar.set(cookie("auth_token", "new", Duration::days(7)));

		assert_eq!(jar.get("auth_token").as_deref(), Some("new"));
	}

	#[test]
	fn expired_cookies_read_as_absent() {
		let jar = MemoryJar::default();

		jar.set(cookie("auth_token", "stale", Duration::seconds(-1)));

		assert_eq!(jar.get("auth_token"), None);
	}
}
