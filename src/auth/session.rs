//! Explicit session object replacing process-global auth state.
//!
//! Callers hold a shared [`Session`] and pass it to whichever component needs
//! it; UI layers subscribe through [`Session::subscribe`] instead of reading an
//! ambient store. The session owns no credential material itself — persistence
//! goes through the [`TokenStore`].

// self
use crate::{_prelude::*, auth::Credential, store::TokenStore};

/// Callback invoked with the current user whenever the session changes.
///
/// Observers are shared handles so the session can release its internal lock
/// before invoking them; an observer may therefore re-enter the session
/// (e.g. sign out in reaction to an expired credential).
pub type SessionObserver = Arc<dyn Fn(Option<&UserProfile>) + Send + Sync>;

/// Signed-in user as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
	/// Backend-assigned user identifier.
	pub id: i64,
	/// Display name.
	pub name: String,
	/// Sign-in email address.
	pub email: String,
}

/// Authenticated-session handle coupling the current user to credential storage.
pub struct Session {
	store: Arc<TokenStore>,
	user: RwLock<Option<UserProfile>>,
	observers: Mutex<Vec<SessionObserver>>,
}
impl Session {
	/// Creates a signed-out session over the provided token store.
	pub fn new(store: Arc<TokenStore>) -> Self {
		Self { store, user: RwLock::new(None), observers: Mutex::new(Vec::new()) }
	}

	/// Token store backing this session.
	pub fn store(&self) -> &Arc<TokenStore> {
		&self.store
	}

	/// Snapshot of the signed-in user, if any.
	pub fn user(&self) -> Option<UserProfile> {
		self.user.read().clone()
	}

	/// Persists a credential obtained from the identity provider and records the
	/// user it belongs to.
	pub fn sign_in(&self, credential: &Credential, user: UserProfile) {
		self.store.write(credential);
		self.set_user(Some(user));
	}

	/// Replaces the recorded user and notifies observers.
	pub fn set_user(&self, user: Option<UserProfile>) {
		*self.user.write() = user;

		self.publish();
	}

	/// Invalidates the stored credential and drops the recorded user.
	///
	/// Navigation back to the sign-in screen is the caller's concern.
	pub fn sign_out(&self) {
		self.store.clear();
		self.set_user(None);
	}

	/// Registers an observer invoked on every subsequent session change.
	pub fn subscribe(&self, observer: SessionObserver) {
		self.observers.lock().push(observer);
	}

	fn publish(&self) {
		// Snapshot both under their locks, invoke with no lock held: observers
		// are allowed to re-enter the session.
		let user = self.user.read().clone();
		let observers = self.observers.lock().clone();

		for observer in &observers {
			observer(user.as_ref());
		}
	}
}
impl Debug for Session {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session")
			.field("user", &*self.user.read())
			.field("observers", &self.observers.lock().len())
			.finish()
	}
}
