//! Injected notification capability used by the pipeline's error finalization.
//!
//! The original dashboard surfaced failures through a hardcoded toast import;
//! here the capability is a dependency of [`ApiClient`](crate::client::ApiClient)
//! so the pipeline stays testable without a UI harness.

/// Transient user-facing notification sink.
///
/// The pipeline calls [`notify`](Notifier::notify) exactly once per failed call
/// with the error's display message, then propagates the error unchanged.
pub trait Notifier
where
	Self: Send + Sync,
{
	/// Surfaces a transient message to the user.
	fn notify(&self, message: &str);
}

/// Notifier that discards every message, for headless callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;
impl Notifier for NullNotifier {
	fn notify(&self, _message: &str) {}
}

/// Notifier that forwards messages as `tracing` warn events.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;
#[cfg(feature = "tracing")]
impl Notifier for TracingNotifier {
	fn notify(&self, message: &str) {
		tracing::warn!(target: "portal_client::notify", "{message}");
	}
}
