//! Wire-level response envelope shared by every backend endpoint.

// self
use crate::_prelude::*;

/// Ordered mapping from field name to its violation messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// JSON wrapper shape returned by the backend for every call.
///
/// Exactly one of two outcomes holds per response: a success status with `data`
/// present, or the call is treated as failed. A success status with absent
/// `data` still fails (see [`Error::EmptyPayload`](crate::error::Error)).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
	/// Payload of the caller-declared shape, absent on failures.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	/// Human-readable summary supplied by the server.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	/// Per-field validation violations, keyed by field name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub errors: Option<FieldErrors>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn envelope_decodes_success_shape() {
		let envelope: Envelope<Vec<serde_json::Value>> =
			serde_json::from_str(r#"{"data":[{"id":1,"name":"Acme"}]}"#)
				.expect("Success envelope should decode.");

		assert!(envelope.message.is_none());
		assert!(envelope.errors.is_none());
		assert_eq!(
			envelope.data.expect("Success envelope should carry data.").len(),
			1,
		);
	}

	#[test]
	fn envelope_decodes_validation_failure_shape() {
		let envelope: Envelope<serde_json::Value> = serde_json::from_str(
			r#"{"message":"Validation failed","errors":{"email":["is invalid","is taken"]}}"#,
		)
		.expect("Failure envelope should decode.");

		assert!(envelope.data.is_none());
		assert_eq!(envelope.message.as_deref(), Some("Validation failed"));

		let errors = envelope.errors.expect("Failure envelope should carry field errors.");

		assert_eq!(
			errors.get("email").map(Vec::len),
			Some(2),
		);
	}

	#[test]
	fn envelope_tolerates_unknown_members() {
		let envelope: Envelope<i64> =
			serde_json::from_str(r#"{"data":7,"meta":{"page":1}}"#)
				.expect("Envelope should ignore members it does not model.");

		assert_eq!(envelope.data, Some(7));
	}
}
