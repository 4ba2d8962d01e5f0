//! Client-level error taxonomy shared across the token store, transport, and pipeline.

// self
use crate::{_prelude::*, envelope::FieldErrors};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Classified API-call failure exposed by the request pipeline.
///
/// Every failed call resolves to exactly one variant; the pipeline notifies the
/// injected [`Notifier`](crate::notify::Notifier) with the variant's display
/// message before propagating it, and never retries or recovers on its own.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Response body was not parseable JSON, or the `data` payload did not match
	/// the caller-declared shape.
	#[error("Invalid JSON response from server")]
	InvalidResponseBody {
		/// Structured parsing failure with the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Server answered with a status outside the success range.
	#[error("{message}")]
	RequestFailed {
		/// Envelope `message`, or "Request failed" when the server omitted one.
		message: String,
		/// HTTP status code of the response.
		status: u16,
		/// Per-field violation lists decoded from the envelope, empty when omitted.
		errors: FieldErrors,
	},
	/// Server answered with a success status but the envelope carried no `data`.
	#[error("{message}")]
	EmptyPayload {
		/// Envelope `message`, or "No data received from API" when omitted.
		message: String,
	},
	/// Unclassified failure, typically transport-level (DNS, TCP, TLS).
	#[error("Unknown API error")]
	Unknown {
		/// Underlying failure, when one exists.
		#[source]
		source: Option<BoxError>,
	},
}
impl Error {
	/// Wraps an unclassified failure while preserving its source chain.
	pub fn unknown(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Unknown { source: Some(Box::new(src)) }
	}

	/// Wraps a JSON decode failure as an invalid-body error.
	pub fn invalid_response_body(src: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::InvalidResponseBody { source: src }
	}

	/// HTTP status attached to the error, when the server answered at all.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::RequestFailed { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Field-violation mapping attached to the error, when the server supplied one.
	pub fn field_errors(&self) -> Option<&FieldErrors> {
		match self {
			Self::RequestFailed { errors, .. } => Some(errors),
			_ => None,
		}
	}
}
impl From<crate::http::TransportError> for Error {
	fn from(e: crate::http::TransportError) -> Self {
		Self::unknown(e)
	}
}
