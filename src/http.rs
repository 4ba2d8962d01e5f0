//! Transport primitives for outbound API calls.
//!
//! The module exposes [`HttpTransport`] so downstream crates can integrate custom
//! HTTP stacks (or test doubles) without touching the pipeline. The default
//! [`ReqwestTransport`] lives behind the `reqwest` feature, which is enabled by
//! default.

// self
use crate::_prelude::*;

/// Boxed future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>> + 'a + Send>>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP verbs the pipeline issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// Read a resource.
	Get,
	/// Create a resource; carries a JSON body.
	Post,
	/// Replace a resource; carries a JSON body.
	Put,
	/// Remove a resource.
	Delete,
}
impl Method {
	/// Returns the verb's wire representation.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully decorated request handed to the transport.
///
/// The pipeline owns decoration; transports must transmit the request verbatim
/// and never augment headers or rewrite the URL.
#[derive(Clone, Debug)]
pub struct OutboundRequest {
	/// HTTP verb, fixed by the caller.
	pub method: Method,
	/// Absolute target URL (base URL + descriptor path).
	pub url: Url,
	/// Decorated header set, caller overrides and credential already applied.
	pub headers: BTreeMap<String, String>,
	/// Pre-serialized JSON body, when the verb carries one.
	pub body: Option<String>,
}

/// Raw response surfaced back to the pipeline for decoding.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Unparsed response body bytes.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Whether the status sits in the HTTP success range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP stacks capable of executing one request/response cycle.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be
/// shared behind `Arc<dyn HttpTransport>` across concurrently executing calls;
/// the pipeline holds no other shared state between calls. Cancellation, if
/// desired, is the caller's concern via whatever primitive drives the future.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Transmits the request and resolves with the raw status + body.
	fn send(&self, request: OutboundRequest) -> TransportFuture<'_>;
}

/// Transport-level failures (DNS, TCP, TLS).
///
/// IO-class failures surface through the wrapped source; every transport
/// failure maps to [`Error::Unknown`](crate::error::Error) at the pipeline
/// boundary.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn send(&self, request: OutboundRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
				Method::Put => reqwest::Method::PUT,
				Method::Delete => reqwest::Method::DELETE,
			};
			let mut builder = client.request(method, request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(RawResponse { status, body })
		})
	}
}
