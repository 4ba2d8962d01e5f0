//! Request pipeline executing one logical API call per invocation.
//!
//! Every call passes three staged transforms: request decoration (default
//! headers, credential injection), response decoding (envelope unwrapping,
//! status-to-error mapping), and error finalization (notification + propagation).
//! Calls are independent request/response cycles — no retry, no timeout, no
//! shared mutable state, and the token store is consulted fresh each time.

// crates.io
use serde::de::DeserializeOwned;
// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;
use crate::{
	_prelude::*,
	config::ClientConfig,
	envelope::Envelope,
	http::{HttpTransport, Method, OutboundRequest, RawResponse},
	notify::Notifier,
	store::{IncomingRequest, TokenStore},
};

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";
const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Caller-supplied description of one API call.
///
/// Verb and path are caller-controlled and never mutated by the pipeline; only
/// headers are augmented during decoration.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
	/// Target path appended to the configured base URL, e.g. `/customers`.
	pub path: String,
	/// HTTP verb.
	pub method: Method,
	/// Pre-serialized JSON body, attached by the `post`/`put` helpers.
	pub body: Option<String>,
	/// Header overrides; they win over pipeline defaults on conflict.
	pub headers: BTreeMap<String, String>,
	/// Inbound request handle for server-context credential reads.
	pub originating_request: Option<IncomingRequest>,
}
impl RequestDescriptor {
	/// Creates a descriptor with no body, no overrides, and no request handle.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			method,
			body: None,
			headers: BTreeMap::new(),
			originating_request: None,
		}
	}

	/// Attaches a pre-serialized JSON body.
	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Adds one header override.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());

		self
	}

	/// Attaches the originating server-side request for cookie extraction.
	pub fn with_originating_request(mut self, request: IncomingRequest) -> Self {
		self.originating_request = Some(request);

		self
	}
}

/// API client executing one classified request/response cycle per call.
///
/// All collaborators are injected: the transport, the token store, and the
/// notification sink. The client itself holds no per-call state, so one shared
/// instance serves concurrent calls without locking.
#[derive(Clone)]
pub struct ApiClient {
	config: ClientConfig,
	transport: Arc<dyn HttpTransport>,
	store: Arc<TokenStore>,
	notifier: Arc<dyn Notifier>,
}
impl ApiClient {
	/// Creates a client over caller-provided collaborators.
	pub fn new(
		config: ClientConfig,
		transport: Arc<dyn HttpTransport>,
		store: Arc<TokenStore>,
		notifier: Arc<dyn Notifier>,
	) -> Self {
		Self { config, transport, store, notifier }
	}

	/// Creates a client with the default reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn with_reqwest(
		config: ClientConfig,
		store: Arc<TokenStore>,
		notifier: Arc<dyn Notifier>,
	) -> Self {
		Self::new(config, Arc::new(ReqwestTransport::default()), store, notifier)
	}

	/// Executes one API call and returns the envelope's `data` typed as `T`.
	///
	/// Every failure — decoration, transport, decode — is surfaced to the
	/// notifier once and then propagated; nothing is swallowed or retried.
	pub async fn execute<T>(&self, descriptor: RequestDescriptor) -> Result<T>
	where
		T: DeserializeOwned,
	{
		match self.dispatch(descriptor).await {
			Ok(payload) => Ok(payload),
			Err(error) => Err(self.finalize(error)),
		}
	}

	/// Issues a `GET` against the path.
	pub async fn get<T>(&self, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.execute(RequestDescriptor::new(Method::Get, path)).await
	}

	/// Issues a `POST` with the body serialized to JSON.
	pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
	where
		T: DeserializeOwned,
		B: Serialize + ?Sized,
	{
		let body = self.encode_body(body)?;

		self.execute(RequestDescriptor::new(Method::Post, path).with_body(body)).await
	}

	/// Issues a `PUT` with the body serialized to JSON.
	pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
	where
		T: DeserializeOwned,
		B: Serialize + ?Sized,
	{
		let body = self.encode_body(body)?;

		self.execute(RequestDescriptor::new(Method::Put, path).with_body(body)).await
	}

	/// Issues a `DELETE` against the path.
	pub async fn delete<T>(&self, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.execute(RequestDescriptor::new(Method::Delete, path)).await
	}

	async fn dispatch<T>(&self, descriptor: RequestDescriptor) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let request = self.decorate(descriptor)?;

		#[cfg(feature = "tracing")]
		tracing::debug!(
			target: "portal_client::client",
			method = %request.method,
			url = %request.url,
			"dispatching API request"
		);

		let response = self.transport.send(request).await?;

		#[cfg(feature = "tracing")]
		tracing::debug!(
			target: "portal_client::client",
			status = response.status,
			"received API response"
		);

		Self::decode(&response)
	}

	/// Merges default headers with caller overrides and injects the credential.
	///
	/// Caller overrides win over pipeline defaults; credential injection wins
	/// over a caller-supplied `Authorization` header.
	fn decorate(&self, descriptor: RequestDescriptor) -> Result<OutboundRequest> {
		let mut headers =
			BTreeMap::from([(CONTENT_TYPE.to_owned(), DEFAULT_CONTENT_TYPE.to_owned())]);

		headers.extend(descriptor.headers);

		if let Some(credential) = self.store.read(descriptor.originating_request.as_ref()) {
			headers.insert(AUTHORIZATION.to_owned(), format!("Bearer {}", credential.expose()));
		}

		let url = format!(
			"{}{}",
			self.config.base_url.as_str().trim_end_matches('/'),
			descriptor.path,
		);
		let url = Url::parse(&url).map_err(Error::unknown)?;

		Ok(OutboundRequest { method: descriptor.method, url, headers, body: descriptor.body })
	}

	/// Unwraps the envelope and maps the HTTP status onto the error taxonomy.
	fn decode<T>(response: &RawResponse) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
		let envelope: Envelope<serde_json::Value> =
			serde_path_to_error::deserialize(&mut deserializer)
				.map_err(Error::invalid_response_body)?;

		if !response.is_success() {
			return Err(Error::RequestFailed {
				message: envelope.message.unwrap_or_else(|| "Request failed".into()),
				status: response.status,
				errors: envelope.errors.unwrap_or_default(),
			});
		}

		let Some(data) = envelope.data else {
			return Err(Error::EmptyPayload {
				message: envelope
					.message
					.unwrap_or_else(|| "No data received from API".into()),
			});
		};

		serde_path_to_error::deserialize(data).map_err(Error::invalid_response_body)
	}

	fn encode_body<B>(&self, body: &B) -> Result<String>
	where
		B: Serialize + ?Sized,
	{
		serde_json::to_string(body).map_err(|e| self.finalize(Error::unknown(e)))
	}

	fn finalize(&self, error: Error) -> Error {
		self.notifier.notify(&error.to_string());

		error
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_url", &self.config.base_url.as_str())
			.field("deployment", &self.config.deployment)
			.finish()
	}
}
