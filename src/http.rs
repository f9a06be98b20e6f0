//! Authenticated HTTP pipeline shared by the product clients.
//!
//! A [`Pipeline`] owns one [`ReqwestClient`] pre-configured with the
//! subscription-key and target-environment default headers, a product base
//! URL, and the [`TokenRefresher`] that supplies bearer tokens. Every request
//! suspends on `refresh()` before dispatch; failure responses with a
//! structured `{code, message}` body map onto the typed error taxonomy and
//! everything else surfaces unchanged.

// crates.io
use reqwest::{
	RequestBuilder, Response,
	header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::{BasicAuthorizer, TokenRefresher},
	config::{Config, Environment},
	error::{ApiError, ConfigError, ErrorBody},
	products::Product,
};

/// Subscription key header attached to every request.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
/// Environment routing header attached to every request.
pub const TARGET_ENVIRONMENT_HEADER: &str = "X-Target-Environment";
/// Client-generated correlation id header for mutating calls.
pub const REFERENCE_ID_HEADER: &str = "X-Reference-Id";
/// Optional callback destination header for mutating calls.
pub const CALLBACK_URL_HEADER: &str = "X-Callback-Url";

/// Transport pipeline owning the product's credential cache.
pub(crate) struct Pipeline {
	http: ReqwestClient,
	base_url: Url,
	refresher: TokenRefresher,
}
impl Pipeline {
	pub(crate) fn new(product: Product, config: &Config) -> Result<Self> {
		let http = build_http_client(&config.primary_key, Some(config.environment))?;

		Self::with_http_client(http, product, config)
	}

	/// Builds a pipeline over a caller-provided client. The client must carry
	/// the subscription-key and target-environment default headers.
	pub(crate) fn with_http_client(
		http: ReqwestClient,
		product: Product,
		config: &Config,
	) -> Result<Self> {
		let base_url = config.base_url()?;
		let token_url = join_endpoint(&base_url, &product.token_path())?;
		let authorizer =
			BasicAuthorizer::new(http.clone(), token_url, &config.user_id, &config.user_secret);

		Ok(Self { http, base_url, refresher: TokenRefresher::new(Arc::new(authorizer)) })
	}

	pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let url = join_endpoint(&self.base_url, path)?;
		let response = self.execute(self.http.get(url)).await?;

		parse_json(&response.bytes().await?)
	}

	pub(crate) async fn post_json<B>(&self, path: &str, body: &B, headers: HeaderMap) -> Result<()>
	where
		B: Serialize,
	{
		let url = join_endpoint(&self.base_url, path)?;

		self.execute(self.http.post(url).headers(headers).json(body)).await?;

		Ok(())
	}

	async fn execute(&self, request: RequestBuilder) -> Result<Response> {
		let credential = self.refresher.refresh().await?;
		let response = request
			.header(AUTHORIZATION, format!("Bearer {}", credential.bearer_token.expose()))
			.send()
			.await?;

		if response.status().is_success() {
			return Ok(response);
		}

		Err(failure_from_response(response).await)
	}
}
impl Debug for Pipeline {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Pipeline")
			.field("base_url", &self.base_url.as_str())
			.field("refresher", &self.refresher)
			.finish()
	}
}

/// Builds the shared transport with the fixed default headers. Provisioning
/// clients pass no environment because the sandbox bootstrap endpoints do not
/// route on it.
pub(crate) fn build_http_client(
	primary_key: &str,
	environment: Option<Environment>,
) -> Result<ReqwestClient> {
	let mut headers = HeaderMap::new();

	headers.insert(
		SUBSCRIPTION_KEY_HEADER,
		HeaderValue::from_str(primary_key)
			.map_err(|source| ConfigError::InvalidHeaderValue { source })?,
	);
	headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

	if let Some(environment) = environment {
		headers.insert(TARGET_ENVIRONMENT_HEADER, HeaderValue::from_static(environment.as_str()));
	}

	ReqwestClient::builder()
		.default_headers(headers)
		.build()
		.map_err(|source| ConfigError::HttpClientBuild { source }.into())
}

/// Maps a failure response onto the typed error taxonomy.
///
/// Bodies that parse as the provider's `{code, message}` shape become
/// [`ApiError`]s (unrecognized and absent codes fall back to `Unspecified`);
/// anything else passes through as an unexpected-status failure.
pub(crate) async fn failure_from_response(response: Response) -> Error {
	let status = response.status().as_u16();
	let bytes = match response.bytes().await {
		Ok(bytes) => bytes,
		Err(source) => return source.into(),
	};

	match serde_json::from_slice::<ErrorBody>(&bytes) {
		Ok(body) => ApiError::from_body(body).into(),
		Err(_) => Error::UnexpectedStatus { status },
	}
}

/// Deserializes a response body, reporting the JSON path on failure.
pub(crate) fn parse_json<T>(bytes: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::ResponseParse { source })
}

/// Joins a relative endpoint path onto a base URL, tolerating trailing-slash
/// differences in caller-supplied bases.
pub(crate) fn join_endpoint(base: &Url, path: &str) -> Result<Url, ConfigError> {
	let joined =
		format!("{}/{}", base.as_str().trim_end_matches('/'), path.trim_start_matches('/'));

	Url::parse(&joined).map_err(|source| ConfigError::InvalidBaseUrl { source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::model::Balance;

	fn base(value: &str) -> Url {
		Url::parse(value).expect("Base URL fixture should parse.")
	}

	#[test]
	fn join_endpoint_normalizes_slashes() {
		let joined = join_endpoint(&base("https://example.com"), "collection/token/")
			.expect("Joining onto a bare host should succeed.");

		assert_eq!(joined.as_str(), "https://example.com/collection/token/");

		let joined = join_endpoint(&base("https://example.com/momo/"), "/v1_0/apiuser")
			.expect("Joining onto a path base should succeed.");

		assert_eq!(joined.as_str(), "https://example.com/momo/v1_0/apiuser");
	}

	#[test]
	fn parse_json_reports_the_failing_path() {
		let error = parse_json::<Balance>(br#"{"availableBalance":2000,"currency":"UGX"}"#)
			.expect_err("Numeric balance should fail to parse as a string.");

		let Error::ResponseParse { source } = error else {
			panic!("Malformed body should surface as a parse error.");
		};

		assert_eq!(source.path().to_string(), "availableBalance");
	}
}
