//! Authorization primitives: basic-auth encoding, the per-product token
//! exchange, and the cached credential it feeds.

pub mod credential;
pub mod refresher;

pub use credential::*;
pub use refresher::*;

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::AUTHORIZATION;
// self
use crate::{_prelude::*, http};

/// Boxed future returned by [`Authorizer::authorize`].
pub type AuthFuture<'a> = Pin<Box<dyn Future<Output = Result<AccessToken>> + 'a + Send>>;

/// Token exchange contract, implemented once per product token endpoint.
///
/// The refresher only ever calls this after deciding the cached credential is
/// unusable, so implementations do not cache anything themselves.
pub trait Authorizer
where
	Self: Send + Sync,
{
	/// Exchanges basic-auth credentials for a fresh access token.
	fn authorize(&self) -> AuthFuture<'_>;
}

/// Access token payload returned by the product token endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessToken {
	/// Bearer token to be attached to subsequent requests.
	pub access_token: String,
	/// Token type reported by the provider; informational.
	#[serde(default)]
	pub token_type: String,
	/// Validity window in seconds.
	pub expires_in: i64,
}

/// Builds the Base64 `user:secret` value used during the token exchange.
pub fn create_basic_auth_token(user_id: &str, user_secret: &str) -> String {
	STANDARD.encode(format!("{user_id}:{user_secret}"))
}

/// [`Authorizer`] performing the `POST {product}/token/` basic-auth exchange.
///
/// Non-2xx responses surface as transport errors unchanged: this call precedes
/// bearer-token acquisition and the token endpoints use a different failure
/// contract than the product APIs.
pub struct BasicAuthorizer {
	http: ReqwestClient,
	token_url: Url,
	basic_token: String,
}
impl BasicAuthorizer {
	/// Creates an authorizer for the given token endpoint. The client is
	/// expected to carry the subscription-key default header.
	pub fn new(http: ReqwestClient, token_url: Url, user_id: &str, user_secret: &str) -> Self {
		Self { http, token_url, basic_token: create_basic_auth_token(user_id, user_secret) }
	}
}
impl Authorizer for BasicAuthorizer {
	fn authorize(&self) -> AuthFuture<'_> {
		Box::pin(async move {
			let response = self
				.http
				.post(self.token_url.clone())
				.header(AUTHORIZATION, format!("Basic {}", self.basic_token))
				.send()
				.await?
				.error_for_status()?;

			http::parse_json(&response.bytes().await?)
		})
	}
}
impl Debug for BasicAuthorizer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BasicAuthorizer")
			.field("token_url", &self.token_url.as_str())
			.field("basic_token", &"<redacted>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn basic_auth_token_encodes_id_and_secret() {
		assert_eq!(create_basic_auth_token("id", "secret"), "aWQ6c2VjcmV0");
	}

	#[test]
	fn debug_redacts_the_basic_token() {
		let authorizer = BasicAuthorizer::new(
			ReqwestClient::new(),
			Url::parse("https://example.com/collection/token/")
				.expect("Token URL fixture should parse."),
			"id",
			"secret",
		);
		let output = format!("{authorizer:?}");

		assert!(output.contains("<redacted>"));
		assert!(!output.contains("aWQ6c2VjcmV0"));
	}
}
