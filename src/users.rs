//! Sandbox API user provisioning.
//!
//! Production credentials come from the provider's portal; in the sandbox
//! they must be minted through the provisioning API instead. [`Users`] covers
//! that bootstrap: create an API user bound to a callback host, then fetch
//! its secret for use in a [`Config`](crate::config::Config).

// crates.io
use serde_json::json;
// self
use crate::{
	_prelude::*,
	config::Subscription,
	http::{self, REFERENCE_ID_HEADER},
};

/// Secret minted for a sandbox API user.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCredentials {
	/// The API user's secret, paired with its id during token exchanges.
	pub api_key: String,
}

/// Sandbox provisioning client.
///
/// Authenticates with the subscription primary key alone; no API user or
/// bearer token is involved.
#[derive(Debug)]
pub struct Users {
	http: ReqwestClient,
	base_url: Url,
}
impl Users {
	/// Creates a provisioning client from the given subscription.
	pub fn new(subscription: &Subscription) -> Result<Self> {
		subscription.validate()?;

		let http = http::build_http_client(&subscription.primary_key, None)?;
		let base_url = subscription.base_url()?;

		Ok(Self { http, base_url })
	}

	/// Creates a sandbox API user bound to the given callback host and
	/// returns its generated id.
	pub async fn create(&self, callback_host: &str) -> Result<String> {
		let user_id = Uuid::new_v4().to_string();
		let url = http::join_endpoint(&self.base_url, "v1_0/apiuser")?;
		let response = self
			.http
			.post(url)
			.header(REFERENCE_ID_HEADER, &user_id)
			.json(&json!({ "providerCallbackHost": callback_host }))
			.send()
			.await?;

		if !response.status().is_success() {
			return Err(http::failure_from_response(response).await);
		}

		Ok(user_id)
	}

	/// Fetches the secret of an existing sandbox API user.
	pub async fn login(&self, user_id: &str) -> Result<ApiCredentials> {
		let url = http::join_endpoint(&self.base_url, &format!("v1_0/apiuser/{user_id}/apikey"))?;
		let response = self.http.post(url).send().await?;

		if !response.status().is_success() {
			return Err(http::failure_from_response(response).await);
		}

		http::parse_json(&response.bytes().await?)
	}
}
