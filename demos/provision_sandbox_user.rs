//! Demonstrates the sandbox bootstrap against a local mock provider: create
//! an API user, then fetch its secret.

// crates.io
use anyhow::Result;
use httpmock::prelude::*;
use url::Url;
// self
use momo_sdk::{config::Subscription, users::Users};

#[tokio::main]
async fn main() -> Result<()> {
	let server = MockServer::start_async().await;

	server.mock(|when, then| {
		when.method(POST).path("/v1_0/apiuser");
		then.status(201);
	});
	server.mock(|when, then| {
		when.method(POST).path_includes("/apikey");
		then.status(201)
			.header("content-type", "application/json")
			.body("{\"apiKey\":\"demo-api-key\"}");
	});

	let users = Users::new(&Subscription {
		primary_key: "demo-primary-key".into(),
		base_url: Some(Url::parse(&server.base_url())?),
	})?;
	let user_id = users.create("example.com").await?;
	let credentials = users.login(&user_id).await?;

	println!("userId: {user_id}");
	println!("userSecret: {}", credentials.api_key);

	Ok(())
}
