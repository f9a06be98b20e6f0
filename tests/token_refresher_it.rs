// crates.io
use httpmock::prelude::*;
use url::Url;
// self
use momo_sdk::{
	config::{Config, Environment},
	error::Error,
	products::Collections,
};

const USER_ID: &str = "c72025f5-5cd1-4630-99e4-8ba4722fad56";
const USER_SECRET: &str = "f1db798c98df4bcf83b538175893bbd0";
const BASIC_TOKEN: &str =
	"Basic YzcyMDI1ZjUtNWNkMS00NjMwLTk5ZTQtOGJhNDcyMmZhZDU2OmYxZGI3OThjOThkZjRiY2Y4M2I1MzgxNzU4OTNiYmQw";

fn sandbox_config(server: &MockServer) -> Config {
	Config {
		environment: Environment::Sandbox,
		base_url: Some(
			Url::parse(&server.base_url()).expect("Mock server URL should parse successfully."),
		),
		callback_host: "example.com".into(),
		primary_key: "primary-key".into(),
		user_id: USER_ID.into(),
		user_secret: USER_SECRET.into(),
	}
}

fn token_body(expires_in: i64) -> String {
	format!(
		"{{\"access_token\":\"access-1\",\"token_type\":\"access_token\",\"expires_in\":{expires_in}}}",
	)
}

#[tokio::test]
async fn token_is_exchanged_with_basic_auth_and_cached() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/collection/token/")
				.header("Authorization", BASIC_TOKEN)
				.header("Ocp-Apim-Subscription-Key", "primary-key")
				.header("X-Target-Environment", "sandbox");
			then.status(200).header("content-type", "application/json").body(token_body(3600));
		})
		.await;
	let balance_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/collection/v1_0/account/balance")
				.header("Authorization", "Bearer access-1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"availableBalance\":\"2000\",\"currency\":\"UGX\"}");
		})
		.await;
	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let balance =
		collections.get_balance().await.expect("First balance fetch should succeed.");

	assert_eq!(balance.available_balance, "2000");

	collections.get_balance().await.expect("Second balance fetch should succeed.");

	// The second call must reuse the cached credential.
	assert_eq!(token_mock.hits_async().await, 1);
	assert_eq!(balance_mock.hits_async().await, 2);
}

#[tokio::test]
async fn expired_credentials_are_refreshed() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/collection/token/");
			// Already past the refresh margin on arrival.
			then.status(200).header("content-type", "application/json").body(token_body(-3600));
		})
		.await;
	let balance_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/collection/v1_0/account/balance");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"availableBalance\":\"2000\",\"currency\":\"UGX\"}");
		})
		.await;
	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");

	collections.get_balance().await.expect("First balance fetch should succeed.");
	collections.get_balance().await.expect("Second balance fetch should succeed.");

	assert_eq!(token_mock.hits_async().await, 2);
	assert_eq!(balance_mock.hits_async().await, 2);
}

#[tokio::test]
async fn concurrent_requests_share_one_token_exchange() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/collection/token/");
			then.status(200).header("content-type", "application/json").body(token_body(3600));
		})
		.await;
	let balance_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/collection/v1_0/account/balance");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"availableBalance\":\"2000\",\"currency\":\"UGX\"}");
		})
		.await;
	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let (first, second) = tokio::join!(collections.get_balance(), collections.get_balance());

	first.expect("First concurrent balance fetch should succeed.");
	second.expect("Second concurrent balance fetch should succeed.");

	assert_eq!(token_mock.hits_async().await, 1);
	assert_eq!(balance_mock.hits_async().await, 2);
}

#[tokio::test]
async fn rejected_token_exchange_surfaces_as_transport_error() {
	let server = MockServer::start_async().await;
	let _token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/collection/token/");
			then.status(401);
		})
		.await;
	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let error =
		collections.get_balance().await.expect_err("Rejected token exchange should fail.");

	assert!(matches!(error, Error::Transport(_)));
}
