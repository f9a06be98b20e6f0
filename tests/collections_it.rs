// crates.io
use httpmock::prelude::*;
use serde_json::json;
use url::Url;
use uuid::Uuid;
// self
use momo_sdk::{
	config::{Config, Environment},
	error::{ApiErrorKind, Error},
	model::{Party, PartyIdType, PaymentRequest, TransactionStatus},
	products::Collections,
};

const USER_ID: &str = "c72025f5-5cd1-4630-99e4-8ba4722fad56";

fn sandbox_config(server: &MockServer) -> Config {
	Config {
		environment: Environment::Sandbox,
		base_url: Some(
			Url::parse(&server.base_url()).expect("Mock server URL should parse successfully."),
		),
		callback_host: "example.com".into(),
		primary_key: "primary-key".into(),
		user_id: USER_ID.into(),
		user_secret: "user-secret".into(),
	}
}

fn mount_token_endpoint(server: &MockServer) {
	server.mock(|when, then| {
		when.method(POST).path("/collection/token/");
		then.status(200).header("content-type", "application/json").body(
			"{\"access_token\":\"access-1\",\"token_type\":\"access_token\",\"expires_in\":3600}",
		);
	});
}

fn payment_request() -> PaymentRequest {
	PaymentRequest {
		amount: "50".into(),
		currency: "EUR".into(),
		external_id: Some("123456".into()),
		payer: Party { party_id_type: PartyIdType::Msisdn, party_id: "256774290781".into() },
		payer_message: Some("testing".into()),
		payee_note: Some("hello".into()),
		callback_url: Some("callback url".into()),
	}
}

#[tokio::test]
async fn request_to_pay_posts_the_body_and_returns_a_reference_id() {
	let server = MockServer::start_async().await;

	mount_token_endpoint(&server);

	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/collection/v1_0/requesttopay")
				.header_exists("X-Reference-Id")
				.header("X-Callback-Url", "callback url")
				.json_body(json!({
					"amount": "50",
					"currency": "EUR",
					"externalId": "123456",
					"payer": {
						"partyIdType": "MSISDN",
						"partyId": "256774290781",
					},
					"payerMessage": "testing",
					"payeeNote": "hello",
				}));
			then.status(202);
		})
		.await;
	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let reference_id = collections
		.request_to_pay(&payment_request())
		.await
		.expect("Payment request should be accepted.");
	let parsed = Uuid::parse_str(&reference_id).expect("Reference id should be a UUID.");

	assert_eq!(parsed.get_version_num(), 4);

	mock.assert_async().await;
}

#[tokio::test]
async fn invalid_payment_request_never_reaches_the_network() {
	let server = MockServer::start_async().await;

	mount_token_endpoint(&server);

	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/collection/v1_0/requesttopay");
			then.status(202);
		})
		.await;
	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let error = collections
		.request_to_pay(&PaymentRequest { amount: "fifty".into(), ..payment_request() })
		.await
		.expect_err("Non-numeric amount should be rejected locally.");

	assert_eq!(error.to_string(), "amount must be a number");
	assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn get_transaction_returns_the_record_while_pending() {
	let server = MockServer::start_async().await;

	mount_token_endpoint(&server);
	server.mock(|when, then| {
		when.method(GET).path("/collection/v1_0/requesttopay/reference-1");
		then.status(200).header("content-type", "application/json").body(
			json!({
				"externalId": "123456",
				"amount": "50",
				"currency": "EUR",
				"payer": {
					"partyIdType": "MSISDN",
					"partyId": "256774290781",
				},
				"status": "PENDING",
			})
			.to_string(),
		);
	});

	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let transaction = collections
		.get_transaction("reference-1")
		.await
		.expect("Pending transactions should be returned as-is.");

	assert_eq!(transaction.status, TransactionStatus::Pending);
	assert!(transaction.financial_transaction_id.is_none());
}

#[tokio::test]
async fn failed_transaction_becomes_a_typed_error_with_the_record_attached() {
	let server = MockServer::start_async().await;

	mount_token_endpoint(&server);
	server.mock(|when, then| {
		when.method(GET).path("/collection/v1_0/requesttopay/reference-1");
		then.status(200).header("content-type", "application/json").body(
			json!({
				"externalId": "123456",
				"amount": "50",
				"currency": "EUR",
				"status": "FAILED",
				"reason": "NOT_ENOUGH_FUNDS",
			})
			.to_string(),
		);
	});

	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let error = collections
		.get_transaction("reference-1")
		.await
		.expect_err("Failed transactions should surface as errors.");
	let Error::Api(api_error) = error else {
		panic!("Failed transactions should map onto the API error type.");
	};

	assert_eq!(api_error.kind, ApiErrorKind::NotEnoughFunds);

	let transaction =
		api_error.transaction.expect("The failed record should travel with the error.");

	assert_eq!(transaction.status, TransactionStatus::Failed);
	assert_eq!(transaction.external_id.as_deref(), Some("123456"));
}

#[tokio::test]
async fn structured_failure_bodies_map_onto_error_kinds() {
	let server = MockServer::start_async().await;

	mount_token_endpoint(&server);
	server.mock(|when, then| {
		when.method(POST).path("/collection/v1_0/requesttopay");
		then.status(409).header("content-type", "application/json").body(
			json!({
				"code": "PAYER_LIMIT_REACHED",
				"message": "The payer's limit has been breached.",
			})
			.to_string(),
		);
	});

	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let error = collections
		.request_to_pay(&payment_request())
		.await
		.expect_err("Provider rejection should surface as an error.");
	let Error::Api(api_error) = error else {
		panic!("Structured failure bodies should map onto the API error type.");
	};

	assert_eq!(api_error.kind, ApiErrorKind::PayerLimitReached);
	assert_eq!(api_error.message.as_deref(), Some("The payer's limit has been breached."));
}

#[tokio::test]
async fn unstructured_failure_bodies_keep_the_status() {
	let server = MockServer::start_async().await;

	mount_token_endpoint(&server);
	server.mock(|when, then| {
		when.method(GET).path("/collection/v1_0/account/balance");
		then.status(503).body("upstream maintenance");
	});

	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let error =
		collections.get_balance().await.expect_err("Bare failure responses should fail.");

	assert!(matches!(error, Error::UnexpectedStatus { status: 503 }));
}

#[tokio::test]
async fn account_holder_check_uses_the_uppercase_segment() {
	let server = MockServer::start_async().await;

	mount_token_endpoint(&server);

	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/collection/v1_0/accountholder/MSISDN/0772000000/active");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"result\":true}");
		})
		.await;
	let collections = Collections::new(&sandbox_config(&server))
		.expect("Collections client should build from a sandbox config.");
	let active = collections
		.is_payer_active("0772000000", PartyIdType::Msisdn)
		.await
		.expect("Account holder check should succeed.");

	assert!(active);

	mock.assert_async().await;
}
