//! Demonstrates a full Collections round trip against a local mock provider:
//! request a payment, then poll the transaction it created.

// crates.io
use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use url::Url;
// self
use momo_sdk::{
	config::{Config, Environment},
	model::{Party, PartyIdType, PaymentRequest},
	products::Collections,
};

#[tokio::main]
async fn main() -> Result<()> {
	let server = MockServer::start_async().await;

	server.mock(|when, then| {
		when.method(POST).path("/collection/token/");
		then.status(200).header("content-type", "application/json").body(
			"{\"access_token\":\"demo-access\",\"token_type\":\"access_token\",\"expires_in\":3600}",
		);
	});
	server.mock(|when, then| {
		when.method(POST).path("/collection/v1_0/requesttopay");
		then.status(202);
	});
	server.mock(|when, then| {
		when.method(GET).path_includes("/collection/v1_0/requesttopay/");
		then.status(200).header("content-type", "application/json").body(
			json!({
				"financialTransactionId": "23503452",
				"externalId": "demo-001",
				"amount": "50",
				"currency": "EUR",
				"payer": { "partyIdType": "MSISDN", "partyId": "256774290781" },
				"status": "SUCCESSFUL",
			})
			.to_string(),
		);
	});

	let collections = Collections::new(&Config {
		environment: Environment::Sandbox,
		base_url: Some(Url::parse(&server.base_url())?),
		callback_host: "example.com".into(),
		primary_key: "demo-primary-key".into(),
		user_id: "c72025f5-5cd1-4630-99e4-8ba4722fad56".into(),
		user_secret: "demo-secret".into(),
	})?;
	let reference_id = collections
		.request_to_pay(&PaymentRequest {
			amount: "50".into(),
			currency: "EUR".into(),
			external_id: Some("demo-001".into()),
			payer: Party {
				party_id_type: PartyIdType::Msisdn,
				party_id: "256774290781".into(),
			},
			payer_message: Some("demo payment".into()),
			payee_note: None,
			callback_url: None,
		})
		.await?;

	println!("payment accepted, reference id: {reference_id}");

	let transaction = collections.get_transaction(&reference_id).await?;

	println!("transaction: {transaction:?}");

	Ok(())
}
