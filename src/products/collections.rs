//! Client for the Collections product: request payments from payers and
//! query their outcomes.

// self
use crate::{
	_prelude::*,
	config::Config,
	error::ApiError,
	http::Pipeline,
	model::{Balance, PartyIdType, PaymentRequest, Transaction, TransactionStatus},
	obs::OpSpan,
	products::{ActiveResponse, Product, reference_headers},
	validate,
};

const PRODUCT: Product = Product::Collection;

/// Collections client.
///
/// Holds its own token cache; build one client per subscription and share it
/// behind an [`Arc`] when needed.
#[derive(Debug)]
pub struct Collections {
	pipeline: Pipeline,
}
impl Collections {
	/// Creates a client from the given configuration.
	///
	/// Fails when the configuration is incomplete or the transport cannot be
	/// constructed.
	pub fn new(config: &Config) -> Result<Self> {
		config.validate()?;

		Ok(Self { pipeline: Pipeline::new(PRODUCT, config)? })
	}

	/// Creates a client over a caller-provided transport. The client must
	/// already carry the subscription-key and target-environment headers.
	pub fn with_http_client(http: ReqwestClient, config: &Config) -> Result<Self> {
		config.validate()?;

		Ok(Self { pipeline: Pipeline::with_http_client(http, PRODUCT, config)? })
	}

	/// Requests a payment from a payer and returns the generated reference
	/// id.
	///
	/// Acceptance means the provider will process the request
	/// asynchronously; poll [`Self::get_transaction`] with the returned id
	/// for the outcome.
	pub async fn request_to_pay(&self, request: &PaymentRequest) -> Result<String> {
		let span = OpSpan::new(PRODUCT, "request_to_pay");

		span.instrument(async {
			validate::validate_request_to_pay(request)?;

			let reference_id = Uuid::new_v4().to_string();
			let headers = reference_headers(&reference_id, request.callback_url.as_deref())?;

			self.pipeline.post_json(&PRODUCT.request_path(), request, headers).await?;

			Ok(reference_id)
		})
		.await
	}

	/// Fetches the transaction identified by a reference id.
	///
	/// A `FAILED` transaction is returned as an error carrying the mapped
	/// failure reason alongside the full record.
	pub async fn get_transaction(&self, reference_id: &str) -> Result<Transaction> {
		let span = OpSpan::new(PRODUCT, "get_transaction");

		span.instrument(async {
			let transaction: Transaction =
				self.pipeline.get_json(&PRODUCT.transaction_path(reference_id)).await?;

			if transaction.status == TransactionStatus::Failed {
				return Err(ApiError::from_transaction(transaction).into());
			}

			Ok(transaction)
		})
		.await
	}

	/// Fetches the balance of the collection account.
	pub async fn get_balance(&self) -> Result<Balance> {
		let span = OpSpan::new(PRODUCT, "get_balance");

		span.instrument(self.pipeline.get_json(&PRODUCT.balance_path())).await
	}

	/// Checks whether an account holder can receive payment requests.
	pub async fn is_payer_active(
		&self,
		party_id: &str,
		party_id_type: PartyIdType,
	) -> Result<bool> {
		let span = OpSpan::new(PRODUCT, "is_payer_active");

		span.instrument(async {
			let response: ActiveResponse = self
				.pipeline
				.get_json(&PRODUCT.account_holder_path(party_id_type, party_id))
				.await?;

			Ok(response.result)
		})
		.await
	}
}
