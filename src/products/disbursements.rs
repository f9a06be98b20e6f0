//! Client for the Disbursements product: transfer funds from the owner's
//! account to payees.

// self
use crate::{
	_prelude::*,
	config::Config,
	error::ApiError,
	http::Pipeline,
	model::{Balance, PartyIdType, Transaction, TransactionStatus, TransferRequest},
	obs::OpSpan,
	products::{ActiveResponse, Product, reference_headers},
	validate,
};

const PRODUCT: Product = Product::Disbursement;

/// Disbursements client.
///
/// Holds its own token cache; build one client per subscription and share it
/// behind an [`Arc`] when needed.
#[derive(Debug)]
pub struct Disbursements {
	pipeline: Pipeline,
}
impl Disbursements {
	/// Creates a client from the given configuration.
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

	/// Transfers funds to a payee and returns the transfer reference id.
	///
	/// A caller-supplied `reference_id` must be a UUID v4 and is used
	/// verbatim, which makes retries idempotent; otherwise a fresh one is
	/// generated.
	pub async fn transfer(&self, request: &TransferRequest) -> Result<String> {
		let span = OpSpan::new(PRODUCT, "transfer");

		span.instrument(async {
			let reference_id = request
				.reference_id
				.clone()
				.unwrap_or_else(|| Uuid::new_v4().to_string());

			validate::validate_transfer(&reference_id, request)?;

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

	/// Fetches the balance of the disbursement account.
	pub async fn get_balance(&self) -> Result<Balance> {
		let span = OpSpan::new(PRODUCT, "get_balance");

		span.instrument(self.pipeline.get_json(&PRODUCT.balance_path())).await
	}

	/// Checks whether an account holder can receive transfers.
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
