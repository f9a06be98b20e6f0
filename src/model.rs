//! Wire-level data model shared by the product clients.
//!
//! Everything here is transient: request bodies are built per call and
//! transaction/balance records are produced by the provider and read-only to
//! the SDK. Field names follow the provider's camelCase JSON contract.

// self
use crate::_prelude::*;

/// Account holder identifier type. Each type carries its own provider-side
/// validation of the party id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyIdType {
	/// Mobile number validated according to ITU-T E.164.
	Msisdn,
	/// E-mail address.
	Email,
	/// UUID of the party.
	PartyCode,
}
impl PartyIdType {
	/// Returns the canonical wire spelling of the type.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Msisdn => "MSISDN",
			Self::Email => "EMAIL",
			Self::PartyCode => "PARTY_CODE",
		}
	}
}
impl Display for PartyIdType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// An account holder in the wallet platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
	/// Identifier type governing how `party_id` is validated.
	pub party_id_type: PartyIdType,
	/// The party identifier itself.
	pub party_id: String,
}

/// Lifecycle status of a transaction as reported by the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
	/// The transaction completed.
	Successful,
	/// The transaction is awaiting approval or settlement.
	Pending,
	/// The transaction failed; `reason` explains why.
	Failed,
}

/// Failure codes attached to failed transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
	/// Approval for the payment was rejected.
	ApprovalRejected,
	/// The request expired before completion.
	Expired,
	/// The provider failed internally while processing.
	InternalProcessingError,
	/// The configured callback URL host is not accepted.
	InvalidCallbackUrlHost,
	/// The currency is not valid for the account.
	InvalidCurrency,
	/// The operation is not allowed.
	NotAllowed,
	/// The target environment header does not match the subscription.
	NotAllowedTargetEnvironment,
	/// The payer account lacks funds.
	NotEnoughFunds,
	/// The payee is not allowed to receive funds.
	PayeeNotAllowedToReceive,
	/// The payee account holder was not found.
	PayeeNotFound,
	/// The payer reached a transaction limit.
	PayerLimitReached,
	/// The payer account holder was not found.
	PayerNotFound,
	/// The payment was not approved by the payer.
	PaymentNotApproved,
	/// A resource with the supplied reference already exists.
	ResourceAlreadyExist,
	/// The referenced resource was not found.
	ResourceNotFound,
	/// The provider service is temporarily unavailable.
	ServiceUnavailable,
	/// The transaction was cancelled. Note the single-L wire spelling.
	TransactionCanceled,
}

/// Request body for a Collections request-to-pay.
///
/// `callback_url` travels as the `X-Callback-Url` header, never in the body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
	/// Amount to be debited from the payer account, as a numeric string.
	pub amount: String,
	/// ISO4217 currency code.
	pub currency: String,
	/// Caller-side reconciliation reference; not required to be unique.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub external_id: Option<String>,
	/// The account holder to debit.
	pub payer: Party,
	/// Message written to the payer's transaction history.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payer_message: Option<String>,
	/// Note written to the payee's transaction history.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payee_note: Option<String>,
	/// Where the asynchronous result callback should be delivered.
	#[serde(skip)]
	pub callback_url: Option<String>,
}

/// Request body for a Disbursements transfer or a Remittances remit.
///
/// `reference_id` and `callback_url` travel as headers, never in the body. A
/// fresh UUID v4 reference id is generated when none is supplied.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
	/// Caller-supplied transfer reference; must be a UUID v4 when present.
	#[serde(skip)]
	pub reference_id: Option<String>,
	/// Amount to be debited from the owner's account, as a numeric string.
	pub amount: String,
	/// ISO4217 currency code.
	pub currency: String,
	/// Caller-side reconciliation reference; not required to be unique.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub external_id: Option<String>,
	/// The account holder to credit.
	pub payee: Party,
	/// Message written to the payer's transaction history.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payer_message: Option<String>,
	/// Note written to the payee's transaction history.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payee_note: Option<String>,
	/// Where the asynchronous result callback should be delivered.
	#[serde(skip)]
	pub callback_url: Option<String>,
}

/// Transaction record produced by the provider.
///
/// Collections transactions carry a `payer`, disbursement and remittance
/// transactions a `payee`; the other counterparty field stays `None`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	/// Financial transaction id from the mobile money manager; absent while
	/// the transaction is pending.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub financial_transaction_id: Option<String>,
	/// Caller-side reconciliation reference.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_id: Option<String>,
	/// Transaction amount as a numeric string.
	pub amount: String,
	/// ISO4217 currency code.
	pub currency: String,
	/// Debited account holder (Collections).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payer: Option<Party>,
	/// Credited account holder (Disbursements/Remittances).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payee: Option<Party>,
	/// Lifecycle status.
	pub status: TransactionStatus,
	/// Failure code; populated when `status` is `FAILED`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reason: Option<FailureReason>,
	/// Message written to the payer's transaction history.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payer_message: Option<String>,
	/// Note written to the payee's transaction history.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payee_note: Option<String>,
}

/// Available balance of the account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
	/// Available balance as a numeric string.
	pub available_balance: String,
	/// ISO4217 currency code.
	pub currency: String,
}
