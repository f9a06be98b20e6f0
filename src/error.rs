//! SDK-level error types shared across the pipeline, products, and validators.

// self
use crate::{_prelude::*, model::{FailureReason, Transaction}};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical SDK error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Request precondition failure raised before any network call.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Structured provider failure mapped from a `{code, message}` body.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Transport failure surfaced unchanged from the HTTP client.
	#[error("Network error occurred while calling the API.")]
	Transport(#[from] reqwest::Error),
	/// Failure response whose body carried no structured error.
	#[error("API returned an unexpected status: {status}.")]
	UnexpectedStatus {
		/// HTTP status code of the failure response.
		status: u16,
	},
	/// Response body that could not be parsed into the expected shape.
	#[error("API returned a malformed response body.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Configuration validation failures.
///
/// The message strings are an external contract shared with other SDKs for this
/// API; they must not be reworded.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// No callback host was provided.
	#[error("callbackHost is required")]
	CallbackHostRequired,
	/// Non-sandbox environments have no default base URL.
	#[error("baseUrl is required if environment is not sandbox")]
	BaseUrlRequired,
	/// No subscription primary key was provided.
	#[error("primaryKey is required")]
	PrimaryKeyRequired,
	/// No API user id was provided.
	#[error("userId is required")]
	UserIdRequired,
	/// The API user id is not a UUID v4.
	#[error("userId must be a valid uuid v4")]
	UserIdNotUuid,
	/// No API user secret was provided.
	#[error("userSecret is required")]
	UserSecretRequired,

	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: reqwest::Error,
	},
	/// Base URL (or a path joined onto it) cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A configuration value cannot be used as an HTTP header.
	#[error("Configuration value cannot be used as an HTTP header.")]
	InvalidHeaderValue {
		/// Underlying header encoding failure.
		#[source]
		source: reqwest::header::InvalidHeaderValue,
	},
}

/// Request precondition failures raised before transmission.
///
/// As with [`ConfigError`], the literal messages are externally visible and
/// fixed. Presence of `payer`/`payee` and of `partyIdType` is enforced by the
/// type system, so only the runtime-checkable rules appear here.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// Amount is empty.
	#[error("amount is required")]
	AmountRequired,
	/// Amount does not parse as a number.
	#[error("amount must be a number")]
	AmountNotNumeric,
	/// Currency is empty.
	#[error("currency is required")]
	CurrencyRequired,
	/// Payer party id is empty.
	#[error("payer.partyId is required")]
	PayerPartyIdRequired,
	/// Payee party id is empty.
	#[error("payee.partyId is required")]
	PayeePartyIdRequired,
	/// Caller-supplied reference id is empty.
	#[error("referenceId is required")]
	ReferenceIdRequired,
	/// Caller-supplied reference id is not a UUID v4.
	#[error("referenceId must be a valid uuid v4")]
	ReferenceIdNotUuid,
}

/// Structured provider failure carrying the mapped kind, the provider's
/// message, and—for transaction-status failures—the full transaction record.
#[derive(Clone, Debug, ThisError)]
#[error("Provider rejected the request: {kind}.")]
pub struct ApiError {
	/// Mapped failure kind.
	pub kind: ApiErrorKind,
	/// Original message from the provider, when one was supplied.
	pub message: Option<String>,
	/// Full transaction record for failures detected via transaction status.
	pub transaction: Option<Box<Transaction>>,
}
impl ApiError {
	pub(crate) fn from_body(body: ErrorBody) -> Self {
		Self {
			kind: ApiErrorKind::from_code(body.code.as_deref()),
			message: body.message,
			transaction: None,
		}
	}

	pub(crate) fn from_transaction(transaction: Transaction) -> Self {
		Self {
			kind: transaction.reason.map_or(ApiErrorKind::Unspecified, ApiErrorKind::from),
			message: None,
			transaction: Some(Box::new(transaction)),
		}
	}
}

/// Wire-level `{code, message}` failure body returned by the provider.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
	#[serde(default)]
	pub code: Option<String>,
	#[serde(default)]
	pub message: Option<String>,
}

/// Failure kinds, one-to-one with the provider's failure codes plus a fallback
/// for unrecognized or absent codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
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
	/// The transaction was cancelled.
	TransactionCancelled,
	/// Fallback for unrecognized or absent failure codes.
	Unspecified,
}
impl ApiErrorKind {
	/// Maps a provider failure code onto its kind; unknown and absent codes
	/// fall back to [`ApiErrorKind::Unspecified`].
	pub fn from_code(code: Option<&str>) -> Self {
		match code {
			Some("APPROVAL_REJECTED") => Self::ApprovalRejected,
			Some("EXPIRED") => Self::Expired,
			Some("INTERNAL_PROCESSING_ERROR") => Self::InternalProcessingError,
			Some("INVALID_CALLBACK_URL_HOST") => Self::InvalidCallbackUrlHost,
			Some("INVALID_CURRENCY") => Self::InvalidCurrency,
			Some("NOT_ALLOWED") => Self::NotAllowed,
			Some("NOT_ALLOWED_TARGET_ENVIRONMENT") => Self::NotAllowedTargetEnvironment,
			Some("NOT_ENOUGH_FUNDS") => Self::NotEnoughFunds,
			Some("PAYEE_NOT_ALLOWED_TO_RECEIVE") => Self::PayeeNotAllowedToReceive,
			Some("PAYEE_NOT_FOUND") => Self::PayeeNotFound,
			Some("PAYER_LIMIT_REACHED") => Self::PayerLimitReached,
			Some("PAYER_NOT_FOUND") => Self::PayerNotFound,
			Some("PAYMENT_NOT_APPROVED") => Self::PaymentNotApproved,
			Some("RESOURCE_ALREADY_EXIST") => Self::ResourceAlreadyExist,
			Some("RESOURCE_NOT_FOUND") => Self::ResourceNotFound,
			Some("SERVICE_UNAVAILABLE") => Self::ServiceUnavailable,
			Some("TRANSACTION_CANCELED") => Self::TransactionCancelled,
			_ => Self::Unspecified,
		}
	}

	/// Returns a stable label suitable for logs and span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::ApprovalRejected => "APPROVAL_REJECTED",
			Self::Expired => "EXPIRED",
			Self::InternalProcessingError => "INTERNAL_PROCESSING_ERROR",
			Self::InvalidCallbackUrlHost => "INVALID_CALLBACK_URL_HOST",
			Self::InvalidCurrency => "INVALID_CURRENCY",
			Self::NotAllowed => "NOT_ALLOWED",
			Self::NotAllowedTargetEnvironment => "NOT_ALLOWED_TARGET_ENVIRONMENT",
			Self::NotEnoughFunds => "NOT_ENOUGH_FUNDS",
			Self::PayeeNotAllowedToReceive => "PAYEE_NOT_ALLOWED_TO_RECEIVE",
			Self::PayeeNotFound => "PAYEE_NOT_FOUND",
			Self::PayerLimitReached => "PAYER_LIMIT_REACHED",
			Self::PayerNotFound => "PAYER_NOT_FOUND",
			Self::PaymentNotApproved => "PAYMENT_NOT_APPROVED",
			Self::ResourceAlreadyExist => "RESOURCE_ALREADY_EXIST",
			Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
			Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
			Self::TransactionCancelled => "TRANSACTION_CANCELED",
			Self::Unspecified => "UNSPECIFIED",
		}
	}
}
impl Display for ApiErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<FailureReason> for ApiErrorKind {
	fn from(reason: FailureReason) -> Self {
		match reason {
			FailureReason::ApprovalRejected => Self::ApprovalRejected,
			FailureReason::Expired => Self::Expired,
			FailureReason::InternalProcessingError => Self::InternalProcessingError,
			FailureReason::InvalidCallbackUrlHost => Self::InvalidCallbackUrlHost,
			FailureReason::InvalidCurrency => Self::InvalidCurrency,
			FailureReason::NotAllowed => Self::NotAllowed,
			FailureReason::NotAllowedTargetEnvironment => Self::NotAllowedTargetEnvironment,
			FailureReason::NotEnoughFunds => Self::NotEnoughFunds,
			FailureReason::PayeeNotAllowedToReceive => Self::PayeeNotAllowedToReceive,
			FailureReason::PayeeNotFound => Self::PayeeNotFound,
			FailureReason::PayerLimitReached => Self::PayerLimitReached,
			FailureReason::PayerNotFound => Self::PayerNotFound,
			FailureReason::PaymentNotApproved => Self::PaymentNotApproved,
			FailureReason::ResourceAlreadyExist => Self::ResourceAlreadyExist,
			FailureReason::ResourceNotFound => Self::ResourceNotFound,
			FailureReason::ServiceUnavailable => Self::ServiceUnavailable,
			FailureReason::TransactionCanceled => Self::TransactionCancelled,
		}
	}
}
