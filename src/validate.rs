//! Precondition checks run before any network call.
//!
//! The literal failure messages are shared with this API's other SDKs; see
//! [`ValidationError`](crate::error::ValidationError) for the full contract.
//! Checks the type system already enforces (presence of the counterparty and
//! of its id type) have no runtime counterpart here.

// self
use crate::{
	_prelude::*,
	error::ValidationError,
	model::{PaymentRequest, TransferRequest},
};

/// Validates a Collections request-to-pay before transmission.
pub fn validate_request_to_pay(request: &PaymentRequest) -> Result<(), ValidationError> {
	validate_amount(&request.amount)?;
	validate_currency(&request.currency)?;

	if request.payer.party_id.is_empty() {
		return Err(ValidationError::PayerPartyIdRequired);
	}

	Ok(())
}

/// Validates a transfer or remit before transmission. `reference_id` is the
/// effective reference id, caller-supplied or freshly generated.
pub fn validate_transfer(
	reference_id: &str,
	request: &TransferRequest,
) -> Result<(), ValidationError> {
	if reference_id.is_empty() {
		return Err(ValidationError::ReferenceIdRequired);
	}
	if !is_uuid_v4(reference_id) {
		return Err(ValidationError::ReferenceIdNotUuid);
	}

	validate_amount(&request.amount)?;
	validate_currency(&request.currency)?;

	if request.payee.party_id.is_empty() {
		return Err(ValidationError::PayeePartyIdRequired);
	}

	Ok(())
}

fn validate_amount(amount: &str) -> Result<(), ValidationError> {
	if amount.is_empty() {
		return Err(ValidationError::AmountRequired);
	}
	if amount.parse::<f64>().is_err() {
		return Err(ValidationError::AmountNotNumeric);
	}

	Ok(())
}

fn validate_currency(currency: &str) -> Result<(), ValidationError> {
	if currency.is_empty() {
		return Err(ValidationError::CurrencyRequired);
	}

	Ok(())
}

/// Strict UUID v4 shape check shared by the request and config validators.
pub(crate) fn is_uuid_v4(value: &str) -> bool {
	Uuid::parse_str(value).is_ok_and(|id| id.get_version_num() == 4)
}
