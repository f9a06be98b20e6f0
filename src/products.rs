//! Product clients for the provider's collection, disbursement, and
//! remittance APIs.

pub mod collections;
pub use collections::*;

pub mod disbursements;
pub use disbursements::*;

pub mod remittances;
pub use remittances::*;

// crates.io
use reqwest::header::{HeaderMap, HeaderValue};
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	http::{CALLBACK_URL_HEADER, REFERENCE_ID_HEADER},
	model::PartyIdType,
};

/// Product family an endpoint belongs to.
///
/// Each product mounts the same endpoint shapes under its own URL prefix,
/// with one wrinkle: the collection API spells the account-holder party type
/// segment in uppercase while the other two expect lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Product {
	/// Inbound payments requested from a payer.
	Collection,
	/// Outbound transfers funded by the provider account.
	Disbursement,
	/// Cross-border transfers to a payee.
	Remittance,
}
impl Product {
	/// URL prefix the product's endpoints are mounted under.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Collection => "collection",
			Self::Disbursement => "disbursement",
			Self::Remittance => "remittance",
		}
	}

	pub(crate) fn token_path(&self) -> String {
		format!("{}/token/", self.as_str())
	}

	pub(crate) fn request_path(&self) -> String {
		match self {
			Self::Collection => format!("{}/v1_0/requesttopay", self.as_str()),
			Self::Disbursement | Self::Remittance => format!("{}/v1_0/transfer", self.as_str()),
		}
	}

	pub(crate) fn transaction_path(&self, reference_id: &str) -> String {
		match self {
			Self::Collection => format!("{}/v1_0/requesttopay/{reference_id}", self.as_str()),
			Self::Disbursement | Self::Remittance =>
				format!("{}/v1_0/transfer/{reference_id}", self.as_str()),
		}
	}

	pub(crate) fn balance_path(&self) -> String {
		format!("{}/v1_0/account/balance", self.as_str())
	}

	pub(crate) fn account_holder_path(&self, party_id_type: PartyIdType, party_id: &str) -> String {
		// The party type segment is uppercase on the collection API and
		// lowercase everywhere else.
		let segment = match self {
			Self::Collection => party_id_type.as_str().to_owned(),
			Self::Disbursement | Self::Remittance => party_id_type.as_str().to_lowercase(),
		};

		format!("{}/v1_0/accountholder/{segment}/{party_id}/active", self.as_str())
	}
}
impl Display for Product {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Builds the per-request headers for a mutating call.
pub(crate) fn reference_headers(
	reference_id: &str,
	callback_url: Option<&str>,
) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	headers.insert(
		REFERENCE_ID_HEADER,
		HeaderValue::from_str(reference_id)
			.map_err(|source| ConfigError::InvalidHeaderValue { source })?,
	);

	if let Some(callback_url) = callback_url {
		headers.insert(
			CALLBACK_URL_HEADER,
			HeaderValue::from_str(callback_url)
				.map_err(|source| ConfigError::InvalidHeaderValue { source })?,
		);
	}

	Ok(headers)
}

/// Wire shape of the account-holder activity check.
#[derive(Debug, Deserialize)]
pub(crate) struct ActiveResponse {
	#[serde(default)]
	pub(crate) result: bool,
}
