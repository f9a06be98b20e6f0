//! Product configuration and its validation.

// self
use crate::{_prelude::*, error::ConfigError, validate};

/// Default base URL for the provider sandbox environment.
pub const SANDBOX_BASE_URL: &str = "https://ericssonbasicapi2.azure-api.net";

/// Target environment routing discriminator, sent on every request as the
/// `X-Target-Environment` header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	/// Hosted sandbox for development and testing.
	#[default]
	Sandbox,
	/// Live wallet platform.
	Production,
}
impl Environment {
	/// Returns the wire spelling of the environment.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Sandbox => "sandbox",
			Self::Production => "production",
		}
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Full configuration for one product client. Immutable after the client is
/// constructed; distinct clients built from overlapping configs never share
/// cached credentials.
#[derive(Clone, Debug)]
pub struct Config {
	/// Target environment; defaults to sandbox.
	pub environment: Environment,
	/// Base URL override. Required outside the sandbox, where no default
	/// exists.
	pub base_url: Option<Url>,
	/// Host that receives provider callbacks.
	pub callback_host: String,
	/// Subscription primary key granting access to the product.
	pub primary_key: String,
	/// API user id; must be a UUID v4.
	pub user_id: String,
	/// API user secret used during the token exchange.
	pub user_secret: String,
}
impl Config {
	/// Checks the configuration invariants, preserving the fixed literal
	/// messages of [`ConfigError`].
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.callback_host.is_empty() {
			return Err(ConfigError::CallbackHostRequired);
		}
		if self.environment != Environment::Sandbox && self.base_url.is_none() {
			return Err(ConfigError::BaseUrlRequired);
		}
		if self.primary_key.is_empty() {
			return Err(ConfigError::PrimaryKeyRequired);
		}
		if self.user_id.is_empty() {
			return Err(ConfigError::UserIdRequired);
		}
		if !validate::is_uuid_v4(&self.user_id) {
			return Err(ConfigError::UserIdNotUuid);
		}
		if self.user_secret.is_empty() {
			return Err(ConfigError::UserSecretRequired);
		}

		Ok(())
	}

	/// Resolves the effective base URL, falling back to the sandbox default.
	pub fn base_url(&self) -> Result<Url, ConfigError> {
		resolve_base_url(self.base_url.as_ref())
	}
}

/// Subscription-only configuration for clients that operate before API users
/// exist (sandbox provisioning).
#[derive(Clone, Debug)]
pub struct Subscription {
	/// Subscription primary key granting access to the provisioning API.
	pub primary_key: String,
	/// Base URL override; defaults to the sandbox.
	pub base_url: Option<Url>,
}
impl Subscription {
	/// Checks the subscription invariants.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.primary_key.is_empty() {
			return Err(ConfigError::PrimaryKeyRequired);
		}

		Ok(())
	}

	/// Resolves the effective base URL, falling back to the sandbox default.
	pub fn base_url(&self) -> Result<Url, ConfigError> {
		resolve_base_url(self.base_url.as_ref())
	}
}

fn resolve_base_url(base_url: Option<&Url>) -> Result<Url, ConfigError> {
	match base_url {
		Some(url) => Ok(url.clone()),
		None => Url::parse(SANDBOX_BASE_URL)
			.map_err(|source| ConfigError::InvalidBaseUrl { source }),
	}
}
