//! Async SDK for the MTN Mobile Money API—collections, disbursements, remittances, and sandbox
//! user provisioning, built around a cached-token HTTP pipeline.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;
pub mod products;
pub mod users;
pub mod validate;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	pub use reqwest::Client as ReqwestClient;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;
	pub use uuid::Uuid;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;

#[cfg(test)] use {anyhow as _, httpmock as _, tokio as _};
#[cfg(feature = "cli")] use {anyhow as _, clap as _, tokio as _, tracing_subscriber as _};
