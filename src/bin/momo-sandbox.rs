//! Mint sandbox API user credentials for a subscription.

// crates.io
use anyhow::Result;
use clap::Parser;
use serde_json::json;
use url::Url;
// self
use momo_sdk::{config::Subscription, users::Users};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Host that receives provider callbacks.
	#[arg(short = 'x', long, env = "MOMO_CALLBACK_HOST")]
	host: String,
	/// Subscription primary key.
	#[arg(short, long, env = "MOMO_PRIMARY_KEY")]
	primary_key: String,
	/// Base URL override; defaults to the sandbox.
	#[arg(long, env = "MOMO_BASE_URL")]
	base_url: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let args = Args::parse();
	let users = Users::new(&Subscription {
		primary_key: args.primary_key,
		base_url: args.base_url,
	})?;
	let user_id = users.create(&args.host).await?;
	let credentials = users.login(&user_id).await?;

	println!(
		"{}",
		serde_json::to_string_pretty(&json!({
			"userId": user_id,
			"userSecret": credentials.api_key,
		}))?
	);

	Ok(())
}
