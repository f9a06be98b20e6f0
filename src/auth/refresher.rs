//! Single-slot credential cache with serialized refreshes.

// self
use crate::{
	_prelude::*,
	auth::{Authorizer, Credential},
};

/// Caches at most one [`Credential`] per product configuration and decides
/// whether to reuse it or call the [`Authorizer`].
///
/// Refreshes are singleflighted: concurrent callers that observe an expired
/// slot queue behind one async guard, and whoever acquires it second re-checks
/// the slot before issuing another token exchange. A failed exchange leaves
/// the slot untouched, so the next call simply retries.
pub struct TokenRefresher {
	authorizer: Arc<dyn Authorizer>,
	slot: RwLock<Option<Credential>>,
	refresh_guard: AsyncMutex<()>,
}
impl TokenRefresher {
	/// Creates an empty cache in front of the provided authorizer.
	pub fn new(authorizer: Arc<dyn Authorizer>) -> Self {
		Self { authorizer, slot: RwLock::new(None), refresh_guard: AsyncMutex::new(()) }
	}

	/// Returns a fresh credential, re-authorizing only when the cached one has
	/// expired. Callable repeatedly and concurrently.
	pub async fn refresh(&self) -> Result<Credential> {
		if let Some(credential) = self.cached_at(OffsetDateTime::now_utc()) {
			return Ok(credential);
		}

		let _singleflight = self.refresh_guard.lock().await;

		// A concurrent caller may have refilled the slot while this one waited.
		let now = OffsetDateTime::now_utc();

		if let Some(credential) = self.cached_at(now) {
			return Ok(credential);
		}

		let token = self.authorizer.authorize().await?;
		let credential = Credential::from_access_token(&token, now);

		*self.slot.write() = Some(credential.clone());

		Ok(credential)
	}

	fn cached_at(&self, instant: OffsetDateTime) -> Option<Credential> {
		self.slot.read().as_ref().filter(|credential| credential.is_fresh_at(instant)).cloned()
	}
}
impl Debug for TokenRefresher {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenRefresher")
			.field("cached", &self.slot.read().is_some())
			.finish()
	}
}
