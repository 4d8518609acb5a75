use std::sync::Arc;

use crate::auth::RevokedTokens;
use crate::cache::PageCache;
use crate::store::{PgStore, Store};

/// Shared application state handed to every handler. The store is the only
/// stateful collaborator; the cache and revocation set are bookkeeping.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub cache: Arc<PageCache>,
    pub revoked: Arc<RevokedTokens>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            cache: Arc::new(PageCache::new()),
            revoked: Arc::new(RevokedTokens::new()),
        }
    }

    pub fn from_env() -> Result<Self, crate::database::DatabaseError> {
        let store = PgStore::from_env()?;
        Ok(Self::new(Arc::new(store)))
    }
}
