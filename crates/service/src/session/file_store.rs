use std::sync::Arc;

use async_trait::async_trait;
use models::session::Session;
use tracing::debug;

use crate::errors::ServiceError;
use crate::session::SessionStore;
use crate::storage::json_doc_store::JsonDocStore;

/// File-backed session store persisting the session as one JSON document.
/// Survives restarts; cleared only by logout or external file removal.
#[derive(Clone)]
pub struct FileSessionStore {
    store: Arc<JsonDocStore<Session>>,
}

impl FileSessionStore {
    /// Open the store at the given file path, loading any persisted session.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocStore::<Session>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, session: Session) -> Result<(), ServiceError> {
        self.store.set(session).await?;
        debug!("session saved");
        Ok(())
    }

    async fn load(&self) -> Option<Session> {
        self.store.get().await
    }

    async fn clear(&self) -> Result<bool, ServiceError> {
        let existed = self.store.clear().await?;
        debug!(existed, "session cleared");
        Ok(existed)
    }
}
