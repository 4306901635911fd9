use std::{path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// JSON file-backed store for a single optional document.
///
/// Persists one `V` to a JSON file: the file exists exactly when a document
/// is present. Intended for at-most-one records such as the stored session,
/// where a keyed map would be the wrong shape.
#[derive(Clone)]
pub struct JsonDocStore<V> {
    inner: Arc<RwLock<Option<V>>>,
    file_path: PathBuf,
}

impl<V> JsonDocStore<V>
where
    V: serde::Serialize + serde::de::DeserializeOwned + Clone + Send + Sync,
{
    /// Initialize the store from a path, loading an existing document if the
    /// file is present. An unreadable or undecodable file reads as absent.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let doc: Option<V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).ok(),
            Err(_) => None,
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(doc)), file_path }))
    }

    /// Current document, if any.
    pub async fn get(&self) -> Option<V> {
        let doc = self.inner.read().await;
        doc.clone()
    }

    /// Replace the document and persist.
    pub async fn set(&self, value: V) -> Result<(), ServiceError> {
        let mut doc = self.inner.write().await;
        let data = serde_json::to_vec(&value).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        *doc = Some(value);
        Ok(())
    }

    /// Drop the document and remove the backing file; returns whether a
    /// document existed.
    pub async fn clear(&self) -> Result<bool, ServiceError> {
        let mut doc = self.inner.write().await;
        let existed = doc.take().is_some();
        match fs::remove_file(&self.file_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ServiceError::Storage(e.to_string())),
        }
        Ok(existed)
    }
}
