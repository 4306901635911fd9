use async_trait::async_trait;
use models::session::Session;

use crate::errors::ServiceError;

pub mod file_store;

/// Durable storage for the single authenticated session.
///
/// Every screen reads the same record; the legacy split between separate
/// token keys is gone. At most one session is stored at a time and writes
/// happen only after the server confirmed the credentials.
///
/// # Examples
/// ```
/// use service::session::{SessionStore, mock::MockSessionStore};
/// use models::session::Session;
/// let store = MockSessionStore::default();
/// let session = Session::new("tok".into(), "Bearer".into(), serde_json::Value::Null);
/// tokio_test::block_on(store.save(session)).unwrap();
/// assert_eq!(tokio_test::block_on(store.load()).unwrap().access_token, "tok");
/// assert!(tokio_test::block_on(store.clear()).unwrap());
/// ```
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, session: Session) -> Result<(), ServiceError>;
    async fn load(&self) -> Option<Session>;
    /// Returns whether a session existed.
    async fn clear(&self) -> Result<bool, ServiceError>;
}

/// Simple in-memory store for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockSessionStore {
        current: Mutex<Option<Session>>,
    }

    impl MockSessionStore {
        pub fn with_session(session: Session) -> Self {
            Self { current: Mutex::new(Some(session)) }
        }
    }

    #[async_trait]
    impl SessionStore for MockSessionStore {
        async fn save(&self, session: Session) -> Result<(), ServiceError> {
            *self.current.lock().unwrap() = Some(session);
            Ok(())
        }

        async fn load(&self) -> Option<Session> {
            self.current.lock().unwrap().clone()
        }

        async fn clear(&self) -> Result<bool, ServiceError> {
            Ok(self.current.lock().unwrap().take().is_some())
        }
    }
}
