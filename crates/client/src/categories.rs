use async_trait::async_trait;
use models::category::{Category, CategoryInput};
use serde_json::Value;

use crate::errors::ApiError;
use crate::http::{ApiClient, Method};

/// Category endpoints seam. Every operation is authenticated; the caller
/// supplies the stored bearer token.
#[async_trait]
pub trait CategoryApi: Send + Sync {
    async fn list(&self, token: &str) -> Result<Vec<Category>, ApiError>;
    async fn create(&self, token: &str, input: &CategoryInput) -> Result<(), ApiError>;
    async fn update(&self, token: &str, id: i64, input: &CategoryInput) -> Result<(), ApiError>;
    async fn delete(&self, token: &str, id: i64) -> Result<(), ApiError>;
}

pub struct HttpCategoryApi {
    client: ApiClient,
    list_path: String,
    create_path: String,
    update_path: String,
    delete_path: String,
}

impl HttpCategoryApi {
    pub fn new(client: ApiClient, endpoints: &configs::EndpointConfig) -> Self {
        Self {
            client,
            list_path: endpoints.category_list.clone(),
            create_path: endpoints.category_create.clone(),
            update_path: endpoints.category_update.clone(),
            delete_path: endpoints.category_delete.clone(),
        }
    }

    fn body_of(input: &CategoryInput) -> Result<Value, ApiError> {
        serde_json::to_value(input).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CategoryApi for HttpCategoryApi {
    async fn list(&self, token: &str) -> Result<Vec<Category>, ApiError> {
        let response = self
            .client
            .call(Method::GET, &self.list_path, None, Some(token))
            .await?;
        serde_json::from_value(response.data).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create(&self, token: &str, input: &CategoryInput) -> Result<(), ApiError> {
        let body = Self::body_of(input)?;
        self.client
            .call(Method::POST, &self.create_path, Some(&body), Some(token))
            .await?;
        Ok(())
    }

    async fn update(&self, token: &str, id: i64, input: &CategoryInput) -> Result<(), ApiError> {
        let body = Self::body_of(input)?;
        let path = format!("{}/{}", self.update_path, id);
        self.client
            .call(Method::PUT, &path, Some(&body), Some(token))
            .await?;
        Ok(())
    }

    async fn delete(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let path = format!("{}/{}", self.delete_path, id);
        self.client
            .call(Method::DELETE, &path, None, Some(token))
            .await?;
        Ok(())
    }
}

/// In-memory mock with scriptable failures for screen tests
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCategoryApi {
        items: Mutex<Vec<Category>>,
        next_id: Mutex<i64>,
        fail_next: Mutex<Option<ApiError>>,
        pub seen_tokens: Mutex<Vec<String>>,
    }

    impl MockCategoryApi {
        pub fn with_items(items: Vec<Category>) -> Self {
            let next_id = items.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            Self {
                items: Mutex::new(items),
                next_id: Mutex::new(next_id),
                ..Default::default()
            }
        }

        /// Make the next call fail with `err`; later calls succeed again.
        pub fn fail_next(&self, err: ApiError) {
            *self.fail_next.lock().unwrap() = Some(err);
        }

        pub fn items(&self) -> Vec<Category> {
            self.items.lock().unwrap().clone()
        }

        fn check_failure(&self, token: &str) -> Result<(), ApiError> {
            self.seen_tokens.lock().unwrap().push(token.to_string());
            match self.fail_next.lock().unwrap().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl CategoryApi for MockCategoryApi {
        async fn list(&self, token: &str) -> Result<Vec<Category>, ApiError> {
            self.check_failure(token)?;
            Ok(self.items())
        }

        async fn create(&self, token: &str, input: &CategoryInput) -> Result<(), ApiError> {
            self.check_failure(token)?;
            let mut next_id = self.next_id.lock().unwrap();
            self.items
                .lock()
                .unwrap()
                .push(Category { id: *next_id, nombre: input.nombre.clone() });
            *next_id += 1;
            Ok(())
        }

        async fn update(&self, token: &str, id: i64, input: &CategoryInput) -> Result<(), ApiError> {
            self.check_failure(token)?;
            let mut items = self.items.lock().unwrap();
            match items.iter_mut().find(|c| c.id == id) {
                Some(found) => {
                    found.nombre = input.nombre.clone();
                    Ok(())
                }
                None => Err(ApiError::Server {
                    status: 404,
                    kind: crate::errors::ServerErrorKind::Other,
                    message: "categoria no encontrada".into(),
                }),
            }
        }

        async fn delete(&self, token: &str, id: i64) -> Result<(), ApiError> {
            self.check_failure(token)?;
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|c| c.id != id);
            if items.len() == before {
                return Err(ApiError::Server {
                    status: 404,
                    kind: crate::errors::ServerErrorKind::Other,
                    message: "categoria no encontrada".into(),
                });
            }
            Ok(())
        }
    }
}
