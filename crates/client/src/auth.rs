use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::ApiError;
use crate::http::{ApiClient, Method};

/// Registration request body. The confirmation field of the form is a
/// client-side check only and has no wire counterpart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub correo: String,
    pub clave: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub correo: String,
    pub clave: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub usuario: Value,
}

/// Auth endpoints seam; screens depend on this, not on the transport.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn register(&self, input: &RegisterRequest) -> Result<Value, ApiError>;
    async fn login(&self, input: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

pub struct HttpAuthApi {
    client: ApiClient,
    login_path: String,
    register_path: String,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient, endpoints: &configs::EndpointConfig) -> Self {
        Self {
            client,
            login_path: endpoints.login.clone(),
            register_path: endpoints.register.clone(),
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn register(&self, input: &RegisterRequest) -> Result<Value, ApiError> {
        let body = serde_json::to_value(input).map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = self
            .client
            .call(Method::POST, &self.register_path, Some(&body), None)
            .await?;
        if response.data.is_null() {
            return Err(ApiError::Parse("empty registration response".into()));
        }
        info!(correo = %input.correo, "user registered");
        Ok(response.data)
    }

    async fn login(&self, input: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(input).map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = self
            .client
            .call(Method::POST, &self.login_path, Some(&body), None)
            .await?;
        let session: LoginResponse =
            serde_json::from_value(response.data).map_err(|e| ApiError::Parse(e.to_string()))?;
        info!(correo = %input.correo, "login ok");
        Ok(session)
    }
}

/// Canned-response mock for screen tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    pub struct MockAuthApi {
        register_result: Mutex<Result<Value, ApiError>>,
        login_result: Mutex<Result<LoginResponse, ApiError>>,
        pub register_calls: Mutex<Vec<RegisterRequest>>,
        pub login_calls: Mutex<Vec<LoginRequest>>,
    }

    impl MockAuthApi {
        pub fn succeeding() -> Self {
            Self {
                register_result: Mutex::new(Ok(serde_json::json!({"id": 1}))),
                login_result: Mutex::new(Ok(LoginResponse {
                    access_token: "tok-1".into(),
                    token_type: "bearer".into(),
                    usuario: serde_json::json!({"nombre": "Ana"}),
                })),
                register_calls: Mutex::new(Vec::new()),
                login_calls: Mutex::new(Vec::new()),
            }
        }

        pub fn register_failing(err: ApiError) -> Self {
            let mock = Self::succeeding();
            *mock.register_result.lock().unwrap() = Err(err);
            mock
        }

        pub fn login_failing(err: ApiError) -> Self {
            let mock = Self::succeeding();
            *mock.login_result.lock().unwrap() = Err(err);
            mock
        }

        pub fn register_count(&self) -> usize {
            self.register_calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AuthApi for MockAuthApi {
        async fn register(&self, input: &RegisterRequest) -> Result<Value, ApiError> {
            self.register_calls.lock().unwrap().push(input.clone());
            self.register_result.lock().unwrap().clone()
        }

        async fn login(&self, input: &LoginRequest) -> Result<LoginResponse, ApiError> {
            self.login_calls.lock().unwrap().push(input.clone());
            self.login_result.lock().unwrap().clone()
        }
    }
}
