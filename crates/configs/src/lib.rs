use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:8000".into(), endpoints: EndpointConfig::default() }
    }
}

/// Fixed endpoint paths, relative to `base_url`. The update/delete entries
/// are prefixes to which the category id is appended.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_login_path")]
    pub login: String,
    #[serde(default = "default_register_path")]
    pub register: String,
    #[serde(default = "default_category_list_path")]
    pub category_list: String,
    #[serde(default = "default_category_create_path")]
    pub category_create: String,
    #[serde(default = "default_category_update_path")]
    pub category_update: String,
    #[serde(default = "default_category_delete_path")]
    pub category_delete: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            login: default_login_path(),
            register: default_register_path(),
            category_list: default_category_list_path(),
            category_create: default_category_create_path(),
            category_update: default_category_update_path(),
            category_delete: default_category_delete_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), session_file: default_session_file() }
    }
}

impl StorageConfig {
    pub fn session_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join(&self.session_file)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeoutConfig {
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
    #[serde(default = "default_alert_auto_hide")]
    pub alert_auto_hide_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { redirect_delay_ms: default_redirect_delay(), alert_auto_hide_ms: default_alert_auto_hide() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
    #[serde(default = "default_name_min_length")]
    pub name_min_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min_length(),
            name_min_length: default_name_min_length(),
        }
    }
}

fn default_login_path() -> String { "/internal/auth/login".into() }
fn default_register_path() -> String { "/internal/auth/registrar".into() }
fn default_category_list_path() -> String { "/internal/categoria-evento/listar".into() }
fn default_category_create_path() -> String { "/internal/categoria-evento/registrar".into() }
fn default_category_update_path() -> String { "/internal/categoria-evento/actualizar".into() }
fn default_category_delete_path() -> String { "/internal/categoria-evento/eliminar".into() }
fn default_data_dir() -> String { "data".into() }
fn default_session_file() -> String { "session.json".into() }
fn default_redirect_delay() -> u64 { 2000 }
fn default_alert_auto_hide() -> u64 { 5000 }
fn default_password_min_length() -> usize { 6 }
fn default_name_min_length() -> usize { 2 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.api.normalize_from_env();
        self.api.validate()?;
        self.storage.validate()?;
        self.validation.validate()?;
        Ok(())
    }
}

impl ApiConfig {
    /// `EVENTOS_API_BASE_URL` wins over the file value when set.
    pub fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("EVENTOS_API_BASE_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!("api.base_url is empty; set it in config.toml or EVENTOS_API_BASE_URL"));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("api.base_url must start with http:// or https://"));
        }
        Ok(())
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        if self.session_file.trim().is_empty() {
            return Err(anyhow!("storage.session_file must not be empty"));
        }
        Ok(())
    }
}

impl ValidationConfig {
    fn validate(&self) -> Result<()> {
        if self.password_min_length == 0 || self.name_min_length == 0 {
            return Err(anyhow!("validation thresholds must be >= 1"));
        }
        Ok(())
    }
}
