use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Event category as owned by the remote service; the client only holds a
/// transient list per fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub nombre: String,
}

/// Request body for category create/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInput {
    pub nombre: String,
}

impl CategoryInput {
    pub fn new(nombre: &str) -> Result<Self, ModelError> {
        let nombre = nombre.trim();
        validate_category_name(nombre)?;
        Ok(Self { nombre: nombre.to_string() })
    }
}

pub fn validate_category_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("category name required".into()));
    }
    Ok(())
}
