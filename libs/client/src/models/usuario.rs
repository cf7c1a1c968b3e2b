//! Usuario model and related payloads

use serde::{Deserialize, Serialize};

/// Usuario as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Comma-joined role names, as the backend stores them
    #[serde(default)]
    pub roles: Option<String>,
}

/// New usuario creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUsuario {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// Usuario update payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUsuario {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub enabled: Option<bool>,
}
