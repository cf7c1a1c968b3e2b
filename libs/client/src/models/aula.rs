//! Aula model and related payloads

use serde::{Deserialize, Serialize};

/// Aula as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Aula {
    pub id: i64,
    pub nombre: String,
    pub capacidad: i32,
    pub ordenadores: bool,
}

/// New aula creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAula {
    pub nombre: String,
    pub capacidad: i32,
    pub ordenadores: bool,
}

/// Aula update payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateAula {
    pub nombre: Option<String>,
    pub capacidad: Option<i32>,
    pub ordenadores: Option<bool>,
}
