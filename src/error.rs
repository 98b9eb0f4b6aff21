//! Tipos de error del crate.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimetableError {
    /// Hora que no respeta el formato `HH:MM` de 24 horas
    #[error("invalid time '{value}', expected HH:MM (24-hour)")]
    InvalidTime { value: String },

    /// La petición no trae cursos (o la lista está vacía)
    #[error("No courses provided")]
    NoCourses,

    /// JSON mal formado o con valores inválidos
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Variable de entorno con un valor que no se puede usar
    #[error("invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    /// Falla del runtime al ejecutar la búsqueda (semáforo cerrado, tarea abortada)
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl From<serde_json::Error> for TimetableError {
    fn from(err: serde_json::Error) -> Self {
        TimetableError::InvalidRequest { message: err.to_string() }
    }
}

impl ResponseError for TimetableError {
    fn status_code(&self) -> StatusCode {
        match self {
            TimetableError::Config { .. } | TimetableError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}
