// Biblioteca raíz del crate `timetabler`.
// Reexporta los módulos principales: modelo de bloques horarios, motor de
// combinaciones, frontera JSON y servidor HTTP.
pub mod algorithm;
pub mod api_json;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
mod server_handlers;

pub use algorithm::{merge_courses, search, search_with_limits, SearchLimits, SearchOutcome, Truncation};
pub use config::ServerConfig;
pub use error::TimetableError;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
