//! Configuración del servidor leída desde `.env` y variables de entorno.

use std::env;

use crate::algorithm::SearchLimits;
use crate::error::TimetableError;

pub const DEFAULT_BIND: &str = "127.0.0.1:4000";
pub const DEFAULT_MAX_RESULTS: usize = 10_000;
pub const DEFAULT_MAX_NODES: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Dirección de escucha (`TIMETABLE_BIND`)
    pub bind: String,
    /// Techos aplicados a cada búsqueda (`TIMETABLE_MAX_RESULTS`, `TIMETABLE_MAX_NODES`)
    pub limits: SearchLimits,
    /// Búsquedas simultáneas permitidas (`TIMETABLE_WORKERS`)
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: DEFAULT_BIND.to_string(),
            limits: SearchLimits {
                max_results: Some(DEFAULT_MAX_RESULTS),
                max_nodes: Some(DEFAULT_MAX_NODES),
            },
            workers: std::cmp::max(1, num_cpus::get()),
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, TimetableError> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Versión parametrizable para pruebas: `lookup` resuelve cada variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TimetableError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = ServerConfig::default();

        if let Some(bind) = lookup("TIMETABLE_BIND").filter(|s| !s.trim().is_empty()) {
            cfg.bind = bind.trim().to_string();
        }
        if let Some(raw) = lookup("TIMETABLE_MAX_RESULTS") {
            cfg.limits.max_results = parse_ceiling("TIMETABLE_MAX_RESULTS", &raw)?;
        }
        if let Some(raw) = lookup("TIMETABLE_MAX_NODES") {
            cfg.limits.max_nodes = parse_ceiling("TIMETABLE_MAX_NODES", &raw)?;
        }
        if let Some(raw) = lookup("TIMETABLE_WORKERS") {
            let workers = parse_usize("TIMETABLE_WORKERS", &raw)?;
            if workers == 0 {
                return Err(TimetableError::Config {
                    key: "TIMETABLE_WORKERS".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
            cfg.workers = workers;
        }

        Ok(cfg)
    }
}

// "0" o "none" desactivan el techo
fn parse_ceiling(key: &str, raw: &str) -> Result<Option<usize>, TimetableError> {
    if raw.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match parse_usize(key, raw)? {
        0 => Ok(None),
        n => Ok(Some(n)),
    }
}

fn parse_usize(key: &str, raw: &str) -> Result<usize, TimetableError> {
    raw.trim().parse::<usize>().map_err(|e| TimetableError::Config {
        key: key.to_string(),
        message: format!("'{}': {}", raw, e),
    })
}
