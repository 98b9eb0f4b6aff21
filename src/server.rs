use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tokio::sync::Semaphore;
use tracing::info;

use crate::algorithm::SearchLimits;
use crate::config::ServerConfig;
use crate::error::TimetableError;
use crate::server_handlers::{
    full_courses_handler, help_handler, list_courses_handler, merge_courses_handler, schedules_handler,
};

/// Estado compartido entre workers: techos de búsqueda y semáforo que limita
/// cuántas búsquedas corren a la vez.
pub struct AppState {
    pub limits: SearchLimits,
    pub permits: Arc<Semaphore>,
}

impl AppState {
    pub fn new(limits: SearchLimits, workers: usize) -> Self {
        AppState { limits, permits: Arc::new(Semaphore::new(std::cmp::max(1, workers))) }
    }

    pub fn from_config(cfg: &ServerConfig) -> Self {
        AppState::new(cfg.limits, cfg.workers)
    }
}

/// Registra las rutas de la API. Se usa tanto en `run_server` como en los tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // errores de JSON como {"error": ...} igual que el resto de la API
    let json_cfg = web::JsonConfig::default()
        .error_handler(|err, _req| TimetableError::InvalidRequest { message: err.to_string() }.into());

    cfg.app_data(json_cfg)
        .route("/api/courses", web::get().to(list_courses_handler))
        .route("/api/courses/full", web::get().to(full_courses_handler))
        .route("/api/courses/merge", web::post().to(merge_courses_handler))
        .route("/api/schedules", web::post().to(schedules_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(cfg: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::from_config(&cfg));
    info!(
        bind = %cfg.bind,
        workers = cfg.workers,
        max_results = ?cfg.limits.max_results,
        max_nodes = ?cfg.limits.max_nodes,
        "starting timetable server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(cfg.bind.as_str())?
    .run()
    .await
}
