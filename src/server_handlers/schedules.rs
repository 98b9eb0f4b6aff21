use std::time::Instant;

use actix_web::{web, HttpResponse};
use tracing::{info, warn};

use crate::algorithm::search_with_limits;
use crate::api_json::{ScheduleRequest, ScheduleResponse};
use crate::error::TimetableError;
use crate::server::AppState;

/// POST /api/schedules
/// Genera todas las combinaciones válidas para los cursos recibidos.
///
/// La búsqueda corre en el pool bloqueante de tokio, limitada por el semáforo
/// compartido, para no bloquear el executor con peticiones grandes.
pub async fn schedules_handler(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, TimetableError> {
    let request: ScheduleRequest = serde_json::from_value(body.into_inner())?;
    let (courses, prefs) = request.validate()?;
    info!(courses = courses.len(), "POST /api/schedules");

    let permit = state
        .permits
        .clone()
        .acquire_owned()
        .await
        .map_err(|e| TimetableError::Internal { message: format!("failed to acquire semaphore: {}", e) })?;

    let limits = state.limits;
    let start = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        search_with_limits(&courses, &prefs, limits)
    })
    .await
    .map_err(|e| TimetableError::Internal { message: format!("task join error: {}", e) })?;

    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    match outcome.truncated {
        Some(reason) => warn!(?reason, schedules = outcome.schedules.len(), elapsed_ms, "search truncated"),
        None => info!(schedules = outcome.schedules.len(), elapsed_ms, "search finished"),
    }

    Ok(HttpResponse::Ok().json(ScheduleResponse::from(outcome)))
}
