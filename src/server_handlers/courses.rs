use actix_web::{web, HttpResponse};
use tracing::info;

use crate::algorithm::merge_courses;
use crate::api_json::MergeRequest;
use crate::catalog::{sample_courses, summarize};
use crate::error::TimetableError;

/// GET /api/courses
/// Lista `{courseId, name}` del catálogo de ejemplo.
pub async fn list_courses_handler() -> Result<HttpResponse, TimetableError> {
    info!("GET /api/courses");
    let courses = sample_courses()?;
    Ok(HttpResponse::Ok().json(summarize(courses)))
}

/// GET /api/courses/full
pub async fn full_courses_handler() -> Result<HttpResponse, TimetableError> {
    info!("GET /api/courses/full");
    Ok(HttpResponse::Ok().json(sample_courses()?))
}

/// POST /api/courses/merge
/// Une cursos recién importados con la lista actual del usuario.
pub async fn merge_courses_handler(body: web::Json<serde_json::Value>) -> Result<HttpResponse, TimetableError> {
    let request: MergeRequest = serde_json::from_value(body.into_inner())?;
    info!(
        existing = request.existing.len(),
        incoming = request.incoming.len(),
        "POST /api/courses/merge"
    );
    let merged = merge_courses(request.existing, request.incoming);
    Ok(HttpResponse::Ok().json(merged))
}
