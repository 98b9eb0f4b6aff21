use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::ScheduleRequest;
use crate::models::PreferenceConfig;

pub async fn help_handler() -> impl Responder {
    let courses = crate::catalog::sample_courses()
        .map(|c| c.iter().take(2).cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    let example = ScheduleRequest {
        courses: Some(courses),
        preferences: Some(PreferenceConfig {
            earliest: "08:00".parse().ok(),
            latest: "18:00".parse().ok(),
            no_friday: Some(false),
        }),
    };

    let help = json!({
        "description": "API para generar combinaciones de horario. POST /api/schedules recibe los cursos (cada uno con sus secciones) y las preferencias, y devuelve todas las combinaciones sin choques.",
        "post_example": example,
        "routes": {
            "GET /api/courses": "lista resumida del catálogo de ejemplo",
            "GET /api/courses/full": "catálogo de ejemplo con secciones",
            "POST /api/courses/merge": "une {existing, incoming} deduplicando secciones por sectionId",
            "POST /api/schedules": "genera horarios; responde {count, schedules}"
        },
        "note": "Las horas van en formato HH:MM (24h, 24:00 = fin del día). En preferences, earliest/latest vacíos equivalen a no enviarlos. Los días válidos son Mon, Tue, Wed, Thu y Fri."
    });

    HttpResponse::Ok().json(help)
}
