// Catálogo de ejemplo embebido en el binario (`src/datafiles/sample_courses.json`).
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::TimetableError;
use crate::models::Course;

const SAMPLE_COURSES_JSON: &str = include_str!("../datafiles/sample_courses.json");

/// Resumen de un curso para listados (sin secciones).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub course_id: String,
    pub name: String,
}

/// Parsea una lista de cursos en JSON, validando días y horas.
pub fn parse_courses(json_str: &str) -> Result<Vec<Course>, TimetableError> {
    Ok(serde_json::from_str::<Vec<Course>>(json_str)?)
}

/// Cursos de ejemplo. Se parsean una sola vez.
pub fn sample_courses() -> Result<&'static [Course], TimetableError> {
    static SAMPLE: OnceLock<Result<Vec<Course>, TimetableError>> = OnceLock::new();
    SAMPLE
        .get_or_init(|| parse_courses(SAMPLE_COURSES_JSON))
        .as_deref()
        .map_err(Clone::clone)
}

pub fn summarize(courses: &[Course]) -> Vec<CourseSummary> {
    courses
        .iter()
        .map(|c| CourseSummary { course_id: c.course_id.clone(), name: c.name.clone() })
        .collect()
}
