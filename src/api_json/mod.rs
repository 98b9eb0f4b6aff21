use serde::{Deserialize, Serialize};

use crate::algorithm::{search_with_limits, SearchLimits, SearchOutcome, Truncation};
use crate::error::TimetableError;
use crate::models::{Course, PreferenceConfig, Schedule};

/// Parámetros de entrada para generar horarios
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "courses": [
///     {
///       "courseId": "MATH340",
///       "name": "Elementary Matrix and Linear Algebra",
///       "sections": [
///         {
///           "sectionId": "MATH340-LEC-001",
///           "times": [
///             { "day": "Mon", "start": "09:55", "end": "10:45", "label": "LEC 001" }
///           ]
///         }
///       ]
///     }
///   ],
///   "preferences": { "earliest": "08:00", "latest": "18:00", "noFriday": false }
/// }
/// ```
///
/// # Campos:
/// - `courses`: cursos a combinar, en orden (requerido y no vacío)
/// - `preferences`: ventana horaria y `noFriday` (opcional; cada campo también)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub courses: Option<Vec<Course>>,
    #[serde(default)]
    pub preferences: Option<PreferenceConfig>,
}

impl ScheduleRequest {
    /// Rechaza peticiones sin cursos antes de invocar el motor.
    pub fn validate(self) -> Result<(Vec<Course>, PreferenceConfig), TimetableError> {
        match self.courses {
            Some(courses) if !courses.is_empty() => Ok((courses, self.preferences.unwrap_or_default())),
            _ => Err(TimetableError::NoCourses),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Siempre igual a `schedules.len()`
    pub count: usize,
    pub schedules: Vec<Schedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated: Option<Truncation>,
}

impl From<SearchOutcome> for ScheduleResponse {
    fn from(outcome: SearchOutcome) -> Self {
        ScheduleResponse {
            count: outcome.schedules.len(),
            schedules: outcome.schedules,
            truncated: outcome.truncated,
        }
    }
}

/// Cuerpo de `POST /api/courses/merge`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeRequest {
    #[serde(default)]
    pub existing: Vec<Course>,
    #[serde(default)]
    pub incoming: Vec<Course>,
}

pub fn parse_json_input(json_str: &str) -> Result<ScheduleRequest, TimetableError> {
    Ok(serde_json::from_str::<ScheduleRequest>(json_str)?)
}

/// Valida la petición y ejecuta la búsqueda con los techos dados.
pub fn generate_schedules(request: ScheduleRequest, limits: SearchLimits) -> Result<ScheduleResponse, TimetableError> {
    let (courses, prefs) = request.validate()?;
    Ok(search_with_limits(&courses, &prefs, limits).into())
}
