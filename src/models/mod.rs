// Estructuras de datos principales: ocurrencias, secciones, cursos y horarios.
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::TimetableError;

/// Día de la semana en que se dicta un bloque. No se modelan fines de semana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hora del día con precisión de minutos (minutos desde medianoche, 0..=1440).
///
/// Se parsea desde `HH:MM` (24h) y se serializa de vuelta como `HH:MM`.
/// `24:00` es el único valor con hora 24 y representa el fin del día.
/// Nunca se compara como texto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const LAST_MINUTE: ClockTime = ClockTime(23 * 60 + 59);
    pub const END_OF_DAY: ClockTime = ClockTime(24 * 60);

    /// Construye desde hora y minuto; `None` si están fuera de rango.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(ClockTime(hour * 60 + minute))
        } else {
            None
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = TimetableError;

    /// Acepta `H:MM` o `HH:MM`. Cualquier otra forma falla en vez de
    /// compararse mal más adelante.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimetableError::InvalidTime { value: s.to_string() };
        let (hh, mm) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hh_ok = (1..=2).contains(&hh.len()) && hh.bytes().all(|b| b.is_ascii_digit());
        let mm_ok = mm.len() == 2 && mm.bytes().all(|b| b.is_ascii_digit());
        if !hh_ok || !mm_ok {
            return Err(invalid());
        }
        let hour = hh.parse::<u16>().map_err(|_| invalid())?;
        let minute = mm.parse::<u16>().map_err(|_| invalid())?;
        if hour == 24 && minute == 0 {
            return Ok(ClockTime::END_OF_DAY);
        }
        ClockTime::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimetableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Un bloque semanal recurrente (día + inicio + fin).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingOccurrence {
    pub day: Weekday,
    pub start: ClockTime,
    pub end: ClockTime,
    /// Etiqueta descriptiva (p.ej. "LEC 001"); no participa en conflictos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MeetingOccurrence {
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Self {
        MeetingOccurrence { day, start, end, label: None }
    }

    /// Conveniencia para construir desde texto `HH:MM`.
    pub fn parse(day: Weekday, start: &str, end: &str) -> Result<Self, TimetableError> {
        Ok(MeetingOccurrence::new(day, start.parse()?, end.parse()?))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_id: String,
    #[serde(default)]
    pub times: Vec<MeetingOccurrence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: String,
    pub name: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

// Un campo de hora vacío (input `type="time"` sin valor) equivale a no enviarlo.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<ClockTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw.parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// Ventana de preferencias del estudiante. Todos los campos son opcionales;
/// `earliest`/`latest` vacíos se tratan como ausentes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceConfig {
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub earliest: Option<ClockTime>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub latest: Option<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_friday: Option<bool>,
}

impl PreferenceConfig {
    pub fn earliest(&self) -> ClockTime {
        self.earliest.unwrap_or(ClockTime::MIDNIGHT)
    }

    pub fn latest(&self) -> ClockTime {
        self.latest.unwrap_or(ClockTime::LAST_MINUTE)
    }

    pub fn no_friday(&self) -> bool {
        self.no_friday.unwrap_or(false)
    }
}

/// Sección elegida dentro de un horario, anotada con el curso al que pertenece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSection {
    pub course_id: String,
    pub course_name: String,
    pub section_id: String,
    pub times: Vec<MeetingOccurrence>,
}

impl ScheduledSection {
    pub fn new(course: &Course, section: &Section) -> Self {
        ScheduledSection {
            course_id: course.course_id.clone(),
            course_name: course.name.clone(),
            section_id: section.section_id.clone(),
            times: section.times.clone(),
        }
    }
}

/// Un horario completo: exactamente una sección por curso, en el orden de entrada.
pub type Schedule = Vec<ScheduledSection>;
