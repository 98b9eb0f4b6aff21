//! Filtro de preferencias horarias (hora más temprana, hora más tardía, sin viernes).
//!
//! La política es todo-o-nada: basta un bloque fuera de la ventana para
//! descartar la sección completa.

use crate::models::{MeetingOccurrence, PreferenceConfig, Section, Weekday};

/// True si el bloque respeta la ventana de preferencias.
pub fn occurrence_satisfies(occurrence: &MeetingOccurrence, prefs: &PreferenceConfig) -> bool {
    if prefs.no_friday() && occurrence.day == Weekday::Fri {
        return false;
    }
    if occurrence.start < prefs.earliest() {
        return false;
    }
    if occurrence.end > prefs.latest() {
        return false;
    }
    true
}

/// True si todos los bloques de la sección respetan las preferencias.
pub fn section_satisfies(section: &Section, prefs: &PreferenceConfig) -> bool {
    section.times.iter().all(|t| occurrence_satisfies(t, prefs))
}
