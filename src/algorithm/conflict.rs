// Detección de conflictos entre bloques horarios.
use crate::models::{MeetingOccurrence, ScheduledSection, Section};

/// True si ambos bloques caen el mismo día y sus intervalos `[start, end)` se solapan.
/// Un bloque que termina justo cuando empieza otro no es conflicto.
pub fn occurrences_conflict(a: &MeetingOccurrence, b: &MeetingOccurrence) -> bool {
    if a.day != b.day {
        return false;
    }
    !(a.end <= b.start || b.end <= a.start)
}

/// True si algún bloque de `times1` choca con alguno de `times2`.
pub fn times_conflict(times1: &[MeetingOccurrence], times2: &[MeetingOccurrence]) -> bool {
    times1.iter().any(|t1| times2.iter().any(|t2| occurrences_conflict(t1, t2)))
}

/// True si la sección choca con cualquiera de las ya elegidas. Corta en el
/// primer par conflictivo.
pub fn section_conflicts_with(section: &Section, chosen: &[ScheduledSection]) -> bool {
    chosen.iter().any(|existing| times_conflict(&section.times, &existing.times))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday::*;

    fn occ(day: crate::models::Weekday, start: &str, end: &str) -> MeetingOccurrence {
        MeetingOccurrence::parse(day, start, end).unwrap()
    }

    #[test]
    fn test_limite_semiabierto() {
        assert!(!occurrences_conflict(&occ(Mon, "09:00", "10:00"), &occ(Mon, "10:00", "11:00")));
        assert!(occurrences_conflict(&occ(Mon, "09:00", "10:00"), &occ(Mon, "09:30", "10:30")));
    }

    #[test]
    fn test_dias_distintos() {
        assert!(!occurrences_conflict(&occ(Mon, "09:00", "10:00"), &occ(Tue, "09:00", "10:00")));
    }

    #[test]
    fn test_contenido_y_etiqueta_ignorada() {
        let outer = occ(Wed, "08:00", "12:00").with_label("LEC 001");
        let inner = occ(Wed, "09:00", "09:30").with_label("DIS 302");
        assert!(occurrences_conflict(&outer, &inner));
        assert!(occurrences_conflict(&inner, &outer));
    }
}
