// Módulo de alto nivel del motor de combinaciones.
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod conflict;
pub mod filters;
pub mod merge;
pub mod section_selector;

// Reexportar la API pública del motor
pub use conflict::{occurrences_conflict, section_conflicts_with, times_conflict};
pub use filters::{occurrence_satisfies, section_satisfies};
pub use merge::merge_courses;
pub use section_selector::{search, search_with_limits, SearchLimits, SearchOutcome, Truncation};
