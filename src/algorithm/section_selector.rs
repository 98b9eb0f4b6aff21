use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithm::conflict::section_conflicts_with;
use crate::algorithm::filters::section_satisfies;
use crate::models::{Course, PreferenceConfig, Schedule, ScheduledSection};

/// Techos opcionales para acotar la búsqueda. `None` = sin límite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Máximo de horarios a devolver.
    pub max_results: Option<usize>,
    /// Máximo de secciones candidatas a examinar.
    pub max_nodes: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        SearchLimits::default()
    }
}

/// Motivo por el que una búsqueda se detuvo antes de recorrer todo el árbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Truncation {
    MaxResults,
    MaxNodes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub schedules: Vec<Schedule>,
    /// `Some` si se alcanzó un techo; `schedules` es entonces un prefijo del
    /// resultado completo.
    pub truncated: Option<Truncation>,
}

/// Enumera todos los horarios válidos: una sección por curso, sin choques y
/// respetando las preferencias.
///
/// El orden de salida es el recorrido en profundidad (pre-orden) del árbol de
/// elecciones, siguiendo el orden de cursos y secciones de la entrada. Un
/// curso sin secciones produce un resultado vacío.
pub fn search(courses: &[Course], prefs: &PreferenceConfig) -> Vec<Schedule> {
    search_with_limits(courses, prefs, SearchLimits::unbounded()).schedules
}

/// Igual que [`search`] pero deteniéndose al alcanzar alguno de los techos.
pub fn search_with_limits(
    courses: &[Course],
    prefs: &PreferenceConfig,
    limits: SearchLimits,
) -> SearchOutcome {
    let mut search = Backtracker {
        courses,
        prefs,
        limits,
        nodes: 0,
        current: Vec::with_capacity(courses.len()),
        schedules: Vec::new(),
    };

    let truncated = match search.backtrack(0) {
        ControlFlow::Continue(()) => None,
        ControlFlow::Break(reason) => Some(reason),
    };

    debug!(
        courses = courses.len(),
        nodes = search.nodes,
        schedules = search.schedules.len(),
        ?truncated,
        "search finished"
    );

    SearchOutcome { schedules: search.schedules, truncated }
}

// Estado de una invocación. El buffer `current` es local a cada llamada.
struct Backtracker<'a> {
    courses: &'a [Course],
    prefs: &'a PreferenceConfig,
    limits: SearchLimits,
    nodes: usize,
    current: Vec<ScheduledSection>,
    schedules: Vec<Schedule>,
}

impl Backtracker<'_> {
    fn backtrack(&mut self, idx: usize) -> ControlFlow<Truncation> {
        let courses = self.courses;
        if idx == courses.len() {
            if self.limits.max_results.is_some_and(|max| self.schedules.len() >= max) {
                return ControlFlow::Break(Truncation::MaxResults);
            }
            self.schedules.push(self.current.clone());
            return ControlFlow::Continue(());
        }

        let course = &courses[idx];
        for section in &course.sections {
            self.nodes += 1;
            if self.limits.max_nodes.is_some_and(|max| self.nodes > max) {
                return ControlFlow::Break(Truncation::MaxNodes);
            }
            if !section_satisfies(section, self.prefs) {
                continue;
            }
            if section_conflicts_with(section, &self.current) {
                continue;
            }

            self.current.push(ScheduledSection::new(course, section));
            let flow = self.backtrack(idx + 1);
            self.current.pop();
            if flow.is_break() {
                return flow;
            }
        }
        ControlFlow::Continue(())
    }
}
