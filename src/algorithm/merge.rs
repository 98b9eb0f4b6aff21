use std::collections::{HashMap, HashSet};

use crate::models::Course;

/// Une cursos nuevos (p.ej. importados desde otra fuente) con la lista existente.
///
/// Se indexa por `course_id`: los cursos que no existían se agregan al final en
/// el orden recibido; para uno ya presente se agregan sólo las secciones cuyo
/// `section_id` aún no aparece. El nombre y las secciones existentes se conservan.
pub fn merge_courses(existing: Vec<Course>, incoming: Vec<Course>) -> Vec<Course> {
    let mut merged: Vec<Course> = Vec::with_capacity(existing.len() + incoming.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut seen: Vec<HashSet<String>> = Vec::new();

    for course in existing.into_iter().chain(incoming) {
        match index.get(&course.course_id).copied() {
            Some(pos) => {
                for section in course.sections {
                    if seen[pos].insert(section.section_id.clone()) {
                        merged[pos].sections.push(section);
                    }
                }
            }
            None => {
                let mut ids = HashSet::new();
                let mut sections = Vec::with_capacity(course.sections.len());
                for section in course.sections {
                    if ids.insert(section.section_id.clone()) {
                        sections.push(section);
                    }
                }
                index.insert(course.course_id.clone(), merged.len());
                seen.push(ids);
                merged.push(Course { sections, ..course });
            }
        }
    }

    merged
}
