// src/modules/portfolio/domain/section_store.rs
//
// Pure operations over an ordered section list. Every function returns a
// new list and never fails; unknown ids and out-of-range indices are no-ops.

use std::collections::HashSet;

use super::section::{Section, SectionContent, SectionId, SectionType};

pub fn create_section(section_type: SectionType) -> Section {
    Section {
        id: SectionId::new(),
        title: section_type.default_title().to_string(),
        content: SectionContent::default_for(section_type),
        visible: true,
    }
}

pub fn remove_section(sections: &[Section], id: SectionId) -> Vec<Section> {
    sections.iter().filter(|s| s.id != id).cloned().collect()
}

pub fn toggle_visibility(sections: &[Section], id: SectionId) -> Vec<Section> {
    map_matching(sections, id, |s| s.visible = !s.visible)
}

/// Removes the entry at `from` and inserts it at `to`.
pub fn reorder(sections: &[Section], from: usize, to: usize) -> Vec<Section> {
    let mut next = sections.to_vec();

    if from >= next.len() || to >= next.len() {
        return next;
    }

    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

pub fn update_content(sections: &[Section], id: SectionId, content: SectionContent) -> Vec<Section> {
    map_matching(sections, id, |s| s.content = content.clone())
}

/// Switching type discards the old content.
pub fn change_type(sections: &[Section], id: SectionId, section_type: SectionType) -> Vec<Section> {
    map_matching(sections, id, |s| {
        if s.section_type() != section_type {
            s.content = SectionContent::default_for(section_type);
        }
    })
}

pub fn rename_section(sections: &[Section], id: SectionId, title: &str) -> Vec<Section> {
    map_matching(sections, id, |s| s.title = title.to_string())
}

pub fn move_up(sections: &[Section], id: SectionId) -> Vec<Section> {
    match position_of(sections, id) {
        Some(index) if index > 0 => reorder(sections, index, index - 1),
        _ => sections.to_vec(),
    }
}

pub fn move_down(sections: &[Section], id: SectionId) -> Vec<Section> {
    match position_of(sections, id) {
        Some(index) => reorder(sections, index, index + 1),
        None => sections.to_vec(),
    }
}

pub fn position_of(sections: &[Section], id: SectionId) -> Option<usize> {
    sections.iter().position(|s| s.id == id)
}

/// First id that appears more than once, if any.
pub fn first_duplicate(sections: &[Section]) -> Option<SectionId> {
    let mut seen = HashSet::with_capacity(sections.len());
    sections.iter().map(|s| s.id).find(|id| !seen.insert(*id))
}

fn map_matching<F>(sections: &[Section], id: SectionId, mut apply: F) -> Vec<Section>
where
    F: FnMut(&mut Section),
{
    sections
        .iter()
        .cloned()
        .map(|mut s| {
            if s.id == id {
                apply(&mut s);
            }
            s
        })
        .collect()
}
