use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ViewError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    pub anchor_offset: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>, anchor_offset: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            anchor_offset,
        }
    }
}

/// Ordered, read-only list of the page sections the navigation tracks.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, ViewError> {
        if sections.is_empty() {
            return Err(ViewError::EmptyRegistry);
        }
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ViewError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    pub fn first(&self) -> &Section {
        // non-empty is checked in `new`
        &self.sections[0]
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn index_of(&self, id: &str) -> Result<usize, ViewError> {
        self.sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ViewError::UnknownSection(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Picks the section the navigation highlights for a scroll offset: the last
/// section (in registry order) whose anchor, pulled up by `lead_margin`, is at
/// or above the offset. Falls back to the first section.
pub fn resolve_active(registry: &SectionRegistry, offset: f64, lead_margin: f64) -> &Section {
    registry
        .iter()
        .fold(registry.first(), |current, section| {
            if section.anchor_offset - lead_margin <= offset {
                section
            } else {
                current
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page() -> SectionRegistry {
        SectionRegistry::new(vec![
            Section::new("home", "Home", 0.0),
            Section::new("about", "About", 800.0),
            Section::new("skills", "Skills", 1600.0),
            Section::new("projects", "Projects", 2600.0),
            Section::new("contact", "Contact", 4000.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_registry_validation() {
        assert_eq!(SectionRegistry::new(vec![]).unwrap_err(), ViewError::EmptyRegistry);
        let dup = SectionRegistry::new(vec![
            Section::new("home", "Home", 0.0),
            Section::new("home", "Again", 10.0),
        ]);
        assert_eq!(dup.unwrap_err(), ViewError::DuplicateSection("home".to_string()));
    }

    #[test]
    fn test_registry_lookup() {
        let reg = page();
        assert_eq!(reg.len(), 5);
        assert_eq!(reg.first().id, "home");
        assert_eq!(reg.get("skills").map(|s| s.label.as_str()), Some("Skills"));
        assert!(reg.get("blog").is_none());
        assert_eq!(reg.index_of("projects"), Ok(3));
        assert_eq!(
            reg.index_of("blog"),
            Err(ViewError::UnknownSection("blog".to_string()))
        );
        let ids = reg.iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "about", "skills", "projects", "contact"]);
    }

    #[test]
    fn test_resolve_uses_lead_margin() {
        let reg = page();
        assert_eq!(resolve_active(&reg, 0.0, 150.0).id, "home");
        assert_eq!(resolve_active(&reg, 649.0, 150.0).id, "home");
        assert_eq!(resolve_active(&reg, 650.0, 150.0).id, "about");
        assert_eq!(resolve_active(&reg, 1500.0, 150.0).id, "skills");
        assert_eq!(resolve_active(&reg, 99_999.0, 150.0).id, "contact");
    }

    #[test]
    fn test_resolve_defaults_to_first() {
        let reg = SectionRegistry::new(vec![
            Section::new("hero", "Hero", 500.0),
            Section::new("about", "About", 900.0),
        ])
        .unwrap();
        assert_eq!(resolve_active(&reg, 0.0, 150.0).id, "hero");
    }

    #[test]
    fn test_equal_offsets_later_section_wins() {
        let reg = SectionRegistry::new(vec![
            Section::new("home", "Home", 0.0),
            Section::new("a", "A", 1000.0),
            Section::new("b", "B", 1000.0),
        ])
        .unwrap();
        assert_eq!(resolve_active(&reg, 850.0, 150.0).id, "b");
    }

    proptest! {
        #[test]
        fn prop_active_section_never_regresses(
            mut anchors in prop::collection::vec(0.0f64..10_000.0, 1..12),
            a in 0.0f64..12_000.0,
            b in 0.0f64..12_000.0,
        ) {
            anchors.sort_by(|x, y| x.partial_cmp(y).unwrap());
            let sections = anchors
                .iter()
                .enumerate()
                .map(|(i, off)| Section::new(format!("s{i}"), format!("S{i}"), *off))
                .collect();
            let reg = SectionRegistry::new(sections).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_idx = reg.index_of(&resolve_active(&reg, lo, 150.0).id).unwrap();
            let hi_idx = reg.index_of(&resolve_active(&reg, hi, 150.0).id).unwrap();
            prop_assert!(lo_idx <= hi_idx);
        }
    }
}
