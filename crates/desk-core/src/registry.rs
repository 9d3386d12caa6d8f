//! Static mapping from focus ids to camera framings and section content.

use crate::constants::{DEFAULT_EYE, DEFAULT_LOOK_AT};
use crate::error::SceneError;
use fnv::FnvHashMap;
use glam::Vec3;

/// Camera eye/look-at pair that frames one subject.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusTarget {
    pub eye: Vec3,
    pub look_at: Vec3,
}

impl FocusTarget {
    pub const fn new(eye: Vec3, look_at: Vec3) -> Self {
        Self { eye, look_at }
    }
}

impl Default for FocusTarget {
    fn default() -> Self {
        Self::new(DEFAULT_EYE, DEFAULT_LOOK_AT)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionContent {
    pub title: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Debug)]
pub struct FocusEntry {
    pub id: String,
    pub target: FocusTarget,
    pub content: SectionContent,
}

/// Read-only after construction. Entries keep their registration order so
/// that keyboard shortcuts and navigation menus are stable.
#[derive(Clone, Debug, Default)]
pub struct FocusRegistry {
    default_view: FocusTarget,
    entries: Vec<FocusEntry>,
    index: FnvHashMap<String, usize>,
}

impl FocusRegistry {
    pub fn new(default_view: FocusTarget) -> Self {
        Self {
            default_view,
            entries: Vec::new(),
            index: FnvHashMap::default(),
        }
    }

    /// Builder-style registration used while assembling the catalog.
    pub fn register(
        &mut self,
        id: &str,
        target: FocusTarget,
        content: SectionContent,
    ) -> Result<(), SceneError> {
        if self.index.contains_key(id) {
            return Err(SceneError::DuplicateSubject(id.to_string()));
        }
        self.index.insert(id.to_string(), self.entries.len());
        self.entries.push(FocusEntry {
            id: id.to_string(),
            target,
            content,
        });
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Result<&FocusTarget, SceneError> {
        self.entry(id).map(|e| &e.target)
    }

    pub fn entry(&self, id: &str) -> Result<&FocusEntry, SceneError> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| SceneError::UnknownSubject(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn default_view(&self) -> FocusTarget {
        self.default_view
    }

    /// Entry at a registration position (0-based).
    pub fn nth(&self, n: usize) -> Option<&FocusEntry> {
        self.entries.get(n)
    }

    pub fn entries(&self) -> &[FocusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
