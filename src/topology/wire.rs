use crate::electrical::WireInfo;

use super::section::SectionId;

slotmap::new_key_type! {
    /// Unique identifier for a wire in the route store.
    pub struct WireId;
}

/// Data associated with a routed wire.
///
/// A wire is an ordered chain of sections forming one connected,
/// axis-aligned polyline, plus the electrical view of the physical wire.
#[derive(Debug, Clone)]
pub struct WireData {
    /// Sections in route order. Only the store edits this, keeping the
    /// sections' `prev`/`next` links in step.
    pub(crate) sections: Vec<SectionId>,
    /// Electrical properties of the wire.
    pub info: WireInfo,
    selected: bool,
}

impl WireData {
    /// Creates an empty, unselected wire.
    #[must_use]
    pub fn new(info: WireInfo) -> Self {
        Self {
            sections: Vec::new(),
            info,
            selected: false,
        }
    }

    /// Returns whether the wire is selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Returns the section ids in route order.
    #[must_use]
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the wire has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the last section, if any.
    #[must_use]
    pub fn tail(&self) -> Option<SectionId> {
        self.sections.last().copied()
    }
}
