use crate::error::{Result, UsageError};
use crate::topology::{RouteStore, SectionData, WireId};

/// Result of [`RemoveLastSection`].
#[derive(Debug, Clone)]
pub struct RemovedSection {
    /// The removed section.
    pub section: SectionData,
    /// `true` if the wire became empty and was discarded from the store.
    pub wire_removed: bool,
}

/// Pops the tail section of a wire, discarding the wire once it is empty.
pub struct RemoveLastSection {
    wire: WireId,
}

impl RemoveLastSection {
    /// Creates a new `RemoveLastSection` operation.
    #[must_use]
    pub fn new(wire: WireId) -> Self {
        Self { wire }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found or has no sections.
    pub fn execute(&self, store: &mut RouteStore) -> Result<RemovedSection> {
        let section = store
            .pop_section(self.wire)?
            .ok_or(UsageError::EmptyWire)?;

        let wire_removed = store.wire(self.wire)?.is_empty();
        if wire_removed {
            store.remove_wire(self.wire)?;
        }
        tracing::debug!(wire = ?self.wire, wire_removed, "removed last section");
        Ok(RemovedSection {
            section,
            wire_removed,
        })
    }
}
