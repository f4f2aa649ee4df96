use crate::error::{Result, UsageError};
use crate::geometry::{snap_to_cardinal, Point};
use crate::topology::{RouteStore, SectionId, WireId};

/// Appends a section to a wire and makes the wire the actively extending one.
///
/// The new section starts at the current tail end. Its far end is `to`
/// pinned to the nearest cardinal ray, as [`MoveEndpoint`](super::MoveEndpoint)
/// would place it. On an empty wire the section is zero-length at `to`.
pub struct NewSection {
    wire: WireId,
    to: Point,
}

impl NewSection {
    /// Creates a new `NewSection` operation.
    #[must_use]
    pub fn new(wire: WireId, to: Point) -> Self {
        Self { wire, to }
    }

    /// Executes the operation, returning the new section.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found, or
    /// [`UsageError::RouteInProgress`] if a different wire is being extended.
    pub fn execute(&self, store: &mut RouteStore) -> Result<SectionId> {
        let tail = store.wire(self.wire)?.tail();
        if store.active_wire().is_some_and(|active| active != self.wire) {
            return Err(UsageError::RouteInProgress.into());
        }

        let (p1, p2) = match tail {
            Some(tail) => {
                let start = store.section(tail)?.p2;
                (start, snap_to_cardinal(start, self.to)?)
            }
            None => (self.to, self.to),
        };

        let id = store.push_section(self.wire, p1, p2)?;
        store.set_active(Some(self.wire));
        tracing::debug!(wire = ?self.wire, section = ?id, %p1, %p2, "appended section");
        Ok(id)
    }
}
