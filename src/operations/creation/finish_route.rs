use crate::error::Result;
use crate::topology::{RouteStore, WireId};

/// Stops extending a wire. Its tail end is no longer moved by the pointer.
pub struct FinishRoute {
    wire: WireId,
}

impl FinishRoute {
    /// Creates a new `FinishRoute` operation.
    #[must_use]
    pub fn new(wire: WireId) -> Self {
        Self { wire }
    }

    /// Executes the operation. Finishing a wire that is not active is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found in the store.
    pub fn execute(&self, store: &mut RouteStore) -> Result<()> {
        store.wire(self.wire)?;
        if store.active_wire() == Some(self.wire) {
            store.set_active(None);
            tracing::debug!(wire = ?self.wire, "finished route");
        }
        Ok(())
    }
}
