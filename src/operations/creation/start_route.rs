use crate::electrical::WireInfo;
use crate::error::{Result, UsageError};
use crate::geometry::Point;
use crate::operations::modification::NewSection;
use crate::topology::{RouteStore, SectionId, WireData, WireId};

/// Ids created by [`StartRoute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartedRoute {
    pub wire: WireId,
    /// The zero-length first section, whose far end follows the pointer.
    pub section: SectionId,
}

/// Creates a wire with a single zero-length section at a point and makes it
/// the actively extending wire.
pub struct StartRoute {
    info: WireInfo,
    at: Point,
}

impl StartRoute {
    /// Creates a new `StartRoute` operation.
    #[must_use]
    pub fn new(info: WireInfo, at: Point) -> Self {
        Self { info, at }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::RouteInProgress`] if another wire is still being
    /// extended.
    pub fn execute(self, store: &mut RouteStore) -> Result<StartedRoute> {
        if store.active_wire().is_some() {
            return Err(UsageError::RouteInProgress.into());
        }
        let wire = store.add_wire(WireData::new(self.info));
        let section = NewSection::new(wire, self.at).execute(store)?;
        tracing::debug!(?wire, at = %self.at, "started route");
        Ok(StartedRoute { wire, section })
    }
}
