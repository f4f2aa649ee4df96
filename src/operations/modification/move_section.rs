use crate::error::{Result, TopologyError};
use crate::geometry::{is_cardinal, snap_to_cardinal, Line, Point};
use crate::topology::{End, RouteStore, SectionId};

/// Translates a section by a delta, dragging its neighbors along.
///
/// After translating both ends, each shared vertex is re-resolved against
/// the neighbor's fixed far end: the bearing from that far end to the moved
/// vertex is snapped to a cardinal direction with its raw length kept. The
/// moved section must then still be within the configured tolerance of a
/// cardinal bearing, otherwise nothing changes and the move is reported as
/// [`TopologyError::InvalidTopology`].
pub struct MoveSection {
    section: SectionId,
    delta: Point,
}

impl MoveSection {
    /// Creates a new `MoveSection` operation.
    #[must_use]
    pub fn new(section: SectionId, delta: Point) -> Self {
        Self { section, delta }
    }

    /// Executes the move.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is not found, or
    /// [`TopologyError::InvalidTopology`] if the result would not be cardinal.
    pub fn execute(&self, store: &mut RouteStore) -> Result<()> {
        let section = store.section(self.section)?;
        let (prev, next) = (section.prev, section.next);
        let mut p1 = section.p1 + self.delta;
        let mut p2 = section.p2 + self.delta;

        if let Some(prev) = prev {
            let anchor = store.section(prev)?.p1;
            p1 = snap_to_cardinal(anchor, p1)?;
        }
        if let Some(next) = next {
            let anchor = store.section(next)?.p2;
            p2 = snap_to_cardinal(anchor, p2)?;
        }

        let angle = Line::new(p1, p2).angle()?;
        if !is_cardinal(angle, store.config().angle_tolerance()) {
            tracing::warn!(section = ?self.section, %angle, "rejected section move: result off-cardinal");
            return Err(TopologyError::InvalidTopology { angle }.into());
        }

        store.set_endpoint(self.section, End::P1, p1)?;
        store.set_endpoint(self.section, End::P2, p2)?;
        if let Some(prev) = prev {
            store.set_endpoint(prev, End::P2, p1)?;
        }
        if let Some(next) = next {
            store.set_endpoint(next, End::P1, p2)?;
        }
        tracing::debug!(section = ?self.section, %p1, %p2, "moved section");
        Ok(())
    }
}
