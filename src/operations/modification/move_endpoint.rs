use crate::error::{Result, TopologyError};
use crate::geometry::{is_cardinal, snap_to_cardinal, Line, Point};
use crate::topology::{End, RouteStore, SectionId};

/// Drags the far end (`p2`) of a section towards a point.
///
/// The raw bearing `p1 -> to` is bucketed to a cardinal direction and the
/// raw distance is projected along it, so the section stays axis-aligned.
/// A following section shares the moved vertex; if that would leave it
/// off-cardinal the move is rejected.
pub struct MoveEndpoint {
    section: SectionId,
    to: Point,
}

impl MoveEndpoint {
    /// Creates a new `MoveEndpoint` operation.
    #[must_use]
    pub fn new(section: SectionId, to: Point) -> Self {
        Self { section, to }
    }

    /// Executes the operation, returning the new `p2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is not found, or
    /// [`TopologyError::InvalidTopology`] if the following section would no
    /// longer be cardinal. Geometry is unchanged on error.
    pub fn execute(&self, store: &mut RouteStore) -> Result<Point> {
        let section = store.section(self.section)?;
        let p2 = snap_to_cardinal(section.p1, self.to)?;
        let next = section.next;

        if let Some(next) = next {
            let far = store.section(next)?.p2;
            let angle = Line::new(p2, far).angle()?;
            if !is_cardinal(angle, store.config().angle_tolerance()) {
                tracing::warn!(section = ?next, %angle, "rejected endpoint move: following section off-cardinal");
                return Err(TopologyError::InvalidTopology { angle }.into());
            }
        }

        store.set_endpoint(self.section, End::P2, p2)?;
        if let Some(next) = next {
            store.set_endpoint(next, End::P1, p2)?;
        }
        Ok(p2)
    }
}
