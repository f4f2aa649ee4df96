use crate::error::Result;
use crate::geometry::Point;
use crate::topology::{End, RouteStore, SectionId, WireId};

/// Finds the first section endpoint of a wire inside the square grab region
/// around a point.
pub struct EndpointGrab {
    wire: WireId,
    point: Point,
}

impl EndpointGrab {
    /// Creates a new `EndpointGrab` query.
    #[must_use]
    pub fn new(wire: WireId, point: Point) -> Self {
        Self { wire, point }
    }

    /// Executes the query. Sections are checked in route order, `p1` before `p2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found in the store.
    pub fn execute(&self, store: &RouteStore) -> Result<Option<(SectionId, End)>> {
        let tolerance = store.config().grab_tolerance();
        let hit = store
            .wire_sections(self.wire)?
            .into_iter()
            .find_map(|(id, section)| {
                if section.is_p1_grabbed(self.point, tolerance) {
                    Some((id, End::P1))
                } else if section.is_p2_grabbed(self.point, tolerance) {
                    Some((id, End::P2))
                } else {
                    None
                }
            });
        Ok(hit)
    }
}
