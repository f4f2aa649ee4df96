use crate::error::Result;
use crate::geometry::Point;
use crate::topology::{RouteStore, SectionId, WireId};

/// Finds the first section of a wire, in route order, whose hit band
/// contains a point.
pub struct SectionAt {
    wire: WireId,
    point: Point,
}

impl SectionAt {
    /// Creates a new `SectionAt` query.
    #[must_use]
    pub fn new(wire: WireId, point: Point) -> Self {
        Self { wire, point }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found or its gauge has no stroke
    /// width.
    pub fn execute(&self, store: &RouteStore) -> Result<Option<SectionId>> {
        let width = store.wire(self.wire)?.info.pixel_width()?;
        let margin = store.config().hit_margin();
        for (id, section) in store.wire_sections(self.wire)? {
            if section.contains(self.point, width, margin)? {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }
}
