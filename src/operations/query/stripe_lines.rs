use crate::error::Result;
use crate::math::Point2;
use crate::topology::{RouteStore, SectionId};

/// Generates the stripe tick marks of one section for two-tone drawing.
pub struct StripeLines {
    section: SectionId,
}

impl StripeLines {
    /// Creates a new `StripeLines` query.
    #[must_use]
    pub fn new(section: SectionId) -> Self {
        Self { section }
    }

    /// Executes the query, returning each tick as its two end points.
    ///
    /// # Errors
    ///
    /// Returns an error if the section or its wire is missing, or the wire's
    /// gauge has no stroke width.
    pub fn execute(&self, store: &RouteStore) -> Result<Vec<[Point2; 2]>> {
        let section = store.section(self.section)?;
        let width = store.wire(section.wire)?.info.pixel_width()?;
        section.stripe_lines(store.config().stripe_step(), width)
    }
}
