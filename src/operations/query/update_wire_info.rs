use rust_decimal::Decimal;

use crate::electrical::{PartCatalog, WireReport};
use crate::error::Result;
use crate::topology::{RouteStore, WireId};

/// Measures a wire's route and refreshes its electrical view.
///
/// The summed section length becomes the wire's length; the returned report
/// is what the info display shows. Nothing else is touched.
pub struct UpdateWireInfo {
    wire: WireId,
}

impl UpdateWireInfo {
    /// Creates a new `UpdateWireInfo` operation.
    #[must_use]
    pub fn new(wire: WireId) -> Self {
        Self { wire }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is missing or a derived value cannot be
    /// evaluated.
    pub fn execute(&self, store: &mut RouteStore, catalog: &dyn PartCatalog) -> Result<WireReport> {
        let mut total = Decimal::ZERO;
        for (_, section) in store.wire_sections(self.wire)? {
            total += section.length()?;
        }

        let info = &mut store.wire_mut(self.wire)?.info;
        info.set_routed_length(total);
        let report = info.report(catalog)?;
        tracing::debug!(wire = ?self.wire, length_m = %report.length_m, "updated wire info");
        Ok(report)
    }
}
