use crate::error::{Result, TopologyError, UsageError};
use crate::geometry::is_cardinal;
use crate::topology::{RouteStore, WireId};

/// Validates the connectivity and orientation of a wire.
///
/// A valid wire is non-empty, each section links to its neighbors in route
/// order, each section starts where the previous one ends, and every section
/// bearing is cardinal within the configured tolerance.
pub struct IsValid {
    wire: WireId,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(wire: WireId) -> Self {
        Self { wire }
    }

    /// Executes the validation, returning `true` if the wire is valid.
    #[must_use]
    pub fn execute(&self, store: &RouteStore) -> bool {
        self.check(store).is_ok()
    }

    /// Executes the validation, reporting the first violation found.
    ///
    /// # Errors
    ///
    /// Returns the violation as an error.
    pub fn check(&self, store: &RouteStore) -> Result<()> {
        let sections = store.wire_sections(self.wire)?;
        if sections.is_empty() {
            return Err(UsageError::EmptyWire.into());
        }
        let tolerance = store.config().angle_tolerance();

        for (i, (id, section)) in sections.iter().enumerate() {
            if section.wire != self.wire {
                return Err(TopologyError::Disconnected(format!("section {i} belongs to another wire")).into());
            }
            let expected_prev = i.checked_sub(1).map(|j| sections[j].0);
            let expected_next = sections.get(i + 1).map(|(next, _)| *next);
            if section.prev != expected_prev || section.next != expected_next {
                return Err(TopologyError::Disconnected(format!("section {i} has stale neighbor links")).into());
            }
            if let Some((_, next)) = sections.get(i + 1) {
                if section.p2 != next.p1 {
                    return Err(TopologyError::Disconnected(format!(
                        "section {i} ends at {} but section {} starts at {}",
                        section.p2,
                        i + 1,
                        next.p1
                    ))
                    .into());
                }
            }
            let angle = section.angle()?;
            if !is_cardinal(angle, tolerance) {
                tracing::warn!(section = ?id, %angle, "section is off-cardinal");
                return Err(TopologyError::InvalidTopology { angle }.into());
            }
        }
        Ok(())
    }
}
