pub mod config;
pub mod notify;
pub mod section;
pub mod wire;

pub use config::RoutingConfig;
pub use notify::{PointCallback, PointChanged, SubscriptionId};
pub use section::{End, SectionData, SectionId};
pub use wire::{WireData, WireId};

use slotmap::SlotMap;

use crate::error::{Result, TopologyError};
use crate::geometry::Point;

use notify::Notifier;

/// Central arena that owns all wires and their sections.
///
/// Sections reference their wire and neighbors via typed IDs (generational
/// indices), so a move can find the adjacent sections directly instead of
/// scanning for matching coordinates. Endpoint mutations go through the
/// store so subscribers are notified.
#[derive(Debug, Default)]
pub struct RouteStore {
    config: RoutingConfig,
    wires: SlotMap<WireId, WireData>,
    sections: SlotMap<SectionId, SectionData>,
    active: Option<WireId>,
    notifier: Notifier,
}

impl RouteStore {
    /// Creates a new, empty store with default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty store with the given tolerances.
    #[must_use]
    pub fn with_config(config: RoutingConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the routing tolerances.
    #[must_use]
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    // --- Wire operations ---

    /// Inserts a wire and returns its ID.
    pub fn add_wire(&mut self, data: WireData) -> WireId {
        self.wires.insert(data)
    }

    /// Returns a reference to the wire data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wire(&self, id: WireId) -> Result<&WireData> {
        self.wires
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wire".into()).into())
    }

    /// Returns a mutable reference to the wire data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wire_mut(&mut self, id: WireId) -> Result<&mut WireData> {
        self.wires
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wire".into()).into())
    }

    /// Iterates over all wires.
    pub fn wires(&self) -> impl Iterator<Item = (WireId, &WireData)> {
        self.wires.iter()
    }

    /// Returns the number of wires.
    #[must_use]
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Removes a wire and all of its sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found in the store.
    pub fn remove_wire(&mut self, id: WireId) -> Result<WireData> {
        let data = self
            .wires
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wire".into()))?;
        for section in &data.sections {
            self.sections.remove(*section);
            self.notifier.forget_section(*section);
        }
        if self.active == Some(id) {
            self.active = None;
        }
        Ok(data)
    }

    /// Returns the wire currently being extended, if any.
    #[must_use]
    pub fn active_wire(&self) -> Option<WireId> {
        self.active
    }

    pub(crate) fn set_active(&mut self, wire: Option<WireId>) {
        self.active = wire;
    }

    // --- Section operations ---

    /// Returns a reference to the section data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn section(&self, id: SectionId) -> Result<&SectionData> {
        self.sections
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("section".into()).into())
    }

    /// Returns the sections of a wire in route order.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire or one of its sections is missing.
    pub fn wire_sections(&self, wire: WireId) -> Result<Vec<(SectionId, &SectionData)>> {
        self.wire(wire)?
            .sections
            .iter()
            .map(|id| Ok((*id, self.section(*id)?)))
            .collect()
    }

    /// Appends a section to the end of a wire and links it to the old tail.
    pub(crate) fn push_section(&mut self, wire: WireId, p1: Point, p2: Point) -> Result<SectionId> {
        let tail = self.wire(wire)?.tail();
        let mut data = SectionData::new(wire, p1, p2);
        data.prev = tail;
        let id = self.sections.insert(data);
        if let Some(tail) = tail {
            if let Some(prev) = self.sections.get_mut(tail) {
                prev.next = Some(id);
            }
        }
        self.wire_mut(wire)?.sections.push(id);
        Ok(id)
    }

    /// Removes the last section of a wire and unlinks it.
    pub(crate) fn pop_section(&mut self, wire: WireId) -> Result<Option<SectionData>> {
        let Some(id) = self.wire_mut(wire)?.sections.pop() else {
            return Ok(None);
        };
        let data = self
            .sections
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("section".into()))?;
        if let Some(prev) = data.prev.and_then(|prev| self.sections.get_mut(prev)) {
            prev.next = None;
        }
        self.notifier.forget_section(id);
        Ok(Some(data))
    }

    /// Moves one endpoint of a section and notifies subscribers.
    pub(crate) fn set_endpoint(&mut self, id: SectionId, end: End, point: Point) -> Result<()> {
        let section = self
            .sections
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("section".into()))?;
        let slot = match end {
            End::P1 => &mut section.p1,
            End::P2 => &mut section.p2,
        };
        if *slot == point {
            return Ok(());
        }
        let old = std::mem::replace(slot, point);
        self.notifier.emit(&PointChanged {
            section: id,
            end,
            old,
            new: point,
        });
        Ok(())
    }

    // --- Change notification ---

    /// Registers a callback for changes to one endpoint of a section.
    ///
    /// Callbacks run synchronously, in subscription order, whenever an edit
    /// moves that endpoint. They are dropped with the section.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is not found in the store.
    pub fn subscribe(
        &mut self,
        section: SectionId,
        end: End,
        callback: PointCallback,
    ) -> Result<SubscriptionId> {
        self.section(section)?;
        Ok(self.notifier.subscribe(section, end, callback))
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.notifier.len()
    }
}
