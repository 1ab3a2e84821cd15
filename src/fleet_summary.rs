//! FleetSummary - Derived fleet-wide counts
//!
//! Recomputed from current component state on every read; nothing here
//! is cached or updated incrementally.

use serde::{Deserialize, Serialize};

use crate::camera_registry::{CameraRegistry, StatusCounts};
use crate::connection_monitor::{ConnectionMonitor, ConnectionSummary};
use crate::event_ledger::{EventKindCounts, EventLedger};

/// Aggregate snapshot of the whole fleet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_cameras: usize,
    pub status: StatusCounts,
    pub connectivity: ConnectionSummary,
    pub total_events: usize,
    pub event_kinds: EventKindCounts,
    pub piglets_born: u32,
}

impl FleetSummary {
    /// Recompute the summary from current component state
    pub fn compute(
        registry: &CameraRegistry,
        connections: &ConnectionMonitor,
        events: &EventLedger,
    ) -> Self {
        Self {
            total_cameras: registry.len(),
            status: registry.status_counts(),
            connectivity: connections.summarize(),
            total_events: events.total_count(),
            event_kinds: events.kind_counts(),
            piglets_born: events.piglets_born(),
        }
    }
}
