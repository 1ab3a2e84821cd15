//! Farrowcam - Farrowing house camera monitoring core
//!
//! Fleet status and notification aggregation model for a piglet birth
//! monitoring dashboard. Presentation shells consume this crate
//! in-process; it holds no video pipeline and no network code.
//!
//! ## Architecture (8 Components)
//!
//! 1. CameraRegistry - Camera roster and health status
//! 2. ConnectionMonitor - Link quality model
//! 3. EventLedger - Pen event recording (ring buffer)
//! 4. NotificationFeed - Curated severity-tagged notices
//! 5. LiveSessionController - Enlarged live view state
//! 6. FleetSummary - Derived fleet-wide counts
//! 7. MonitorSettings - Detection and alerting preferences
//! 8. AppState - Component wiring and shared state
//!
//! ## Design Principles
//!
//! - Collections are injected at construction, never global
//! - Status fields are explicit enums, never derived from display text
//! - Derived views recompute on read; nothing aggregates incrementally

pub mod camera_registry;
pub mod connection_monitor;
pub mod event_ledger;
pub mod notification_feed;
pub mod live_session;
pub mod fleet_summary;
pub mod settings;
pub mod seed;
pub mod error;
pub mod state;

pub use error::{Error, Result};
pub use state::AppState;
