//! Application state
//!
//! Holds all shared components and state

use crate::camera_registry::{Camera, CameraRegistry};
use crate::connection_monitor::{ConnectionMonitor, ConnectionSample, NetworkInfo};
use crate::error::Result;
use crate::event_ledger::EventLedger;
use crate::fleet_summary::FleetSummary;
use crate::live_session::LiveSessionController;
use crate::notification_feed::{Notification, NotificationFeed};
use crate::settings::MonitorSettings;
use std::sync::{Arc, RwLock};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Event ring buffer capacity
    pub event_capacity: usize,
    /// Event count for recent-activity queries
    pub recent_events_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            event_capacity: std::env::var("FARROWCAM_EVENT_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            recent_events_limit: std::env::var("FARROWCAM_RECENT_EVENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        }
    }
}

/// Application state shared across consumers
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Camera roster (immutable after load)
    pub registry: Arc<CameraRegistry>,
    /// Link quality model
    pub connections: Arc<ConnectionMonitor>,
    /// Pen event ring buffer
    pub events: Arc<EventLedger>,
    /// Curated notification list
    pub notifications: Arc<NotificationFeed>,
    /// Enlarged live view state
    pub live: Arc<LiveSessionController>,
    /// Detection / alerting preferences
    pub settings: Arc<RwLock<MonitorSettings>>,
}

impl AppState {
    /// Wire all components from seeded collections
    ///
    /// Every load-time integrity check runs here, through the component
    /// constructors. The first failure aborts the load.
    pub fn new(
        config: AppConfig,
        cameras: Vec<Camera>,
        samples: Vec<ConnectionSample>,
        network: NetworkInfo,
        notifications: Vec<Notification>,
    ) -> Result<Self> {
        let registry = Arc::new(CameraRegistry::new(cameras)?);
        let connections = Arc::new(ConnectionMonitor::new(&registry, samples, network)?);
        let events = Arc::new(EventLedger::new(registry.clone(), config.event_capacity));
        let notifications = Arc::new(NotificationFeed::new(&registry, notifications)?);
        let live = Arc::new(LiveSessionController::new(registry.clone()));

        tracing::info!(
            camera_count = registry.len(),
            notification_count = notifications.len(),
            event_capacity = config.event_capacity,
            "Application state initialized"
        );

        Ok(Self {
            config,
            registry,
            connections,
            events,
            notifications,
            live,
            settings: Arc::new(RwLock::new(MonitorSettings::default())),
        })
    }

    /// Recompute the fleet-wide summary from current state
    pub fn fleet_summary(&self) -> FleetSummary {
        FleetSummary::compute(&self.registry, &self.connections, &self.events)
    }

    /// Replace the detection / alerting preferences
    ///
    /// Out-of-range fields are clamped before storing. Returns the
    /// stored value.
    pub fn update_settings(&self, mut settings: MonitorSettings) -> MonitorSettings {
        settings.normalize();
        let mut current = self.settings.write().unwrap();
        *current = settings;
        tracing::debug!(sensitivity = current.sensitivity, "Settings updated");
        current.clone()
    }
}
