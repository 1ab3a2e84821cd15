//! EventLedger - Pen event recording (ring buffer)
//!
//! ## Responsibilities
//!
//! - Record birth / death / crush-risk events per camera
//! - Keep the newest events up to a configured capacity
//! - Provide per-camera and fleet-wide queries

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::camera_registry::{CameraId, CameraRegistry};
use crate::error::{Error, Result};

/// Event identifier, assigned by the ledger
pub type EventId = u64;

/// Pen event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// One or more piglets born
    Birth,
    /// Piglet without vital signs detected
    Death,
    /// Sow posture risks crushing piglets
    CrushRisk,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Birth => write!(f, "birth"),
            Self::Death => write!(f, "death"),
            Self::CrushRisk => write!(f, "crush_risk"),
        }
    }
}

/// Recorded pen event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenEvent {
    pub id: EventId,
    pub camera_id: CameraId,
    pub kind: EventKind,
    pub description: String,
    /// Display label only (e.g. "Hoje, 14:30"); never parsed or sorted
    pub timestamp: String,
    /// Piglets born; present on birth events only
    pub piglet_count: Option<u32>,
}

/// Pen event to record (id is assigned by the ledger)
#[derive(Debug, Clone)]
pub struct NewPenEvent {
    pub camera_id: CameraId,
    pub kind: EventKind,
    pub description: String,
    pub timestamp: String,
    pub piglet_count: Option<u32>,
}

/// Per-kind event tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventKindCounts {
    pub births: usize,
    pub deaths: usize,
    pub crush_risks: usize,
}

/// Ring buffer for recorded events
struct EventRingBuffer {
    events: VecDeque<PenEvent>,
    capacity: usize,
    next_id: EventId,
}

impl EventRingBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    fn push(&mut self, mut event: PenEvent) -> PenEvent {
        event.id = self.next_id;
        self.next_id += 1;

        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        let stored = event.clone();
        self.events.push_back(event);
        stored
    }

    fn latest(&self, count: usize) -> Vec<PenEvent> {
        self.events.iter().rev().take(count).cloned().collect()
    }

    fn by_camera(&self, camera_id: CameraId) -> Vec<PenEvent> {
        self.events
            .iter()
            .rev()
            .filter(|e| e.camera_id == camera_id)
            .cloned()
            .collect()
    }
}

/// EventLedger instance
pub struct EventLedger {
    registry: Arc<CameraRegistry>,
    buffer: RwLock<EventRingBuffer>,
}

impl EventLedger {
    /// Create a ledger retaining up to `capacity` events
    pub fn new(registry: Arc<CameraRegistry>, capacity: usize) -> Self {
        Self {
            registry,
            buffer: RwLock::new(EventRingBuffer::new(capacity)),
        }
    }

    /// Record a pen event
    ///
    /// Fails with `Error::InvalidReference` if the camera is not
    /// registered and `Error::Validation` if a piglet count accompanies
    /// a non-birth event; the ledger is unchanged on failure. A birth
    /// count of zero is normalized to none.
    pub fn record(&self, new_event: NewPenEvent) -> Result<PenEvent> {
        if !self.registry.contains(new_event.camera_id) {
            return Err(Error::InvalidReference(format!(
                "Event references unregistered camera {}",
                new_event.camera_id
            )));
        }
        if new_event.kind != EventKind::Birth && new_event.piglet_count.is_some() {
            return Err(Error::Validation(format!(
                "Piglet count given for {} event on camera {}",
                new_event.kind, new_event.camera_id
            )));
        }

        let piglet_count = new_event.piglet_count.filter(|&count| count > 0);
        let mut buffer = self.buffer.write().unwrap();
        let event = buffer.push(PenEvent {
            id: 0,
            camera_id: new_event.camera_id,
            kind: new_event.kind,
            description: new_event.description,
            timestamp: new_event.timestamp,
            piglet_count,
        });

        tracing::debug!(
            event_id = event.id,
            camera_id = event.camera_id,
            kind = %event.kind,
            "Pen event recorded"
        );
        Ok(event)
    }

    /// Events for one camera, newest first (reverse insertion order)
    pub fn events_for(&self, camera_id: CameraId) -> Result<Vec<PenEvent>> {
        if !self.registry.contains(camera_id) {
            return Err(Error::NotFound(format!("Camera {} not found", camera_id)));
        }
        let buffer = self.buffer.read().unwrap();
        Ok(buffer.by_camera(camera_id))
    }

    /// Newest events across all cameras
    pub fn latest(&self, count: usize) -> Vec<PenEvent> {
        let buffer = self.buffer.read().unwrap();
        buffer.latest(count)
    }

    /// Number of retained events
    pub fn total_count(&self) -> usize {
        let buffer = self.buffer.read().unwrap();
        buffer.events.len()
    }

    /// Tally retained events by kind
    pub fn kind_counts(&self) -> EventKindCounts {
        let buffer = self.buffer.read().unwrap();
        let mut counts = EventKindCounts::default();
        for event in &buffer.events {
            match event.kind {
                EventKind::Birth => counts.births += 1,
                EventKind::Death => counts.deaths += 1,
                EventKind::CrushRisk => counts.crush_risks += 1,
            }
        }
        counts
    }

    /// Total piglets born across retained birth events
    pub fn piglets_born(&self) -> u32 {
        let buffer = self.buffer.read().unwrap();
        buffer
            .events
            .iter()
            .filter_map(|e| e.piglet_count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera_registry::{Camera, HealthStatus};

    fn registry(ids: &[CameraId]) -> Arc<CameraRegistry> {
        let cameras = ids
            .iter()
            .map(|&id| Camera {
                id,
                name: format!("Camera {}", id),
                status: HealthStatus::Active,
                last_activity: None,
                snapshot_url: None,
            })
            .collect();
        Arc::new(CameraRegistry::new(cameras).unwrap())
    }

    fn birth(camera_id: CameraId, timestamp: &str, count: u32) -> NewPenEvent {
        NewPenEvent {
            camera_id,
            kind: EventKind::Birth,
            description: format!("{} piglets born", count),
            timestamp: timestamp.to_string(),
            piglet_count: Some(count),
        }
    }

    #[test]
    fn test_record_assigns_sequential_ids() {
        let ledger = EventLedger::new(registry(&[1]), 10);
        let first = ledger.record(birth(1, "t1", 1)).unwrap();
        let second = ledger.record(birth(1, "t2", 2)).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_record_unknown_camera_leaves_ledger_unchanged() {
        let ledger = EventLedger::new(registry(&[1]), 10);
        ledger.record(birth(1, "t1", 1)).unwrap();
        let result = ledger.record(birth(9, "t2", 1));
        assert!(matches!(result, Err(Error::InvalidReference(_))));
        assert_eq!(ledger.total_count(), 1);
    }

    #[test]
    fn test_count_on_non_birth_rejected() {
        let ledger = EventLedger::new(registry(&[1]), 10);
        let result = ledger.record(NewPenEvent {
            camera_id: 1,
            kind: EventKind::Death,
            description: "No vital signs".to_string(),
            timestamp: "t1".to_string(),
            piglet_count: Some(1),
        });
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(ledger.total_count(), 0);
    }

    #[test]
    fn test_zero_birth_count_normalized_to_none() {
        let ledger = EventLedger::new(registry(&[1]), 10);
        let event = ledger.record(birth(1, "t1", 0)).unwrap();
        assert_eq!(event.piglet_count, None);
    }

    #[test]
    fn test_events_for_returns_newest_first() {
        let ledger = EventLedger::new(registry(&[1, 2]), 10);
        ledger.record(birth(1, "first", 1)).unwrap();
        ledger.record(birth(2, "other", 1)).unwrap();
        ledger.record(birth(1, "second", 2)).unwrap();

        let events = ledger.events_for(1).unwrap();
        let timestamps: Vec<&str> = events.iter().map(|e| e.timestamp.as_str()).collect();
        assert_eq!(timestamps, vec!["second", "first"]);
    }

    #[test]
    fn test_events_for_unknown_camera_not_found() {
        let ledger = EventLedger::new(registry(&[1]), 10);
        assert!(matches!(ledger.events_for(9), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let ledger = EventLedger::new(registry(&[1]), 2);
        ledger.record(birth(1, "t1", 1)).unwrap();
        ledger.record(birth(1, "t2", 1)).unwrap();
        ledger.record(birth(1, "t3", 1)).unwrap();

        assert_eq!(ledger.total_count(), 2);
        let events = ledger.events_for(1).unwrap();
        let timestamps: Vec<&str> = events.iter().map(|e| e.timestamp.as_str()).collect();
        assert_eq!(timestamps, vec!["t3", "t2"]);
    }

    #[test]
    fn test_kind_counts_and_piglets_born() {
        let ledger = EventLedger::new(registry(&[1]), 10);
        ledger.record(birth(1, "t1", 3)).unwrap();
        ledger.record(birth(1, "t2", 2)).unwrap();
        ledger
            .record(NewPenEvent {
                camera_id: 1,
                kind: EventKind::CrushRisk,
                description: "Sow lying on litter".to_string(),
                timestamp: "t3".to_string(),
                piglet_count: None,
            })
            .unwrap();

        let counts = ledger.kind_counts();
        assert_eq!(counts.births, 2);
        assert_eq!(counts.deaths, 0);
        assert_eq!(counts.crush_risks, 1);
        assert_eq!(ledger.piglets_born(), 5);
    }

    #[test]
    fn test_latest_spans_cameras() {
        let ledger = EventLedger::new(registry(&[1, 2]), 10);
        ledger.record(birth(1, "t1", 1)).unwrap();
        ledger.record(birth(2, "t2", 1)).unwrap();
        ledger.record(birth(1, "t3", 1)).unwrap();

        let latest = ledger.latest(2);
        let timestamps: Vec<&str> = latest.iter().map(|e| e.timestamp.as_str()).collect();
        assert_eq!(timestamps, vec!["t3", "t2"]);
    }
}
