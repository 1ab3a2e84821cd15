//! NotificationFeed - Curated severity-tagged notices
//!
//! ## Responsibilities
//!
//! - Hold the curated notification list in authored order
//! - Validate optional camera references at load
//! - Provide severity tallies

use serde::{Deserialize, Serialize};

use crate::camera_registry::{CameraId, CameraRegistry};
use crate::error::{Error, Result};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Needs attention now
    Alert,
    /// Positive outcome
    Success,
    /// Informational
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alert => write!(f, "alert"),
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Curated notification item
///
/// Distinct from a pen event: a human-facing summary that may or may
/// not correspond to a recorded event. System advisories carry no
/// camera reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub camera_id: Option<CameraId>,
    /// Display label only (e.g. "Há 5 minutos")
    pub timestamp: String,
}

/// Per-severity notification tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub alert: usize,
    pub success: usize,
    pub info: usize,
}

/// Curated notification list, immutable after load
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    /// Create a feed from the seeded items
    ///
    /// Authored order is preserved verbatim; the feed never re-sorts.
    /// A camera reference that does not resolve fails with
    /// `Error::InvalidReference`.
    pub fn new(registry: &CameraRegistry, items: Vec<Notification>) -> Result<Self> {
        for item in &items {
            if let Some(camera_id) = item.camera_id {
                if !registry.contains(camera_id) {
                    return Err(Error::InvalidReference(format!(
                        "Notification {} references unregistered camera {}",
                        item.id, camera_id
                    )));
                }
            }
        }

        tracing::debug!(notification_count = items.len(), "Notification feed loaded");
        Ok(Self { items })
    }

    /// All notifications in authored order
    pub fn list(&self) -> &[Notification] {
        &self.items
    }

    /// Number of notifications
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the feed is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tally notifications by severity
    pub fn count_by_severity(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for item in &self.items {
            match item.severity {
                Severity::Alert => counts.alert += 1,
                Severity::Success => counts.success += 1,
                Severity::Info => counts.info += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera_registry::{Camera, HealthStatus};

    fn registry(ids: &[CameraId]) -> CameraRegistry {
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
        CameraRegistry::new(cameras).unwrap()
    }

    fn notification(id: u32, severity: Severity, camera_id: Option<CameraId>) -> Notification {
        Notification {
            id,
            severity,
            title: format!("Notification {}", id),
            description: String::new(),
            camera_id,
            timestamp: "now".to_string(),
        }
    }

    #[test]
    fn test_authored_order_preserved() {
        let feed = NotificationFeed::new(
            &registry(&[1]),
            vec![
                notification(3, Severity::Info, None),
                notification(1, Severity::Alert, Some(1)),
                notification(2, Severity::Success, None),
            ],
        )
        .unwrap();
        let ids: Vec<u32> = feed.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_count_by_severity() {
        let feed = NotificationFeed::new(
            &registry(&[1]),
            vec![
                notification(1, Severity::Alert, Some(1)),
                notification(2, Severity::Alert, None),
                notification(3, Severity::Success, None),
                notification(4, Severity::Info, None),
            ],
        )
        .unwrap();
        let counts = feed.count_by_severity();
        assert_eq!(counts.alert, 2);
        assert_eq!(counts.success, 1);
        assert_eq!(counts.info, 1);
        assert_eq!(counts.alert + counts.success + counts.info, feed.len());
    }

    #[test]
    fn test_unknown_camera_reference_rejected() {
        let result = NotificationFeed::new(
            &registry(&[1]),
            vec![notification(1, Severity::Alert, Some(9))],
        );
        assert!(matches!(result, Err(Error::InvalidReference(_))));
    }
}
