//! CameraRegistry - Monitored camera roster
//!
//! ## Responsibilities
//!
//! - Hold the fixed set of monitored cameras
//! - Reject duplicate camera ids at load
//! - Provide lookups and health status tallies

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Error, Result};

/// Camera identifier (stable for the process lifetime)
pub type CameraId = u32;

/// Camera health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Monitoring normally
    Active,
    /// Unresolved alert condition in the pen
    Alerting,
    /// Not monitoring
    Inactive,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Alerting => write!(f, "alerting"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Monitored camera entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: CameraId,
    pub name: String,
    pub status: HealthStatus,
    /// Free-text annotation of the last observed activity.
    /// Display only; health is carried by `status`, never parsed from here.
    pub last_activity: Option<String>,
    pub snapshot_url: Option<String>,
}

/// Health status tally across the fleet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub active: usize,
    pub alerting: usize,
    pub inactive: usize,
}

impl StatusCounts {
    /// Sum of all three tallies
    pub fn total(&self) -> usize {
        self.active + self.alerting + self.inactive
    }
}

/// Fixed camera roster, immutable after load
pub struct CameraRegistry {
    cameras: Vec<Camera>,
}

impl CameraRegistry {
    /// Create a registry from the seeded camera list
    ///
    /// Insertion order is preserved for display. Fails with
    /// `Error::Validation` if two cameras share an id.
    pub fn new(cameras: Vec<Camera>) -> Result<Self> {
        let mut seen = HashSet::new();
        for camera in &cameras {
            if !seen.insert(camera.id) {
                return Err(Error::Validation(format!(
                    "Duplicate camera id {}",
                    camera.id
                )));
            }
        }

        tracing::debug!(camera_count = cameras.len(), "Camera registry loaded");
        Ok(Self { cameras })
    }

    /// All cameras in insertion order
    pub fn list(&self) -> &[Camera] {
        &self.cameras
    }

    /// Look up a camera by id
    pub fn get(&self, id: CameraId) -> Result<&Camera> {
        self.cameras
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("Camera {} not found", id)))
    }

    /// Whether a camera id is registered
    pub fn contains(&self, id: CameraId) -> bool {
        self.cameras.iter().any(|c| c.id == id)
    }

    /// Number of registered cameras
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// True if the roster is empty
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Tally cameras by health status
    ///
    /// The three counts always sum to `len()`.
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for camera in &self.cameras {
            match camera.status {
                HealthStatus::Active => counts.active += 1,
                HealthStatus::Alerting => counts.alerting += 1,
                HealthStatus::Inactive => counts.inactive += 1,
            }
        }
        counts
    }
}
