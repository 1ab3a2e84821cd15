//! ConnectionMonitor - Link quality model
//!
//! ## Responsibilities
//!
//! - Hold exactly one connection sample per registered camera
//! - Derive link quality from signal strength (never stored)
//! - Aggregate fleet-wide connectivity summaries

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::camera_registry::{CameraId, CameraRegistry};
use crate::error::{Error, Result};

/// Derived link quality classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkQuality {
    /// Signal strength 80% or above
    Online,
    /// Signal strength 50-79%
    Weak,
    /// Signal strength below 50%
    Offline,
}

impl LinkQuality {
    /// Classify a signal strength percentage
    ///
    /// Lower bounds are inclusive: 80 is online, 50 is weak, 49 is offline.
    pub fn from_signal(signal_strength: u8) -> Self {
        if signal_strength >= 80 {
            Self::Online
        } else if signal_strength >= 50 {
            Self::Weak
        } else {
            Self::Offline
        }
    }
}

impl std::fmt::Display for LinkQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Weak => write!(f, "weak"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

/// Connection measurement for one camera
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSample {
    pub camera_id: CameraId,
    /// Signal strength, percent (0-100)
    pub signal_strength: u8,
    pub latency_ms: u32,
}

impl ConnectionSample {
    /// Link quality derived from the sample's signal strength
    pub fn quality(&self) -> LinkQuality {
        LinkQuality::from_signal(self.signal_strength)
    }
}

/// Fleet-wide connectivity summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSummary {
    pub online: usize,
    pub weak: usize,
    pub offline: usize,
    /// Mean signal strength, percent, rounded half-up. 0 when no samples exist.
    pub average_signal: u8,
}

/// Static network facts shown beside the per-camera list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub ip_address: String,
    pub network_name: String,
    pub bandwidth_mbps: u32,
}

/// Connection samples for the fleet, immutable after load
pub struct ConnectionMonitor {
    samples: Vec<ConnectionSample>,
    network: NetworkInfo,
}

impl ConnectionMonitor {
    /// Create a monitor from the seeded samples
    ///
    /// Enforces one sample per registered camera in both directions:
    /// an orphan sample or a camera without a sample fails with
    /// `Error::InvalidReference`. Signal strength above 100 fails with
    /// `Error::Validation`.
    pub fn new(
        registry: &CameraRegistry,
        samples: Vec<ConnectionSample>,
        network: NetworkInfo,
    ) -> Result<Self> {
        let mut sampled = HashSet::new();
        for sample in &samples {
            if sample.signal_strength > 100 {
                return Err(Error::Validation(format!(
                    "Signal strength {}% out of range for camera {}",
                    sample.signal_strength, sample.camera_id
                )));
            }
            if !registry.contains(sample.camera_id) {
                return Err(Error::InvalidReference(format!(
                    "Connection sample references unregistered camera {}",
                    sample.camera_id
                )));
            }
            if !sampled.insert(sample.camera_id) {
                return Err(Error::Validation(format!(
                    "Duplicate connection sample for camera {}",
                    sample.camera_id
                )));
            }
        }
        for camera in registry.list() {
            if !sampled.contains(&camera.id) {
                return Err(Error::InvalidReference(format!(
                    "Camera {} has no connection sample",
                    camera.id
                )));
            }
        }

        tracing::debug!(sample_count = samples.len(), "Connection monitor loaded");
        Ok(Self { samples, network })
    }

    /// All samples in registry order
    pub fn samples(&self) -> &[ConnectionSample] {
        &self.samples
    }

    /// Look up the sample for a camera
    pub fn sample(&self, camera_id: CameraId) -> Result<&ConnectionSample> {
        self.samples
            .iter()
            .find(|s| s.camera_id == camera_id)
            .ok_or_else(|| Error::NotFound(format!("Camera {} not found", camera_id)))
    }

    /// Network facts for the monitoring site
    pub fn network_info(&self) -> &NetworkInfo {
        &self.network
    }

    /// Summarize connectivity across the fleet
    ///
    /// An empty sample set yields all zeros; it is not an error.
    pub fn summarize(&self) -> ConnectionSummary {
        let mut summary = ConnectionSummary::default();
        if self.samples.is_empty() {
            return summary;
        }

        let mut signal_total: u32 = 0;
        for sample in &self.samples {
            signal_total += sample.signal_strength as u32;
            match sample.quality() {
                LinkQuality::Online => summary.online += 1,
                LinkQuality::Weak => summary.weak += 1,
                LinkQuality::Offline => summary.offline += 1,
            }
        }

        // Round half-up: 84.5 -> 85
        summary.average_signal =
            (signal_total as f64 / self.samples.len() as f64).round() as u8;
        summary
    }
}
