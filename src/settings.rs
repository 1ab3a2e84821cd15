//! MonitorSettings - Detection and alerting preferences

use serde::{Deserialize, Serialize};

/// Detection / alerting preferences for the monitoring shell
///
/// Flat, independent fields; no cross-field invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorSettings {
    pub motion_detection: bool,
    pub sound_alerts: bool,
    pub auto_recording: bool,
    pub night_vision: bool,
    pub temperature_alerts: bool,
    /// Motion detection sensitivity, percent (0-100)
    pub sensitivity: u8,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            motion_detection: true,
            sound_alerts: true,
            auto_recording: true,
            night_vision: true,
            temperature_alerts: true,
            sensitivity: 75,
        }
    }
}

impl MonitorSettings {
    /// Clamp out-of-range fields into their valid domain
    pub fn normalize(&mut self) {
        if self.sensitivity > 100 {
            self.sensitivity = 100;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_monitoring_form() {
        let settings = MonitorSettings::default();
        assert!(settings.motion_detection);
        assert!(settings.sound_alerts);
        assert!(settings.auto_recording);
        assert!(settings.night_vision);
        assert!(settings.temperature_alerts);
        assert_eq!(settings.sensitivity, 75);
    }

    #[test]
    fn test_normalize_clamps_sensitivity() {
        let mut settings = MonitorSettings {
            sensitivity: 250,
            ..Default::default()
        };
        settings.normalize();
        assert_eq!(settings.sensitivity, 100);

        let mut in_range = MonitorSettings::default();
        in_range.normalize();
        assert_eq!(in_range.sensitivity, 75);
    }
}
