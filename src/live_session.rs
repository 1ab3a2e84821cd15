//! LiveSessionController - Enlarged live view state
//!
//! ## Responsibilities
//!
//! - Track which camera the live view shows, if any
//! - Enforce the single-session rule (replace, never stack)
//! - Manage the mute toggle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use crate::camera_registry::{CameraId, CameraRegistry};
use crate::error::{Error, Result};

/// Open live view session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveSession {
    pub camera_id: CameraId,
    /// Audio starts muted on every open
    pub muted: bool,
    pub opened_at: DateTime<Utc>,
}

/// Tracks the single enlarged live view session
///
/// No session is open initially. At most one session exists at a time;
/// selecting a different camera replaces it.
pub struct LiveSessionController {
    registry: Arc<CameraRegistry>,
    session: RwLock<Option<LiveSession>>,
}

impl LiveSessionController {
    /// Create a controller with no open session
    pub fn new(registry: Arc<CameraRegistry>) -> Self {
        Self {
            registry,
            session: RwLock::new(None),
        }
    }

    /// Current session, if open
    pub fn current(&self) -> Option<LiveSession> {
        self.session.read().unwrap().clone()
    }

    /// True if a session is open
    pub fn is_open(&self) -> bool {
        self.session.read().unwrap().is_some()
    }

    /// Open the live view on a camera
    ///
    /// Reopening the camera already shown is a no-op that keeps the mute
    /// flag. Selecting a different camera replaces the session and resets
    /// the mute flag to muted. An unregistered camera id fails with
    /// `Error::InvalidReference` and leaves the state unchanged.
    pub fn select(&self, camera_id: CameraId) -> Result<LiveSession> {
        if !self.registry.contains(camera_id) {
            return Err(Error::InvalidReference(format!(
                "Camera {} is not registered",
                camera_id
            )));
        }

        let mut session = self.session.write().unwrap();
        if let Some(current) = session.as_ref() {
            if current.camera_id == camera_id {
                tracing::debug!(camera_id = camera_id, "Live view already on camera");
                return Ok(current.clone());
            }
        }

        let opened = LiveSession {
            camera_id,
            muted: true,
            opened_at: Utc::now(),
        };
        *session = Some(opened.clone());
        tracing::info!(camera_id = camera_id, "Live view opened");
        Ok(opened)
    }

    /// Flip the mute flag; no-op while no session is open
    pub fn toggle_mute(&self) -> Option<LiveSession> {
        let mut session = self.session.write().unwrap();
        match session.as_mut() {
            Some(current) => {
                current.muted = !current.muted;
                tracing::debug!(
                    camera_id = current.camera_id,
                    muted = current.muted,
                    "Live view mute toggled"
                );
                Some(current.clone())
            }
            None => None,
        }
    }

    /// Close the live view; idempotent
    pub fn close(&self) {
        let mut session = self.session.write().unwrap();
        if let Some(current) = session.take() {
            tracing::info!(camera_id = current.camera_id, "Live view closed");
        }
    }
}
