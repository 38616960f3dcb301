//! Access to the default output device's per-application audio sessions.
//!
//! The controller only ever sees the [`AudioEndpoint`] and
//! [`AudioSession`] traits; the WASAPI implementation lives in
//! [`wasapi`] and is Windows-only. Session handles are scoped to a
//! single event and released when dropped.

mod label;
#[cfg(windows)]
mod wasapi;

pub use label::derive_label;
#[cfg(windows)]
pub use wasapi::WasapiEndpoint;

use thiserror::Error;

/// Raw identity data for one session, input to label derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionIdentity {
    /// System-assigned session identifier string, when available.
    pub identifier: Option<String>,
    /// Human display name, when the owning application set one.
    pub display_name: Option<String>,
}

/// Failures surfaced by the endpoint provider.
///
/// `NotFound` is the expected answer for an index that stopped being
/// live; `Platform` carries the native status code of a failed call.
#[derive(Debug, Error)]
pub enum MixerError {
    #[error("no audio session at index {0}")]
    NotFound(usize),
    #[error("{call} failed: {message} ({code:#010x})")]
    Platform {
        call: &'static str,
        code: i32,
        message: String,
    },
}

/// The current default output device's session list.
///
/// The session set is volatile; callers re-enumerate on every event and
/// never hold a count or handle across events.
pub trait AudioEndpoint {
    fn session_count(&self) -> Result<usize, MixerError>;

    /// Borrow the session at `index` for the duration of one action.
    /// Fails with [`MixerError::NotFound`] if the index is no longer
    /// live at call time.
    fn session(&self, index: usize) -> Result<Box<dyn AudioSession + '_>, MixerError>;
}

/// One session, valid for a single action.
pub trait AudioSession {
    fn identity(&self) -> Result<SessionIdentity, MixerError>;

    /// Current volume in [0.0, 1.0].
    fn volume(&self) -> Result<f32, MixerError>;

    fn set_volume(&self, level: f32) -> Result<(), MixerError>;
}
