//! Session-selection and volume-control state machine.
//!
//! The controller owns one piece of state, the selected session index,
//! and resolves each decoded button into an action against the live
//! session list. The list is re-enumerated fresh on every event;
//! sessions come and go as applications start and stop, so the selected
//! index is only a candidate until it is checked against a fresh count.
//!
//! Provider failures abort the current action and are logged; transport
//! failures propagate to the loop. A selection that no longer matches a
//! live session is a defined no-op, not an error.


use std::io;

use tracing::{info, warn};

use crate::mixer::{derive_label, AudioEndpoint, MixerError};
use crate::remote::Button;
use crate::status::StatusLine;
use crate::transport::LineTransport;

/// Volume change applied per VOL_UP/VOL_DOWN press, clamped to [0, 1].
pub const VOLUME_STEP: f32 = 0.2;

#[derive(Clone, Copy)]
enum StepDirection {
    Up,
    Down,
}

pub struct SessionController {
    selected: usize,
}

impl SessionController {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Candidate index of the selected session; not guaranteed to be
    /// live until checked against a fresh count.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Run one button event to completion. `raw` is the undecoded token,
    /// kept for the diagnostic echo of unknown codes.
    pub fn handle(
        &mut self,
        button: Button,
        raw: &str,
        endpoint: &dyn AudioEndpoint,
        out: &mut dyn LineTransport,
    ) -> io::Result<()> {
        match button {
            Button::Power => self.list_all(endpoint, out),
            Button::Digit(digit) => self.select(usize::from(digit), endpoint, out),
            Button::VolUp | Button::Up => self.step_volume(StepDirection::Up, endpoint, out),
            Button::VolDown | Button::Down => self.step_volume(StepDirection::Down, endpoint, out),
            Button::Func
            | Button::Rewind
            | Button::Pause
            | Button::FastForward
            | Button::Eq
            | Button::Rept => {
                info!("{button}");
                Ok(())
            }
            Button::Unknown => {
                warn!("unknown remote code: {raw:?}");
                Ok(())
            }
        }
    }

    fn live_count(&self, endpoint: &dyn AudioEndpoint) -> Option<usize> {
        match endpoint.session_count() {
            Ok(count) => Some(count),
            Err(err) => {
                warn!("session enumeration failed: {err}");
                None
            }
        }
    }

    /// POWER: show every live session's label. No volume queries, no
    /// mutation, selection untouched.
    fn list_all(&self, endpoint: &dyn AudioEndpoint, out: &mut dyn LineTransport) -> io::Result<()> {
        let Some(count) = self.live_count(endpoint) else {
            return Ok(());
        };
        for index in 0..count {
            self.show_session(index, endpoint, out)?;
        }
        Ok(())
    }

    fn show_session(
        &self,
        index: usize,
        endpoint: &dyn AudioEndpoint,
        out: &mut dyn LineTransport,
    ) -> io::Result<()> {
        let label = match self.query_label(index, endpoint) {
            Ok(label) => label,
            // One failed session must not stop the rest of a listing.
            Err(err) => {
                warn!("session {index}: {err}");
                return Ok(());
            }
        };
        println!("{index}: {label}");
        out.send(&StatusLine::label(&label))
    }

    fn query_label(&self, index: usize, endpoint: &dyn AudioEndpoint) -> Result<String, MixerError> {
        let session = endpoint.session(index)?;
        let identity = session.identity()?;
        Ok(derive_label(&identity))
    }

    /// DIGIT(n): show the session at n when it is live, then make n the
    /// selection either way. Last digit wins; the next valid count
    /// decides whether it resolves.
    fn select(
        &mut self,
        index: usize,
        endpoint: &dyn AudioEndpoint,
        out: &mut dyn LineTransport,
    ) -> io::Result<()> {
        let outcome = match self.live_count(endpoint) {
            Some(count) if index < count => self.show_session(index, endpoint, out),
            _ => Ok(()),
        };
        self.selected = index;
        outcome
    }

    fn step_volume(
        &self,
        direction: StepDirection,
        endpoint: &dyn AudioEndpoint,
        out: &mut dyn LineTransport,
    ) -> io::Result<()> {
        let Some(count) = self.live_count(endpoint) else {
            return Ok(());
        };
        if self.selected >= count {
            // Resolution miss: expected while the selection points at a
            // session that has gone away. Not reported as a failure.
            return Ok(());
        }
        match self.apply_step(direction, endpoint) {
            Ok(previous) => out.send(&StatusLine::volume(previous)),
            Err(err) => {
                warn!("volume update for session {}: {err}", self.selected);
                Ok(())
            }
        }
    }

    /// Read-modify-write on the selected session; single attempt, the
    /// next poll cycle is the retry. Returns the pre-step level, which
    /// is what the status line reports (the display trails by one
    /// press).
    fn apply_step(
        &self,
        direction: StepDirection,
        endpoint: &dyn AudioEndpoint,
    ) -> Result<f32, MixerError> {
        let session = endpoint.session(self.selected)?;
        let current = session.volume()?;
        let target = match direction {
            StepDirection::Up => (current + VOLUME_STEP).min(1.0),
            StepDirection::Down => (current - VOLUME_STEP).max(0.0),
        };
        session.set_volume(target)?;
        info!(
            "session {} volume {current:.2} -> {target:.2}",
            self.selected
        );
        Ok(current)
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
