//! Observers of a snowfall measurement.

mod activities;

pub use activities::*;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// State every observer caches from the most recent notification.
///
/// Fields are read-only from outside; the only way to change them is
/// [`ActivityState::apply`], which always derives the advisory from the
/// reading it stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityState {
    name: String,
    last_reading: Option<f64>,
    advisory: bool,
}

impl ActivityState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_reading: None,
            advisory: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` until the first update arrives.
    pub fn last_reading(&self) -> Option<f64> {
        self.last_reading
    }

    pub fn advisory(&self) -> bool {
        self.advisory
    }

    /// Cache `reading` and recompute the advisory with `rule`.
    pub fn apply(&mut self, reading: f64, rule: impl Fn(f64) -> bool) {
        self.last_reading = Some(reading);
        self.advisory = rule(reading);
    }
}

/// Something that reacts to new snowfall readings.
///
/// Implementors keep their [`ActivityState`] private and expose it read-only
/// through `state`; `update` is the only path that changes it.
pub trait Observer: Debug {
    fn state(&self) -> &ActivityState;

    /// Threshold rule: whether `reading` inches of new snow favor the activity.
    fn advises(&self, reading: f64) -> bool;

    /// Cache `reading` and recompute the advisory from it.
    fn update(&mut self, reading: f64);

    fn go_message(&self) -> String;

    fn no_go_message(&self) -> String;

    fn name(&self) -> &str {
        self.state().name()
    }

    fn last_reading(&self) -> Option<f64> {
        self.state().last_reading()
    }

    fn advisory(&self) -> bool {
        self.state().advisory()
    }

    /// Go-or-no-go recommendation for the current advisory.
    fn decide(&self) -> String {
        if self.advisory() {
            self.go_message()
        } else {
            self.no_go_message()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_derives_advisory_from_reading() {
        let mut state = ActivityState::new("Test");
        assert_eq!(state.last_reading(), None);
        assert!(!state.advisory());

        state.apply(4.0, |r| r > 2.0);
        assert_eq!(state.last_reading(), Some(4.0));
        assert!(state.advisory());

        state.apply(1.0, |r| r > 2.0);
        assert_eq!(state.last_reading(), Some(1.0));
        assert!(!state.advisory());
    }
}
