//! The measurement subject and its registration list.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::observer::{ActivityState, Observer};

/// An observer handle that both the caller and a measurement can hold.
pub type SharedObserver = Rc<RefCell<dyn Observer>>;

/// Wrap an observer so it can be registered and still inspected afterwards.
pub fn share(observer: impl Observer + 'static) -> SharedObserver {
    Rc::new(RefCell::new(observer))
}

/// Unique identifier for measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasurementId(pub Uuid);

impl MeasurementId {
    /// Create a new random measurement ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MeasurementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MeasurementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single snowfall reading plus everyone watching it.
///
/// Observers are notified in registration order. Registering the same
/// observer twice is allowed and yields two notifications per reading.
#[derive(Debug)]
pub struct Measurement {
    pub id: MeasurementId,
    reading: f64,
    observers: Vec<SharedObserver>,
}

impl Measurement {
    /// Create a measurement reading zero with no observers.
    pub fn new() -> Self {
        Self {
            id: MeasurementId::new(),
            reading: 0.0,
            observers: Vec::new(),
        }
    }

    pub fn reading(&self) -> f64 {
        self.reading
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Whether `observer` holds at least one registration.
    pub fn is_registered(&self, observer: &SharedObserver) -> bool {
        self.observers.iter().any(|o| Rc::ptr_eq(o, observer))
    }

    /// Append an observer to the end of the notification order.
    pub fn add_observer(&mut self, observer: SharedObserver) {
        {
            let observer = observer.borrow();
            debug!(measurement = %self.id, observer = observer.name(), "observer registered");
        }
        self.observers.push(observer);
    }

    /// Remove the first registration of `observer`.
    ///
    /// Returns `false` and leaves the list untouched if it was not registered.
    /// The observer keeps whatever state it last received.
    pub fn remove_observer(&mut self, observer: &SharedObserver) -> bool {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                let removed = self.observers.remove(index);
                let observer = removed.borrow();
                debug!(measurement = %self.id, observer = observer.name(), "observer removed");
                true
            }
            None => false,
        }
    }

    /// Store `value` and push it to every registered observer.
    pub fn set_reading(&mut self, value: f64) {
        self.reading = value;
        debug!(
            measurement = %self.id,
            reading = value,
            observers = self.observers.len(),
            "broadcasting reading"
        );
        for observer in &self.observers {
            observer.borrow_mut().update(value);
        }
    }

    /// Current state of every registration, in notification order.
    pub fn advisories(&self) -> Vec<ActivityState> {
        self.observers
            .iter()
            .map(|o| o.borrow().state().clone())
            .collect()
    }

    /// The advisory snapshot rendered as a JSON array.
    pub fn report_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.advisories())?)
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Self::new()
    }
}
