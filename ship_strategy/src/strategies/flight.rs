//! Flight strategies.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// How a ship moves.
pub trait FlightStrategy: Debug {
    /// Short identifier of the variant (e.g. "space-flight").
    fn kind(&self) -> &'static str;

    /// Perform the maneuver.
    fn fly(&self) -> Maneuver;
}

/// Outcome of a single `fly` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maneuver {
    pub kind: String,
    pub narration: String,
}

impl Maneuver {
    pub fn new(kind: impl Into<String>, narration: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            narration: narration.into(),
        }
    }
}

/// Vacuum maneuvering with thrusters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceFlight;

impl FlightStrategy for SpaceFlight {
    fn kind(&self) -> &'static str {
        "space-flight"
    }

    fn fly(&self) -> Maneuver {
        Maneuver::new(self.kind(), "ZOOOOOM! Thrusters burning through the void.")
    }
}

/// Aerodynamic flight inside an atmosphere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtmosphereFlight;

impl FlightStrategy for AtmosphereFlight {
    fn kind(&self) -> &'static str {
        "atmosphere-flight"
    }

    fn fly(&self) -> Maneuver {
        Maneuver::new(self.kind(), "Wings out, banking through the clouds.")
    }
}

/// Built-in flight strategies, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightKind {
    #[default]
    Space,
    Atmosphere,
}

impl FlightKind {
    /// Instantiate the strategy this kind names.
    pub fn into_strategy(self) -> Box<dyn FlightStrategy> {
        match self {
            FlightKind::Space => Box::new(SpaceFlight),
            FlightKind::Atmosphere => Box::new(AtmosphereFlight),
        }
    }
}
