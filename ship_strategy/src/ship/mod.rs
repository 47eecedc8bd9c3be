//! The ship entity and its strategy slots.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::strategies::{FlightStrategy, Maneuver, Missile, Salvo, SpaceFlight, WeaponStrategy};

/// Captain assigned when none is given.
pub const DEFAULT_CAPTAIN: &str = "Picard";

/// Unique identifier for ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipId(pub Uuid);

impl ShipId {
    /// Create a new random ship ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShipId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ship with one flight and one weapon strategy installed.
///
/// Both slots are always occupied: they are filled at construction and can
/// only be replaced, never emptied.
#[derive(Debug)]
pub struct Ship {
    pub id: ShipId,
    pub name: String,
    pub color: String,
    pub captain: String,
    flight: Box<dyn FlightStrategy>,
    weapon: Box<dyn WeaponStrategy>,
}

impl Ship {
    /// Create a ship with the default loadout: space flight and missiles.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_strategies(name, Box::new(SpaceFlight), Box::new(Missile))
    }

    /// Create a ship with an explicit loadout.
    pub fn with_strategies(
        name: impl Into<String>,
        flight: Box<dyn FlightStrategy>,
        weapon: Box<dyn WeaponStrategy>,
    ) -> Self {
        Self {
            id: ShipId::new(),
            name: name.into(),
            color: String::new(),
            captain: DEFAULT_CAPTAIN.to_string(),
            flight,
            weapon,
        }
    }

    /// The stock missile ship.
    pub fn missile_ship() -> Self {
        Self::new("Missile Ship")
    }

    /// Set the hull color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the captain.
    pub fn with_captain(mut self, captain: impl Into<String>) -> Self {
        self.captain = captain.into();
        self
    }

    /// Replace the flight strategy. The previous one is dropped.
    pub fn set_flight_strategy(&mut self, strategy: impl FlightStrategy + 'static) {
        self.replace_flight(Box::new(strategy));
    }

    /// Replace the weapon strategy. The previous one is dropped.
    pub fn set_weapon_strategy(&mut self, strategy: impl WeaponStrategy + 'static) {
        self.replace_weapon(Box::new(strategy));
    }

    /// Replace the flight strategy with an already boxed one.
    pub fn replace_flight(&mut self, strategy: Box<dyn FlightStrategy>) {
        debug!(
            ship = %self.name,
            from = self.flight.kind(),
            to = strategy.kind(),
            "swapping flight strategy"
        );
        self.flight = strategy;
    }

    /// Replace the weapon strategy with an already boxed one.
    pub fn replace_weapon(&mut self, strategy: Box<dyn WeaponStrategy>) {
        debug!(
            ship = %self.name,
            from = self.weapon.kind(),
            to = strategy.kind(),
            "swapping weapon strategy"
        );
        self.weapon = strategy;
    }

    /// Fly using the installed flight strategy.
    pub fn fly(&self) -> Maneuver {
        trace!(ship = %self.name, strategy = self.flight.kind(), "fly");
        self.flight.fly()
    }

    /// Fire using the installed weapon strategy.
    pub fn fire(&self) -> Salvo {
        trace!(ship = %self.name, strategy = self.weapon.kind(), "fire");
        self.weapon.fire()
    }

    pub fn flight_kind(&self) -> &'static str {
        self.flight.kind()
    }

    pub fn weapon_kind(&self) -> &'static str {
        self.weapon.kind()
    }

    /// Give the helm a destination. Navigation is the same for every ship.
    pub fn set_navigation(&self, destination: &str) -> String {
        format!("Set destination to {destination}, make it so number one!")
    }
}
