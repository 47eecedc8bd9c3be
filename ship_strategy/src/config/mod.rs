//! Ship and fleet configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::ship::{Ship, DEFAULT_CAPTAIN};
use crate::strategies::{FlightKind, WeaponKind};

fn default_captain() -> String {
    DEFAULT_CAPTAIN.to_string()
}

/// Declarative description of a single ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipConfig {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_captain")]
    pub captain: String,
    #[serde(default)]
    pub flight: FlightKind,
    #[serde(default)]
    pub weapon: WeaponKind,
}

impl ShipConfig {
    /// Create a config with the default loadout.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: String::new(),
            captain: default_captain(),
            flight: FlightKind::default(),
            weapon: WeaponKind::default(),
        }
    }

    /// Parse a single ship from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ShipConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot produce a usable ship.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::BlankName);
        }
        Ok(())
    }
}

/// A list of ships, written as `[[ships]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetConfig {
    #[serde(default)]
    pub ships: Vec<ShipConfig>,
}

impl FleetConfig {
    /// Parse a fleet from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let fleet: FleetConfig = toml::from_str(source)?;
        if fleet.ships.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        Ok(fleet)
    }

    /// Build every ship, failing on the first invalid entry.
    pub fn build(&self) -> Result<Vec<Ship>> {
        self.ships.iter().cloned().map(Ship::from_config).collect()
    }
}

impl Ship {
    /// Build a ship from its configuration.
    pub fn from_config(config: ShipConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            ship = %config.name,
            flight = ?config.flight,
            weapon = ?config.weapon,
            "building ship from config"
        );
        Ok(Ship::with_strategies(
            config.name,
            config.flight.into_strategy(),
            config.weapon.into_strategy(),
        )
        .with_color(config.color)
        .with_captain(config.captain))
    }
}
