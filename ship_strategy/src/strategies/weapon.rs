//! Weapon strategies.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// How a ship fights.
pub trait WeaponStrategy: Debug {
    /// Short identifier of the variant (e.g. "missile").
    fn kind(&self) -> &'static str;

    /// Discharge the weapon.
    fn fire(&self) -> Salvo;
}

/// Outcome of a single `fire` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salvo {
    pub kind: String,
    pub narration: String,
}

impl Salvo {
    pub fn new(kind: impl Into<String>, narration: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            narration: narration.into(),
        }
    }
}

/// Conventional ordnance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Missile;

impl WeaponStrategy for Missile {
    fn kind(&self) -> &'static str {
        "missile"
    }

    fn fire(&self) -> Salvo {
        Salvo::new(self.kind(), "Fire ze missiles!")
    }
}

/// Exotic ordnance that tears a hole between dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterdimensionalRiftCannon;

impl WeaponStrategy for InterdimensionalRiftCannon {
    fn kind(&self) -> &'static str {
        "interdimensional-rift-cannon"
    }

    fn fire(&self) -> Salvo {
        Salvo::new(
            self.kind(),
            "Rift cannon charging... reality tears open. Hope nothing comes back through.",
        )
    }
}

/// Built-in weapon strategies, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeaponKind {
    #[default]
    Missile,
    InterdimensionalRiftCannon,
}

impl WeaponKind {
    /// Instantiate the strategy this kind names.
    pub fn into_strategy(self) -> Box<dyn WeaponStrategy> {
        match self {
            WeaponKind::Missile => Box::new(Missile),
            WeaponKind::InterdimensionalRiftCannon => Box::new(InterdimensionalRiftCannon),
        }
    }
}
