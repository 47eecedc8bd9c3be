//! Strategy families a ship can carry.
//!
//! Each family is an open trait. The built-in variants are catalogued by
//! [`FlightKind`] and [`WeaponKind`] so they can be named in configuration,
//! but a ship accepts any implementation of the trait.

mod flight;
mod weapon;

pub use flight::*;
pub use weapon::*;
