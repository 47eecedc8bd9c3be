//! # Ship Strategy
//!
//! Ships whose flight and weapon behaviors are held in swappable strategy slots.
//! A ship never knows which concrete behavior it carries; it only delegates
//! `fly` and `fire` to whatever is currently installed.

pub mod config;
pub mod error;
pub mod ship;
pub mod strategies;

pub use config::*;
pub use error::*;
pub use ship::*;
pub use strategies::*;
