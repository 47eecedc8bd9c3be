//! # Snow Watch
//!
//! A snowfall measurement that pushes each new reading to the snowsport
//! activities watching it. Every activity turns the reading into its own
//! go/no-go advisory.
//!
//! ## Core Components
//!
//! - **measurement**: the subject holding the reading and the registration list
//! - **observer**: the observer trait and the built-in activities

pub mod error;
pub mod measurement;
pub mod observer;

pub use error::*;
pub use measurement::*;
pub use observer::*;
