//! Built-in snowsport activities.
//!
//! NaN never advises: every rule is written as a single comparison that is
//! false for NaN. Infinite and negative readings go through the same
//! comparisons unchanged.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{ActivityState, Observer};
use crate::error::WatchError;
use crate::measurement::{share, SharedObserver};

/// Snowboarding needs more than this much new snow.
pub const SNOWBOARD_MIN_DEPTH: f64 = 2.0;
/// Skating is fine up to and including this much new snow.
pub const ICE_SKATING_MAX_DEPTH: f64 = 1.0;
/// Cross-country skiing is fine up to and including this much new snow.
pub const CROSS_COUNTRY_MAX_DEPTH: f64 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Snowboard {
    state: ActivityState,
}

impl Snowboard {
    fn rule(reading: f64) -> bool {
        reading > SNOWBOARD_MIN_DEPTH
    }

    pub fn new() -> Self {
        Self {
            state: ActivityState::new("Snowboard"),
        }
    }
}

impl Default for Snowboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for Snowboard {
    fn state(&self) -> &ActivityState {
        &self.state
    }

    fn advises(&self, reading: f64) -> bool {
        Self::rule(reading)
    }

    fn update(&mut self, reading: f64) {
        self.state.apply(reading, Self::rule);
    }

    fn go_message(&self) -> String {
        "Fresh powder! Grab your board and hit the slopes.".to_string()
    }

    fn no_go_message(&self) -> String {
        "Not enough new snow for boarding. Stay home.".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IceSkating {
    state: ActivityState,
}

impl IceSkating {
    fn rule(reading: f64) -> bool {
        reading <= ICE_SKATING_MAX_DEPTH
    }

    pub fn new() -> Self {
        Self {
            state: ActivityState::new("Ice Skating"),
        }
    }
}

impl Default for IceSkating {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for IceSkating {
    fn state(&self) -> &ActivityState {
        &self.state
    }

    fn advises(&self, reading: f64) -> bool {
        Self::rule(reading)
    }

    fn update(&mut self, reading: f64) {
        self.state.apply(reading, Self::rule);
    }

    fn go_message(&self) -> String {
        "The ice is clear enough. Lace up your skates.".to_string()
    }

    fn no_go_message(&self) -> String {
        "Too much snow on the ice to skate today.".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrossCountrySkiing {
    state: ActivityState,
}

impl CrossCountrySkiing {
    fn rule(reading: f64) -> bool {
        reading <= CROSS_COUNTRY_MAX_DEPTH
    }

    pub fn new() -> Self {
        Self {
            state: ActivityState::new("Cross-Country Skiing"),
        }
    }
}

impl Default for CrossCountrySkiing {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for CrossCountrySkiing {
    fn state(&self) -> &ActivityState {
        &self.state
    }

    fn advises(&self, reading: f64) -> bool {
        Self::rule(reading)
    }

    fn update(&mut self, reading: f64) {
        self.state.apply(reading, Self::rule);
    }

    fn go_message(&self) -> String {
        "Trails are skiable. Wax up and head out.".to_string()
    }

    fn no_go_message(&self) -> String {
        "Too deep to break trail. Wait for the groomers.".to_string()
    }
}

/// The built-in activities, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Snowboard,
    IceSkating,
    CrossCountrySkiing,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Snowboard,
        ActivityKind::IceSkating,
        ActivityKind::CrossCountrySkiing,
    ];

    /// Create a fresh, shareable observer of this kind.
    pub fn build(self) -> SharedObserver {
        match self {
            ActivityKind::Snowboard => share(Snowboard::new()),
            ActivityKind::IceSkating => share(IceSkating::new()),
            ActivityKind::CrossCountrySkiing => share(CrossCountrySkiing::new()),
        }
    }
}

impl FromStr for ActivityKind {
    type Err = WatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "snowboard" => Ok(ActivityKind::Snowboard),
            "ice-skating" => Ok(ActivityKind::IceSkating),
            "cross-country-skiing" => Ok(ActivityKind::CrossCountrySkiing),
            _ => Err(WatchError::UnknownActivity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowboard_thresholds() {
        let mut board = Snowboard::new();
        assert!(board.last_reading().is_none());
        assert!(!board.advisory());

        board.update(3.25);
        assert!(board.advisory());
        assert_eq!(board.decide(), board.go_message());

        board.update(2.0);
        assert_eq!(board.last_reading(), Some(2.0));
        assert!(!board.advisory());
        assert_eq!(board.decide(), board.no_go_message());

        board.update(2.0001);
        assert!(board.advisory());
    }

    #[test]
    fn test_ice_skating_thresholds() {
        let mut skates = IceSkating::new();

        skates.update(1.0);
        assert!(skates.advisory());

        skates.update(1.01);
        assert!(!skates.advisory());

        skates.update(0.0);
        assert!(skates.advisory());
    }

    #[test]
    fn test_cross_country_thresholds() {
        let mut skis = CrossCountrySkiing::new();

        skis.update(8.0);
        assert!(skis.advisory());

        skis.update(8.5);
        assert!(!skis.advisory());
        assert_eq!(skis.decide(), skis.no_go_message());
    }

    #[test]
    fn test_nan_never_advises() {
        let mut board = Snowboard::new();
        let mut skates = IceSkating::new();
        let mut skis = CrossCountrySkiing::new();

        for observer in [
            &mut board as &mut dyn Observer,
            &mut skates as &mut dyn Observer,
            &mut skis as &mut dyn Observer,
        ] {
            observer.update(0.5);
            observer.update(f64::NAN);
            assert!(!observer.advisory(), "{} advised on NaN", observer.name());
            assert!(observer.last_reading().is_some_and(f64::is_nan));
        }
    }

    #[test]
    fn test_infinite_and_negative_readings() {
        let mut board = Snowboard::new();
        let mut skates = IceSkating::new();
        let mut skis = CrossCountrySkiing::new();

        board.update(f64::INFINITY);
        skates.update(f64::INFINITY);
        skis.update(f64::INFINITY);
        assert!(board.advisory());
        assert!(!skates.advisory());
        assert!(!skis.advisory());

        board.update(f64::NEG_INFINITY);
        skates.update(f64::NEG_INFINITY);
        skis.update(f64::NEG_INFINITY);
        assert!(!board.advisory());
        assert!(skates.advisory());
        assert!(skis.advisory());

        skates.update(-3.0);
        assert_eq!(skates.last_reading(), Some(-3.0));
        assert!(skates.advisory());
    }

    #[test]
    fn test_decide_has_no_side_effects() {
        let mut board = Snowboard::new();
        board.update(5.0);
        let before = board.clone();
        let _ = board.decide();
        let _ = board.decide();
        assert_eq!(board, before);
    }

    #[test]
    fn test_advisory_changes_only_through_update() {
        let board = ActivityKind::Snowboard.build();
        board.borrow_mut().update(0.5);

        let mut copy = board.borrow().state().clone();
        copy.apply(0.5, |_| true);
        assert!(copy.advisory());

        let board = board.borrow();
        assert_eq!(board.last_reading(), Some(0.5));
        assert!(!board.advisory());
        assert_eq!(board.decide(), board.no_go_message());
    }

    #[test]
    fn test_activity_kind_from_str() {
        assert_eq!(
            "snowboard".parse::<ActivityKind>().unwrap(),
            ActivityKind::Snowboard
        );
        assert_eq!(
            "Ice Skating".parse::<ActivityKind>().unwrap(),
            ActivityKind::IceSkating
        );
        assert_eq!(
            "cross_country_skiing".parse::<ActivityKind>().unwrap(),
            ActivityKind::CrossCountrySkiing
        );
        assert!(matches!(
            "curling".parse::<ActivityKind>(),
            Err(WatchError::UnknownActivity(name)) if name == "curling"
        ));
    }

    #[test]
    fn test_activity_kind_build_names() {
        let observers = ActivityKind::ALL.map(ActivityKind::build);
        let names: Vec<String> = observers
            .iter()
            .map(|o| o.borrow().name().to_string())
            .collect();
        assert_eq!(names, ["Snowboard", "Ice Skating", "Cross-Country Skiing"]);
    }
}
