use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Minutes};

/// Where to load the transit model from
#[derive(Debug, Clone)]
pub struct TransitModelConfig {
    /// JSON document with `base_requests` and `routing_settings`
    pub input_path: PathBuf,
}

/// Parameters of the routing graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Boarding delay at every stop, minutes
    pub bus_wait_time: Minutes,
    /// Bus speed, km/h
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Smallest accepted value of either setting
    pub const MIN_VALUE: f64 = 1.0;
    /// Largest accepted value of either setting
    pub const MAX_VALUE: f64 = 1000.0;

    /// # Errors
    ///
    /// Returns [`Error::InvalidRouteSettings`] if a value is out of range.
    pub fn new(bus_wait_time: Minutes, bus_velocity: f64) -> Result<Self, Error> {
        let settings = Self {
            bus_wait_time,
            bus_velocity,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidRouteSettings`] if a value is outside
    /// `[MIN_VALUE, MAX_VALUE]` or is not a number.
    pub fn validate(&self) -> Result<(), Error> {
        check_range("bus_wait_time", self.bus_wait_time)?;
        check_range("bus_velocity", self.bus_velocity)
    }
}

fn check_range(name: &str, value: f64) -> Result<(), Error> {
    if (RoutingSettings::MIN_VALUE..=RoutingSettings::MAX_VALUE).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidRouteSettings(format!(
            "{name} must be between {} and {}, got {value}",
            RoutingSettings::MIN_VALUE,
            RoutingSettings::MAX_VALUE
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(RoutingSettings::new(1.0, 1000.0).is_ok());
        assert!(RoutingSettings::new(1000.0, 1.0).is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for (wait, velocity) in [
            (0.0, 40.0),
            (6.0, 0.5),
            (1000.5, 40.0),
            (6.0, 2000.0),
            (-6.0, 40.0),
            (f64::NAN, 40.0),
            (6.0, f64::INFINITY),
        ] {
            let err = RoutingSettings::new(wait, velocity).unwrap_err();
            assert!(
                matches!(err, Error::InvalidRouteSettings(_)),
                "{wait} {velocity}: {err}"
            );
        }
    }

    #[test]
    fn error_names_the_setting() {
        let err = RoutingSettings::new(6.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("bus_velocity"));
    }
}
