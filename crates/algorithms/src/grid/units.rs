//! Cell size units and normalization

use serde::{Deserialize, Serialize};

/// Approximate meters per degree of longitude/latitude at the equator.
///
/// Degree cell sizes are normalized through this single constant
/// regardless of latitude. That matches the reference behavior and keeps
/// outputs reproducible; the approximation degrades away from the
/// equator.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Unit of a requested grid cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    Meters,
    Kilometers,
    Degrees,
}

impl SizeUnit {
    /// Normalize a cell size to meters (the grid's working unit)
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            SizeUnit::Meters => value,
            SizeUnit::Kilometers => value * 1000.0,
            SizeUnit::Degrees => value * METERS_PER_DEGREE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_passthrough() {
        assert_eq!(SizeUnit::Meters.to_meters(250.0), 250.0);
    }

    #[test]
    fn test_kilometers() {
        assert_eq!(SizeUnit::Kilometers.to_meters(1.0), 1000.0);
        assert_eq!(SizeUnit::Kilometers.to_meters(2.5), 2500.0);
    }

    #[test]
    fn test_degrees_equatorial_approximation() {
        assert_eq!(SizeUnit::Degrees.to_meters(1.0), 111_320.0);
    }
}
