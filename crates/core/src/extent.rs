//! Axis-aligned extents in a dataset's native coordinate reference

use geo_types::{LineString, Polygon};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a dataset or grid cell.
///
/// Coordinates are in the native coordinate reference of the data they
/// describe; the extent itself carries no CRS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when the box encloses no area
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Closed-boundary rectangle intersection test
    pub fn intersects(&self, other: &Extent) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Smallest extent covering both `self` and `other`
    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Convert to a closed counter-clockwise polygon ring
    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (self.min_x, self.min_y),
                (self.max_x, self.min_y),
                (self.max_x, self.max_y),
                (self.min_x, self.max_y),
                (self.min_x, self.min_y),
            ]),
            vec![],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let e = Extent::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(e.width(), 10.0);
        assert_eq!(e.height(), 5.0);
        assert!(!e.is_degenerate());
    }

    #[test]
    fn test_degenerate_point_extent() {
        let e = Extent::new(2.0, 2.0, 2.0, 2.0);
        assert!(e.is_degenerate());
    }

    #[test]
    fn test_intersects() {
        let a = Extent::new(0.0, 0.0, 10.0, 10.0);
        let b = Extent::new(5.0, 5.0, 15.0, 15.0);
        let c = Extent::new(20.0, 20.0, 30.0, 30.0);
        let edge = Extent::new(10.0, 0.0, 20.0, 10.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        // Shared edges count as intersecting
        assert!(a.intersects(&edge));
    }

    #[test]
    fn test_union() {
        let a = Extent::new(0.0, 0.0, 5.0, 5.0);
        let b = Extent::new(3.0, -2.0, 8.0, 4.0);
        let u = a.union(&b);
        assert_eq!(u, Extent::new(0.0, -2.0, 8.0, 5.0));
    }

    #[test]
    fn test_to_polygon_closed_ring() {
        let e = Extent::new(1.0, 2.0, 5.0, 8.0);
        let poly = e.to_polygon();
        let coords = &poly.exterior().0;
        assert_eq!(coords.len(), 5);
        assert_eq!(coords.first(), coords.last());
    }
}
