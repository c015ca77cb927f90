//! Vector data structures: features, attributes, collections

use crate::crs::CRS;
use geo_types::Geometry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute value types.
///
/// `Unavailable` marks a field that could not be produced for a record
/// (e.g. a numeric statistic requested over values that do not coerce to
/// numbers). It is a first-class value rather than an error so one bad
/// field never aborts a batch pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Unavailable,
}

impl AttributeValue {
    /// Numeric view of the value, if it has one.
    ///
    /// Booleans and strings are not coerced; a `Float(NaN)` still returns
    /// `Some(NaN)` and callers decide how to treat it.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Int(v) => Some(*v as f64),
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// True for values that carry no data (`Null`, `Unavailable`, NaN floats)
    pub fn is_missing(&self) -> bool {
        match self {
            AttributeValue::Null | AttributeValue::Unavailable => true,
            AttributeValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

/// A geographic feature with geometry and attributes
#[derive(Debug, Clone)]
pub struct Feature {
    /// Feature geometry
    pub geometry: Option<Geometry<f64>>,
    /// Feature attributes
    pub properties: HashMap<String, AttributeValue>,
}

impl Feature {
    /// Create a new feature with geometry
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self {
            geometry: Some(geometry),
            properties: HashMap::new(),
        }
    }

    /// Create a feature with no geometry
    pub fn empty() -> Self {
        Self {
            geometry: None,
            properties: HashMap::new(),
        }
    }

    /// Set an attribute
    pub fn set_property(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.properties.insert(key.into(), value);
    }

    /// Get an attribute
    pub fn get_property(&self, key: &str) -> Option<&AttributeValue> {
        self.properties.get(key)
    }
}

/// Collection of features sharing one coordinate reference
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    crs: Option<CRS>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
            crs: None,
        }
    }

    /// Create a collection with a known CRS
    pub fn with_crs(crs: CRS) -> Self {
        Self {
            features: Vec::new(),
            crs: Some(crs),
        }
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn crs(&self) -> Option<&CRS> {
        self.crs.as_ref()
    }

    pub fn set_crs(&mut self, crs: Option<CRS>) {
        self.crs = crs;
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_attribute_as_f64() {
        assert_eq!(AttributeValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(AttributeValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(AttributeValue::String("x".into()).as_f64(), None);
        assert_eq!(AttributeValue::Bool(true).as_f64(), None);
        assert_eq!(AttributeValue::Null.as_f64(), None);
    }

    #[test]
    fn test_attribute_is_missing() {
        assert!(AttributeValue::Null.is_missing());
        assert!(AttributeValue::Unavailable.is_missing());
        assert!(AttributeValue::Float(f64::NAN).is_missing());
        assert!(!AttributeValue::Float(0.0).is_missing());
        assert!(!AttributeValue::String(String::new()).is_missing());
    }

    #[test]
    fn test_collection_crs() {
        let mut fc = FeatureCollection::with_crs(CRS::from_epsg(32633));
        fc.push(Feature::new(Geometry::Point(Point::new(1.0, 2.0))));

        assert_eq!(fc.len(), 1);
        assert_eq!(fc.crs().and_then(|c| c.epsg()), Some(32633));
    }
}
