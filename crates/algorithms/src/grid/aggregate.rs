//! Per-cell statistic aggregation
//!
//! One scalar per attribute (vector) or per band (raster), computed over
//! the non-missing values a cell resolved to. Fields that cannot produce
//! a value degrade to `AttributeValue::Unavailable` instead of failing
//! the pass.

use gridstat_core::{AttributeValue, Feature};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Available per-cell statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    #[default]
    Mean,
    Sum,
    Max,
    Min,
    Count,
    Std,
    Median,
}

/// Compute one statistic over a set of values.
///
/// `ddof` is the delta degrees of freedom for `Std`: 0 for population
/// standard deviation (raster pixels), 1 for sample standard deviation
/// (vector attributes, matching tabular-statistics convention). Returns
/// `None` for an empty set or an undefined statistic (std with
/// `n <= ddof`).
pub fn summarize(values: &mut [f64], statistic: Statistic, ddof: usize) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    match statistic {
        Statistic::Count => Some(n as f64),
        Statistic::Sum => Some(values.iter().sum()),
        Statistic::Mean => Some(values.iter().sum::<f64>() / n as f64),
        Statistic::Min => values
            .iter()
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v)))),
        Statistic::Max => values
            .iter()
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v)))),
        Statistic::Std => {
            if n <= ddof {
                return None;
            }
            let mean = values.iter().sum::<f64>() / n as f64;
            let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>()
                / (n - ddof) as f64;
            Some(var.sqrt())
        }
        Statistic::Median => {
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            Some(if n % 2 == 0 {
                (values[n / 2 - 1] + values[n / 2]) / 2.0
            } else {
                values[n / 2]
            })
        }
    }
}

/// Aggregate one field across the intersecting features.
///
/// All-numeric values aggregate under the statistic; any non-numeric
/// value demotes the field to "first intersecting value"; a field with
/// no usable values becomes `Unavailable`.
fn aggregate_field(features: &[&Feature], field: &str, statistic: Statistic) -> AttributeValue {
    let mut numeric: Vec<f64> = Vec::new();
    let mut first_present: Option<&AttributeValue> = None;
    let mut non_numeric = false;

    for feature in features {
        let Some(value) = feature.properties.get(field) else {
            continue;
        };
        if value.is_missing() {
            continue;
        }
        if first_present.is_none() {
            first_present = Some(value);
        }
        match value.as_f64() {
            Some(v) => numeric.push(v),
            None => non_numeric = true,
        }
    }

    if non_numeric {
        return first_present
            .cloned()
            .unwrap_or(AttributeValue::Unavailable);
    }
    if numeric.is_empty() {
        return AttributeValue::Unavailable;
    }

    match summarize(&mut numeric, statistic, 1) {
        Some(v) if statistic == Statistic::Count => AttributeValue::Int(v as i64),
        Some(v) => AttributeValue::Float(v),
        None => AttributeValue::Unavailable,
    }
}

/// Build the attribute map for one populated cell.
///
/// `schema` is the ordered union of field names across the source
/// collection. In keep-original mode every field is copied verbatim from
/// the first intersecting feature; otherwise each field aggregates under
/// `statistic`. The caller guarantees `features` is non-empty.
pub fn aggregate_features(
    features: &[&Feature],
    schema: &[String],
    statistic: Statistic,
    keep_original: bool,
) -> HashMap<String, AttributeValue> {
    let mut out = HashMap::with_capacity(schema.len());

    for field in schema {
        let value = if keep_original {
            features[0]
                .properties
                .get(field)
                .cloned()
                .unwrap_or(AttributeValue::Unavailable)
        } else {
            aggregate_field(features, field, statistic)
        };
        out.insert(field.clone(), value);
    }

    out
}
