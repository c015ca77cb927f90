//! Per-cell resolution of source data
//!
//! Vector cells resolve to the features whose geometry intersects the
//! cell rectangle; raster cells resolve to a pixel window sliced from the
//! band via the inverse affine transform.

use geo::{BoundingRect, Intersects};
use gridstat_core::{Extent, Feature, FeatureCollection, GeoTransform, Raster};
use ndarray::ArrayView2;
use std::ops::Range;

/// Resolves grid cells against a fixed feature set.
///
/// Every cell is tested against every feature (no spatial index), but a
/// precomputed per-feature bounding box short-circuits the exact
/// intersection test. Purely read-only, safe to share across threads.
pub struct VectorResolver<'a> {
    features: &'a [Feature],
    bounds: Vec<Option<Extent>>,
}

impl<'a> VectorResolver<'a> {
    pub fn new(collection: &'a FeatureCollection) -> Self {
        let bounds = collection
            .iter()
            .map(|feature| {
                feature.geometry.as_ref().and_then(|g| {
                    g.bounding_rect()
                        .map(|r| Extent::new(r.min().x, r.min().y, r.max().x, r.max().y))
                })
            })
            .collect();

        Self {
            features: &collection.features,
            bounds,
        }
    }

    /// Features whose geometry intersects the cell rectangle.
    ///
    /// Full geometric intersection, boundary contact included — a point
    /// on a cell edge belongs to every cell sharing that edge.
    pub fn resolve(&self, cell: &Extent) -> Vec<&'a Feature> {
        let cell_poly = cell.to_polygon();

        self.features
            .iter()
            .zip(&self.bounds)
            .filter_map(|(feature, bbox)| {
                let bbox = (*bbox)?;
                if !bbox.intersects(cell) {
                    return None;
                }
                let geometry = feature.geometry.as_ref()?;
                cell_poly.intersects(geometry).then_some(feature)
            })
            .collect()
    }
}

/// Pixel index ranges covered by a cell, clipped to the band dimensions.
///
/// Cell corners go through the inverse transform and floor to integer
/// indices; the cell's top edge maps to the start row (`pixel_height` is
/// negative). Returns `None` when the clipped range is empty or the
/// transform is degenerate.
fn window_ranges(
    transform: &GeoTransform,
    rows: usize,
    cols: usize,
    cell: &Extent,
) -> Option<(Range<usize>, Range<usize>)> {
    let (col_start, row_start) = transform.geo_to_pixel(cell.min_x, cell.max_y);
    let (col_end, row_end) = transform.geo_to_pixel(cell.max_x, cell.min_y);

    if col_start.is_nan() || col_end.is_nan() || row_start.is_nan() || row_end.is_nan() {
        return None;
    }

    let clamp = |v: f64, n: usize| -> usize {
        let floored = v.floor();
        if floored <= 0.0 {
            0
        } else if floored >= n as f64 {
            n
        } else {
            floored as usize
        }
    };

    let col_range = clamp(col_start, cols)..clamp(col_end, cols);
    let row_range = clamp(row_start, rows)..clamp(row_end, rows);

    if col_range.is_empty() || row_range.is_empty() {
        return None;
    }

    Some((row_range, col_range))
}

/// The sub-array of pixels a cell covers, or `None` when the cell lies
/// outside the raster (it is then dropped from the output).
pub fn raster_window<'a>(band: &'a Raster, cell: &Extent) -> Option<ArrayView2<'a, f64>> {
    let (rows, cols) = band.shape();
    let (row_range, col_range) = window_ranges(band.transform(), rows, cols, cell)?;
    // Ranges are already clipped to the band shape
    band.window(row_range, col_range).ok()
}
