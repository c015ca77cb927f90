//! Extent readers for vector and raster inputs
//!
//! Bounds are reported in the source's native coordinate reference;
//! nothing is reprojected.

use geo::BoundingRect;
use gridstat_core::{Error, Extent, FeatureCollection, RasterStack, Result};

/// Tightest axis-aligned bounding box over all feature geometries.
///
/// Fails with `EmptyDataset` when no feature carries a geometry or when
/// the combined bounds enclose no area (e.g. a single point), since no
/// grid can be built over a degenerate extent.
pub fn vector_extent(collection: &FeatureCollection) -> Result<Extent> {
    let mut acc: Option<Extent> = None;

    for feature in collection.iter() {
        let Some(geometry) = &feature.geometry else {
            continue;
        };
        if let Some(rect) = geometry.bounding_rect() {
            let bounds = Extent::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y);
            acc = Some(match acc {
                Some(total) => total.union(&bounds),
                None => bounds,
            });
        }
    }

    let extent =
        acc.ok_or_else(|| Error::empty_dataset("vector dataset has no features with geometry"))?;

    if extent.is_degenerate() {
        return Err(Error::empty_dataset(format!(
            "vector dataset has zero extent: X({}~{}), Y({}~{})",
            extent.min_x, extent.max_x, extent.min_y, extent.max_y
        )));
    }

    Ok(extent)
}

/// Bounding box of a raster stack, computed from the affine transform
/// and pixel dimensions.
pub fn raster_extent(stack: &RasterStack) -> Result<Extent> {
    let (rows, cols) = stack.shape();
    if rows == 0 || cols == 0 {
        return Err(Error::empty_dataset("raster has zero pixels"));
    }

    let extent = stack.transform().bounds(cols, rows);
    if extent.is_degenerate() {
        return Err(Error::empty_dataset("raster has zero extent"));
    }

    Ok(extent)
}
