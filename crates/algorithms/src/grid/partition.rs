//! Partition pipelines for vector and raster inputs
//!
//! One linear pass: read extent → build grid → resolve and aggregate
//! each cell → assemble populated cells. Cells are independent, so grid
//! rows run through `maybe_rayon`; the ordered collect restores
//! row-major output order regardless of scheduling.

use crossbeam_channel::Sender;
use geo_types::Geometry;
use gridstat_core::{
    Algorithm, AttributeValue, Error, Feature, FeatureCollection, RasterStack, Result,
};

use crate::grid::aggregate::{aggregate_features, summarize, Statistic};
use crate::grid::builder::{GridSpec, DEFAULT_MAX_CELLS};
use crate::grid::extent::{raster_extent, vector_extent};
use crate::grid::progress::{PartitionEvent, Reporter};
use crate::grid::resolve::{raster_window, VectorResolver};
use crate::grid::units::SizeUnit;
use crate::maybe_rayon::*;

/// Attribute name carrying the per-band statistic in raster output
pub const RASTER_VALUE_FIELD: &str = "value";

/// Caller-supplied configuration for a partition pass
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PartitionParams {
    /// Cell edge length, in `unit`
    pub cell_size: f64,
    /// Unit of `cell_size`; normalized to meters before grid construction
    pub unit: SizeUnit,
    /// Statistic aggregated per cell
    pub statistic: Statistic,
    /// Vector only: copy the first intersecting feature's attributes
    /// verbatim instead of aggregating
    pub keep_original_attributes: bool,
    /// Raster only: 1-based band to aggregate
    pub band_index: usize,
    /// Safety ceiling for `rows * cols`
    pub max_cells: usize,
}

impl Default for PartitionParams {
    fn default() -> Self {
        Self {
            cell_size: 1000.0,
            unit: SizeUnit::Meters,
            statistic: Statistic::Mean,
            keep_original_attributes: false,
            band_index: 1,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl PartitionParams {
    fn grid_over(&self, extent: gridstat_core::Extent) -> Result<GridSpec> {
        let normalized = self.unit.to_meters(self.cell_size);
        GridSpec::build(extent, normalized, self.max_cells)
    }
}

/// Sorted union of attribute names across a collection.
///
/// A fixed schema keeps output records uniform and the pass
/// deterministic even when features carry different field sets.
fn attribute_schema(collection: &FeatureCollection) -> Vec<String> {
    let mut fields: Vec<String> = collection
        .iter()
        .flat_map(|f| f.properties.keys().cloned())
        .collect();
    fields.sort();
    fields.dedup();
    fields
}

fn cell_feature(
    bounds: gridstat_core::Extent,
    properties: std::collections::HashMap<String, AttributeValue>,
) -> Feature {
    let mut feature = Feature::new(Geometry::Polygon(bounds.to_polygon()));
    feature.properties = properties;
    feature
}

/// Partition a vector dataset into a regular grid with per-cell
/// attribute statistics.
///
/// Output contains one polygon feature per cell with at least one
/// intersecting source feature, in row-major cell order, with the source
/// CRS propagated. Cells with no intersecting features are dropped.
pub fn partition_vector(
    source: &FeatureCollection,
    params: &PartitionParams,
    events: Option<&Sender<PartitionEvent>>,
) -> Result<FeatureCollection> {
    if !(params.cell_size > 0.0) {
        return Err(Error::InvalidCellSize {
            value: params.cell_size,
        });
    }

    let extent = vector_extent(source)?;
    let grid = params.grid_over(extent)?;

    let reporter = Reporter::new(events, grid.cell_count());
    reporter.message(format!(
        "dataset bounds: X({:.2}~{:.2}), Y({:.2}~{:.2})",
        extent.min_x, extent.max_x, extent.min_y, extent.max_y
    ));
    reporter.message(format!(
        "grid will be {} rows x {} cols ({} cells)",
        grid.rows(),
        grid.cols(),
        grid.cell_count()
    ));

    let resolver = VectorResolver::new(source);
    let schema = attribute_schema(source);

    let features: Vec<Feature> = (0..grid.rows())
        .into_par_iter()
        .flat_map(|row| {
            let mut populated = Vec::new();
            for col in 0..grid.cols() {
                let cell = grid.cell(row, col);
                let hits = resolver.resolve(&cell.bounds);
                if !hits.is_empty() {
                    let properties = aggregate_features(
                        &hits,
                        &schema,
                        params.statistic,
                        params.keep_original_attributes,
                    );
                    populated.push(cell_feature(cell.bounds, properties));
                }
                reporter.cell_done();
            }
            populated
        })
        .collect();

    reporter.message(format!("grid partition produced {} populated cells", features.len()));

    let mut output = FeatureCollection::new();
    output.features = features;
    output.set_crs(source.crs().cloned());
    Ok(output)
}

/// Partition a raster band into a regular grid with per-cell pixel
/// statistics.
///
/// Each populated cell carries a single `"value"` attribute with the
/// statistic over its valid (non-NaN, non-nodata) pixels; cells whose
/// window is empty or all-missing are dropped.
pub fn partition_raster(
    source: &RasterStack,
    params: &PartitionParams,
    events: Option<&Sender<PartitionEvent>>,
) -> Result<FeatureCollection> {
    if !(params.cell_size > 0.0) {
        return Err(Error::InvalidCellSize {
            value: params.cell_size,
        });
    }

    let extent = raster_extent(source)?;
    let grid = params.grid_over(extent)?;
    let band = source.band(params.band_index)?;

    let reporter = Reporter::new(events, grid.cell_count());
    reporter.message(format!(
        "dataset bounds: X({:.2}~{:.2}), Y({:.2}~{:.2})",
        extent.min_x, extent.max_x, extent.min_y, extent.max_y
    ));
    reporter.message(format!(
        "grid will be {} rows x {} cols ({} cells)",
        grid.rows(),
        grid.cols(),
        grid.cell_count()
    ));

    let features: Vec<Feature> = (0..grid.rows())
        .into_par_iter()
        .flat_map(|row| {
            let mut populated = Vec::new();
            for col in 0..grid.cols() {
                let cell = grid.cell(row, col);
                if let Some(window) = raster_window(band, &cell.bounds) {
                    let mut valid: Vec<f64> = window
                        .iter()
                        .copied()
                        .filter(|v| !band.is_nodata(*v))
                        .collect();

                    // Pixel statistics use population std (ddof 0)
                    if let Some(value) = summarize(&mut valid, params.statistic, 0) {
                        let attribute = if params.statistic == Statistic::Count {
                            AttributeValue::Int(value as i64)
                        } else {
                            AttributeValue::Float(value)
                        };
                        let mut properties = std::collections::HashMap::with_capacity(1);
                        properties.insert(RASTER_VALUE_FIELD.to_string(), attribute);
                        populated.push(cell_feature(cell.bounds, properties));
                    }
                }
                reporter.cell_done();
            }
            populated
        })
        .collect();

    reporter.message(format!("grid partition produced {} populated cells", features.len()));

    let mut output = FeatureCollection::new();
    output.features = features;
    output.set_crs(source.crs().cloned());
    Ok(output)
}

/// Vector grid partition as an `Algorithm`
#[derive(Debug, Clone, Default)]
pub struct VectorGridPartition;

impl Algorithm for VectorGridPartition {
    type Input = FeatureCollection;
    type Output = FeatureCollection;
    type Params = PartitionParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "VectorGridPartition"
    }

    fn description(&self) -> &'static str {
        "Overlay a regular grid on a vector dataset and aggregate attribute statistics per cell"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        partition_vector(&input, &params, None)
    }
}

/// Raster grid partition as an `Algorithm`
#[derive(Debug, Clone, Default)]
pub struct RasterGridPartition;

impl Algorithm for RasterGridPartition {
    type Input = RasterStack;
    type Output = FeatureCollection;
    type Params = PartitionParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "RasterGridPartition"
    }

    fn description(&self) -> &'static str {
        "Overlay a regular grid on a raster band and aggregate pixel statistics per cell"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        partition_raster(&input, &params, None)
    }
}
