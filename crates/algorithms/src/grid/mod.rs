//! Regular-grid partitioning and per-cell zonal statistics
//!
//! Pipeline: extent reading → grid construction → per-cell resolution
//! (vector intersection or raster pixel windows) → statistic aggregation
//! → assembly of populated cells into an output `FeatureCollection`.

pub mod aggregate;
pub mod builder;
pub mod extent;
pub mod partition;
pub mod progress;
pub mod resolve;
pub mod units;

pub use aggregate::{aggregate_features, summarize, Statistic};
pub use builder::{GridCell, GridSpec, DEFAULT_MAX_CELLS};
pub use extent::{raster_extent, vector_extent};
pub use partition::{
    partition_raster, partition_vector, PartitionParams, RasterGridPartition, VectorGridPartition,
};
pub use progress::PartitionEvent;
pub use resolve::{raster_window, VectorResolver};
pub use units::{SizeUnit, METERS_PER_DEGREE};
