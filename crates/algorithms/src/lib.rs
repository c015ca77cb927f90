//! # GridStat Algorithms
//!
//! Grid partitioning and zonal statistics for GridStat.
//!
//! The `grid` module overlays a regular grid on a vector or raster
//! dataset, resolves the source data intersecting each cell, and
//! aggregates a configured statistic per cell into an output
//! `FeatureCollection` of populated cells.

pub mod grid;
pub mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::grid::{
        partition_raster, partition_vector, raster_extent, vector_extent, GridCell, GridSpec,
        PartitionEvent, PartitionParams, RasterGridPartition, SizeUnit, Statistic,
        VectorGridPartition, DEFAULT_MAX_CELLS,
    };
    pub use gridstat_core::prelude::*;
}
