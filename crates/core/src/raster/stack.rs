//! Multi-band raster container

use crate::crs::CRS;
use crate::error::{Error, Result};
use crate::raster::{GeoTransform, Raster};

/// An ordered set of co-registered raster bands.
///
/// All bands share one shape, transform and CRS (taken from the first
/// band). Band indices are 1-based, matching common raster formats.
#[derive(Debug, Clone)]
pub struct RasterStack {
    bands: Vec<Raster>,
}

impl RasterStack {
    /// Create a stack from bands, validating co-registration
    pub fn new(bands: Vec<Raster>) -> Result<Self> {
        let first = bands
            .first()
            .ok_or_else(|| Error::empty_dataset("raster stack has no bands"))?;
        let (er, ec) = first.shape();

        for band in &bands[1..] {
            let (ar, ac) = band.shape();
            if (ar, ac) != (er, ec) {
                return Err(Error::SizeMismatch { er, ec, ar, ac });
            }
        }

        Ok(Self { bands })
    }

    /// Number of bands
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Get a band by 1-based index
    pub fn band(&self, index: usize) -> Result<&Raster> {
        if index == 0 || index > self.bands.len() {
            return Err(Error::BandOutOfRange {
                index,
                count: self.bands.len(),
            });
        }
        Ok(&self.bands[index - 1])
    }

    /// Shape shared by all bands, as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.bands[0].shape()
    }

    /// Shared geotransform
    pub fn transform(&self) -> &GeoTransform {
        self.bands[0].transform()
    }

    /// Shared CRS
    pub fn crs(&self) -> Option<&CRS> {
        self.bands[0].crs()
    }
}

impl From<Raster> for RasterStack {
    fn from(band: Raster) -> Self {
        Self { bands: vec![band] }
    }
}
