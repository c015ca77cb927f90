//! Single-band raster type

use crate::crs::CRS;
use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::raster::GeoTransform;
use ndarray::{s, Array2, ArrayView2};

/// A georeferenced single-band raster.
///
/// Values are stored as `f64` in row-major order with associated
/// geographic metadata (transform and CRS). Missing data is either NaN
/// or an explicit no-data value.
#[derive(Debug, Clone)]
pub struct Raster {
    /// Band data stored as (row, col)
    data: Array2<f64>,
    /// Affine transformation
    transform: GeoTransform,
    /// Coordinate reference system
    crs: Option<CRS>,
    /// No-data value (NaN is always treated as missing)
    nodata: Option<f64>,
}

impl Raster {
    /// Create a new raster filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
            transform: GeoTransform::default(),
            crs: None,
            nodata: None,
        }
    }

    /// Create a new raster filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
            transform: GeoTransform::default(),
            crs: None,
            nodata: None,
        }
    }

    /// Create a raster from existing row-major data
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self {
            data: array,
            transform: GeoTransform::default(),
            crs: None,
            nodata: None,
        })
    }

    /// Create a raster from an ndarray
    pub fn from_array(data: Array2<f64>) -> Self {
        Self {
            data,
            transform: GeoTransform::default(),
            crs: None,
            nodata: None,
        }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the raster is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Get a rectangular sub-view of the band.
    ///
    /// Row/column ranges are half-open pixel index ranges.
    pub fn window(
        &self,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
    ) -> Result<ArrayView2<'_, f64>> {
        if rows.end > self.rows() || cols.end > self.cols() {
            return Err(Error::IndexOutOfBounds {
                row: rows.end,
                col: cols.end,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.data.slice(s![rows, cols]))
    }

    // Metadata

    /// Get the geotransform
    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    /// Set the geotransform
    pub fn set_transform(&mut self, transform: GeoTransform) {
        self.transform = transform;
    }

    /// Get the CRS
    pub fn crs(&self) -> Option<&CRS> {
        self.crs.as_ref()
    }

    /// Set the CRS
    pub fn set_crs(&mut self, crs: Option<CRS>) {
        self.crs = crs;
    }

    /// Get the no-data value
    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    /// Set the no-data value
    pub fn set_nodata(&mut self, nodata: Option<f64>) {
        self.nodata = nodata;
    }

    /// Geographic bounds computed from the transform and dimensions
    pub fn bounds(&self) -> Extent {
        self.transform.bounds(self.cols(), self.rows())
    }

    /// Check if a value is missing (NaN or equal to the no-data value)
    pub fn is_nodata(&self, value: f64) -> bool {
        if value.is_nan() {
            return true;
        }
        match self.nodata {
            Some(nd) => (value - nd).abs() < f64::EPSILON * 100.0,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 200);
        assert_eq!(raster.rows(), 100);
        assert_eq!(raster.cols(), 200);
        assert_eq!(raster.shape(), (100, 200));
    }

    #[test]
    fn test_raster_access() {
        let mut raster = Raster::new(10, 10);
        raster.set(5, 5, 42.0).unwrap();
        assert_eq!(raster.get(5, 5).unwrap(), 42.0);
        assert!(raster.get(10, 0).is_err());
    }

    #[test]
    fn test_window() {
        let mut raster = Raster::new(4, 4);
        for row in 0..4 {
            for col in 0..4 {
                raster.set(row, col, (row * 4 + col) as f64).unwrap();
            }
        }

        let w = raster.window(1..3, 2..4).unwrap();
        assert_eq!(w.dim(), (2, 2));
        assert_eq!(w[(0, 0)], 6.0);
        assert_eq!(w[(1, 1)], 11.0);

        assert!(raster.window(0..5, 0..4).is_err());
    }

    #[test]
    fn test_is_nodata() {
        let mut raster = Raster::new(2, 2);
        assert!(raster.is_nodata(f64::NAN));
        assert!(!raster.is_nodata(-9999.0));

        raster.set_nodata(Some(-9999.0));
        assert!(raster.is_nodata(-9999.0));
        assert!(!raster.is_nodata(0.0));
    }

    #[test]
    fn test_bounds_from_transform() {
        let mut raster = Raster::new(10, 20);
        raster.set_transform(GeoTransform::new(100.0, 50.0, 2.0, -1.0));
        let b = raster.bounds();
        assert_eq!(b.min_x, 100.0);
        assert_eq!(b.max_x, 140.0);
        assert_eq!(b.max_y, 50.0);
        assert_eq!(b.min_y, 40.0);
    }
}
