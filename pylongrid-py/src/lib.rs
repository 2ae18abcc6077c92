//! Python bindings for the pylongrid head detector.

use numpy::{PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use ::pylongrid::{
    Detector as RustDetector, DetectorConfig, FilterConfig, Head as RustHead, ImageView,
    PylonGridError,
};

fn to_py_err(err: PylonGridError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn filter_config(radius: Option<usize>, quantile: f64, filter_step: usize) -> Option<FilterConfig> {
    radius.map(|radius| FilterConfig {
        radius,
        quantile,
        step: filter_step,
    })
}

/// Detected head: range and center in image coordinates.
#[pyclass(frozen)]
#[derive(Clone)]
pub struct Head {
    #[pyo3(get)]
    pub range: u8,
    #[pyo3(get)]
    pub center_x: usize,
    #[pyo3(get)]
    pub center_y: usize,
}

#[pymethods]
impl Head {
    fn __repr__(&self) -> String {
        format!(
            "Head(range={}, center_x={}, center_y={})",
            self.range, self.center_x, self.center_y
        )
    }
}

impl From<RustHead> for Head {
    fn from(head: RustHead) -> Self {
        Self {
            range: head.range,
            center_x: head.center_x,
            center_y: head.center_y,
        }
    }
}

/// Head detector bound to one image size.
#[pyclass]
pub struct Detector {
    inner: RustDetector,
}

#[pymethods]
impl Detector {
    /// Create a detector.
    ///
    /// Args:
    ///     width: Image width in pixels
    ///     height: Image height in pixels
    ///     step: Pixels between probes, at least 3 (default: 5)
    ///     radius: Quantile filter radius; None reads raw pixels (default: None)
    ///     quantile: Filter quantile in [0, 1] (default: 0.5)
    ///     filter_step: Sampling stride inside the filter kernel (default: 1)
    #[new]
    #[pyo3(signature = (width, height, step=5, radius=None, quantile=0.5, filter_step=1))]
    fn new(
        width: usize,
        height: usize,
        step: usize,
        radius: Option<usize>,
        quantile: f64,
        filter_step: usize,
    ) -> PyResult<Self> {
        let config = DetectorConfig {
            step,
            filter: filter_config(radius, quantile, filter_step),
        };
        let inner = RustDetector::new(width, height, config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Detect heads in a range image.
    ///
    /// Args:
    ///     image: 2D uint8 numpy array (height x width)
    ///
    /// Returns:
    ///     List of Head objects in row-major order
    fn detect(&mut self, image: PyReadonlyArray2<'_, u8>) -> PyResult<Vec<Head>> {
        let shape = image.shape();
        let (height, width) = (shape[0], shape[1]);
        let data = image.as_slice()?;
        let view = ImageView::from_slice(data, width, height).map_err(to_py_err)?;
        let heads = self.inner.detect(view).map_err(to_py_err)?;
        Ok(heads.into_iter().map(Head::from).collect())
    }

    /// Grid size as (rows, cols).
    #[getter]
    fn grid_shape(&self) -> (usize, usize) {
        let grid = self.inner.grid();
        (grid.rows(), grid.cols())
    }

    fn __repr__(&self) -> String {
        let grid = self.inner.grid();
        format!(
            "Detector({}x{}, step={}, filter_radius={})",
            grid.width(),
            grid.height(),
            grid.step(),
            self.inner.filter().radius()
        )
    }
}

/// One-shot detection; builds a detector sized to the image.
///
/// Args:
///     image: 2D uint8 numpy array (height x width)
///     step: Pixels between probes (default: 5)
///     radius: Quantile filter radius; None reads raw pixels (default: None)
///     quantile: Filter quantile in [0, 1] (default: 0.5)
///     filter_step: Sampling stride inside the filter kernel (default: 1)
#[pyfunction]
#[pyo3(signature = (image, step=5, radius=None, quantile=0.5, filter_step=1))]
fn detect_heads(
    image: PyReadonlyArray2<'_, u8>,
    step: usize,
    radius: Option<usize>,
    quantile: f64,
    filter_step: usize,
) -> PyResult<Vec<Head>> {
    let shape = image.shape();
    let (height, width) = (shape[0], shape[1]);
    let mut detector = Detector::new(width, height, step, radius, quantile, filter_step)?;
    detector.detect(image)
}

/// Python module for pylongrid head detection.
#[pymodule]
fn _pylongrid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Head>()?;
    m.add_class::<Detector>()?;
    m.add_function(wrap_pyfunction!(detect_heads, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
