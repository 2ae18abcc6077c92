//! PylonGrid locates human heads in range (depth) images.
//!
//! A fixed grid of probes ("pylons") samples the range image, optionally
//! through a histogram quantile filter. Probes that are not local range
//! minima are discarded by a flood fill, and the surviving probes are merged
//! into one [`Head`] per 4-connected group.
//!
//! ```no_run
//! use pylongrid::{Detector, DetectorConfig, FilterConfig, ImageView};
//!
//! # fn main() -> pylongrid::PylonGridResult<()> {
//! let (width, height) = (320, 240);
//! let range = vec![128u8; width * height];
//! let config = DetectorConfig {
//!     step: 5,
//!     filter: Some(FilterConfig { radius: 7, quantile: 0.2, step: 2 }),
//! };
//! let mut detector = Detector::new(width, height, config)?;
//! for head in detector.detect(ImageView::from_slice(&range, width, height)?)? {
//!     println!("{head}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod detector;
pub mod filter;
mod grid;
mod head;
pub mod image;
pub mod lowlevel;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use image::io;

#[cfg(feature = "rayon")]
pub use detector::par_detect_frames;
pub use detector::{Detector, DetectorConfig, HeadDetector};
pub use filter::{FilterConfig, PassThroughFilter, PixelFilter, QuantileFilter};
pub use head::Head;
pub use image::{ImageView, OwnedImage};
pub use util::{PylonGridError, PylonGridResult};
