//! Loading range frames through the `image` crate.
//!
//! Available with the `image-io` feature. Color inputs are reduced to 8-bit
//! luma; range frames written as gray RGB keep their values.

use crate::image::OwnedImage;
use crate::util::{PylonGridError, PylonGridResult};
use std::path::Path;

/// Loads a range frame from disk as an owned 8-bit buffer.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> PylonGridResult<OwnedImage> {
    let gray = image::open(path)
        .map_err(|err| PylonGridError::ImageIo {
            reason: err.to_string(),
        })?
        .into_luma8();
    let (width, height) = (gray.width() as usize, gray.height() as usize);
    OwnedImage::new(gray.into_raw(), width, height)
}
