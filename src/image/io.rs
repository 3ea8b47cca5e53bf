//! Adapters from the `image` crate to winscan buffers.
//!
//! Available with the `image-io` feature. Decoding itself stays with `image`.

use crate::image::OwnedImage;
use crate::util::{ScanError, ScanResult};
use std::path::Path;

/// Converts any decoded image to an owned 8-bit grayscale image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> ScanResult<OwnedImage> {
    let gray = img.to_luma8();
    let (width, height) = (gray.width() as usize, gray.height() as usize);
    OwnedImage::new(gray.into_raw(), width, height)
}

/// Decodes an image file and converts it to grayscale.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> ScanResult<OwnedImage> {
    let img = image::open(path).map_err(|err| ScanError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}
