//! Grayscale image buffers and zero-copy views.
//!
//! `ImageView` borrows a 1D buffer with an explicit row stride (elements between
//! consecutive row starts), so padded rows and ROI crops share the parent
//! buffer. `OwnedImage` is the contiguous owning counterpart.

use crate::geometry::{Rect, Size};
use crate::util::{ScanError, ScanResult};

pub mod integral;
#[cfg(feature = "image-io")]
pub mod io;
pub mod resample;

pub use integral::IntegralImage;

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> ScanResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> ScanResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(ScanError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Image dimensions; this is what scans validate their ROI against.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx)
    }

    /// Returns row `y` without the stride padding.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Zero-copy crop sharing the parent buffer and stride.
    pub fn crop(&self, rect: Rect) -> ScanResult<ImageView<'a, T>> {
        rect.validate_within(self.size())?;
        let start = rect.y * self.stride + rect.x;
        let data = self.data.get(start..).ok_or(ScanError::BufferTooSmall {
            needed: start.saturating_add(1),
            got: self.data.len(),
        })?;
        ImageView::new(data, rect.width, rect.height, self.stride)
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> ScanResult<usize> {
    if width == 0 || height == 0 {
        return Err(ScanError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(ScanError::InvalidStride { width, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(ScanError::InvalidDimensions { width, height })
}

/// Owned contiguous grayscale image.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl OwnedImage {
    /// Wraps a row-major buffer of `width * height` pixels; extra trailing
    /// elements are dropped.
    pub fn new(mut data: Vec<u8>, width: usize, height: usize) -> ScanResult<Self> {
        let needed = required_len(width, height, width)?;
        if data.len() < needed {
            return Err(ScanError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        data.truncate(needed);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn view(&self) -> ImageView<'_, u8> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Copies `rect` out of `src` into a contiguous image.
    pub fn from_crop(src: ImageView<'_, u8>, rect: Rect) -> ScanResult<Self> {
        let crop = src.crop(rect)?;
        let mut data = Vec::with_capacity(rect.width * rect.height);
        for y in 0..rect.height {
            if let Some(row) = crop.row(y) {
                data.extend_from_slice(row);
            }
        }
        Self::new(data, rect.width, rect.height)
    }
}
