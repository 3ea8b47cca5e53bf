//! Axis-aligned rectangles and window sizes in pixel coordinates.

use crate::util::{ScanError, ScanResult};

/// Width and height of a scanning sub-window (one scale).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Square window of side `side`.
    pub const fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    /// Returns `true` when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub(crate) fn ensure_non_empty(self) -> ScanResult<Self> {
        if self.is_empty() {
            return Err(ScanError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
///
/// Used both for the region of interest of a scan and for the individual
/// sub-windows handed to evaluators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at `(x, y)` with the given size.
    pub const fn at(x: usize, y: usize, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    /// Rectangle covering a whole `size`-sized image.
    pub const fn full(size: Size) -> Self {
        Self::at(0, 0, size)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Returns `true` when `other` lies fully inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Checks that the rectangle is non-empty and fits in a `bounds`-sized image.
    pub fn validate_within(&self, bounds: Size) -> ScanResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ScanError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let out_of_bounds = ScanError::RoiOutOfBounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            img_width: bounds.width,
            img_height: bounds.height,
        };
        let end_x = self.x.checked_add(self.width).ok_or(out_of_bounds.clone())?;
        let end_y = self.y.checked_add(self.height).ok_or(out_of_bounds.clone())?;
        if end_x > bounds.width || end_y > bounds.height {
            return Err(out_of_bounds);
        }
        Ok(())
    }
}
