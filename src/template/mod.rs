//! Template storage and per-scale planning.

use crate::geometry::Size;
use crate::image::resample::resize_u8_bilinear;
use crate::image::{ImageView, OwnedImage};
use crate::util::ScanResult;

mod plan;

pub use plan::TemplatePlan;

/// Owned template image in contiguous grayscale format.
#[derive(Clone, Debug)]
pub struct Template {
    img: OwnedImage,
}

impl Template {
    /// Creates a template from a contiguous grayscale buffer.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> ScanResult<Self> {
        let img = OwnedImage::new(data, width, height)?;
        Ok(Self { img })
    }

    pub fn from_image(img: OwnedImage) -> Self {
        Self { img }
    }

    pub fn view(&self) -> ImageView<'_, u8> {
        self.img.view()
    }

    /// Native template size.
    pub fn size(&self) -> Size {
        self.img.size()
    }

    /// Plans the template at `size`, resampling when it differs from the
    /// native size.
    pub fn plan_at(&self, size: Size) -> ScanResult<TemplatePlan> {
        if size == self.size() {
            return TemplatePlan::from_view(self.view());
        }
        let resized = resize_u8_bilinear(self.view(), size)?;
        TemplatePlan::from_view(resized.view())
    }
}
