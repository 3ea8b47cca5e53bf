//! Zero-mean template statistics for correlation scoring.

use crate::geometry::Size;
use crate::image::ImageView;
use crate::util::{ScanError, ScanResult};

/// Template resampled to one scale, with precomputed ZNCC terms.
pub struct TemplatePlan {
    size: Size,
    energy: f64,
    zero_mean: Vec<f32>,
}

impl TemplatePlan {
    /// Builds a plan from a template view.
    ///
    /// Flat templates are rejected because their correlation is undefined.
    pub fn from_view(tpl: ImageView<'_, u8>) -> ScanResult<Self> {
        let size = tpl.size();
        let count = size.area();

        let mut sum = 0.0f64;
        for y in 0..size.height {
            let row = tpl.row(y).ok_or(ScanError::BufferTooSmall {
                needed: (y + 1) * tpl.stride(),
                got: count,
            })?;
            sum += row.iter().map(|&v| v as f64).sum::<f64>();
        }
        let mean = sum / count as f64;

        let mut zero_mean = Vec::with_capacity(count);
        let mut energy = 0.0f64;
        for y in 0..size.height {
            if let Some(row) = tpl.row(y) {
                for &value in row {
                    let centered = value as f64 - mean;
                    energy += centered * centered;
                    zero_mean.push(centered as f32);
                }
            }
        }

        if energy / count as f64 <= 1e-8 {
            return Err(ScanError::DegenerateTemplate {
                reason: "zero variance",
            });
        }

        Ok(Self {
            size,
            energy,
            zero_mean,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Sum of squared zero-mean values.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Zero-mean template values in row-major order.
    pub fn zero_mean(&self) -> &[f32] {
        &self.zero_mean
    }
}
