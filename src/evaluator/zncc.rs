//! Reference evaluator: zero-mean normalized cross-correlation against a
//! template, with variance-based pruning.

use crate::evaluator::{Evaluator, Verdict};
use crate::geometry::{Rect, Size};
use crate::image::{ImageView, IntegralImage};
use crate::template::{Template, TemplatePlan};
use crate::util::math::centered_sum_sq;
use crate::util::ScanResult;

/// Thresholds for [`ZnccEvaluator`].
#[derive(Clone, Copy, Debug)]
pub struct ZnccConfig {
    /// Minimum ZNCC score for acceptance, in `[-1, 1]`.
    pub min_score: f32,
    /// Windows with per-pixel intensity variance at or below this are pruned.
    pub min_variance: f32,
}

impl Default for ZnccConfig {
    fn default() -> Self {
        Self {
            min_score: 0.9,
            min_variance: 1e-3,
        }
    }
}

/// Scores windows by ZNCC against a template resampled to the current scale.
///
/// Accepted candidates carry `[window_mean, window_std]` as auxiliary data.
pub struct ZnccEvaluator<'a> {
    image: ImageView<'a, u8>,
    integral: IntegralImage,
    template: Template,
    plan: Option<TemplatePlan>,
    config: ZnccConfig,
}

impl<'a> ZnccEvaluator<'a> {
    pub fn new(image: ImageView<'a, u8>, template: Template) -> Self {
        Self {
            image,
            integral: IntegralImage::from_view(image),
            template,
            plan: None,
            config: ZnccConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ZnccConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ZnccConfig {
        &self.config
    }

    /// Size of the currently prepared template plan, if any.
    pub fn prepared_size(&self) -> Option<Size> {
        self.plan.as_ref().map(TemplatePlan::size)
    }

    fn correlate(&self, plan: &TemplatePlan, window: Rect) -> f64 {
        let t = plan.zero_mean();
        let mut dot = 0.0f64;
        for ty in 0..window.height {
            let Some(row) = self.image.row(window.y + ty) else {
                break;
            };
            let pixels = &row[window.x..window.right()];
            let base = ty * window.width;
            let tpl_row = &t[base..base + window.width];
            let row_dot: f32 = tpl_row
                .iter()
                .zip(pixels)
                .map(|(&tv, &pv)| tv * pv as f32)
                .sum();
            dot += row_dot as f64;
        }
        dot
    }
}

impl Evaluator for ZnccEvaluator<'_> {
    fn prepare_scale(&mut self, size: Size) -> ScanResult<()> {
        if self.prepared_size() == Some(size) {
            return Ok(());
        }
        self.plan = None;
        self.plan = Some(self.template.plan_at(size)?);
        Ok(())
    }

    fn bounds(&self) -> Option<Size> {
        Some(Size::new(self.integral.width(), self.integral.height()))
    }

    fn evaluate(&mut self, window: Rect) -> Verdict {
        debug_assert_eq!(
            self.prepared_size(),
            Some(window.size()),
            "evaluate called without prepare_scale"
        );
        let Some(plan) = self.plan.as_ref().filter(|p| p.size() == window.size()) else {
            return Verdict::Pruned;
        };

        let count = window.width as f64 * window.height as f64;
        let (sum, sum_sq) = self.integral.window_sums(window);
        let centered = centered_sum_sq(sum, sum_sq, count);
        let variance = centered / count;
        if variance <= self.config.min_variance as f64 {
            return Verdict::Pruned;
        }

        // Zero-mean template makes the image mean term vanish from the dot product.
        let dot = self.correlate(plan, window);
        let score = (dot / (plan.energy() * centered).sqrt()) as f32;
        if !score.is_finite() || score < self.config.min_score {
            return Verdict::Rejected { score };
        }

        Verdict::Accepted {
            score,
            aux: vec![(sum / count) as f32, variance.sqrt() as f32],
        }
    }
}
