//! Scale explorers: strategies that place windows of one size over the ROI.

use crate::evaluator::Evaluator;
use crate::geometry::Size;
use crate::search::config::ExhaustiveConfig;
use crate::search::context::ScanContext;
use crate::search::stats::ScanStats;
use crate::trace::{trace_debug, trace_span};
use crate::util::math::{pixel_stride, steps_in_span};
use crate::util::ScanResult;

/// Result of exploring one scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleReport {
    /// Window size of the scale.
    pub size: Size,
    /// Horizontal pixel step actually used.
    pub stride_x: usize,
    /// Vertical pixel step actually used.
    pub stride_y: usize,
    /// Grid positions that fit in the ROI at this scale.
    pub positions: usize,
    /// Windows handed to the evaluator.
    pub visited: usize,
    /// Counter increments caused by this scale.
    pub stats: ScanStats,
    /// Iteration ended at the first detection.
    pub stopped_early: bool,
}

/// Strategy enumerating window positions for one scale.
pub trait ScaleExplorer {
    /// Prepares `evaluator` for `size`, then evaluates windows of that size
    /// inside the context ROI.
    ///
    /// With `stop_at_first_detection`, iteration ends as soon as a candidate is
    /// appended during this call; candidates already in the context do not
    /// count. Errors are configuration failures that abort this scale only.
    fn process(
        &mut self,
        ctx: &mut ScanContext,
        evaluator: &mut dyn Evaluator,
        size: Size,
        stop_at_first_detection: bool,
    ) -> ScanResult<ScaleReport>;
}

/// Visits every position on a regular grid whose step is a fraction of the
/// window size.
///
/// Positions run from the ROI origin to the last placement that keeps the
/// window inside the ROI, x outer and y inner. Windows larger than the ROI
/// produce no evaluations.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveExplorer {
    config: ExhaustiveConfig,
}

impl ExhaustiveExplorer {
    pub fn new(config: ExhaustiveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExhaustiveConfig {
        &self.config
    }

    /// Mutable access for applying named options after construction.
    pub fn config_mut(&mut self) -> &mut ExhaustiveConfig {
        &mut self.config
    }

    /// Pixel strides used for windows of `size`.
    pub fn strides(&self, size: Size) -> (usize, usize) {
        (
            pixel_stride(self.config.stride_x, size.width),
            pixel_stride(self.config.stride_y, size.height),
        )
    }
}

impl ScaleExplorer for ExhaustiveExplorer {
    fn process(
        &mut self,
        ctx: &mut ScanContext,
        evaluator: &mut dyn Evaluator,
        size: Size,
        stop_at_first_detection: bool,
    ) -> ScanResult<ScaleReport> {
        ctx.set_window_size(size)?;
        let roi = ctx.roi();
        if let Some(bounds) = evaluator.bounds() {
            roi.validate_within(bounds)?;
        }
        evaluator.prepare_scale(size)?;
        let (stride_x, stride_y) = self.strides(size);

        let _span = trace_span!(
            "exhaustive_scale",
            width = size.width,
            height = size.height,
            stride_x = stride_x,
            stride_y = stride_y
        )
        .entered();

        let stats_before = *ctx.stats();
        let candidates_before = ctx.candidates().len();
        let mut report = ScaleReport {
            size,
            stride_x,
            stride_y,
            positions: 0,
            visited: 0,
            stats: ScanStats::default(),
            stopped_early: false,
        };

        if size.width > roi.width || size.height > roi.height {
            trace_debug!("scale_skipped", width = size.width, height = size.height);
            return Ok(report);
        }

        let last_x = roi.x + (roi.width - size.width);
        let last_y = roi.y + (roi.height - size.height);
        report.positions = steps_in_span(last_x - roi.x, stride_x)
            * steps_in_span(last_y - roi.y, stride_y);

        'positions: for x in (roi.x..=last_x).step_by(stride_x) {
            for y in (roi.y..=last_y).step_by(stride_y) {
                report.visited += 1;
                let accepted = ctx.evaluate_window(&mut *evaluator, x, y);
                if stop_at_first_detection
                    && accepted
                    && ctx.candidates().len() > candidates_before
                {
                    report.stopped_early = true;
                    break 'positions;
                }
            }
        }

        debug_assert!(report.stopped_early || report.visited == report.positions);
        report.stats = ctx.stats().since(&stats_before);
        trace_debug!(
            "scale_explored",
            visited = report.visited,
            pruned = report.stats.pruned,
            scanned = report.stats.scanned,
            accepted = report.stats.accepted
        );
        Ok(report)
    }
}
