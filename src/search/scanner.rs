//! Multi-scale scan orchestration.

use crate::candidate::Candidate;
use crate::evaluator::Evaluator;
use crate::geometry::{Rect, Size};
use crate::search::config::ScanConfig;
use crate::search::context::ScanContext;
use crate::search::explorer::{ExhaustiveExplorer, ScaleExplorer, ScaleReport};
use crate::search::stats::ScanStats;
use crate::select::{DummySelector, Selector};
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::{ScanError, ScanResult};

/// A scale that was aborted by a configuration error.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleFailure {
    pub size: Size,
    pub error: ScanError,
}

/// Summary of a multi-scale scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanReport {
    /// Reports of the scales that ran, in scan order.
    pub scales: Vec<ScaleReport>,
    /// Scales aborted by configuration errors.
    pub failed: Vec<ScaleFailure>,
    /// Counters summed over all scales that ran.
    pub stats: ScanStats,
    /// Remaining scales were skipped after a detection.
    pub stopped_early: bool,
    /// Number of detections the selector kept.
    pub selected: usize,
}

/// Drives an explorer over several window sizes, then runs the selector once
/// over every accumulated candidate.
pub struct Scanner<X = ExhaustiveExplorer, S = DummySelector> {
    explorer: X,
    selector: S,
    config: ScanConfig,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ExhaustiveExplorer::default(), DummySelector::default())
    }
}

impl<X: ScaleExplorer, S: Selector> Scanner<X, S> {
    pub fn new(explorer: X, selector: S) -> Self {
        Self {
            explorer,
            selector,
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn explorer(&self) -> &X {
        &self.explorer
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Final detections of the last scan.
    pub fn detections(&self) -> &[Candidate] {
        self.selector.selected()
    }

    /// Scans `roi` of an image of `image_size` with a fresh context.
    ///
    /// Fails only when the ROI is invalid for `image_size` or for the image
    /// the evaluator reads; per-scale errors are collected in
    /// [`ScanReport::failed`].
    pub fn scan(
        &mut self,
        image_size: Size,
        roi: Rect,
        evaluator: &mut dyn Evaluator,
        scales: &[Size],
    ) -> ScanResult<ScanReport> {
        let mut ctx = ScanContext::new(image_size, roi)?;
        self.scan_with_context(&mut ctx, evaluator, scales)
    }

    /// Scans using a caller-owned context.
    ///
    /// The context is not reset: candidates already in it are passed to the
    /// selector together with the new ones.
    pub fn scan_with_context(
        &mut self,
        ctx: &mut ScanContext,
        evaluator: &mut dyn Evaluator,
        scales: &[Size],
    ) -> ScanResult<ScanReport> {
        let _span = trace_span!(
            "scan",
            roi_x = ctx.roi().x,
            roi_y = ctx.roi().y,
            roi_width = ctx.roi().width,
            roi_height = ctx.roi().height,
            scales = scales.len()
        )
        .entered();

        if let Some(bounds) = evaluator.bounds() {
            ctx.roi().validate_within(bounds)?;
        }

        let stop = self.config.stop_at_first_detection;
        let mut report = ScanReport::default();

        for (idx, &size) in scales.iter().enumerate() {
            let scale = match self.explorer.process(ctx, &mut *evaluator, size, stop) {
                Ok(scale) => scale,
                Err(error) => {
                    trace_debug!(
                        "scale_failed",
                        width = size.width,
                        height = size.height,
                        error = error.to_string().as_str()
                    );
                    report.failed.push(ScaleFailure { size, error });
                    continue;
                }
            };

            self.log_scale(&scale);
            report.stats += scale.stats;
            report.scales.push(scale);

            if stop && scale.stats.accepted > 0 {
                report.stopped_early = idx + 1 < scales.len();
                break;
            }
        }

        self.selector.clear();
        self.selector.process(ctx.candidates().as_slice())?;
        report.selected = self.selector.selected().len();

        trace_debug!(
            "scan_finished",
            pruned = report.stats.pruned,
            scanned = report.stats.scanned,
            accepted = report.stats.accepted,
            selected = report.selected
        );
        Ok(report)
    }

    fn log_scale(&self, scale: &ScaleReport) {
        if self.config.verbose {
            trace_event!(
                "scale_summary",
                width = scale.size.width,
                height = scale.size.height,
                visited = scale.visited,
                pruned = scale.stats.pruned,
                scanned = scale.stats.scanned,
                accepted = scale.stats.accepted
            );
        }
    }
}
