//! Mutable state shared by the explorer and evaluator during one scan.

use crate::candidate::{Candidate, CandidateList};
use crate::evaluator::{Evaluator, Verdict};
use crate::geometry::{Rect, Size};
use crate::search::stats::ScanStats;
use crate::util::ScanResult;

/// State of one scan session: ROI, current window size, counters and the
/// accepted candidates.
///
/// Exactly one explorer writes to a context at a time; it is passed by `&mut`
/// down the call chain and read by the scanner and selector afterwards.
#[derive(Clone, Debug)]
pub struct ScanContext {
    image_size: Size,
    roi: Rect,
    window_size: Size,
    stats: ScanStats,
    candidates: CandidateList,
}

impl ScanContext {
    /// Creates a context scanning `roi` of an image with dimensions `image_size`.
    pub fn new(image_size: Size, roi: Rect) -> ScanResult<Self> {
        roi.validate_within(image_size)?;
        Ok(Self {
            image_size,
            roi,
            window_size: Size::default(),
            stats: ScanStats::default(),
            candidates: CandidateList::new(),
        })
    }

    /// Creates a context whose ROI is the whole image.
    pub fn for_image(image_size: Size) -> ScanResult<Self> {
        Self::new(image_size, Rect::full(image_size))
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn roi(&self) -> Rect {
        self.roi
    }

    /// Sub-window size of the scale being explored.
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    pub fn set_window_size(&mut self, size: Size) -> ScanResult<()> {
        self.window_size = size.ensure_non_empty()?;
        Ok(())
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Evaluates the current-size window at `(x, y)` and records the outcome.
    ///
    /// Increments exactly one of `pruned`/`scanned`; on acceptance also
    /// increments `accepted` and appends a candidate. Returns whether the
    /// window was accepted. The window must lie inside the ROI.
    pub fn evaluate_window<E>(&mut self, evaluator: &mut E, x: usize, y: usize) -> bool
    where
        E: Evaluator + ?Sized,
    {
        let window = Rect::at(x, y, self.window_size);
        debug_assert!(
            self.roi.contains(&window),
            "window {window:?} outside roi {:?}",
            self.roi
        );

        match evaluator.evaluate(window) {
            Verdict::Pruned => {
                self.stats.pruned += 1;
                false
            }
            Verdict::Rejected { .. } => {
                self.stats.scanned += 1;
                false
            }
            Verdict::Accepted { score, aux } => {
                self.stats.scanned += 1;
                self.stats.accepted += 1;
                self.candidates.push(Candidate::with_aux(window, score, aux));
                true
            }
        }
    }

    /// Clears counters and candidates; ROI and image size are kept.
    pub fn reset(&mut self) {
        self.stats = ScanStats::default();
        self.candidates.clear();
        self.window_size = Size::default();
    }

    /// Moves the candidates out, leaving the list empty.
    pub fn take_candidates(&mut self) -> CandidateList {
        std::mem::take(&mut self.candidates)
    }

    /// Folds another context's results into this one.
    ///
    /// Lets independently scanned scales (one context per worker) be combined
    /// after the fact.
    pub fn merge(&mut self, other: &ScanContext) {
        self.stats += other.stats;
        self.candidates.extend_from(&other.candidates);
    }
}
