//! Sub-window evaluators.
//!
//! An evaluator looks at one window and returns a [`Verdict`]. It never touches
//! scan state directly: [`ScanContext::evaluate_window`] turns the verdict into
//! counter updates and candidate appends, so the one-counter-per-call rule
//! holds for every implementation.
//!
//! [`ScanContext::evaluate_window`]: crate::search::ScanContext::evaluate_window

use crate::geometry::{Rect, Size};
use crate::util::ScanResult;

pub mod zncc;

pub use zncc::{ZnccConfig, ZnccEvaluator};

/// Outcome of evaluating one sub-window.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Rejected by a cheap test before full scoring.
    Pruned,
    /// Fully scored and rejected.
    Rejected { score: f32 },
    /// Fully scored and accepted; `aux` is attached to the candidate.
    Accepted { score: f32, aux: Vec<f32> },
}

impl Verdict {
    /// Accepted verdict without auxiliary data.
    pub fn accept(score: f32) -> Self {
        Verdict::Accepted {
            score,
            aux: Vec::new(),
        }
    }
}

/// Scoring model plugged into the scan.
///
/// Windows passed to `evaluate` always lie inside the scan ROI; evaluators do
/// not need to handle out-of-bounds input.
pub trait Evaluator {
    /// Called once per scale before any window of that size is evaluated.
    ///
    /// An error aborts the scale.
    fn prepare_scale(&mut self, size: Size) -> ScanResult<()> {
        let _ = size;
        Ok(())
    }

    /// Size of the image the evaluator reads from, if it reads one.
    ///
    /// When present, the scan ROI must fit inside it.
    fn bounds(&self) -> Option<Size> {
        None
    }

    /// Scores a single window.
    fn evaluate(&mut self, window: Rect) -> Verdict;
}

impl<F> Evaluator for F
where
    F: FnMut(Rect) -> Verdict,
{
    fn evaluate(&mut self, window: Rect) -> Verdict {
        self(window)
    }
}
