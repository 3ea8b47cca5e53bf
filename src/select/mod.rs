//! Post-scan selection of the final detections.
//!
//! A selector receives every candidate accumulated over all scales and keeps
//! its own output list. Fusion strategies (clustering, thresholds, NMS) plug in
//! here; the scan itself never merges candidates.

use crate::candidate::Candidate;
use crate::util::ScanResult;

mod dummy;

pub use dummy::DummySelector;

/// Turns raw scan candidates into final detections.
pub trait Selector {
    /// Drops the selected detections of a previous run.
    fn clear(&mut self);

    /// Processes the candidate list; results are appended to the selector's
    /// own output.
    fn process(&mut self, candidates: &[Candidate]) -> ScanResult<()>;

    /// Detections selected so far.
    fn selected(&self) -> &[Candidate];
}
