//! Pass-through selector.

use crate::candidate::{Candidate, CandidateList};
use crate::select::Selector;
use crate::util::ScanResult;

/// Copies every candidate to the output unchanged.
///
/// Useful for tests and for pipelines that fuse detections elsewhere.
#[derive(Clone, Debug, Default)]
pub struct DummySelector {
    selected: CandidateList,
}

impl DummySelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Selector for DummySelector {
    fn clear(&mut self) {
        self.selected.clear();
    }

    fn process(&mut self, candidates: &[Candidate]) -> ScanResult<()> {
        self.selected.extend(candidates.iter().cloned());
        Ok(())
    }

    fn selected(&self) -> &[Candidate] {
        self.selected.as_slice()
    }
}
