//! Accepted detections and the ordered list that collects them.

use crate::geometry::Rect;

/// An accepted sub-window with its confidence score.
///
/// `aux` carries optional evaluator-specific values (for example window
/// statistics); it is empty unless the evaluator fills it.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Accepted sub-window in image coordinates.
    pub window: Rect,
    /// Evaluator confidence score.
    pub score: f32,
    /// Evaluator-specific metadata.
    pub aux: Vec<f32>,
}

impl Candidate {
    pub fn new(window: Rect, score: f32) -> Self {
        Self {
            window,
            score,
            aux: Vec::new(),
        }
    }

    pub fn with_aux(window: Rect, score: f32, aux: Vec<f32>) -> Self {
        Self { window, score, aux }
    }
}

/// Insertion-ordered, append-only collection of candidates.
///
/// No deduplication happens here; overlapping windows are kept as-is and left
/// for a selector to fuse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateList {
    items: Vec<Candidate>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: Candidate) {
        self.items.push(candidate);
    }

    /// Appends every candidate of `other`, keeping its order.
    ///
    /// Used to merge lists produced by independent scan contexts.
    pub fn extend_from(&mut self, other: &CandidateList) {
        self.items.extend_from_slice(&other.items);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Candidate> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Candidate> for CandidateList {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Candidate> for CandidateList {
    fn extend<I: IntoIterator<Item = Candidate>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
