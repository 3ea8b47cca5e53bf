//! Scan counters.

use std::ops::{Add, AddAssign};

/// Per-scan counters: every visited window is either pruned or scanned, and
/// only scanned windows can be accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Windows rejected by a cheap test before full scoring.
    pub pruned: usize,
    /// Windows that went through full scoring.
    pub scanned: usize,
    /// Scanned windows that became candidates.
    pub accepted: usize,
}

impl ScanStats {
    /// Total windows handed to the evaluator.
    pub fn visited(&self) -> usize {
        self.pruned + self.scanned
    }

    /// Counter increments since an `earlier` snapshot of the same scan.
    pub fn since(&self, earlier: &ScanStats) -> ScanStats {
        ScanStats {
            pruned: self.pruned.saturating_sub(earlier.pruned),
            scanned: self.scanned.saturating_sub(earlier.scanned),
            accepted: self.accepted.saturating_sub(earlier.accepted),
        }
    }
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, rhs: ScanStats) {
        self.pruned += rhs.pruned;
        self.scanned += rhs.scanned;
        self.accepted += rhs.accepted;
    }
}

impl Add for ScanStats {
    type Output = ScanStats;

    fn add(mut self, rhs: ScanStats) -> ScanStats {
        self += rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ScanStats;

    #[test]
    fn since_and_add_are_inverse() {
        let before = ScanStats {
            pruned: 2,
            scanned: 5,
            accepted: 1,
        };
        let after = ScanStats {
            pruned: 4,
            scanned: 9,
            accepted: 3,
        };
        let delta = after.since(&before);
        assert_eq!(
            delta,
            ScanStats {
                pruned: 2,
                scanned: 4,
                accepted: 2
            }
        );
        assert_eq!(before + delta, after);
        assert_eq!(delta.visited(), 6);
    }
}
