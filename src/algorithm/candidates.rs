//! Seed candidates ranked by distance between sampled records
//!
//! Building the queue ranks every unordered pair of the sample, which costs
//! O(|sample|² log |sample|) time and O(|sample|²) memory. That bounds the
//! practical sample size.

use bitvec::prelude::*;

use crate::algorithm::sample::Sample;
use crate::measure::Measure;
use crate::spatial::{Database, Hyperinterval};

/// Pair of sample positions with their precomputed distance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedCandidate {
    /// Position of the first record within the sample
    pub first: usize,
    /// Position of the second record within the sample
    pub second: usize,
    /// Distance between the two records under the measure
    pub distance: f64,
}

/// Priority order over seed pairs, consumed closest first
///
/// The queue only ever shrinks: pairs are removed when they are handed out
/// and skipped once either of their records is covered by an excluded region.
#[derive(Clone, Debug)]
pub struct CandidateQueue {
    // Sorted so that the closest pair sits at the end
    pending: Vec<SeedCandidate>,
    indices: Vec<usize>,
    covered: BitVec,
}

impl CandidateQueue {
    /// Rank all unordered pairs of the sample by ascending distance
    ///
    /// Pairs at equal distance keep their enumeration order.
    pub fn new<M: Measure + ?Sized>(database: &Database, sample: &Sample, measure: &M) -> Self {
        let indices = sample.indices().to_vec();
        let records: Vec<Option<&[f64]>> = indices.iter().map(|&i| database.record(i)).collect();

        let mut pending = Vec::with_capacity(indices.len() * indices.len().saturating_sub(1) / 2);
        for (first, a) in records.iter().enumerate() {
            for (offset, b) in records.iter().skip(first + 1).enumerate() {
                if let (Some(a), Some(b)) = (a, b) {
                    pending.push(SeedCandidate {
                        first,
                        second: first + 1 + offset,
                        distance: measure.distance(a, b),
                    });
                }
            }
        }
        pending.sort_by(|x, y| x.distance.total_cmp(&y.distance));
        pending.reverse();

        let covered = bitvec![0; indices.len()];
        Self {
            pending,
            indices,
            covered,
        }
    }

    /// Number of pairs not yet handed out or discarded
    pub const fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the sample is exhausted
    pub const fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The closest remaining pair, without consuming it
    pub fn peek(&self) -> Option<&SeedCandidate> {
        self.pending.last()
    }

    /// Mark every sampled record covered by `region` and drop pairs that use one
    pub fn exclude(&mut self, database: &Database, region: &Hyperinterval) {
        for (position, &index) in self.indices.iter().enumerate() {
            if database.record(index).is_some_and(|record| region.covers(record)) {
                self.covered.set(position, true);
            }
        }
        let covered = &self.covered;
        let is_covered = |position: usize| covered.get(position).as_deref() == Some(&true);
        self.pending
            .retain(|pair| !is_covered(pair.first) && !is_covered(pair.second));
    }

    /// Pop the closest pair whose records are both uncovered, as its bounding hyperinterval
    ///
    /// An exclusion region, if given, is applied first. Returns `None` once the
    /// queue is exhausted; it stays exhausted afterwards.
    pub fn next_seed(
        &mut self,
        database: &Database,
        exclude: Option<&Hyperinterval>,
    ) -> Option<Hyperinterval> {
        if let Some(region) = exclude {
            self.exclude(database, region);
        }
        while let Some(pair) = self.pending.pop() {
            let first = self.record(database, pair.first);
            let second = self.record(database, pair.second);
            if let (Some(a), Some(b)) = (first, second) {
                return Some(Hyperinterval::bounding(a, b));
            }
        }
        None
    }

    fn record<'a>(&self, database: &'a Database, position: usize) -> Option<&'a [f64]> {
        self.indices
            .get(position)
            .and_then(|&index| database.record(index))
    }
}
