//! Greedy nearest-neighbour growth of a single hyperinterval
//!
//! A seeded region repeatedly absorbs the uncovered sample record closest to
//! its two corners. An absorption is kept only if it strictly lowers the
//! description length; `perseverance` non-improving candidates in a row are
//! tolerated before the region is declared converged.

use bitvec::prelude::*;

use crate::algorithm::complexity::{ComplexityEvaluator, Evaluation};
use crate::algorithm::sample::Sample;
use crate::measure::Measure;
use crate::spatial::Hyperinterval;

/// Lifecycle of a growing hyperinterval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthState {
    /// Created from a seed, no candidate examined yet
    Seeded,
    /// At least one candidate examined, pool and patience left
    Growing,
    /// Patience ran out; the best region found is final
    Converged,
    /// Every sampled record is covered or was tried
    Exhausted,
}

impl GrowthState {
    /// Whether growth has stopped
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Converged | Self::Exhausted)
    }
}

/// What a single growth step did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrowthStep {
    /// The candidate lowered the complexity and replaced the region
    Accepted(Evaluation),
    /// The candidate did not improve; the region is unchanged
    Rejected,
    /// Growth has stopped in the given state
    Finished(GrowthState),
}

/// Growth state machine over one hyperinterval
pub struct Growth<'e, 'a, M: Measure + ?Sized> {
    evaluator: &'e ComplexityEvaluator<'a, M>,
    sample: &'e Sample,
    tried: BitVec,
    hint: Hyperinterval,
    evaluation: Option<Evaluation>,
    perseverance: usize,
    patience: usize,
    state: GrowthState,
    accepted: usize,
}

impl<'e, 'a, M: Measure + ?Sized> Growth<'e, 'a, M> {
    /// Start growing from a seed hyperinterval
    pub fn new(
        evaluator: &'e ComplexityEvaluator<'a, M>,
        sample: &'e Sample,
        seed: Hyperinterval,
        perseverance: usize,
    ) -> Self {
        let evaluation = evaluator.evaluate(&seed);
        Self {
            evaluator,
            sample,
            tried: bitvec![0; sample.len()],
            hint: seed,
            evaluation,
            perseverance,
            patience: perseverance,
            state: GrowthState::Seeded,
            accepted: 0,
        }
    }

    /// Current best region
    pub const fn hint(&self) -> &Hyperinterval {
        &self.hint
    }

    /// Evaluation of the current best region, `None` if it is degenerate
    pub const fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation
    }

    /// Complexity of the current best region, infinite if it is degenerate
    pub fn complexity(&self) -> f64 {
        self.evaluation.map_or(f64::INFINITY, |e| e.complexity)
    }

    /// Current lifecycle state
    pub const fn state(&self) -> GrowthState {
        self.state
    }

    /// Number of absorptions accepted so far
    pub const fn accepted(&self) -> usize {
        self.accepted
    }

    /// Examine the next candidate record
    pub fn step(&mut self) -> GrowthStep {
        if self.state.is_finished() {
            return GrowthStep::Finished(self.state);
        }
        self.state = GrowthState::Growing;

        let Some((position, record)) = self.nearest_uncovered() else {
            self.state = GrowthState::Exhausted;
            return GrowthStep::Finished(self.state);
        };
        // Tried records are never offered again, whatever the outcome
        self.tried.set(position, true);

        let candidate = self.hint.extended_to(record);
        match self.evaluator.evaluate(&candidate) {
            Some(evaluation) if evaluation.complexity < self.complexity() => {
                self.hint = candidate;
                self.evaluation = Some(evaluation);
                self.patience = self.perseverance;
                self.accepted += 1;
                GrowthStep::Accepted(evaluation)
            }
            _ => {
                if let Some(patience) = self.patience.checked_sub(1) {
                    self.patience = patience;
                    GrowthStep::Rejected
                } else {
                    self.state = GrowthState::Converged;
                    GrowthStep::Finished(self.state)
                }
            }
        }
    }

    /// Step until growth stops and return the final state
    pub fn run(&mut self) -> GrowthState {
        loop {
            if let GrowthStep::Finished(state) = self.step() {
                return state;
            }
        }
    }

    /// Consume the growth and return the best region with its evaluation
    pub fn into_result(self) -> (Hyperinterval, Option<Evaluation>) {
        (self.hint, self.evaluation)
    }

    /// Untried sampled record outside the region with minimal summed corner distance
    ///
    /// Records found inside the region are marked tried on the way.
    fn nearest_uncovered(&mut self) -> Option<(usize, &'a [f64])> {
        let database = self.evaluator.database();
        let measure = self.evaluator.measure();
        let mut best: Option<(usize, &'a [f64], f64)> = None;

        for (position, &index) in self.sample.indices().iter().enumerate() {
            if self.tried.get(position).as_deref() == Some(&true) {
                continue;
            }
            let Some(record) = database.record(index) else {
                self.tried.set(position, true);
                continue;
            };
            if self.hint.covers(record) {
                self.tried.set(position, true);
                continue;
            }
            let distance = measure.distance(record, self.hint.lower())
                + measure.distance(record, self.hint.upper());
            if best.is_none_or(|(_, _, nearest)| distance < nearest) {
                best = Some((position, record, distance));
            }
        }

        best.map(|(position, record, _)| (position, record))
    }
}
