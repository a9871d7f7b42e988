//! Post-hoc simplification of kept hyperintervals by dropping dimensions
//!
//! Dimensions are widened to the database's own bound, least discriminating
//! first. A widening is kept when the complexity it adds stays within the
//! per-dimension share of the model cost, which is what no longer specifying
//! that dimension's two boundaries saves.

use crate::algorithm::complexity::{ComplexityEvaluator, Evaluation};
use crate::measure::Measure;
use crate::spatial::Hyperinterval;

/// Result of pruning one hyperinterval
#[derive(Clone, Debug, PartialEq)]
pub struct PruneOutcome {
    /// Simplified region, pruned dimensions marked full
    pub hint: Hyperinterval,
    /// Evaluation of the simplified region
    pub evaluation: Evaluation,
    /// Dimensions dropped in the order they were accepted
    pub pruned: Vec<usize>,
}

/// Widens dimensions of kept regions while the description length allows it
pub struct DimensionPruner<'e, 'a, M: Measure + ?Sized> {
    evaluator: &'e ComplexityEvaluator<'a, M>,
    bounds: &'e Hyperinterval,
    budget: f64,
    thoroughness: usize,
}

impl<'e, 'a, M: Measure + ?Sized> DimensionPruner<'e, 'a, M> {
    /// Pruner widening towards `bounds`, accepting steps within `budget`
    ///
    /// `thoroughness` consecutive failed widenings are tolerated before stopping.
    pub const fn new(
        evaluator: &'e ComplexityEvaluator<'a, M>,
        bounds: &'e Hyperinterval,
        budget: f64,
        thoroughness: usize,
    ) -> Self {
        Self {
            evaluator,
            bounds,
            budget,
            thoroughness,
        }
    }

    /// Dimensions in the order they are tried: descending fullness, ties by index
    pub fn order(&self, hint: &Hyperinterval) -> Vec<usize> {
        let fullness = self.evaluator.measure().fullness(hint);
        let mut order: Vec<usize> = (0..hint.dims()).filter(|&dim| !hint.is_full(dim)).collect();
        order.sort_by(|&a, &b| {
            let fa = fullness.get(a).copied().unwrap_or(0.0);
            let fb = fullness.get(b).copied().unwrap_or(0.0);
            fb.total_cmp(&fa)
        });
        order
    }

    /// Prune `hint`, whose current evaluation is `evaluation`
    pub fn prune(&self, hint: Hyperinterval, evaluation: Evaluation) -> PruneOutcome {
        let mut outcome = PruneOutcome {
            pruned: Vec::new(),
            hint,
            evaluation,
        };
        let mut patience = self.thoroughness;

        for dim in self.order(&outcome.hint) {
            let candidate = outcome.hint.widened(dim, self.bounds);
            let accepted = self.evaluator.evaluate(&candidate).filter(|widened| {
                widened.complexity <= outcome.evaluation.complexity + self.budget
            });

            if let Some(widened) = accepted {
                log::trace!(
                    "pruned dimension {dim}: complexity {} -> {}",
                    outcome.evaluation.complexity,
                    widened.complexity
                );
                outcome.hint = candidate;
                outcome.evaluation = widened;
                outcome.pruned.push(dim);
                patience = self.thoroughness;
            } else if let Some(remaining) = patience.checked_sub(1) {
                patience = remaining;
            } else {
                break;
            }
        }

        outcome
    }
}
