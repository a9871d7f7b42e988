use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    algorithm::candidates::CandidateQueue,
    algorithm::complexity::{Baseline, ComplexityEvaluator, Evaluation},
    algorithm::growth::{Growth, GrowthState, GrowthStep},
    algorithm::pruning::DimensionPruner,
    algorithm::sample::Sample,
    io::configuration::{DEFAULT_PERSEVERANCE, DEFAULT_SEED, DEFAULT_THOROUGHNESS, MIN_SAMPLE_SIZE},
    io::error::{Result, invalid_parameter},
    io::trace::TraceWriter,
    measure::Measure,
    spatial::{Database, Hyperinterval},
};

/// Search parameters bounding the three patience-limited loops
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of records sampled for seeding and growth
    pub sample_size: usize,
    /// Non-improving growth steps tolerated per region
    pub perseverance: usize,
    /// Consecutive discarded regions tolerated before the search stops
    pub thoroughness: usize,
    /// Consecutive failed widenings tolerated per kept region, `None` disables pruning
    pub dimension_thoroughness: Option<usize>,
    /// Seed for drawing the sample
    pub seed: u64,
}

impl SearchConfig {
    /// Configuration with default patience values for the given sample size
    pub const fn new(sample_size: usize) -> Self {
        Self {
            sample_size,
            perseverance: DEFAULT_PERSEVERANCE,
            thoroughness: DEFAULT_THOROUGHNESS,
            dimension_thoroughness: None,
            seed: DEFAULT_SEED,
        }
    }

    /// Check every parameter against the size and dimensionality of the data
    ///
    /// # Errors
    ///
    /// Returns an error naming the violated bound if:
    /// - `sample_size` is outside `3..=records`
    /// - `perseverance` exceeds `sample_size - 3`
    /// - `dimension_thoroughness` is not below `dims`
    pub fn validate(&self, records: usize, dims: usize) -> Result<()> {
        if self.sample_size < MIN_SAMPLE_SIZE || self.sample_size > records {
            return Err(invalid_parameter(
                "sample_size",
                &self.sample_size,
                &format!("must lie between {MIN_SAMPLE_SIZE} and the database size {records}"),
            ));
        }

        let max_perseverance = self.sample_size - MIN_SAMPLE_SIZE;
        if self.perseverance > max_perseverance {
            return Err(invalid_parameter(
                "perseverance",
                &self.perseverance,
                &format!("must not exceed sample size minus {MIN_SAMPLE_SIZE} ({max_perseverance})"),
            ));
        }

        if let Some(value) = self.dimension_thoroughness
            && value >= dims
        {
            return Err(invalid_parameter(
                "dimension_thoroughness",
                &value,
                &format!("must be below the number of dimensions {dims}"),
            ));
        }

        Ok(())
    }
}

/// One seed grown, optionally pruned, and judged
#[derive(Clone, Debug, PartialEq)]
pub struct Discovery {
    /// The region found
    pub hint: Hyperinterval,
    /// Its comparative description length in nats, infinite if degenerate
    pub complexity: f64,
    /// Whether it beats the single uniform model by more than its model cost
    pub kept: bool,
    /// Number of database records it covers
    pub inside_count: usize,
    /// Dimensions dropped by pruning
    pub pruned: Vec<usize>,
    /// How growth ended
    pub growth: GrowthState,
}

/// Why the search stopped producing discoveries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// No seed pair with two uncovered records remains
    SampleExhausted,
    /// Too many consecutive discarded regions
    ThoroughnessExhausted,
    /// The interrupt flag was raised
    Interrupted,
}

/// Scalar statistics for reporting at the end of a run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchSummary {
    /// Single uniform data complexity `N ln V`
    pub data_complexity: f64,
    /// Comparative complexity of the single uniform model
    pub base_complexity: f64,
    /// Cost of specifying one hyperinterval
    pub model_complexity: f64,
    /// Number of discoveries emitted
    pub discoveries: usize,
    /// Number of discoveries kept
    pub kept: usize,
    /// Why the search stopped, `None` while it can still continue
    pub stop: Option<StopReason>,
}

/// Search session owning the database, measure, sample and seed queue
///
/// Iterating performs one seed-grow-prune-decide cycle per item. The
/// sequence is finite; it also ends early when the interrupt flag is raised,
/// which is only checked between cycles.
pub struct HintSearch<M: Measure> {
    database: Database,
    measure: M,
    sample: Sample,
    config: SearchConfig,
    bounds: Hyperinterval,
    log_db_volume: f64,
    baseline: Baseline,
    queue: CandidateQueue,
    patience: usize,
    discoveries: usize,
    kept: usize,
    stop: Option<StopReason>,
    interrupt: Arc<AtomicBool>,
    trace: Option<TraceWriter>,
}

impl<M: Measure> HintSearch<M> {
    /// Create a search drawing its sample with the configured seed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration violates a bound for this database
    /// - The measure cannot be initialized on the database
    pub fn new(database: Database, measure: M, config: SearchConfig) -> Result<Self> {
        config.validate(database.len(), database.dims())?;
        let sample = Sample::draw(database.len(), config.sample_size, config.seed)?;
        Self::with_sample(database, measure, config, sample)
    }

    /// Create a search over an explicit sample
    ///
    /// The sample's size replaces `config.sample_size`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration violates a bound for this database and sample
    /// - The measure cannot be initialized on the database
    pub fn with_sample(
        database: Database,
        mut measure: M,
        config: SearchConfig,
        sample: Sample,
    ) -> Result<Self> {
        let config = SearchConfig {
            sample_size: sample.len(),
            ..config
        };
        config.validate(database.len(), database.dims())?;

        let bounds = measure.initialize(&database)?;
        let log_db_volume = measure.log_volume(bounds.lower(), bounds.upper());
        let baseline = Baseline::new(
            database.len(),
            database.dims(),
            log_db_volume,
            measure.discretization(),
        );
        let queue = CandidateQueue::new(&database, &sample, &measure);

        log::info!(
            "search over {} records in {} dimensions: base complexity {}, model complexity {}, {} seed pairs",
            database.len(),
            database.dims(),
            baseline.base_complexity,
            baseline.model_complexity,
            queue.len()
        );

        Ok(Self {
            patience: config.thoroughness,
            database,
            measure,
            sample,
            config,
            bounds,
            log_db_volume,
            baseline,
            queue,
            discoveries: 0,
            kept: 0,
            stop: None,
            interrupt: Arc::new(AtomicBool::new(false)),
            trace: None,
        })
    }

    /// Share an externally owned interrupt flag
    #[must_use]
    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Record every accepted growth step to a trace
    #[must_use]
    pub fn with_trace(mut self, trace: TraceWriter) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Flag that stops the search at the next cycle boundary when raised
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    /// The searched database
    pub const fn database(&self) -> &Database {
        &self.database
    }

    /// The initialized measure
    pub const fn measure(&self) -> &M {
        &self.measure
    }

    /// The sample seeds and growth candidates come from
    pub const fn sample(&self) -> &Sample {
        &self.sample
    }

    /// The validated configuration
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The database's bounding hyperinterval
    pub const fn bounds(&self) -> &Hyperinterval {
        &self.bounds
    }

    /// Reference complexities of this run
    pub const fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Remaining seed candidates
    pub const fn queue(&self) -> &CandidateQueue {
        &self.queue
    }

    /// Why the search stopped, `None` while it can continue
    pub const fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// Evaluate a hyperinterval against this run's database and measure
    pub fn evaluate(&self, hint: &Hyperinterval) -> Option<Evaluation> {
        ComplexityEvaluator::new(&self.database, &self.measure, self.log_db_volume).evaluate(hint)
    }

    /// Summary statistics of the run so far
    pub const fn summary(&self) -> SearchSummary {
        SearchSummary {
            data_complexity: self.baseline.data_complexity,
            base_complexity: self.baseline.base_complexity,
            model_complexity: self.baseline.model_complexity,
            discoveries: self.discoveries,
            kept: self.kept,
            stop: self.stop,
        }
    }

    fn finish(&mut self, reason: StopReason) {
        match reason {
            StopReason::SampleExhausted => log::info!("sample exhausted: no further seeds"),
            StopReason::ThoroughnessExhausted => {
                log::info!("stopping after {} consecutive discarded regions", self.config.thoroughness + 1);
            }
            StopReason::Interrupted => log::info!("search interrupted"),
        }
        self.stop = Some(reason);
        if let Some(trace) = &mut self.trace
            && let Err(e) = trace.flush()
        {
            log::warn!("could not flush growth trace: {e}");
        }
    }

    fn grow(&mut self, seed: Hyperinterval) -> (Hyperinterval, Option<Evaluation>, GrowthState) {
        let evaluator = ComplexityEvaluator::new(&self.database, &self.measure, self.log_db_volume);
        let mut growth = Growth::new(&evaluator, &self.sample, seed, self.config.perseverance);
        let records = self.database.len();

        let state = loop {
            match growth.step() {
                GrowthStep::Accepted(evaluation) => {
                    log::trace!("growth step {}: complexity {}", growth.accepted(), evaluation.complexity);
                    let failed = self.trace.as_mut().is_some_and(|trace| {
                        trace
                            .record(self.discoveries, growth.accepted(), growth.hint(), &evaluation, records)
                            .inspect_err(|e| log::warn!("disabling growth trace: {e}"))
                            .is_err()
                    });
                    if failed {
                        self.trace = None;
                    }
                }
                GrowthStep::Rejected => {}
                GrowthStep::Finished(state) => break state,
            }
        };

        if state == GrowthState::Exhausted {
            log::debug!("growth exhausted the sample after {} absorptions", growth.accepted());
        }
        let (hint, evaluation) = growth.into_result();
        (hint, evaluation, state)
    }

    fn discover(&mut self, seed: Hyperinterval) -> Discovery {
        let (hint, evaluation, growth) = self.grow(seed);

        let mut discovery = Discovery {
            complexity: evaluation.map_or(f64::INFINITY, |e| e.complexity),
            inside_count: evaluation.map_or(0, |e| e.inside_count),
            kept: false,
            pruned: Vec::new(),
            growth,
            hint,
        };
        discovery.kept = self.baseline.keeps(discovery.complexity, discovery.hint.dims());

        if let (true, Some(evaluation), Some(thoroughness)) =
            (discovery.kept, evaluation, self.config.dimension_thoroughness)
        {
            let evaluator =
                ComplexityEvaluator::new(&self.database, &self.measure, self.log_db_volume);
            let pruner = DimensionPruner::new(
                &evaluator,
                &self.bounds,
                self.baseline.dimension_budget(),
                thoroughness,
            );
            let outcome = pruner.prune(discovery.hint.clone(), evaluation);
            discovery.kept = self
                .baseline
                .keeps(outcome.evaluation.complexity, outcome.hint.constrained_count());
            discovery.complexity = outcome.evaluation.complexity;
            discovery.inside_count = outcome.evaluation.inside_count;
            discovery.pruned = outcome.pruned;
            discovery.hint = outcome.hint;
        }

        discovery
    }
}

impl<M: Measure> Iterator for HintSearch<M> {
    type Item = Discovery;

    fn next(&mut self) -> Option<Discovery> {
        if self.stop.is_some() {
            return None;
        }
        if self.interrupt.load(Ordering::Relaxed) {
            self.finish(StopReason::Interrupted);
            return None;
        }
        let Some(seed) = self.queue.next_seed(&self.database, None) else {
            self.finish(StopReason::SampleExhausted);
            return None;
        };

        let discovery = self.discover(seed);
        log::debug!(
            "discovery {}: {} complexity {} covering {} records, {}",
            self.discoveries,
            discovery.hint,
            discovery.complexity,
            discovery.inside_count,
            if discovery.kept { "kept" } else { "discarded" }
        );
        self.discoveries += 1;

        if discovery.kept {
            self.kept += 1;
            self.patience = self.config.thoroughness;
            self.queue.exclude(&self.database, &discovery.hint);
        } else if let Some(patience) = self.patience.checked_sub(1) {
            self.patience = patience;
        } else {
            self.finish(StopReason::ThoroughnessExhausted);
        }

        Some(discovery)
    }
}
