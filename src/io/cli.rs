//! Command-line interface and the driver running one search

use crate::algorithm::executor::{Discovery, HintSearch, SearchConfig, SearchSummary};
use crate::io::configuration::{
    DEFAULT_PERSEVERANCE, DEFAULT_SEED, DEFAULT_THOROUGHNESS, DISABLED_DIMENSION_THOROUGHNESS,
};
use crate::io::error::{HintError, Result, invalid_parameter};
use crate::io::loader::{self, DatabaseFormat};
use crate::io::progress::SearchProgress;
use crate::io::report;
use crate::io::trace::TraceWriter;
use crate::measure::MeasureKind;
use crate::spatial::Hyperinterval;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Measure families selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MeasureChoice {
    /// Normalized rectilinear measure on numeric columns
    Continuous,
    /// Counting measure on 0/1 columns
    Binary,
    /// Leading numeric columns, trailing 0/1 columns
    Mixed,
}

#[derive(Parser)]
#[command(name = "hint")]
#[command(
    author,
    version,
    about = "Find hyperintervals of anomalously high density in a database"
)]
/// Command-line arguments for the hyperinterval finder
pub struct Cli {
    /// Database file containing one record per line
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,

    /// Sample size used to seed and grow hyperintervals
    #[arg(short, long, value_name = "SIZE")]
    pub sample: usize,

    /// Non-improving growth steps tolerated per hyperinterval
    #[arg(short, long, default_value_t = DEFAULT_PERSEVERANCE)]
    pub perseverance: usize,

    /// Consecutive discarded hyperintervals tolerated before stopping
    #[arg(short, long, default_value_t = DEFAULT_THOROUGHNESS)]
    pub thoroughness: usize,

    /// Consecutive failed dimension prunings tolerated (-1 disables pruning)
    #[arg(
        short,
        long,
        default_value_t = DISABLED_DIMENSION_THOROUGHNESS,
        allow_negative_numbers = true
    )]
    pub dimension_thoroughness: i64,

    /// Measure used for distances and volumes
    #[arg(short, long, value_enum, default_value_t = MeasureChoice::Continuous)]
    pub measure: MeasureChoice,

    /// Number of leading numeric columns for the mixed measure
    #[arg(short, long, default_value_t = 0)]
    pub numeric_columns: usize,

    /// Read the sparse format, expanding records to this many binary columns
    #[arg(long, value_name = "COLUMNS")]
    pub sparse_columns: Option<usize>,

    /// Random seed for drawing the sample
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write a tab-separated trace of accepted growth steps
    #[arg(long, value_name = "PATH")]
    pub trace: Option<PathBuf>,

    /// Write per-record coverage flags of every kept hyperinterval
    #[arg(long, value_name = "PATH")]
    pub coverage: Option<PathBuf>,

    /// Write centres and half-extents of all hyperintervals
    #[arg(long, value_name = "PATH")]
    pub boxes: Option<PathBuf>,

    /// Print hyperintervals in itemset notation as well
    #[arg(short, long)]
    pub itemsets: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pruning patience, `None` when pruning is disabled
    ///
    /// # Errors
    ///
    /// Returns an error for negative values other than the disabling `-1`
    pub fn dimension_thoroughness(&self) -> Result<Option<usize>> {
        if self.dimension_thoroughness == DISABLED_DIMENSION_THOROUGHNESS {
            return Ok(None);
        }
        usize::try_from(self.dimension_thoroughness)
            .map(Some)
            .map_err(|e| {
                invalid_parameter(
                    "dimension_thoroughness",
                    &self.dimension_thoroughness,
                    &format!("must be -1 (disabled) or non-negative: {e}"),
                )
            })
    }

    /// The measure selected on the command line
    pub const fn measure_kind(&self) -> MeasureKind {
        match self.measure {
            MeasureChoice::Continuous => MeasureKind::Continuous,
            MeasureChoice::Binary => MeasureKind::Binary,
            MeasureChoice::Mixed => MeasureKind::Mixed {
                numeric_columns: self.numeric_columns,
            },
        }
    }

    /// Layout of the database file
    pub const fn database_format(&self) -> DatabaseFormat {
        match self.sparse_columns {
            Some(columns) => DatabaseFormat::Sparse { columns },
            None => DatabaseFormat::Dense,
        }
    }

    /// Search configuration assembled from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension thoroughness is invalid
    pub fn search_config(&self) -> Result<SearchConfig> {
        Ok(SearchConfig {
            sample_size: self.sample,
            perseverance: self.perseverance,
            thoroughness: self.thoroughness,
            dimension_thoroughness: self.dimension_thoroughness()?,
            seed: self.seed,
        })
    }
}

/// Runs one search as configured on the command line and reports the results
pub struct SearchRunner {
    cli: Cli,
    progress: SearchProgress,
    interrupt: Option<Arc<AtomicBool>>,
}

impl SearchRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        };

        Self {
            cli,
            progress,
            interrupt: None,
        }
    }

    /// Stop the search at the next cycle boundary once `interrupt` is raised
    #[must_use]
    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Load the database, search it and write every report
    ///
    /// Discoveries are written to `out` as they are produced; an interrupted
    /// search still reports everything found before the interruption.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database cannot be loaded
    /// - The arguments violate a bound for this database
    /// - An output file cannot be created or written
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<SearchSummary> {
        let database = loader::load(&self.cli.database, self.cli.database_format())?;
        let config = self.cli.search_config()?;
        let mut search = HintSearch::new(database, self.cli.measure_kind().build(), config)?;

        if let Some(path) = &self.cli.trace {
            search = search.with_trace(TraceWriter::create(path)?);
        }
        if let Some(interrupt) = &self.interrupt {
            search = search.with_interrupt(Arc::clone(interrupt));
        }

        let mut discoveries: Vec<Discovery> = Vec::new();
        for discovery in search.by_ref() {
            self.progress.record(&discovery);
            writeln!(out, "{}", report::describe(&discovery))?;
            if self.cli.itemsets {
                writeln!(out, "  itemset: {}", report::itemset(&discovery.hint))?;
            }
            discoveries.push(discovery);
        }

        let summary = search.summary();
        self.progress.finish(&summary);

        if let Some(path) = &self.cli.coverage {
            let kept: Vec<Hyperinterval> = discoveries
                .iter()
                .filter(|d| d.kept)
                .map(|d| d.hint.clone())
                .collect();
            let mut writer = Self::create_output(path, "write coverage")?;
            report::write_coverage(&mut writer, search.database(), &kept)?;
            writer.flush()?;
        }

        if let Some(path) = &self.cli.boxes {
            let mut writer = Self::create_output(path, "write boxes")?;
            report::write_boxes(&mut writer, &discoveries)?;
            writer.flush()?;
        }

        report::write_summary(out, &summary)?;
        Ok(summary)
    }

    fn create_output(path: &Path, operation: &'static str) -> Result<BufWriter<File>> {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|e| HintError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source: e,
            })
    }
}
