use rand::{SeedableRng, rngs::StdRng};

use crate::io::configuration::MIN_SAMPLE_SIZE;
use crate::io::error::{Result, invalid_parameter};

/// Subset of record indices drawn once without replacement
///
/// Used both to seed candidate regions and as the pool consulted during
/// growth. The order is the draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    indices: Vec<usize>,
}

impl Sample {
    /// Draw `size` distinct record indices out of `records` with a seeded generator
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is below the minimum sample size or exceeds `records`
    pub fn draw(records: usize, size: usize, seed: u64) -> Result<Self> {
        Self::check_size(records, size)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let indices = rand::seq::index::sample(&mut rng, records, size).into_vec();
        Ok(Self { indices })
    }

    /// Use an explicit list of record indices
    ///
    /// # Errors
    ///
    /// Returns an error if the list is too short, repeats an index, or refers
    /// past the end of the database
    pub fn from_indices(indices: Vec<usize>, records: usize) -> Result<Self> {
        Self::check_size(records, indices.len())?;
        if let Some(&index) = indices.iter().find(|&&index| index >= records) {
            return Err(invalid_parameter(
                "sample",
                &index,
                &format!("index out of range for {records} records"),
            ));
        }
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        if sorted.windows(2).any(|pair| pair.first() == pair.last()) {
            return Err(invalid_parameter(
                "sample",
                &indices.len(),
                &"sample indices must be distinct",
            ));
        }
        Ok(Self { indices })
    }

    fn check_size(records: usize, size: usize) -> Result<()> {
        if size < MIN_SAMPLE_SIZE {
            return Err(invalid_parameter(
                "sample_size",
                &size,
                &format!("must be at least {MIN_SAMPLE_SIZE}"),
            ));
        }
        if size > records {
            return Err(invalid_parameter(
                "sample_size",
                &size,
                &format!("cannot exceed the database size {records}"),
            ));
        }
        Ok(())
    }

    /// Record indices in draw order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of sampled records
    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false for a validated sample
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
