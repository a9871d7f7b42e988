//! Tests for configuration validation and the search control loop

#[cfg(test)]
mod tests {
    use hint_finder::HintError;
    use hint_finder::algorithm::executor::{HintSearch, SearchConfig, StopReason};
    use hint_finder::algorithm::growth::GrowthState;
    use hint_finder::algorithm::sample::Sample;
    use hint_finder::io::configuration::{DEFAULT_PERSEVERANCE, DEFAULT_THOROUGHNESS};
    use hint_finder::measure::ContinuousMeasure;
    use hint_finder::spatial::Database;
    use std::sync::atomic::Ordering;

    fn one_dimensional(values: &[f64]) -> Database {
        Database::from_rows(values.iter().map(|&v| vec![v]).collect()).expect("valid database")
    }

    fn two_clusters() -> Database {
        one_dimensional(&[0.0, 1.0, 2.0, 3.0, 4.0, 100.0, 101.0, 102.0, 103.0, 104.0])
    }

    fn evenly_spaced() -> Database {
        one_dimensional(&(0..10).map(f64::from).collect::<Vec<_>>())
    }

    fn strict_config(sample_size: usize) -> SearchConfig {
        SearchConfig {
            thoroughness: 0,
            ..SearchConfig::new(sample_size)
        }
    }

    fn full_sample(records: usize) -> Sample {
        Sample::from_indices((0..records).collect(), records).expect("valid sample")
    }

    // Tests default patience values
    // Verified by changing the defaults
    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::new(10);

        assert_eq!(config.sample_size, 10);
        assert_eq!(config.perseverance, DEFAULT_PERSEVERANCE);
        assert_eq!(config.thoroughness, DEFAULT_THOROUGHNESS);
        assert_eq!(config.dimension_thoroughness, None);
    }

    // Tests each bound is enforced and named in the error
    // Verified by clamping values into range
    #[test]
    fn test_config_validation() {
        let parameter = |config: SearchConfig| match config.validate(10, 2) {
            Err(HintError::InvalidParameter { parameter, .. }) => parameter,
            _ => "",
        };

        assert_eq!(parameter(SearchConfig::new(2)), "sample_size");
        assert_eq!(parameter(SearchConfig::new(11)), "sample_size");
        assert_eq!(
            parameter(SearchConfig {
                perseverance: 3,
                ..SearchConfig::new(5)
            }),
            "perseverance"
        );
        assert_eq!(
            parameter(SearchConfig {
                dimension_thoroughness: Some(2),
                ..SearchConfig::new(5)
            }),
            "dimension_thoroughness"
        );
        assert!(
            SearchConfig {
                perseverance: 2,
                dimension_thoroughness: Some(1),
                ..SearchConfig::new(5)
            }
            .validate(10, 2)
            .is_ok()
        );
    }

    // Tests both clusters are found and kept before the sample runs out
    // Verified by not excluding kept regions from seeding
    #[test]
    fn test_finds_both_clusters() {
        let mut search = HintSearch::with_sample(
            two_clusters(),
            ContinuousMeasure::new(),
            strict_config(10),
            full_sample(10),
        )
        .expect("valid search");

        let first = search.next().expect("first discovery");
        assert!(first.kept);
        assert_eq!(first.hint.lower(), &[0.0]);
        assert_eq!(first.hint.upper(), &[4.0]);
        assert_eq!(first.inside_count, 5);
        assert_eq!(first.growth, GrowthState::Converged);
        assert!(first.pruned.is_empty());

        let second = search.next().expect("second discovery");
        assert!(second.kept);
        assert_eq!(second.hint.lower(), &[100.0]);
        assert_eq!(second.hint.upper(), &[104.0]);
        assert!((second.complexity - first.complexity).abs() < 1e-9);

        assert!(search.next().is_none());
        assert_eq!(search.stop_reason(), Some(StopReason::SampleExhausted));
        assert!(search.next().is_none());

        let summary = search.summary();
        assert_eq!(summary.discoveries, 2);
        assert_eq!(summary.kept, 2);
        assert!(first.complexity < summary.base_complexity - summary.model_complexity);
    }

    // Tests a drawn sample finds the same regions in some order
    // Verified by drawing fewer records than configured
    #[test]
    fn test_drawn_sample_finds_both_clusters() {
        let search = HintSearch::new(two_clusters(), ContinuousMeasure::new(), strict_config(10))
            .expect("valid search");
        assert_eq!(search.sample().len(), 10);

        let discoveries: Vec<_> = search.collect();
        assert_eq!(discoveries.len(), 2);
        assert!(discoveries.iter().all(|d| d.kept && d.inside_count == 5));
    }

    // Tests a discarded region with no thoroughness left ends the search after it is emitted
    // Verified by stopping before emitting the last discovery
    #[test]
    fn test_thoroughness_exhausted() {
        let mut search = HintSearch::with_sample(
            evenly_spaced(),
            ContinuousMeasure::new(),
            strict_config(10),
            full_sample(10),
        )
        .expect("valid search");

        let discovery = search.next().expect("one discovery");
        assert!(!discovery.kept);
        assert!(search.next().is_none());
        assert_eq!(search.stop_reason(), Some(StopReason::ThoroughnessExhausted));
        assert_eq!(search.summary().discoveries, 1);
    }

    // Tests thoroughness counts consecutive discarded regions
    // Verified by stopping at the thoroughness value instead of one past it
    #[test]
    fn test_thoroughness_counts_discards() {
        let config = SearchConfig {
            thoroughness: 2,
            ..SearchConfig::new(10)
        };
        let search = HintSearch::with_sample(
            evenly_spaced(),
            ContinuousMeasure::new(),
            config,
            full_sample(10),
        )
        .expect("valid search");

        let discoveries: Vec<_> = search.collect();
        assert_eq!(discoveries.len(), 3);
        assert!(discoveries.iter().all(|d| !d.kept));
    }

    // Tests a raised interrupt flag stops the search at the next cycle
    // Verified by ignoring the flag
    #[test]
    fn test_interrupt_stops_search() {
        let mut search = HintSearch::with_sample(
            two_clusters(),
            ContinuousMeasure::new(),
            strict_config(10),
            full_sample(10),
        )
        .expect("valid search");

        assert!(search.next().is_some());
        search.interrupt_handle().store(true, Ordering::Relaxed);

        assert!(search.next().is_none());
        assert_eq!(search.stop_reason(), Some(StopReason::Interrupted));
        assert_eq!(search.summary().discoveries, 1);
    }

    // Tests the explicit sample replaces the configured size
    // Verified by validating against the configured size
    #[test]
    fn test_with_sample_overrides_size() {
        let search = HintSearch::with_sample(
            two_clusters(),
            ContinuousMeasure::new(),
            strict_config(3),
            full_sample(10),
        )
        .expect("valid search");

        assert_eq!(search.config().sample_size, 10);
        assert_eq!(search.queue().len(), 45);
        assert_eq!(search.bounds().upper(), &[104.0]);
        assert!(search.evaluate(search.bounds()).is_some());
    }

    // Tests invalid configurations are rejected before searching
    // Verified by skipping validation in the constructor
    #[test]
    fn test_invalid_config_rejected() {
        let result = HintSearch::new(two_clusters(), ContinuousMeasure::new(), SearchConfig::new(11));

        assert!(matches!(
            result,
            Err(HintError::InvalidParameter { parameter: "sample_size", .. })
        ));
    }
}
