//! Tests for seed pair ranking and exclusion

#[cfg(test)]
mod tests {
    use hint_finder::algorithm::candidates::CandidateQueue;
    use hint_finder::algorithm::sample::Sample;
    use hint_finder::measure::{ContinuousMeasure, Measure};
    use hint_finder::spatial::{Database, Hyperinterval};

    fn queue_over(values: &[f64]) -> (Database, CandidateQueue) {
        let database =
            Database::from_rows(values.iter().map(|&v| vec![v]).collect()).expect("valid database");
        let mut measure = ContinuousMeasure::new();
        measure.initialize(&database).expect("initialize");
        let sample =
            Sample::from_indices((0..values.len()).collect(), values.len()).expect("valid sample");
        let queue = CandidateQueue::new(&database, &sample, &measure);
        (database, queue)
    }

    // Tests every unordered pair is queued with the closest first
    // Verified by sorting in descending order
    #[test]
    fn test_all_pairs_queued_closest_first() {
        let (_, queue) = queue_over(&[0.0, 1.0, 10.0]);

        assert_eq!(queue.len(), 3);
        let closest = queue.peek().expect("non-empty queue");
        assert_eq!((closest.first, closest.second), (0, 1));
        assert!((closest.distance - 0.1).abs() < 1e-12);
    }

    // Tests seeds come out in ascending distance as bounding hyperintervals
    // Verified by popping from the wrong end
    #[test]
    fn test_seeds_in_ascending_distance() {
        let (database, mut queue) = queue_over(&[0.0, 1.0, 10.0]);

        let seeds: Vec<Hyperinterval> =
            std::iter::from_fn(|| queue.next_seed(&database, None)).collect();
        let bounds: Vec<(f64, f64)> = seeds
            .iter()
            .map(|s| {
                (
                    s.lower().first().copied().unwrap_or_default(),
                    s.upper().first().copied().unwrap_or_default(),
                )
            })
            .collect();

        assert_eq!(bounds, vec![(0.0, 1.0), (1.0, 10.0), (0.0, 10.0)]);
        assert!(queue.is_empty());
        assert!(queue.next_seed(&database, None).is_none());
    }

    // Tests pairs at equal distance keep their enumeration order
    // Verified by using an unstable sort
    #[test]
    fn test_ties_keep_enumeration_order() {
        let (database, mut queue) = queue_over(&[0.0, 1.0, 2.0]);

        let first = queue.next_seed(&database, None).expect("seed");
        let second = queue.next_seed(&database, None).expect("seed");

        assert_eq!(first.lower(), &[0.0]);
        assert_eq!(second.lower(), &[1.0]);
    }

    // Tests an exclusion covering both records of every pair exhausts the queue
    // Verified by applying the exclusion after popping
    #[test]
    fn test_exclusion_exhausts_queue() {
        let (database, mut queue) = queue_over(&[0.0, 1.0, 10.0]);

        let seed = queue.next_seed(&database, None).expect("seed");
        assert_eq!(seed.upper(), &[1.0]);

        assert!(queue.next_seed(&database, Some(&seed)).is_none());
        assert!(queue.is_empty());
    }

    // Tests excluding one record drops only the pairs that use it
    // Verified by dropping pairs with both records uncovered
    #[test]
    fn test_partial_exclusion() {
        let (database, mut queue) = queue_over(&[0.0, 1.0, 10.0]);
        let region = Hyperinterval::from_point(&[0.0]);

        queue.exclude(&database, &region);
        assert_eq!(queue.len(), 1);

        let seed = queue.next_seed(&database, None).expect("seed");
        assert_eq!(seed.lower(), &[1.0]);
        assert_eq!(seed.upper(), &[10.0]);
    }
}
