//! Tests for discovery, coverage, boxes and summary rendering

#[cfg(test)]
mod tests {
    use hint_finder::algorithm::executor::{Discovery, SearchSummary, StopReason};
    use hint_finder::algorithm::growth::GrowthState;
    use hint_finder::io::report::{describe, itemset, write_boxes, write_coverage, write_summary};
    use hint_finder::spatial::{Database, Hyperinterval};

    fn discovery(lower: f64, upper: f64, kept: bool) -> Discovery {
        Discovery {
            hint: Hyperinterval::new(vec![lower], vec![upper]).expect("valid bounds"),
            complexity: -2.5,
            kept,
            inside_count: 4,
            pruned: Vec::new(),
            growth: GrowthState::Converged,
        }
    }

    fn summary(stop: Option<StopReason>) -> SearchSummary {
        SearchSummary {
            data_complexity: 0.0,
            base_complexity: -20.0,
            model_complexity: 5.0,
            discoveries: 3,
            kept: 1,
            stop,
        }
    }

    // Tests the discovery line format
    // Verified by swapping the KEPT and DISCARDED labels
    #[test]
    fn test_describe() {
        assert_eq!(
            describe(&discovery(0.0, 4.0, true)),
            "KEPT: [0..4] complexity: -2.5 covered: 4"
        );
        assert!(describe(&discovery(0.0, 4.0, false)).starts_with("DISCARDED: "));
    }

    // Tests itemset notation shows fixed values and wildcards
    // Verified by printing the lower bound of differing columns
    #[test]
    fn test_itemset() {
        let bounds = Hyperinterval::bounding(&[0.0, 0.0, 0.0, 0.0], &[1.0, 1.0, 1.0, 1.0]);
        let hint = Hyperinterval::bounding(&[1.0, 0.0, 1.0, 1.0], &[1.0, 0.0, 0.0, 1.0])
            .widened(3, &bounds);

        assert_eq!(itemset(&hint), "[1, 0, *, *]");
    }

    // Tests one coverage row per hyperinterval with a flag per record
    // Verified by emitting a row per record instead
    #[test]
    fn test_write_coverage() {
        let database =
            Database::from_rows(vec![vec![0.0], vec![5.0], vec![10.0]]).expect("valid database");
        let hints = vec![
            Hyperinterval::new(vec![0.0], vec![5.0]).expect("valid bounds"),
            Hyperinterval::new(vec![9.0], vec![10.0]).expect("valid bounds"),
        ];

        let mut out = Vec::<u8>::new();
        write_coverage(&mut out, &database, &hints).expect("write");

        assert_eq!(String::from_utf8(out).expect("utf8"), "1\t1\t0\n0\t0\t1\n");
    }

    // Tests kept boxes precede discarded boxes, separated by an empty line
    // Verified by writing discoveries in emission order
    #[test]
    fn test_write_boxes() {
        let discoveries = vec![
            discovery(0.0, 2.0, false),
            discovery(10.0, 14.0, true),
        ];

        let mut out = Vec::<u8>::new();
        write_boxes(&mut out, &discoveries).expect("write");

        assert_eq!(String::from_utf8(out).expect("utf8"), "12\t2\n\n\n1\t1\n");
    }

    // Tests the summary lists counts and reference complexities
    // Verified by omitting the reference line
    #[test]
    fn test_write_summary() {
        let mut out = Vec::<u8>::new();
        write_summary(&mut out, &summary(Some(StopReason::SampleExhausted))).expect("write");
        let text = String::from_utf8(out).expect("utf8");

        assert!(!text.contains("Interrupted"));
        assert!(text.contains("Discoveries:"));
        assert!(text.lines().any(|line| line.starts_with("Kept:") && line.ends_with(" 1")));
        assert!(
            text.lines()
                .any(|line| line.starts_with("Reference complexity:") && line.ends_with(" -15"))
        );
    }

    // Tests an interrupted run is flagged first
    // Verified by printing the flag last
    #[test]
    fn test_write_summary_interrupted() {
        let mut out = Vec::<u8>::new();
        write_summary(&mut out, &summary(Some(StopReason::Interrupted))).expect("write");

        assert!(String::from_utf8(out).expect("utf8").starts_with("Interrupted\n"));
    }
}
