//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use hint_finder::algorithm::executor::SearchConfig;
    use hint_finder::io::configuration::{
        BINARY_DISCRETIZATION_PER_COLUMN, DEFAULT_PERSEVERANCE, DEFAULT_THOROUGHNESS,
        DISABLED_DIMENSION_THOROUGHNESS, ITEMSET_WILDCARD, MIN_SAMPLE_SIZE,
    };

    // Tests the minimum sample allows a seed pair plus one candidate
    // Verified by lowering the minimum to two
    #[test]
    fn test_min_sample_size() {
        assert_eq!(MIN_SAMPLE_SIZE, 3);
    }

    // Tests default patience values fit the smallest valid sample
    // Verified by raising the default perseverance
    #[test]
    fn test_defaults_fit_minimal_sample() {
        let config = SearchConfig::new(MIN_SAMPLE_SIZE);

        assert_eq!(config.perseverance, DEFAULT_PERSEVERANCE);
        assert!(config.validate(MIN_SAMPLE_SIZE, 1).is_ok());
        assert_ne!(DEFAULT_THOROUGHNESS, 0);
    }

    // Tests pruning is disabled by -1 only
    // Verified by using zero as the disabling value
    #[test]
    fn test_disabled_dimension_thoroughness() {
        assert_eq!(DISABLED_DIMENSION_THOROUGHNESS, -1);
    }

    // Tests the binary discretization equals ln(6)/2 - ln(2)
    // Verified by truncating the constant
    #[test]
    fn test_binary_discretization_constant() {
        let expected = 6.0f64.ln() / 2.0 - std::f64::consts::LN_2;
        assert!((BINARY_DISCRETIZATION_PER_COLUMN - expected).abs() < 1e-15);
    }

    // Tests the itemset wildcard is a single character
    // Verified by using an empty placeholder
    #[test]
    fn test_itemset_wildcard() {
        assert_eq!(ITEMSET_WILDCARD.chars().count(), 1);
    }
}
