//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use hint_finder::HintError;
    use hint_finder::io::error::{WithContext, invalid_data, invalid_parameter, parse_error};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = HintError::FileSystem {
            path: "/tmp/database.txt".into(),
            operation: "open database",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("open database"));
        assert!(error.to_string().contains("/tmp/database.txt"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("sample_size", &2, &"must be at least 3");

        let message = error.to_string();
        assert!(message.contains("sample_size"));
        assert!(message.contains('2'));
        assert!(message.contains("must be at least 3"));
        assert!(error.source().is_none());
    }

    // Tests InvalidSourceData carries its reason
    // Verified by formatting a fixed message
    #[test]
    fn test_invalid_data_error() {
        let error = invalid_data(&"record 4 column 2 is not binary");

        assert!(matches!(error, HintError::InvalidSourceData { .. }));
        assert!(error.to_string().contains("record 4 column 2"));
    }

    // Tests parse errors pick up the file path through context
    // Verified by overwriting paths that are already set
    #[test]
    fn test_parse_error_with_path() {
        let result: Result<(), HintError> = Err(parse_error(7, &"'x': invalid float literal"));

        let error = result.with_path(Path::new("data.txt")).expect_err("error kept");
        let message = error.to_string();
        assert!(message.contains("data.txt"));
        assert!(message.contains("line 7"));
    }

    // Tests an existing path is not replaced by context
    // Verified by always replacing the path
    #[test]
    fn test_with_path_keeps_existing_path() {
        let result: Result<(), HintError> = Err(HintError::FileSystem {
            path: PathBuf::from("first.txt"),
            operation: "read",
            source: std::io::Error::other("boom"),
        });

        match result.with_path(Path::new("second.txt")) {
            Err(HintError::FileSystem { path, .. }) => assert_eq!(path, PathBuf::from("first.txt")),
            _ => unreachable!("Expected FileSystem error"),
        }
    }

    // Tests IO errors convert with context applied afterwards
    // Verified by converting IO errors into InvalidSourceData
    #[test]
    fn test_io_error_conversion() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));

        match result.with_path(Path::new("out.txt")) {
            Err(HintError::FileSystem { path, source, .. }) => {
                assert_eq!(path, PathBuf::from("out.txt"));
                assert!(source.to_string().contains("disk full"));
            }
            _ => unreachable!("Expected FileSystem error"),
        }
    }
}
