//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tilecombo::io::error::{WithPath, invalid_descriptor, malformed_input};
    use tilecombo::{ComboError, ErrorKind};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ComboError::FileSystem {
            path: "/tmp/map.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert_eq!(error.kind(), ErrorKind::Io);
    }

    // Tests the mismatch message names both counts
    // Verified by omitting the descriptor count from the message
    #[test]
    fn test_edge_table_mismatch_error() {
        let error = ComboError::EdgeTableMismatch {
            expected: 70,
            actual: 69,
        };

        let message = error.to_string();
        assert!(message.contains("size mismatch"));
        assert!(message.contains("70"));
        assert!(message.contains("69"));
        assert!(error.source().is_none());
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }

    // Tests descriptor errors carry index, text and reason
    // Verified by omitting the reason from the message
    #[test]
    fn test_invalid_descriptor_error() {
        let error = invalid_descriptor(4, &"sgx", &"expected 4 edge symbols");
        let message = error.to_string();
        assert!(message.contains("sgx"));
        assert!(message.contains("index 4"));
        assert!(message.contains("expected 4 edge symbols"));
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_malformed_input_error() {
        let error = malformed_input(&"missing tileSize");
        assert_eq!(error.to_string(), "Malformed tile map: missing tileSize");
        assert_eq!(error.kind(), ErrorKind::MalformedInput);
        assert_eq!(
            ComboError::MissingEdges { tile: 3 }.kind(),
            ErrorKind::Configuration
        );
    }

    // Tests io failures are tagged with path and operation
    // Verified by dropping the operation from FileSystem errors
    #[test]
    fn test_with_path_io() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = result
            .with_path(Path::new("/restricted/out.json"), "write")
            .unwrap_err();

        let message = error.to_string();
        assert!(message.contains("/restricted/out.json"));
        assert!(message.contains("write"));
        assert!(message.contains("access denied"));
        assert!(matches!(
            error,
            ComboError::FileSystem { ref path, .. } if path == &PathBuf::from("/restricted/out.json")
        ));
    }

    // Tests JSON decode failures count as malformed input
    // Verified by mapping decode failures to Serialization
    #[test]
    fn test_json_input_vs_output() {
        let decode = serde_json::from_str::<serde_json::Value>("[1,");
        let input_error = decode.as_input(Path::new("in.json")).unwrap_err();
        assert_eq!(input_error.kind(), ErrorKind::MalformedInput);
        assert!(input_error.source().is_some());

        let decode = serde_json::from_str::<serde_json::Value>("[1,");
        let output_error = decode
            .with_path(Path::new("out.json"), "serialize")
            .unwrap_err();
        assert!(matches!(output_error, ComboError::Serialization { .. }));
        assert_eq!(output_error.kind(), ErrorKind::Io);
    }

    // Tests repeated tile ids get their own configuration error
    #[test]
    fn test_duplicate_tile_error() {
        let error = ComboError::DuplicateTile { tile: 16 };
        assert_eq!(
            error.to_string(),
            "Tile 16 appears more than once in the tile set"
        );
        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert!(error.source().is_none());
    }
}
