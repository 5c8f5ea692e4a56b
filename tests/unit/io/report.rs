//! Tests for the combinations artifact and console rendering

#[cfg(test)]
mod tests {
    use serde_json::json;
    use std::path::{Path, PathBuf};
    use tilecombo::io::report::{combinations_json, combinations_path, echo, render_pairs};
    use tilecombo::matching::matcher::{Combinations, Pair};

    fn sample() -> Combinations {
        Combinations {
            horizontal: vec![Pair(0, 0), Pair(1, 1)],
            vertical: vec![Pair(0, 1)],
        }
    }

    // Tests pairs render like a list of tuples
    // Verified by joining pairs without separators
    #[test]
    fn test_render_pairs() {
        assert_eq!(render_pairs(&[]), "[]");
        assert_eq!(render_pairs(&sample().horizontal), "[(0, 0), (1, 1)]");
    }

    // Tests the artifact holds horizontal and vertical arrays of pairs
    // Verified by serializing pairs as objects instead of arrays
    #[test]
    fn test_combinations_json_shape() {
        let text = combinations_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({"horizontal": [[0, 0], [1, 1]], "vertical": [[0, 1]]})
        );
        assert!(text.contains('\n'), "artifact should be pretty-printed");
    }

    // Tests the artifact keeps horizontal before vertical
    #[test]
    fn test_combinations_json_key_order() {
        let text = combinations_json(&Combinations::default()).unwrap();
        let horizontal = text.find("horizontal");
        let vertical = text.find("vertical");
        assert!(horizontal < vertical);
    }

    // Tests the artifact is written next to the output with a suffix
    // Verified by changing the combos suffix
    #[test]
    fn test_combinations_path() {
        assert_eq!(
            combinations_path(Path::new("/tmp/sheets/out.json")),
            PathBuf::from("/tmp/sheets/out_combos.json")
        );
        assert_eq!(
            combinations_path(Path::new("layout.json")),
            PathBuf::from("layout_combos.json")
        );
    }

    #[test]
    fn test_echo_does_not_panic() {
        echo(&sample());
        echo(&Combinations::default());
    }
}
