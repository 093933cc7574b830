//! Tests for model save and load

#[cfg(test)]
mod tests {
    use markovtile::AlgorithmError;
    use markovtile::analysis::transitions::TransitionModel;
    use markovtile::io::persistence::{load_model, model_from_json, model_to_json, save_model};
    use markovtile::spatial::color::Color;

    fn sample_model() -> TransitionModel {
        let mut model = TransitionModel::new();
        let black = Color::rgb(0, 0, 0);
        let white = Color::rgb(255, 255, 255);
        let clear = Color::new(10, 20, 30, 0);
        for _ in 0..3 {
            model.record_edge(black, white);
        }
        model.record_edge(white, black);
        model.record_edge(white, clear);
        model.record_edge(clear, clear);
        model
    }

    // Tests a saved model restores to an identical model
    // Verified by persisting probabilities instead of counts
    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models").join("model.json");
        let model = sample_model();

        save_model(&model, &path).unwrap();
        let restored = load_model(&path).unwrap();

        assert_eq!(restored, model);
        assert_eq!(restored.total_pairs(), 6);
        assert_eq!(restored.out_degree(Color::rgb(255, 255, 255)), 2);
    }

    // Tests colors are stored packed and counts verbatim
    #[test]
    fn test_json_layout() {
        let mut model = TransitionModel::new();
        model
            .record_edges(Color::new(0, 0, 0, 255), Color::new(255, 0, 0, 255), 5)
            .unwrap();

        let json = model_to_json(&model).unwrap();

        assert_eq!(
            json,
            r#"{"version":1,"edges":[{"from":255,"to":4278190335,"count":5}]}"#
        );
    }

    // Tests an empty model survives the round trip
    #[test]
    fn test_empty_model_round_trip() {
        let json = model_to_json(&TransitionModel::new()).unwrap();

        assert!(model_from_json(&json).unwrap().is_empty());
    }

    // Tests zero counts are rejected
    // Verified by silently skipping zero-count edges
    #[test]
    fn test_zero_count_rejected() {
        let result = model_from_json(r#"{"version":1,"edges":[{"from":1,"to":2,"count":0}]}"#);

        assert!(matches!(result, Err(AlgorithmError::InvalidSourceData { .. })));
    }

    // Tests duplicate edges are rejected
    #[test]
    fn test_duplicate_edge_rejected() {
        let result = model_from_json(
            r#"{"version":1,"edges":[{"from":1,"to":2,"count":1},{"from":1,"to":2,"count":4}]}"#,
        );

        assert!(matches!(result, Err(AlgorithmError::InvalidSourceData { .. })));
    }

    // Tests counts whose sum exceeds u64::MAX are rejected instead of wrapping
    // Verified by summing restored counts with plain addition
    #[test]
    fn test_overflowing_counts_rejected() {
        let json = format!(
            r#"{{"version":1,"edges":[{{"from":1,"to":2,"count":{max}}},{{"from":1,"to":3,"count":{max}}}]}}"#,
            max = u64::MAX
        );

        let result = model_from_json(&json);

        assert!(matches!(result, Err(AlgorithmError::InvalidSourceData { .. })));
    }

    // Tests a single edge holding u64::MAX restores intact
    #[test]
    fn test_max_count_restores() {
        let json = format!(
            r#"{{"version":1,"edges":[{{"from":1,"to":2,"count":{}}}]}}"#,
            u64::MAX
        );

        let model = model_from_json(&json).unwrap();

        assert_eq!(model.total_pairs(), u64::MAX);
        assert!(model.check_invariants().is_ok());
    }

    // Tests unknown versions are rejected
    #[test]
    fn test_unknown_version_rejected() {
        let result = model_from_json(r#"{"version":99,"edges":[]}"#);

        assert!(matches!(result, Err(AlgorithmError::InvalidSourceData { .. })));
    }

    // Tests malformed files report the path
    // Verified by dropping the path from ModelFormat errors
    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        match load_model(&path) {
            Err(AlgorithmError::ModelFormat { path: reported, .. }) => assert_eq!(reported, path),
            other => unreachable!("Expected ModelFormat error, got {other:?}"),
        }
    }

    // Tests missing files surface a file system error
    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_model(&dir.path().join("absent.json"));

        assert!(matches!(result, Err(AlgorithmError::FileSystem { .. })));
    }
}
