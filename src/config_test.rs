#[cfg(test)]
mod tests {
    use crate::config::{Config, DisplayKind, MAX_WINDOW_SIZE};
    use crate::feature_encoder::HandOrder;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.frame_interval, Duration::from_millis(100));
        assert_eq!(config.window_size, 7);
        assert_eq!(config.confidence_threshold, 0.70);
        assert_eq!(config.hand_order, HandOrder::DetectorOrder);
        assert_eq!(config.model_input_shape, vec![1, 1, 126]);
        assert_eq!(config.display, DisplayKind::Console);
        assert_eq!(config.max_frames, None);
    }

    #[test]
    fn test_no_overrides_is_default() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.window_size, Config::default().window_size);
        assert_eq!(config.labels_path, Config::default().labels_path);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SIGN_GESTURE_FRAME_INTERVAL_MS", "50"),
            ("SIGN_GESTURE_WINDOW_SIZE", "9"),
            ("SIGN_GESTURE_CONFIDENCE_THRESHOLD", "0.8"),
            ("SIGN_GESTURE_HAND_ORDER", "left_to_right"),
            ("SIGN_GESTURE_MODEL", "/tmp/model.onnx"),
            ("SIGN_GESTURE_LABELS", "/tmp/labels.txt"),
            ("SIGN_GESTURE_MODEL_INPUT_SHAPE", "1, 126"),
            ("SIGN_GESTURE_DISPLAY", "gui"),
            ("SIGN_GESTURE_MAX_FRAMES", "30"),
        ]))
        .unwrap();

        assert_eq!(config.frame_interval, Duration::from_millis(50));
        assert_eq!(config.window_size, 9);
        assert_eq!(config.confidence_threshold, 0.8);
        assert_eq!(config.hand_order, HandOrder::LeftToRight);
        assert_eq!(config.model_path, PathBuf::from("/tmp/model.onnx"));
        assert_eq!(config.labels_path, PathBuf::from("/tmp/labels.txt"));
        assert_eq!(config.model_input_shape, vec![1, 126]);
        assert_eq!(config.display, DisplayKind::Gui);
        assert_eq!(config.max_frames, Some(30));

        let voter = config.voter();
        assert_eq!(voter.window_size, 9);
        assert_eq!(voter.confidence_threshold, 0.8);
    }

    #[test]
    fn test_malformed_values_fail() {
        for (key, value) in [
            ("SIGN_GESTURE_FRAME_INTERVAL_MS", "soon"),
            ("SIGN_GESTURE_WINDOW_SIZE", "0"),
            ("SIGN_GESTURE_CONFIDENCE_THRESHOLD", "1.5"),
            ("SIGN_GESTURE_HAND_ORDER", "random"),
            ("SIGN_GESTURE_MODEL_INPUT_SHAPE", "1,x"),
            ("SIGN_GESTURE_DISPLAY", "lcd"),
            ("SIGN_GESTURE_UTC_OFFSET_HOURS", "99"),
        ] {
            assert!(
                Config::from_lookup(lookup(&[(key, value)])).is_err(),
                "{key}={value} should be rejected"
            );
        }
    }

    #[test]
    fn test_window_size_is_capped() {
        let too_big = (MAX_WINDOW_SIZE + 1).to_string();
        let error = Config::from_lookup(lookup(&[(
            "SIGN_GESTURE_WINDOW_SIZE",
            too_big.as_str(),
        )]))
        .err()
        .unwrap();
        assert!(error.to_string().contains("SIGN_GESTURE_WINDOW_SIZE"));

        assert!(
            Config::from_lookup(lookup(&[("SIGN_GESTURE_WINDOW_SIZE", "1099511627776")])).is_err()
        );

        let largest = MAX_WINDOW_SIZE.to_string();
        let config =
            Config::from_lookup(lookup(&[("SIGN_GESTURE_WINDOW_SIZE", largest.as_str())])).unwrap();
        assert_eq!(config.window_size, MAX_WINDOW_SIZE);
    }
}
