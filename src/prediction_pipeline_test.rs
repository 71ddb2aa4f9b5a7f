#[cfg(test)]
mod tests {
    use crate::feature_encoder::{FeatureEncoder, FeatureVector};
    use crate::gesture_classifier::error::ClassifierError;
    use crate::gesture_classifier::impl_fake::{one_hot, GestureClassifierFake};
    use crate::gesture_classifier::interface::{ClassificationResult, GestureClassifier};
    use crate::gesture_classifier::labels::LabelSet;
    use crate::hand_detector::impl_fake::open_hand;
    use crate::hand_detector::interface::DetectorError;
    use crate::landmark::{Hand, HandSet};
    use crate::library::logger::impl_fake::LoggerFake;
    use crate::prediction_pipeline::{FrameOutcome, PredictionPipeline};
    use crate::temporal_voter::{NoDecision, VoterConfig, VotingOutcome};
    use std::sync::{Arc, OnceLock};

    /// Unavailable until `load` is called, like a model fetched after setup.
    struct LateClassifier {
        loaded: OnceLock<LabelSet>,
        empty: LabelSet,
    }

    impl LateClassifier {
        fn new() -> Self {
            Self {
                loaded: OnceLock::new(),
                empty: LabelSet::empty(),
            }
        }

        fn load(&self, labels: LabelSet) {
            let _ = self.loaded.set(labels);
        }
    }

    impl GestureClassifier for LateClassifier {
        fn labels(&self) -> &LabelSet {
            self.loaded.get().unwrap_or(&self.empty)
        }

        fn is_available(&self) -> bool {
            self.loaded.get().is_some()
        }

        fn classify(
            &self,
            _features: &FeatureVector,
        ) -> Result<ClassificationResult, ClassifierError> {
            match self.loaded.get() {
                Some(labels) => Ok(one_hot(labels.len(), 1, 0.95)),
                None => Err(ClassifierError::ModelUnavailable),
            }
        }
    }

    fn labels() -> LabelSet {
        LabelSet::parse("hello\nthanks\nyes\nno\nplease\nsorry")
    }

    fn one_hand() -> HandSet {
        HandSet::new(vec![Hand::new(open_hand(0.5, 0.6))])
    }

    fn pipeline(
        classifier: Arc<GestureClassifierFake>,
    ) -> (PredictionPipeline, Arc<LoggerFake>) {
        let logger = Arc::new(LoggerFake::new());
        let pipeline = PredictionPipeline::new(
            FeatureEncoder::default(),
            classifier,
            VoterConfig::default(),
            logger.clone(),
        );
        (pipeline, logger)
    }

    fn scripted(
        responses: Vec<Result<ClassificationResult, ClassifierError>>,
    ) -> Arc<GestureClassifierFake> {
        Arc::new(GestureClassifierFake::scripted(labels(), responses))
    }

    #[test]
    fn test_empty_hand_set_skips_classifier() {
        let classifier = Arc::new(GestureClassifierFake::constant(labels(), 2, 0.95));
        let (mut pipeline, _) = pipeline(classifier.clone());

        assert_eq!(pipeline.process_frame_outcome(&HandSet::empty()), FrameOutcome::NoHands);
        assert_eq!(pipeline.process_frame(&HandSet::empty()), None);
        assert_eq!(classifier.calls(), 0);
        assert!(pipeline.window().is_empty());
    }

    #[test]
    fn test_seven_confident_frames_resolve() {
        let classifier = Arc::new(GestureClassifierFake::constant(labels(), 2, 0.95));
        let (mut pipeline, _) = pipeline(classifier);

        let results: Vec<Option<String>> =
            (0..7).map(|_| pipeline.process_frame(&one_hand())).collect();

        assert_eq!(results[0], None);
        assert_eq!(results[1], None);
        assert_eq!(results[6], Some("yes".to_string()));
        assert_eq!(pipeline.current_label(), Some("yes"));
        assert_eq!(pipeline.window(), vec![2; 7]);
    }

    #[test]
    fn test_new_gesture_takes_over_once_it_has_three_votes() {
        let mut responses = vec![Ok(one_hot(6, 2, 0.95)); 2];
        responses.extend(vec![Ok(one_hot(6, 5, 0.95)); 5]);
        let (mut pipeline, _) = pipeline(scripted(responses));

        let results: Vec<Option<String>> =
            (0..7).map(|_| pipeline.process_frame(&one_hand())).collect();

        assert_eq!(results[2], None);
        assert_eq!(results[3], None);
        // Third vote for index 5 arrives on the fifth frame.
        assert_eq!(results[4], Some("sorry".to_string()));
        assert_eq!(results[6], Some("sorry".to_string()));
    }

    #[test]
    fn test_low_confidence_frame_does_not_change_outcome() {
        let mut responses = vec![Ok(one_hot(6, 1, 0.9)); 3];
        responses.push(Ok(one_hot(6, 4, 0.69)));
        let (mut pipeline, _) = pipeline(scripted(responses));

        for _ in 0..3 {
            pipeline.process_frame(&one_hand());
        }
        let outcome = pipeline.process_frame_outcome(&one_hand());

        assert_eq!(
            outcome,
            FrameOutcome::Voted {
                top_index: 4,
                confidence: 0.69,
                outcome: VotingOutcome::NoDecision(NoDecision::BelowConfidence),
            }
        );
        assert_eq!(pipeline.window(), vec![1, 1, 1]);
        assert_eq!(pipeline.current_label(), Some("thanks"));
    }

    #[test]
    fn test_unavailable_classifier_never_decides() {
        let classifier = Arc::new(GestureClassifierFake::unavailable());
        let (mut pipeline, logger) = pipeline(classifier.clone());

        for _ in 0..10 {
            assert_eq!(
                pipeline.process_frame_outcome(&one_hand()),
                FrameOutcome::ClassifierFailed(ClassifierError::ModelUnavailable)
            );
        }
        assert_eq!(classifier.calls(), 10);
        assert_eq!(pipeline.current_label(), None);
        assert!(logger.contains("Gesture model unavailable"));
    }

    #[test]
    fn test_classifier_failure_keeps_history() {
        let responses = vec![
            Ok(one_hot(6, 3, 0.9)),
            Ok(one_hot(6, 3, 0.9)),
            Err(ClassifierError::Inference("timeout".to_string())),
            Ok(one_hot(6, 3, 0.9)),
        ];
        let (mut pipeline, _) = pipeline(scripted(responses));

        assert_eq!(pipeline.process_frame(&one_hand()), None);
        assert_eq!(pipeline.process_frame(&one_hand()), None);
        assert_eq!(pipeline.process_frame(&one_hand()), None);
        assert_eq!(pipeline.window(), vec![3, 3]);
        assert_eq!(pipeline.process_frame(&one_hand()), Some("no".to_string()));
    }

    #[test]
    fn test_out_of_range_prediction_is_ignored() {
        let responses = vec![
            Ok(one_hot(6, 0, 0.9)),
            Ok(one_hot(6, 0, 0.9)),
            // More scores than labels.
            Ok(one_hot(9, 8, 0.99)),
            Ok(one_hot(6, 0, 0.9)),
        ];
        let (mut pipeline, logger) = pipeline(scripted(responses));

        pipeline.process_frame(&one_hand());
        pipeline.process_frame(&one_hand());
        let outcome = pipeline.process_frame_outcome(&one_hand());

        match outcome {
            FrameOutcome::Voted { outcome, .. } => {
                assert_eq!(outcome, VotingOutcome::NoDecision(NoDecision::IndexOutOfRange));
                assert!(outcome.is_rejected());
            }
            other => panic!("Unexpected outcome: {:?}", other),
        }
        assert!(logger.contains("outside 6 labels"));
        assert_eq!(pipeline.process_frame(&one_hand()), Some("hello".to_string()));
    }

    #[test]
    fn test_empty_scores_are_no_decision() {
        let (mut pipeline, _) = pipeline(scripted(vec![Ok(ClassificationResult::new(vec![]))]));

        assert_eq!(
            pipeline.process_frame_outcome(&one_hand()),
            FrameOutcome::EmptyPrediction
        );
        assert!(pipeline.window().is_empty());
    }

    #[test]
    fn test_detector_failure_is_treated_as_no_hands() {
        let classifier = Arc::new(GestureClassifierFake::constant(labels(), 2, 0.95));
        let (mut pipeline, logger) = pipeline(classifier.clone());

        let label = pipeline.process_detection(Err(DetectorError::DetectorFailure(
            "camera glitch".to_string(),
        )));

        assert_eq!(label, None);
        assert_eq!(classifier.calls(), 0);
        assert!(logger.contains("camera glitch"));
    }

    #[test]
    fn test_current_label_survives_frames_without_decision() {
        let classifier = Arc::new(GestureClassifierFake::constant(labels(), 0, 0.95));
        let (mut pipeline, _) = pipeline(classifier);

        for _ in 0..3 {
            pipeline.process_frame(&one_hand());
        }
        assert_eq!(pipeline.current_label(), Some("hello"));

        assert_eq!(pipeline.process_frame(&HandSet::empty()), None);
        assert_eq!(pipeline.current_label(), Some("hello"));
    }

    #[test]
    fn test_pipelines_do_not_share_history() {
        let classifier = Arc::new(GestureClassifierFake::constant(labels(), 1, 0.95));
        let (mut first, _) = pipeline(classifier.clone());
        let (second, _) = pipeline(classifier);

        for _ in 0..3 {
            first.process_frame(&one_hand());
        }

        assert_eq!(first.window().len(), 3);
        assert!(second.window().is_empty());
        assert_eq!(second.current_label(), None);
    }

    #[test]
    fn test_classifier_sees_labels() {
        let classifier = Arc::new(GestureClassifierFake::constant(labels(), 1, 0.95));

        assert_eq!(classifier.labels().len(), 6);
        assert!(classifier.is_available());
    }

    #[test]
    fn test_classifier_available_after_setup_starts_deciding() {
        let classifier = Arc::new(LateClassifier::new());
        let logger = Arc::new(LoggerFake::new());
        let mut pipeline = PredictionPipeline::new(
            FeatureEncoder::default(),
            classifier.clone(),
            VoterConfig::default(),
            logger,
        );

        assert_eq!(
            pipeline.process_frame_outcome(&one_hand()),
            FrameOutcome::ClassifierFailed(ClassifierError::ModelUnavailable)
        );

        classifier.load(LabelSet::parse("a\nb\nc"));
        let results: Vec<Option<String>> =
            (0..7).map(|_| pipeline.process_frame(&one_hand())).collect();

        assert_eq!(results[1], None);
        assert_eq!(results[2], Some("b".to_string()));
        assert_eq!(results[6], Some("b".to_string()));
        assert_eq!(pipeline.current_label(), Some("b"));
    }
}
