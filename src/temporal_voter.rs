//! Majority vote over the most recent confident predictions.
//!
//! A prediction only enters the window if it clears the confidence gate, so
//! rejected frames never influence later votes.

use crate::library::logger::interface::Logger;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoterConfig {
    pub window_size: usize,
    pub confidence_threshold: f32,
}

impl Default for VoterConfig {
    fn default() -> Self {
        Self {
            window_size: 7,
            confidence_threshold: 0.70,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDecision {
    /// The prediction was below the confidence threshold and was not recorded.
    BelowConfidence,
    /// No label reached the majority threshold.
    NoMajority,
    /// The index does not name a label and was not recorded.
    IndexOutOfRange,
    /// There are no labels to vote on.
    EmptyLabelSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotingOutcome {
    Resolved(usize),
    NoDecision(NoDecision),
}

impl VotingOutcome {
    pub fn resolved(&self) -> Option<usize> {
        match self {
            VotingOutcome::Resolved(index) => Some(*index),
            VotingOutcome::NoDecision(_) => None,
        }
    }

    /// True when the prediction was turned away before reaching the window.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            VotingOutcome::NoDecision(NoDecision::BelowConfidence)
                | VotingOutcome::NoDecision(NoDecision::IndexOutOfRange)
                | VotingOutcome::NoDecision(NoDecision::EmptyLabelSet)
        )
    }
}

pub struct TemporalVoter {
    window: VecDeque<usize>,
    capacity: usize,
    confidence_threshold: f32,
    majority_threshold: usize,
    label_count: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl TemporalVoter {
    pub fn new(
        config: VoterConfig,
        label_count: usize,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let capacity = config.window_size.max(1);
        Self {
            window: VecDeque::new(),
            capacity,
            confidence_threshold: config.confidence_threshold,
            majority_threshold: capacity / 2,
            label_count,
            logger: logger.with_namespace("voter"),
        }
    }

    /// Follows a classifier whose labels changed, e.g. one that became
    /// available after setup. The window is cleared since old indices may no
    /// longer name the same labels.
    pub fn set_label_count(&mut self, label_count: usize) {
        if label_count == self.label_count {
            return;
        }

        let _ = self.logger.info(&format!(
            "Label count changed from {} to {}, clearing window",
            self.label_count, label_count
        ));
        self.label_count = label_count;
        self.window.clear();
    }

    pub fn label_count(&self) -> usize {
        self.label_count
    }

    pub fn record_and_vote(&mut self, top_index: usize, top_confidence: f32) -> VotingOutcome {
        if self.label_count == 0 {
            return VotingOutcome::NoDecision(NoDecision::EmptyLabelSet);
        }

        if top_index >= self.label_count {
            let _ = self.logger.warn(&format!(
                "Ignoring prediction index {} outside {} labels",
                top_index, self.label_count
            ));
            return VotingOutcome::NoDecision(NoDecision::IndexOutOfRange);
        }

        if top_confidence.is_nan() || top_confidence < self.confidence_threshold {
            return VotingOutcome::NoDecision(NoDecision::BelowConfidence);
        }

        self.window.push_back(top_index);
        while self.window.len() > self.capacity {
            self.window.pop_front();
        }

        self.vote()
    }

    fn vote(&self) -> VotingOutcome {
        let mut counts = vec![0usize; self.label_count];
        for &index in &self.window {
            counts[index] += 1;
        }

        let mut best_index = 0;
        let mut best_count = 0;
        for (index, &count) in counts.iter().enumerate() {
            if count > best_count {
                best_count = count;
                best_index = index;
            }
        }

        if best_count > 0 && best_count >= self.majority_threshold {
            VotingOutcome::Resolved(best_index)
        } else {
            VotingOutcome::NoDecision(NoDecision::NoMajority)
        }
    }

    /// Oldest first.
    pub fn window(&self) -> Vec<usize> {
        self.window.iter().copied().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn majority_threshold(&self) -> usize {
        self.majority_threshold
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }
}
