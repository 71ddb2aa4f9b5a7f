//! Fixed-size encoding of a frame's hands for the gesture classifier.
//!
//! Layout: two hand slots of 21 points x (x, y, z). Slot 0 is the first hand
//! after ordering, slot 1 the second. Missing hands and missing points are
//! zero-filled, extra hands and extra points are ignored.

use crate::gesture_classifier::error::ClassifierError;
use crate::landmark::{Hand, HandSet, HAND_LANDMARK_COUNT, LANDMARK_DIMENSIONS};
use std::cmp::Ordering;

pub const HAND_SLOT_COUNT: usize = 2;

pub const SLOT_LEN: usize = HAND_LANDMARK_COUNT * LANDMARK_DIMENSIONS;

pub const FEATURE_VECTOR_LEN: usize = HAND_SLOT_COUNT * SLOT_LEN;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; FEATURE_VECTOR_LEN]);

impl FeatureVector {
    pub fn zeros() -> Self {
        Self([0.0; FEATURE_VECTOR_LEN])
    }

    /// Builds a vector from raw values produced outside the encoder.
    pub fn from_slice(values: &[f32]) -> Result<Self, ClassifierError> {
        let values: [f32; FEATURE_VECTOR_LEN] =
            values
                .try_into()
                .map_err(|_| ClassifierError::InvalidInputSize {
                    expected: FEATURE_VECTOR_LEN,
                    actual: values.len(),
                })?;
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn slot(&self, slot: usize) -> &[f32] {
        &self.0[slot * SLOT_LEN..(slot + 1) * SLOT_LEN]
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Which detected hand goes into which slot.
///
/// The model must be trained with the same convention it is run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandOrder {
    /// Slot 0 is the first hand the detector returned.
    #[default]
    DetectorOrder,
    /// Hands sorted by wrist x, smallest first. Hands without points go last.
    LeftToRight,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder {
    order: HandOrder,
}

impl FeatureEncoder {
    pub fn new(order: HandOrder) -> Self {
        Self { order }
    }

    pub fn encode(&self, hands: &HandSet) -> FeatureVector {
        let mut features = FeatureVector::zeros();

        for (slot, hand) in self
            .ordered(hands)
            .into_iter()
            .take(HAND_SLOT_COUNT)
            .enumerate()
        {
            write_slot(&mut features.0[slot * SLOT_LEN..(slot + 1) * SLOT_LEN], hand);
        }

        features
    }

    fn ordered<'a>(&self, hands: &'a HandSet) -> Vec<&'a Hand> {
        let mut ordered: Vec<&Hand> = hands.hands.iter().collect();

        if self.order == HandOrder::LeftToRight {
            // Stable sort keeps detector order for equal or missing wrists.
            ordered.sort_by(|a, b| match (a.wrist(), b.wrist()) {
                (Some(a), Some(b)) => a.x.total_cmp(&b.x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }

        ordered
    }
}

/// Encodes with the detector's own hand order.
pub fn encode(hands: &HandSet) -> FeatureVector {
    FeatureEncoder::default().encode(hands)
}

fn write_slot(slot: &mut [f32], hand: &Hand) {
    for (i, point) in hand.points.iter().take(HAND_LANDMARK_COUNT).enumerate() {
        let offset = i * LANDMARK_DIMENSIONS;
        slot[offset] = point.x;
        slot[offset + 1] = point.y;
        slot[offset + 2] = point.z;
    }
}
