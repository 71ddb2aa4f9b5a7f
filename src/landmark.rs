/// Points in a complete hand detection.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Values per landmark (x, y, z).
pub const LANDMARK_DIMENSIONS: usize = 3;

/// Skeleton edges between landmark indices, wrist first.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (5, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (9, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (13, 17),
    (17, 18),
    (18, 19),
    (19, 20),
    (0, 17),
];

/// x and y are normalized to the image, z is relative depth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hand {
    pub points: Vec<LandmarkPoint>,
}

impl Hand {
    pub fn new(points: Vec<LandmarkPoint>) -> Self {
        Self { points }
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() >= HAND_LANDMARK_COUNT
    }

    pub fn wrist(&self) -> Option<&LandmarkPoint> {
        self.points.first()
    }
}

/// Hands in the order the detector returned them. The order says nothing
/// about which physical hand is which.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandSet {
    pub hands: Vec<Hand>,
}

impl HandSet {
    pub fn new(hands: Vec<Hand>) -> Self {
        Self { hands }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn get(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }
}
