use std::collections::VecDeque;

use crate::core::Vec2;

/// One recorded pointer position with its host-clock timestamp.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    pub pos: Vec2,
    pub time_ms: f64,
}

/// Bounded ring of recent pointer samples.
///
/// Pushing beyond capacity evicts the oldest sample, so the buffer always
/// spans the tail of the gesture. Release-velocity estimation only reads
/// the oldest and newest entries.
pub struct PointerHistory {
    samples: VecDeque<PointerSample>,
    capacity: usize,
}

impl PointerHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, pos: Vec2, time_ms: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(PointerSample { pos, time_ms });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn oldest(&self) -> Option<&PointerSample> {
        self.samples.front()
    }

    pub fn newest(&self) -> Option<&PointerSample> {
        self.samples.back()
    }
}
