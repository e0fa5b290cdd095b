//! Cursor trail: a fixed chain of dots chasing the pointer.
//!
//! Each frame the head moves to the cursor and every following dot eases
//! toward its successor's position from the previous frame (the final dot
//! wraps to the freshly updated head, which is what gives the trail its
//! characteristic loop-back).

use glam::Vec2;

use crate::constants::{TRAIL_EASE, TRAIL_LEN};

pub struct CursorTrail {
    points: Vec<Vec2>,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self {
            points: vec![Vec2::ZERO; TRAIL_LEN],
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Per-dot display opacity, fading down the chain.
    pub fn opacity(index: usize) -> f32 {
        (TRAIL_LEN.saturating_sub(index)) as f32 / 30.0
    }

    pub fn update(&mut self, cursor: Vec2) {
        let n = self.points.len();
        let mut head = cursor;
        for i in 0..n {
            self.points[i] = head;
            let next = self.points[(i + 1) % n];
            head += (next - head) * TRAIL_EASE;
        }
    }
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}
