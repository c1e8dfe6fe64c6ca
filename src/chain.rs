// Pure chain state and per-tick smoothing. Nothing here touches the DOM;
// the module runs unchanged on native targets, which is where its tests live.

use crate::constants::{tail_size, BLOB_SIZE_MAIN, DELAY_FACTOR, SMOOTH_MAIN, TOTAL_BLOBS};
use glam::Vec2;

/// Last-write-wins pointer coordinate shared between the input handlers and
/// the frame tick. No clamping; it may sit outside the viewport while the
/// pointer is dragged past an edge.
#[derive(Clone, Copy, Debug)]
pub struct PointerTarget {
    pub pos: Vec2,
}

impl PointerTarget {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Apply the first touch point of a touch event, if any. An empty touch
    /// list leaves the target untouched.
    #[inline]
    pub fn apply_touch(&mut self, point: Option<(f32, f32)>) {
        if let Some((x, y)) = point {
            self.set(x, y);
        }
    }
}

/// One circle in the chain. `size` is a diameter fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct Blob {
    pub pos: Vec2,
    pub size: f32,
}

/// Ordered chain of blobs: index 0 is the lead, each later blob trails the
/// one before it. Created once, mutated every tick, never resized.
pub struct BlobChain {
    blobs: Vec<Blob>,
}

impl BlobChain {
    /// Build the chain with every blob parked at `origin`.
    pub fn new(origin: Vec2) -> Self {
        let blobs = (0..TOTAL_BLOBS)
            .map(|i| Blob {
                pos: origin,
                size: if i == 0 { BLOB_SIZE_MAIN } else { tail_size(i) },
            })
            .collect();
        Self { blobs }
    }

    #[inline]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    /// Advance the chain one tick toward `target`.
    ///
    /// The lead lerps toward the pointer target; each tail lerps toward the
    /// position its leader already reached this tick, so a displacement
    /// ripples down the chain one smoothing step per blob.
    pub fn step(&mut self, target: Vec2) {
        let lead = &mut self.blobs[0];
        lead.pos += (target - lead.pos) * SMOOTH_MAIN;

        for i in 1..self.blobs.len() {
            let leader_pos = self.blobs[i - 1].pos;
            let follower = &mut self.blobs[i];
            follower.pos += (leader_pos - follower.pos) * DELAY_FACTOR;
        }
    }
}
