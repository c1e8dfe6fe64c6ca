// Mask effect tuning constants shared by the chain update and serializer.

// Blob sizing (diameters, CSS px)
pub const BLOB_SIZE_MAIN: f32 = 600.0; // lead blob
pub const BLOB_SIZE_TAIL: f32 = 360.0; // first tail, before falloff
pub const TAIL_COUNT: usize = 4;
pub const TOTAL_BLOBS: usize = 1 + TAIL_COUNT;
pub const TAIL_FALLOFF: f32 = 0.1; // each tail sheds this fraction of the base tail size

// Smoothing
pub const SMOOTH_MAIN: f32 = 0.15; // lead catch-up per tick; lower is snappier
pub const DELAY_FACTOR: f32 = 0.15; // tail follow per tick

// Reserved edge band width; the gradient currently fades across the full radius
pub const EDGE_FADE_PX: f32 = 40.0;

// DOM id of the overlay element the mask is written to
pub const REVEAL_LAYER_ID: &str = "reveal-layer";

#[inline]
pub fn tail_size(index: usize) -> f32 {
    BLOB_SIZE_TAIL * (1.0 - index as f32 * TAIL_FALLOFF)
}
