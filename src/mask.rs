// Serialization of the blob chain into a composite CSS mask value.

use crate::chain::Blob;
use std::fmt::Write as _;

/// Build the `mask-image` value for the chain, lead first.
///
/// Each blob becomes one soft-edged circular region, opaque at the center and
/// transparent at the radius edge. The fade is a single hard transition over
/// the full radius; no separate edge band is emitted.
pub fn mask_image_value(blobs: &[Blob]) -> String {
    let mut value = String::with_capacity(blobs.len() * 80);
    for (i, b) in blobs.iter().enumerate() {
        if i > 0 {
            value.push_str(", ");
        }
        let radius = b.size * 0.5;
        let _ = write!(
            value,
            "radial-gradient(circle {}px at {}px {}px, black 0%, transparent 100%)",
            radius, b.pos.x, b.pos.y
        );
    }
    value
}
