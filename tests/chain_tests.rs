// Host-side tests for the pure chain logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod chain {
    include!("../src/chain.rs");
}

use chain::{BlobChain, PointerTarget};
use constants::{BLOB_SIZE_MAIN, DELAY_FACTOR, SMOOTH_MAIN, TAIL_COUNT, TOTAL_BLOBS};
use glam::Vec2;

#[test]
fn chain_has_lead_plus_tails() {
    let chain = BlobChain::new(Vec2::ZERO);
    assert_eq!(chain.blobs().len(), TOTAL_BLOBS);
    assert_eq!(chain.blobs().len(), 1 + TAIL_COUNT);
}

#[test]
fn sizes_are_fixed_and_non_increasing() {
    let mut chain = BlobChain::new(Vec2::new(400.0, 300.0));
    let initial: Vec<f32> = chain.blobs().iter().map(|b| b.size).collect();

    assert_eq!(initial[0], BLOB_SIZE_MAIN);
    for pair in initial.windows(2) {
        assert!(pair[1] <= pair[0], "sizes must not grow along the chain");
        assert!(pair[1] > 0.0);
    }

    // Sizes survive a long run with a wandering target
    for k in 0..200 {
        let t = Vec2::new((k * 7 % 800) as f32, (k * 13 % 600) as f32);
        chain.step(t);
    }
    let after: Vec<f32> = chain.blobs().iter().map(|b| b.size).collect();
    assert_eq!(initial, after);
    assert_eq!(chain.blobs().len(), TOTAL_BLOBS);
}

#[test]
fn lead_single_tick_from_center() {
    let mut chain = BlobChain::new(Vec2::new(960.0, 540.0));
    chain.step(Vec2::new(500.0, 300.0));

    let lead = chain.blobs()[0];
    assert!((lead.pos.x - 891.0).abs() < 1e-3, "got {}", lead.pos.x);
    assert!((lead.pos.y - 504.0).abs() < 1e-3, "got {}", lead.pos.y);
}

#[test]
fn lead_distance_decays_exponentially() {
    let mut chain = BlobChain::new(Vec2::ZERO);
    let target = Vec2::new(100.0, 0.0);

    for k in 1..=8 {
        chain.step(target);
        let expected = 100.0 * (1.0 - SMOOTH_MAIN).powi(k);
        let distance = (target - chain.blobs()[0].pos).length();
        assert!(
            (distance - expected).abs() < 1e-2,
            "tick {k}: distance {distance}, expected {expected}"
        );
    }
}

#[test]
fn whole_chain_converges_on_a_steady_target() {
    let mut chain = BlobChain::new(Vec2::new(960.0, 540.0));
    let target = Vec2::new(320.0, 200.0);

    for _ in 0..600 {
        chain.step(target);
    }
    for (i, b) in chain.blobs().iter().enumerate() {
        let distance = (target - b.pos).length();
        assert!(distance < 0.5, "blob {i} still {distance}px away");
    }
}

#[test]
fn follower_tracks_the_leader_post_update() {
    let mut chain = BlobChain::new(Vec2::ZERO);
    chain.step(Vec2::new(100.0, 0.0));

    // Lead moved to 15 this tick; each follower sees its leader's fresh
    // position, not the pre-tick one (which would leave it at 0).
    let blobs = chain.blobs();
    assert!((blobs[0].pos.x - 15.0).abs() < 1e-4);
    assert!((blobs[1].pos.x - DELAY_FACTOR * 15.0).abs() < 1e-4);
    assert!((blobs[2].pos.x - DELAY_FACTOR * DELAY_FACTOR * 15.0).abs() < 1e-4);
    for b in blobs {
        assert_eq!(b.pos.y, 0.0);
    }
}

#[test]
fn pointer_target_overwrites_unconditionally() {
    let mut target = PointerTarget::new(Vec2::new(10.0, 10.0));
    target.set(50.0, 60.0);
    target.set(-5.0, 9000.0); // off-viewport values are kept as-is
    assert_eq!(target.pos, Vec2::new(-5.0, 9000.0));
}

#[test]
fn empty_touch_leaves_target_unchanged() {
    let mut target = PointerTarget::new(Vec2::new(33.0, 44.0));
    target.apply_touch(None);
    assert_eq!(target.pos, Vec2::new(33.0, 44.0));

    target.apply_touch(Some((1.0, 2.0)));
    assert_eq!(target.pos, Vec2::new(1.0, 2.0));
}
