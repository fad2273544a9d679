/// Stochastic mechanics: RNG helpers and seed-stream derivation.
/// Note: uses `bevy_prng::WyRand` behind `&RefCell<>` so callers
/// can share one generator across closures while mutating its state.
use bevy_prng::WyRand;
use rand_core::RngCore;
use std::cell::RefCell;

/// Uniform draw in [0, 1) with 53 bits of mantissa.
#[inline]
pub fn uniform01(rng: &RefCell<WyRand>) -> f64 {
    let mut r = rng.borrow_mut();
    ((r.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Gaussian(0,1) via BoxMuller using WyRand.
#[inline]
pub fn gaussian01(rng: &RefCell<WyRand>) -> f64 {
    let u1 = uniform01(rng);
    let u2 = uniform01(rng);
    let r = (-2.0 * u1.ln()).sqrt();
    let t = 2.0 * std::f64::consts::PI * u2;
    r * t.cos()
}

/// Bernoulli(p) with WyRand.
#[inline]
pub fn bernoulli(rng: &RefCell<WyRand>, p: f64) -> bool {
    uniform01(rng) < p.clamp(0.0, 1.0)
}

/// Derive an independent seed for a sub-stream (splitmix64 finalizer).
/// Used by the driver to give each day and each (day, actor) pair its
/// own WyRand, so fixed-seed runs stay reproducible even if callers
/// retrain actors out of order or in parallel.
#[inline]
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    let mut z = base ^ stream.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
