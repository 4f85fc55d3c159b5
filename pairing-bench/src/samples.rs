//! Synthetic inputs for the throughput measurements.
//!
//! The point generators in this module return coordinate pairs that are NOT on
//! the curve. They exist to feed MSM buckets and Miller loops with distinct,
//! non-degenerate values in linear time, and must never be used as fixtures
//! for correctness tests.

use ark_ec::{
    short_weierstrass::{Affine, SWCurveConfig},
    AffineRepr, CurveGroup,
};
use ark_ff::{One, UniformRand};
use rand_core::RngCore;
use tracing::debug;

use crate::{G1Config, G2Config};

/// Decimal form of [BENCH_BASE_MULTIPLIER]. It has no meaning beyond being a
/// fixed 138-bit value, large enough that `generator * multiplier` is neither
/// the identity nor the generator itself.
pub const BENCH_BASE_MULTIPLIER_DECIMAL: &str = "340444420969191673093399857471996460938405";

/// Little-endian u64 limbs of [BENCH_BASE_MULTIPLIER_DECIMAL].
pub const BENCH_BASE_MULTIPLIER: [u64; 3] = [0x0630_511a_37e2_34a5, 0x79ea_7973_3233_d8a3, 0x3e8];

/// Overwrites every slot with an independent uniform field element.
///
/// Uniform sampling populates every limb, so multipliers that special-case
/// small operands never get a chance to kick in.
pub fn fill_bench_scalars<F: UniformRand, R: RngCore + ?Sized>(rng: &mut R, scalars: &mut [F]) {
    for scalar in scalars.iter_mut() {
        *scalar = F::rand(rng);
    }
}

/// Fills `points` with a cheap sequence of distinct coordinate pairs.
///
/// `points[0]` is the group generator multiplied by [BENCH_BASE_MULTIPLIER].
/// Every following entry is `(x + 1, y - 1)` of its predecessor, so only the
/// first entry lies on the curve. Reusing a single valid point would make the
/// bucket accumulation of an MSM hit the doubling formula instead of the
/// addition one, and sampling `n` valid points takes minutes for large `n`.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn fill_bench_bases<C: SWCurveConfig>(points: &mut [Affine<C>]) {
    assert!(
        !points.is_empty(),
        "cannot derive benchmark bases into an empty buffer"
    );

    points[0] = Affine::<C>::generator()
        .mul_bigint(BENCH_BASE_MULTIPLIER)
        .into_affine();

    // reuse the coordinate's representation for the unit
    let mut unit = points[0].x;
    unit.set_one();

    for i in 1..points.len() {
        let (x, y) = (points[i - 1].x + unit, points[i - 1].y - unit);
        points[i] = Affine::new_unchecked(x, y);
    }
    debug!(len = points.len(), "derived benchmark bases");
}

pub fn fill_bench_bases_g1(points: &mut [Affine<G1Config>]) {
    fill_bench_bases(points)
}

pub fn fill_bench_bases_g2(points: &mut [Affine<G2Config>]) {
    fill_bench_bases(points)
}
