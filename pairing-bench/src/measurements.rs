//! One entry per measured primitive family. Each entry allocates its sample
//! buffers at the largest size of its sweep, fills them once, then measures
//! every size on a prefix of those buffers.

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{UniformRand, Zero};
use rand_core::RngCore;
use tracing::debug;

use crate::{
    config::MsmConfig,
    error::SweepError,
    primitives::{Fft, FftVariant, FinalExp, MillerLoop, MultiExp},
    samples::{fill_bench_bases, fill_bench_scalars},
    sweep::{run_sweep, Harness, Sweep},
    G1Config, G2Config, ScalarField, TargetField,
};

pub const MULTI_EXP_G1: &str = "multi_exp_g1";
pub const MULTI_EXP_G2: &str = "multi_exp_g2";
pub const FFT: &str = "fft";
pub const MILLER_LOOP: &str = "miller_loop";
pub const FINAL_EXP: &str = "final_exp";

pub fn multi_exp_g1<H: Harness, R: RngCore + ?Sized>(
    harness: &mut H,
    rng: &mut R,
    sweep: &Sweep,
    config: &MsmConfig,
) -> Result<(), SweepError> {
    multi_exp::<G1Config, _, _>(harness, rng, MULTI_EXP_G1, sweep, config)
}

pub fn multi_exp_g2<H: Harness, R: RngCore + ?Sized>(
    harness: &mut H,
    rng: &mut R,
    sweep: &Sweep,
    config: &MsmConfig,
) -> Result<(), SweepError> {
    multi_exp::<G2Config, _, _>(harness, rng, MULTI_EXP_G2, sweep, config)
}

fn multi_exp<C, H, R>(
    harness: &mut H,
    rng: &mut R,
    family: &str,
    sweep: &Sweep,
    config: &MsmConfig,
) -> Result<(), SweepError>
where
    C: SWCurveConfig,
    H: Harness,
    R: RngCore + ?Sized,
{
    let max_size = sweep.max_size();
    let mut scalars = vec![C::ScalarField::zero(); max_size];
    let mut bases = vec![Affine::<C>::identity(); max_size];
    fill_bench_scalars(rng, &mut scalars);
    fill_bench_bases(&mut bases);
    debug!(family, max_size, "filled MSM samples");

    run_sweep(
        harness,
        family,
        "msm",
        sweep,
        (&bases[..], &scalars[..]),
        |(bases, scalars)| MultiExp::new(bases, scalars, config),
        |msm| msm.run(),
    )
}

/// Forward FFT, once over the plain domain and once over its coset.
pub fn fft<H: Harness, R: RngCore + ?Sized>(
    harness: &mut H,
    rng: &mut R,
    sweep: &Sweep,
) -> Result<(), SweepError> {
    let max_size = sweep.max_size();
    let mut scalars = vec![ScalarField::zero(); max_size];
    fill_bench_scalars(rng, &mut scalars);
    debug!(max_size, "filled FFT samples");

    for variant in FftVariant::ALL {
        run_sweep(
            harness,
            FFT,
            variant.name(),
            sweep,
            &scalars[..],
            |input| Fft::new(variant, input),
            |fft| fft.run()[0],
        )?;
    }
    Ok(())
}

pub fn miller_loop<H: Harness>(harness: &mut H, sweep: &Sweep) -> Result<(), SweepError> {
    let max_size = sweep.max_size();
    let mut g1 = vec![Affine::<G1Config>::identity(); max_size];
    let mut g2 = vec![Affine::<G2Config>::identity(); max_size];
    fill_bench_bases(&mut g1);
    fill_bench_bases(&mut g2);
    debug!(max_size, "filled Miller loop samples");

    run_sweep(
        harness,
        MILLER_LOOP,
        "multi",
        sweep,
        (&g1[..], &g2[..]),
        |(g1, g2)| MillerLoop::new(g1, g2),
        |ml| ml.run(),
    )
}

/// The final exponentiation works on a single target-group element, drawn
/// once before the measurement starts.
pub fn final_exp<H: Harness, R: RngCore + ?Sized>(
    harness: &mut H,
    rng: &mut R,
) -> Result<(), SweepError> {
    let input = [TargetField::rand(rng)];
    run_sweep(
        harness,
        FINAL_EXP,
        "random",
        &Sweep::single(1)?,
        &input[..],
        |input| Ok(FinalExp::new(input[0])),
        |fe| fe.run(),
    )
}
