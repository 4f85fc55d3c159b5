//! The measured operations, each split into an untimed constructor and a
//! timed `run`.

use ark_ec::{
    pairing::{MillerLoopOutput, Pairing, PairingOutput},
    short_weierstrass::{Affine, Projective, SWCurveConfig},
    VariableBaseMSM,
};
use ark_ff::FftField;
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{
    config::MsmConfig, error::SweepError, Curve, G1Affine, G2Affine, ScalarField, TargetField,
};

/// Multi-scalar multiplication over one prefix of bases and scalars.
///
/// Bases are not checked: the benchmark bases are deliberately off-curve.
pub struct MultiExp<'a, C: SWCurveConfig> {
    bases: &'a [Affine<C>],
    scalars: &'a [C::ScalarField],
    pool: Option<ThreadPool>,
}

impl<'a, C: SWCurveConfig> MultiExp<'a, C> {
    pub fn new(
        bases: &'a [Affine<C>],
        scalars: &'a [C::ScalarField],
        config: &MsmConfig,
    ) -> Result<Self, SweepError> {
        let pool = config
            .num_threads
            .map(|n| ThreadPoolBuilder::new().num_threads(n).build())
            .transpose()?;
        Ok(Self {
            bases,
            scalars,
            pool,
        })
    }

    pub fn run(&self) -> Projective<C> {
        match &self.pool {
            Some(pool) => {
                pool.install(|| Projective::<C>::msm_unchecked(self.bases, self.scalars))
            }
            None => Projective::<C>::msm_unchecked(self.bases, self.scalars),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftVariant {
    Basic,
    Coset,
}

impl FftVariant {
    pub const ALL: [FftVariant; 2] = [FftVariant::Basic, FftVariant::Coset];

    pub fn name(self) -> &'static str {
        match self {
            FftVariant::Basic => "basic",
            FftVariant::Coset => "coset",
        }
    }
}

/// Forward FFT over a radix-2 domain sized to the input.
///
/// The input is copied into a working vector once, at construction. Each run
/// transforms that vector in place, so the source buffer stays untouched.
pub struct Fft {
    domain: Radix2EvaluationDomain<ScalarField>,
    evals: Vec<ScalarField>,
}

impl Fft {
    pub fn new(variant: FftVariant, input: &[ScalarField]) -> Result<Self, SweepError> {
        let size = input.len();
        let domain = match variant {
            FftVariant::Basic => Radix2EvaluationDomain::new(size),
            FftVariant::Coset => Radix2EvaluationDomain::new_coset(size, ScalarField::GENERATOR),
        }
        .filter(|d| d.size() == size)
        .ok_or(SweepError::DomainUnavailable(size))?;
        Ok(Self {
            domain,
            evals: input.to_vec(),
        })
    }

    pub fn domain(&self) -> &Radix2EvaluationDomain<ScalarField> {
        &self.domain
    }

    pub fn run(&mut self) -> &[ScalarField] {
        self.domain.fft_in_place(&mut self.evals);
        &self.evals
    }
}

/// Miller loop over paired G1/G2 inputs, without the final exponentiation.
pub struct MillerLoop<'a> {
    g1: &'a [G1Affine],
    g2: &'a [G2Affine],
}

impl<'a> MillerLoop<'a> {
    /// Rejects empty and mismatched inputs.
    pub fn new(g1: &'a [G1Affine], g2: &'a [G2Affine]) -> Result<Self, SweepError> {
        if g1.len() != g2.len() {
            return Err(SweepError::PairingLengthMismatch {
                g1: g1.len(),
                g2: g2.len(),
            });
        }
        if g1.is_empty() {
            return Err(SweepError::EmptyPairingInput);
        }
        Ok(Self { g1, g2 })
    }

    pub fn run(&self) -> MillerLoopOutput<Curve> {
        Curve::multi_miller_loop(self.g1.iter().copied(), self.g2.iter().copied())
    }
}

/// Final exponentiation of one target-group element.
pub struct FinalExp {
    input: MillerLoopOutput<Curve>,
}

impl FinalExp {
    pub fn new(input: TargetField) -> Self {
        Self {
            input: MillerLoopOutput(input),
        }
    }

    pub fn run(&self) -> Option<PairingOutput<Curve>> {
        Curve::final_exponentiation(self.input)
    }
}
