//! Throughput measurements for the BLS12-381 primitives a pairing-based proof
//! system spends its time in: MSM over G1 and G2, radix-2 FFTs over the scalar
//! field, Miller loops and the final exponentiation.

pub mod config;
pub mod env;
pub mod error;
pub mod measurements;
pub mod primitives;
pub mod samples;
pub mod sweep;

pub use config::{BenchConfig, MsmConfig};
pub use error::SweepError;
pub use sweep::{run_sweep, Harness, MeasurementId, SampleView, Sweep, SweepSize};

pub type Curve = ark_bls12_381::Bls12_381;
pub type G1Config = ark_bls12_381::g1::Config;
pub type G2Config = ark_bls12_381::g2::Config;
pub type G1Affine = ark_bls12_381::G1Affine;
pub type G2Affine = ark_bls12_381::G2Affine;
pub type ScalarField = ark_bls12_381::Fr;
pub type TargetField = <Curve as ark_ec::pairing::Pairing>::TargetField;
