use rayon::ThreadPoolBuildError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("a sweep size must be at least 1")]
    ZeroSize,
    #[error("the sweep size {0} is not a power of two")]
    NotPowerOfTwo(usize),
    #[error("the log size {0} does not fit in a usize")]
    LogSizeTooLarge(u32),
    #[error("the sweep size {0} appears more than once")]
    DuplicateSize(usize),
    #[error("a sweep needs at least one size")]
    EmptySweep,
    #[error("the sweep size {size} exceeds the pre-allocated buffer length ({capacity})")]
    SizeExceedsCapacity { size: usize, capacity: usize },
    #[error("the Miller loop needs at least one pair of points")]
    EmptyPairingInput,
    #[error("the Miller loop got {g1} G1 points but {g2} G2 points")]
    PairingLengthMismatch { g1: usize, g2: usize },
    #[error("no radix-2 evaluation domain of size {0} exists for the scalar field")]
    DomainUnavailable(usize),
    #[error("invalid value {value:?} for {var}")]
    InvalidConfig { var: &'static str, value: String },
    #[error("failed to build the MSM thread pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}
