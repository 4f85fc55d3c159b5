use std::str::FromStr;

use crate::{error::SweepError, sweep::Sweep};

pub const LOG_SIZES_VAR: &str = "BENCH_LOG_SIZES";
pub const PAIRING_MAX_SIZE_VAR: &str = "BENCH_PAIRING_MAX_SIZE";
pub const MSM_THREADS_VAR: &str = "BENCH_MSM_THREADS";

/// Log2 of the sizes swept by the MSM and FFT measurements. Larger runs use
/// e.g. `BENCH_LOG_SIZES=9,10,11,12,18,20,22,24`.
pub const DEFAULT_LOG_SIZES: [u32; 4] = [9, 10, 11, 12];

/// Miller loops are measured at every size in `1..=DEFAULT_PAIRING_MAX_SIZE`.
pub const DEFAULT_PAIRING_MAX_SIZE: usize = 30;

/// Options forwarded to the multi-scalar multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsmConfig {
    /// Run the MSM in a dedicated pool of this many threads instead of the
    /// global rayon pool.
    pub num_threads: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub log_sizes: Vec<u32>,
    pub pairing_max_size: usize,
    pub msm: MsmConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            log_sizes: DEFAULT_LOG_SIZES.to_vec(),
            pairing_max_size: DEFAULT_PAIRING_MAX_SIZE,
            msm: MsmConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, SweepError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a configuration from the defaults, overridden by whatever
    /// `lookup` returns for [LOG_SIZES_VAR], [PAIRING_MAX_SIZE_VAR] and
    /// [MSM_THREADS_VAR].
    pub fn from_lookup<L>(lookup: L) -> Result<Self, SweepError>
    where
        L: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(LOG_SIZES_VAR) {
            config.log_sizes = value
                .split(',')
                .map(|s| parse_var(LOG_SIZES_VAR, s))
                .collect::<Result<_, _>>()?;
        }
        if let Some(value) = lookup(PAIRING_MAX_SIZE_VAR) {
            config.pairing_max_size = parse_var(PAIRING_MAX_SIZE_VAR, &value)?;
        }
        if let Some(value) = lookup(MSM_THREADS_VAR) {
            let threads: usize = parse_var(MSM_THREADS_VAR, &value)?;
            if threads == 0 {
                return Err(SweepError::InvalidConfig {
                    var: MSM_THREADS_VAR,
                    value,
                });
            }
            config.msm.num_threads = Some(threads);
        }
        // surface bad sweeps here rather than halfway through a bench run
        config.log_sweep()?;
        config.pairing_sweep()?;
        Ok(config)
    }

    pub fn log_sweep(&self) -> Result<Sweep, SweepError> {
        Sweep::power_of_two(&self.log_sizes)
    }

    pub fn pairing_sweep(&self) -> Result<Sweep, SweepError> {
        Sweep::linear(self.pairing_max_size)
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: &str) -> Result<T, SweepError> {
    value.trim().parse().map_err(|_| SweepError::InvalidConfig {
        var,
        value: value.to_string(),
    })
}
