//! Sweep driver: measures one primitive over a list of input sizes.
//!
//! Buffers are filled once at the largest size of the sweep. Each size then
//! measures a prefix view of those buffers, after a setup step whose cost is
//! kept out of the measured region.

use std::{collections::HashSet, fmt};

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId};
use tracing::debug;

use crate::error::SweepError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeLabel {
    /// `logsize-NN`, for power-of-two sweeps.
    Log(u32),
    /// `size-NN`, for linear sweeps.
    Linear,
    /// A measurement taken at a single fixed size.
    Single,
}

/// One input cardinality of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SweepSize {
    pub size: usize,
    pub label: SizeLabel,
}

impl fmt::Display for SweepSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            SizeLabel::Log(log) => write!(f, "logsize-{log:02}"),
            SizeLabel::Linear => write!(f, "size-{:02}", self.size),
            SizeLabel::Single => write!(f, "single"),
        }
    }
}

/// A non-empty list of distinct, non-zero sizes. Order is kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    sizes: Vec<SweepSize>,
}

impl Sweep {
    fn new(sizes: Vec<SweepSize>) -> Result<Self, SweepError> {
        if sizes.is_empty() {
            return Err(SweepError::EmptySweep);
        }
        let mut seen = HashSet::with_capacity(sizes.len());
        for s in &sizes {
            if s.size == 0 {
                return Err(SweepError::ZeroSize);
            }
            if !seen.insert(s.size) {
                return Err(SweepError::DuplicateSize(s.size));
            }
        }
        Ok(Self { sizes })
    }

    /// Sweeps over `2^log` for each given `log`.
    pub fn power_of_two(log_sizes: &[u32]) -> Result<Self, SweepError> {
        let sizes = log_sizes
            .iter()
            .map(|&log| {
                1usize
                    .checked_shl(log)
                    .map(|size| SweepSize {
                        size,
                        label: SizeLabel::Log(log),
                    })
                    .ok_or(SweepError::LogSizeTooLarge(log))
            })
            .collect::<Result<_, _>>()?;
        Self::new(sizes)
    }

    /// Sweeps over the given sizes, each of which must be a power of two.
    pub fn from_sizes(sizes: &[usize]) -> Result<Self, SweepError> {
        let sizes = sizes
            .iter()
            .map(|&size| {
                if size == 0 {
                    Err(SweepError::ZeroSize)
                } else if !size.is_power_of_two() {
                    Err(SweepError::NotPowerOfTwo(size))
                } else {
                    Ok(SweepSize {
                        size,
                        label: SizeLabel::Log(size.trailing_zeros()),
                    })
                }
            })
            .collect::<Result<_, _>>()?;
        Self::new(sizes)
    }

    /// Sweeps over `1..=max`. A zero `max` is rejected: there is no such
    /// thing as an empty Miller loop measurement.
    pub fn linear(max: usize) -> Result<Self, SweepError> {
        let sizes = (1..=max)
            .map(|size| SweepSize {
                size,
                label: SizeLabel::Linear,
            })
            .collect();
        Self::new(sizes)
    }

    /// A single measurement at `size`.
    pub fn single(size: usize) -> Result<Self, SweepError> {
        Self::new(vec![SweepSize {
            size,
            label: SizeLabel::Single,
        }])
    }

    pub fn sizes(&self) -> &[SweepSize] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The buffer length needed to run the whole sweep.
    pub fn max_size(&self) -> usize {
        self.sizes.iter().map(|s| s.size).max().unwrap_or(0)
    }
}

/// Read-only sample buffers that can be narrowed to a prefix without copying.
pub trait SampleView: Copy {
    /// Number of elements available to every prefix.
    fn capacity(&self) -> usize;

    /// The first `len` elements. `len` must not exceed [SampleView::capacity].
    fn prefix(self, len: usize) -> Self;
}

impl<T> SampleView for &[T] {
    fn capacity(&self) -> usize {
        self.len()
    }

    fn prefix(self, len: usize) -> Self {
        &self[..len]
    }
}

impl<A, B> SampleView for (&[A], &[B]) {
    fn capacity(&self) -> usize {
        self.0.len().min(self.1.len())
    }

    fn prefix(self, len: usize) -> Self {
        (&self.0[..len], &self.1[..len])
    }
}

/// Names one measured configuration, e.g. `fft` / `coset` / `logsize-09`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementId<'a> {
    pub family: &'a str,
    pub variant: &'a str,
    pub size: SweepSize,
}

impl fmt::Display for MeasurementId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.family, self.variant, self.size)
    }
}

/// The timing framework. An implementation calls `routine` as many times as
/// it needs and reports the time per call; nothing it does before the first
/// call is attributed to the measurement.
pub trait Harness {
    fn measure<T, O, R>(&mut self, id: &MeasurementId<'_>, state: T, routine: R)
    where
        R: FnMut(&mut T) -> O;
}

impl<M: Measurement> Harness for BenchmarkGroup<'_, M> {
    fn measure<T, O, R>(&mut self, id: &MeasurementId<'_>, mut state: T, mut routine: R)
    where
        R: FnMut(&mut T) -> O,
    {
        self.bench_function(BenchmarkId::new(id.variant, id.size), |b| {
            b.iter(|| routine(&mut state))
        });
    }
}

/// Measures `routine` once per size of `sweep`.
///
/// Every size is checked against the capacity of `buffers` before anything
/// is measured. For each size, `setup` runs once on the prefix view and its
/// output is handed to the harness together with `routine`.
pub fn run_sweep<H, V, T, O, S, R>(
    harness: &mut H,
    family: &str,
    variant: &str,
    sweep: &Sweep,
    buffers: V,
    mut setup: S,
    mut routine: R,
) -> Result<(), SweepError>
where
    H: Harness,
    V: SampleView,
    S: FnMut(V) -> Result<T, SweepError>,
    R: FnMut(&mut T) -> O,
{
    let capacity = buffers.capacity();
    if let Some(s) = sweep.sizes().iter().find(|s| s.size > capacity) {
        return Err(SweepError::SizeExceedsCapacity {
            size: s.size,
            capacity,
        });
    }

    for &size in sweep.sizes() {
        let id = MeasurementId {
            family,
            variant,
            size,
        };
        debug!(%id, "preparing measurement");
        let state = setup(buffers.prefix(size.size))?;
        harness.measure(&id, state, &mut routine);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let sweep = Sweep::power_of_two(&[9, 12]).unwrap();
        let labels: Vec<_> = sweep.sizes().iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["logsize-09", "logsize-12"]);

        let sweep = Sweep::linear(10).unwrap();
        assert_eq!(sweep.sizes()[0].to_string(), "size-01");
        assert_eq!(sweep.sizes()[9].to_string(), "size-10");

        assert_eq!(Sweep::single(1).unwrap().sizes()[0].to_string(), "single");
    }

    #[test]
    fn test_from_sizes_keeps_order() {
        let sweep = Sweep::from_sizes(&[4096, 512, 2048, 1024]).unwrap();
        let sizes: Vec<_> = sweep.sizes().iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![4096, 512, 2048, 1024]);
        assert_eq!(sweep.max_size(), 4096);
        assert_eq!(sweep.sizes()[1].label, SizeLabel::Log(9));
    }

    #[test]
    fn test_invalid_sweeps() {
        assert!(matches!(Sweep::from_sizes(&[]), Err(SweepError::EmptySweep)));
        assert!(matches!(
            Sweep::from_sizes(&[512, 768]),
            Err(SweepError::NotPowerOfTwo(768))
        ));
        assert!(matches!(Sweep::from_sizes(&[0]), Err(SweepError::ZeroSize)));
        assert!(matches!(
            Sweep::power_of_two(&[3, 3]),
            Err(SweepError::DuplicateSize(8))
        ));
        assert!(matches!(
            Sweep::power_of_two(&[usize::BITS]),
            Err(SweepError::LogSizeTooLarge(_))
        ));
        assert!(matches!(Sweep::linear(0), Err(SweepError::EmptySweep)));
        assert!(matches!(Sweep::single(0), Err(SweepError::ZeroSize)));
    }

    #[test]
    fn test_pair_view_capacity_is_shortest() {
        let a = [1u8; 8];
        let b = [2u16; 5];
        let view = (&a[..], &b[..]);
        assert_eq!(view.capacity(), 5);
        let (a, b) = view.prefix(3);
        assert_eq!((a.len(), b.len()), (3, 3));
    }
}
