#![allow(dead_code)]

use pairing_bench::{Harness, MeasurementId, SweepSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub family: String,
    pub variant: String,
    pub size: SweepSize,
    pub calls: usize,
}

/// Calls each routine a fixed number of times and records what was measured.
pub struct RecordingHarness {
    pub repetitions: usize,
    pub recorded: Vec<Recorded>,
}

impl RecordingHarness {
    pub fn new(repetitions: usize) -> Self {
        Self {
            repetitions,
            recorded: vec![],
        }
    }

    pub fn sizes_of(&self, family: &str, variant: &str) -> Vec<usize> {
        self.recorded
            .iter()
            .filter(|r| r.family == family && r.variant == variant)
            .map(|r| r.size.size)
            .collect()
    }
}

impl Harness for RecordingHarness {
    fn measure<T, O, R>(&mut self, id: &MeasurementId<'_>, mut state: T, mut routine: R)
    where
        R: FnMut(&mut T) -> O,
    {
        for _ in 0..self.repetitions {
            std::hint::black_box(routine(&mut state));
        }
        self.recorded.push(Recorded {
            family: id.family.to_string(),
            variant: id.variant.to_string(),
            size: id.size,
            calls: self.repetitions,
        });
    }
}
