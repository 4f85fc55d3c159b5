mod common;

use common::RecordingHarness;
use pairing_bench::{measurements, BenchConfig, MsmConfig, Sweep, SweepError};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_msm_entries_cover_every_size() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut harness = RecordingHarness::new(2);
    let sweep = Sweep::power_of_two(&[2, 4, 3]).unwrap();

    measurements::multi_exp_g1(&mut harness, &mut rng, &sweep, &MsmConfig::default()).unwrap();
    let config = MsmConfig {
        num_threads: Some(1),
    };
    measurements::multi_exp_g2(&mut harness, &mut rng, &sweep, &config).unwrap();

    assert_eq!(
        harness.sizes_of(measurements::MULTI_EXP_G1, "msm"),
        vec![4, 16, 8]
    );
    assert_eq!(
        harness.sizes_of(measurements::MULTI_EXP_G2, "msm"),
        vec![4, 16, 8]
    );
    let labels: Vec<_> = harness
        .recorded
        .iter()
        .take(3)
        .map(|r| r.size.to_string())
        .collect();
    assert_eq!(labels, vec!["logsize-02", "logsize-04", "logsize-03"]);
}

#[test]
fn test_fft_entry_measures_both_variants() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut harness = RecordingHarness::new(1);
    let sweep = Sweep::from_sizes(&[512, 1024, 2048, 4096]).unwrap();

    measurements::fft(&mut harness, &mut rng, &sweep).unwrap();

    for variant in ["basic", "coset"] {
        assert_eq!(
            harness.sizes_of(measurements::FFT, variant),
            vec![512, 1024, 2048, 4096]
        );
    }
    assert_eq!(harness.recorded.len(), 8);
}

#[test]
fn test_pairing_entries() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut harness = RecordingHarness::new(1);
    let config = BenchConfig {
        pairing_max_size: 3,
        ..BenchConfig::default()
    };

    measurements::miller_loop(&mut harness, &config.pairing_sweep().unwrap()).unwrap();
    measurements::final_exp(&mut harness, &mut rng).unwrap();

    assert_eq!(
        harness.sizes_of(measurements::MILLER_LOOP, "multi"),
        vec![1, 2, 3]
    );
    let last = harness.recorded.last().unwrap();
    assert_eq!(last.family, measurements::FINAL_EXP);
    assert_eq!(last.size.to_string(), "single");
}

#[test]
fn test_zero_size_pairing_sweep_is_rejected() {
    let config = BenchConfig {
        pairing_max_size: 0,
        ..BenchConfig::default()
    };
    assert!(matches!(config.pairing_sweep(), Err(SweepError::EmptySweep)));
}
