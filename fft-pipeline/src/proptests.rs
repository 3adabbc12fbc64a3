//! Property-based tests quantifying over random buffers and stage
//! exponents: round trip, Parseval energy conservation, and cross-kernel
//! equivalence.

use num_complex::Complex;
use proptest::prelude::*;

use crate::options::{
    DecimationInFrequency, DecimationInTime, Forward, Inverse, NoNormalization,
    NoWindow, Radix2, Radix4, SplitRadix24,
};
use crate::registry::StageFactory;

fn complex_vec(n: usize) -> impl Strategy<Value = Vec<Complex<f64>>> {
    proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), n)
        .prop_map(|pairs| pairs.into_iter().map(|(re, im)| Complex::new(re, im)).collect())
}

fn energy(data: &[Complex<f64>]) -> f64 {
    data.iter().map(|c| c.norm_sqr()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Radix-2 DIT forward followed by Radix-2 DIF inverse, scaled by
    /// `1/N`, recovers the original signal.
    #[test]
    fn radix2_round_trip(stage in 2usize..10, seed in 0u64..1000) {
        let n = 1usize << stage;
        let input: Vec<Complex<f64>> = (0..n)
            .map(|i| {
                let t = (seed as f64 + i as f64).sin();
                Complex::new(t, (seed as f64 * 0.5 + i as f64).cos())
            })
            .collect();

        let forward: StageFactory<Radix2, DecimationInTime, Forward, NoWindow, NoNormalization, f64, 2, 10> =
            StageFactory::new();
        let inverse: StageFactory<Radix2, DecimationInFrequency, Inverse, NoWindow, NoNormalization, f64, 2, 10> =
            StageFactory::new();

        let mut data = input.clone();
        forward.get(stage).unwrap().apply(&mut data);
        inverse.get(stage).unwrap().apply(&mut data);
        for sample in &mut data {
            *sample = *sample / n as f64;
        }

        for (a, b) in data.iter().zip(&input) {
            prop_assert!((*a - *b).norm() < 1e-6);
        }
    }

    /// Parseval's theorem: total energy in the time domain equals total
    /// energy in the (unnormalized) frequency domain divided by N.
    #[test]
    fn parseval_energy_is_conserved(stage in 2usize..9, data in complex_vec(1)) {
        let n = 1usize << stage;
        let mut buffer = vec![Complex::new(0.0, 0.0); n];
        for (slot, value) in buffer.iter_mut().zip(data.into_iter().cycle()) {
            *slot = value;
        }

        let factory: StageFactory<Radix2, DecimationInTime, Forward, NoWindow, NoNormalization, f64, 2, 9> =
            StageFactory::new();

        let time_energy = energy(&buffer);
        factory.get(stage).unwrap().apply(&mut buffer);
        let freq_energy = energy(&buffer) / n as f64;

        prop_assert!((time_energy - freq_energy).abs() < 1e-4 * (time_energy.abs() + 1.0));
    }

    /// Radix-4, Radix-2 and Split-Radix forward transforms of the same
    /// signal agree. `Radix4`'s stage exponent counts groups of 4 samples
    /// (`N = 4^stage`); `Radix2`/`SplitRadix24` count groups of 2
    /// (`N = 2^(2*stage)` for the same `N`).
    #[test]
    fn cross_kernel_equivalence(radix4_stage in 3usize..5, data in complex_vec(64)) {
        let n = 4usize.pow(radix4_stage as u32);
        let radix2_stage = radix4_stage * 2;
        let mut input = data;
        input.resize(n, Complex::new(0.0, 0.0));

        let radix4: StageFactory<Radix4, DecimationInTime, Forward, NoWindow, NoNormalization, f64, 3, 5> =
            StageFactory::new();
        let radix2: StageFactory<Radix2, DecimationInTime, Forward, NoWindow, NoNormalization, f64, 6, 9> =
            StageFactory::new();
        let split: StageFactory<SplitRadix24, DecimationInTime, Forward, NoWindow, NoNormalization, f64, 6, 9> =
            StageFactory::new();

        let mut via_radix4 = input.clone();
        radix4.get(radix4_stage).unwrap().apply(&mut via_radix4);

        let mut via_radix2 = input.clone();
        radix2.get(radix2_stage).unwrap().apply(&mut via_radix2);

        let mut via_split = input.clone();
        split.get(radix2_stage).unwrap().apply(&mut via_split);

        for (a, b) in via_radix4.iter().zip(&via_radix2) {
            prop_assert!((*a - *b).norm() < 1e-4);
        }
        for (a, b) in via_radix4.iter().zip(&via_split) {
            prop_assert!((*a - *b).norm() < 1e-4);
        }
    }
}
