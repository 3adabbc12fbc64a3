//! Output scaling applied after the kernel runs.

use num_complex::Complex;

use crate::float::Float;
use crate::primitives::square_root;

/// How the transform output is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationMode {
    None,
    DivideByLength,
    DivideBySqrtLength,
}

/// A precomputed scale factor, ready to multiply into every sample.
#[derive(Clone)]
pub struct Normalization<T> {
    mode: NormalizationMode,
    factor: T,
}

impl<T: Float> Normalization<T> {
    pub fn new(mode: NormalizationMode, sample_count: usize) -> Self {
        let factor = match mode {
            NormalizationMode::None => T::one(),
            NormalizationMode::DivideByLength => T::one() / T::from_usize(sample_count),
            NormalizationMode::DivideBySqrtLength => T::one() / square_root(sample_count),
        };
        Self { mode, factor }
    }

    pub fn mode(&self) -> NormalizationMode {
        self.mode
    }

    pub fn apply(&self, data: &mut [Complex<T>]) {
        if self.mode == NormalizationMode::None {
            return;
        }
        for sample in data.iter_mut() {
            *sample = *sample * self.factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_a_no_op() {
        let n = Normalization::<f64>::new(NormalizationMode::None, 16);
        let mut data = vec![Complex::new(3.0, -2.0); 16];
        let before = data.clone();
        n.apply(&mut data);
        assert_eq!(data, before);
    }

    #[test]
    fn divide_by_length_scales_uniformly() {
        let n = Normalization::<f64>::new(NormalizationMode::DivideByLength, 8);
        let mut data = vec![Complex::new(8.0, 0.0); 8];
        n.apply(&mut data);
        for sample in &data {
            assert!((sample.re - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn divide_by_sqrt_length_matches_expected_scale() {
        let n = Normalization::<f64>::new(NormalizationMode::DivideBySqrtLength, 64);
        let mut data = vec![Complex::new(8.0, 0.0); 64];
        n.apply(&mut data);
        for sample in &data {
            assert!((sample.re - 1.0).abs() < 1e-9);
        }
    }
}
