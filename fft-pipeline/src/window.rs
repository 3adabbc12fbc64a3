//! Window functions applied to the sample buffer before the kernel runs.

use num_complex::Complex;

use crate::float::Float;
use crate::primitives::{abs, cosine};

/// Which window shape to apply, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowShape {
    None,
    Bartlett,
    Blackman,
    BlackmanHarris,
    Cosine,
    FlatTop,
    Hamming,
    VonHann,
    Welch,
}

/// Whether windowing scales both components of a sample or only the real
/// part.
///
/// The source this crate is grounded on only ever scales the real part
/// (`WindowExecutionFunctor`); `RealOnly` reproduces that behavior exactly
/// and is the default. `Both` is offered for callers who want a
/// textbook-complex windowing instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowParts {
    #[default]
    RealOnly,
    Both,
}

/// A precomputed window: a coefficient table plus how to apply it.
#[derive(Clone)]
pub struct Window<T> {
    shape: WindowShape,
    parts: WindowParts,
    coefficients: Box<[T]>,
}

impl<T: Float> Window<T> {
    /// Builds the coefficient table for `shape` over `n` samples.
    pub fn new(shape: WindowShape, parts: WindowParts, n: usize) -> Self {
        let coefficients = coefficient_table(shape, n);
        Self {
            shape,
            parts,
            coefficients,
        }
    }

    pub fn shape(&self) -> WindowShape {
        self.shape
    }

    /// Multiplies every sample in `data` by its coefficient, in place.
    ///
    /// A no-op for [`WindowShape::None`].
    pub fn apply(&self, data: &mut [Complex<T>]) {
        if self.shape == WindowShape::None {
            return;
        }
        debug_assert_eq!(data.len(), self.coefficients.len());
        for (sample, &coeff) in data.iter_mut().zip(self.coefficients.iter()) {
            let re = sample.re * coeff;
            let im = match self.parts {
                WindowParts::RealOnly => sample.im,
                WindowParts::Both => sample.im * coeff,
            };
            *sample = Complex::new(re, im);
        }
    }
}

fn coefficient_table<T: Float>(shape: WindowShape, n: usize) -> Box<[T]> {
    if n == 0 || shape == WindowShape::None {
        return Box::new([]);
    }
    let n_f = T::from_usize(n);
    let two_pi = T::PI() + T::PI();
    let four_pi = two_pi + two_pi;
    let six_pi = four_pi + two_pi;
    let eight_pi = four_pi + four_pi;
    let half = T::from_usize(n) / (T::one() + T::one());
    let welch_center = T::from_usize(n - 1) / (T::one() + T::one());
    let welch_denom = T::from_usize(n + 1) / (T::one() + T::one());

    (0..n)
        .map(|i| {
            let idx = T::from_usize(i);
            match shape {
                WindowShape::None => T::one(),
                WindowShape::Bartlett => T::one() - abs(idx - half) / half,
                WindowShape::VonHann => {
                    let half2 = T::from_f64(0.5);
                    half2 * (T::one() - cosine(two_pi * idx / n_f))
                }
                WindowShape::Hamming => {
                    T::from_f64(0.54) - T::from_f64(0.46) * cosine(two_pi * idx / n_f)
                }
                WindowShape::Blackman => {
                    T::from_f64(0.42) - T::from_f64(0.5) * cosine(two_pi * idx / n_f)
                        + T::from_f64(0.08) * cosine(four_pi * idx / n_f)
                }
                WindowShape::BlackmanHarris => {
                    T::from_f64(0.35875) - T::from_f64(0.48829) * cosine(two_pi * idx / n_f)
                        + T::from_f64(0.14128) * cosine(four_pi * idx / n_f)
                        - T::from_f64(0.01168) * cosine(six_pi * idx / n_f)
                }
                WindowShape::Cosine => {
                    cosine(T::PI() * idx / n_f - T::PI() / (T::one() + T::one()))
                }
                WindowShape::FlatTop => {
                    T::one() - T::from_f64(1.93) * cosine(two_pi * idx / n_f)
                        + T::from_f64(1.29) * cosine(four_pi * idx / n_f)
                        - T::from_f64(0.388) * cosine(six_pi * idx / n_f)
                        + T::from_f64(0.028) * cosine(eight_pi * idx / n_f)
                }
                WindowShape::Welch => {
                    let centered = (idx - welch_center) / welch_denom;
                    T::one() - centered * centered
                }
            }
        })
        .collect()
}
