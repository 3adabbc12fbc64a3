//! Constexpr-equivalent numeric primitives.
//!
//! The twiddle recurrences and window tables are seeded from a Horner-scheme
//! power-series sine/cosine and a fixed-iteration Newton-Heron square root,
//! rather than `f32`/`f64`'s own `sin`/`cos`/`sqrt`, so the engine's accuracy
//! characteristics don't depend on the platform's libm.

use crate::float::Float;

// Cody-Waite reduction constants: 2*pi split into a coarse part exactly
// representable in a few bits and a fine correction, limiting cancellation
// when an angle needs folding back into [-pi, pi] before the series is
// evaluated.
const REDUCE_C1: f64 = 6.283_203_125;
const REDUCE_C2: f64 = -1.781_781_975_296_3e-5;

fn sine_cosine_series<T: Float>(series_start: usize, series_end: usize, x: T) -> T {
    if series_start >= series_end {
        T::one()
    } else {
        let n = T::from_usize(series_start);
        let next = sine_cosine_series(series_start + 2, series_end, x);
        T::one() - x * x / n / (n + T::one()) * next
    }
}

fn range_reduce<T: Float>(x: T) -> T {
    let pi = T::PI();
    if abs(x) <= pi {
        return x;
    }
    let two_pi = pi + pi;
    let k = round(x / two_pi);
    let c1 = T::from_f64(REDUCE_C1);
    let c2 = T::from_f64(REDUCE_C2);
    x - k * c1 - k * c2
}

/// `sin(x)`, 24 series terms for 4-byte elements, 34 for 8-byte.
pub fn sine<T: Float>(x: T) -> T {
    let x = range_reduce(x);
    let terms = if std::mem::size_of::<T>() > 4 { 34 } else { 24 };
    x * sine_cosine_series(2, terms, x)
}

/// `cos(x)`, one fewer series term than [`sine`] at the same precision.
pub fn cosine<T: Float>(x: T) -> T {
    let x = range_reduce(x);
    let terms = if std::mem::size_of::<T>() > 4 { 33 } else { 23 };
    sine_cosine_series(1, terms, x)
}

/// Square root of `radicand` via 8 fixed Newton-Heron steps from `radicand/2`.
///
/// Special-cases 0 and 1 exactly, matching the source this recurrence is
/// ported from.
pub fn square_root<T: Float>(radicand: usize) -> T {
    if radicand == 0 {
        return T::zero();
    }
    if radicand == 1 {
        return T::one();
    }
    let two = T::one() + T::one();
    let r = T::from_usize(radicand);
    let mut guess = r / two;
    for _ in 0..8 {
        guess = (guess + r / guess) / two;
    }
    guess
}

pub fn abs<T: Float>(value: T) -> T {
    if value < T::zero() {
        -value
    } else {
        value
    }
}

pub fn floor<T: Float>(value: T) -> T {
    let truncated = T::from_usize(trunc_to_usize(value));
    if value < T::zero() && truncated != value {
        truncated - T::one()
    } else {
        truncated
    }
}

pub fn ceil<T: Float>(value: T) -> T {
    let floored = floor(value);
    if floored == value {
        floored
    } else {
        floored + T::one()
    }
}

pub fn round<T: Float>(value: T) -> T {
    let half = T::from_f64(0.5);
    if value < T::zero() {
        -floor(-value + half)
    } else {
        floor(value + half)
    }
}

fn trunc_to_usize<T: Float>(value: T) -> usize {
    let v = abs(value);
    <usize as num_traits::NumCast>::from(v).unwrap_or(0)
}
