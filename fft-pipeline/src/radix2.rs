//! Radix-2 butterfly kernels, decimation in time and in frequency.
//!
//! Both recurse on contiguous halves of the buffer; DIT combines *after*
//! recursing into both halves, DIF combines *before* recursing. The twiddle
//! factor is not tabulated: it's seeded at `(1, 0)` and advanced by the
//! recurrence `w += multiplier * w`, where `multiplier` is itself built from
//! two evaluations of [`crate::primitives::sine`].
//!
//! `N` of 0 and 1 are no-ops; `N = 2` is a single add/sub butterfly with no
//! twiddle multiplication. These fall out of the general recursion without
//! a separate code path. `N = 4` is likewise subsumed exactly by the general
//! case (its single twiddle step never advances past `(1, 0)`), so no
//! hand-unrolled specialization is needed for correctness; it's kept
//! unrolled anyway below purely to skip the trigonometric setup for the
//! smallest non-trivial block.

use num_complex::Complex;

use crate::float::Float;
use crate::primitives::sine;

fn twiddle_multiplier<T: Float>(n: usize, direction: T) -> Complex<T> {
    let angle = T::PI() / T::from_usize(n);
    let s = sine(angle);
    let two = T::one() + T::one();
    Complex::new(-two * s * s, direction * sine(angle + angle))
}

fn butterfly2<T: Float>(data: &mut [Complex<T>]) {
    let t = data[1];
    data[1] = data[0] - t;
    data[0] = data[0] + t;
}

fn dit4<T: Float>(data: &mut [Complex<T>], direction: T) {
    let t0 = data[1];
    data[1] = data[0] - t0;
    data[0] = data[0] + t0;

    let t1 = data[3];
    data[3] = data[2] - t1;
    data[2] = data[2] + t1;

    let t2 = data[2];
    data[2] = data[0] - t2;
    data[0] = data[0] + t2;

    let j = Complex::new(T::zero(), direction);
    let rot = j * data[3];
    data[3] = data[1] - rot;
    data[1] = data[1] + rot;
}

fn dif4<T: Float>(data: &mut [Complex<T>], direction: T) {
    let t0 = data[2];
    data[2] = data[0] - t0;
    data[0] = data[0] + t0;

    let diff = data[1] - data[3];
    let sum = data[1] + data[3];
    let j = Complex::new(T::zero(), direction);
    data[3] = j * diff;
    data[1] = sum;

    let t1 = data[1];
    data[1] = data[0] - t1;
    data[0] = data[0] + t1;

    let t2 = data[3];
    data[3] = data[2] - t2;
    data[2] = data[2] + t2;
}

/// Radix-2 decimation-in-time: recurse on both halves, then combine.
pub fn dit<T: Float>(data: &mut [Complex<T>], direction: T) {
    let n = data.len();
    match n {
        0 | 1 => return,
        2 => return butterfly2(data),
        4 => return dit4(data, direction),
        _ => {}
    }

    let half = n / 2;
    let (lo, hi) = data.split_at_mut(half);
    dit(lo, direction);
    dit(hi, direction);

    let multiplier = twiddle_multiplier(n, direction);
    let mut w = Complex::new(T::one(), T::zero());
    for i in 0..half {
        let product = w * hi[i];
        hi[i] = lo[i] - product;
        lo[i] = lo[i] + product;
        if i + 1 < half {
            w = w + multiplier * w;
        }
    }
}

/// Radix-2 decimation-in-frequency: combine, then recurse on both halves.
pub fn dif<T: Float>(data: &mut [Complex<T>], direction: T) {
    let n = data.len();
    match n {
        0 | 1 => return,
        2 => return butterfly2(data),
        4 => return dif4(data, direction),
        _ => {}
    }

    let half = n / 2;
    let multiplier = twiddle_multiplier(n, direction);
    let mut w = Complex::new(T::one(), T::zero());
    {
        let (lo, hi) = data.split_at_mut(half);
        for i in 0..half {
            let sum = lo[i] + hi[i];
            hi[i] = (lo[i] - hi[i]) * w;
            lo[i] = sum;
            if i + 1 < half {
                w = w + multiplier * w;
            }
        }
    }

    let (lo, hi) = data.split_at_mut(half);
    dif(lo, direction);
    dif(hi, direction);
}
