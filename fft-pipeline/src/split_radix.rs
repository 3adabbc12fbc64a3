//! Split-radix 2/4 butterfly kernels, decimation in time and in frequency.
//!
//! Splits the buffer into one contiguous half (recursed as a further
//! split-radix subproblem) and two contiguous quarters (the "L-shaped"
//! radix-4 subbands), combining them with the same twiddle recurrence as
//! [`crate::radix4`]. This is the standard divide-and-conquer form of
//! split-radix; it produces the same bit-reversed output as the source's
//! flattened, memory-layout-optimized recursion, using the same butterfly
//! algebra and twiddle recurrence, but expressed as ordinary recursive
//! slice splitting to match how [`crate::radix2`] and [`crate::radix4`] are
//! structured in this crate.
//!
//! `N <= 1` is a no-op and `N = 2` is a plain additive butterfly, shared
//! with [`crate::radix2::dit`]/[`crate::radix2::dif`]. No hand-unrolled
//! `N = 4` case is needed: the general combine step's single loop iteration
//! always sees an untouched `W = (1, 0)`, so it already computes the
//! correct four-point result.

use num_complex::Complex;

use crate::float::Float;
use crate::primitives::sine;

fn twiddle_multiplier<T: Float>(n: usize, direction: T) -> Complex<T> {
    let angle = T::PI() / T::from_usize(n);
    let s = sine(angle);
    let two = T::one() + T::one();
    Complex::new(-two * s * s, direction * sine(angle + angle))
}

fn newton_refine<T: Float>(w: Complex<T>) -> (Complex<T>, Complex<T>) {
    let mag2 = w.re * w.re + w.im * w.im;
    let temp = T::from_f64(1.5) - T::from_f64(0.5) * mag2;
    let wn4 = Complex::new(w.re * temp, w.im * temp);
    let w3n4 = wn4 * wn4 * wn4;
    (wn4, w3n4)
}

fn butterfly2<T: Float>(data: &mut [Complex<T>]) {
    let t = data[1];
    data[1] = data[0] - t;
    data[0] = data[0] + t;
}

/// Split-radix decimation-in-time: recurse on the half and both quarters,
/// then combine.
pub fn dit<T: Float>(data: &mut [Complex<T>], direction: T) {
    let n = data.len();
    match n {
        0 | 1 => return,
        2 => return butterfly2(data),
        _ => {}
    }

    let half = n / 2;
    let quarter = n / 4;
    let (half1, rest) = data.split_at_mut(half);
    let (q1, q2) = rest.split_at_mut(quarter);
    dit(half1, direction);
    dit(q1, direction);
    dit(q2, direction);

    let multiplier = twiddle_multiplier(n, direction);
    let mut w = Complex::new(T::one(), T::zero());
    let j = Complex::new(T::zero(), direction);
    for i in 0..quarter {
        let (wn4, w3n4) = newton_refine(w);
        let t1 = q1[i] * wn4;
        let t2 = q2[i] * w3n4;
        let sum = t1 + t2;
        let diff = j * (t2 - t1);

        let a = half1[i];
        let b = half1[i + quarter];
        half1[i] = a + sum;
        half1[i + quarter] = b - diff;
        q1[i] = a - sum;
        q2[i] = b + diff;

        if i + 1 < quarter {
            w = w + multiplier * w;
        }
    }
}

/// Split-radix decimation-in-frequency: combine, then recurse on the half
/// and both quarters.
pub fn dif<T: Float>(data: &mut [Complex<T>], direction: T) {
    let n = data.len();
    match n {
        0 | 1 => return,
        2 => return butterfly2(data),
        _ => {}
    }

    let half = n / 2;
    let quarter = n / 4;
    let multiplier = twiddle_multiplier(n, direction);
    let mut w = Complex::new(T::one(), T::zero());
    let j = Complex::new(T::zero(), direction);
    {
        let (half1, rest) = data.split_at_mut(half);
        let (q1, q2) = rest.split_at_mut(quarter);
        for i in 0..quarter {
            let (wn4, w3n4) = newton_refine(w);
            let a = half1[i];
            let b = half1[i + quarter];
            let c = q1[i];
            let e = q2[i];

            half1[i] = a + c;
            half1[i + quarter] = b + e;
            let diff_re = a - c;
            let diff_im = j * (b - e);
            q1[i] = wn4 * (diff_re + diff_im);
            q2[i] = w3n4 * (diff_re - diff_im);

            if i + 1 < quarter {
                w = w + multiplier * w;
            }
        }
    }

    let (half1, rest) = data.split_at_mut(half);
    let (q1, q2) = rest.split_at_mut(quarter);
    dif(half1, direction);
    dif(q1, direction);
    dif(q2, direction);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_dft(input: &[Complex<f64>], direction: f64) -> Vec<Complex<f64>> {
        let n = input.len();
        (0..n)
            .map(|k| {
                let mut sum = Complex::new(0.0, 0.0);
                for (t, &x) in input.iter().enumerate() {
                    let angle = direction * -2.0 * std::f64::consts::PI * (k * t) as f64 / n as f64;
                    sum = sum + x * Complex::new(angle.cos(), angle.sin());
                }
                sum
            })
            .collect()
    }

    fn assert_close(a: &[Complex<f64>], b: &[Complex<f64>], tol: f64) {
        for (x, y) in a.iter().zip(b) {
            assert!((*x - *y).norm() < tol, "{x:?} vs {y:?}");
        }
    }

    #[test]
    fn dit_matches_naive_dft_for_n4() {
        let input: Vec<Complex<f64>> = vec![
            Complex::new(1.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(3.0, 0.0),
            Complex::new(4.0, 0.0),
        ];
        let expected = naive_dft(&input, -1.0);
        let mut data = input.clone();
        crate::bitrev::apply(&mut data, &crate::bitrev::permutation_table(2));
        dit(&mut data, 1.0);
        assert_close(&data, &expected, 1e-9);
    }

    #[test]
    fn dit_matches_naive_dft_for_n32() {
        let input: Vec<Complex<f64>> = (0..32).map(|i| Complex::new((i % 7) as f64, 0.0)).collect();
        let expected = naive_dft(&input, -1.0);
        let mut data = input.clone();
        crate::bitrev::apply(&mut data, &crate::bitrev::permutation_table(5));
        dit(&mut data, 1.0);
        assert_close(&data, &expected, 1e-8);
    }

    #[test]
    fn dif_on_bitreversed_output_matches_naive_dft_for_n32() {
        let input: Vec<Complex<f64>> = (0..32).map(|i| Complex::new(i as f64, 0.0)).collect();
        let expected = naive_dft(&input, -1.0);
        let mut data = input.clone();
        dif(&mut data, 1.0);
        crate::bitrev::apply(&mut data, &crate::bitrev::permutation_table(5));
        assert_close(&data, &expected, 1e-7);
    }

    #[test]
    fn agrees_with_radix2_on_random_input_n256() {
        let input: Vec<Complex<f64>> = (0..256)
            .map(|i| Complex::new(((i * 37) % 101) as f64 - 50.0, ((i * 19) % 53) as f64 - 26.0))
            .collect();

        let mut via_split = input.clone();
        dit(&mut via_split, 1.0);

        let mut via_radix2 = input.clone();
        crate::radix2::dit(&mut via_radix2, 1.0);

        assert_close(&via_split, &via_radix2, 1e-6);
    }
}
