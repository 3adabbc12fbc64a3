//! Radix-4 butterfly kernels, decimation in time and in frequency.
//!
//! Recurses on four contiguous quarters of the buffer rather than two
//! halves. The per-quarter twiddle factors `W^r`, `W^2r`, `W^3r` are derived
//! from the running twiddle `W` with one Newton refinement step
//! (`temp = 1.5 - 0.5*|W|^2; W <- W*temp`) before squaring/cubing, matching
//! the source's numerically-stabilized recurrence.
//!
//! The output index assignment (`a[i1]` gets the `+j` rotation, `a[i3]` the
//! `-j` rotation, rather than the textbook ordering) is a deliberate
//! deviation that lets the shared bit-reversal step undo radix-4 the same
//! way it undoes radix-2, instead of needing digit-reversal.
//!
//! As with radix-2, `N = 4` falls out of the general recursion exactly (its
//! single loop iteration always sees `W = (1, 0)`), so the hand-unrolled
//! four-point case below is a pure micro-optimization, not a behavioral
//! special case.

use num_complex::Complex;

use crate::float::Float;
use crate::primitives::sine;

fn twiddle_multiplier<T: Float>(n: usize, direction: T) -> Complex<T> {
    let angle = T::PI() / T::from_usize(n);
    let s = sine(angle);
    let two = T::one() + T::one();
    Complex::new(-two * s * s, direction * sine(angle + angle))
}

fn newton_refine<T: Float>(w: Complex<T>) -> (Complex<T>, Complex<T>, Complex<T>) {
    let mag2 = w.re * w.re + w.im * w.im;
    let temp = T::from_f64(1.5) - T::from_f64(0.5) * mag2;
    let wn4 = Complex::new(w.re * temp, w.im * temp);
    let wn2 = wn4 * wn4;
    let w3n4 = wn2 * wn4;
    (wn4, wn2, w3n4)
}

fn dit4<T: Float>(data: &mut [Complex<T>], direction: T) {
    let (t1, t3, t2, t4) = (data[0], data[1], data[2], data[3]);
    let j = Complex::new(T::zero(), direction);
    let sum13 = t1 + t3;
    let sum24 = t2 + t4;
    let diff13 = t1 - t3;
    let diff24 = t2 - t4;
    data[0] = sum13 + sum24;
    data[1] = diff13 + j * diff24;
    data[2] = sum13 - sum24;
    data[3] = diff13 - j * diff24;
}

fn dif4<T: Float>(data: &mut [Complex<T>], direction: T) {
    let j = Complex::new(T::zero(), direction);
    let t1 = data[0] + data[2];
    let t2 = data[0] - data[2];
    let t3 = data[1] + data[3];
    let t4 = data[1] - data[3];
    data[0] = t1 + t3;
    data[1] = t1 - t3;
    data[2] = t2 + j * t4;
    data[3] = t2 - j * t4;
}

/// Radix-4 decimation-in-time: recurse on all four quarters, then combine.
pub fn dit<T: Float>(data: &mut [Complex<T>], direction: T) {
    let n = data.len();
    match n {
        0 | 1 => return,
        4 => return dit4(data, direction),
        _ => {}
    }

    let q = n / 4;
    let (a, rest) = data.split_at_mut(q);
    let (b, rest) = rest.split_at_mut(q);
    let (c, d) = rest.split_at_mut(q);
    dit(a, direction);
    dit(b, direction);
    dit(c, direction);
    dit(d, direction);

    let multiplier = twiddle_multiplier(n, direction);
    let mut w = Complex::new(T::one(), T::zero());
    let j = Complex::new(T::zero(), direction);
    for i in 0..q {
        let (wn4, wn2, w3n4) = newton_refine(w);
        let t1 = a[i];
        let t2 = c[i] * wn4;
        let t3 = b[i] * wn2;
        let t4 = d[i] * w3n4;

        a[i] = (t1 + t3) + (t2 + t4);
        b[i] = (t1 - t3) + j * (t2 - t4);
        c[i] = (t1 + t3) - (t2 + t4);
        d[i] = (t1 - t3) - j * (t2 - t4);

        if i + 1 < q {
            w = w + multiplier * w;
        }
    }
}

/// Radix-4 decimation-in-frequency: combine, then recurse on all four
/// quarters.
pub fn dif<T: Float>(data: &mut [Complex<T>], direction: T) {
    let n = data.len();
    match n {
        0 | 1 => return,
        4 => return dif4(data, direction),
        _ => {}
    }

    let q = n / 4;
    let multiplier = twiddle_multiplier(n, direction);
    let mut w = Complex::new(T::one(), T::zero());
    let j = Complex::new(T::zero(), direction);
    {
        let (a, rest) = data.split_at_mut(q);
        let (b, rest) = rest.split_at_mut(q);
        let (c, d) = rest.split_at_mut(q);
        for i in 0..q {
            let (wn4, wn2, w3n4) = newton_refine(w);
            let t1 = a[i] + c[i];
            let t2 = a[i] - c[i];
            let t3 = b[i] + d[i];
            let t4 = b[i] - d[i];
            a[i] = t1 + t3;
            b[i] = wn2 * (t1 - t3);
            c[i] = wn4 * (t2 + j * t4);
            d[i] = w3n4 * (t2 - j * t4);
            if i + 1 < q {
                w = w + multiplier * w;
            }
        }
    }

    let (a, rest) = data.split_at_mut(q);
    let (b, rest) = rest.split_at_mut(q);
    let (c, d) = rest.split_at_mut(q);
    dif(a, direction);
    dif(b, direction);
    dif(c, direction);
    dif(d, direction);
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
    fn dit_matches_naive_dft_for_n64() {
        let input: Vec<Complex<f64>> = (0..64).map(|i| Complex::new((i % 5) as f64, 0.0)).collect();
        let expected = naive_dft(&input, -1.0);
        let mut data = input.clone();
        crate::bitrev::apply(&mut data, &crate::bitrev::permutation_table(6));
        dit(&mut data, 1.0);
        assert_close(&data, &expected, 1e-8);
    }

    #[test]
    fn dif_on_bitreversed_output_matches_naive_dft_for_n16() {
        let input: Vec<Complex<f64>> = (0..16).map(|i| Complex::new(i as f64, 0.0)).collect();
        let expected = naive_dft(&input, -1.0);
        let mut data = input.clone();
        dif(&mut data, 1.0);
        crate::bitrev::apply(&mut data, &crate::bitrev::permutation_table(4));
        assert_close(&data, &expected, 1e-8);
    }

    #[test]
    fn n4_terminal_case_matches_naive_dft() {
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
}
