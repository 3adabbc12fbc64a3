//! Binds a window, a bit-reversal/kernel pair and a normalization into the
//! fixed four-step sequence a transform runs as.

use std::marker::PhantomData;

use num_complex::Complex;

use crate::bitrev;
use crate::float::Float;
use crate::normalize::Normalization;
use crate::options::{DecimationKind, DecimationInFrequency, DecimationInTime, DirectionKind,
    NormalizationKind, Radix2, Radix4, RadixKind, SplitRadix24, WindowKind};
use crate::window::Window;
use crate::{radix2, radix4, split_radix};

pub(crate) trait Kernel<T: Float> {
    fn run(data: &mut [Complex<T>], direction: T);
}

pub(crate) struct KernelOf<R, D>(PhantomData<(R, D)>);

impl<T: Float> Kernel<T> for KernelOf<Radix2, DecimationInTime> {
    fn run(data: &mut [Complex<T>], direction: T) {
        radix2::dit(data, direction)
    }
}
impl<T: Float> Kernel<T> for KernelOf<Radix2, DecimationInFrequency> {
    fn run(data: &mut [Complex<T>], direction: T) {
        radix2::dif(data, direction)
    }
}
impl<T: Float> Kernel<T> for KernelOf<Radix4, DecimationInTime> {
    fn run(data: &mut [Complex<T>], direction: T) {
        radix4::dit(data, direction)
    }
}
impl<T: Float> Kernel<T> for KernelOf<Radix4, DecimationInFrequency> {
    fn run(data: &mut [Complex<T>], direction: T) {
        radix4::dif(data, direction)
    }
}
impl<T: Float> Kernel<T> for KernelOf<SplitRadix24, DecimationInTime> {
    fn run(data: &mut [Complex<T>], direction: T) {
        split_radix::dit(data, direction)
    }
}
impl<T: Float> Kernel<T> for KernelOf<SplitRadix24, DecimationInFrequency> {
    fn run(data: &mut [Complex<T>], direction: T) {
        split_radix::dif(data, direction)
    }
}

/// A fully bound transform for one stage exponent: a window, a
/// bit-reversal table, a butterfly kernel and a normalization, run in the
/// order decimation-in-time or decimation-in-frequency prescribes.
#[derive(Clone)]
pub struct Pipeline<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T> {
    sample_count: usize,
    window: Window<T>,
    bit_reversal: Box<[usize]>,
    normalization: Normalization<T>,
    _marker: PhantomData<(Radix, Decimation, Direction, WindowOpt, NormalizationOpt)>,
}

impl<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T>
    Pipeline<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T>
where
    Radix: RadixKind,
    Decimation: DecimationKind,
    Direction: DirectionKind,
    WindowOpt: WindowKind,
    NormalizationOpt: NormalizationKind,
    T: Float,
    KernelOf<Radix, Decimation>: Kernel<T>,
{
    pub fn new(stage: usize) -> Self {
        let sample_count = Radix::sample_count(stage);
        let bits = Radix::bit_width(stage);
        Self {
            sample_count,
            window: Window::new(WindowOpt::SHAPE, Default::default(), sample_count),
            bit_reversal: bitrev::permutation_table(bits),
            normalization: Normalization::new(NormalizationOpt::MODE, sample_count),
            _marker: PhantomData,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Runs the transform over `data` in place, in the fixed sequence
    /// `[window, bit-reversal, kernel, normalization]` for
    /// decimation-in-time, or `[window, kernel, bit-reversal,
    /// normalization]` for decimation-in-frequency.
    pub fn apply(&self, data: &mut [Complex<T>]) {
        debug_assert_eq!(data.len(), self.sample_count);
        let direction = T::from_f64(Direction::FACTOR);

        self.window.apply(data);
        run_ordered::<Radix, Decimation, T>(data, direction, &self.bit_reversal);
        self.normalization.apply(data);
    }
}

fn run_ordered<Radix, Decimation, T>(data: &mut [Complex<T>], direction: T, bit_reversal: &[usize])
where
    Radix: RadixKind,
    Decimation: DecimationKind,
    T: Float,
    KernelOf<Radix, Decimation>: Kernel<T>,
{
    if Decimation::IS_TIME {
        bitrev::apply(data, bit_reversal);
        <KernelOf<Radix, Decimation> as Kernel<T>>::run(data, direction);
    } else {
        <KernelOf<Radix, Decimation> as Kernel<T>>::run(data, direction);
        bitrev::apply(data, bit_reversal);
    }
}
