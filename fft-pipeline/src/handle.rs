//! The public, type-erased transform handle the registry hands back.

use num_complex::Complex;

use crate::float::Float;
use crate::options::{DecimationKind, DirectionKind, NormalizationKind, RadixKind, WindowKind};
use crate::pipeline::{Kernel, KernelOf, Pipeline};

/// A runtime-polymorphic transform bound to one stage exponent.
///
/// Erases the compile-time option tuple behind a trait object so
/// `StageFactory::get` can return values of different stage exponents from
/// the same collection.
pub trait TransformHandle<T>: Send + Sync {
    /// Runs the transform over `data` in place.
    ///
    /// `data.len()` must equal [`Self::sample_count`]; checked with a
    /// `debug_assert_eq!` since a length mismatch is a caller bug, not a
    /// recoverable condition.
    fn apply(&self, data: &mut [Complex<T>]);

    /// The transform length this handle operates on.
    fn sample_count(&self) -> usize;

    /// Half of [`Self::sample_count`]: the number of independent frequency
    /// bins in the (conjugate-symmetric, for real input) output.
    fn frequency_count(&self) -> usize {
        self.sample_count() / 2
    }
}

/// A boxed, type-erased transform handle.
pub type Handle<T> = Box<dyn TransformHandle<T>>;

impl<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T> TransformHandle<T>
    for Pipeline<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T>
where
    Radix: RadixKind,
    Decimation: DecimationKind,
    Direction: DirectionKind,
    WindowOpt: WindowKind,
    NormalizationOpt: NormalizationKind,
    T: Float,
    KernelOf<Radix, Decimation>: Kernel<T>,
    Self: Send + Sync,
{
    fn apply(&self, data: &mut [Complex<T>]) {
        Pipeline::apply(self, data)
    }

    fn sample_count(&self) -> usize {
        Pipeline::sample_count(self)
    }
}
