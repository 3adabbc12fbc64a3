//! Maps a runtime stage exponent within a compile-time range `[BEGIN, END)`
//! to a constructible transform handle.

use crate::error::StageError;
use crate::float::Float;
use crate::handle::{Handle, TransformHandle};
use crate::options::{DecimationKind, DirectionKind, NormalizationKind, RadixKind, WindowKind};
use crate::pipeline::{Kernel, KernelOf, Pipeline};

/// Builds, once, a dense table of pipelines for every stage exponent in
/// `[BEGIN, END)`, and hands out a fresh boxed handle for any stage inside
/// that range.
pub struct StageFactory<
    Radix,
    Decimation,
    Direction,
    WindowOpt,
    NormalizationOpt,
    T,
    const BEGIN: usize,
    const END: usize,
> {
    pipelines: Box<[Pipeline<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T>]>,
}

impl<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T, const BEGIN: usize, const END: usize>
    StageFactory<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T, BEGIN, END>
where
    Radix: RadixKind,
    Decimation: DecimationKind,
    Direction: DirectionKind,
    WindowOpt: WindowKind,
    NormalizationOpt: NormalizationKind,
    T: Float,
    KernelOf<Radix, Decimation>: Kernel<T>,
    Pipeline<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T>:
        TransformHandle<T> + Clone + 'static,
{
    /// Builds the dense pipeline table for `[BEGIN, END)`.
    ///
    /// Construction is infallible: a fixed compile-time range cannot itself
    /// be out of range.
    pub fn new() -> Self {
        debug_assert!(BEGIN < END, "stage range must be non-empty");
        tracing::debug!(
            begin = BEGIN,
            end = END,
            window = ?WindowOpt::SHAPE,
            normalization = ?NormalizationOpt::MODE,
            "building stage factory"
        );
        let pipelines = (BEGIN..END).map(Pipeline::new).collect();
        Self { pipelines }
    }

    /// Returns a fresh handle for `stage`, or
    /// [`StageError::StageOutOfRange`] if it falls outside `[BEGIN, END)`.
    pub fn get(&self, stage: usize) -> Result<Handle<T>, StageError> {
        if !(BEGIN..END).contains(&stage) {
            return Err(StageError::StageOutOfRange {
                stage,
                begin: BEGIN,
                end: END,
            });
        }
        Ok(Box::new(self.pipelines[stage - BEGIN].clone()))
    }
}

impl<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T, const BEGIN: usize, const END: usize>
    Default for StageFactory<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T, BEGIN, END>
where
    Radix: RadixKind,
    Decimation: DecimationKind,
    Direction: DirectionKind,
    WindowOpt: WindowKind,
    NormalizationOpt: NormalizationKind,
    T: Float,
    KernelOf<Radix, Decimation>: Kernel<T>,
    Pipeline<Radix, Decimation, Direction, WindowOpt, NormalizationOpt, T>:
        TransformHandle<T> + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
