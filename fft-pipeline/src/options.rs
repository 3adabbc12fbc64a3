//! Type-level option markers.
//!
//! A pipeline is selected entirely by its type parameters: radix family,
//! decimation order, transform direction, window shape and normalization
//! mode are all unit structs, sealed behind a marker trait per axis so a
//! caller can't accidentally instantiate `StageFactory` with, say, a
//! `Window` type where a `Radix` is expected.

mod sealed {
    pub trait Sealed {}
}

/// Selects the butterfly kernel family.
pub trait RadixKind: sealed::Sealed + Send + Sync + 'static {
    /// Number of complex samples a pipeline at this stage exponent handles.
    fn sample_count(stage: usize) -> usize;

    /// `log2` of [`Self::sample_count`], i.e. the bit width the
    /// bit-reversal permutation must cover.
    fn bit_width(stage: usize) -> u32;
}

/// Radix-2 decimation, one sample pair combined per butterfly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Radix2;
/// Radix-4 decimation, four samples combined per butterfly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Radix4;
/// Split-radix 2/4, combining a radix-2 and two radix-4 subbands.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitRadix24;

impl sealed::Sealed for Radix2 {}
impl sealed::Sealed for Radix4 {}
impl sealed::Sealed for SplitRadix24 {}

impl RadixKind for Radix2 {
    fn sample_count(stage: usize) -> usize {
        1usize << stage
    }
    fn bit_width(stage: usize) -> u32 {
        stage as u32
    }
}
impl RadixKind for Radix4 {
    fn sample_count(stage: usize) -> usize {
        1usize << (stage * 2)
    }
    fn bit_width(stage: usize) -> u32 {
        (stage * 2) as u32
    }
}
impl RadixKind for SplitRadix24 {
    fn sample_count(stage: usize) -> usize {
        1usize << stage
    }
    fn bit_width(stage: usize) -> u32 {
        stage as u32
    }
}

/// Selects whether the kernel decimates the input or the output sequence.
pub trait DecimationKind: sealed::Sealed + Send + Sync + 'static {
    /// `true` for decimation-in-time (bit-reversal runs before the kernel),
    /// `false` for decimation-in-frequency (bit-reversal runs after).
    const IS_TIME: bool;
}

/// Decimation in time: bit-reversal is applied before the kernel runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimationInTime;
/// Decimation in frequency: bit-reversal is applied after the kernel runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimationInFrequency;

impl sealed::Sealed for DecimationInTime {}
impl sealed::Sealed for DecimationInFrequency {}
impl DecimationKind for DecimationInTime {
    const IS_TIME: bool = true;
}
impl DecimationKind for DecimationInFrequency {
    const IS_TIME: bool = false;
}

/// Selects the sign of the transform's twiddle rotation.
pub trait DirectionKind: sealed::Sealed + Send + Sync + 'static {
    /// `+1` for a forward transform, `-1` for an inverse transform.
    const FACTOR: f64;
}

/// Forward transform (analysis direction).
#[derive(Debug, Clone, Copy, Default)]
pub struct Forward;
/// Inverse transform (synthesis direction).
#[derive(Debug, Clone, Copy, Default)]
pub struct Inverse;

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Inverse {}
impl DirectionKind for Forward {
    const FACTOR: f64 = 1.0;
}
impl DirectionKind for Inverse {
    const FACTOR: f64 = -1.0;
}

/// Selects the window shape applied before the kernel runs.
pub trait WindowKind: sealed::Sealed + Send + Sync + 'static {
    /// The runtime shape tag this marker corresponds to.
    const SHAPE: crate::window::WindowShape;
}

macro_rules! window_marker {
    ($name:ident, $shape:ident) => {
        #[doc = concat!(stringify!($name), " window shape.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;
        impl sealed::Sealed for $name {}
        impl WindowKind for $name {
            const SHAPE: crate::window::WindowShape = crate::window::WindowShape::$shape;
        }
    };
}

window_marker!(NoWindow, None);
window_marker!(BartlettWindow, Bartlett);
window_marker!(BlackmanWindow, Blackman);
window_marker!(BlackmanHarrisWindow, BlackmanHarris);
window_marker!(CosineWindow, Cosine);
window_marker!(FlatTopWindow, FlatTop);
window_marker!(HammingWindow, Hamming);
window_marker!(VonHannWindow, VonHann);
window_marker!(WelchWindow, Welch);

/// Selects the output scaling applied after the kernel runs.
pub trait NormalizationKind: sealed::Sealed + Send + Sync + 'static {
    /// The runtime mode tag this marker corresponds to.
    const MODE: crate::normalize::NormalizationMode;
}

macro_rules! normalization_marker {
    ($name:ident, $mode:ident) => {
        #[doc = concat!(stringify!($name), " normalization.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;
        impl sealed::Sealed for $name {}
        impl NormalizationKind for $name {
            const MODE: crate::normalize::NormalizationMode =
                crate::normalize::NormalizationMode::$mode;
        }
    };
}

normalization_marker!(NoNormalization, None);
normalization_marker!(DivideByLength, DivideByLength);
normalization_marker!(DivideBySqrtLength, DivideBySqrtLength);
