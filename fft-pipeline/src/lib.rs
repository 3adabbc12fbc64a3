//! Compile-time-parameterized FFT pipelines for power-of-two complex
//! signals.
//!
//! A transform is selected entirely by its type parameters — butterfly
//! family ([`options::RadixKind`]), decimation order
//! ([`options::DecimationKind`]), direction ([`options::DirectionKind`]),
//! window ([`options::WindowKind`]) and normalization
//! ([`options::NormalizationKind`]) — plus a `[BEGIN, END)` range of stage
//! exponents. [`registry::StageFactory`] builds the dense table of
//! pipelines for that range once; [`registry::StageFactory::get`] hands
//! back a type-erased [`handle::Handle`] for any stage inside it.
//!
//! ```
//! use fft_pipeline::options::{DecimationInTime, Forward, NoNormalization, NoWindow, Radix2};
//! use fft_pipeline::registry::StageFactory;
//! use num_complex::Complex;
//!
//! let factory: StageFactory<Radix2, DecimationInTime, Forward, NoWindow, NoNormalization, f64, 1, 10> =
//!     StageFactory::new();
//! let handle = factory.get(3).unwrap();
//!
//! let mut data = vec![Complex::new(0.0, 0.0); handle.sample_count()];
//! data[0] = Complex::new(1.0, 0.0);
//! handle.apply(&mut data);
//! ```

pub mod bitrev;
pub mod error;
pub mod float;
pub mod handle;
pub mod normalize;
pub mod options;
pub mod pipeline;
pub mod primitives;
pub mod radix2;
pub mod radix4;
pub mod registry;
pub mod split_radix;
pub mod window;

pub use error::StageError;
pub use float::Float;
pub use handle::{Handle, TransformHandle};
pub use registry::StageFactory;

#[cfg(test)]
mod proptests;
