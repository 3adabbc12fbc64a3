//! The element-type bound shared by every numeric module in this crate.

/// Bounds the floating-point element type a pipeline is instantiated over.
///
/// Implemented for `f32` and `f64` only. Pulling in a full numeric-tower
/// crate for two concrete types would be overkill; this just names the
/// handful of operations the engine actually needs.
pub trait Float:
    num_traits::Float + num_traits::FloatConst + Send + Sync + std::fmt::Debug + 'static
{
    /// Converts a small non-negative integer exactly representable in `Self`.
    fn from_usize(n: usize) -> Self {
        <Self as num_traits::NumCast>::from(n).expect("usize fits in the float range")
    }

    /// Converts a literal constant used throughout the trigonometric and
    /// normalization formulas (e.g. `1.5`, `0.5`, `0.54`).
    fn from_f64(v: f64) -> Self {
        <Self as num_traits::NumCast>::from(v).expect("constant fits in the float range")
    }
}

impl Float for f32 {}
impl Float for f64 {}
