// ============================================================================
// Operand Trait
// Abstract interface over the native float types the evaluator accepts
// ============================================================================

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for f32 {}
}

/// A numeric operand accepted by the [`Calculator`](crate::engine::Calculator).
///
/// Implemented for `f64` and `f32`. Arithmetic follows the IEEE-754
/// semantics of the underlying type, including NaN and infinity
/// propagation.
///
/// # Thread Safety
/// Operands are plain `Copy` values and must be `Send + Sync` so the
/// evaluator can be shared across threads without coordination.
///
/// # Sealed
/// The trait cannot be implemented outside this crate, so integer types
/// (whose division can overflow) never reach the evaluator:
///
/// ```compile_fail
/// use calculator::numeric::Operand;
/// use std::ops::{Add, Div, Mul, Sub};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// struct Meters(i64);
///
/// impl std::fmt::Display for Meters {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}m", self.0)
///     }
/// }
///
/// impl Add for Meters { type Output = Self; fn add(self, r: Self) -> Self { Meters(self.0 + r.0) } }
/// impl Sub for Meters { type Output = Self; fn sub(self, r: Self) -> Self { Meters(self.0 - r.0) } }
/// impl Mul for Meters { type Output = Self; fn mul(self, r: Self) -> Self { Meters(self.0 * r.0) } }
/// impl Div for Meters { type Output = Self; fn div(self, r: Self) -> Self { Meters(self.0 / r.0) } }
///
/// impl Operand for Meters {
///     fn is_zero(self) -> bool { self.0 == 0 }
///     fn to_f64(self) -> f64 { self.0 as f64 }
///     fn type_name() -> &'static str { "Meters" }
/// }
/// ```
pub trait Operand:
    sealed::Sealed
    + Copy
    + PartialEq
    + Debug
    + Display
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Returns true for both `+0.0` and `-0.0`.
    fn is_zero(self) -> bool;

    /// Lossless widening used when reporting values (events, records).
    fn to_f64(self) -> f64;

    /// Name of the underlying type, for logging.
    fn type_name() -> &'static str;
}

impl Operand for f64 {
    #[inline]
    fn is_zero(self) -> bool {
        self == 0.0
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    fn type_name() -> &'static str {
        "f64"
    }
}

impl Operand for f32 {
    #[inline]
    fn is_zero(self) -> bool {
        self == 0.0
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn type_name() -> &'static str {
        "f32"
    }
}
