use core::fmt::Debug;

use zeroize::Zeroize;

use crate::Result;

/// Prime-order group capability consumed by the signature scheme.
///
/// The scheme only ever reaches the group through this trait: generator and
/// identity access, fixed-length point encoding, scalar-field arithmetic, and
/// reduction of raw random bytes into the scalar field. Point subtraction is
/// deliberately absent; verification negates a scalar instead.
pub trait Group: Clone + Debug + Send + Sync + 'static {
    type Scalar: Clone + Debug + Eq + PartialEq + Zeroize + Send + Sync;
    type Element: Clone + Debug + Eq + PartialEq + Send + Sync;

    fn generator() -> Self::Element;

    fn identity() -> Self::Element;

    fn is_identity(element: &Self::Element) -> bool;

    /// Parses a canonical big-endian scalar. Rejects values >= the group order.
    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar>;

    /// Reduces 32 raw bytes modulo the group order. Never fails.
    fn scalar_reduce_bytes(bytes: &[u8; 32]) -> Self::Scalar;

    /// Big-endian fixed-length scalar encoding.
    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8>;

    fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element>;

    fn element_to_bytes(element: &Self::Element) -> Vec<u8>;

    fn scalar_mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element;

    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Additive inverse modulo the group order, i.e. `n - s` for nonzero `s`.
    fn scalar_negate(scalar: &Self::Scalar) -> Self::Scalar;

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool;
}
