//! secp256k1 elliptic curve group implementation.
//!
//! This is the group the on-chain protocol runs over. Points travel in
//! 33-byte SEC1 compressed encoding, scalars in 32-byte big-endian encoding.

use k256::elliptic_curve::group::prime::PrimeCurveAffine;
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::PrimeField;
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar as K256Scalar, U256};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::{Error, Group, Result};

/// Number of bytes in a secp256k1 scalar (32 bytes).
pub const SCALAR_BYTES: usize = 32;

/// Number of bytes in a compressed secp256k1 point (1 byte prefix + 32 byte x-coordinate).
pub const POINT_BYTES: usize = 33;

/// secp256k1 elliptic curve group implementation.
#[derive(Clone, Debug)]
pub struct Secp256k1;

/// Scalar in the secp256k1 group.
///
/// Scalars are zeroized when dropped since they carry secret key and nonce
/// material during signing.
#[derive(Clone, Debug)]
pub struct Scalar(K256Scalar);

/// Element (point) in the secp256k1 group.
///
/// Stored in projective coordinates for efficient arithmetic, encoded
/// compressed on the wire.
#[derive(Clone, Debug)]
pub struct Element(ProjectivePoint);

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        // K256Scalar doesn't expose mutable internals, so we overwrite with zero
        self.0 = K256Scalar::ZERO;
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_affine().eq(&other.0.to_affine())
    }
}

impl Eq for Element {}

impl Scalar {
    /// Creates a new scalar from a k256 Scalar.
    pub fn new(value: K256Scalar) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner k256 Scalar.
    pub fn inner(&self) -> &K256Scalar {
        &self.0
    }
}

impl Element {
    /// Creates a new element from a ProjectivePoint.
    pub fn new(value: ProjectivePoint) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner ProjectivePoint.
    pub fn inner(&self) -> &ProjectivePoint {
        &self.0
    }
}

impl Group for Secp256k1 {
    type Scalar = Scalar;
    type Element = Element;

    fn generator() -> Self::Element {
        Element(ProjectivePoint::GENERATOR)
    }

    fn identity() -> Self::Element {
        Element(ProjectivePoint::IDENTITY)
    }

    fn is_identity(element: &Self::Element) -> bool {
        element.0.to_affine().is_identity().into()
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar> {
        if bytes.len() != SCALAR_BYTES {
            return Err(Error::InvalidScalar(format!(
                "Expected {} bytes, got {}",
                SCALAR_BYTES,
                bytes.len()
            )));
        }

        let mut arr = [0u8; SCALAR_BYTES];
        arr.copy_from_slice(bytes);

        match Option::<K256Scalar>::from(K256Scalar::from_repr(arr.into())) {
            Some(scalar) => Ok(Scalar(scalar)),
            None => Err(Error::InvalidScalar(
                "Bytes do not represent a canonical secp256k1 scalar".to_string(),
            )),
        }
    }

    fn scalar_reduce_bytes(bytes: &[u8; 32]) -> Self::Scalar {
        let repr = FieldBytes::from(*bytes);
        Scalar(<K256Scalar as Reduce<U256>>::reduce_bytes(&repr))
    }

    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8> {
        scalar.0.to_bytes().to_vec()
    }

    fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element> {
        if bytes.len() != POINT_BYTES {
            return Err(Error::InvalidGroupElement(format!(
                "Expected {} bytes, got {}",
                POINT_BYTES,
                bytes.len()
            )));
        }

        let encoded = EncodedPoint::from_bytes(bytes)
            .map_err(|_| Error::InvalidGroupElement("Failed to parse encoded point".to_string()))?;

        let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or_else(|| {
                Error::InvalidGroupElement(
                    "Bytes do not represent a valid secp256k1 point".to_string(),
                )
            })?;

        Ok(Element(ProjectivePoint::from(affine)))
    }

    fn element_to_bytes(element: &Self::Element) -> Vec<u8> {
        let affine = element.0.to_affine();
        affine.to_encoded_point(true).as_bytes().to_vec()
    }

    fn scalar_mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element {
        Element(element.0 * scalar.0)
    }

    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element {
        Element(a.0 + b.0)
    }

    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 + b.0)
    }

    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 * b.0)
    }

    fn scalar_negate(scalar: &Self::Scalar) -> Self::Scalar {
        Scalar(-scalar.0)
    }

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool {
        scalar.0.is_zero().into()
    }
}

#[cfg(test)]
mod tests {
    use rand_core::RngCore;

    use super::*;
    use crate::SecureRng;

    fn random_scalar(rng: &mut SecureRng) -> Scalar {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Secp256k1::scalar_reduce_bytes(&bytes)
    }

    #[test]
    fn scalar_addition_commutes_with_the_group() {
        let g = Secp256k1::generator();
        let mut rng = SecureRng::new();
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);

        let ga = Secp256k1::scalar_mul(&g, &a);
        let gb = Secp256k1::scalar_mul(&g, &b);
        let ga_plus_gb = Secp256k1::element_add(&ga, &gb);

        let a_plus_b = Secp256k1::scalar_add(&a, &b);
        let g_a_plus_b = Secp256k1::scalar_mul(&g, &a_plus_b);

        assert_eq!(ga_plus_gb, g_a_plus_b);
    }

    #[test]
    fn negation_cancels() {
        let mut rng = SecureRng::new();
        let a = random_scalar(&mut rng);
        let neg_a = Secp256k1::scalar_negate(&a);

        let sum = Secp256k1::scalar_add(&a, &neg_a);
        assert!(Secp256k1::scalar_is_zero(&sum));
    }

    #[test]
    fn scalar_serialization() {
        let mut rng = SecureRng::new();
        let scalar = random_scalar(&mut rng);
        let bytes = Secp256k1::scalar_to_bytes(&scalar);
        assert_eq!(bytes.len(), SCALAR_BYTES);

        let deserialized = Secp256k1::scalar_from_bytes(&bytes).unwrap();
        assert_eq!(scalar, deserialized);
    }

    #[test]
    fn scalar_from_bytes_rejects_wrong_length() {
        assert!(Secp256k1::scalar_from_bytes(&[0u8; 16]).is_err());
        assert!(Secp256k1::scalar_from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn scalar_from_bytes_rejects_order() {
        // The group order n itself is not a canonical scalar encoding.
        let n: [u8; 32] = [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c,
            0xd0, 0x36, 0x41, 0x41,
        ];
        assert!(Secp256k1::scalar_from_bytes(&n).is_err());
    }

    #[test]
    fn reduce_bytes_wraps_modulo_order() {
        let big = [0xffu8; 32];
        let reduced = Secp256k1::scalar_reduce_bytes(&big);
        let roundtrip = Secp256k1::scalar_from_bytes(&Secp256k1::scalar_to_bytes(&reduced));
        assert!(roundtrip.is_ok());
    }

    #[test]
    fn element_serialization() {
        let g = Secp256k1::generator();
        let mut rng = SecureRng::new();
        let x = random_scalar(&mut rng);
        let y = Secp256k1::scalar_mul(&g, &x);

        let bytes = Secp256k1::element_to_bytes(&y);
        assert_eq!(bytes.len(), POINT_BYTES);

        let deserialized = Secp256k1::element_from_bytes(&bytes).unwrap();
        assert_eq!(y, deserialized);
    }

    #[test]
    fn element_from_bytes_rejects_garbage() {
        assert!(Secp256k1::element_from_bytes(&[0u8; 10]).is_err());
        assert!(Secp256k1::element_from_bytes(&[0xffu8; 33]).is_err());
    }

    #[test]
    fn identity() {
        let id = Secp256k1::identity();
        assert!(Secp256k1::is_identity(&id));

        let g = Secp256k1::generator();
        assert!(!Secp256k1::is_identity(&g));
    }
}
