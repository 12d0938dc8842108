/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants

use crate::errors::SerializationError;

pub use p256::{
    AffinePoint,
    ProjectivePoint,
    Scalar,
    FieldBytes,
    NistP256,
    U256,
};
use p256::{
    EncodedPoint,
    elliptic_curve::{
        Curve,
        Field,
        PrimeField,
        ops::Reduce,
        sec1::{
            FromEncodedPoint,
            ToEncodedPoint
        }
    }
};
use rand::{CryptoRng, RngCore};

///The identifier of the only supported group.
pub const CURVE_ID: &str = "p256";

///Byte length of an encoded scalar or field element.
pub const SCALAR_LENGTH: usize = 32;

///Byte length of an encoded point (`x || y`).
pub const POINT_LENGTH: usize = 2 * SCALAR_LENGTH;

///The affine coordinates of a point, each as 32 big-endian bytes.
pub type Coordinates = ([u8; SCALAR_LENGTH], [u8; SCALAR_LENGTH]);

///The prime-order group all keys and signatures live in.
///
///This is an immutable value which is passed explicitly to every operation
///that needs group arithmetic, rather than being a global setting.
///Only one curve (NIST P-256) is supported per build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Group {
    _private: ()

} impl Group {
    ///The NIST P-256 group.
    pub const fn p256() -> Self {
        return Self{ _private: () }
    }

    ///The identifier carried by public keys of this group.
    pub fn curve_id(&self) -> &'static str {
        return CURVE_ID
    }

    ///The basepoint `G`.
    pub fn generator(&self) -> ProjectivePoint {
        return ProjectivePoint::GENERATOR
    }

    ///The prime order `n` of the scalar field.
    pub fn order(&self) -> U256 {
        return NistP256::ORDER
    }

    ///`P + Q`
    pub fn add(&self, p: &ProjectivePoint, q: &ProjectivePoint) -> ProjectivePoint {
        return *p + *q
    }

    ///`k * P`
    pub fn scalar_mul(&self, k: &Scalar, p: &ProjectivePoint) -> ProjectivePoint {
        return *p * *k
    }

    ///`k * G`
    pub fn mul_generator(&self, k: &Scalar) -> ProjectivePoint {
        return self.scalar_mul(k, &self.generator())
    }

    ///Build a point from its affine coordinates.
    ///
    ///Fails with `InvalidPoint` if `(x, y)` does not satisfy the curve equation.
    pub fn point_from_coordinates(
        &self, x: &[u8; SCALAR_LENGTH], y: &[u8; SCALAR_LENGTH]
    ) -> Result<AffinePoint, SerializationError> {
        let encoded = EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(x),
            FieldBytes::from_slice(y),
            false
        );
        return Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or(SerializationError::InvalidPoint)
    }

    ///Return the affine coordinates of a point,
    ///or `None` for the identity, which has no affine representation.
    pub fn coordinates(&self, point: &ProjectivePoint) -> Option<Coordinates> {
        let encoded = AffinePoint::from(*point).to_encoded_point(false);
        return match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => Some((to_array(x), to_array(y))),
            _ => None
        }
    }

    ///Encode a point to bytes for hashing purposes: `x || y`, both big-endian.
    ///
    ///The identity encodes as all zeroes.
    ///This is not intended to be reversible; use `point_from_coordinates` to decode.
    pub fn encode_point(&self, point: &ProjectivePoint) -> [u8; POINT_LENGTH] {
        let mut encoded = [0u8; POINT_LENGTH];
        if let Some((x, y)) = self.coordinates(point) {
            encoded[..SCALAR_LENGTH].copy_from_slice(&x);
            encoded[SCALAR_LENGTH..].copy_from_slice(&y);
        }
        return encoded
    }

    ///Interpret a 32-byte big-endian digest as an integer and reduce it modulo `n`.
    pub fn scalar_from_digest(&self, digest: &[u8; SCALAR_LENGTH]) -> Scalar {
        return <Scalar as Reduce<U256>>::from_uint_reduced(U256::from_be_slice(digest))
    }

    ///Parse a canonical (already reduced) big-endian scalar.
    pub fn scalar_from_canonical(&self, bytes: &[u8; SCALAR_LENGTH]) -> Result<Scalar, SerializationError> {
        return Option::<Scalar>::from(Scalar::from_repr(FieldBytes::clone_from_slice(bytes)))
            .ok_or(SerializationError::NonCanonicalScalar)
    }
}

///Big-endian bytes of a scalar.
pub fn scalar_to_bytes(scalar: &Scalar) -> [u8; SCALAR_LENGTH] {
    return to_array(&scalar.to_bytes())
}

fn to_array(bytes: &FieldBytes) -> [u8; SCALAR_LENGTH] {
    let mut array = [0u8; SCALAR_LENGTH];
    array.copy_from_slice(bytes.as_slice());
    return array
}

///A source of uniformly random, non-zero scalars.
///
///Signing draws all of its randomness from one of these.
///Any cryptographically secure RNG is a `ScalarSource`;
///tests may substitute a seeded RNG to get reproducible signatures.
pub trait ScalarSource {
    ///Return a uniformly random non-zero scalar.
    fn random_scalar(&mut self) -> Scalar;

} impl<R: RngCore + CryptoRng> ScalarSource for R {
    fn random_scalar(&mut self) -> Scalar {
        loop {
            let scalar = Scalar::random(&mut *self);
            if scalar != Scalar::ZERO {
                return scalar
            }
        }
    }
}

