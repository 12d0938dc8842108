/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::curve::*;
use crate::errors::{
    SerializationError,
    SignatureError
};
use crate::signature::key_image;

use zeroize::Zeroize;

///A public key: a non-identity point on the configured curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    point: AffinePoint,
    x: [u8; SCALAR_LENGTH],
    y: [u8; SCALAR_LENGTH]

} impl PublicKey {
    ///Create a public key from its affine coordinates (32 big-endian bytes each).
    ///
    ///Returns `InvalidPoint` if the coordinates are not on the curve.
    pub fn from_coordinates(
        group: &Group, x: &[u8; SCALAR_LENGTH], y: &[u8; SCALAR_LENGTH]
    ) -> Result<Self, SerializationError> {
        let point = group.point_from_coordinates(x, y)?;
        return Ok(Self{ point, x: *x, y: *y })
    }

    ///Create a public key from a point, failing on the identity.
    pub(crate) fn from_point(group: &Group, point: &ProjectivePoint) -> Result<Self, SerializationError> {
        let (x, y) = group.coordinates(point).ok_or(SerializationError::InvalidPoint)?;
        return Ok(Self{ point: AffinePoint::from(*point), x, y })
    }

    ///Return the elliptic curve point of this key.
    pub fn to_point(&self) -> ProjectivePoint {
        return ProjectivePoint::from(self.point)
    }

    ///The x coordinate, big-endian.
    pub fn x(&self) -> [u8; SCALAR_LENGTH] {
        return self.x
    }

    ///The y coordinate, big-endian.
    pub fn y(&self) -> [u8; SCALAR_LENGTH] {
        return self.y
    }

    ///The identifier of the curve this key belongs to.
    pub fn curve_id(&self) -> &'static str {
        return CURVE_ID
    }
}

///A private key `d` together with its public key `d * G`.
///
///The secret scalar is wiped from memory when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    d: Scalar,
    public_key: PublicKey

} impl PrivateKey {
    ///Create a private key from a secret scalar.
    ///
    ///Returns `InvalidKey` if `d` is zero.
    pub fn new(group: &Group, d: Scalar) -> Result<Self, SignatureError> {
        if d == Scalar::ZERO {
            return Err(SignatureError::InvalidKey)
        }
        let public_key = PublicKey::from_point(group, &group.mul_generator(&d))?;
        return Ok(Self{ d, public_key })
    }

    ///Generate a random private key.
    pub fn generate<S: ScalarSource + ?Sized>(group: &Group, source: &mut S) -> Self {
        loop {
            if let Ok(key) = Self::new(group, source.random_scalar()) {
                return key
            }
        }
    }

    ///The public key matching this private key.
    pub fn public_key(&self) -> &PublicKey {
        return &self.public_key
    }

    ///Return the key image of this private key.
    pub fn key_image(&self, group: &Group) -> Result<KeyImage, SignatureError> {
        return key_image(group, self)
    }

    pub(crate) fn secret(&self) -> &Scalar {
        return &self.d
    }

} impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_struct("PrivateKey")
            .field("d", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }

} impl Drop for PrivateKey {
    fn drop(&mut self) {
        //clear the key from memory to improve security
        self.d.zeroize()
    }
}

///A key image (linking tag): `d * h_point(x(d * G))`.
///
///Two signatures carry the same key image exactly when they were made with the same private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyImage {
    x: [u8; SCALAR_LENGTH],
    y: [u8; SCALAR_LENGTH]

} impl KeyImage {
    ///Create a key image from its affine coordinates, checking that they are on the curve.
    pub fn from_coordinates(
        group: &Group, x: &[u8; SCALAR_LENGTH], y: &[u8; SCALAR_LENGTH]
    ) -> Result<Self, SerializationError> {
        group.point_from_coordinates(x, y)?;
        return Ok(Self{ x: *x, y: *y })
    }

    pub(crate) fn from_point(group: &Group, point: &ProjectivePoint) -> Result<Self, SerializationError> {
        let (x, y) = group.coordinates(point).ok_or(SerializationError::InvalidPoint)?;
        return Ok(Self{ x, y })
    }

    ///The x coordinate, big-endian.
    pub fn x(&self) -> [u8; SCALAR_LENGTH] {
        return self.x
    }

    ///The y coordinate, big-endian.
    pub fn y(&self) -> [u8; SCALAR_LENGTH] {
        return self.y
    }
}

///A Ring represents an ordered list of public keys in a ring signature.
///
///This is a wrapper type for `Vec<PublicKey>`.
///The internal `Vec` can be accessed with `ring.0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ring(pub Vec<PublicKey>);
impl Ring {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Appends a public key to the ring.
    pub fn push(&mut self, value: PublicKey) {
        self.0.push(value);
    }

    ///Inserts a public key at position `index` within the ring, shifting all keys after it to the right.
    pub fn insert(&mut self, index: usize, element: PublicKey) {
        self.0.insert(index, element);
    }

    ///Number of keys in the ring.
    pub fn len(&self) -> usize {
        return self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty()
    }

    ///Position of the first key with the same coordinates as `key`.
    pub fn position(&self, key: &PublicKey) -> Option<usize> {
        return self.0.iter().position(|member| member.x == key.x && member.y == key.y)
    }

} impl From<Vec<PublicKey>> for Ring {
    fn from(keys: Vec<PublicKey>) -> Self {
        return Self(keys)
    }
}
