/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Text encoding of keys, key images and signatures.
//!
//! Scalars and coordinates are written as 64 lowercase hex digits (32 bytes, big-endian).
//! Decoding is the single place where external values are validated:
//! it also accepts a `0x` prefix and values with their leading zeroes stripped,
//! and rejects anything that is not canonical or not on the curve.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::internal_common::*;
use crate::signature::LSAGSignature;

///Encode 32 bytes as 64 lowercase hex digits.
pub fn encode_bytes(bytes: &[u8; SCALAR_LENGTH]) -> String {
    return hex::encode(bytes)
}

///Encode a scalar as 64 lowercase hex digits.
pub fn encode_scalar(scalar: &Scalar) -> String {
    return encode_bytes(&scalar_to_bytes(scalar))
}

///Decode a big-endian hex value of at most 32 bytes.
pub fn decode_bytes(value: &str) -> Result<[u8; SCALAR_LENGTH], SerializationError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    if digits.is_empty() || digits.len() > 2 * SCALAR_LENGTH {
        return Err(SerializationError::InvalidLength)
    }
    if !digits.bytes().all(|digit| digit.is_ascii_hexdigit()) {
        return Err(SerializationError::InvalidHex)
    }

    let padded = format!("{:0>width$}", digits, width = 2 * SCALAR_LENGTH);
    let mut bytes = [0u8; SCALAR_LENGTH];
    hex::decode_to_slice(padded, &mut bytes).map_err(|_| SerializationError::InvalidHex)?;
    return Ok(bytes)
}

///Decode a scalar, which must be less than the group order.
pub fn decode_scalar(group: &Group, value: &str) -> Result<Scalar, SerializationError> {
    return group.scalar_from_canonical(&decode_bytes(value)?)
}

///The coordinates of a point, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCoordinates {
    pub x: String,
    pub y: String

} impl EncodedCoordinates {
    fn decode(&self) -> Result<Coordinates, SerializationError> {
        return Ok((decode_bytes(&self.x)?, decode_bytes(&self.y)?))
    }

} impl From<&KeyImage> for EncodedCoordinates {
    fn from(key_image: &KeyImage) -> Self {
        return Self{
            x: encode_bytes(&key_image.x()),
            y: encode_bytes(&key_image.y())
        }
    }
}

///A public key as it crosses a boundary: coordinates plus a curve tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPublicKey {
    pub x: String,
    pub y: String,
    pub curve: String

} impl EncodedPublicKey {
    ///Decode into a `PublicKey`, checking the curve tag and that the point is on the curve.
    pub fn decode(&self, group: &Group) -> Result<PublicKey, SerializationError> {
        if self.curve != group.curve_id() {
            return Err(SerializationError::CurveMismatch(self.curve.clone()))
        }
        return PublicKey::from_coordinates(group, &decode_bytes(&self.x)?, &decode_bytes(&self.y)?)
    }

} impl From<&PublicKey> for EncodedPublicKey {
    fn from(public_key: &PublicKey) -> Self {
        return Self{
            x: encode_bytes(&public_key.x()),
            y: encode_bytes(&public_key.y()),
            curve: public_key.curve_id().to_owned()
        }
    }
}

///Decode a list of encoded public keys into a ring.
pub fn decode_ring(group: &Group, keys: &[EncodedPublicKey]) -> Result<Ring, SerializationError> {
    return keys.iter()
        .map(|key| key.decode(group))
        .collect::<Result<Vec<PublicKey>, SerializationError>>()
        .map(Ring::from)
}

///A signature as it crosses a boundary.
///
///```json
///{ "keyImage": { "x": "..", "y": ".." }, "c": ["..", ..], "r": ["..", ..] }
///```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedSignature {
    pub key_image: EncodedCoordinates,
    pub c: Vec<String>,
    pub r: Vec<String>

} impl EncodedSignature {
    ///Decode into an `LSAGSignature`.
    ///
    ///Fails with `RingSizeMismatch` if `c` and `r` differ in length,
    ///or with `Encoding` if any value is malformed or off the curve.
    pub fn decode(&self, group: &Group) -> Result<LSAGSignature, SignatureError> {
        if self.c.len() != self.r.len() {
            return Err(SignatureError::RingSizeMismatch)
        }
        let (x, y) = self.key_image.decode()?;
        let key_image = KeyImage::from_coordinates(group, &x, &y)?;
        let c = decode_scalars(group, &self.c)?;
        let r = decode_scalars(group, &self.r)?;
        return LSAGSignature::from_parts(key_image, c, r)
    }

    ///Same as `decode`, but also rejects a signature whose size differs from `ring_size`.
    pub fn decode_for_ring(&self, group: &Group, ring_size: usize) -> Result<LSAGSignature, SignatureError> {
        if self.c.len() != ring_size || self.r.len() != ring_size {
            debug!(ring_size, challenges = self.c.len(), responses = self.r.len(), "rejected signature size");
            return Err(SignatureError::RingSizeMismatch)
        }
        return self.decode(group)
    }

} impl From<&LSAGSignature> for EncodedSignature {
    fn from(signature: &LSAGSignature) -> Self {
        return Self{
            key_image: EncodedCoordinates::from(&signature.key_image),
            c: signature.challenges().iter().map(encode_scalar).collect(),
            r: signature.responses().iter().map(encode_scalar).collect()
        }
    }
}

fn decode_scalars(group: &Group, values: &[String]) -> Result<Vec<Scalar>, SerializationError> {
    return values.iter()
        .map(|value| decode_scalar(group, value))
        .collect()
}

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for EncodedPublicKey {}
#[cfg(feature = "to_bytes")] impl ToBytes<'_> for EncodedSignature {}
