/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,
    ///A value was not valid hexadecimal.
    InvalidHex,
    ///A value had the wrong length for its type.
    InvalidLength,
    ///A scalar was not in the canonical range `[0, n)`.
    NonCanonicalScalar,
    ///The coordinates do not describe a point on the curve.
    InvalidPoint,
    ///The curve tag does not match the configured group.
    CurveMismatch(String),

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::EncodingError => write!(f, "Encoding error."),
            Self::DecodingError => write!(f, "Decoding error."),
            Self::InvalidHex => write!(f, "Value is not valid hexadecimal."),
            Self::InvalidLength => write!(f, "Value has the wrong length."),
            Self::NonCanonicalScalar => write!(f, "Scalar is not reduced modulo the group order."),
            Self::InvalidPoint => write!(f, "Point is not on the curve."),
            Self::CurveMismatch(curve) => write!(f, "Unsupported curve \"{curve}\"."),
        }
    }

} impl Error for SerializationError {}

///Ring signature errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///A required argument was absent (ie an empty ring or message).
    MissingInput,
    ///One or both signatures were absent in a linkability check.
    MissingSignature,
    ///The signer's public key is not in the ring.
    SignerNotInRing,
    ///The number of challenges or responses does not match the ring size.
    RingSizeMismatch,
    ///A private key scalar was zero.
    InvalidKey,
    ///The signature is well-formed, but its challenge chain does not close.
    VerificationFailure,
    ///A scalar or point could not be decoded.
    Encoding(SerializationError),

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::MissingInput => write!(f, "Missing required input."),
            Self::MissingSignature => write!(f, "Missing signature for linkability check."),
            Self::SignerNotInRing => write!(f, "Signer public key is not in the ring."),
            Self::RingSizeMismatch => write!(f, "Signature size does not match the ring size."),
            Self::InvalidKey => write!(f, "Invalid private key."),
            Self::VerificationFailure => write!(f, "This signature is invalid."),
            Self::Encoding(err) => write!(f, "{err}"),
        }
    }

} impl Error for SignatureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        return match self {
            Self::Encoding(err) => Some(err),
            _ => None
        }
    }

} impl From<SerializationError> for SignatureError {
    fn from(err: SerializationError) -> Self {
        return Self::Encoding(err)
    }
}
