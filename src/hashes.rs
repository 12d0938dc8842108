/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sha3::{
    Sha3_256,
    Digest
};
use crate::curve::*;

///Hash bytes to bytes.
pub fn h_bytes(msg: &[u8]) -> [u8; SCALAR_LENGTH] {
    return Sha3_256::digest(msg).into()
}

///Hash bytes to scalar. The digest is reduced modulo the group order.
pub fn h_scalar(group: &Group, msg: &[u8]) -> Scalar {
    return group.scalar_from_digest(&h_bytes(msg))
}

///Hash a message and an elliptic curve point to a scalar.
///
///The hashed data is `msg || x || y`, the digest is reduced modulo the group order.
pub fn h_message_point(group: &Group, msg: &[u8], point: &ProjectivePoint) -> Scalar {
    let mut hasher = Sha3_256::new();
    hasher.update(msg);
    hasher.update(group.encode_point(point));
    let digest: [u8; SCALAR_LENGTH] = hasher.finalize().into();
    return group.scalar_from_digest(&digest)
}

///Hash bytes to elliptic curve point: `h_scalar(msg) * G`.
///
///Note that the discrete log of the result with respect to `G` is publicly computable.
pub fn h_point(group: &Group, msg: &[u8]) -> ProjectivePoint {
    return group.mul_generator(&h_scalar(group, msg))
}
