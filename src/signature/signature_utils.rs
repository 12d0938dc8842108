/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;

///hash to point, specific for key image
pub(crate) fn h_key_image_point(group: &Group, public_key: &PublicKey) -> ProjectivePoint {
    return h_point(group, &public_key.x())
}

///Given a private key, return its key image.
///
///This depends only on the private key: the same key always produces the same image,
///whatever ring or message it signs with.
pub fn key_image(group: &Group, private_key: &PrivateKey) -> Result<KeyImage, SignatureError> {
    let base = h_key_image_point(group, private_key.public_key());
    let point = group.scalar_mul(private_key.secret(), &base);
    return KeyImage::from_point(group, &point)
        .map_err(|_| SignatureError::InvalidKey)
}

///The commitment of ring member `i`: `(r * G) + (c * P)`
pub(crate) fn ring_commitment(group: &Group, r: &Scalar, c: &Scalar, public_key: &PublicKey) -> ProjectivePoint {
    return group.add(
        &group.mul_generator(r),
        &group.scalar_mul(c, &public_key.to_point())
    )
}
