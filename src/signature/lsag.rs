/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use tracing::{debug, trace};
use zeroize::Zeroize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::internal_common::*;
use super::signature_utils::*;

///A linkable ring signature.
///
///LSAG stands for "Linkable Spontaneous Anonymous Group (signature)".
///It holds one challenge `c[i]` and one response `r[i]` per ring member,
///plus the signer's key image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LSAGSignature {
    pub key_image: KeyImage,
    c: Vec<Scalar>,
    r: Vec<Scalar>,

} impl LSAGSignature {
    ///Assemble a signature from its parts.
    ///
    ///Returns `RingSizeMismatch` if `c` and `r` differ in length,
    ///or `MissingInput` if they are empty.
    pub fn from_parts(key_image: KeyImage, c: Vec<Scalar>, r: Vec<Scalar>) -> Result<Self, SignatureError> {
        if c.len() != r.len() {
            return Err(SignatureError::RingSizeMismatch)
        }
        if c.is_empty() {
            return Err(SignatureError::MissingInput)
        }
        return Ok(Self{ key_image, c, r })
    }

    ///The challenges `c[0..n]`.
    pub fn challenges(&self) -> &[Scalar] {
        return &self.c
    }

    ///The responses `r[0..n]`.
    pub fn responses(&self) -> &[Scalar] {
        return &self.r
    }

    ///Size of the ring this signature was created for.
    pub fn ring_size(&self) -> usize {
        return self.c.len()
    }

    ///Whether this signature and `other` were created with the same private key.
    ///
    ///Neither signature is verified.
    pub fn is_linked(&self, other: &LSAGSignature) -> bool {
        return self.key_image == other.key_image
    }
}

///Creates ring signatures, drawing randomness from a `ScalarSource`.
///
///In production, use a cryptographically secure RNG such as `rand::rngs::OsRng`.
pub struct RingSigner<S: ScalarSource> {
    group: Group,
    source: S

} impl<S: ScalarSource> RingSigner<S> {
    pub fn new(group: Group, source: S) -> Self {
        return Self{ group, source }
    }

    ///Sign `msg` with `signer` on behalf of `ring`.
    ///
    ///Returns `MissingInput` for an empty ring or message,
    ///and `SignerNotInRing` if the signer's public key is not a ring member.
    pub fn sign(&mut self, signer: &PrivateKey, ring: &Ring, msg: &[u8]) -> Result<LSAGSignature, SignatureError> {
        if ring.is_empty() || msg.is_empty() {
            return Err(SignatureError::MissingInput)
        }
        let group = &self.group;
        let n = ring.len();

        //find the signer in the ring
        let j = match ring.position(signer.public_key()) {
            Some(index) => index,
            None => return Err(SignatureError::SignerNotInRing)
        };

        let key_image = key_image(group, signer)?;

        //random responses for everyone but the signer
        let mut r: Vec<Scalar> = (0..n)
            .map(|i| match i == j {
                true => Scalar::ZERO,
                false => self.source.random_scalar()
            })
            .collect();
        let mut u = self.source.random_scalar();

        let mut c: Vec<Scalar> = vec!(Scalar::ZERO; n);
        c[(j + 1) % n] = h_message_point(group, msg, &group.mul_generator(&u));

        //walk the ring back around to the signer
        for k in 1..n {
            let i = (j + k) % n;
            let l_i = ring_commitment(group, &r[i], &c[i], &ring.0[i]);
            c[(i + 1) % n] = h_message_point(group, msg, &l_i);
        }

        //close the loop
        r[j] = u - (*signer.secret() * c[j]);
        u.zeroize();

        debug!(ring_size = n, "created ring signature");
        return LSAGSignature::from_parts(key_image, c, r)
    }
}

///Checks ring signatures against a ring and a message.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingVerifier {
    group: Group

} impl RingVerifier {
    pub fn new(group: Group) -> Self {
        return Self{ group }
    }

    ///Check whether `signature` is a valid signature of `msg` by a member of `ring`.
    ///
    ///Returns `Ok(false)` if the challenge chain does not close.
    ///Returns `RingSizeMismatch` if the signature was not made for a ring of this size.
    pub fn verify(&self, signature: &LSAGSignature, ring: &Ring, msg: &[u8]) -> Result<bool, SignatureError> {
        let n = ring.len();
        if n == 0 {
            return Err(SignatureError::MissingInput)
        }
        if signature.c.len() != n || signature.r.len() != n {
            return Err(SignatureError::RingSizeMismatch)
        }

        //each link only reads values stored in the signature, so the order does not matter
        #[cfg(feature = "parallel")]
        let iter = (0..n).into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = 0..n;

        let group = &self.group;
        let valid = iter.map(|i| {
            let l_i = ring_commitment(group, &signature.r[i], &signature.c[i], &ring.0[i]);
            let next = (i + 1) % n;
            let closes = h_message_point(group, msg, &l_i) == signature.c[next];
            if !closes {
                trace!(index = next, "challenge mismatch");
            }
            closes
        }).all(|closes| closes);

        debug!(ring_size = n, valid, "verified ring signature");
        return Ok(valid)
    }

    ///Same as `verify`, except an invalid signature is reported as `VerificationFailure`.
    pub fn verify_strict(&self, signature: &LSAGSignature, ring: &Ring, msg: &[u8]) -> Result<(), SignatureError> {
        return match self.verify(signature, ring, msg)? {
            true => Ok(()),
            false => Err(SignatureError::VerificationFailure)
        }
    }
}
