/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Linkable ring signatures
//!
//!Given a private key and a ring containing its public key (along with decoys),
//!create a signature which proves that:
//! 1. one of the ring's keys authorized the message, without revealing which one
//! 2. the key image (accessible with `signature.key_image`) belongs to that key,
//!    so two signatures by the same key can be linked

mod lsag;
mod linkability;
mod signature_utils;

pub use lsag::{
    LSAGSignature,
    RingSigner,
    RingVerifier
};
pub use linkability::check_linkability;
pub use signature_utils::key_image;
