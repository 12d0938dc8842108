/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use tracing::debug;

use crate::errors::SignatureError;
use super::LSAGSignature;

///Check whether two signatures were produced by the same private key.
///
///Only the key images are compared; neither signature is verified.
///Callers that need "linked, and both valid" must verify each signature separately.
///
///Returns `MissingSignature` if either signature is absent.
pub fn check_linkability(
    first: Option<&LSAGSignature>, second: Option<&LSAGSignature>
) -> Result<bool, SignatureError> {
    let (first, second) = match (first, second) {
        (Some(first), Some(second)) => (first, second),
        _ => return Err(SignatureError::MissingSignature)
    };
    let linked = first.is_linked(second);
    debug!(linked, "checked signature linkability");
    return Ok(linked)
}
