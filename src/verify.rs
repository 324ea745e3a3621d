//! Verification of MuSig aggregate signatures from the signer key list.
//!
//! Recomputes the combined public key and checks the signature with the ordinary
//! single-key verifier; an aggregate signature is indistinguishable from a
//! single-signer one.

use crate::curve::Curve;
use crate::keyagg::pubkey_combine;
use crate::schnorr::valid_sig;

/// Verify an aggregate `signature` over `message` for the ordered signer keys
/// `pubkeys`.
///
/// `pubkeys` must be in the exact order used during signing. Malformed keys yield
/// `false`.
pub fn musig_verify<P: AsRef<[u8]>>(
    curve: &Curve,
    pubkeys: &[P],
    message: &[u8],
    signature: &[u8],
) -> bool {
    match pubkey_combine(curve, pubkeys, None) {
        Ok(combined) => valid_sig(curve, message, &combined, signature),
        Err(_) => false,
    }
}
