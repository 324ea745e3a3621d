//! Combine MuSig partial signatures into an ordinary Schnorr signature.

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::session::PartialSignature;
use crate::signature::Signature;
use crypto_rs::secp256k1::Secp256k1Scalar;

/// Sum the partial signatures mod `n` and pair them with the combined nonce's
/// x-coordinate.
///
/// The result has the same format as a single-signer signature and verifies under
/// [`crate::valid_sig`] against the combined public key.
pub fn partial_sig_combine(
    curve: &Curve,
    combined_nonce: &[u8],
    partial_sigs: &[PartialSignature],
) -> Result<Signature> {
    if partial_sigs.is_empty() {
        return Err(Error::SignerCount {
            expected: 1,
            got: 0,
        });
    }
    let x = curve.x_coordinate(&curve.decode_point(combined_nonce)?)?;
    let r = curve
        .checked_scalar(x)
        .ok_or(Error::InvalidSignature("r is not in the field"))?;
    let s = partial_sigs
        .iter()
        .fold(Secp256k1Scalar::zero(), |acc, s_i| acc + s_i);
    Ok(Signature::new(r, s))
}
