//! Single-key Schnorr signing and verification.
//!
//! The nonce point `R` is always canonicalised to have a quadratic-residue
//! y-coordinate, so a signature only needs to carry `R.x`.

use crate::challenge::create_challenge;
use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::signature::Signature;
use crypto_rs::secp256k1::Secp256k1Scalar;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Compressed public key `d·G` for the private key `d`.
pub fn public_key(curve: &Curve, private_key: &Secp256k1Scalar) -> Result<[u8; 33]> {
    check_private_key(curve, private_key)?;
    curve.encode_point(&curve.mul_base(private_key))
}

pub(crate) fn check_private_key(curve: &Curve, private_key: &Secp256k1Scalar) -> Result<()> {
    if private_key.is_zero() || !curve.in_scalar_field(private_key.value()) {
        return Err(Error::Decode("private key must be in [1, n-1]"));
    }
    Ok(())
}

/// Deterministically sign `message` with `private_key`.
///
/// The nonce is `k = SHA256(bytes(d) || m) mod n`; a zero `k` aborts with
/// [`Error::DegenerateNonce`].
pub fn sign(curve: &Curve, message: &[u8], private_key: &Secp256k1Scalar) -> Result<Signature> {
    check_private_key(curve, private_key)?;
    let digest: [u8; 32] = Sha256::new()
        .chain_update(private_key.to_bytes_be())
        .chain_update(message)
        .finalize()
        .into();
    let mut k = Secp256k1Scalar::from_bytes_be(&digest);
    if k.is_zero() {
        return Err(Error::DegenerateNonce);
    }

    let r_point = curve.mul_base(&k);
    if !curve.has_square_y(&r_point)? {
        k = -k;
    }
    let x = curve.x_coordinate(&r_point)?;

    let pubkey = curve.mul_base(private_key);
    let e = create_challenge(curve, &x, &pubkey, message)?;
    // R.x >= n cannot be carried in a signature
    let r = curve.checked_scalar(x).ok_or(Error::DegenerateNonce)?;
    let s = k + &(&e * private_key);
    Ok(Signature::new(r, s))
}

/// Reject a zero `r` or `s`; decoding already bounds both below `n`.
pub(crate) fn check_signature_range(sig: &Signature) -> Result<()> {
    if sig.r().is_zero() {
        return Err(Error::InvalidSignature("r is zero"));
    }
    if sig.s().is_zero() {
        return Err(Error::InvalidSignature("s is zero"));
    }
    Ok(())
}

/// Verify `signature` over `message` under `public_key`, reporting why it failed.
///
/// Returns [`Error::Decode`] for malformed encodings and
/// [`Error::InvalidSignature`] when the signature is well-formed but wrong.
pub fn check_sig(curve: &Curve, message: &[u8], public_key: &[u8], signature: &[u8]) -> Result<()> {
    let sig = Signature::decode(signature)?;
    let pubkey = curve.decode_point(public_key)?;
    check_signature_range(&sig)?;

    let r = sig.r().value();
    let e = create_challenge(curve, r, &pubkey, message)?;

    // R = s·G - e·P
    let r_point = curve.add(
        &curve.mul_base(sig.s()),
        &curve.negate(&curve.mul(&pubkey, &e)),
    );

    if curve.is_infinity(&r_point)
        || !curve.has_square_y(&r_point)?
        || &curve.x_coordinate(&r_point)? != r
    {
        return Err(Error::InvalidSignature("signature verification failed"));
    }
    Ok(())
}

/// Boolean form of [`check_sig`]: decode and verification failures yield `false`.
pub fn valid_sig(curve: &Curve, message: &[u8], public_key: &[u8], signature: &[u8]) -> bool {
    match check_sig(curve, message, public_key, signature) {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "signature rejected");
            debug_assert!(err.is_verification_failure());
            false
        }
    }
}
