//! Randomised batch verification.
//!
//! Checks `N` signatures with one combined equation
//!
//! ```text
//! (Σ a_i·s_i)·G == Σ a_i·(R_i + e_i·P_i)
//! ```
//!
//! where `a_0 = 1` and every other `a_i` is drawn uniformly from `[1, n-1]`.
//! Any single malformed or invalid entry fails the whole batch.

use crate::challenge::create_challenge;
use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::schnorr::check_signature_range;
use crate::signature::Signature;
use crypto_rs::secp256k1::{Secp256k1Point, Secp256k1Scalar};
use rand::rng;
use tracing::debug;

/// Draw a scalar uniformly from `[1, n-1]`, redrawing on zero.
pub(crate) fn random_nonzero_scalar() -> Secp256k1Scalar {
    let mut rng = rng();
    loop {
        let a = Secp256k1Scalar::random(&mut rng);
        if !a.is_zero() {
            return a;
        }
    }
}

/// Verify parallel arrays of messages, public keys and signatures as one batch.
///
/// Returns [`Error::LengthMismatch`] if the arrays differ in length, a decode or
/// [`Error::InvalidSignature`] error if any element is malformed, and
/// [`Error::InvalidSignature`] if the combined equation does not hold.
pub fn check_sigs<M, P, S>(
    curve: &Curve,
    messages: &[M],
    public_keys: &[P],
    signatures: &[S],
) -> Result<()>
where
    M: AsRef<[u8]>,
    P: AsRef<[u8]>,
    S: AsRef<[u8]>,
{
    if messages.len() != public_keys.len() || public_keys.len() != signatures.len() {
        return Err(Error::LengthMismatch);
    }

    let pubkeys = public_keys
        .iter()
        .map(|p| curve.decode_point(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let sigs = signatures
        .iter()
        .map(|s| {
            let sig = Signature::decode(s.as_ref())?;
            check_signature_range(&sig)?;
            Ok(sig)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut left = Secp256k1Scalar::zero();
    let mut right = Secp256k1Point::identity();
    for (i, ((pubkey, sig), message)) in pubkeys.iter().zip(&sigs).zip(messages).enumerate() {
        let e = create_challenge(curve, sig.r().value(), pubkey, message.as_ref())?;
        let r_point = curve
            .lift_x(sig.r().value())
            .map_err(|_| Error::InvalidSignature("c is not equal to y^2"))?;

        let a = if i == 0 {
            Secp256k1Scalar::one()
        } else {
            random_nonzero_scalar()
        };
        left = left + &(&a * sig.s());
        let term = curve.add(&curve.mul(&r_point, &a), &curve.mul(pubkey, &(&a * &e)));
        right = curve.add(&right, &term);
    }

    if curve.mul_base(&left) != right {
        return Err(Error::InvalidSignature("batch verification failed"));
    }
    Ok(())
}

/// Boolean form of [`check_sigs`].
///
/// Decode and verification failures yield `Ok(false)`; only mismatched input
/// lengths are still reported as an error.
pub fn valid_sigs<M, P, S>(
    curve: &Curve,
    messages: &[M],
    public_keys: &[P],
    signatures: &[S],
) -> Result<bool>
where
    M: AsRef<[u8]>,
    P: AsRef<[u8]>,
    S: AsRef<[u8]>,
{
    match check_sigs(curve, messages, public_keys, signatures) {
        Ok(()) => {
            debug!(batch = messages.len(), "batch verified");
            Ok(true)
        }
        Err(err) if err.is_verification_failure() => {
            debug!(batch = messages.len(), %err, "batch rejected");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
