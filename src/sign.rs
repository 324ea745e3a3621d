//! In-process MuSig driver.
//!
//! Runs every signer's session locally, in the order a real deployment would
//! exchange messages: key aggregation, round-1 commitments, round-2 nonce reveals,
//! partial signatures and aggregation. Useful for tests and for signing with
//! several keys held by one process.

use crate::aggregate::partial_sig_combine;
use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::keyagg::{compute_ell, pubkey_combine};
use crate::nonce::{Commitment, PublicNonce};
use crate::schnorr::public_key;
use crate::session::{NonceCombinedSession, Session};
use crate::signature::Signature;
use crypto_rs::secp256k1::Secp256k1Scalar;
use tracing::{info, instrument};

/// Jointly sign a 32-byte `message` with all of `private_keys`.
///
/// Keys are aggregated in the given order. Returns the aggregate signature and the
/// combined public key it verifies under.
#[instrument(skip_all, fields(signers = private_keys.len()))]
pub fn sign_multi(
    curve: &Curve,
    private_keys: &[Secp256k1Scalar],
    message: &[u8],
) -> Result<(Signature, [u8; 33])> {
    let n = private_keys.len();
    if n == 0 {
        return Err(Error::SignerCount {
            expected: 1,
            got: 0,
        });
    }

    // Key aggregation, once per signer set.
    let pubkeys = private_keys
        .iter()
        .map(|d| public_key(curve, d))
        .collect::<Result<Vec<_>>>()?;
    let ell = compute_ell(&pubkeys);
    let combined_pubkey = pubkey_combine(curve, &pubkeys, Some(&ell))?;

    let mut sessions = private_keys
        .iter()
        .enumerate()
        .map(|(i, d)| Session::initialize(curve, None, d, message, &combined_pubkey, &ell, i, n))
        .collect::<Result<Vec<_>>>()?;

    // Round 1: every commitment is delivered before any nonce is revealed.
    let commitments: Vec<Commitment> = sessions.iter().map(|s| *s.commitment()).collect();
    for (i, session) in sessions.iter_mut().enumerate() {
        for (j, c) in commitments.iter().enumerate() {
            if i != j {
                session.add_commitment(*c)?;
            }
        }
    }

    // Round 2: reveal nonces.
    let nonces: Vec<PublicNonce> = sessions.iter().map(|s| *s.nonce()).collect();
    let combined = sessions
        .into_iter()
        .enumerate()
        .map(|(i, session)| {
            let others: Vec<PublicNonce> = nonces
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, r)| *r)
                .collect();
            session.combine_nonce(curve, &others)
        })
        .collect::<Result<Vec<NonceCombinedSession>>>()?;

    let combined_nonce = *combined[0].combined_nonce();
    let partials = combined
        .into_iter()
        .map(|session| session.partial_sign(curve, message, &combined_nonce, &combined_pubkey))
        .collect::<Result<Vec<_>>>()?;

    let signature = partial_sig_combine(curve, &combined_nonce, &partials)?;
    info!("aggregate signature produced");
    Ok((signature, combined_pubkey))
}
