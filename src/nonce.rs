//! Nonce derivation and commitment for MuSig sessions.
//!
//! Each signer derives its secret nonce deterministically from a fresh session id,
//! publishes `SHA256(R_i)` in round 1 and only reveals the compressed `R_i` in
//! round 2, after every commitment has been collected.

use crate::curve::Curve;
use crate::error::{Error, Result};
use crypto_rs::secp256k1::Secp256k1Scalar;
use rand::TryRngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

/// Round-1 message: `SHA256(compressed(R_i))`.
pub type Commitment = [u8; 32];

/// Round-2 message: the compressed public nonce `R_i`.
pub type PublicNonce = [u8; 33];

/// Commitment to a compressed public nonce.
pub fn commit(nonce: &[u8]) -> Commitment {
    Sha256::digest(nonce).into()
}

/// 32 fresh bytes from the operating system random source.
pub fn random_session_id() -> Result<[u8; 32]> {
    let mut id = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut id)
        .map_err(|e| Error::Rng(e.to_string()))?;
    Ok(id)
}

/// A signer's nonce state: secret scalar `k_i`, public nonce and its commitment.
#[derive(Clone)]
pub(crate) struct NonceCommitment {
    pub(crate) secret: Secp256k1Scalar,
    pub(crate) pub_nonce: PublicNonce,
    pub(crate) commitment: Commitment,
}

impl NonceCommitment {
    /// Derive `k = SHA256(session_id || m || X || bytes(d)) mod n`.
    ///
    /// A zero `k` aborts with [`Error::DegenerateNonce`]; it is never
    /// resampled.
    pub(crate) fn derive(
        curve: &Curve,
        session_id: &[u8; 32],
        message: &[u8],
        combined_pubkey: &[u8; 33],
        private_key: &Secp256k1Scalar,
    ) -> Result<Self> {
        let digest: [u8; 32] = Sha256::new()
            .chain_update(session_id)
            .chain_update(message)
            .chain_update(combined_pubkey)
            .chain_update(private_key.to_bytes_be())
            .finalize()
            .into();
        let secret = Secp256k1Scalar::from_bytes_be(&digest);
        if secret.is_zero() {
            return Err(Error::DegenerateNonce);
        }
        let pub_nonce = curve.encode_point(&curve.mul_base(&secret))?;
        Ok(NonceCommitment {
            secret,
            pub_nonce,
            commitment: commit(&pub_nonce),
        })
    }

    /// Whether the stored commitment matches the public nonce.
    pub(crate) fn verify(&self) -> bool {
        commit(&self.pub_nonce) == self.commitment
    }
}
