//! MuSig public key aggregation.
//!
//! For an ordered list of compressed public keys `P_0..P_{n-1}`:
//!
//! 1. `ell = SHA256(P_0 || ... || P_{n-1})` binds the exact signer set and order.
//! 2. `a_i = SHA256(TAG || TAG || ell || le32(i)) mod n` is the per-signer coefficient.
//! 3. The combined key is `X = Σ a_i·P_i`.
//!
//! Signers must agree on the key order before any session starts; a different
//! order yields a different `ell` and a different combined key.

use crate::curve::Curve;
use crate::error::{Error, Result};
use crypto_rs::secp256k1::{Secp256k1Point, Secp256k1Scalar};
use sha2::{Digest, Sha256};
use tracing::debug;

/// `SHA256("MuSig coefficient")`, the domain tag for coefficient hashing.
pub const MUSIG_TAG: [u8; 32] = [
    0x74, 0x89, 0x4a, 0x2b, 0xec, 0x01, 0xaf, 0x68, 0x22, 0x50, 0x02, 0xca, 0xe9, 0xb0, 0x43, 0x0a,
    0xb6, 0x31, 0x51, 0xed, 0xe5, 0xd3, 0x1f, 0x64, 0x17, 0x91, 0x97, 0x6c, 0x71, 0x40, 0xb5, 0x7b,
];

/// Compute `ell = SHA256(pk_0 || ... || pk_{n-1})` over the keys in the given order.
pub fn compute_ell<P: AsRef<[u8]>>(pubkeys: &[P]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for pk in pubkeys {
        hasher.update(pk.as_ref());
    }
    hasher.finalize().into()
}

/// Coefficient `SHA256(TAG || TAG || ell || le32(idx)) mod n` for the key at `idx`.
pub fn coefficient(ell: &[u8; 32], idx: u32) -> Secp256k1Scalar {
    let digest: [u8; 32] = Sha256::new()
        .chain_update(MUSIG_TAG)
        .chain_update(MUSIG_TAG)
        .chain_update(ell)
        .chain_update(idx.to_le_bytes())
        .finalize()
        .into();
    Secp256k1Scalar::from_bytes_be(&digest)
}

/// Combine public keys into `X = Σ coefficient(ell, i)·P_i`, returned compressed.
///
/// `ell` is computed from `pubkeys` when not supplied.
pub fn pubkey_combine<P: AsRef<[u8]>>(
    curve: &Curve,
    pubkeys: &[P],
    ell: Option<&[u8; 32]>,
) -> Result<[u8; 33]> {
    if pubkeys.is_empty() {
        return Err(Error::SignerCount {
            expected: 1,
            got: 0,
        });
    }
    let ell = match ell {
        Some(ell) => *ell,
        None => compute_ell(pubkeys),
    };

    let mut x_agg = Secp256k1Point::identity();
    for (idx, pk) in pubkeys.iter().enumerate() {
        let point = curve.decode_point(pk.as_ref())?;
        let a = coefficient(&ell, signer_index(idx, pubkeys.len())?);
        x_agg = curve.add(&x_agg, &curve.mul(&point, &a));
    }
    debug!(signers = pubkeys.len(), "combined public keys");
    curve.encode_point(&x_agg)
}

/// The 4-byte index hashed into a coefficient; indices past `u32::MAX` are invalid.
pub(crate) fn signer_index(idx: usize, num_signers: usize) -> Result<u32> {
    u32::try_from(idx).map_err(|_| Error::InvalidIndex {
        index: idx,
        num_signers,
    })
}
