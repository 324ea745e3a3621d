//! Challenge computation shared by signing, verification, batch verification and
//! MuSig partial signing.
//!
//! ```text
//! e = SHA256(bytes(x) || compressed(P) || m) mod n
//! ```
//!
//! where `x` is the x-coordinate of the (square-y) nonce point, encoded at the
//! curve's fixed byte length, and `P` is the signer's (or combined) public key.

use crate::curve::{Curve, to_bytes32};
use crate::error::Result;
use crypto_rs::secp256k1::{Secp256k1Point, Secp256k1Scalar};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Compute the challenge scalar `e` for nonce x-coordinate `x`, public key `pubkey`
/// and `message`.
///
/// Fails if `x` does not fit in 32 bytes or `pubkey` is the point at infinity,
/// which has no compressed encoding.
///
/// # Example
/// ```rust
/// # use schnorr_musig::{create_challenge, Curve, Secp256k1Scalar};
/// # use num_bigint::BigUint;
/// let curve = Curve::secp256k1();
/// let p = curve.mul_base(&Secp256k1Scalar::one());
/// let e1 = create_challenge(&curve, &BigUint::from(5u8), &p, b"hello").unwrap();
/// let e2 = create_challenge(&curve, &BigUint::from(5u8), &p, b"hello").unwrap();
/// assert_eq!(e1, e2);
/// ```
pub fn create_challenge(
    curve: &Curve,
    x: &BigUint,
    pubkey: &Secp256k1Point,
    message: &[u8],
) -> Result<Secp256k1Scalar> {
    let public_key = curve.encode_point(pubkey)?;
    let digest: [u8; 32] = Sha256::new()
        .chain_update(to_bytes32(x)?)
        .chain_update(public_key)
        .chain_update(message)
        .finalize()
        .into();
    Ok(Secp256k1Scalar::from_bytes_be(&digest))
}
