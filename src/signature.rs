//! Schnorr signature value and its 64-byte wire encoding.

use crate::curve::Curve;
use crate::error::{Error, Result};
use crypto_rs::secp256k1::Secp256k1Scalar;
use num_bigint::BigUint;
use std::fmt;

/// A Schnorr signature: the x-coordinate `r` of the square-y nonce point and the
/// scalar `s`, both in `[0, n)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    r: Secp256k1Scalar,
    s: Secp256k1Scalar,
}

impl Signature {
    /// Encoded length in bytes.
    pub const LEN: usize = 64;

    /// Build a signature from its two components.
    ///
    /// Zero components are accepted here; verification rejects them.
    pub fn new(r: Secp256k1Scalar, s: Secp256k1Scalar) -> Self {
        Signature { r, s }
    }

    /// x-coordinate of the nonce point.
    pub fn r(&self) -> &Secp256k1Scalar {
        &self.r
    }

    /// Signature scalar.
    pub fn s(&self) -> &Secp256k1Scalar {
        &self.s
    }

    /// Parse a 64-byte `r || s` encoding.
    ///
    /// A wrong length is a [`Error::Decode`]; a component of `n` or more is an
    /// [`Error::InvalidSignature`].
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LEN {
            return Err(Error::Decode("invalid schnorr signature length"));
        }
        let curve = Curve::secp256k1();
        let r = curve
            .checked_scalar(BigUint::from_bytes_be(&bytes[..32]))
            .ok_or(Error::InvalidSignature("r is not in the field"))?;
        let s = curve
            .checked_scalar(BigUint::from_bytes_be(&bytes[32..]))
            .ok_or(Error::InvalidSignature("s is not in the field"))?;
        Ok(Signature { r, s })
    }

    /// Encode as 32-byte big-endian `r` followed by 32-byte big-endian `s`.
    pub fn encode(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r.to_bytes_be());
        out[32..].copy_from_slice(&self.s.to_bytes_be());
        out
    }

    /// Lower-case hex of the encoding.
    pub fn to_hex(&self) -> String {
        self.encode().iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
