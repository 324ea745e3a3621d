//! Curve context for secp256k1.
//!
//! Group and scalar arithmetic come from `crypto_rs`; this module adds the
//! field-level pieces the signature scheme needs on top of it: modular
//! exponentiation, the quadratic-residue test on y, lifting an x-coordinate back
//! to a point and range-checked conversion of decoded integers into scalars.
//!
//! A [`Curve`] is built once and passed by reference into every operation.

use crate::error::{Error, Result};
use crypto_rs::secp256k1::{Secp256k1Point, Secp256k1Scalar};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Field prime `p = 2^256 - 2^32 - 977`.
const FIELD_PRIME: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

/// Group order `n`.
const GROUP_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Curve equation constant `b` in `y^2 = x^3 + b`.
const CURVE_B: u32 = 7;

/// Modular exponentiation `base^exp mod modulus`.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// Legendre/Jacobi symbol of `a` modulo the odd prime `p` via Euler's criterion.
///
/// Returns `1` for a non-zero quadratic residue, `-1` for a non-residue and `0` when
/// `p` divides `a`.
pub fn jacobi(a: &BigUint, p: &BigUint) -> i8 {
    let a = a % p;
    if a.is_zero() {
        return 0;
    }
    let exp = (p - 1u32) >> 1;
    if mod_pow(&a, &exp, p).is_one() { 1 } else { -1 }
}

/// Left-pad a big-endian integer to 32 bytes; values of 2^256 or more are rejected.
pub(crate) fn to_bytes32(v: &BigUint) -> Result<[u8; 32]> {
    let bytes = v.to_bytes_be();
    if bytes.len() > 32 {
        return Err(Error::Decode("integer does not fit in 32 bytes"));
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Explicit secp256k1 parameters and the group operations built on them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    p: BigUint,
    n: BigUint,
    byte_length: usize,
}

impl Default for Curve {
    fn default() -> Self {
        Self::secp256k1()
    }
}

impl Curve {
    /// The secp256k1 curve context.
    pub fn secp256k1() -> Self {
        Curve {
            p: BigUint::from_bytes_be(&FIELD_PRIME),
            n: BigUint::from_bytes_be(&GROUP_ORDER),
            byte_length: 32,
        }
    }

    /// Field prime `p`.
    pub fn prime(&self) -> &BigUint {
        &self.p
    }

    /// Group order `n`.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Fixed byte length of field elements and scalars.
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Whether `v` lies in `[0, n)`.
    pub fn in_scalar_field(&self, v: &BigUint) -> bool {
        v < &self.n
    }

    /// `v` as a scalar if it lies in `[0, n)`; no reduction is applied.
    pub fn checked_scalar(&self, v: BigUint) -> Option<Secp256k1Scalar> {
        self.in_scalar_field(&v).then(|| Secp256k1Scalar::new(v))
    }

    /// `k·G`
    pub fn mul_base(&self, k: &Secp256k1Scalar) -> Secp256k1Point {
        self.mul(&Secp256k1Point::generator(), k)
    }

    /// `k·P`; a zero scalar gives the point at infinity.
    pub fn mul(&self, point: &Secp256k1Point, k: &Secp256k1Scalar) -> Secp256k1Point {
        if k.is_zero() {
            return Secp256k1Point::identity();
        }
        point * k
    }

    /// `P + Q`
    pub fn add(&self, a: &Secp256k1Point, b: &Secp256k1Point) -> Secp256k1Point {
        a.clone() + b
    }

    /// `-P`
    pub fn negate(&self, point: &Secp256k1Point) -> Secp256k1Point {
        -point.clone()
    }

    /// Whether the point is the point at infinity.
    pub fn is_infinity(&self, point: &Secp256k1Point) -> bool {
        *point == Secp256k1Point::identity()
    }

    /// 33-byte compressed encoding (parity prefix ‖ x).
    pub fn encode_point(&self, point: &Secp256k1Point) -> Result<[u8; 33]> {
        if self.is_infinity(point) {
            return Err(Error::Decode("point at infinity has no compressed encoding"));
        }
        Ok(point.to_bytes_compressed())
    }

    /// Decode a compressed (33-byte) or uncompressed (65-byte) point encoding.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Secp256k1Point> {
        match bytes.len() {
            33 => {
                if bytes[0] != 0x02 && bytes[0] != 0x03 {
                    return Err(Error::Decode("invalid compressed point prefix"));
                }
                let x = BigUint::from_bytes_be(&bytes[1..]);
                if x >= self.p {
                    return Err(Error::Decode("coordinate is not in the field"));
                }
                if self.sqrt_rhs(&x).is_none() {
                    return Err(Error::Decode("x is not the coordinate of a curve point"));
                }
                let mut buf = [0u8; 33];
                buf.copy_from_slice(bytes);
                Secp256k1Point::from_bytes_compressed(&buf)
                    .ok_or(Error::Decode("x is not the coordinate of a curve point"))
            }
            65 => {
                if bytes[0] != 0x04 {
                    return Err(Error::Decode("invalid uncompressed point prefix"));
                }
                let x = BigUint::from_bytes_be(&bytes[1..33]);
                let y = BigUint::from_bytes_be(&bytes[33..]);
                if x >= self.p || y >= self.p {
                    return Err(Error::Decode("coordinate is not in the field"));
                }
                if (&y * &y) % &self.p != self.curve_rhs(&x) {
                    return Err(Error::Decode("point is not on the curve"));
                }
                self.point_from_coordinates(&x, &y)
            }
            _ => Err(Error::Decode("invalid point encoding length")),
        }
    }

    /// Affine x-coordinate of a finite point.
    pub fn x_coordinate(&self, point: &Secp256k1Point) -> Result<BigUint> {
        let bytes = self.encode_point(point)?;
        Ok(BigUint::from_bytes_be(&bytes[1..]))
    }

    /// Affine y-coordinate of a finite point, recovered from its compressed form.
    pub fn y_coordinate(&self, point: &Secp256k1Point) -> Result<BigUint> {
        let bytes = self.encode_point(point)?;
        let x = BigUint::from_bytes_be(&bytes[1..]);
        let y = self
            .sqrt_rhs(&x)
            .ok_or(Error::Decode("point is not on the curve"))?;
        if y.bit(0) == (bytes[0] == 0x03) || y.is_zero() {
            Ok(y)
        } else {
            Ok(&self.p - y)
        }
    }

    /// Whether the y-coordinate of a finite point is a quadratic residue mod `p`.
    pub fn has_square_y(&self, point: &Secp256k1Point) -> Result<bool> {
        let y = self.y_coordinate(point)?;
        Ok(jacobi(&y, &self.p) == 1)
    }

    /// The unique curve point with x-coordinate `x` whose y is a quadratic residue.
    ///
    /// Uses `y = c^((p+1)/4)` with `c = x^3 + 7`, valid because `p ≡ 3 mod 4`.
    pub fn lift_x(&self, x: &BigUint) -> Result<Secp256k1Point> {
        let y = self
            .sqrt_rhs(x)
            .ok_or(Error::Decode("x is not the coordinate of a curve point"))?;
        self.point_from_coordinates(x, &y)
    }

    fn curve_rhs(&self, x: &BigUint) -> BigUint {
        (mod_pow(x, &BigUint::from(3u32), &self.p) + CURVE_B) % &self.p
    }

    /// The square root of `x^3 + 7` that is itself a square, if `x` is on the curve.
    fn sqrt_rhs(&self, x: &BigUint) -> Option<BigUint> {
        if x >= &self.p {
            return None;
        }
        let c = self.curve_rhs(x);
        let y = mod_pow(&c, &((&self.p + 1u32) >> 2), &self.p);
        ((&y * &y) % &self.p == c).then_some(y)
    }

    fn point_from_coordinates(&self, x: &BigUint, y: &BigUint) -> Result<Secp256k1Point> {
        let mut buf = [0u8; 33];
        buf[0] = if y.bit(0) { 0x03 } else { 0x02 };
        buf[1..].copy_from_slice(&to_bytes32(x)?);
        Secp256k1Point::from_bytes_compressed(&buf).ok_or(Error::Decode("point is not on the curve"))
    }
}
