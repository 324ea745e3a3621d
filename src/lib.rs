//! Schnorr signatures over secp256k1 with square-y nonces, randomised batch
//! verification, and the MuSig commit-reveal multi-signature protocol.
//! Uses crypto-rs v0.1.0 (<https://github.com/BEULAHEVANJALIN/crypto-rs>) for elliptic curve operations.
pub use crypto_rs::secp256k1::{Secp256k1Point, Secp256k1Scalar};
pub mod curve;
pub use curve::Curve;
pub mod error;
pub use error::{Error, Result};
mod signature;
pub use signature::Signature;
mod challenge;
pub use challenge::create_challenge;
mod schnorr;
pub use schnorr::{check_sig, public_key, sign, valid_sig};
mod batch;
pub use batch::{check_sigs, valid_sigs};
mod keyagg;
pub use keyagg::{MUSIG_TAG, coefficient, compute_ell, pubkey_combine};
pub mod nonce;
pub use nonce::{Commitment, PublicNonce};
pub mod session;
pub use session::{NonceCombinedSession, PartialSignature, Session};
mod aggregate;
pub use aggregate::partial_sig_combine;
pub mod sign;
pub use sign::sign_multi;
pub mod verify;
pub use verify::musig_verify;
