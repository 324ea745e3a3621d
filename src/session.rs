// Per-signer MuSig session.
//
// A signing event moves through three phases, each its own type:
//
//   Session (created, round-1 commitment ready)
//     --combine_nonce-->  NonceCombinedSession (all nonces revealed and checked)
//     --partial_sign-->   partial signature (session consumed)
//
// Every transition takes `self` by value, so a session cannot be combined twice,
// signed before combining, or reused for a second message.
use crate::challenge::create_challenge;
use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::keyagg::{coefficient, signer_index};
use crate::nonce::{Commitment, NonceCommitment, PublicNonce, commit, random_session_id};
use crate::schnorr::check_private_key;
use crypto_rs::secp256k1::Secp256k1Scalar;
use std::fmt;
use tracing::{debug, instrument, warn};

/// A signer's contribution `s_i`, summed by [`crate::partial_sig_combine`].
pub type PartialSignature = Secp256k1Scalar;

fn fixed<const N: usize>(field: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        field,
        expected: N,
        got: bytes.len(),
    })
}

/// Session state after initialisation: our nonce is committed and we are
/// collecting the other signers' round-1 commitments.
pub struct Session {
    id: [u8; 32],
    num_signers: usize,
    message: [u8; 32],
    combined_pubkey: [u8; 33],
    /// `private_key · coefficient(ell, index) mod n`.
    secret_key: Secp256k1Scalar,
    nonce: NonceCommitment,
    commitments: Vec<Commitment>,
}

impl Session {
    /// Start a session for the signer at `index` of `num_signers`.
    ///
    /// # Parameters
    /// - `session_id`: 32 bytes unique to this signing event; fresh random bytes
    ///   when `None`.
    /// - `private_key`: the signer's private key in `[1, n-1]`.
    /// - `message`: the 32-byte message to sign.
    /// - `combined_pubkey`: 33-byte output of [`crate::pubkey_combine`].
    /// - `ell`: 32-byte output of [`crate::compute_ell`] for the same key order.
    /// - `index`: position of this signer's key in that order.
    /// - `num_signers`: total number of signers.
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip_all, fields(index = index, num_signers = num_signers))]
    pub fn initialize(
        curve: &Curve,
        session_id: Option<&[u8]>,
        private_key: &Secp256k1Scalar,
        message: &[u8],
        combined_pubkey: &[u8],
        ell: &[u8],
        index: usize,
        num_signers: usize,
    ) -> Result<Self> {
        let id: [u8; 32] = match session_id {
            Some(id) => fixed("session_id", id)?,
            None => random_session_id()?,
        };
        let message: [u8; 32] = fixed("message", message)?;
        let combined_pubkey: [u8; 33] = fixed("combined_pubkey", combined_pubkey)?;
        let ell: [u8; 32] = fixed("ell", ell)?;
        if index >= num_signers {
            return Err(Error::InvalidIndex { index, num_signers });
        }
        check_private_key(curve, private_key)?;

        let a = coefficient(&ell, signer_index(index, num_signers)?);
        let secret_key = private_key * &a;
        let nonce = NonceCommitment::derive(curve, &id, &message, &combined_pubkey, private_key)?;
        debug!("session initialized");

        Ok(Session {
            id,
            num_signers,
            message,
            combined_pubkey,
            secret_key,
            nonce,
            commitments: Vec::with_capacity(num_signers - 1),
        })
    }

    /// Session id.
    pub fn id(&self) -> &[u8; 32] {
        &self.id
    }

    /// Total number of signers.
    pub fn num_signers(&self) -> usize {
        self.num_signers
    }

    /// Coefficient-adjusted private scalar.
    pub fn secret_key(&self) -> &Secp256k1Scalar {
        &self.secret_key
    }

    /// Secret nonce scalar `k_i`.
    pub fn secret_nonce(&self) -> &Secp256k1Scalar {
        &self.nonce.secret
    }

    /// Our compressed public nonce, revealed in round 2.
    pub fn nonce(&self) -> &PublicNonce {
        &self.nonce.pub_nonce
    }

    /// Our round-1 commitment `SHA256(nonce)`.
    pub fn commitment(&self) -> &Commitment {
        &self.nonce.commitment
    }

    /// Commitments received from the other signers so far.
    pub fn commitments(&self) -> &[Commitment] {
        &self.commitments
    }

    /// Store another signer's round-1 commitment.
    ///
    /// A session holds at most `num_signers - 1` commitments; one more is
    /// [`Error::TooManyCommitments`].
    pub fn add_commitment(&mut self, commitment: Commitment) -> Result<()> {
        let expected = self.num_signers - 1;
        if self.commitments.len() >= expected {
            return Err(Error::TooManyCommitments { expected });
        }
        self.commitments.push(commitment);
        Ok(())
    }

    /// Check every revealed nonce against its commitment and sum all nonces.
    ///
    /// The combined nonce is negated if its y-coordinate is not a quadratic
    /// residue; the negation is remembered and applied to our secret nonce when
    /// signing. Returns the next phase; its [`NonceCombinedSession::combined_nonce`]
    /// is the compressed combined nonce.
    #[instrument(skip_all, fields(num_signers = self.num_signers))]
    pub fn combine_nonce<N: AsRef<[u8]>>(
        self,
        curve: &Curve,
        other_nonces: &[N],
    ) -> Result<NonceCombinedSession> {
        let expected = self.num_signers - 1;
        if other_nonces.len() != expected {
            return Err(Error::SignerCount {
                expected,
                got: other_nonces.len(),
            });
        }
        if other_nonces.len() != self.commitments.len() {
            return Err(Error::MissingCommitments {
                expected: other_nonces.len(),
                got: self.commitments.len(),
            });
        }
        debug_assert!(self.nonce.verify());

        let mut unmatched = self.commitments.clone();
        let mut r = curve.decode_point(&self.nonce.pub_nonce)?;
        for nonce in other_nonces {
            let nonce: [u8; 33] = fixed("nonce", nonce.as_ref())?;
            let digest = commit(&nonce);
            let pos = unmatched.iter().position(|c| *c == digest).ok_or_else(|| {
                warn!("revealed nonce does not match any commitment");
                Error::CommitBinding
            })?;
            unmatched.swap_remove(pos);
            r = curve.add(&r, &curve.decode_point(&nonce)?);
        }

        if curve.is_infinity(&r) {
            return Err(Error::DegenerateNonce);
        }
        let nonce_negate = !curve.has_square_y(&r)?;
        if nonce_negate {
            r = curve.negate(&r);
        }
        let combined_nonce = curve.encode_point(&r)?;
        debug!(nonce_negate, "nonces combined");

        Ok(NonceCombinedSession {
            session: self,
            combined_nonce,
            nonce_negate,
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("num_signers", &self.num_signers)
            .field("commitments", &self.commitments.len())
            .finish_non_exhaustive()
    }
}

/// Session state after every nonce has been revealed and combined.
pub struct NonceCombinedSession {
    session: Session,
    combined_nonce: PublicNonce,
    nonce_negate: bool,
}

impl NonceCombinedSession {
    /// Session id.
    pub fn id(&self) -> &[u8; 32] {
        &self.session.id
    }

    /// Compressed combined nonce `R` (square y).
    pub fn combined_nonce(&self) -> &PublicNonce {
        &self.combined_nonce
    }

    /// Whether the summed nonce was negated to make its y a quadratic residue.
    pub fn nonce_negate(&self) -> bool {
        self.nonce_negate
    }

    /// Produce this signer's partial signature `s_i = secret_key·e + k_i mod n`.
    ///
    /// `message`, `combined_nonce` and `combined_pubkey` must be the values this
    /// session was built with; anything else is rejected. The session is consumed.
    #[instrument(skip_all)]
    pub fn partial_sign(
        self,
        curve: &Curve,
        message: &[u8],
        combined_nonce: &[u8],
        combined_pubkey: &[u8],
    ) -> Result<PartialSignature> {
        if message != &self.session.message[..] {
            return Err(Error::SessionMismatch("message"));
        }
        if combined_nonce != &self.combined_nonce[..] {
            return Err(Error::SessionMismatch("combined_nonce"));
        }
        if combined_pubkey != &self.session.combined_pubkey[..] {
            return Err(Error::SessionMismatch("combined_pubkey"));
        }

        let r = curve.x_coordinate(&curve.decode_point(combined_nonce)?)?;
        let x = curve.decode_point(combined_pubkey)?;
        let e = create_challenge(curve, &r, &x, message)?;

        let session = self.session;
        let k = if self.nonce_negate {
            -session.nonce.secret
        } else {
            session.nonce.secret
        };
        debug!("partial signature produced");
        Ok(&session.secret_key * &e + &k)
    }
}

impl fmt::Debug for NonceCombinedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonceCombinedSession")
            .field("num_signers", &self.session.num_signers)
            .field("nonce_negate", &self.nonce_negate)
            .finish_non_exhaustive()
    }
}
