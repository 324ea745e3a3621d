use thiserror::Error;

/// Result type alias for signing, verification and session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while signing, verifying or running a MuSig session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed point or scalar encoding (wrong length, point not on the curve).
    #[error("decode error: {0}")]
    Decode(&'static str),

    /// Field-membership violation, zero `r` or `s`, or the verification equation failed.
    #[error("invalid signature: {0}")]
    InvalidSignature(&'static str),

    /// A fixed-length input had the wrong size.
    #[error("{field} must be {expected} bytes, got {got}")]
    InvalidLength {
        /// Name of the offending input.
        field: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// The number of signers or revealed nonces is not what the operation needs.
    #[error("expected {expected} signers or nonces, got {got}")]
    SignerCount {
        /// Number expected.
        expected: usize,
        /// Number actually provided.
        got: usize,
    },

    /// A signer index outside `[0, num_signers)` or too large to encode.
    #[error("signer index {index} is invalid for {num_signers} signers")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Number of signers in the session or key list.
        num_signers: usize,
    },

    /// The number of stored commitments does not match the revealed nonces.
    #[error("expected {expected} commitments, got {got}")]
    MissingCommitments {
        /// Number of commitments expected.
        expected: usize,
        /// Number of commitments actually stored.
        got: usize,
    },

    /// Every other signer's commitment has already been stored.
    #[error("already holding the {expected} commitments expected")]
    TooManyCommitments {
        /// Number of commitments a session accepts (`num_signers - 1`).
        expected: usize,
    },

    /// Batch inputs were not parallel arrays of equal length.
    #[error("all batch inputs must have the same length")]
    LengthMismatch,

    /// An input does not match the one the session was initialised with.
    #[error("{0} does not match the session")]
    SessionMismatch(&'static str),

    /// A revealed nonce hashes to none of the stored commitments.
    #[error("revealed nonce does not match any commitment")]
    CommitBinding,

    /// The derived nonce was zero or outside `[1, n-1]`.
    #[error("derived nonce is degenerate")]
    DegenerateNonce,

    /// The operating system random source failed.
    #[error("random source failure: {0}")]
    Rng(String),
}

impl Error {
    /// Whether this is an argument/cardinality error rather than a cryptographic one.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidLength { .. }
                | Error::SignerCount { .. }
                | Error::InvalidIndex { .. }
                | Error::MissingCommitments { .. }
                | Error::TooManyCommitments { .. }
                | Error::LengthMismatch
                | Error::SessionMismatch(_)
        )
    }

    /// Whether the error is one that the boolean verification API reports as `false`.
    pub(crate) fn is_verification_failure(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::InvalidSignature(_))
    }
}
