//! Error types for the prover.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Ephemeral randomness kept reducing to zero until the retry bound ran out.
    #[error("Randomness source exhausted the retry bound without a nonzero scalar")]
    RandomnessExhausted,

    /// The Fiat-Shamir challenge hashed to zero. Not retried.
    #[error("Fiat-Shamir challenge evaluated to zero")]
    ZeroChallenge,

    /// Proof generation exhausted the retry bound without a self-verifying candidate.
    #[error("Proof generation exhausted the retry bound without a valid proof")]
    ProvingExhausted,

    /// The key pair carries no secret scalar, so no proof can be produced.
    #[error("Key pair has no secret key")]
    MissingSecretKey,

    /// A scalar value is invalid or out of range.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// A group element is invalid or failed to decode.
    #[error("Invalid group element: {0}")]
    InvalidGroupElement(String),

    /// A serialized proof is malformed.
    #[error("Invalid proof: {0}")]
    InvalidProof(String),
}
