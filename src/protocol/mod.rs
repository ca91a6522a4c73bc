/// Fiat-Shamir challenge derivation and template constants.
mod challenge;
/// Secret, public, and paired key material.
pub mod keys;
/// The 56-byte proof wire value.
pub mod proof;
/// Proof generation.
pub mod signer;
/// Proof verification.
pub mod verifier;

pub use keys::{KeyPair, PublicKey, SecretKey};
pub use proof::{SchnorrProof, CHALLENGE_BYTES, PROOF_BYTES, RESPONSE_BYTES};
pub use signer::{sign, sign_with_rng, MAX_SIGNING_ATTEMPTS};
pub use verifier::verify;
