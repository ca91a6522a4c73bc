//! Schnorr-style zero-knowledge spending proofs and transaction proving for
//! Ergo-style UTXO transactions.
//!
//! The library has two layers. The protocol layer implements a
//! non-interactive proof of knowledge of a discrete logarithm over
//! secp256k1, obtained by applying the Fiat-Shamir transform to the
//! three-move Sigma protocol and binding the challenge to the on-chain
//! predicate-commitment template. The transaction layer signs every input of
//! an unsigned transaction with one such proof and derives content-addressed
//! blake2b-256 identifiers for the transaction and each of its outputs.
//!
//! # Example
//!
//! ```rust
//! use ergo_prover::{sign, verify, SecretKey, SecureRng};
//!
//! let mut rng = SecureRng::new();
//! let secret = SecretKey::random(&mut rng);
//!
//! let proof = sign(b"message", &secret).unwrap();
//! assert!(verify(
//!     b"message",
//!     &proof.to_bytes(),
//!     &secret.public_key().to_bytes(),
//! ));
//! ```
//!
//! Proving a transaction attaches the shared proof to every input and
//! completes every output with its identifier:
//!
//! ```rust,no_run
//! use ergo_prover::{KeyPair, SecretKey, SecureRng, TransactionProver, UnsignedTransaction};
//!
//! # fn fetch_unsigned() -> UnsignedTransaction { unimplemented!() }
//! let mut rng = SecureRng::new();
//! let key = KeyPair::from_secret(SecretKey::random(&mut rng));
//!
//! let signed = TransactionProver::new()
//!     .prove_transaction(&fetch_unsigned(), &key)
//!     .unwrap();
//! ```

/// Group, hash, and randomness primitives.
pub mod crypto;
/// Error types.
pub mod error;
/// The Schnorr signature scheme.
pub mod protocol;
/// Transaction model and proving pipeline.
pub mod transaction;

pub use crypto::{blake2b256, Group, Secp256k1, SecureRng};
pub use error::Error;
pub use protocol::{
    sign, sign_with_rng, verify, KeyPair, PublicKey, SchnorrProof, SecretKey, CHALLENGE_BYTES,
    MAX_SIGNING_ATTEMPTS, PROOF_BYTES, RESPONSE_BYTES,
};
pub use transaction::{
    CanonicalSerializer, DataInput, Extension, Identifier, Output, OutputCandidate, SignedInput,
    SignedTransaction, SpendingProof, TokenAmount, TransactionProver, UnsignedInput,
    UnsignedTransaction, WireSerializer,
};

/// Convenience alias used across the library.
pub type Result<T> = core::result::Result<T, Error>;
