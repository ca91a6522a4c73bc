/// Transaction proving pipeline.
pub mod prover;
/// Canonical serialization seam.
pub mod serializer;
/// EIP-12 style transaction model.
pub mod types;

pub use prover::TransactionProver;
pub use serializer::{CanonicalSerializer, WireSerializer};
pub use types::{
    DataInput, Extension, Identifier, Output, OutputCandidate, SignedInput, SignedTransaction,
    SpendingProof, TokenAmount, UnsignedInput, UnsignedTransaction,
};
