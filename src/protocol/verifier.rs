//! Proof verification for the Schnorr signature scheme.

use crate::protocol::challenge::{challenge_bytes, challenge_to_scalar};
use crate::protocol::proof::SchnorrProof;
use crate::{Group, Secp256k1};

/// Checks a 56-byte spending proof against a message and a compressed
/// public-key encoding.
///
/// Recomputes the prover's commitment as `w' = z * G + (n - c) * pk` (the
/// group only needs to expose addition and scalar negation, not point
/// subtraction), rebuilds the challenge template over the *supplied*
/// public-key bytes and `w'`, and compares the truncated hash with `c`.
///
/// Never panics and never errors: proofs of the wrong length, non-canonical
/// response scalars, and undecodable public keys all return `false`.
pub fn verify(message: &[u8], proof: &[u8], public_key: &[u8]) -> bool {
    let proof = match SchnorrProof::from_bytes(proof) {
        Ok(proof) => proof,
        Err(_) => return false,
    };
    let pk = match Secp256k1::element_from_bytes(public_key) {
        Ok(pk) => pk,
        Err(_) => return false,
    };
    let z = match Secp256k1::scalar_from_bytes(proof.response()) {
        Ok(z) => z,
        Err(_) => return false,
    };

    let neg_c = Secp256k1::scalar_negate(&challenge_to_scalar(proof.challenge()));
    let w = Secp256k1::element_add(
        &Secp256k1::scalar_mul(&Secp256k1::generator(), &z),
        &Secp256k1::scalar_mul(&pk, &neg_c),
    );

    let recomputed = challenge_bytes(public_key, &Secp256k1::element_to_bytes(&w), message);
    recomputed == *proof.challenge()
}
