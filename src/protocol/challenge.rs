//! Fiat-Shamir challenge derivation.
//!
//! The challenge input is a fixed byte template that embeds the public key
//! and the prover's ephemeral commitment between two constant sequences, so
//! that downstream consumers see the challenge computed over the
//! predicate-commitment structure expected on-chain rather than an arbitrary
//! blob. The constants are part of the protocol's compatibility surface.

use crate::crypto::hash::blake2b256;
use crate::crypto::secp256k1::Scalar;
use crate::protocol::proof::CHALLENGE_BYTES;
use crate::{Group, Secp256k1};

/// Fixed bytes preceding the public key encoding in the challenge input.
const COMMITMENT_PREFIX: [u8; 7] = [0x01, 0x00, 0x27, 0x10, 0x01, 0x08, 0xcd];

/// Fixed bytes between the public key and commitment encodings.
const COMMITMENT_SUFFIX: [u8; 4] = [0x73, 0x00, 0x00, 0x21];

/// Derives the challenge: the first 24 bytes of
/// `blake2b256(PREFIX || pk || SUFFIX || w || message)`.
///
/// Both encodings are used exactly as supplied; verification passes the raw
/// public-key bytes it was handed, never a re-derived encoding.
pub(crate) fn challenge_bytes(
    public_key: &[u8],
    commitment: &[u8],
    message: &[u8],
) -> [u8; CHALLENGE_BYTES] {
    let mut input = Vec::with_capacity(
        COMMITMENT_PREFIX.len()
            + public_key.len()
            + COMMITMENT_SUFFIX.len()
            + commitment.len()
            + message.len(),
    );
    input.extend_from_slice(&COMMITMENT_PREFIX);
    input.extend_from_slice(public_key);
    input.extend_from_slice(&COMMITMENT_SUFFIX);
    input.extend_from_slice(commitment);
    input.extend_from_slice(message);

    let digest = blake2b256(&input);
    let mut c = [0u8; CHALLENGE_BYTES];
    c.copy_from_slice(&digest[..CHALLENGE_BYTES]);
    c
}

/// Whether the challenge is the all-zero degenerate value.
pub(crate) fn challenge_is_zero(c: &[u8; CHALLENGE_BYTES]) -> bool {
    c.iter().all(|&b| b == 0)
}

/// Lifts the 24-byte big-endian challenge into the scalar field.
///
/// A 192-bit value is always below the 256-bit group order, so the reduction
/// never wraps and `c` keeps its raw integer meaning.
pub(crate) fn challenge_to_scalar(c: &[u8; CHALLENGE_BYTES]) -> Scalar {
    let mut wide = [0u8; 32];
    wide[32 - CHALLENGE_BYTES..].copy_from_slice(c);
    Secp256k1::scalar_reduce_bytes(&wide)
}
