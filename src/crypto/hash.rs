//! Hash primitive used for challenges and content-addressed identifiers.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

/// Blake2b with a 256-bit output, the protocol's only hash function.
pub type Blake2b256 = Blake2b<U32>;

/// Hashes `data` with Blake2b-256.
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}
