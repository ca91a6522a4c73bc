//! The 56-byte spending proof wire value.

use crate::{Error, Result};

/// Length of the big-endian challenge component `c`.
pub const CHALLENGE_BYTES: usize = 24;

/// Length of the big-endian response scalar `z`.
pub const RESPONSE_BYTES: usize = 32;

/// Total serialized proof length: `c || z`.
pub const PROOF_BYTES: usize = CHALLENGE_BYTES + RESPONSE_BYTES;

/// Non-interactive Schnorr proof of knowledge of a secret key.
///
/// Wire form is the concatenation of the 24-byte big-endian challenge and
/// the 32-byte big-endian response scalar, 56 bytes total, hex-encoded at
/// API and storage boundaries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchnorrProof {
    c: [u8; CHALLENGE_BYTES],
    z: [u8; RESPONSE_BYTES],
}

impl SchnorrProof {
    pub(crate) fn new(c: [u8; CHALLENGE_BYTES], z: [u8; RESPONSE_BYTES]) -> Self {
        Self { c, z }
    }

    /// Parses a proof from its exact 56-byte wire form.
    ///
    /// # Errors
    ///
    /// Returns an error for any other length. This is a strict parse used at
    /// trusted boundaries; `verify` itself never errors and maps malformed
    /// proofs to `false`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PROOF_BYTES {
            return Err(Error::InvalidProof(format!(
                "Expected {} bytes, got {}",
                PROOF_BYTES,
                bytes.len()
            )));
        }

        let mut c = [0u8; CHALLENGE_BYTES];
        let mut z = [0u8; RESPONSE_BYTES];
        c.copy_from_slice(&bytes[..CHALLENGE_BYTES]);
        z.copy_from_slice(&bytes[CHALLENGE_BYTES..]);

        Ok(Self { c, z })
    }

    /// Parses a proof from its hex-encoded wire form.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes =
            hex::decode(hex_str).map_err(|e| Error::InvalidProof(format!("Invalid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Serializes the proof to its 56-byte wire form.
    pub fn to_bytes(&self) -> [u8; PROOF_BYTES] {
        let mut out = [0u8; PROOF_BYTES];
        out[..CHALLENGE_BYTES].copy_from_slice(&self.c);
        out[CHALLENGE_BYTES..].copy_from_slice(&self.z);
        out
    }

    /// Hex form used at API and storage boundaries.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// The big-endian challenge component.
    pub fn challenge(&self) -> &[u8; CHALLENGE_BYTES] {
        &self.c
    }

    /// The big-endian response scalar.
    pub fn response(&self) -> &[u8; RESPONSE_BYTES] {
        &self.z
    }
}
