//! Proof generation for the Schnorr signature scheme.

use rand_core::CryptoRngCore;
use tracing::{debug, trace};

use crate::crypto::rng::random_bytes;
use crate::crypto::secp256k1::Scalar;
use crate::protocol::challenge::{challenge_bytes, challenge_is_zero, challenge_to_scalar};
use crate::protocol::keys::SecretKey;
use crate::protocol::proof::{SchnorrProof, RESPONSE_BYTES};
use crate::protocol::verifier::verify;
use crate::{Error, Group, Result, Secp256k1, SecureRng};

/// Upper bound on both retry loops: the nonzero-randomness redraw and the
/// full candidate-regeneration loop. Hitting either bound signals a defect
/// in the implementation or environment, not bad luck.
pub const MAX_SIGNING_ATTEMPTS: usize = 100;

/// Produces a proof of knowledge of `secret_key` bound to `message`,
/// drawing randomness from the operating system.
///
/// See [`sign_with_rng`] for the full contract.
pub fn sign(message: &[u8], secret_key: &SecretKey) -> Result<SchnorrProof> {
    sign_with_rng(message, secret_key, &mut SecureRng::new())
}

/// Produces a proof of knowledge of `secret_key` bound to `message`.
///
/// Each attempt draws a fresh nonzero ephemeral scalar `y`, commits to
/// `w = y * G`, derives the Fiat-Shamir challenge `c` over the commitment
/// template, and responds with `z = sk * c + y (mod n)`. Every candidate is
/// checked against [`verify`] before being returned; a mismatch discards the
/// candidate and retries with fresh randomness.
///
/// # Errors
///
/// - [`Error::RandomnessExhausted`] if the ephemeral scalar kept reducing to
///   zero for the whole retry bound.
/// - [`Error::ZeroChallenge`] if the challenge hashed to zero. This aborts
///   immediately without retrying.
/// - [`Error::ProvingExhausted`] if no candidate self-verified within the
///   retry bound.
pub fn sign_with_rng<R: CryptoRngCore>(
    message: &[u8],
    secret_key: &SecretKey,
    rng: &mut R,
) -> Result<SchnorrProof> {
    let sk = secret_key.scalar();
    let pk = Secp256k1::scalar_mul(&Secp256k1::generator(), sk);
    let pk_bytes = Secp256k1::element_to_bytes(&pk);

    for attempt in 0..MAX_SIGNING_ATTEMPTS {
        let y = random_nonzero_scalar(rng)?;
        let w = Secp256k1::scalar_mul(&Secp256k1::generator(), &y);
        let w_bytes = Secp256k1::element_to_bytes(&w);

        let c = challenge_bytes(&pk_bytes, &w_bytes, message);
        if challenge_is_zero(&c) {
            return Err(Error::ZeroChallenge);
        }

        let z = Secp256k1::scalar_add(
            &Secp256k1::scalar_mul_scalar(sk, &challenge_to_scalar(&c)),
            &y,
        );
        let mut z_bytes = [0u8; RESPONSE_BYTES];
        z_bytes.copy_from_slice(&Secp256k1::scalar_to_bytes(&z));

        let candidate = SchnorrProof::new(c, z_bytes);
        if verify(message, &candidate.to_bytes(), &pk_bytes) {
            debug!(attempts = attempt + 1, "produced spending proof");
            return Ok(candidate);
        }

        trace!(attempt, "candidate proof failed self-verification, retrying");
    }

    Err(Error::ProvingExhausted)
}

/// Draws a uniformly random nonzero scalar: 32 raw bytes reduced modulo the
/// group order, redrawn on the (cryptographically implausible) zero outcome.
fn random_nonzero_scalar<R: CryptoRngCore>(rng: &mut R) -> Result<Scalar> {
    for _ in 0..MAX_SIGNING_ATTEMPTS {
        let bytes = random_bytes::<32, _>(rng);
        let y = Secp256k1::scalar_reduce_bytes(&bytes);
        if !Secp256k1::scalar_is_zero(&y) {
            return Ok(y);
        }
        trace!("ephemeral randomness reduced to zero, redrawing");
    }

    Err(Error::RandomnessExhausted)
}
