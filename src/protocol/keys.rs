//! Key material for the signature scheme.

use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::rng::random_bytes;
use crate::crypto::secp256k1::{Element, Scalar, POINT_BYTES};
use crate::{Error, Group, Result, Secp256k1};

/// Secret signing key: a nonzero scalar `sk` in `[1, n)`.
///
/// Zeroized when dropped. The public counterpart is always derived as
/// `pk = sk * G` and never stored alongside the secret.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    sk: Scalar,
}

impl SecretKey {
    /// Parses a secret key from 32 canonical big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a canonical scalar or encode zero.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        let sk = Secp256k1::scalar_from_bytes(bytes)?;
        if Secp256k1::scalar_is_zero(&sk) {
            return Err(Error::InvalidScalar(
                "Secret key cannot be zero".to_string(),
            ));
        }

        Ok(Self { sk })
    }

    /// Generates a fresh random secret key.
    pub fn random<R: CryptoRngCore>(rng: &mut R) -> Self {
        loop {
            let bytes = random_bytes::<32, _>(rng);
            let sk = Secp256k1::scalar_reduce_bytes(&bytes);
            if !Secp256k1::scalar_is_zero(&sk) {
                return Self { sk };
            }
        }
    }

    /// Derives the public key `pk = sk * G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::new(Secp256k1::scalar_mul(&Secp256k1::generator(), &self.sk))
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.sk
    }
}

/// Public verification key: a group element in SEC1 compressed encoding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    pk: Element,
}

impl PublicKey {
    // Only non-identity elements reach this: secret keys are nonzero and the
    // 33-byte decoder cannot produce the identity.
    pub(crate) fn new(pk: Element) -> Self {
        Self { pk }
    }

    /// Decodes a public key from its 33-byte compressed encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            pk: Secp256k1::element_from_bytes(bytes)?,
        })
    }

    /// Decodes a public key from its hex-encoded compressed form.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| Error::InvalidGroupElement(format!("Invalid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Compressed 33-byte encoding.
    pub fn to_bytes(&self) -> [u8; POINT_BYTES] {
        let encoded = Secp256k1::element_to_bytes(&self.pk);
        let mut arr = [0u8; POINT_BYTES];
        arr.copy_from_slice(&encoded);
        arr
    }

    /// Hex form of the compressed encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Returns the underlying group element.
    pub fn element(&self) -> &Element {
        &self.pk
    }
}

/// A signing identity: the public key plus, when available, the secret.
///
/// Watch-only pairs carry no secret and can only be used for verification;
/// asking the transaction prover to sign with one fails before any
/// cryptographic work is attempted.
#[derive(Clone, Debug)]
pub struct KeyPair {
    public: PublicKey,
    secret: Option<SecretKey>,
}

impl KeyPair {
    /// Builds a full key pair from a secret key.
    pub fn from_secret(secret: SecretKey) -> Self {
        Self {
            public: secret.public_key(),
            secret: Some(secret),
        }
    }

    /// Builds a watch-only key pair with no signing capability.
    pub fn watch_only(public: PublicKey) -> Self {
        Self {
            public,
            secret: None,
        }
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Returns the secret key, or an error for watch-only pairs.
    pub fn secret_key(&self) -> Result<&SecretKey> {
        self.secret.as_ref().ok_or(Error::MissingSecretKey)
    }

    /// Whether the pair can produce proofs.
    pub fn can_sign(&self) -> bool {
        self.secret.is_some()
    }
}
