/// Group abstraction consumed by the signature scheme.
pub mod group;
/// Blake2b-256 hashing.
pub mod hash;
/// Cryptographically secure random number generator.
pub mod rng;
/// secp256k1 group implementation.
pub mod secp256k1;

pub use group::Group;
pub use hash::{blake2b256, Blake2b256};
pub use rng::SecureRng;
pub use secp256k1::Secp256k1;
