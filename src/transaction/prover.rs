//! Transaction proving pipeline.

use rand_core::CryptoRngCore;
use tracing::debug;

use crate::crypto::hash::blake2b256;
use crate::protocol::keys::KeyPair;
use crate::protocol::signer::sign_with_rng;
use crate::transaction::serializer::{CanonicalSerializer, WireSerializer};
use crate::transaction::types::{
    Output, SignedInput, SignedTransaction, SpendingProof, UnsignedTransaction,
};
use crate::{Result, SecureRng};

/// Turns unsigned transactions into fully proven ones.
///
/// One key signs the whole transaction: a single proof over the serialized
/// transaction bytes is attached verbatim to every input. The transaction
/// identifier is the hash of those same bytes, and each output identifier is
/// the hash of the completed output record, which already embeds the
/// transaction id and the output's final position.
pub struct TransactionProver<S: CanonicalSerializer = WireSerializer> {
    serializer: S,
}

impl TransactionProver<WireSerializer> {
    /// Creates a prover using the default deterministic encoding.
    pub fn new() -> Self {
        Self {
            serializer: WireSerializer,
        }
    }
}

impl Default for TransactionProver<WireSerializer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CanonicalSerializer> TransactionProver<S> {
    /// Creates a prover over a custom canonical encoding.
    pub fn with_serializer(serializer: S) -> Self {
        Self { serializer }
    }

    /// Proves `unsigned` with `key`, drawing randomness from the operating
    /// system. See [`Self::prove_transaction_with_rng`].
    pub fn prove_transaction(
        &self,
        unsigned: &UnsignedTransaction,
        key: &KeyPair,
    ) -> Result<SignedTransaction> {
        self.prove_transaction_with_rng(unsigned, key, &mut SecureRng::new())
    }

    /// Proves `unsigned` with `key`.
    ///
    /// Repeated calls with the same inputs produce identical transaction and
    /// output identifiers but different proof bytes, since the signature is
    /// randomized.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::MissingSecretKey`] for watch-only keys
    /// before any cryptographic work, and propagates every fatal signing
    /// error. No partially signed transaction is ever returned.
    pub fn prove_transaction_with_rng<R: CryptoRngCore>(
        &self,
        unsigned: &UnsignedTransaction,
        key: &KeyPair,
        rng: &mut R,
    ) -> Result<SignedTransaction> {
        let secret = key.secret_key()?;

        let tx_bytes = self.serializer.serialize_transaction(unsigned);
        let tx_id = hex::encode(blake2b256(&tx_bytes));

        let proof_hex = sign_with_rng(&tx_bytes, secret, rng)?.to_hex();

        let inputs = unsigned
            .inputs
            .iter()
            .map(|input| SignedInput {
                box_id: input.box_id.clone(),
                spending_proof: SpendingProof {
                    proof_bytes: proof_hex.clone(),
                    extension: input.extension.clone(),
                },
            })
            .collect();

        let outputs = unsigned
            .outputs
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                let mut output = Output {
                    box_id: String::new(),
                    value: candidate.value,
                    ergo_tree: candidate.ergo_tree.clone(),
                    creation_height: candidate.creation_height,
                    assets: candidate.assets.clone(),
                    additional_registers: candidate.additional_registers.clone(),
                    transaction_id: tx_id.clone(),
                    index: index as u32,
                };
                output.box_id = hex::encode(blake2b256(&self.serializer.serialize_output(&output)));
                output
            })
            .collect();

        debug!(
            %tx_id,
            inputs = unsigned.inputs.len(),
            outputs = unsigned.outputs.len(),
            "proved transaction"
        );

        Ok(SignedTransaction {
            id: tx_id,
            inputs,
            data_inputs: unsigned.data_inputs.clone(),
            outputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::protocol::keys::SecretKey;
    use crate::protocol::verifier::verify;
    use crate::transaction::types::{DataInput, OutputCandidate, TokenAmount, UnsignedInput};
    use crate::Error;

    fn sample_tx() -> UnsignedTransaction {
        UnsignedTransaction {
            inputs: vec![
                UnsignedInput {
                    box_id: "aa01".to_string(),
                    extension: BTreeMap::from([("0".to_string(), "0402".to_string())]),
                },
                UnsignedInput {
                    box_id: "bb02".to_string(),
                    extension: BTreeMap::new(),
                },
            ],
            data_inputs: vec![DataInput {
                box_id: "cc03".to_string(),
            }],
            outputs: vec![
                OutputCandidate {
                    value: 1_000_000_000,
                    ergo_tree: "0008cd02aaaa".to_string(),
                    creation_height: 1000,
                    assets: vec![TokenAmount {
                        token_id: "dd04".to_string(),
                        amount: 7,
                    }],
                    additional_registers: BTreeMap::new(),
                },
                OutputCandidate {
                    value: 500_000,
                    ergo_tree: "0008cd02bbbb".to_string(),
                    creation_height: 1000,
                    assets: vec![],
                    additional_registers: BTreeMap::new(),
                },
            ],
        }
    }

    fn sample_key() -> KeyPair {
        let mut rng = SecureRng::new();
        KeyPair::from_secret(SecretKey::random(&mut rng))
    }

    #[test]
    fn every_input_carries_the_same_verifying_proof() {
        let prover = TransactionProver::new();
        let key = sample_key();
        let unsigned = sample_tx();

        let signed = prover.prove_transaction(&unsigned, &key).unwrap();
        assert_eq!(signed.inputs.len(), 2);
        assert_eq!(
            signed.inputs[0].spending_proof.proof_bytes,
            signed.inputs[1].spending_proof.proof_bytes
        );

        let proof = hex::decode(&signed.inputs[0].spending_proof.proof_bytes).unwrap();
        let tx_bytes = WireSerializer.serialize_transaction(&unsigned);
        assert!(verify(&tx_bytes, &proof, &key.public_key().to_bytes()));
    }

    #[test]
    fn identifiers_are_deterministic_but_proofs_are_not() {
        let prover = TransactionProver::new();
        let key = sample_key();
        let unsigned = sample_tx();

        let first = prover.prove_transaction(&unsigned, &key).unwrap();
        let second = prover.prove_transaction(&unsigned, &key).unwrap();

        assert_eq!(first.id, second.id);
        for (a, b) in first.outputs.iter().zip(&second.outputs) {
            assert_eq!(a.box_id, b.box_id);
        }
        assert_ne!(
            first.inputs[0].spending_proof.proof_bytes,
            second.inputs[0].spending_proof.proof_bytes
        );
    }

    #[test]
    fn outputs_carry_position_and_owning_transaction() {
        let prover = TransactionProver::new();
        let signed = prover.prove_transaction(&sample_tx(), &sample_key()).unwrap();

        for (i, output) in signed.outputs.iter().enumerate() {
            assert_eq!(output.index, i as u32);
            assert_eq!(output.transaction_id, signed.id);
            assert_eq!(output.box_id.len(), 64);
        }
        assert_ne!(signed.outputs[0].box_id, signed.outputs[1].box_id);
    }

    #[test]
    fn data_inputs_and_extensions_pass_through() {
        let prover = TransactionProver::new();
        let unsigned = sample_tx();
        let signed = prover.prove_transaction(&unsigned, &sample_key()).unwrap();

        assert_eq!(signed.data_inputs, unsigned.data_inputs);
        assert_eq!(
            signed.inputs[0].spending_proof.extension,
            unsigned.inputs[0].extension
        );
        assert!(signed.inputs[1].spending_proof.extension.is_empty());
    }

    #[test]
    fn watch_only_key_fails_before_signing() {
        let prover = TransactionProver::new();
        let watch_only = KeyPair::watch_only(sample_key().public_key().clone());

        let result = prover.prove_transaction(&sample_tx(), &watch_only);
        assert!(matches!(result, Err(Error::MissingSecretKey)));
    }
}
