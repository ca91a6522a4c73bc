//! Canonical byte serialization seam.
//!
//! Identifier derivation and proof binding both hash the canonical byte form
//! of a transaction or output, so the encoding must be deterministic:
//! semantically equal values always produce identical bytes. The encoding
//! itself is a collaborator concern; chain-exact formats plug in through
//! [`CanonicalSerializer`], and [`WireSerializer`] provides a deterministic
//! length-prefixed default.

use crate::transaction::types::{Output, TokenAmount, UnsignedTransaction};

/// Deterministic serialization of the entities that get hashed.
pub trait CanonicalSerializer {
    /// Serializes an unsigned transaction. These exact bytes are both the
    /// signed message and the transaction-identifier preimage.
    fn serialize_transaction(&self, tx: &UnsignedTransaction) -> Vec<u8>;

    /// Serializes a completed output. The output's own identifier is *not*
    /// part of the encoding (it is the hash of these bytes), but the owning
    /// transaction id and position index are.
    fn serialize_output(&self, output: &Output) -> Vec<u8>;
}

/// Default length-prefixed deterministic encoding.
///
/// Every variable-length field is prefixed with its big-endian `u32` length,
/// every collection with its element count, and map entries are emitted in
/// sorted key order.
#[derive(Clone, Copy, Debug, Default)]
pub struct WireSerializer;

impl WireSerializer {
    fn put_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
        buf.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
        buf.extend_from_slice(bytes);
    }

    fn put_str(buf: &mut Vec<u8>, s: &str) {
        Self::put_bytes(buf, s.as_bytes());
    }

    fn put_pairs<'a>(
        buf: &mut Vec<u8>,
        pairs: impl ExactSizeIterator<Item = (&'a String, &'a String)>,
    ) {
        buf.extend_from_slice(&(pairs.len() as u32).to_be_bytes());
        for (key, value) in pairs {
            Self::put_str(buf, key);
            Self::put_str(buf, value);
        }
    }

    fn put_tokens(buf: &mut Vec<u8>, tokens: &[TokenAmount]) {
        buf.extend_from_slice(&(tokens.len() as u32).to_be_bytes());
        for token in tokens {
            Self::put_str(buf, &token.token_id);
            buf.extend_from_slice(&token.amount.to_be_bytes());
        }
    }
}

impl CanonicalSerializer for WireSerializer {
    fn serialize_transaction(&self, tx: &UnsignedTransaction) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(&(tx.inputs.len() as u32).to_be_bytes());
        for input in &tx.inputs {
            Self::put_str(&mut buf, &input.box_id);
            Self::put_pairs(&mut buf, input.extension.iter());
        }

        buf.extend_from_slice(&(tx.data_inputs.len() as u32).to_be_bytes());
        for data_input in &tx.data_inputs {
            Self::put_str(&mut buf, &data_input.box_id);
        }

        buf.extend_from_slice(&(tx.outputs.len() as u32).to_be_bytes());
        for output in &tx.outputs {
            buf.extend_from_slice(&output.value.to_be_bytes());
            Self::put_str(&mut buf, &output.ergo_tree);
            buf.extend_from_slice(&output.creation_height.to_be_bytes());
            Self::put_tokens(&mut buf, &output.assets);
            Self::put_pairs(&mut buf, output.additional_registers.iter());
        }

        buf
    }

    fn serialize_output(&self, output: &Output) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(&output.value.to_be_bytes());
        Self::put_str(&mut buf, &output.ergo_tree);
        buf.extend_from_slice(&output.creation_height.to_be_bytes());
        Self::put_tokens(&mut buf, &output.assets);
        Self::put_pairs(&mut buf, output.additional_registers.iter());
        Self::put_str(&mut buf, &output.transaction_id);
        buf.extend_from_slice(&output.index.to_be_bytes());

        buf
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::transaction::types::{DataInput, OutputCandidate, UnsignedInput};

    fn sample_tx() -> UnsignedTransaction {
        UnsignedTransaction {
            inputs: vec![UnsignedInput {
                box_id: "aa01".to_string(),
                extension: BTreeMap::from([("0".to_string(), "0402".to_string())]),
            }],
            data_inputs: vec![DataInput {
                box_id: "cc03".to_string(),
            }],
            outputs: vec![OutputCandidate {
                value: 1_000_000_000,
                ergo_tree: "0008cd02deadbeef".to_string(),
                creation_height: 1000,
                assets: vec![TokenAmount {
                    token_id: "dd04".to_string(),
                    amount: 7,
                }],
                additional_registers: BTreeMap::new(),
            }],
        }
    }

    #[test]
    fn transaction_encoding_is_deterministic() {
        let serializer = WireSerializer;
        let tx = sample_tx();
        assert_eq!(
            serializer.serialize_transaction(&tx),
            serializer.serialize_transaction(&tx.clone())
        );
    }

    #[test]
    fn semantic_change_changes_bytes() {
        let serializer = WireSerializer;
        let tx = sample_tx();

        let mut reordered = tx.clone();
        reordered.outputs[0].creation_height += 1;
        assert_ne!(
            serializer.serialize_transaction(&tx),
            serializer.serialize_transaction(&reordered)
        );
    }

    #[test]
    fn length_prefixes_prevent_field_bleed() {
        let serializer = WireSerializer;

        // "ab" + "c" and "a" + "bc" must not collide.
        let mut tx1 = sample_tx();
        tx1.inputs[0].box_id = "ab".to_string();
        tx1.data_inputs[0].box_id = "c".to_string();

        let mut tx2 = sample_tx();
        tx2.inputs[0].box_id = "a".to_string();
        tx2.data_inputs[0].box_id = "bc".to_string();

        assert_ne!(
            serializer.serialize_transaction(&tx1),
            serializer.serialize_transaction(&tx2)
        );
    }

    #[test]
    fn output_encoding_covers_txid_and_index_but_not_box_id() {
        let serializer = WireSerializer;
        let output = Output {
            box_id: String::new(),
            value: 5,
            ergo_tree: "0008cd02deadbeef".to_string(),
            creation_height: 10,
            assets: vec![],
            additional_registers: BTreeMap::new(),
            transaction_id: "f0".repeat(32),
            index: 1,
        };

        let base = serializer.serialize_output(&output);

        let mut with_box_id = output.clone();
        with_box_id.box_id = "ff".repeat(32);
        assert_eq!(base, serializer.serialize_output(&with_box_id));

        let mut other_index = output.clone();
        other_index.index = 2;
        assert_ne!(base, serializer.serialize_output(&other_index));

        let mut other_tx = output;
        other_tx.transaction_id = "e0".repeat(32);
        assert_ne!(base, serializer.serialize_output(&other_tx));
    }
}
