//! EIP-12 style transaction model.
//!
//! Field names follow the JSON wire convention (camelCase, string-encoded
//! 64-bit amounts) so the types round-trip through the dApp boundary
//! unchanged. Identifiers are hex-encoded blake2b-256 digests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Hex-encoded content-addressed identifier of a transaction or output.
pub type Identifier = String;

/// Context-extension values keyed by variable index, both hex-encoded.
pub type Extension = BTreeMap<String, String>;

/// A token quantity carried by an output.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    /// Identifier of the token.
    pub token_id: Identifier,
    /// Quantity, string-encoded on the wire.
    #[serde(with = "amount_string")]
    pub amount: u64,
}

/// Reference to an output being spent.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedInput {
    /// Identifier of the output this input consumes.
    pub box_id: Identifier,
    /// Optional context-extension data, passed through to the signed form.
    #[serde(default)]
    pub extension: Extension,
}

/// Reference to an output read without being spent.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataInput {
    /// Identifier of the referenced output.
    pub box_id: Identifier,
}

/// An output to be created, before its identifier exists.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputCandidate {
    /// Value in nanoERG, string-encoded on the wire.
    #[serde(with = "amount_string")]
    pub value: u64,
    /// Hex-encoded protection predicate bytes.
    pub ergo_tree: String,
    /// Height the output is created at.
    pub creation_height: u32,
    /// Tokens carried by the output.
    #[serde(default)]
    pub assets: Vec<TokenAmount>,
    /// Optional registers R4..R9, hex-encoded values.
    #[serde(default)]
    pub additional_registers: BTreeMap<String, String>,
}

/// Transaction before proving: ordered inputs, data inputs, and output
/// candidates. Read-only to the prover.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransaction {
    pub inputs: Vec<UnsignedInput>,
    #[serde(default)]
    pub data_inputs: Vec<DataInput>,
    pub outputs: Vec<OutputCandidate>,
}

/// The unlocking proof attached to a spent input.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingProof {
    /// Hex-encoded 56-byte Schnorr proof.
    pub proof_bytes: String,
    /// Context extension carried over from the unsigned input.
    #[serde(default)]
    pub extension: Extension,
}

/// An input carrying its unlocking proof.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedInput {
    pub box_id: Identifier,
    pub spending_proof: SpendingProof,
}

/// A fully created output: the candidate fields plus its own identifier,
/// the owning transaction's identifier, and its position.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Content-addressed identifier of this output.
    pub box_id: Identifier,
    #[serde(with = "amount_string")]
    pub value: u64,
    pub ergo_tree: String,
    pub creation_height: u32,
    #[serde(default)]
    pub assets: Vec<TokenAmount>,
    #[serde(default)]
    pub additional_registers: BTreeMap<String, String>,
    /// Identifier of the transaction that creates this output.
    pub transaction_id: Identifier,
    /// 0-based position among the transaction's outputs.
    pub index: u32,
}

/// Fully proven transaction, ready for submission.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    /// Content-addressed transaction identifier.
    pub id: Identifier,
    pub inputs: Vec<SignedInput>,
    #[serde(default)]
    pub data_inputs: Vec<DataInput>,
    pub outputs: Vec<Output>,
}

/// 64-bit amounts travel as JSON strings per EIP-12; plain numbers are also
/// accepted on input.
mod amount_string {
    use core::fmt;

    use serde::de::{Error, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = u64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a u64 amount as a string or number")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<u64, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: Error>(self, v: u64) -> Result<u64, E> {
                Ok(v)
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}
