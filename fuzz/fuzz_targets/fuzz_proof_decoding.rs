#![no_main]

use ergo_prover::SchnorrProof;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(proof) = SchnorrProof::from_bytes(data) {
        assert_eq!(proof.to_bytes().as_slice(), data);
    }
});
