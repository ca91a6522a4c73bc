#![no_main]

use ergo_prover::verify;
use libfuzzer_sys::fuzz_target;

// verify must never panic, whatever the proof and key buffers contain.
fuzz_target!(|data: &[u8]| {
    let (proof, rest) = data.split_at(data.len().min(56));
    let (pk, message) = rest.split_at(rest.len().min(33));
    let _ = verify(message, proof, pk);
});
