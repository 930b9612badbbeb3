#![no_main]

use crcfold::{Crc32, Digest, compute};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The first byte picks a split point; the rest is the payload.
    let Some((&pick, payload)) = data.split_first() else {
        return;
    };
    let split = usize::from(pick) % (payload.len() + 1);

    // Test 1: any two-way split matches the one-shot result
    let expected = compute(payload);
    let mut engine = Crc32::default();
    engine.update(&payload[..split]);
    engine.update(&payload[split..]);
    assert_eq!(engine.checksum(), expected);
    assert_eq!(engine.finalize(), expected.to_be_bytes());

    // Test 2: finalize does not disturb state; reset restarts cleanly
    let first = engine.finalize();
    assert_eq!(engine.finalize(), first);
    engine.reset();
    engine.update(payload);
    assert_eq!(engine.finalize(), first);

    // Test 3: update_range over the tail matches slicing
    let mut ranged = Crc32::default();
    ranged.update_range(payload, split, payload.len() - split);
    let mut sliced = Crc32::default();
    sliced.update(&payload[split..]);
    assert_eq!(ranged.state(), sliced.state());

    // Test 4: hex rendering parses back
    let digest = Digest::from_u32(expected);
    assert_eq!(digest.to_string().parse::<Digest>().ok(), Some(digest));
});
