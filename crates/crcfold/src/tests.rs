//! Cross-module properties of the CRC engine.

use proptest::prelude::*;
use proptest::sample::Index;
use test_case::test_case;

use crate::{
    Crc32, DEFAULT_POLYNOMIAL, DEFAULT_SEED, Digest, build_table, compute, compute_with,
    compute_with_seed,
};

// ============================================================================
// Known Vectors
// ============================================================================

#[test_case(b"" => 0x0000_0000; "empty")]
#[test_case(b"a" => 0xE8B7_BE43; "single byte")]
#[test_case(b"123456789" => 0xCBF4_3926; "check value")]
#[test_case(b"hello world" => 0x0D4A_1185; "hello world")]
#[test_case(b"The quick brown fox jumps over the lazy dog" => 0x414F_A339; "quick brown fox")]
fn ieee_vectors(input: &[u8]) -> u32 {
    compute(input)
}

#[test]
fn oneshot_forms_agree_on_defaults() {
    let data = b"one shot, three ways";
    let expected = compute(data);

    assert_eq!(compute_with_seed(DEFAULT_SEED, data), expected);
    assert_eq!(compute_with(DEFAULT_POLYNOMIAL, DEFAULT_SEED, data), expected);

    let mut engine = Crc32::new(DEFAULT_POLYNOMIAL, DEFAULT_SEED);
    engine.update(data);
    assert_eq!(engine.digest(), Digest::from_u32(expected));
}

#[test]
fn empty_input_with_custom_seed_is_complemented_seed() {
    assert_eq!(compute_with_seed(0x1234_5678, b""), !0x1234_5678);
    assert_eq!(compute_with(0x82F6_3B78, 0, b""), u32::MAX);
}

#[test]
fn determinism() {
    let data: Vec<u8> = (0..=255).collect();
    assert_eq!(compute(&data), compute(&data));
}

#[test]
fn custom_polynomial_engines_share_one_table() {
    let table = crate::CrcTable::shared(0xEB31_D82E);
    let a = Crc32::with_table(table.clone(), DEFAULT_SEED);
    let b = Crc32::with_table(table, 0);

    assert!(std::ptr::eq(a.table(), b.table()));
}

#[test]
fn engines_are_thread_safe_values() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Crc32>();
    assert_send_sync::<Digest>();
    assert_send_sync::<crate::CrcTable>();

    let prototype = Crc32::new(0x82F6_3B78, DEFAULT_SEED);
    let results: Vec<u32> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mut engine = prototype.clone();
                scope.spawn(move || {
                    engine.update(b"123456789");
                    engine.checksum()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|&crc| crc == 0xE306_9283));
}

// ============================================================================
// Property Tests
// ============================================================================

fn split_points(len: usize, picks: &[Index]) -> Vec<usize> {
    let mut points: Vec<usize> = picks.iter().map(|p| p.index(len + 1)).collect();
    points.sort_unstable();
    points
}

proptest! {
    #[test]
    fn chunking_invariant(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        picks in proptest::collection::vec(any::<Index>(), 0..8),
        polynomial in any::<u32>(),
        seed in any::<u32>(),
    ) {
        let mut whole = Crc32::new(polynomial, seed);
        whole.update(&data);

        let mut chunked = Crc32::new(polynomial, seed);
        let mut start = 0;
        for end in split_points(data.len(), &picks) {
            chunked.update(&data[start..end]);
            start = end;
        }
        chunked.update(&data[start..]);

        prop_assert_eq!(chunked.finalize(), whole.finalize());
        prop_assert_eq!(whole.checksum(), compute_with(polynomial, seed, &data));
    }

    #[test]
    fn reset_idempotence(data in proptest::collection::vec(any::<u8>(), 0..512), seed in any::<u32>()) {
        let mut engine = Crc32::with_seed(seed);
        engine.update(&data);
        let first = engine.finalize();

        engine.reset();
        engine.update(&data);
        prop_assert_eq!(engine.finalize(), first);
    }

    #[test]
    fn update_range_matches_slice(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let (start, end) = {
            let x = a.index(data.len() + 1);
            let y = b.index(data.len() + 1);
            (x.min(y), x.max(y))
        };

        let mut ranged = Crc32::default();
        ranged.update_range(&data, start, end - start);

        let mut sliced = Crc32::default();
        sliced.update(&data[start..end]);

        prop_assert_eq!(ranged.state(), sliced.state());
    }

    #[test]
    fn table_entries_follow_the_reduction(polynomial in any::<u32>()) {
        let table = build_table(polynomial);
        for (i, &entry) in table.iter().enumerate() {
            let mut v = i as u32;
            for _ in 0..8 {
                v = if v & 1 == 0 { v >> 1 } else { (v >> 1) ^ polynomial };
            }
            prop_assert_eq!(entry, v);
        }
    }

    #[test]
    fn finalize_is_complemented_state(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        let mut engine = Crc32::default();
        engine.update(&data);
        prop_assert_eq!(engine.finalize(), (!engine.state()).to_be_bytes());
        prop_assert_eq!(engine.digest().to_string(), format!("{:08x}", !engine.state()));
    }
}
