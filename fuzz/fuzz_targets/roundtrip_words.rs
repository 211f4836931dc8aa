#![no_main]

use libfuzzer_sys::fuzz_target;
use bigbytes::{ByteOrder, Codec, CodecConfig, from_bytes_be, from_bytes_le, portable};

fuzz_target!(|data: Vec<u8>| {
    // Interpret the input as little-endian words
    let words: Vec<u64> = data
        .chunks(8)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            u64::from_le_bytes(word)
        })
        .collect();

    let configs = vec![
        // Tiny pool: constant rotation, most inputs bypass
        CodecConfig::default().with_pool_words(2),
        // Small pool
        CodecConfig::default().with_pool_words(32),
        // Default config
        CodecConfig::default(),
    ];

    for config in configs {
        let mut codec = Codec::new(config);

        let le = codec.to_bytes_le(&words).unwrap();
        let be = codec.to_bytes_be(&words).unwrap();

        // Verify: pooled output matches the portable codec
        assert_eq!(&le[..], &portable::to_bytes_le(&words)[..]);
        assert_eq!(&be[..], &portable::to_bytes_be(&words)[..]);

        // Verify: big-endian is reversed little-endian
        let mut reversed = le.to_vec();
        reversed.reverse();
        assert_eq!(&be[..], &reversed[..]);

        // Verify: trimmed output never ends in a zero byte
        assert_ne!(le.last(), Some(&0));

        // Verify: decoding restores the words up to leading zero words
        let significant = words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        assert_eq!(&from_bytes_le(&le)[..], &words[..significant]);
        assert_eq!(&from_bytes_be(&be)[..], &words[..significant]);

        // Verify: re-encoding is stable
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let first = codec.to_bytes(&words, order).unwrap();
            let decoded = codec.from_bytes(&first, order).into_vec();
            assert_eq!(codec.to_bytes(&decoded, order).unwrap(), first);
        }

        // Verify: earlier views survive later rotations
        assert_eq!(&le[..], &portable::to_bytes_le(&words)[..]);
    }
});
