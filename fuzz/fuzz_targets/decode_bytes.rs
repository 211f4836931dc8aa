#![no_main]

use libfuzzer_sys::fuzz_target;
use bigbytes::{from_bytes_be, from_bytes_le, portable, with_words_be, with_words_le};

fuzz_target!(|data: Vec<u8>| {
    // Exercise every alignment of the same input
    for start in 0..data.len().min(8) {
        let bytes = &data[start..];
        let word_count = bytes.len().div_ceil(8);

        let le = from_bytes_le(bytes);
        let be = from_bytes_be(bytes);

        // Verify: output never truncates input
        assert_eq!(le.len(), word_count);
        assert_eq!(be.len(), word_count);

        // Verify: matches the portable codec
        assert_eq!(&le[..], &portable::from_bytes_le(bytes)[..]);
        assert_eq!(&be[..], &portable::from_bytes_be(bytes)[..]);

        // Verify: closure form sees the same words
        with_words_le(bytes, |words| assert_eq!(words, &le[..]));
        with_words_be(bytes, |words| assert_eq!(words, &be[..]));

        // Verify: every input bit survives
        let ones: u32 = bytes.iter().map(|b| b.count_ones()).sum();
        let le_ones: u32 = le.iter().map(|w| w.count_ones()).sum();
        let be_ones: u32 = be.iter().map(|w| w.count_ones()).sum();
        assert_eq!(le_ones, ones);
        assert_eq!(be_ones, ones);
    }
});
