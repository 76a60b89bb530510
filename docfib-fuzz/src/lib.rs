//! Fuzzing entry points for the docfib-core decoders
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode_fib

use bytes::Bytes;
use docfib_core::dop::{Dop, DopVersion};
use docfib_core::{decode_dop, decode_fib_from_bytes, SliceCursor};

/// Decode arbitrary bytes as a primary stream
pub fn fuzz_decode_fib(data: &[u8]) {
    // Try to decode - should never panic
    if let Ok(fib) = decode_fib_from_bytes(Bytes::copy_from_slice(data)) {
        let _ = fib.check_table_bounds(data.len());
        let _ = fib.deferred_pairs();
    }
}

/// Decode arbitrary bytes as both streams of one document
///
/// The first byte picks where the primary stream ends.
pub fn fuzz_decode_streams(data: &[u8]) {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = (split as usize * 8).min(rest.len());
    let (primary, table) = rest.split_at(split);

    if let Ok(fib) = decode_fib_from_bytes(Bytes::copy_from_slice(primary)) {
        let _ = decode_dop(&fib, &Bytes::copy_from_slice(table));
    }
}

/// Decode arbitrary bytes as every DOP layout
pub fn fuzz_decode_dop(data: &[u8]) {
    for version in [
        DopVersion::Word6,
        DopVersion::Word95,
        DopVersion::Word97,
        DopVersion::Word2000,
        DopVersion::Word2002,
        DopVersion::Word2003,
        DopVersion::Word2007,
    ] {
        let _ = Dop::decode(&mut SliceCursor::from_slice(data), version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_fib_empty() {
        fuzz_decode_fib(&[]);
    }

    #[test]
    fn test_fuzz_decode_fib_random() {
        fuzz_decode_fib(&[0xEC, 0xA5, 0xC1, 0x00]);
        fuzz_decode_fib(&[0xFF; 1024]);
    }

    #[test]
    fn test_fuzz_decode_streams() {
        fuzz_decode_streams(&[]);
        fuzz_decode_streams(&[0x80; 2048]);
    }

    #[test]
    fn test_fuzz_decode_dop() {
        fuzz_decode_dop(&[]);
        fuzz_decode_dop(&[0xFF; 700]);
        fuzz_decode_dop(&[0x00; 700]);
    }
}
