//! Property-based tests using proptest

mod common;

use bytes::Bytes;
use common::{valid_dop, FibImage};
use docfib_core::bits::BitCursor;
use docfib_core::dop::{CompatLayoutFlags, DopFlags};
use docfib_core::{
    decode_dop, decode_fib_from_bytes, Counter, Dop, DopVersion, FibVersion, SliceCursor,
};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};

fn any_version() -> impl Strategy<Value = FibVersion> {
    prop::sample::select(FibVersion::ALL.to_vec())
}

fn any_dop_version() -> impl Strategy<Value = DopVersion> {
    prop::sample::select(vec![
        DopVersion::Word6,
        DopVersion::Word95,
        DopVersion::Word97,
        DopVersion::Word2000,
        DopVersion::Word2002,
        DopVersion::Word2003,
        DopVersion::Word2007,
    ])
}

proptest! {
    #[test]
    fn prop_decode_fib_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..2048)
    ) {
        // Should never panic, even on random data
        let result = decode_fib_from_bytes(data);
        prop_assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn prop_decode_dop_never_panics(
        version in any_dop_version(),
        data in prop::collection::vec(any::<u8>(), 0..700)
    ) {
        let result = Dop::decode(&mut SliceCursor::new(data), version);
        prop_assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn prop_mutated_fib_never_panics(
        version in any_version(),
        flips in prop::collection::vec((any::<prop::sample::Index>(), any::<u8>()), 1..16)
    ) {
        let image = FibImage::new(version);
        let mut data = image.build().to_vec();
        for (index, byte) in flips {
            let i = index.index(data.len());
            data[i] ^= byte;
        }
        if let Ok(fib) = decode_fib_from_bytes(data) {
            let _ = fib.check_table_bounds(image.table().len());
            let _ = decode_dop(&fib, &image.table());
        }
    }

    #[test]
    fn prop_mirror_rule(
        count in 0u32..=2000,
        lcb in prop::sample::select(vec![0u32, 4, 0x1000]),
    ) {
        let image = FibImage::new(FibVersion::Word97)
            .count(Counter::HeaderTextBoxes, count)
            .pair("plcf_hdrtxbx_txt", 0x80, lcb)
            .pair("plcf_txbx_hdr_bkd", 0x90, lcb);
        let ok = decode_fib_from_bytes(image.build()).is_ok();
        prop_assert_eq!(ok, (count == 0) == (lcb == 0));
    }

    #[test]
    fn prop_flag_sets_keep_every_bit(raw in any::<u32>()) {
        let mut data = valid_dop(DopVersion::Word6);
        data[4..8].copy_from_slice(&raw.to_le_bytes());
        let dop = Dop::decode(&mut SliceCursor::new(data), DopVersion::Word6).unwrap();
        prop_assert_eq!(dop.base().flags, DopFlags::new(raw));
        prop_assert_eq!(dop.base().flags.raw(), raw);
        prop_assert_eq!(dop.base().flags.embed_fonts(), raw >> 31 == 1);

        let layout = CompatLayoutFlags::new(raw);
        prop_assert_eq!(layout.raw(), raw);
    }

    #[test]
    fn prop_bit_groups_reassemble(raw in any::<u16>(), split in 1u32..16) {
        let mut bits = BitCursor::<u16>::new(raw);
        let low = bits.read_bits(split);
        let high = bits.read_bits(16 - split);
        bits.finish();
        prop_assert_eq!((high << split) | low, raw as u32);
    }
}

/// Filling every reserved and undefined byte with noise must not change the result
#[test]
fn test_reserved_fields_are_inert() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED);
    for version in FibVersion::ALL {
        let image = FibImage::new(version);
        let clean = decode_fib_from_bytes(image.build()).unwrap();

        let mut data = image.build().to_vec();
        // FibBase reserved3..reserved6
        rng.fill(&mut data[20..32]);
        // FibRgW97 reserved1..reserved13
        rng.fill(&mut data[34..60]);
        // FibRgLw97 reserved slots
        for slot in [1usize, 2, 6, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21] {
            let at = 64 + slot * 4;
            data[at..at + 4].copy_from_slice(&rng.gen::<u32>().to_le_bytes());
        }
        let noisy = decode_fib_from_bytes(Bytes::from(data)).unwrap();

        assert_eq!(noisy.rg_fc_lcb, clean.rg_fc_lcb);
        assert_eq!(noisy.rg_lw, clean.rg_lw);
        assert_eq!(noisy.version(), clean.version());
    }
}
