//! Byte-exact vectors for a small Word 97 document
//!
//! `vectors/word97_fib.hex` is the start of the primary stream and
//! `vectors/word97_table.hex` the matching `1Table` stream: 26 characters of
//! main text, one section, one page, no subdocuments.

use bytes::Bytes;
use docfib_core::common::{Dttm, Nfc};
use docfib_core::dop::{EndnotePosition, FootnotePosition, OutlineLevel, ViewKind};
use docfib_core::{
    decode_dop, decode_fib_from_bytes, DefaultOr, FcLcb, FibError, FibVersion, TableStream,
    Violation,
};

const FIB_HEX: &str = include_str!("vectors/word97_fib.hex");
const TABLE_HEX: &str = include_str!("vectors/word97_table.hex");

fn fib_bytes() -> Vec<u8> {
    hex::decode(FIB_HEX.trim()).unwrap()
}

fn table_bytes() -> Bytes {
    Bytes::from(hex::decode(TABLE_HEX.trim()).unwrap())
}

#[test]
fn test_word97_fib() {
    let fib = decode_fib_from_bytes(fib_bytes()).unwrap();

    assert_eq!(fib.version(), FibVersion::Word97);
    assert_eq!(fib.base.lid, 0x0409);
    assert_eq!(fib.table_stream(), TableStream::One);
    assert_eq!(fib.rg_lw.cb_mac, 0x1200);
    assert_eq!(fib.rg_lw.ccp_text, 26);
    assert_eq!(fib.rg_lw.ccp_ftn, 0);
    assert!(fib.csw_new.is_none());

    let present: Vec<_> = fib
        .entries()
        .into_iter()
        .filter(|e| e.value.is_present())
        .map(|e| e.name)
        .collect();
    assert_eq!(
        present,
        ["stshf", "plcf_sed", "plcf_bte_chpx", "plcf_bte_papx", "sttbf_ffn", "dop", "clx"]
    );
    assert_eq!(fib.entry("clx").unwrap().value, FcLcb::new(0x424, 0x15));
    assert!(fib.deferred_pairs().is_empty());
}

#[test]
fn test_word97_dop() {
    let fib = decode_fib_from_bytes(fib_bytes()).unwrap();
    let table = table_bytes();
    fib.check_table_bounds(table.len()).unwrap();

    let dop = decode_dop(&fib, &table).unwrap();
    let base = dop.base();
    assert_eq!(base.footnote_position, FootnotePosition::BottomOfPage);
    assert_eq!(base.endnote_position, EndnotePosition::EndOfDocument);
    assert!(base.flags.auto_hyphen());
    assert!(base.flags.word97_compat());
    assert!(!base.flags.rev_marking());
    assert_eq!(base.dxa_tab, 720);
    assert_eq!(base.dxa_hot_z, 360);
    assert_eq!(base.revision, 3);
    assert_eq!(base.minutes_edited, 12);
    assert_eq!(base.stats.words, 5);
    assert_eq!(base.stats.chars, 24);
    assert_eq!(base.stats.pages, 1);
    assert_eq!(base.view, ViewKind::Print);
    assert_eq!(base.zoom_percent, DefaultOr::Explicit(100));

    let created = match base.created {
        DefaultOr::Explicit(d) => d,
        DefaultOr::Default => panic!("creation time missing"),
    };
    assert_eq!(
        created,
        Dttm {
            minute: 30,
            hour: 10,
            day: 14,
            month: 3,
            year_offset: 109,
            weekday: 6,
        }
    );
    assert_eq!(created.year(), 2009);
    assert!(matches!(base.revised, DefaultOr::Explicit(d) if d.month == 4 && d.day == 20));
    assert!(base.last_printed.is_default());

    let dop97 = dop.dop97().unwrap();
    assert_eq!(dop97.outline_level, OutlineLevel::All);
    assert_eq!(dop97.c_ch_ws, 29);
    assert_eq!(dop97.nfc_ftn_ref, Nfc::DECIMAL);
    assert_eq!(dop97.nfc_edn_ref, Nfc::LOWER_ROMAN);
    assert!(dop.dop2000().is_none());
}

#[test]
fn test_word97_single_byte_corruptions() {
    // (offset, replacement, field)
    let cases: [(usize, u8, &str); 6] = [
        (0, 0xED, "wIdent"),
        (12, 0xC0, "nFibBack"),
        (32, 0x0F, "csw"),
        (62, 0x17, "cslw"),
        (152, 0x5C, "cbRgFcLcb"),
        (154 + 33 * 8 + 4, 0x00, "clx"),
    ];
    for (offset, byte, field) in cases {
        let mut data = fib_bytes();
        data[offset] = byte;
        let err = decode_fib_from_bytes(data).unwrap_err();
        match err {
            FibError::Corrupt { field: got, .. } => assert_eq!(got, field, "offset {offset}"),
            other => panic!("offset {offset}: {other:?}"),
        }
    }
}

#[test]
fn test_word97_table_too_short() {
    let fib = decode_fib_from_bytes(fib_bytes()).unwrap();
    let table = table_bytes().slice(..0x400);
    let err = decode_dop(&fib, &table).unwrap_err();
    assert_eq!(
        err,
        FibError::Corrupt {
            field: "dop",
            offset: 0x230,
            violation: Violation::OutOfBounds {
                end: 0x424,
                limit: 0x400,
            },
        }
    );
    assert!(fib.check_table_bounds(table.len()).is_err());
}
