//! Builders for synthetic primary and table streams

#![allow(dead_code)]

use bytes::{BufMut, Bytes, BytesMut};
use docfib_core::constants::{FIB_CSLW, FIB_CSW, FIB_RG_FC_LCB_OFFSET};
use docfib_core::fib::FibRgFcLcb2007;
use docfib_core::{ContextFlag, Counter, DopVersion, FibVersion};

/// Offset of the DOP in the synthetic table stream
pub const DOP_FC: u32 = 0x40;

/// Entries every valid table must carry
pub const MANDATORY: [&str; 7] = [
    "stshf",
    "plcf_sed",
    "plcf_bte_chpx",
    "plcf_bte_papx",
    "sttbf_ffn",
    "dop",
    "clx",
];

/// A FIB image under construction
#[derive(Debug, Clone)]
pub struct FibImage {
    pub version: FibVersion,
    pub n_fib: u16,
    pub n_fib_new: Option<u16>,
    pub csw_new: Option<u16>,
    pub template: bool,
    pub glossary: bool,
    pub which_table: bool,
    pub lw: [u32; 22],
    pub pairs: Vec<(u32, u32)>,
}

impl FibImage {
    /// A valid image: mandatory entries present, every count zero
    pub fn new(version: FibVersion) -> Self {
        let count = version.cb_rg_fc_lcb() as usize;
        let mut image = Self {
            version,
            n_fib: 0x00C1,
            n_fib_new: None,
            csw_new: None,
            template: false,
            glossary: false,
            which_table: true,
            lw: [0; 22],
            pairs: vec![(0, 0); count],
        };
        for name in MANDATORY {
            image = image.pair(name, 0, 4);
        }
        image.pair("dop", DOP_FC, DopVersion::from(version).size() as u32)
    }

    /// Index of `name` in the table
    pub fn index_of(name: &str) -> usize {
        FibRgFcLcb2007::field_names()
            .iter()
            .position(|n| *n == name)
            .unwrap_or_else(|| panic!("unknown entry {name}"))
    }

    /// Offset of the pair `name` in the primary stream
    pub fn offset_of(name: &str) -> usize {
        FIB_RG_FC_LCB_OFFSET + Self::index_of(name) * 8
    }

    pub fn pair(mut self, name: &str, fc: u32, lcb: u32) -> Self {
        let idx = Self::index_of(name);
        assert!(idx < self.pairs.len(), "{name} is not in {:?}", self.version);
        self.pairs[idx] = (fc, lcb);
        self
    }

    pub fn count(mut self, counter: Counter, value: u32) -> Self {
        let slot = match counter {
            Counter::MainText => 3,
            Counter::Footnotes => 4,
            Counter::Headers => 5,
            Counter::Comments => 7,
            Counter::Endnotes => 8,
            Counter::TextBoxes => 9,
            Counter::HeaderTextBoxes => 10,
        };
        self.lw[slot] = value;
        self
    }

    pub fn flag(mut self, flag: ContextFlag, value: bool) -> Self {
        match flag {
            ContextFlag::Glossary => self.glossary = value,
            ContextFlag::Template => self.template = value,
        }
        self
    }

    /// Raw 32-bit slot in `FibRgLw97`
    pub fn lw_slot(mut self, slot: usize, value: u32) -> Self {
        self.lw[slot] = value;
        self
    }

    pub fn build(&self) -> Bytes {
        let mut buf = BytesMut::new();

        // FibBase
        buf.put_u16_le(0xA5EC);
        buf.put_u16_le(self.n_fib);
        buf.put_u16_le(0);
        buf.put_u16_le(0x0409);
        buf.put_u16_le(0);
        let mut flags: u16 = 1 << 12;
        if self.template {
            flags |= 1 << 0;
        }
        if self.glossary {
            flags |= 1 << 1;
        }
        if self.which_table {
            flags |= 1 << 9;
        }
        buf.put_u16_le(flags);
        buf.put_u16_le(0x00BF);
        buf.put_u32_le(0);
        buf.put_u8(0);
        buf.put_u8(0);
        buf.put_bytes(0, 12);

        buf.put_u16_le(FIB_CSW);
        buf.put_bytes(0, 26);
        buf.put_u16_le(0x0409);

        buf.put_u16_le(FIB_CSLW);
        for v in self.lw {
            buf.put_u32_le(v);
        }

        buf.put_u16_le(self.pairs.len() as u16);
        for (fc, lcb) in &self.pairs {
            buf.put_u32_le(*fc);
            buf.put_u32_le(*lcb);
        }

        let csw_new = self.csw_new.unwrap_or(self.version.csw_new());
        buf.put_u16_le(csw_new);
        if csw_new != 0 {
            buf.put_u16_le(self.n_fib_new.unwrap_or(self.version.n_fib()));
            buf.put_u16_le(0); // cQuickSavesNew
            if csw_new == 5 {
                buf.put_u16_le(0x0409);
                buf.put_u16_le(0x0411);
                buf.put_u16_le(0x0401);
            }
        }

        buf.freeze()
    }

    /// A table stream holding a valid DOP at [`DOP_FC`]
    pub fn table(&self) -> Bytes {
        let mut table = vec![0u8; DOP_FC as usize];
        table.extend(valid_dop(DopVersion::from(self.version)));
        Bytes::from(table)
    }
}

/// Smallest DOP of `version` that passes every check
///
/// Zero is legal almost everywhere; the exceptions are footnote placement,
/// the note starting numbers and the equation justification.
pub fn valid_dop(version: DopVersion) -> Vec<u8> {
    let mut dop = vec![0u8; version.size()];
    dop[0] = 0x20; // fpc = 1
    dop[2] = 0x04; // nFtn = 1
    dop[52] = 0x04; // nEdn = 1
    if version == DopVersion::Word2007 {
        dop[624] = 0x10; // mthbpjc = 1
    }
    dop
}
