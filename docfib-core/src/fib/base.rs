//! FibBase: the fixed 32-byte head of the File Information Block

use crate::bits::BitCursor;
use crate::constants::{FIB_IDENT, NFIB_BACK_VALUES, TABLE_STREAM_0, TABLE_STREAM_1};
use crate::context::ContextFlag;
use crate::error::{FibError, Violation};
use crate::stream::FormatRead;
use crate::validate::check_constant;
use crate::Result;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::trace;

/// Which of the two table streams the offset/length pairs point into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableStream {
    /// `0Table`
    Zero,
    /// `1Table`
    One,
}

impl TableStream {
    /// Stream name inside the container
    pub const fn name(&self) -> &'static str {
        match self {
            TableStream::Zero => TABLE_STREAM_0,
            TableStream::One => TABLE_STREAM_1,
        }
    }
}

/// Document flags packed into the 16-bit word at offset 10
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibBaseFlags {
    /// `fDot`: the document is a template
    pub template: bool,
    /// `fGlsy`: the document only holds AutoText items
    pub glossary: bool,
    /// `fComplex`: the last save was incremental
    pub complex: bool,
    /// `fHasPic`: the document contains pictures
    pub has_pic: bool,
    /// `cQuickSaves`: incremental saves since the last full save
    pub quick_saves: u8,
    /// `fEncrypted`
    pub encrypted: bool,
    /// `fWhichTblStm`: 1 selects `1Table`
    pub which_table_stream: bool,
    /// `fReadOnlyRecommended`
    pub read_only_recommended: bool,
    /// `fWriteReservation`
    pub write_reservation: bool,
    /// `fExtChar`: always set in this format
    pub ext_char: bool,
    /// `fLoadOverride`
    pub load_override: bool,
    /// `fFarEast`: installation language is East Asian
    pub far_east: bool,
    /// `fObfuscated`: XOR obfuscation (only meaningful when encrypted)
    pub obfuscated: bool,
}

/// Flags packed into the byte at offset 19
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibBaseFlags2 {
    /// `fMac`: must be clear
    pub mac: bool,
    /// `fEmptySpecial`
    pub empty_special: bool,
    /// `fLoadOverridePage`
    pub load_override_page: bool,
}

/// The first record of the File Information Block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibBase {
    /// `nFib` as stored in the base record
    pub n_fib: u16,
    /// Installation language id
    pub lid: u16,
    /// 512-byte page of the AutoText FIB, or 0
    pub pn_next: u16,
    /// Document flags
    pub flags: FibBaseFlags,
    /// Oldest format version able to read the document
    pub n_fib_back: u16,
    /// Encryption key or header size; zero when not encrypted
    pub l_key: u32,
    /// Second flag byte
    pub flags2: FibBaseFlags2,
}

impl FibBase {
    /// Decode the 32-byte base record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let at = reader.position();
        let w_ident = reader.read_u16()?;
        check_constant(w_ident as u32, FIB_IDENT as u32, "wIdent", at)?;

        let n_fib = reader.read_u16()?;
        reader.skip(2)?; // unused
        let lid = reader.read_u16()?;

        let pn_next_at = reader.position();
        let pn_next = reader.read_u16()?;

        let flags_at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let flags = FibBaseFlags {
            template: bits.read_bit(),
            glossary: bits.read_bit(),
            complex: bits.read_bit(),
            has_pic: bits.read_bit(),
            quick_saves: bits.read_bits(4) as u8,
            encrypted: bits.read_bit(),
            which_table_stream: bits.read_bit(),
            read_only_recommended: bits.read_bit(),
            write_reservation: bits.read_bit(),
            ext_char: bits.read_bit(),
            load_override: bits.read_bit(),
            far_east: bits.read_bit(),
            obfuscated: bits.read_bit(),
        };
        bits.finish();

        if !flags.ext_char {
            return Err(FibError::corrupt(
                "fExtChar",
                flags_at,
                Violation::Unexpected {
                    expected: 1,
                    actual: 0,
                },
            ));
        }
        // AutoText lives only in templates, never in the glossary document itself
        if pn_next != 0 && flags.glossary {
            return Err(FibError::corrupt(
                "pnNext",
                pn_next_at,
                Violation::Unexpected {
                    expected: 0,
                    actual: pn_next as u32,
                },
            ));
        }
        if pn_next != 0 && !flags.template {
            return Err(FibError::corrupt(
                "pnNext",
                pn_next_at,
                Violation::FlagNotSet {
                    flag: ContextFlag::Template,
                },
            ));
        }

        let back_at = reader.position();
        let n_fib_back = reader.read_u16()?;
        if !NFIB_BACK_VALUES.contains(&n_fib_back) {
            return Err(FibError::corrupt(
                "nFibBack",
                back_at,
                Violation::IllegalCode {
                    raw: n_fib_back as u32,
                },
            ));
        }

        let key_at = reader.position();
        let l_key = reader.read_u32()?;
        if !flags.encrypted {
            check_constant(l_key, 0, "lKey", key_at)?;
        }

        let envr_at = reader.position();
        let envr = reader.read_u8()?;
        check_constant(envr as u32, 0, "envr", envr_at)?;

        let flags2_at = reader.position();
        let mut bits = BitCursor::<u8>::read_from(reader)?;
        let flags2 = FibBaseFlags2 {
            mac: bits.read_bit(),
            empty_special: bits.read_bit(),
            load_override_page: bits.read_bit(),
        };
        bits.skip(2); // reserved1, reserved2
        bits.skip(3); // fSpare0
        bits.finish();
        check_constant(flags2.mac as u32, 0, "fMac", flags2_at)?;

        reader.skip(12)?; // reserved3..reserved6

        #[cfg(feature = "logging")]
        trace!(
            "FibBase: nFib={:#06x} nFibBack={:#06x} template={} glossary={}",
            n_fib,
            n_fib_back,
            flags.template,
            flags.glossary
        );

        Ok(Self {
            n_fib,
            lid,
            pn_next,
            flags,
            n_fib_back,
            l_key,
            flags2,
        })
    }

    /// The table stream the offset/length pairs point into
    pub fn table_stream(&self) -> TableStream {
        if self.flags.which_table_stream {
            TableStream::One
        } else {
            TableStream::Zero
        }
    }
}
