//! Dop2003: properties added by Word 2003

use super::dop2002::Dop2002;
use crate::bits::BitCursor;
use crate::stream::FormatRead;
use crate::validate::decode_code;
use crate::Result;
use serde::{Deserialize, Serialize};

closed_code! {
    /// Editing restriction in force (`iDocProtCur`)
    pub enum ProtectionKind {
        /// Only tracked changes are allowed
        Revisions = 0,
        /// Only comments are allowed
        Comments = 1,
        /// Only form fields may be filled in
        Forms = 2,
        /// Read only
        ReadOnly = 3,
        /// No restriction
        None = 7,
    }
}

bit_flags! {
    /// Flag word opening the Word 2003 extension
    pub struct Dop2003Flags(u16) {
        /// Comment-only protection behaves as read only
        const TREAT_LOCK_ATN_AS_READ_ONLY = 1 << 0 => treat_lock_atn_as_read_only;
        /// Styles are locked
        const STYLE_LOCK = 1 << 1 => style_lock;
        /// Formatting may override locked styles
        const AUTO_FMT_OVERRIDE = 1 << 2 => auto_fmt_override;
        /// WordML markup is removed on save
        const REMOVE_WORD_ML = 1 << 3 => remove_word_ml;
        /// A custom XML transform is applied on save
        const APPLY_CUSTOM_XFORM = 1 << 4 => apply_custom_xform;
        /// Style lock is enforced
        const STYLE_LOCK_ENFORCED = 1 << 5 => style_lock_enforced;
        /// Comment lock is only simulated
        const FAKE_LOCK_ATN = 1 << 6 => fake_lock_atn;
        /// Ignore mixed content when saving XML
        const IGNORE_MIXED_CONTENT = 1 << 7 => ignore_mixed_content;
        /// Show placeholder text for XML
        const SHOW_PLACEHOLDER_TEXT = 1 << 8 => show_placeholder_text;
        /// Word 2003 XML is saved
        const WORD2003_XML = 1 << 10 => word2003_xml;
        /// Reading layout is enabled
        const READING_MODE_VIEW = 1 << 11 => reading_mode_view;
    }
}

/// Document properties as written by Word 2003 (`Dop2003`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dop2003 {
    /// The Word 2002 properties
    pub dop2002: Dop2002,
    /// Opening flag word
    pub flags: Dop2003Flags,
    /// Reading layout shows pages as printed
    pub reading_mode_ink_lock_down: bool,
    /// Ink annotations are shown
    pub acetate_show_ink_atn: bool,
    /// Revision dates are removed on save
    pub filter_dttm: bool,
    /// Protection is enforced
    pub enforce_doc_prot: bool,
    /// Protection in force
    pub doc_prot_cur: ProtectionKind,
    /// Background spell check state is shown
    pub disp_bk_sp_saved: bool,
    /// Reading layout page width
    pub dxa_page_lock: i32,
    /// Reading layout page height
    pub dya_page_lock: i32,
    /// Reading layout font scale
    pub pct_font_lock: u32,
    /// Toolbar id of the reading layout
    pub grfitbid: u8,
    /// List override of the last macro cleanup
    pub ilfo_mac_at_cleanup: u16,
}

impl Dop2003 {
    /// Size in bytes
    pub const SIZE: usize = 616;

    /// Decode the 616-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let dop2002 = Dop2002::decode(reader)?;
        let flags = Dop2003Flags::decode(reader)?;

        let prot_at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let reading_mode_ink_lock_down = bits.read_bit();
        let acetate_show_ink_atn = bits.read_bit();
        let filter_dttm = bits.read_bit();
        let enforce_doc_prot = bits.read_bit();
        let raw_prot = bits.read_bits(3);
        let disp_bk_sp_saved = bits.read_bit();
        bits.skip(8); // empty2
        bits.finish();
        let doc_prot_cur = decode_code(raw_prot, "iDocProtCur", prot_at)?;

        let dxa_page_lock = reader.read_i32()?;
        let dya_page_lock = reader.read_i32()?;
        let pct_font_lock = reader.read_u32()?;
        let grfitbid = reader.read_u8()?;
        reader.skip(1)?; // empty3
        let ilfo_mac_at_cleanup = reader.read_u16()?;
        reader.skip(2)?; // unused

        Ok(Self {
            dop2002,
            flags,
            reading_mode_ink_lock_down,
            acetate_show_ink_atn,
            filter_dttm,
            enforce_doc_prot,
            doc_prot_cur,
            disp_bk_sp_saved,
            dxa_page_lock,
            dya_page_lock,
            pct_font_lock,
            grfitbid,
            ilfo_mac_at_cleanup,
        })
    }
}
