//! Dop2002: properties added by Word 2002

use super::dop2000::Dop2000;
use crate::stream::FormatRead;
use crate::Result;
use serde::{Deserialize, Serialize};

bit_flags! {
    /// Flag word opening the Word 2002 extension
    pub struct Dop2002Flags(u16) {
        /// System fonts are not embedded
        const DO_NOT_EMBED_SYSTEM_FONT = 1 << 1 => do_not_embed_system_font;
        /// Word 2002 compatibility settings apply
        const WORD_COMPAT = 1 << 2 => word_compat;
        /// Recovery data is kept while editing
        const LIVE_RECOVER = 1 << 3 => live_recover;
        /// Smart tags are embedded
        const EMBED_FACTOIDS = 1 << 4 => embed_factoids;
        /// Smart tag XML is saved
        const FACTOID_XML = 1 << 5 => factoid_xml;
        /// Smart tag recognition finished
        const FACTOID_ALL_DONE = 1 << 6 => factoid_all_done;
        /// Pages are printed as a folio
        const FOLIO_PRINT = 1 << 7 => folio_print;
        /// Pages are printed in reverse order
        const REVERSE_FOLIO = 1 << 8 => reverse_folio;
        /// Saved as plain text with line endings
        const TEXT_LINE_ENDING = 1 << 9 => text_line_ending;
        /// Format consistency marks are hidden
        const HIDE_FCC = 1 << 12 => hide_fcc;
        /// Markup is shown
        const ACETATE_SHOW_MARKUP = 1 << 13 => acetate_show_markup;
        /// Comments are shown
        const ACETATE_SHOW_ATN = 1 << 14 => acetate_show_atn;
        /// Insertions and deletions are shown
        const ACETATE_SHOW_INS_DEL = 1 << 15 => acetate_show_ins_del;
    }
}

bit_flags! {
    /// Styles offered in the style gallery (`grfFmtFilter`)
    pub struct FormatFilter(u16) {
        /// Show styles in use
        const IN_USE = 1 << 0 => in_use;
        /// Show all styles
        const ALL = 1 << 1 => all;
        /// Show paragraph formatting
        const PARAGRAPH = 1 << 2 => paragraph;
        /// Show character formatting
        const CHARACTER = 1 << 3 => character;
        /// Show list formatting
        const LIST = 1 << 4 => list;
        /// Show table formatting
        const TABLE = 1 << 5 => table;
    }
}

/// Lowest changed character position of each story in a reading session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionMinimums {
    /// Main document
    pub text: u32,
    /// Footnotes
    pub footnotes: u32,
    /// Headers
    pub headers: u32,
    /// Comments
    pub comments: u32,
    /// Endnotes
    pub endnotes: u32,
    /// Text boxes
    pub text_boxes: u32,
    /// Header text boxes
    pub header_text_boxes: u32,
}

/// Document properties as written by Word 2002 (`Dop2002`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dop2002 {
    /// The Word 2000 properties
    pub dop2000: Dop2000,
    /// Opening flag word
    pub flags: Dop2002Flags,
    /// Default table style
    pub istd_table_dflt: u16,
    /// Compatibility version
    pub ver_compat: u16,
    /// Style gallery filter
    pub fmt_filter: FormatFilter,
    /// Pages per folio
    pub folio_pages: i16,
    /// Code page of the text
    pub cpg_text: u32,
    /// Changed positions during reading
    pub rm_minimums: RevisionMinimums,
    /// Revision save id of the document root
    pub rsid_root: u32,
}

impl Dop2002 {
    /// Size in bytes
    pub const SIZE: usize = 594;

    /// Decode the 594-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let dop2000 = Dop2000::decode(reader)?;
        let flags = Dop2002Flags::decode(reader)?;
        reader.skip(4)?; // unused
        let istd_table_dflt = reader.read_u16()?;
        let ver_compat = reader.read_u16()?;
        let fmt_filter = FormatFilter::decode(reader)?;
        let folio_pages = reader.read_i16()?;
        let cpg_text = reader.read_u32()?;
        let rm_minimums = RevisionMinimums {
            text: reader.read_u32()?,
            footnotes: reader.read_u32()?,
            headers: reader.read_u32()?,
            comments: reader.read_u32()?,
            endnotes: reader.read_u32()?,
            text_boxes: reader.read_u32()?,
            header_text_boxes: reader.read_u32()?,
        };
        let rsid_root = reader.read_u32()?;

        Ok(Self {
            dop2000,
            flags,
            istd_table_dflt,
            ver_compat,
            fmt_filter,
            folio_pages,
            cpg_text,
            rm_minimums,
            rsid_root,
        })
    }
}
