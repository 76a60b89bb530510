//! DopBase and Dop95

use super::copts::{Copts60, Copts80};
use crate::bits::BitCursor;
use crate::common::Dttm;
use crate::constants::MAX_CCP;
use crate::stream::FormatRead;
use crate::validate::{check_range, decode_code, DefaultOr};
use crate::Result;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::trace;

closed_code! {
    /// Where footnotes are placed (`fpc`)
    pub enum FootnotePosition {
        /// At the bottom of the page
        BottomOfPage = 1,
        /// Directly beneath the text
        BeneathText = 2,
    }
}

closed_code! {
    /// When note numbering restarts (`rncFtn`, `rncEdn`)
    pub enum NoteRestart {
        /// Numbering continues through the document
        Continuous = 0,
        /// Numbering restarts every section
        EachSection = 1,
        /// Numbering restarts every page
        EachPage = 2,
    }
}

closed_code! {
    /// Where endnotes are placed (`epc`)
    pub enum EndnotePosition {
        /// At the end of each section
        EndOfSection = 0,
        /// At the end of the document
        EndOfDocument = 3,
    }
}

closed_code! {
    /// View the document was last saved in (`wvkoSaved`)
    pub enum ViewKind {
        /// No view recorded
        None = 0,
        /// Print layout
        Print = 1,
        /// Outline
        Outline = 2,
        /// Master document
        MasterPages = 3,
        /// Normal (draft)
        Normal = 4,
        /// Web layout
        Web = 5,
    }
}

closed_code! {
    /// Zoom mode the document was last saved in (`zkSaved`)
    pub enum ZoomKind {
        /// Fixed percentage
        None = 0,
        /// Whole page
        FullPage = 1,
        /// Page width
        BestFit = 2,
        /// Text width
        TextFit = 3,
    }
}

bit_flags! {
    /// The 32-bit flag group at offset 4 of the DOP
    pub struct DopFlags(u32) {
        /// Outline view state changed since the last save
        const OUTLINE_DIRTY_SAVE = 1 << 0 => outline_dirty_save;
        /// Only Macintosh pictures are stored
        const ONLY_MAC_PICS = 1 << 8 => only_mac_pics;
        /// Only Windows pictures are stored
        const ONLY_WIN_PICS = 1 << 9 => only_win_pics;
        /// Mail merge label document
        const LABEL_DOC = 1 << 10 => label_doc;
        /// Hyphenate capitalized words
        const HYPH_CAPITALS = 1 << 11 => hyph_capitals;
        /// Hyphenate automatically
        const AUTO_HYPHEN = 1 << 12 => auto_hyphen;
        /// Form without fields
        const FORM_NO_FIELDS = 1 << 13 => form_no_fields;
        /// Update styles from the template on open
        const LINK_STYLES = 1 << 14 => link_styles;
        /// Track revisions
        const REV_MARKING = 1 << 15 => rev_marking;
        /// Word count is exact
        const EXACT_C_WORDS = 1 << 17 => exact_c_words;
        /// Hidden text counts toward pagination
        const PAG_HIDDEN = 1 << 18 => pag_hidden;
        /// Field results count toward pagination
        const PAG_RESULTS = 1 << 19 => pag_results;
        /// Only comments may be edited
        const LOCK_ATN = 1 << 20 => lock_atn;
        /// Mirror margins on facing pages
        const MIRROR_MARGINS = 1 << 21 => mirror_margins;
        /// Saved with Word 97 compatibility
        const WORD97_COMPAT = 1 << 22 => word97_compat;
        /// Document protection is on
        const PROT_ENABLED = 1 << 25 => prot_enabled;
        /// Select form field contents on entry
        const DISP_FORM_FLD_SEL = 1 << 26 => disp_form_fld_sel;
        /// Show revision marks
        const RM_VIEW = 1 << 27 => rm_view;
        /// Print revision marks
        const RM_PRINT = 1 << 28 => rm_print;
        /// Macro project is locked
        const LOCK_VBA_PROJ = 1 << 29 => lock_vba_proj;
        /// Revision tracking is locked on
        const LOCK_REV = 1 << 30 => lock_rev;
        /// TrueType fonts are embedded
        const EMBED_FONTS = 1 << 31 => embed_fonts;
    }
}

/// Largest legal footnote or endnote starting number
const MAX_NOTE_START: i64 = 0x3FFE;

/// Largest legal tab, hot zone and hyphen limit value
const MAX_TWIPS: i64 = 0x7FFF;

/// Note numbering: restart rule and starting number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteNumbering {
    /// Restart rule
    pub restart: NoteRestart,
    /// First number, 1-0x3FFE
    pub start: u16,
}

impl NoteNumbering {
    fn decode<R: FormatRead + ?Sized>(
        reader: &mut R,
        restart_field: &'static str,
        start_field: &'static str,
    ) -> Result<Self> {
        let at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let raw_restart = bits.read_bits(2);
        let start = bits.read_bits(14);
        bits.finish();

        let restart = decode_code(raw_restart, restart_field, at)?;
        check_range(start as i64, 1, MAX_NOTE_START, start_field, at)?;
        Ok(Self {
            restart,
            start: start as u16,
        })
    }
}

/// Document statistics as last calculated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocStats {
    /// Words
    pub words: u32,
    /// Characters
    pub chars: u32,
    /// Pages
    pub pages: u16,
    /// Paragraphs
    pub paragraphs: u32,
    /// Lines
    pub lines: u32,
}

pub(super) fn read_count<R: FormatRead + ?Sized>(reader: &mut R, field: &'static str) -> Result<u32> {
    let at = reader.position();
    let raw = reader.read_i32()?;
    check_range(raw as i64, 0, MAX_CCP, field, at)?;
    Ok(raw as u32)
}

fn read_page_count<R: FormatRead + ?Sized>(reader: &mut R, field: &'static str) -> Result<u16> {
    let at = reader.position();
    let raw = reader.read_i16()?;
    check_range(raw as i64, 0, i16::MAX as i64, field, at)?;
    Ok(raw as u16)
}

fn read_twips<R: FormatRead + ?Sized>(reader: &mut R, field: &'static str) -> Result<u16> {
    let at = reader.position();
    let raw = reader.read_u16()?;
    check_range(raw as i64, 0, MAX_TWIPS, field, at)?;
    Ok(raw)
}

/// The Word 6 document properties (`DopBase`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DopBase {
    /// Facing pages are shown
    pub facing_pages: bool,
    /// Main document of a mail merge
    pub pmh_main_doc: bool,
    /// Footnote placement
    pub footnote_position: FootnotePosition,
    /// Footnote numbering
    pub footnotes: NoteNumbering,
    /// Flag group at offset 4
    pub flags: DopFlags,
    /// Word 6 compatibility options
    pub copts60: Copts60,
    /// Default tab width in twips
    pub dxa_tab: u16,
    /// Hyphenation hot zone in twips
    pub dxa_hot_z: u16,
    /// Maximum consecutive hyphenated lines, 0 for no limit
    pub c_consec_hyp_lim: u16,
    /// Creation time
    pub created: DefaultOr<Dttm>,
    /// Last save time
    pub revised: DefaultOr<Dttm>,
    /// Last print time
    pub last_printed: DefaultOr<Dttm>,
    /// Times the document was saved
    pub revision: i16,
    /// Minutes spent editing
    pub minutes_edited: i32,
    /// Statistics of the main document
    pub stats: DocStats,
    /// Endnote numbering
    pub endnotes: NoteNumbering,
    /// Endnote placement
    pub endnote_position: EndnotePosition,
    /// Print only form field data
    pub print_form_data: bool,
    /// Save only form field data
    pub save_form_data: bool,
    /// Shade form fields
    pub shade_form_data: bool,
    /// Shade merge fields
    pub shade_merge_fields: bool,
    /// Subdocuments count toward the statistics
    pub include_subdocs_in_stats: bool,
    /// Statistics including subdocuments
    pub stats_with_subdocs: DocStats,
    /// Protection password hash
    pub key_prot_doc: u32,
    /// Saved view
    pub view: ViewKind,
    /// Saved zoom percentage, 10-500
    pub zoom_percent: DefaultOr<u16>,
    /// Saved zoom mode
    pub zoom: ZoomKind,
    /// Gutter is at the top of the page
    pub gutter_at_top: bool,
}

impl DopBase {
    /// Size in bytes
    pub const SIZE: usize = 84;

    /// Decode the 84-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let facing_pages = bits.read_bit();
        bits.skip(1); // unused1
        let pmh_main_doc = bits.read_bit();
        bits.skip(2); // unused2
        let raw_fpc = bits.read_bits(2);
        bits.skip(1); // unused3
        bits.skip(8); // unused4
        bits.finish();
        let footnote_position = decode_code(raw_fpc, "fpc", at)?;

        let footnotes = NoteNumbering::decode(reader, "rncFtn", "nFtn")?;
        let flags = DopFlags::decode(reader)?;
        let copts60 = Copts60::decode(reader)?;
        let dxa_tab = read_twips(reader, "dxaTab")?;
        reader.skip(2)?; // cpgText
        let dxa_hot_z = read_twips(reader, "dxaHotZ")?;
        let c_consec_hyp_lim = read_twips(reader, "cConsecHypLim")?;
        reader.skip(2)?; // wSpare2

        let created = Dttm::decode(reader, "dttmCreated")?;
        let revised = Dttm::decode(reader, "dttmRevised")?;
        let last_printed = Dttm::decode(reader, "dttmLastPrint")?;
        let revision = reader.read_i16()?;
        let minutes_edited = reader.read_i32()?;

        let words = read_count(reader, "cWords")?;
        let chars = read_count(reader, "cCh")?;
        let pages = read_page_count(reader, "cPg")?;
        let paragraphs = read_count(reader, "cParas")?;

        let endnotes = NoteNumbering::decode(reader, "rncEdn", "nEdn")?;

        let epc_at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let raw_epc = bits.read_bits(2);
        bits.skip(4); // unused5
        bits.skip(4); // unused6
        let print_form_data = bits.read_bit();
        let save_form_data = bits.read_bit();
        let shade_form_data = bits.read_bit();
        let shade_merge_fields = bits.read_bit();
        bits.skip(1); // reserved2
        let include_subdocs_in_stats = bits.read_bit();
        bits.finish();
        let endnote_position = decode_code(raw_epc, "epc", epc_at)?;

        let lines = read_count(reader, "cLines")?;
        let stats = DocStats {
            words,
            chars,
            pages,
            paragraphs,
            lines,
        };

        let words = read_count(reader, "cWordsWithSubdocs")?;
        let chars = read_count(reader, "cChWithSubdocs")?;
        let pages = read_page_count(reader, "cPgWithSubdocs")?;
        let paragraphs = read_count(reader, "cParasWithSubdocs")?;
        let lines = read_count(reader, "cLinesWithSubdocs")?;
        let stats_with_subdocs = DocStats {
            words,
            chars,
            pages,
            paragraphs,
            lines,
        };
        let key_prot_doc = reader.read_u32()?;

        let view_at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let raw_view = bits.read_bits(3);
        let raw_zoom_percent = bits.read_bits(9) as u16;
        let raw_zoom = bits.read_bits(2);
        bits.skip(1); // unused
        let gutter_at_top = bits.read_bit();
        bits.finish();
        let view = decode_code(raw_view, "wvkoSaved", view_at)?;
        let zoom_percent = DefaultOr::decode(raw_zoom_percent, 10, 500, "pctWwdSaved", view_at)?;
        let zoom = decode_code(raw_zoom, "zkSaved", view_at)?;

        #[cfg(feature = "logging")]
        trace!("DopBase: view={:?} zoom={:?}", view, zoom);

        Ok(Self {
            facing_pages,
            pmh_main_doc,
            footnote_position,
            footnotes,
            flags,
            copts60,
            dxa_tab,
            dxa_hot_z,
            c_consec_hyp_lim,
            created,
            revised,
            last_printed,
            revision,
            minutes_edited,
            stats,
            endnotes,
            endnote_position,
            print_form_data,
            save_form_data,
            shade_form_data,
            shade_merge_fields,
            include_subdocs_in_stats,
            stats_with_subdocs,
            key_prot_doc,
            view,
            zoom_percent,
            zoom,
            gutter_at_top,
        })
    }
}

/// Document properties as written by Word 95 (`Dop95`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dop95 {
    /// The Word 6 properties
    pub base: DopBase,
    /// Compatibility options
    pub copts80: Copts80,
}

impl Dop95 {
    /// Size in bytes
    pub const SIZE: usize = DopBase::SIZE + Copts80::SIZE;

    /// Decode the 88-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let base = DopBase::decode(reader)?;
        let copts80 = Copts80::decode(reader)?;
        Ok(Self { base, copts80 })
    }
}
