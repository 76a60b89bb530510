//! Dop97: properties added by Word 97

use super::base::{read_count, Dop95};
use super::layout::{Asumyi, Dogrid};
use super::typography::DopTypography;
use crate::bits::BitCursor;
use crate::common::Nfc;
use crate::stream::FormatRead;
use crate::validate::decode_code;
use crate::Result;
use serde::{Deserialize, Serialize};

closed_code! {
    /// Kind of document (`adt`)
    pub enum DocumentType {
        /// Ordinary document
        Unspecified = 0,
        /// Letter
        Letter = 1,
        /// E-mail message
        Email = 2,
    }
}

closed_code! {
    /// Outline levels shown in outline view (`lvlDop`)
    pub enum OutlineLevel {
        /// Level 1 only
        Through1 = 0x0,
        /// Levels 1-2
        Through2 = 0x1,
        /// Levels 1-3
        Through3 = 0x2,
        /// Levels 1-4
        Through4 = 0x3,
        /// Levels 1-5
        Through5 = 0x4,
        /// Levels 1-6
        Through6 = 0x5,
        /// Levels 1-7
        Through7 = 0x6,
        /// Levels 1-8
        Through8 = 0x7,
        /// Levels 1-9
        Through9 = 0x8,
        /// Every level including body text
        All = 0x9,
        /// No level recorded
        Unset = 0xF,
    }
}

bit_flags! {
    /// Document events with attached macros (`grfDocEvents`)
    pub struct DocEvents(u32) {
        /// Document created
        const NEW = 1 << 0 => new_event;
        /// Document opened
        const OPEN = 1 << 1 => open_event;
        /// Document closed
        const CLOSE = 1 << 2 => close_event;
        /// Document synchronized
        const SYNC = 1 << 3 => sync_event;
        /// XML element inserted
        const XML_AFTER_INSERT = 1 << 4 => xml_after_insert;
        /// XML element about to be deleted
        const XML_BEFORE_DELETE = 1 << 5 => xml_before_delete;
    }
}

/// Macro virus warning state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirusState {
    /// The user was warned about macros
    pub prompted: bool,
    /// The user chose to load macros
    pub load_safe: bool,
    /// Session key the answer belongs to
    pub session_key: u32,
}

/// Document properties as written by Word 97 (`Dop97`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dop97 {
    /// The Word 95 properties
    pub dop95: Dop95,
    /// Kind of document
    pub document_type: DocumentType,
    /// East Asian typography
    pub typography: DopTypography,
    /// Drawing grid
    pub dogrid: Dogrid,
    /// Outline levels shown
    pub outline_level: OutlineLevel,
    /// Grammar check finished
    pub gram_all_done: bool,
    /// No grammar errors were found
    pub gram_all_clean: bool,
    /// Embedded fonts are subsetted
    pub subset_fonts: bool,
    /// Saved as a web page
    pub html_doc: bool,
    /// Line cache must be rebuilt
    pub disk_lvc_invalid: bool,
    /// Page borders snap to the margins
    pub snap_border: bool,
    /// Page border surrounds the header
    pub include_header: bool,
    /// Page border surrounds the footer
    pub include_footer: bool,
    /// AutoSummary state
    pub asumyi: Asumyi,
    /// Characters including spaces
    pub c_ch_ws: u32,
    /// Characters including spaces and subdocuments
    pub c_ch_ws_with_subdocs: u32,
    /// Events with attached macros
    pub doc_events: DocEvents,
    /// Macro virus warning state
    pub virus: VirusState,
    /// Highest character position of the list cache
    pub cp_max_list_cache_main_doc: u32,
    /// Last bulleted list override used
    pub ilfo_last_bullet_main: u16,
    /// Last numbered list override used
    pub ilfo_last_number_main: u16,
    /// Double-byte characters
    pub c_dbc: u32,
    /// Double-byte characters including subdocuments
    pub c_dbc_with_subdocs: u32,
    /// Footnote reference number format
    pub nfc_ftn_ref: Nfc,
    /// Endnote reference number format
    pub nfc_edn_ref: Nfc,
    /// Font size of the zoomed view in half points
    pub hps_zoom_font_pag: u16,
    /// Height of the window in pixels
    pub dyw_disp_pag: u16,
}

impl Dop97 {
    /// Size in bytes
    pub const SIZE: usize = 500;

    /// Decode the 500-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let dop95 = Dop95::decode(reader)?;

        let adt_at = reader.position();
        let document_type = decode_code(reader.read_u16()? as u32, "adt", adt_at)?;
        let typography = DopTypography::decode(reader)?;
        let dogrid = Dogrid::decode(reader)?;

        let lvl_at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        bits.skip(1); // unused1
        let raw_lvl = bits.read_bits(4);
        let gram_all_done = bits.read_bit();
        let gram_all_clean = bits.read_bit();
        let subset_fonts = bits.read_bit();
        bits.skip(1); // unused2
        let html_doc = bits.read_bit();
        let disk_lvc_invalid = bits.read_bit();
        let snap_border = bits.read_bit();
        let include_header = bits.read_bit();
        let include_footer = bits.read_bit();
        bits.skip(2); // unused3, unused4
        bits.finish();
        let outline_level = decode_code(raw_lvl, "lvlDop", lvl_at)?;

        reader.skip(2)?; // unused5
        let asumyi = Asumyi::decode(reader)?;
        let c_ch_ws = read_count(reader, "cChWS")?;
        let c_ch_ws_with_subdocs = read_count(reader, "cChWSWithSubdocs")?;
        let doc_events = DocEvents::decode(reader)?;

        let mut bits = BitCursor::<u32>::read_from(reader)?;
        let virus = VirusState {
            prompted: bits.read_bit(),
            load_safe: bits.read_bit(),
            session_key: bits.read_bits(30),
        };
        bits.finish();

        reader.skip(30)?; // space1..space30
        let cp_max_list_cache_main_doc = reader.read_u32()?;
        let ilfo_last_bullet_main = reader.read_u16()?;
        let ilfo_last_number_main = reader.read_u16()?;
        let c_dbc = read_count(reader, "cDBC")?;
        let c_dbc_with_subdocs = read_count(reader, "cDBCWithSubdocs")?;
        reader.skip(4)?; // reserved3a

        let at = reader.position();
        let nfc_ftn_ref = decode_code(reader.read_u16()? as u32, "nfcFtnRef", at)?;
        let at = reader.position();
        let nfc_edn_ref = decode_code(reader.read_u16()? as u32, "nfcEdnRef", at)?;
        let hps_zoom_font_pag = reader.read_u16()?;
        let dyw_disp_pag = reader.read_u16()?;

        Ok(Self {
            dop95,
            document_type,
            typography,
            dogrid,
            outline_level,
            gram_all_done,
            gram_all_clean,
            subset_fonts,
            html_doc,
            disk_lvc_invalid,
            snap_border,
            include_header,
            include_footer,
            asumyi,
            c_ch_ws,
            c_ch_ws_with_subdocs,
            doc_events,
            virus,
            cp_max_list_cache_main_doc,
            ilfo_last_bullet_main,
            ilfo_last_number_main,
            c_dbc,
            c_dbc_with_subdocs,
            nfc_ftn_ref,
            nfc_edn_ref,
            hps_zoom_font_pag,
            dyw_disp_pag,
        })
    }
}
