//! Dop2000: properties added by Word 2000

use super::copts::Copts;
use super::dop97::Dop97;
use crate::bits::BitCursor;
use crate::stream::FormatRead;
use crate::validate::check_range;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Deepest list level index
const MAX_LIST_LEVEL: i64 = 8;

/// Largest `screenSize` code (1920x1200)
const MAX_SCREEN_SIZE: i64 = 10;

const MIN_PIXELS_PER_INCH: i64 = 19;
const MAX_PIXELS_PER_INCH: i64 = 480;

/// Options for saving as a web page
///
/// `screen_size` and `pixels_per_inch` are only meaningful when
/// `initialized` is set, and only validated then.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebOptions {
    /// Support files go into a separate folder
    pub organize_in_folder: bool,
    /// Long file names are allowed
    pub use_long_file_names: bool,
    /// Target screen resolution
    pub pixels_per_inch: u16,
    /// The options were set explicitly
    pub initialized: bool,
    /// Target screen size code, 0-10
    pub screen_size: u8,
    /// Rely on CSS for formatting
    pub rely_on_css: bool,
    /// Rely on VML for graphics
    pub rely_on_vml: bool,
    /// PNG images are allowed
    pub allow_png: bool,
}

bit_flags! {
    /// Flag word closing the Word 2000 extension
    pub struct Dop2000Flags(u16) {
        /// Margins are hidden in page view
        const NO_MARG_PGVW_SAVED = 1 << 0 => no_marg_pgvw_saved;
        /// Document was repaired
        const BULLET_PROOFED = 1 << 4 => bullet_proofed;
        /// Ink annotations are saved
        const SAVE_UIM = 1 << 6 => save_uim;
        /// Personal information is removed on save
        const FILTER_PRIVACY = 1 << 7 => filter_privacy;
        /// The user saw the repair report
        const SEEN_REPAIRS = 1 << 9 => seen_repairs;
        /// Document contains XML markup
        const HAS_XML = 1 << 10 => has_xml;
        /// Validate XML against its schemas
        const VALIDATE_XML = 1 << 12 => validate_xml;
        /// Allow saving invalid XML
        const SAVE_INVALID_XML = 1 << 13 => save_invalid_xml;
        /// Show XML errors
        const SHOW_XML_ERRORS = 1 << 14 => show_xml_errors;
        /// Merge empty namespaces
        const ALWAYS_MERGE_EMPTY_NAMESPACE = 1 << 15 => always_merge_empty_namespace;
    }
}

/// Document properties as written by Word 2000 (`Dop2000`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dop2000 {
    /// The Word 97 properties
    pub dop97: Dop97,
    /// List level of the last bulleted list, 0-8
    pub ilvl_last_bullet_main: u8,
    /// List level of the last numbered list, 0-8
    pub ilvl_last_number_main: u8,
    /// Style applied by click-and-type
    pub istd_click_para_type: u16,
    /// Language auto-detection finished
    pub lad_all_done: bool,
    /// E-mail envelope is visible
    pub envelope_vis: bool,
    /// Lists may be tentative
    pub maybe_tentative_list_in_doc: bool,
    /// Text may use fit-text formatting
    pub maybe_fit_text: bool,
    /// Format consistency check finished
    pub fcc_all_done: bool,
    /// Web page options
    pub web: WebOptions,
    /// Document may contain East Asian layout
    pub maybe_fel: bool,
    /// Indents are in character units
    pub char_line_units: bool,
    /// Compatibility options
    pub copts: Copts,
    /// Compatibility version before Word 2002
    pub ver_compat_pre_w10: u16,
    /// Flag word closing the extension
    pub flags: Dop2000Flags,
}

impl Dop2000 {
    /// Size in bytes
    pub const SIZE: usize = 544;

    /// Decode the 544-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let dop97 = Dop97::decode(reader)?;

        let at = reader.position();
        let ilvl_last_bullet_main = reader.read_u8()?;
        check_range(ilvl_last_bullet_main as i64, 0, MAX_LIST_LEVEL, "ilvlLastBulletMain", at)?;
        let at = reader.position();
        let ilvl_last_number_main = reader.read_u8()?;
        check_range(ilvl_last_number_main as i64, 0, MAX_LIST_LEVEL, "ilvlLastNumberMain", at)?;
        let istd_click_para_type = reader.read_u16()?;

        let screen_at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let lad_all_done = bits.read_bit();
        let envelope_vis = bits.read_bit();
        let maybe_tentative_list_in_doc = bits.read_bit();
        let maybe_fit_text = bits.read_bit();
        bits.skip(4); // empty1
        let fcc_all_done = bits.read_bit();
        let rely_on_css = bits.read_bit();
        let rely_on_vml = bits.read_bit();
        let allow_png = bits.read_bit();
        let screen_size = bits.read_bits(4) as u8;
        bits.finish();

        let ppi_at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let organize_in_folder = bits.read_bit();
        let use_long_file_names = bits.read_bit();
        let pixels_per_inch = bits.read_bits(10) as u16;
        let initialized = bits.read_bit();
        let maybe_fel = bits.read_bit();
        let char_line_units = bits.read_bit();
        bits.skip(1); // unused
        bits.finish();

        if initialized {
            check_range(screen_size as i64, 0, MAX_SCREEN_SIZE, "screenSize", screen_at)?;
            check_range(
                pixels_per_inch as i64,
                MIN_PIXELS_PER_INCH,
                MAX_PIXELS_PER_INCH,
                "iPixelsPerInch",
                ppi_at,
            )?;
        }

        let copts = Copts::decode(reader)?;
        let ver_compat_pre_w10 = reader.read_u16()?;
        let flags = Dop2000Flags::decode(reader)?;

        Ok(Self {
            dop97,
            ilvl_last_bullet_main,
            ilvl_last_number_main,
            istd_click_para_type,
            lad_all_done,
            envelope_vis,
            maybe_tentative_list_in_doc,
            maybe_fit_text,
            fcc_all_done,
            web: WebOptions {
                organize_in_folder,
                use_long_file_names,
                pixels_per_inch,
                initialized,
                screen_size,
                rely_on_css,
                rely_on_vml,
                allow_png,
            },
            maybe_fel,
            char_line_units,
            copts,
            ver_compat_pre_w10,
            flags,
        })
    }
}
