//! Compatibility options: `Copts60 ⊂ Copts80 ⊂ Copts`
//!
//! Every bit pattern is legal; these records never fail on content.

use crate::stream::FormatRead;
use crate::Result;
use serde::{Deserialize, Serialize};

bit_flags! {
    /// Compatibility options written since Word 6 (`Copts60`)
    pub struct Copts60(u16) {
        /// Don't add an automatic tab stop for a hanging indent
        const NO_TAB_FOR_IND = 1 << 0 => no_tab_for_ind;
        /// Don't add extra space for raised or lowered characters
        const NO_SPACE_RAISE_LOWER = 1 << 1 => no_space_raise_lower;
        /// Suppress paragraph space before after a page break
        const SUPPRESS_SP_BF_AFTER_PG_BRK = 1 << 2 => suppress_sp_bf_after_pg_brk;
        /// Wrap trailing spaces onto the next line
        const WRAP_TRAIL_SPACES = 1 << 3 => wrap_trail_spaces;
        /// Print colors as black on non-color printers
        const MAP_PRINT_TEXT_COLOR = 1 << 4 => map_print_text_color;
        /// Don't balance columns before section breaks
        const NO_COLUMN_BALANCE = 1 << 5 => no_column_balance;
        /// Treat `\"` as `""` in mail merge data
        const CONV_MAIL_MERGE_ESC = 1 << 6 => conv_mail_merge_esc;
        /// Suppress extra line spacing at the top of the page
        const SUPPRESS_TOP_SPACING = 1 << 7 => suppress_top_spacing;
        /// Combine table borders like Word 5.x for the Macintosh
        const ORIG_WORD_TABLE_RULES = 1 << 8 => orig_word_table_rules;
        /// Show hard page or column breaks in frames
        const SHOW_BREAKS_IN_FRAMES = 1 << 10 => show_breaks_in_frames;
        /// Swap left and right borders on odd facing pages
        const SWAP_BORDERS_FACING_PGS = 1 << 11 => swap_borders_facing_pgs;
        /// Don't convert backslash characters into yen signs
        const LEAVE_BACKSLASH_ALONE = 1 << 12 => leave_backslash_alone;
        /// Expand character spaces on a line ending with a line break
        const EXP_SH_RTN = 1 << 13 => exp_sh_rtn;
        /// Don't underline trailing spaces
        const DNT_UL_TRL_SPC = 1 << 14 => dnt_ul_trl_spc;
        /// Don't balance SBCS and DBCS characters
        const DNT_BLN_SB_DB_WID = 1 << 15 => dnt_bln_sb_db_wid;
    }
}

bit_flags! {
    /// The word Word 97 appended to [`Copts60`]
    pub struct Copts80Flags(u16) {
        /// Suppress extra line spacing like Word 5.x for the Macintosh
        const SUPPRESS_TOP_SPACING_MAC5 = 1 << 0 => suppress_top_spacing_mac5;
        /// Truncate expanded character spacing
        const TRUNC_DXA_EXPAND = 1 << 1 => trunc_dxa_expand;
        /// Print the body text before headers and footers
        const PRINT_BODY_BEFORE_HDR = 1 << 2 => print_body_before_hdr;
        /// Don't add leading between lines
        const NO_EXT_LEADING = 1 << 3 => no_ext_leading;
        /// Don't make space for underlines
        const DONT_MAKE_SPACE_FOR_UL = 1 << 4 => dont_make_space_for_ul;
        /// Small caps like Word 5.x for the Macintosh
        const MW_SMALL_CAPS = 1 << 5 => mw_small_caps;
        /// Only add 2 points of leading
        const EXT_LEADING_2PT_ONLY = 1 << 6 => ext_leading_2pt_only;
        /// Truncate font heights
        const TRUNC_FONT_HEIGHT = 1 << 7 => trunc_font_height;
        /// Substitute fonts by size
        const SUB_ON_SIZE = 1 << 8 => sub_on_size;
        /// Wrap lines like Word 6.0
        const LINE_WRAP_LIKE_WORD6 = 1 << 9 => line_wrap_like_word6;
        /// Border rules like Word 6.x
        const WW6_BORDER_RULES = 1 << 10 => ww6_border_rules;
        /// Don't center exact line height lines
        const EXACT_ON_TOP = 1 << 11 => exact_on_top;
        /// Don't add space after paragraphs
        const EXTRA_AFTER = 1 << 12 => extra_after;
        /// Set the width of a space like WordPerfect 5.x
        const WP_SPACE = 1 << 13 => wp_space;
        /// Justify like WordPerfect 6.x
        const WP_JUST = 1 << 14 => wp_just;
        /// Use printer metrics to lay out the document
        const PRINT_MET = 1 << 15 => print_met;
    }
}

/// Compatibility options written since Word 97 (`Copts80`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copts80 {
    /// The Word 6 options
    pub copts60: Copts60,
    /// Options added by Word 97
    pub flags: Copts80Flags,
}

impl Copts80 {
    /// Size in bytes
    pub const SIZE: usize = 4;

    /// Decode the 4-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            copts60: Copts60::decode(reader)?,
            flags: Copts80Flags::decode(reader)?,
        })
    }
}

bit_flags! {
    /// Layout compatibility options added by Word 2000 through 2003
    pub struct CompatLayoutFlags(u32) {
        /// Lay out AutoShapes like Word 97
        const SP_LAYOUT_LIKE_WW8 = 1 << 0 => sp_layout_like_ww8;
        /// Lay out footnotes like Word 6.x/95/97
        const FTN_LAYOUT_LIKE_WW8 = 1 << 1 => ftn_layout_like_ww8;
        /// Don't use HTML paragraph auto spacing
        const DONT_USE_HTML_PARAGRAPH_AUTO_SPACING = 1 << 2 => dont_use_html_paragraph_auto_spacing;
        /// Don't adjust line height in tables
        const DONT_ADJUST_LINE_HEIGHT_IN_TABLE = 1 << 3 => dont_adjust_line_height_in_table;
        /// Forget the last tab alignment
        const FORGET_LAST_TAB_ALIGN = 1 << 4 => forget_last_tab_align;
        /// Use line-breaking rules for full-width Latin characters
        const USE_AUTOSPACE_FOR_FULL_WIDTH_ALPHA = 1 << 5 => use_autospace_for_full_width_alpha;
        /// Align table rows independently
        const ALIGN_TABLES_ROW_BY_ROW = 1 << 6 => align_tables_row_by_row;
        /// Lay out tables with raw width
        const LAYOUT_RAW_TABLE_WIDTH = 1 << 7 => layout_raw_table_width;
        /// Allow table rows to lay out apart
        const LAYOUT_TABLE_ROWS_APART = 1 << 8 => layout_table_rows_apart;
        /// Use Word 97 line-breaking rules for East Asian text
        const USE_WORD97_LINE_BREAKING_RULES = 1 << 9 => use_word97_line_breaking_rules;
        /// Don't break wrapped tables across pages
        const DONT_BREAK_WRAPPED_TABLES = 1 << 10 => dont_break_wrapped_tables;
        /// Don't snap text to the grid inside table cells
        const DONT_SNAP_TO_GRID_IN_CELL = 1 << 11 => dont_snap_to_grid_in_cell;
        /// Select the entire field with its first or last character
        const DONT_ALLOW_FIELD_END_SELECT = 1 << 12 => dont_allow_field_end_select;
        /// Apply breaking rules
        const APPLY_BREAKING_RULES = 1 << 13 => apply_breaking_rules;
        /// Don't wrap text with punctuation
        const DONT_WRAP_TEXT_WITH_PUNCT = 1 << 14 => dont_wrap_text_with_punct;
        /// Don't use East Asian line-breaking rules
        const DONT_USE_ASIAN_BREAK_RULES = 1 << 15 => dont_use_asian_break_rules;
        /// Use Word 2002 table style rules
        const USE_WORD2002_TABLE_STYLE_RULES = 1 << 16 => use_word2002_table_style_rules;
        /// Allow tables to autofit into the page margins
        const GROW_AUTO_FIT = 1 << 17 => grow_auto_fit;
        /// Use the Normal style instead of List Paragraph for bullets
        const USE_NORMAL_STYLE_FOR_LIST = 1 << 18 => use_normal_style_for_list;
        /// Don't use the hanging indent as a numbering tab stop
        const DONT_USE_INDENT_AS_NUMBERING_TAB_STOP = 1 << 19 => dont_use_indent_as_numbering_tab_stop;
        /// Use Word 2003 East Asian line breaking
        const FE_LINE_BREAK11 = 1 << 20 => fe_line_break11;
        /// Allow space between paragraphs of the same style in tables
        const ALLOW_SPACE_OF_SAME_STYLE_IN_TABLE = 1 << 21 => allow_space_of_same_style_in_table;
        /// Use Word 2003 indent rules
        const WW11_INDENT_RULES = 1 << 22 => ww11_indent_rules;
        /// Don't autofit constrained tables
        const DONT_AUTOFIT_CONSTRAINED_TABLES = 1 << 23 => dont_autofit_constrained_tables;
        /// Autofit tables like Word 2003
        const AUTOFIT_LIKE_WW11 = 1 << 24 => autofit_like_ww11;
        /// Underline the tab after a list number
        const UNDERLINE_TAB_IN_NUM_LIST = 1 << 25 => underline_tab_in_num_list;
        /// Hangul width like Word 2003
        const HANGUL_WIDTH_LIKE_WW11 = 1 << 26 => hangul_width_like_ww11;
        /// Split page breaks and paragraph marks
        const SPLIT_PG_BREAK_AND_PARA_MARK = 1 << 27 => split_pg_break_and_para_mark;
        /// Don't vertically align cells containing shapes
        const DONT_VERT_ALIGN_CELL_WITH_SP = 1 << 28 => dont_vert_align_cell_with_sp;
        /// Don't break constrained tables forced onto the page
        const DONT_BREAK_CONSTRAINED_FORCED_TABLES = 1 << 29 => dont_break_constrained_forced_tables;
        /// Don't vertically align text in text boxes
        const DONT_VERT_ALIGN_IN_TXBX = 1 << 30 => dont_vert_align_in_txbx;
        /// Use Word 2003 kerning pairs
        const WORD11_KERNING_PAIRS = 1 << 31 => word11_kerning_pairs;
    }
}

bit_flags! {
    /// The second option word of [`Copts`]
    pub struct CompatCacheFlags(u32) {
        /// Column balance information is cached
        const CACHED_COL_BALANCE = 1 << 0 => cached_col_balance;
    }
}

/// Full compatibility options (`Copts`), written since Word 2000
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copts {
    /// The Word 97 options
    pub copts80: Copts80,
    /// Layout options
    pub layout: CompatLayoutFlags,
    /// Cache options
    pub cache: CompatCacheFlags,
}

impl Copts {
    /// Size in bytes
    pub const SIZE: usize = 32;

    /// Decode the 32-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let copts80 = Copts80::decode(reader)?;
        let layout = CompatLayoutFlags::decode(reader)?;
        let cache = CompatCacheFlags::decode(reader)?;
        reader.skip(20)?; // empty1..empty5
        Ok(Self {
            copts80,
            layout,
            cache,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::SliceCursor;

    #[test]
    fn test_copts60_named_bits() {
        let c = Copts60::new(Copts60::NO_TAB_FOR_IND | Copts60::DNT_BLN_SB_DB_WID);
        assert!(c.no_tab_for_ind());
        assert!(c.dnt_bln_sb_db_wid());
        assert!(!c.wrap_trail_spaces());
        assert_eq!(c.raw(), 0x8001);
    }

    #[test]
    fn test_every_raw_value_preserved() {
        for raw in [0u16, 0x0200, 0x5555, 0xAAAA, 0xFFFF] {
            let mut cur = SliceCursor::new(raw.to_le_bytes().to_vec());
            assert_eq!(Copts60::decode(&mut cur).unwrap().raw(), raw);
        }
    }

    #[test]
    fn test_copts_chain_prefix() {
        let mut data = vec![0xFFu8; Copts::SIZE];
        data[0..4].copy_from_slice(&[0x01, 0x80, 0x00, 0x02]);
        let full = Copts::decode(&mut SliceCursor::new(data.clone())).unwrap();
        let prefix = Copts80::decode(&mut SliceCursor::new(data)).unwrap();
        assert_eq!(full.copts80, prefix);
        assert!(full.copts80.flags.line_wrap_like_word6());
        assert_eq!(full.layout.raw(), u32::MAX);
        assert!(full.cache.cached_col_balance());
    }
}
