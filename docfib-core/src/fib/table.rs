//! The offset/length table (`fibRgFcLcbBlob`) and its version chain
//!
//! `FibRgFcLcb97 ⊂ FibRgFcLcb2000 ⊂ FibRgFcLcb2002 ⊂ FibRgFcLcb2003 ⊂
//! FibRgFcLcb2007`. Each version stores the complete previous one as its
//! first field and appends new pairs; nothing earlier is moved or
//! reinterpreted.

use crate::context::{ContextFlag, Counter, DecodeContext};
use crate::fclcb::FcLcb;
use crate::fclcb::FcLcbRule::{
    AbsentWithoutCount, Ignored, Mandatory, MirrorsCount, RequiresFlag, Unchecked,
};
use crate::fclcb::TableEntry;
use crate::stream::FormatRead;
use crate::validate::ClosedCode;
use crate::Result;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

closed_code! {
    /// Format version, identified by its `nFib`
    pub enum FibVersion {
        /// Word 97
        Word97 = 0x00C1,
        /// Word 2000
        Word2000 = 0x00D9,
        /// Word 2002
        Word2002 = 0x0101,
        /// Word 2003
        Word2003 = 0x010C,
        /// Word 2007
        Word2007 = 0x0112,
    }
}

impl FibVersion {
    /// Every version, oldest first
    pub const ALL: [FibVersion; 5] = [
        FibVersion::Word97,
        FibVersion::Word2000,
        FibVersion::Word2002,
        FibVersion::Word2003,
        FibVersion::Word2007,
    ];

    /// The `nFib` value identifying this version
    pub fn n_fib(self) -> u16 {
        self.to_raw() as u16
    }

    /// Number of offset/length pairs (`cbRgFcLcb`)
    pub const fn cb_rg_fc_lcb(self) -> u16 {
        match self {
            FibVersion::Word97 => 0x005D,
            FibVersion::Word2000 => 0x006C,
            FibVersion::Word2002 => 0x0088,
            FibVersion::Word2003 => 0x00A4,
            FibVersion::Word2007 => 0x00B7,
        }
    }

    /// Number of 16-bit values in `fibRgCswNew` (`cswNew`)
    pub const fn csw_new(self) -> u16 {
        match self {
            FibVersion::Word97 => 0,
            FibVersion::Word2000 | FibVersion::Word2002 | FibVersion::Word2003 => 2,
            FibVersion::Word2007 => 5,
        }
    }

    /// The version whose table holds `cb` pairs
    pub fn from_cb_rg_fc_lcb(cb: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.cb_rg_fc_lcb() == cb)
    }
}

fc_lcb_table! {
    /// Offset/length pairs present since Word 97
    pub struct FibRgFcLcb97 {
        /// Original style sheet; undefined
        stshf_orig => Ignored,
        /// Style sheet (`STSH`)
        stshf => Mandatory,
        /// Footnote reference positions
        plcffnd_ref => MirrorsCount(Counter::Footnotes),
        /// Footnote text positions
        plcffnd_txt => MirrorsCount(Counter::Footnotes),
        /// Comment reference positions
        plcfand_ref => MirrorsCount(Counter::Comments),
        /// Comment text positions
        plcfand_txt => MirrorsCount(Counter::Comments),
        /// Section descriptors
        plcf_sed => Mandatory,
        /// Undefined; read for alignment only
        plc_pad => Ignored,
        /// Paragraph height cache
        plcf_phe => Unchecked,
        /// Glossary entry names
        sttbf_glsy => RequiresFlag(ContextFlag::Glossary),
        /// Glossary entry positions
        plcf_glsy => RequiresFlag(ContextFlag::Glossary),
        /// Header and footer story positions
        plcf_hdd => MirrorsCount(Counter::Headers),
        /// Character property bin table
        plcf_bte_chpx => Mandatory,
        /// Paragraph property bin table
        plcf_bte_papx => Mandatory,
        /// Undefined; read for alignment only
        plcf_sea => Ignored,
        /// Font table
        sttbf_ffn => Mandatory,
        /// Main document fields
        plcf_fld_mom => Unchecked,
        /// Header fields
        plcf_fld_hdr => AbsentWithoutCount(Counter::Headers),
        /// Footnote fields
        plcf_fld_ftn => AbsentWithoutCount(Counter::Footnotes),
        /// Comment fields
        plcf_fld_atn => AbsentWithoutCount(Counter::Comments),
        /// Undefined; read for alignment only
        plcf_fld_mcr => Ignored,
        /// Bookmark names
        sttbf_bkmk => Unchecked,
        /// Bookmark starts
        plcf_bkf => Unchecked,
        /// Bookmark ends
        plcf_bkl => Unchecked,
        /// Customizations
        cmds => Unchecked,
        /// Undefined; read for alignment only
        unused1 => Ignored,
        /// Undefined; read for alignment only
        sttbf_mcr => Ignored,
        /// Printer driver information
        pr_drvr => Unchecked,
        /// Portrait printer environment
        pr_env_port => Unchecked,
        /// Landscape printer environment
        pr_env_land => Unchecked,
        /// Window save state
        wss => Unchecked,
        /// Document properties
        dop => Mandatory,
        /// Associated strings
        sttbf_assoc => Unchecked,
        /// Piece table and property modifiers
        clx => Mandatory,
        /// Undefined; read for alignment only
        plcf_pgd_ftn => Ignored,
        /// Undefined; read for alignment only
        autosave_source => Ignored,
        /// Comment author names
        grp_xst_atn_owners => AbsentWithoutCount(Counter::Comments),
        /// Comment bookmark names
        sttbf_atn_bkmk => AbsentWithoutCount(Counter::Comments),
        /// Undefined; read for alignment only
        unused2 => Ignored,
        /// Undefined; read for alignment only
        unused3 => Ignored,
        /// Main document shape anchors
        plc_spa_mom => Unchecked,
        /// Header shape anchors
        plc_spa_hdr => Unchecked,
        /// Comment bookmark starts
        plcf_atn_bkf => AbsentWithoutCount(Counter::Comments),
        /// Comment bookmark ends
        plcf_atn_bkl => AbsentWithoutCount(Counter::Comments),
        /// Print merge state
        pms => Unchecked,
        /// Form field strings
        form_fld_sttbs => Unchecked,
        /// Endnote reference positions
        plcfend_ref => MirrorsCount(Counter::Endnotes),
        /// Endnote text positions
        plcfend_txt => MirrorsCount(Counter::Endnotes),
        /// Endnote fields
        plcf_fld_edn => AbsentWithoutCount(Counter::Endnotes),
        /// Undefined; read for alignment only
        unused4 => Ignored,
        /// Drawing group data
        dgg_info => Unchecked,
        /// Revision author names
        sttbf_rmark => Unchecked,
        /// Caption titles; templates only
        sttbf_caption => RequiresFlag(ContextFlag::Template),
        /// Automatic caption settings; templates only
        sttbf_auto_caption => RequiresFlag(ContextFlag::Template),
        /// Subdocument positions
        plcf_wkb => Unchecked,
        /// Spell check state
        plcf_spl => Unchecked,
        /// Text box story positions
        plcftxbx_txt => MirrorsCount(Counter::TextBoxes),
        /// Text box fields
        plcf_fld_txbx => AbsentWithoutCount(Counter::TextBoxes),
        /// Header text box story positions
        plcf_hdrtxbx_txt => MirrorsCount(Counter::HeaderTextBoxes),
        /// Header text box fields
        plcffld_hdr_txbx => AbsentWithoutCount(Counter::HeaderTextBoxes),
        /// Macro user storage
        stw_user => Unchecked,
        /// Embedded TrueType font data
        sttb_ttmbd => Unchecked,
        /// Cookie data
        cookie_data => Unchecked,
        /// Undefined; read for alignment only
        pgd_mother_old_old => Ignored,
        /// Undefined; read for alignment only
        bkd_mother_old_old => Ignored,
        /// Undefined; read for alignment only
        pgd_ftn_old_old => Ignored,
        /// Undefined; read for alignment only
        bkd_ftn_old_old => Ignored,
        /// Undefined; read for alignment only
        pgd_edn_old_old => Ignored,
        /// Undefined; read for alignment only
        bkd_edn_old_old => Ignored,
        /// Undefined; read for alignment only
        sttbf_intl_fld => Ignored,
        /// Routing slip
        route_slip => Unchecked,
        /// Save history authors
        sttb_saved_by => Unchecked,
        /// Referenced file names
        sttb_fnm => Unchecked,
        /// List formatting
        plf_lst => Unchecked,
        /// List overrides
        plf_lfo => Unchecked,
        /// Text box break descriptors
        plcf_txbx_bkd => MirrorsCount(Counter::TextBoxes),
        /// Header text box break descriptors
        plcf_txbx_hdr_bkd => MirrorsCount(Counter::HeaderTextBoxes),
        /// Undo/versioning data
        doc_undo_word9 => Unchecked,
        /// Undo usage data
        rgb_use => Unchecked,
        /// Undo usage data
        usp => Unchecked,
        /// Undo usage data
        uskf => Unchecked,
        /// Undo usage positions
        plcupc_rgb_use => Unchecked,
        /// Undo usage positions
        plcupc_usp => Unchecked,
        /// Glossary entry styles
        sttb_glsy_style => RequiresFlag(ContextFlag::Glossary),
        /// Grammar checker options
        plgosl => Unchecked,
        /// ActiveX control positions
        plcocx => Unchecked,
        /// Undefined; read for alignment only
        plcf_bte_lvc => Ignored,
        /// Legacy FILETIME split across the pair; undefined
        legacy_timestamp => Ignored,
        /// Undefined; read for alignment only
        plcf_lvc_pre10 => Ignored,
        /// AutoSummary levels
        plcf_asumy => Unchecked,
        /// Grammar check state
        plcf_gram => Unchecked,
        /// List names
        sttb_list_names => Unchecked,
        /// Undefined; read for alignment only
        sttbf_ussr => Ignored,
    }
}

fc_lcb_table! {
    /// Pairs appended by Word 2000
    pub struct FibRgFcLcb2000 extends FibRgFcLcb97 as rg97 {
        /// Table character cache
        plcf_tch => Unchecked,
        /// Mail threading data
        rmd_threading => Unchecked,
        /// Message id
        mid => Unchecked,
        /// Template path strings
        sttb_rgtplc => Unchecked,
        /// Mail envelope data
        mso_envelope => Unchecked,
        /// Language auto-detect state
        plcf_lad => Unchecked,
        /// Document feature records
        rg_dofr => Unchecked,
        /// Grammar options per language
        plcosl => Unchecked,
        /// Undefined; read for alignment only
        plcf_cookie_old => Ignored,
        /// Undefined; read for alignment only
        pgd_mother_old => Ignored,
        /// Undefined; read for alignment only
        bkd_mother_old => Ignored,
        /// Undefined; read for alignment only
        pgd_ftn_old => Ignored,
        /// Undefined; read for alignment only
        bkd_ftn_old => Ignored,
        /// Undefined; read for alignment only
        pgd_edn_old => Ignored,
        /// Undefined; read for alignment only
        bkd_edn_old => Ignored,
    }
}

fc_lcb_table! {
    /// Pairs appended by Word 2002
    pub struct FibRgFcLcb2002 extends FibRgFcLcb2000 as rg2000 {
        /// Undefined; read for alignment only
        unused2002_1 => Ignored,
        /// Paragraph group properties
        plcf_pgp => Unchecked,
        /// Ink positions
        plcfuim => Unchecked,
        /// Ink GUIDs
        plfguid_uim => Unchecked,
        /// Extended comment data
        atrd_extra => AbsentWithoutCount(Counter::Comments),
        /// Revision save ids
        plrsid => Unchecked,
        /// Smart tag bookmark names
        sttbf_bkmk_factoid => Unchecked,
        /// Smart tag bookmark starts
        plcf_bkf_factoid => Unchecked,
        /// Cookie positions
        plcfcookie => Unchecked,
        /// Smart tag bookmark ends
        plcf_bkl_factoid => Unchecked,
        /// Smart tag data
        factoid_data => Unchecked,
        /// Undo data
        doc_undo => Unchecked,
        /// Format consistency bookmark names
        sttbf_bkmk_fcc => Unchecked,
        /// Format consistency bookmark starts
        plcf_bkf_fcc => Unchecked,
        /// Format consistency bookmark ends
        plcf_bkl_fcc => Unchecked,
        /// Repair bookmark names
        sttbfbkmk_bp_repairs => Unchecked,
        /// Repair bookmark starts
        plcfbkf_bp_repairs => Unchecked,
        /// Repair bookmark ends
        plcfbkl_bp_repairs => Unchecked,
        /// Print merge state
        pms_new => Unchecked,
        /// Mail merge data source
        odso => Unchecked,
        /// Undefined; read for alignment only
        plcfpmi_old_xp => Ignored,
        /// Undefined; read for alignment only
        plcfpmi_new_xp => Ignored,
        /// Undefined; read for alignment only
        plcfpmi_mixed_xp => Ignored,
        /// Undefined; read for alignment only
        unused2002_2 => Ignored,
        /// Smart tag positions
        plcffactoid => Unchecked,
        /// Undefined; read for alignment only
        plcflvc_old_xp => Ignored,
        /// Undefined; read for alignment only
        plcflvc_new_xp => Ignored,
        /// Undefined; read for alignment only
        plcflvc_mixed_xp => Ignored,
    }
}

fc_lcb_table! {
    /// Pairs appended by Word 2003
    pub struct FibRgFcLcb2003 extends FibRgFcLcb2002 as rg2002 {
        /// XML schema references
        hplxsdr => Unchecked,
        /// Structured tag bookmark names
        sttbf_bkmk_sdt => Unchecked,
        /// Structured tag bookmark starts
        plcf_bkf_sdt => Unchecked,
        /// Structured tag bookmark ends
        plcf_bkl_sdt => Unchecked,
        /// Custom XML transform
        custom_x_form => Unchecked,
        /// Protection bookmark names
        sttbf_bkmk_prot => Unchecked,
        /// Protection bookmark starts
        plcf_bkf_prot => Unchecked,
        /// Protection bookmark ends
        plcf_bkl_prot => Unchecked,
        /// Protection user names
        sttb_prot_user => Unchecked,
        /// Undefined; read for alignment only
        unused2003 => Ignored,
        /// Paragraph mark info, old layout
        plcfpmi_old => Unchecked,
        /// Inline paragraph mark info, old layout
        plcfpmi_old_inline => Unchecked,
        /// Paragraph mark info, new layout
        plcfpmi_new => Unchecked,
        /// Inline paragraph mark info, new layout
        plcfpmi_new_inline => Unchecked,
        /// Line cache, old layout
        plcflvc_old => Unchecked,
        /// Inline line cache, old layout
        plcflvc_old_inline => Unchecked,
        /// Line cache, new layout
        plcflvc_new => Unchecked,
        /// Inline line cache, new layout
        plcflvc_new_inline => Unchecked,
        /// Main document page descriptors
        pgd_mother => Unchecked,
        /// Main document break descriptors
        bkd_mother => Unchecked,
        /// Main document layout data
        afd_mother => Unchecked,
        /// Footnote page descriptors
        pgd_ftn => AbsentWithoutCount(Counter::Footnotes),
        /// Footnote break descriptors
        bkd_ftn => AbsentWithoutCount(Counter::Footnotes),
        /// Footnote layout data
        afd_ftn => AbsentWithoutCount(Counter::Footnotes),
        /// Endnote page descriptors
        pgd_edn => AbsentWithoutCount(Counter::Endnotes),
        /// Endnote break descriptors
        bkd_edn => AbsentWithoutCount(Counter::Endnotes),
        /// Endnote layout data
        afd_edn => AbsentWithoutCount(Counter::Endnotes),
        /// Layout data
        afd => Unchecked,
    }
}

fc_lcb_table! {
    /// Pairs appended by Word 2007
    pub struct FibRgFcLcb2007 extends FibRgFcLcb2003 as rg2003 {
        /// Math settings positions
        plcfmthd => Unchecked,
        /// Move-from bookmark names
        sttbf_bkmk_move_from => Unchecked,
        /// Move-from bookmark starts
        plcf_bkf_move_from => Unchecked,
        /// Move-from bookmark ends
        plcf_bkl_move_from => Unchecked,
        /// Move-to bookmark names
        sttbf_bkmk_move_to => Unchecked,
        /// Move-to bookmark starts
        plcf_bkf_move_to => Unchecked,
        /// Move-to bookmark ends
        plcf_bkl_move_to => Unchecked,
        /// Undefined; read for alignment only
        unused2007_1 => Ignored,
        /// Undefined; read for alignment only
        unused2007_2 => Ignored,
        /// Undefined; read for alignment only
        unused2007_3 => Ignored,
        /// Art object bookmark names
        sttbf_bkmk_arto => Unchecked,
        /// Art object bookmark starts
        plcf_bkf_arto => Unchecked,
        /// Art object bookmark ends
        plcf_bkl_arto => Unchecked,
        /// Art object data
        arto_data => Unchecked,
        /// Undefined; read for alignment only
        unused2007_4 => Ignored,
        /// Undefined; read for alignment only
        unused2007_5 => Ignored,
        /// Undefined; read for alignment only
        unused2007_6 => Ignored,
        /// Theme data
        oss_theme => Unchecked,
        /// Color scheme mapping
        color_scheme_mapping => Unchecked,
    }
}

impl FibRgFcLcb97 {
    /// The legacy FILETIME stored in place of a pair (low word in `fc`)
    pub fn legacy_timestamp_raw(&self) -> u64 {
        ((self.legacy_timestamp.lcb as u64) << 32) | self.legacy_timestamp.fc as u64
    }
}

/// The decoded table, tagged with the terminal version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FibRgFcLcb {
    /// Word 97 table
    V97(FibRgFcLcb97),
    /// Word 2000 table
    V2000(FibRgFcLcb2000),
    /// Word 2002 table
    V2002(FibRgFcLcb2002),
    /// Word 2003 table
    V2003(FibRgFcLcb2003),
    /// Word 2007 table
    V2007(FibRgFcLcb2007),
}

impl FibRgFcLcb {
    /// Decode the table up to and including `version`
    pub fn decode<R: FormatRead + ?Sized>(
        reader: &mut R,
        version: FibVersion,
        ctx: &DecodeContext,
    ) -> Result<Self> {
        #[cfg(feature = "logging")]
        debug!(
            "Decoding {} offset/length pairs for {:?}",
            version.cb_rg_fc_lcb(),
            version
        );

        Ok(match version {
            FibVersion::Word97 => FibRgFcLcb::V97(FibRgFcLcb97::decode(reader, ctx)?),
            FibVersion::Word2000 => FibRgFcLcb::V2000(FibRgFcLcb2000::decode(reader, ctx)?),
            FibVersion::Word2002 => FibRgFcLcb::V2002(FibRgFcLcb2002::decode(reader, ctx)?),
            FibVersion::Word2003 => FibRgFcLcb::V2003(FibRgFcLcb2003::decode(reader, ctx)?),
            FibVersion::Word2007 => FibRgFcLcb::V2007(FibRgFcLcb2007::decode(reader, ctx)?),
        })
    }

    /// The terminal version
    pub fn version(&self) -> FibVersion {
        match self {
            FibRgFcLcb::V97(_) => FibVersion::Word97,
            FibRgFcLcb::V2000(_) => FibVersion::Word2000,
            FibRgFcLcb::V2002(_) => FibVersion::Word2002,
            FibRgFcLcb::V2003(_) => FibVersion::Word2003,
            FibRgFcLcb::V2007(_) => FibVersion::Word2007,
        }
    }

    /// The Word 97 pairs, present in every version
    pub fn rg97(&self) -> &FibRgFcLcb97 {
        match self {
            FibRgFcLcb::V97(t) => t,
            FibRgFcLcb::V2000(t) => &t.rg97,
            FibRgFcLcb::V2002(t) => &t.rg2000.rg97,
            FibRgFcLcb::V2003(t) => &t.rg2002.rg2000.rg97,
            FibRgFcLcb::V2007(t) => &t.rg2003.rg2002.rg2000.rg97,
        }
    }

    /// The Word 2000 pairs, if the table is at least that version
    pub fn rg2000(&self) -> Option<&FibRgFcLcb2000> {
        match self {
            FibRgFcLcb::V97(_) => None,
            FibRgFcLcb::V2000(t) => Some(t),
            FibRgFcLcb::V2002(t) => Some(&t.rg2000),
            FibRgFcLcb::V2003(t) => Some(&t.rg2002.rg2000),
            FibRgFcLcb::V2007(t) => Some(&t.rg2003.rg2002.rg2000),
        }
    }

    /// The Word 2002 pairs, if the table is at least that version
    pub fn rg2002(&self) -> Option<&FibRgFcLcb2002> {
        match self {
            FibRgFcLcb::V2002(t) => Some(t),
            FibRgFcLcb::V2003(t) => Some(&t.rg2002),
            FibRgFcLcb::V2007(t) => Some(&t.rg2003.rg2002),
            _ => None,
        }
    }

    /// The Word 2003 pairs, if the table is at least that version
    pub fn rg2003(&self) -> Option<&FibRgFcLcb2003> {
        match self {
            FibRgFcLcb::V2003(t) => Some(t),
            FibRgFcLcb::V2007(t) => Some(&t.rg2003),
            _ => None,
        }
    }

    /// The Word 2007 pairs, if the table is that version
    pub fn rg2007(&self) -> Option<&FibRgFcLcb2007> {
        match self {
            FibRgFcLcb::V2007(t) => Some(t),
            _ => None,
        }
    }

    /// Every entry in stream order
    pub fn entries(&self) -> Vec<TableEntry> {
        match self {
            FibRgFcLcb::V97(t) => t.entries(),
            FibRgFcLcb::V2000(t) => t.entries(),
            FibRgFcLcb::V2002(t) => t.entries(),
            FibRgFcLcb::V2003(t) => t.entries(),
            FibRgFcLcb::V2007(t) => t.entries(),
        }
    }

    /// Name/descriptor table pairs whose element counts must match
    ///
    /// Element counts are only known after parsing the variable-length
    /// contents, so the check belongs to the reader that materializes both
    /// tables. Only pairs where both entries are present are returned.
    pub fn deferred_pairs(&self) -> Vec<DeferredPair> {
        let mut pairs = Vec::new();
        let mut push = |names: &'static str, starts: &'static str, a: FcLcb, b: FcLcb| {
            if a.is_present() && b.is_present() {
                pairs.push(DeferredPair {
                    names,
                    starts,
                    names_entry: a,
                    starts_entry: b,
                });
            }
        };

        let t = self.rg97();
        push("sttbf_bkmk", "plcf_bkf", t.sttbf_bkmk, t.plcf_bkf);
        push("sttbf_atn_bkmk", "plcf_atn_bkf", t.sttbf_atn_bkmk, t.plcf_atn_bkf);
        if let Some(t) = self.rg2002() {
            push("sttbf_bkmk_factoid", "plcf_bkf_factoid", t.sttbf_bkmk_factoid, t.plcf_bkf_factoid);
            push("sttbf_bkmk_fcc", "plcf_bkf_fcc", t.sttbf_bkmk_fcc, t.plcf_bkf_fcc);
            push("sttbfbkmk_bp_repairs", "plcfbkf_bp_repairs", t.sttbfbkmk_bp_repairs, t.plcfbkf_bp_repairs);
        }
        if let Some(t) = self.rg2003() {
            push("sttbf_bkmk_sdt", "plcf_bkf_sdt", t.sttbf_bkmk_sdt, t.plcf_bkf_sdt);
            push("sttbf_bkmk_prot", "plcf_bkf_prot", t.sttbf_bkmk_prot, t.plcf_bkf_prot);
        }
        if let Some(t) = self.rg2007() {
            push("sttbf_bkmk_move_from", "plcf_bkf_move_from", t.sttbf_bkmk_move_from, t.plcf_bkf_move_from);
            push("sttbf_bkmk_move_to", "plcf_bkf_move_to", t.sttbf_bkmk_move_to, t.plcf_bkf_move_to);
            push("sttbf_bkmk_arto", "plcf_bkf_arto", t.sttbf_bkmk_arto, t.plcf_bkf_arto);
        }
        pairs
    }
}

/// Two tables whose element counts must agree, checked by their consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeferredPair {
    /// Name of the string table entry
    pub names: &'static str,
    /// Name of the position table entry
    pub starts: &'static str,
    /// Location of the string table
    pub names_entry: FcLcb,
    /// Location of the position table
    pub starts_entry: FcLcb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_counts_match_cb_rg_fc_lcb() {
        assert_eq!(FibRgFcLcb97::PAIR_COUNT, 0x5D);
        assert_eq!(FibRgFcLcb2000::PAIR_COUNT, 0x6C);
        assert_eq!(FibRgFcLcb2002::PAIR_COUNT, 0x88);
        assert_eq!(FibRgFcLcb2003::PAIR_COUNT, 0xA4);
        assert_eq!(FibRgFcLcb2007::PAIR_COUNT, 0xB7);
        assert_eq!(FibRgFcLcb2007::SIZE, 0xB7 * 8);
    }

    #[test]
    fn test_field_names_are_ordered_and_complete() {
        let names = FibRgFcLcb2007::field_names();
        assert_eq!(names.len(), FibRgFcLcb2007::PAIR_COUNT);
        assert_eq!(names[0], "stshf_orig");
        assert_eq!(names[1], "stshf");
        assert_eq!(names[31], "dop");
        assert_eq!(names[33], "clx");
        assert_eq!(names[0x5D], "plcf_tch");
        assert_eq!(names[0xB6], "color_scheme_mapping");
    }

    #[test]
    fn test_field_names_are_unique() {
        let names = FibRgFcLcb2007::field_names();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[..i].contains(name), "{} repeats at {}", name, i);
        }
        let pgd = names.iter().position(|n| *n == "pgd_ftn_old").unwrap();
        assert!(pgd >= FibRgFcLcb97::PAIR_COUNT);
        assert!(names.iter().position(|n| *n == "pgd_ftn_old_old").unwrap() < FibRgFcLcb97::PAIR_COUNT);
    }

    #[test]
    fn test_version_lookup() {
        for v in FibVersion::ALL {
            assert_eq!(FibVersion::from_cb_rg_fc_lcb(v.cb_rg_fc_lcb()), Some(v));
            assert_eq!(FibVersion::from_raw(v.n_fib() as u32), Some(v));
        }
        assert_eq!(FibVersion::from_cb_rg_fc_lcb(0x5E), None);
        assert_eq!(FibVersion::from_raw(0x00C0), None);
    }

    #[test]
    fn test_legacy_timestamp_joins_halves() {
        let ctx = DecodeContext::default();
        let mut data = alloc::vec![0u8; FibRgFcLcb97::SIZE];
        for name in ["stshf", "plcf_sed", "plcf_bte_chpx", "plcf_bte_papx", "sttbf_ffn", "dop", "clx"] {
            let idx = FibRgFcLcb97::OWN_FIELDS.iter().position(|n| *n == name).unwrap();
            data[idx * 8 + 4] = 1;
        }
        let ts = FibRgFcLcb97::OWN_FIELDS
            .iter()
            .position(|n| *n == "legacy_timestamp")
            .unwrap();
        data[ts * 8..ts * 8 + 8].copy_from_slice(&0x01D2_3456_789A_BCDEu64.to_le_bytes());
        let mut cur = crate::stream::SliceCursor::new(data);
        let t = FibRgFcLcb97::decode(&mut cur, &ctx).unwrap();
        assert_eq!(t.legacy_timestamp_raw(), 0x01D2_3456_789A_BCDE);
    }
}
