//! Decoding context threaded through table decoders
//!
//! Later fields of the header are only meaningful relative to counters and
//! flags decoded earlier. Those values are collected into a [`DecodeContext`]
//! and passed by reference; nothing is kept in global state.

use crate::fib::{FibBase, FibRgLw97};
use core::fmt;
use serde::{Deserialize, Serialize};

/// A character counter an offset/length entry can mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Counter {
    /// Main document text (`ccpText`)
    MainText,
    /// Footnote text (`ccpFtn`)
    Footnotes,
    /// Header and footer text (`ccpHdd`)
    Headers,
    /// Comment text (`ccpAtn`)
    Comments,
    /// Endnote text (`ccpEdn`)
    Endnotes,
    /// Main document text boxes (`ccpTxbx`)
    TextBoxes,
    /// Header text boxes (`ccpHdrTxbx`)
    HeaderTextBoxes,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Counter::MainText => "ccpText",
            Counter::Footnotes => "ccpFtn",
            Counter::Headers => "ccpHdd",
            Counter::Comments => "ccpAtn",
            Counter::Endnotes => "ccpEdn",
            Counter::TextBoxes => "ccpTxbx",
            Counter::HeaderTextBoxes => "ccpHdrTxbx",
        };
        f.write_str(name)
    }
}

/// A document flag an offset/length entry can be gated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextFlag {
    /// Document is a glossary (AutoText) container (`fGlsy`)
    Glossary,
    /// Document is a template (`fDot`)
    Template,
}

impl fmt::Display for ContextFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextFlag::Glossary => f.write_str("fGlsy"),
            ContextFlag::Template => f.write_str("fDot"),
        }
    }
}

/// Counters and flags already decoded from the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeContext {
    /// Characters in the main document
    pub ccp_text: u32,
    /// Characters in the footnote subdocument
    pub ccp_ftn: u32,
    /// Characters in the header subdocument
    pub ccp_hdd: u32,
    /// Characters in the comment subdocument
    pub ccp_atn: u32,
    /// Characters in the endnote subdocument
    pub ccp_edn: u32,
    /// Characters in the main text box subdocument
    pub ccp_txbx: u32,
    /// Characters in the header text box subdocument
    pub ccp_hdr_txbx: u32,
    /// Document is a glossary container
    pub glossary: bool,
    /// Document is a template
    pub template: bool,
}

impl DecodeContext {
    /// Collect the context from the records that precede the table
    pub fn from_header(base: &FibBase, counts: &FibRgLw97) -> Self {
        Self {
            ccp_text: counts.ccp_text,
            ccp_ftn: counts.ccp_ftn,
            ccp_hdd: counts.ccp_hdd,
            ccp_atn: counts.ccp_atn,
            ccp_edn: counts.ccp_edn,
            ccp_txbx: counts.ccp_txbx,
            ccp_hdr_txbx: counts.ccp_hdr_txbx,
            glossary: base.flags.glossary,
            template: base.flags.template,
        }
    }

    /// Value of `counter`
    pub fn count(&self, counter: Counter) -> u32 {
        match counter {
            Counter::MainText => self.ccp_text,
            Counter::Footnotes => self.ccp_ftn,
            Counter::Headers => self.ccp_hdd,
            Counter::Comments => self.ccp_atn,
            Counter::Endnotes => self.ccp_edn,
            Counter::TextBoxes => self.ccp_txbx,
            Counter::HeaderTextBoxes => self.ccp_hdr_txbx,
        }
    }

    /// Value of `flag`
    pub fn flag(&self, flag: ContextFlag) -> bool {
        match flag {
            ContextFlag::Glossary => self.glossary,
            ContextFlag::Template => self.template,
        }
    }

    /// Copy of this context with `counter` replaced
    pub fn with_count(mut self, counter: Counter, value: u32) -> Self {
        let slot = match counter {
            Counter::MainText => &mut self.ccp_text,
            Counter::Footnotes => &mut self.ccp_ftn,
            Counter::Headers => &mut self.ccp_hdd,
            Counter::Comments => &mut self.ccp_atn,
            Counter::Endnotes => &mut self.ccp_edn,
            Counter::TextBoxes => &mut self.ccp_txbx,
            Counter::HeaderTextBoxes => &mut self.ccp_hdr_txbx,
        };
        *slot = value;
        self
    }

    /// Copy of this context with `flag` replaced
    pub fn with_flag(mut self, flag: ContextFlag, value: bool) -> Self {
        match flag {
            ContextFlag::Glossary => self.glossary = value,
            ContextFlag::Template => self.template = value,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_touch_one_slot() {
        let ctx = DecodeContext::default()
            .with_count(Counter::Footnotes, 37)
            .with_flag(ContextFlag::Template, true);
        assert_eq!(ctx.count(Counter::Footnotes), 37);
        assert_eq!(ctx.count(Counter::Comments), 0);
        assert!(ctx.flag(ContextFlag::Template));
        assert!(!ctx.flag(ContextFlag::Glossary));
    }
}
