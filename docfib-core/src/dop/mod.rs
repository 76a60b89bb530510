//! Document properties (DOP)
//!
//! `DopBase ⊂ Dop95 ⊂ Dop97 ⊂ Dop2000 ⊂ Dop2002 ⊂ Dop2003 ⊂ Dop2007`.
//! The version written is implied by the FIB's version; [`decode_dop`]
//! locates the record through the `dop` offset/length pair and picks it.

mod base;
mod copts;
mod dop2000;
mod dop2002;
mod dop2003;
mod dop2007;
mod dop97;
mod layout;
mod typography;

pub use base::{
    DocStats, DopBase, DopFlags, Dop95, EndnotePosition, FootnotePosition, NoteNumbering,
    NoteRestart, ViewKind, ZoomKind,
};
pub use copts::{CompatCacheFlags, CompatLayoutFlags, Copts, Copts60, Copts80, Copts80Flags};
pub use dop2000::{Dop2000, Dop2000Flags, WebOptions};
pub use dop2002::{Dop2002, Dop2002Flags, FormatFilter, RevisionMinimums};
pub use dop2003::{Dop2003, Dop2003Flags, ProtectionKind};
pub use dop2007::{
    Dop2007, DopMth, MathBreak, MathBreakSub, MathJustification, StyleSortMethod,
};
pub use dop97::{DocEvents, DocumentType, Dop97, OutlineLevel, VirusState};
pub use layout::{Asumyi, Dogrid};
pub use typography::{
    CustomKinsokuLanguage, DopTypography, Justification, KinsokuLevel, MAX_FOLLOWING_PUNCT,
    MAX_LEADING_PUNCT,
};

use crate::error::{FibError, Violation};
use crate::fib::{Fib, FibVersion};
use crate::stream::{FormatRead, SliceCursor};
use crate::Result;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// Which DOP layout to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DopVersion {
    /// `DopBase`
    Word6,
    /// `Dop95`
    Word95,
    /// `Dop97`
    Word97,
    /// `Dop2000`
    Word2000,
    /// `Dop2002`
    Word2002,
    /// `Dop2003`
    Word2003,
    /// `Dop2007`
    Word2007,
}

impl DopVersion {
    /// Size of the layout in bytes
    pub const fn size(self) -> usize {
        match self {
            DopVersion::Word6 => DopBase::SIZE,
            DopVersion::Word95 => Dop95::SIZE,
            DopVersion::Word97 => Dop97::SIZE,
            DopVersion::Word2000 => Dop2000::SIZE,
            DopVersion::Word2002 => Dop2002::SIZE,
            DopVersion::Word2003 => Dop2003::SIZE,
            DopVersion::Word2007 => Dop2007::SIZE,
        }
    }
}

impl From<FibVersion> for DopVersion {
    fn from(version: FibVersion) -> Self {
        match version {
            FibVersion::Word97 => DopVersion::Word97,
            FibVersion::Word2000 => DopVersion::Word2000,
            FibVersion::Word2002 => DopVersion::Word2002,
            FibVersion::Word2003 => DopVersion::Word2003,
            FibVersion::Word2007 => DopVersion::Word2007,
        }
    }
}

/// A decoded DOP of any version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dop {
    /// Word 6 layout
    Base(DopBase),
    /// Word 95 layout
    V95(Dop95),
    /// Word 97 layout
    V97(Dop97),
    /// Word 2000 layout
    V2000(Dop2000),
    /// Word 2002 layout
    V2002(Dop2002),
    /// Word 2003 layout
    V2003(Dop2003),
    /// Word 2007 layout
    V2007(Dop2007),
}

impl Dop {
    /// Decode the layout named by `version`
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R, version: DopVersion) -> Result<Self> {
        Ok(match version {
            DopVersion::Word6 => Dop::Base(DopBase::decode(reader)?),
            DopVersion::Word95 => Dop::V95(Dop95::decode(reader)?),
            DopVersion::Word97 => Dop::V97(Dop97::decode(reader)?),
            DopVersion::Word2000 => Dop::V2000(Dop2000::decode(reader)?),
            DopVersion::Word2002 => Dop::V2002(Dop2002::decode(reader)?),
            DopVersion::Word2003 => Dop::V2003(Dop2003::decode(reader)?),
            DopVersion::Word2007 => Dop::V2007(Dop2007::decode(reader)?),
        })
    }

    /// The decoded layout
    pub fn version(&self) -> DopVersion {
        match self {
            Dop::Base(_) => DopVersion::Word6,
            Dop::V95(_) => DopVersion::Word95,
            Dop::V97(_) => DopVersion::Word97,
            Dop::V2000(_) => DopVersion::Word2000,
            Dop::V2002(_) => DopVersion::Word2002,
            Dop::V2003(_) => DopVersion::Word2003,
            Dop::V2007(_) => DopVersion::Word2007,
        }
    }

    /// The Word 6 properties, present in every version
    pub fn base(&self) -> &DopBase {
        match self {
            Dop::Base(d) => d,
            Dop::V95(d) => &d.base,
            Dop::V97(d) => &d.dop95.base,
            Dop::V2000(d) => &d.dop97.dop95.base,
            Dop::V2002(d) => &d.dop2000.dop97.dop95.base,
            Dop::V2003(d) => &d.dop2002.dop2000.dop97.dop95.base,
            Dop::V2007(d) => &d.dop2003.dop2002.dop2000.dop97.dop95.base,
        }
    }

    /// The Word 95 properties, if at least that version
    pub fn dop95(&self) -> Option<&Dop95> {
        match self {
            Dop::Base(_) => None,
            Dop::V95(d) => Some(d),
            _ => self.dop97().map(|d| &d.dop95),
        }
    }

    /// The Word 97 properties, if at least that version
    pub fn dop97(&self) -> Option<&Dop97> {
        match self {
            Dop::V97(d) => Some(d),
            _ => self.dop2000().map(|d| &d.dop97),
        }
    }

    /// The Word 2000 properties, if at least that version
    pub fn dop2000(&self) -> Option<&Dop2000> {
        match self {
            Dop::V2000(d) => Some(d),
            _ => self.dop2002().map(|d| &d.dop2000),
        }
    }

    /// The Word 2002 properties, if at least that version
    pub fn dop2002(&self) -> Option<&Dop2002> {
        match self {
            Dop::V2002(d) => Some(d),
            _ => self.dop2003().map(|d| &d.dop2002),
        }
    }

    /// The Word 2003 properties, if at least that version
    pub fn dop2003(&self) -> Option<&Dop2003> {
        match self {
            Dop::V2003(d) => Some(d),
            _ => self.dop2007().map(|d| &d.dop2003),
        }
    }

    /// The Word 2007 properties, if that version
    pub fn dop2007(&self) -> Option<&Dop2007> {
        match self {
            Dop::V2007(d) => Some(d),
            _ => None,
        }
    }
}

/// Locate and decode the DOP the FIB points at
///
/// `table` is the whole table stream named by [`Fib::table_stream`]. The
/// recorded length may exceed the layout size (newer writers append); it
/// may not fall short of it.
pub fn decode_dop(fib: &Fib, table: &Bytes) -> Result<Dop> {
    let entry = fib.rg_fc_lcb.rg97().dop;
    let version = DopVersion::from(fib.version());
    let bytes = entry
        .locate(table, "dop")?
        .ok_or_else(|| FibError::corrupt("dop", entry.fc as usize, Violation::MissingMandatory))?;

    let needed = version.size();
    if bytes.len() < needed {
        return Err(FibError::corrupt(
            "lcbDop",
            entry.fc as usize,
            Violation::OutOfRange {
                value: entry.lcb as i64,
                min: needed as i64,
                max: u32::MAX as i64,
            },
        ));
    }

    #[cfg(feature = "logging")]
    debug!(
        "Decoding {:?} DOP at {:#x} ({} bytes recorded)",
        version, entry.fc, entry.lcb
    );

    // read through the whole stream so field offsets stay in table coordinates
    let mut cursor = SliceCursor::new(table.clone());
    cursor.seek(entry.fc as usize);
    Dop::decode(&mut cursor, version)
}

/// Smallest legal DOP of `version`: zero except where zero is an illegal code
#[cfg(test)]
fn sample(version: DopVersion) -> alloc::vec::Vec<u8> {
    let mut dop = alloc::vec![0u8; version.size()];
    dop[0] = 0x20; // fpc = 1
    dop[2] = 0x04; // nFtn = 1
    dop[52] = 0x04; // nEdn = 1
    if version == DopVersion::Word2007 {
        dop[624] = 0x10; // mthbpjc = 1
    }
    dop
}
