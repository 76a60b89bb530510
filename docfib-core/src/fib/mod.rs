//! The File Information Block
//!
//! Decoded in stream order:
//!
//! ```text
//! FibBase (32) | csw | FibRgW97 (28) | cslw | FibRgLw97 (88)
//!   | cbRgFcLcb | FibRgFcLcb (8 * cbRgFcLcb) | cswNew | FibRgCswNew
//! ```
//!
//! The counters in `FibRgLw97` and the flags in `FibBase` form the
//! [`DecodeContext`] every offset/length pair is validated against.

mod base;
mod counts;
mod csw_new;
mod table;

pub use base::{FibBase, FibBaseFlags, FibBaseFlags2, TableStream};
pub use counts::{FibRgLw97, FibRgW97};
pub use csw_new::{CswNewData, CswNewData2000, CswNewData2007, FibRgCswNew};
pub use table::{
    DeferredPair, FibRgFcLcb, FibRgFcLcb2000, FibRgFcLcb2002, FibRgFcLcb2003, FibRgFcLcb2007,
    FibRgFcLcb97, FibVersion,
};

use crate::constants::{FIB_CSLW, FIB_CSW};
use crate::context::DecodeContext;
use crate::error::{FibError, Violation};
use crate::fclcb::TableEntry;
use crate::stream::{FormatRead, SliceCursor};
use crate::validate::check_constant;
use crate::Result;
use alloc::vec::Vec;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// A fully validated File Information Block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fib {
    /// Fixed head
    pub base: FibBase,
    /// 16-bit value array
    pub rg_w: FibRgW97,
    /// 32-bit value array with the character counts
    pub rg_lw: FibRgLw97,
    /// Offset/length table
    pub rg_fc_lcb: FibRgFcLcb,
    /// Version tail; absent for Word 97 files
    pub csw_new: Option<FibRgCswNew>,
}

impl Fib {
    /// Decode the FIB from the start of the primary stream
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let start = reader.position();
        let base = FibBase::decode(reader)?;

        let at = reader.position();
        let csw = reader.read_u16()?;
        check_constant(csw as u32, FIB_CSW as u32, "csw", at)?;
        let rg_w = FibRgW97::decode(reader)?;

        let at = reader.position();
        let cslw = reader.read_u16()?;
        check_constant(cslw as u32, FIB_CSLW as u32, "cslw", at)?;
        let rg_lw = FibRgLw97::decode(reader)?;

        let cb_at = reader.position();
        let cb = reader.read_u16()?;
        let version = FibVersion::from_cb_rg_fc_lcb(cb).ok_or_else(|| {
            FibError::corrupt("cbRgFcLcb", cb_at, Violation::IllegalCode { raw: cb as u32 })
        })?;

        #[cfg(feature = "logging")]
        debug!("Selected {:?} from cbRgFcLcb={:#06x}", version, cb);

        let ctx = DecodeContext::from_header(&base, &rg_lw);
        let rg_fc_lcb = FibRgFcLcb::decode(reader, version, &ctx)?;

        let csw_at = reader.position();
        let csw_new = reader.read_u16()?;
        check_constant(csw_new as u32, version.csw_new() as u32, "cswNew", csw_at)?;

        let csw_new = if csw_new == 0 {
            check_constant(base.n_fib as u32, version.n_fib() as u32, "nFib", start + 2)?;
            None
        } else {
            let tail = FibRgCswNew::decode(reader, csw_new)?;
            if tail.n_fib_new != version {
                return Err(FibError::corrupt(
                    "nFibNew",
                    csw_at + 2,
                    Violation::Unexpected {
                        expected: version.n_fib() as u32,
                        actual: tail.n_fib_new.n_fib() as u32,
                    },
                ));
            }
            Some(tail)
        };

        #[cfg(feature = "logging")]
        debug!(
            "Decoded FIB: {:?}, {} pairs, table stream {}",
            version,
            version.cb_rg_fc_lcb(),
            base.table_stream().name()
        );

        Ok(Self {
            base,
            rg_w,
            rg_lw,
            rg_fc_lcb,
            csw_new,
        })
    }

    /// Format version of the offset/length table
    pub fn version(&self) -> FibVersion {
        self.rg_fc_lcb.version()
    }

    /// The context the table was validated against
    pub fn context(&self) -> DecodeContext {
        DecodeContext::from_header(&self.base, &self.rg_lw)
    }

    /// The table stream the offset/length pairs point into
    pub fn table_stream(&self) -> TableStream {
        self.base.table_stream()
    }

    /// Every offset/length entry in stream order
    pub fn entries(&self) -> Vec<TableEntry> {
        self.rg_fc_lcb.entries()
    }

    /// The entry named `name`, if this version has it
    ///
    /// Ignored slots are never returned; their contents are undefined.
    pub fn entry(&self, name: &str) -> Option<TableEntry> {
        self.entries()
            .into_iter()
            .find(|e| e.name == name && !e.rule.is_ignored())
    }

    /// Slice the substructure named `name` out of the table stream
    ///
    /// Returns `Ok(None)` if the entry is absent or unknown to this version.
    pub fn locate(&self, name: &str, table: &Bytes) -> Result<Option<Bytes>> {
        match self.entry(name) {
            Some(entry) => entry.value.locate(table, entry.name),
            None => Ok(None),
        }
    }

    /// Check every present entry against the table stream length
    pub fn check_table_bounds(&self, table_len: usize) -> Result<()> {
        self.entries()
            .iter()
            .filter(|e| !e.rule.is_ignored())
            .try_for_each(|e| e.value.check_bounds(table_len, e.name))
    }

    /// Table pairs whose element counts the consumer must compare
    pub fn deferred_pairs(&self) -> Vec<DeferredPair> {
        self.rg_fc_lcb.deferred_pairs()
    }
}

/// Decode the FIB at the reader's position
pub fn decode_fib<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Fib> {
    Fib::decode(reader)
}

/// Decode the FIB from the start of a primary stream held in memory
pub fn decode_fib_from_bytes(primary: impl Into<Bytes>) -> Result<Fib> {
    let mut cursor = SliceCursor::new(primary);
    Fib::decode(&mut cursor)
}
