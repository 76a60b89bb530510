//! FibRgCswNew: the version-bearing tail after the offset/length table

use super::table::FibVersion;
use crate::constants::MAX_QUICK_SAVES;
use crate::error::{FibError, Violation};
use crate::stream::FormatRead;
use crate::validate::{check_range, decode_code};
use crate::Result;
use serde::{Deserialize, Serialize};

/// `rgCswNewData` for Word 2000 through 2003
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CswNewData2000 {
    /// Incremental saves since the last full save
    pub quick_saves_new: u16,
}

impl CswNewData2000 {
    /// Size in bytes
    pub const SIZE: usize = 2;

    /// Decode the 2-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let at = reader.position();
        let quick_saves_new = reader.read_u16()?;
        check_range(quick_saves_new as i64, 0, MAX_QUICK_SAVES, "cQuickSavesNew", at)?;
        Ok(Self { quick_saves_new })
    }
}

/// `rgCswNewData` for Word 2007
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CswNewData2007 {
    /// The Word 2000 data
    pub data2000: CswNewData2000,
    /// Theme language for Latin text
    pub lid_theme_other: u16,
    /// Theme language for East Asian text
    pub lid_theme_fe: u16,
    /// Theme language for complex script text
    pub lid_theme_cs: u16,
}

impl CswNewData2007 {
    /// Size in bytes
    pub const SIZE: usize = 8;

    /// Decode the 8-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let data2000 = CswNewData2000::decode(reader)?;
        Ok(Self {
            data2000,
            lid_theme_other: reader.read_u16()?,
            lid_theme_fe: reader.read_u16()?,
            lid_theme_cs: reader.read_u16()?,
        })
    }
}

/// Version-specific data following `nFibNew`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CswNewData {
    /// Word 2000, 2002 and 2003
    V2000(CswNewData2000),
    /// Word 2007
    V2007(CswNewData2007),
}

impl CswNewData {
    /// The Word 2000 data, present in every version
    pub fn data2000(&self) -> &CswNewData2000 {
        match self {
            CswNewData::V2000(d) => d,
            CswNewData::V2007(d) => &d.data2000,
        }
    }

    /// The Word 2007 data, if present
    pub fn data2007(&self) -> Option<&CswNewData2007> {
        match self {
            CswNewData::V2007(d) => Some(d),
            CswNewData::V2000(_) => None,
        }
    }
}

/// The record following `cswNew` when it is nonzero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibRgCswNew {
    /// Version that overrides `FibBase::n_fib`
    pub n_fib_new: FibVersion,
    /// Version-specific data
    pub data: CswNewData,
}

impl FibRgCswNew {
    /// Decode `csw_new` 16-bit values
    ///
    /// Only the counts written by Word 2000 (2) and Word 2007 (5) are legal;
    /// `nFibNew` must name one of the versions newer than Word 97.
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R, csw_new: u16) -> Result<Self> {
        let at = reader.position();
        let raw = reader.read_u16()?;
        let n_fib_new: FibVersion = decode_code(raw as u32, "nFibNew", at)?;
        if n_fib_new == FibVersion::Word97 {
            return Err(FibError::corrupt(
                "nFibNew",
                at,
                Violation::IllegalCode { raw: raw as u32 },
            ));
        }

        let data = match csw_new {
            2 => CswNewData::V2000(CswNewData2000::decode(reader)?),
            5 => CswNewData::V2007(CswNewData2007::decode(reader)?),
            other => {
                return Err(FibError::corrupt(
                    "cswNew",
                    at.saturating_sub(2),
                    Violation::IllegalCode { raw: other as u32 },
                ))
            }
        };
        Ok(Self { n_fib_new, data })
    }
}
