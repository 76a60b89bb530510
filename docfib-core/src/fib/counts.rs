//! FibRgW97 and FibRgLw97: the fixed-size word and long arrays

use crate::constants::MAX_CCP;
use crate::stream::FormatRead;
use crate::validate::check_range;
use crate::Result;
use serde::{Deserialize, Serialize};

/// The 16-bit value array following `csw`
///
/// Only `lidFE` carries meaning; the thirteen leading words are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibRgW97 {
    /// East Asian language id, meaningful only when `fFarEast` is set
    pub lid_fe: u16,
}

impl FibRgW97 {
    /// Decode the 28-byte array
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        reader.skip(26)?; // reserved1..reserved13
        let lid_fe = reader.read_u16()?;
        Ok(Self { lid_fe })
    }
}

/// The 32-bit value array following `cslw`
///
/// Holds the character counts of every subdocument; these feed the
/// [`DecodeContext`](crate::context::DecodeContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibRgLw97 {
    /// Count of bytes of the primary stream that are in use
    pub cb_mac: u32,
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
    /// Characters in the text box subdocument
    pub ccp_txbx: u32,
    /// Characters in the header text box subdocument
    pub ccp_hdr_txbx: u32,
}

impl FibRgLw97 {
    /// Decode the 88-byte array
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let cb_mac = reader.read_u32()?;
        reader.skip(8)?; // reserved1, reserved2
        let ccp_text = read_ccp(reader, "ccpText")?;
        let ccp_ftn = read_ccp(reader, "ccpFtn")?;
        let ccp_hdd = read_ccp(reader, "ccpHdd")?;
        reader.skip(4)?; // reserved3
        let ccp_atn = read_ccp(reader, "ccpAtn")?;
        let ccp_edn = read_ccp(reader, "ccpEdn")?;
        let ccp_txbx = read_ccp(reader, "ccpTxbx")?;
        let ccp_hdr_txbx = read_ccp(reader, "ccpHdrTxbx")?;
        reader.skip(44)?; // reserved4..reserved14

        Ok(Self {
            cb_mac,
            ccp_text,
            ccp_ftn,
            ccp_hdd,
            ccp_atn,
            ccp_edn,
            ccp_txbx,
            ccp_hdr_txbx,
        })
    }
}

fn read_ccp<R: FormatRead + ?Sized>(reader: &mut R, field: &'static str) -> Result<u32> {
    let at = reader.position();
    let raw = reader.read_i32()?;
    check_range(raw as i64, 0, MAX_CCP, field, at)?;
    Ok(raw as u32)
}
