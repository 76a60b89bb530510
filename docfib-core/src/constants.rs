//! Constants and fixed sizes of the header format

/// `wIdent` magic at offset 0 of the primary stream
pub const FIB_IDENT: u16 = 0xA5EC;

/// Legal values of `nFibBack`
pub const NFIB_BACK_VALUES: [u16; 2] = [0x00BF, 0x00C1];

/// Required value of `csw` (count of 16-bit values in `FibRgW97`)
pub const FIB_CSW: u16 = 0x000E;

/// Required value of `cslw` (count of 32-bit values in `FibRgLw97`)
pub const FIB_CSLW: u16 = 0x0016;

/// Size of `FibBase` in bytes
pub const FIB_BASE_SIZE: usize = 32;

/// Size of `FibRgW97` in bytes
pub const FIB_RG_W_SIZE: usize = FIB_CSW as usize * 2;

/// Size of `FibRgLw97` in bytes
pub const FIB_RG_LW_SIZE: usize = FIB_CSLW as usize * 4;

/// Offset of the first offset/length pair in the primary stream
///
/// FibBase (32) + csw (2) + FibRgW97 (28) + cslw (2) + FibRgLw97 (88) + cbRgFcLcb (2)
pub const FIB_RG_FC_LCB_OFFSET: usize = FIB_BASE_SIZE + 2 + FIB_RG_W_SIZE + 2 + FIB_RG_LW_SIZE + 2;

/// Largest legal character count (counts are non-negative 32-bit signed values)
pub const MAX_CCP: i64 = i32::MAX as i64;

/// Largest legal quick-save count
pub const MAX_QUICK_SAVES: i64 = 0x000F;

/// Name of the table stream when `fWhichTblStm` is 0
pub const TABLE_STREAM_0: &str = "0Table";

/// Name of the table stream when `fWhichTblStm` is 1
pub const TABLE_STREAM_1: &str = "1Table";
