use crate::validate::ClosedCode;
use serde::{Deserialize, Serialize};

/// Number format code (`MSONFC`)
///
/// Legal codes are the contiguous band `0x00..=0x3A` plus `0xFF` (no
/// number). Only the formats the crate refers to are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nfc(u8);

impl Nfc {
    /// 1, 2, 3
    pub const DECIMAL: Nfc = Nfc(0x00);
    /// I, II, III
    pub const UPPER_ROMAN: Nfc = Nfc(0x01);
    /// i, ii, iii
    pub const LOWER_ROMAN: Nfc = Nfc(0x02);
    /// A, B, C
    pub const UPPER_LETTER: Nfc = Nfc(0x03);
    /// a, b, c
    pub const LOWER_LETTER: Nfc = Nfc(0x04);
    /// 1st, 2nd, 3rd
    pub const ORDINAL: Nfc = Nfc(0x05);
    /// Bullet character
    pub const BULLET: Nfc = Nfc(0x17);
    /// No number
    pub const NONE: Nfc = Nfc(0xFF);

    /// Last code of the contiguous band
    pub const LAST_BAND_CODE: u8 = 0x3A;

    /// The stored code
    pub const fn code(&self) -> u8 {
        self.0
    }
}

impl ClosedCode for Nfc {
    fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0x00..=0x3A | 0xFF => Some(Nfc(raw as u8)),
            _ => None,
        }
    }

    fn to_raw(self) -> u32 {
        self.0 as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_and_sentinel() {
        for raw in 0x00..=0x3Au32 {
            assert_eq!(Nfc::from_raw(raw).map(Nfc::to_raw), Some(raw));
        }
        assert_eq!(Nfc::from_raw(0xFF), Some(Nfc::NONE));
        assert_eq!(Nfc::from_raw(0x17), Some(Nfc::BULLET));
        assert_eq!(Nfc::from_raw(0x3B), None);
        assert_eq!(Nfc::from_raw(0xFE), None);
    }
}
