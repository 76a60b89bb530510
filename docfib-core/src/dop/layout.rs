//! Drawing grid (`Dogrid`) and AutoSummary state (`Asumyi`)

use crate::bits::BitCursor;
use crate::stream::FormatRead;
use crate::validate::check_ordered;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Drawing grid settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dogrid {
    /// Horizontal grid origin in twips
    pub xa_grid: i16,
    /// Vertical grid origin in twips
    pub ya_grid: i16,
    /// Horizontal grid spacing in twips
    pub dxa_grid: i16,
    /// Vertical grid spacing in twips
    pub dya_grid: i16,
    /// Every nth vertical grid line is shown
    pub dy_grid_display: u8,
    /// Every nth horizontal grid line is shown
    pub dx_grid_display: u8,
    /// The grid starts at the page margins
    pub follow_margins: bool,
}

impl Dogrid {
    /// Size in bytes
    pub const SIZE: usize = 10;

    /// Decode the 10-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let xa_grid = reader.read_i16()?;
        let ya_grid = reader.read_i16()?;
        let dxa_grid = reader.read_i16()?;
        let dya_grid = reader.read_i16()?;

        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let dy_grid_display = bits.read_bits(7) as u8;
        bits.skip(1); // unused
        let dx_grid_display = bits.read_bits(7) as u8;
        let follow_margins = bits.read_bit();
        bits.finish();

        Ok(Self {
            xa_grid,
            ya_grid,
            dxa_grid,
            dya_grid,
            dy_grid_display,
            dx_grid_display,
            follow_margins,
        })
    }
}

/// AutoSummary view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asumyi {
    /// The remaining fields hold meaningful data
    pub valid: bool,
    /// AutoSummary view is active
    pub view: bool,
    /// How the summary is presented
    pub view_by: u8,
    /// Document properties are updated from the summary
    pub update_props: bool,
    /// Dialog summary level
    pub dlg_level: i16,
    /// Upper bound of the summary levels
    pub highest_level: i32,
    /// Current summary level
    pub current_level: i32,
}

impl Asumyi {
    /// Size in bytes
    pub const SIZE: usize = 12;

    /// Decode the 12-byte record
    ///
    /// The level bounds are only compared when `fValid` is set.
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let valid = bits.read_bit();
        let view = bits.read_bit();
        let view_by = bits.read_bits(2) as u8;
        let update_props = bits.read_bit();
        bits.skip(11); // reserved
        bits.finish();

        let dlg_level = reader.read_i16()?;
        let highest_level = reader.read_i32()?;
        let current_at = reader.position();
        let current_level = reader.read_i32()?;
        if valid {
            check_ordered(
                current_level as i64,
                highest_level as i64,
                "lCurrentLevel",
                current_at,
            )?;
        }

        Ok(Self {
            valid,
            view,
            view_by,
            update_props,
            dlg_level,
            highest_level,
            current_level,
        })
    }
}
