use crate::bits::BitCursor;
use crate::stream::FormatRead;
use crate::validate::{check_range, decode_code, ClosedCode};
use crate::Result;
use serde::{Deserialize, Serialize};

closed_code! {
    /// Named line styles of `brcType`
    pub enum BorderStyle {
        /// No border
        None = 0x00,
        /// Single line
        Single = 0x01,
        /// Thick line
        Thick = 0x02,
        /// Double line
        Double = 0x03,
        /// Hairline
        Hairline = 0x05,
        /// Dotted
        Dotted = 0x06,
        /// Dashed, large gap
        DashLargeGap = 0x07,
        /// Dot dash
        DotDash = 0x08,
        /// Dot dot dash
        DotDotDash = 0x09,
        /// Triple line
        Triple = 0x0A,
        /// Thin-thick, small gap
        ThinThickSmallGap = 0x0B,
        /// Thick-thin, small gap
        ThickThinSmallGap = 0x0C,
        /// Thin-thick-thin, small gap
        ThinThickThinSmallGap = 0x0D,
        /// Thin-thick, medium gap
        ThinThickMediumGap = 0x0E,
        /// Thick-thin, medium gap
        ThickThinMediumGap = 0x0F,
        /// Thin-thick-thin, medium gap
        ThinThickThinMediumGap = 0x10,
        /// Thin-thick, large gap
        ThinThickLargeGap = 0x11,
        /// Thick-thin, large gap
        ThickThinLargeGap = 0x12,
        /// Thin-thick-thin, large gap
        ThinThickThinLargeGap = 0x13,
        /// Wave
        Wave = 0x14,
        /// Double wave
        DoubleWave = 0x15,
        /// Dashed, small gap
        DashSmallGap = 0x16,
        /// Dash dot stroked
        DashDotStroked = 0x17,
        /// Embossed 3D
        Emboss3D = 0x18,
        /// Engraved 3D
        Engrave3D = 0x19,
        /// Outset
        Outset = 0x1A,
        /// Inset
        Inset = 0x1B,
    }
}

/// First and last code of the image border band
const ART_BAND: core::ops::RangeInclusive<u8> = 0x40..=0xE3;

/// `brcType` sentinel marking an entire border record as nil
const BRC_NIL: u8 = 0xFF;

/// Decoded `brcType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderType {
    /// A line style
    Named(BorderStyle),
    /// An image border from the art band
    Art(u8),
    /// The record is a nil border; other fields carry no meaning
    Nil,
}

impl BorderType {
    /// Classify a raw `brcType`
    pub fn decode(raw: u8, field: &'static str, offset: usize) -> Result<Self> {
        if raw == BRC_NIL {
            return Ok(BorderType::Nil);
        }
        if ART_BAND.contains(&raw) {
            return Ok(BorderType::Art(raw));
        }
        decode_code(raw as u32, field, offset).map(BorderType::Named)
    }

    /// The stored code
    pub fn to_raw(self) -> u8 {
        match self {
            BorderType::Named(style) => style.to_raw() as u8,
            BorderType::Art(code) => code,
            BorderType::Nil => BRC_NIL,
        }
    }

    /// True if the width field has to be in the drawn line range
    fn constrains_width(self) -> bool {
        matches!(self, BorderType::Named(style) if style != BorderStyle::None)
    }
}

closed_code! {
    /// Legacy 16-color palette index
    pub enum Ico {
        /// Automatic color
        Auto = 0x00,
        /// Black
        Black = 0x01,
        /// Blue
        Blue = 0x02,
        /// Cyan
        Cyan = 0x03,
        /// Green
        Green = 0x04,
        /// Magenta
        Magenta = 0x05,
        /// Red
        Red = 0x06,
        /// Yellow
        Yellow = 0x07,
        /// White
        White = 0x08,
        /// Dark blue
        DarkBlue = 0x09,
        /// Dark cyan
        DarkCyan = 0x0A,
        /// Dark green
        DarkGreen = 0x0B,
        /// Dark magenta
        DarkMagenta = 0x0C,
        /// Dark red
        DarkRed = 0x0D,
        /// Dark yellow
        DarkYellow = 0x0E,
        /// Dark gray
        DarkGray = 0x0F,
        /// Light gray
        LightGray = 0x10,
    }
}

const MIN_LINE_WIDTH: i64 = 2;
const MAX_LINE_WIDTH: i64 = 96;

fn check_line_width(kind: BorderType, width: u8, field: &'static str, offset: usize) -> Result<()> {
    if kind.constrains_width() {
        check_range(width as i64, MIN_LINE_WIDTH, MAX_LINE_WIDTH, field, offset)?;
    }
    Ok(())
}

/// Border in the 4-byte legacy layout (`Brc80`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brc80 {
    /// Line width in eighths of a point
    pub line_width: u8,
    /// Line style
    pub kind: BorderType,
    /// Color, `None` for nil borders
    pub ico: Option<Ico>,
    /// Space to the text in points
    pub space: u8,
    /// Drawn with a shadow
    pub shadow: bool,
    /// Drawn as a frame
    pub frame: bool,
}

impl Brc80 {
    /// Decode the 4-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let at = reader.position();
        let line_width = reader.read_u8()?;
        let kind = BorderType::decode(reader.read_u8()?, "brcType", at + 1)?;
        let raw_ico = reader.read_u8()?;

        let mut bits = BitCursor::<u8>::read_from(reader)?;
        let space = bits.read_bits(5) as u8;
        let shadow = bits.read_bit();
        let frame = bits.read_bit();
        bits.skip(1); // reserved
        bits.finish();

        if kind == BorderType::Nil {
            return Ok(Self {
                line_width,
                kind,
                ico: None,
                space,
                shadow,
                frame,
            });
        }

        check_line_width(kind, line_width, "dptLineWidth", at)?;
        let ico = decode_code::<Ico>(raw_ico as u32, "ico", at + 2)?;
        Ok(Self {
            line_width,
            kind,
            ico: Some(ico),
            space,
            shadow,
            frame,
        })
    }
}

/// Border with a full RGB color (`Brc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brc {
    /// `COLORREF` as stored
    pub color: u32,
    /// Line width in eighths of a point
    pub line_width: u8,
    /// Line style
    pub kind: BorderType,
    /// Space to the text in points
    pub space: u8,
    /// Drawn with a shadow
    pub shadow: bool,
    /// Drawn as a frame
    pub frame: bool,
}

impl Brc {
    /// Decode the 8-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let at = reader.position();
        let color = reader.read_u32()?;
        let line_width = reader.read_u8()?;
        let kind = BorderType::decode(reader.read_u8()?, "brcType", at + 5)?;

        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let space = bits.read_bits(5) as u8;
        let shadow = bits.read_bit();
        let frame = bits.read_bit();
        bits.skip(9); // reserved
        bits.finish();

        check_line_width(kind, line_width, "dptLineWidth", at + 4)?;
        Ok(Self {
            color,
            line_width,
            kind,
            space,
            shadow,
            frame,
        })
    }

    /// True if the color is "automatic" (`fAuto` byte set)
    pub fn is_auto_color(&self) -> bool {
        self.color >> 24 == 0xFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FibError, Violation};
    use crate::stream::SliceCursor;

    fn style_violation(raw: u8) -> Option<Violation> {
        BorderType::decode(raw, "brcType", 0)
            .err()
            .and_then(|e| e.violation().copied())
    }

    fn brc80(bytes: [u8; 4]) -> Result<Brc80> {
        Brc80::decode(&mut SliceCursor::new(bytes.to_vec()))
    }

    #[test]
    fn test_border_type_bands() {
        assert_eq!(
            BorderType::decode(0x02, "t", 0).unwrap(),
            BorderType::Named(BorderStyle::Thick)
        );
        assert_eq!(
            BorderType::decode(0x1B, "t", 0).unwrap(),
            BorderType::Named(BorderStyle::Inset)
        );
        assert_eq!(BorderType::decode(0x40, "t", 0).unwrap(), BorderType::Art(0x40));
        assert_eq!(BorderType::decode(0xE3, "t", 0).unwrap(), BorderType::Art(0xE3));
        assert_eq!(BorderType::decode(0xFF, "t", 0).unwrap(), BorderType::Nil);

        for raw in [0x04u8, 0x1C, 0x3F, 0xE4, 0xFE] {
            assert_eq!(
                style_violation(raw),
                Some(Violation::IllegalCode { raw: raw as u32 }),
                "raw={raw:#x}"
            );
        }
    }

    #[test]
    fn test_border_type_round_trips() {
        for raw in (0x00..=0x1Bu8).chain(0x40..=0xE3).chain([0xFF]) {
            if raw == 0x04 {
                continue;
            }
            assert_eq!(BorderType::decode(raw, "t", 0).unwrap().to_raw(), raw);
        }
    }

    #[test]
    fn test_brc80_width_range() {
        assert!(brc80([2, 0x01, 0x06, 0]).is_ok());
        assert!(brc80([96, 0x01, 0x06, 0]).is_ok());
        assert!(brc80([1, 0x01, 0x06, 0]).is_err());
        let err = brc80([97, 0x01, 0x06, 0]).unwrap_err();
        assert!(matches!(
            err,
            FibError::Corrupt {
                field: "dptLineWidth",
                offset: 0,
                ..
            }
        ));
        // no line, no width constraint
        assert!(brc80([0, 0x00, 0x00, 0]).is_ok());
    }

    #[test]
    fn test_brc80_ico_and_flags() {
        let b = brc80([8, 0x03, 0x10, 0b0110_0011]).unwrap();
        assert_eq!(b.ico, Some(Ico::LightGray));
        assert_eq!(b.space, 3);
        assert!(b.shadow);
        assert!(b.frame);
        assert!(brc80([8, 0x03, 0x11, 0]).is_err());
    }

    #[test]
    fn test_brc80_nil_skips_validation() {
        let b = brc80([0xFF; 4]).unwrap();
        assert_eq!(b.kind, BorderType::Nil);
        assert_eq!(b.ico, None);
    }

    #[test]
    fn test_brc_full_color() {
        let mut data = 0xFF00_0000u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[4, 0x40, 0x05, 0x00]);
        let b = Brc::decode(&mut SliceCursor::new(data)).unwrap();
        assert!(b.is_auto_color());
        assert_eq!(b.kind, BorderType::Art(0x40));
        assert_eq!(b.space, 5);

        let mut data = 0u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[0, 0x01, 0, 0]);
        let err = Brc::decode(&mut SliceCursor::new(data)).unwrap_err();
        assert!(matches!(err, FibError::Corrupt { offset: 4, .. }));
    }
}
