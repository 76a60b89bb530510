//! Dop2007 and its math settings (`DopMth`)

use super::dop2003::Dop2003;
use crate::bits::BitCursor;
use crate::stream::FormatRead;
use crate::validate::decode_code;
use crate::Result;
use serde::{Deserialize, Serialize};

closed_code! {
    /// Order of the style list in the styles pane (`ssm`)
    pub enum StyleSortMethod {
        /// By name
        Name = 0,
        /// By default order
        Default = 1,
        /// By font
        Font = 2,
        /// By the style each is based on
        BasedOn = 3,
        /// By type
        Type = 4,
    }
}

closed_code! {
    /// Where a binary operator goes when an equation breaks (`mthbrk`)
    pub enum MathBreak {
        /// Before the operator
        Before = 0,
        /// After the operator
        After = 1,
        /// On both lines
        Duplicate = 2,
    }
}

closed_code! {
    /// Subtraction operator duplication on a break (`mthbrkSub`)
    pub enum MathBreakSub {
        /// Minus on the first line, minus on the second
        MinusMinus = 0,
        /// Minus on the first line, plus on the second
        MinusPlus = 1,
        /// Plus on the first line, minus on the second
        PlusMinus = 2,
    }
}

closed_code! {
    /// Default justification of display equations (`mthbpjc`)
    pub enum MathJustification {
        /// Left
        Left = 1,
        /// Right
        Right = 2,
        /// Centered
        Center = 3,
        /// Centered as a group
        CenterGroup = 4,
    }
}

/// Equation layout defaults (`DopMth`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DopMth {
    /// Binary operator break rule
    pub break_binary: MathBreak,
    /// Subtraction break rule
    pub break_subtraction: MathBreakSub,
    /// Display equation justification
    pub justification: MathJustification,
    /// Fractions in text are small
    pub small_frac: bool,
    /// Integral limits go under and over
    pub int_lim_und_ovr: bool,
    /// N-ary limits go under and over
    pub nary_lim_und_ovr: bool,
    /// Wrapped lines align left
    pub wrap_align_left: bool,
    /// Display defaults apply
    pub use_disp_defaults: bool,
    /// Default math font
    pub ftc_math: u16,
    /// Left margin of display equations
    pub dxa_left_margin: u32,
    /// Right margin of display equations
    pub dxa_right_margin: u32,
    /// Indent of wrapped lines
    pub dxa_indent_wrapped: u32,
}

impl DopMth {
    /// Size in bytes
    pub const SIZE: usize = 34;

    /// Decode the 34-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let at = reader.position();
        let mut bits = BitCursor::<u32>::read_from(reader)?;
        let raw_brk = bits.read_bits(2);
        let raw_brk_sub = bits.read_bits(2);
        let raw_jc = bits.read_bits(3);
        bits.skip(1); // reserved1
        let small_frac = bits.read_bit();
        let int_lim_und_ovr = bits.read_bit();
        let nary_lim_und_ovr = bits.read_bit();
        let wrap_align_left = bits.read_bit();
        let use_disp_defaults = bits.read_bit();
        bits.skip(19); // reserved2
        bits.finish();

        let break_binary = decode_code(raw_brk, "mthbrk", at)?;
        let break_subtraction = decode_code(raw_brk_sub, "mthbrkSub", at)?;
        let justification = decode_code(raw_jc, "mthbpjc", at)?;

        let ftc_math = reader.read_u16()?;
        let dxa_left_margin = reader.read_u32()?;
        let dxa_right_margin = reader.read_u32()?;
        reader.skip(16)?; // empty1..empty4
        let dxa_indent_wrapped = reader.read_u32()?;

        Ok(Self {
            break_binary,
            break_subtraction,
            justification,
            small_frac,
            int_lim_und_ovr,
            nary_lim_und_ovr,
            wrap_align_left,
            use_disp_defaults,
            ftc_math,
            dxa_left_margin,
            dxa_right_margin,
            dxa_indent_wrapped,
        })
    }
}

/// Document properties as written by Word 2007 (`Dop2007`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dop2007 {
    /// The Word 2003 properties
    pub dop2003: Dop2003,
    /// Formatting changes are tracked
    pub rm_track_formatting: bool,
    /// Moves are tracked
    pub rm_track_moves: bool,
    /// Style pane order
    pub style_sort: StyleSortMethod,
    /// Reading layout shows actual pages
    pub reading_mode_ink_lock_down_actual_page: bool,
    /// Pictures are compressed on save
    pub auto_compress_pictures: bool,
    /// Equation settings
    pub mth: DopMth,
}

impl Dop2007 {
    /// Size in bytes
    pub const SIZE: usize = 674;

    /// Decode the 674-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let dop2003 = Dop2003::decode(reader)?;
        reader.skip(4)?; // reserved1

        let at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let rm_track_formatting = bits.read_bit();
        let rm_track_moves = bits.read_bit();
        bits.skip(1); // reserved2
        bits.skip(2); // empty1, empty2
        let raw_ssm = bits.read_bits(4);
        let reading_mode_ink_lock_down_actual_page = bits.read_bit();
        let auto_compress_pictures = bits.read_bit();
        bits.skip(5); // reserved3
        bits.finish();
        let style_sort = decode_code(raw_ssm, "ssm", at)?;

        reader.skip(2)?; // reserved3
        let mth = DopMth::decode(reader)?;
        reader.skip(16)?; // empty3..empty6

        Ok(Self {
            dop2003,
            rm_track_formatting,
            rm_track_moves,
            style_sort,
            reading_mode_ink_lock_down_actual_page,
            auto_compress_pictures,
            mth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dop::{sample, DopVersion};
    use crate::error::{FibError, Violation};
    use crate::stream::SliceCursor;

    fn mth(word: u32) -> Result<DopMth> {
        let mut data = word.to_le_bytes().to_vec();
        data.resize(DopMth::SIZE, 0);
        let mut cur = SliceCursor::new(data);
        let decoded = DopMth::decode(&mut cur);
        if decoded.is_ok() {
            assert_eq!(cur.position(), DopMth::SIZE);
        }
        decoded
    }

    #[test]
    fn test_style_sort_codes() {
        // ssm occupies bits 5-8 of the word at offset 620
        let cases = [
            (0u16, Some(StyleSortMethod::Name)),
            (4, Some(StyleSortMethod::Type)),
            (5, None),
            (0xF, None),
        ];
        for (raw, expected) in cases {
            let mut data = sample(DopVersion::Word2007);
            data[620..622].copy_from_slice(&(raw << 5).to_le_bytes());
            let result = Dop2007::decode(&mut SliceCursor::new(data));
            match expected {
                Some(method) => assert_eq!(result.unwrap().style_sort, method),
                None => assert_eq!(
                    result.unwrap_err(),
                    FibError::Corrupt {
                        field: "ssm",
                        offset: 620,
                        violation: Violation::IllegalCode { raw: raw as u32 },
                    }
                ),
            }
        }
    }

    #[test]
    fn test_math_codes() {
        // duplicate, plus-minus, centered as group, small fractions
        let m = mth(2 | (2 << 2) | (4 << 4) | (1 << 8)).unwrap();
        assert_eq!(m.break_binary, MathBreak::Duplicate);
        assert_eq!(m.break_subtraction, MathBreakSub::PlusMinus);
        assert_eq!(m.justification, MathJustification::CenterGroup);
        assert!(m.small_frac);
    }

    #[test]
    fn test_math_code_edges() {
        assert!(mth(3 | (1 << 4)).is_err());
        assert!(mth(3 << 2 | (1 << 4)).is_err());
        // justification 0 is not a legal code
        let err = mth(0).unwrap_err();
        assert!(matches!(err, FibError::Corrupt { field: "mthbpjc", .. }));
        assert!(mth(5 << 4).is_err());
        assert!(mth(1 << 4).is_ok());
    }
}
