//! East Asian typography settings (`DopTypography`)

use crate::bits::BitCursor;
use crate::stream::FormatRead;
use crate::validate::{check_range, decode_code};
use crate::Result;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

closed_code! {
    /// Character spacing control (`iJustification`)
    pub enum Justification {
        /// Don't compress
        DoNotCompress = 0,
        /// Compress punctuation
        CompressPunctuation = 1,
        /// Compress punctuation and kana
        CompressPunctuationAndKana = 2,
    }
}

closed_code! {
    /// Line breaking rule level (`iLevelOfKinsoku`)
    pub enum KinsokuLevel {
        /// Built-in rules for the language
        Default = 0,
        /// Strict rules
        Strict = 1,
        /// Rules from the custom character lists
        Custom = 2,
    }
}

closed_code! {
    /// Language of the custom line breaking lists (`iCustomKsu`)
    pub enum CustomKinsokuLanguage {
        /// No custom lists
        None = 0,
        /// Japanese
        Japanese = 1,
        /// Simplified Chinese
        ChineseSimplified = 2,
        /// Korean
        Korean = 3,
        /// Traditional Chinese
        ChineseTraditional = 4,
    }
}

/// Capacity of the "cannot start a line" list
pub const MAX_FOLLOWING_PUNCT: usize = 101;

/// Capacity of the "cannot end a line" list
pub const MAX_LEADING_PUNCT: usize = 51;

/// Typography settings for East Asian text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DopTypography {
    /// Kerning applies to punctuation
    pub kerning_punct: bool,
    /// Character spacing control
    pub justification: Justification,
    /// Line breaking rule level
    pub kinsoku: KinsokuLevel,
    /// Print two pages per sheet
    pub two_on_one: bool,
    /// Language of the custom lists
    pub custom_language: CustomKinsokuLanguage,
    /// Use Japanese level 2 rules
    pub japanese_use_level2: bool,
    /// Characters that cannot start a line
    pub following_punct: Vec<u16>,
    /// Characters that cannot end a line
    pub leading_punct: Vec<u16>,
}

impl DopTypography {
    /// Size in bytes
    pub const SIZE: usize = 310;

    /// Decode the 310-byte record
    ///
    /// Only the used prefix of each character list is kept.
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let at = reader.position();
        let mut bits = BitCursor::<u16>::read_from(reader)?;
        let kerning_punct = bits.read_bit();
        let raw_justification = bits.read_bits(2);
        let raw_kinsoku = bits.read_bits(2);
        let two_on_one = bits.read_bit();
        bits.skip(1); // unused
        let raw_custom = bits.read_bits(3);
        let japanese_use_level2 = bits.read_bit();
        bits.skip(5); // reserved
        bits.finish();

        let justification = decode_code(raw_justification, "iJustification", at)?;
        let kinsoku = decode_code(raw_kinsoku, "iLevelOfKinsoku", at)?;
        let custom_language = decode_code(raw_custom, "iCustomKsu", at)?;

        let following_at = reader.position();
        let cch_following = reader.read_i16()?;
        check_range(
            cch_following as i64,
            0,
            MAX_FOLLOWING_PUNCT as i64,
            "cchFollowingPunct",
            following_at,
        )?;
        let leading_at = reader.position();
        let cch_leading = reader.read_i16()?;
        check_range(
            cch_leading as i64,
            0,
            MAX_LEADING_PUNCT as i64,
            "cchLeadingPunct",
            leading_at,
        )?;

        let following_punct = read_chars(reader, MAX_FOLLOWING_PUNCT, cch_following as usize)?;
        let leading_punct = read_chars(reader, MAX_LEADING_PUNCT, cch_leading as usize)?;

        Ok(Self {
            kerning_punct,
            justification,
            kinsoku,
            two_on_one,
            custom_language,
            japanese_use_level2,
            following_punct,
            leading_punct,
        })
    }
}

/// Read a fixed array of `capacity` UTF-16 units and keep the first `used`
fn read_chars<R: FormatRead + ?Sized>(reader: &mut R, capacity: usize, used: usize) -> Result<Vec<u16>> {
    let mut chars = Vec::with_capacity(used);
    for i in 0..capacity {
        let ch = reader.read_u16()?;
        if i < used {
            chars.push(ch);
        }
    }
    Ok(chars)
}
