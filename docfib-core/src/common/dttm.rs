use crate::bits::BitCursor;
use crate::stream::FormatRead;
use crate::validate::{check_range, DefaultOr};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Packed date and time (`DTTM`)
///
/// A raw value of zero means "not set" and decodes to
/// [`DefaultOr::Default`] without component checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dttm {
    /// Minutes, 0-59
    pub minute: u8,
    /// Hours, 0-23
    pub hour: u8,
    /// Day of month, 1-31
    pub day: u8,
    /// Month, 1-12
    pub month: u8,
    /// Years since 1900
    pub year_offset: u16,
    /// Day of week, 0 = Sunday
    pub weekday: u8,
}

impl Dttm {
    /// Decode a 4-byte stamp
    pub fn decode<R: FormatRead + ?Sized>(
        reader: &mut R,
        field: &'static str,
    ) -> Result<DefaultOr<Dttm>> {
        let at = reader.position();
        let mut bits = BitCursor::<u32>::read_from(reader)?;
        if bits.raw() == 0 {
            bits.skip(32);
            bits.finish();
            return Ok(DefaultOr::Default);
        }

        let minute = bits.read_bits(6);
        let hour = bits.read_bits(5);
        let day = bits.read_bits(5);
        let month = bits.read_bits(4);
        let year_offset = bits.read_bits(9);
        let weekday = bits.read_bits(3);
        bits.finish();

        check_range(minute as i64, 0, 59, field, at)?;
        check_range(hour as i64, 0, 23, field, at)?;
        check_range(day as i64, 1, 31, field, at)?;
        check_range(month as i64, 1, 12, field, at)?;
        check_range(weekday as i64, 0, 6, field, at)?;

        Ok(DefaultOr::Explicit(Dttm {
            minute: minute as u8,
            hour: hour as u8,
            day: day as u8,
            month: month as u8,
            year_offset: year_offset as u16,
            weekday: weekday as u8,
        }))
    }

    /// Calendar year
    pub fn year(&self) -> u16 {
        1900 + self.year_offset
    }

    /// Pack back into the stored representation
    pub fn to_raw(&self) -> u32 {
        self.minute as u32
            | (self.hour as u32) << 6
            | (self.day as u32) << 11
            | (self.month as u32) << 16
            | (self.year_offset as u32) << 20
            | (self.weekday as u32) << 29
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;
    use crate::stream::SliceCursor;

    fn stamp(raw: u32) -> Result<DefaultOr<Dttm>> {
        Dttm::decode(&mut SliceCursor::new(raw.to_le_bytes().to_vec()), "dttm")
    }

    #[test]
    fn test_zero_is_unset() {
        assert_eq!(stamp(0).unwrap(), DefaultOr::Default);
    }

    #[test]
    fn test_components() {
        let value = Dttm {
            minute: 59,
            hour: 23,
            day: 31,
            month: 12,
            year_offset: 107,
            weekday: 1,
        };
        let decoded = stamp(value.to_raw()).unwrap();
        assert_eq!(decoded, DefaultOr::Explicit(value));
        assert_eq!(value.year(), 2007);
    }

    #[test]
    fn test_component_edges() {
        let ok = Dttm {
            minute: 0,
            hour: 0,
            day: 1,
            month: 1,
            year_offset: 0,
            weekday: 0,
        };
        assert!(stamp(ok.to_raw()).is_ok());

        let bad_day = Dttm { day: 0, ..ok };
        assert!(stamp(bad_day.to_raw()).is_err());
        let bad_month = Dttm { month: 13, ..ok };
        let err = stamp(bad_month.to_raw()).unwrap_err();
        assert_eq!(
            err.violation(),
            Some(&Violation::OutOfRange {
                value: 13,
                min: 1,
                max: 12
            })
        );
        let bad_minute = Dttm { minute: 60, ..ok };
        assert!(stamp(bad_minute.to_raw()).is_err());
        let bad_weekday = Dttm { weekday: 7, ..ok };
        assert!(stamp(bad_weekday.to_raw()).is_err());
    }
}
