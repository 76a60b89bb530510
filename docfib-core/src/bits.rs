//! Bit-level cursor over a single storage unit
//!
//! Flag groups in this format are packed into discrete 8/16/32-bit units,
//! never into a continuous bit stream. A [`BitCursor`] wraps exactly one unit
//! and hands out sub-fields starting from the least-significant bit. When a
//! layout continues in the next unit, the caller reads that unit and builds a
//! new cursor.
//!
//! Layouts are fixed when the decoder is written, so asking for more bits
//! than remain is a bug in the decoder and panics rather than returning a
//! corruption error.

use crate::stream::FormatRead;
use crate::Result;

/// An unsigned integer read whole from the stream and decomposed into bits
pub trait StorageUnit: Copy + core::fmt::Debug {
    /// Width of the unit in bits
    const BITS: u32;

    /// The unit as a `u32`
    fn widen(self) -> u32;

    /// Truncate a `u32` to the unit width
    fn narrow(value: u32) -> Self;

    /// Read one unit, little-endian
    fn read_unit<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self>;
}

macro_rules! impl_storage_unit {
    ($($t:ty => $read:ident),*) => {
        $(
            impl StorageUnit for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn widen(self) -> u32 {
                    self as u32
                }

                #[inline(always)]
                fn narrow(value: u32) -> Self {
                    value as $t
                }

                fn read_unit<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
                    reader.$read()
                }
            }
        )*
    };
}

impl_storage_unit!(u8 => read_u8, u16 => read_u16, u32 => read_u32);

/// Sequential sub-field reader over one storage unit
#[derive(Debug, Clone, Copy)]
pub struct BitCursor<U: StorageUnit> {
    unit: U,
    consumed: u32,
}

impl<U: StorageUnit> BitCursor<U> {
    /// Wrap an already-read unit
    pub fn new(unit: U) -> Self {
        Self { unit, consumed: 0 }
    }

    /// Read one unit from `reader` and wrap it
    pub fn read_from<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        U::read_unit(reader).map(Self::new)
    }

    /// The unit as read from the stream
    pub fn raw(&self) -> U {
        self.unit
    }

    /// Bits not yet consumed
    pub fn remaining(&self) -> u32 {
        U::BITS - self.consumed
    }

    /// Read the next bit
    pub fn read_bit(&mut self) -> bool {
        self.read_bits(1) != 0
    }

    /// Read the next `n` bits as an unsigned value
    ///
    /// # Panics
    /// If `n` exceeds [`remaining`](Self::remaining).
    pub fn read_bits(&mut self, n: u32) -> u32 {
        assert!(
            n <= self.remaining(),
            "bit layout overrun: {} bits requested, {} left in {}-bit unit",
            n,
            self.remaining(),
            U::BITS
        );
        if n == 0 {
            return 0;
        }
        let value = (self.unit.widen() >> self.consumed) & mask(n);
        self.consumed += n;
        value
    }

    /// Discard the next `n` bits (reserved or unused sub-fields)
    pub fn skip(&mut self, n: u32) {
        self.read_bits(n);
    }

    /// Read every remaining bit, keeping the unit's width
    pub fn read_remaining(&mut self) -> U {
        let n = self.remaining();
        U::narrow(self.read_bits(n))
    }

    /// Read every remaining bit, widened to `T`
    pub fn read_remaining_into<T: From<U>>(&mut self) -> T {
        T::from(self.read_remaining())
    }

    /// End the group
    ///
    /// In debug builds this checks that the layout accounted for every bit
    /// of the unit.
    pub fn finish(self) {
        debug_assert_eq!(
            self.consumed,
            U::BITS,
            "bit layout leaves {} of {} bits unread",
            U::BITS - self.consumed,
            U::BITS
        );
    }
}

#[inline(always)]
fn mask(n: u32) -> u32 {
    if n >= 32 {
        u32::MAX
    } else {
        (1u32 << n) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::SliceCursor;

    #[test]
    fn test_lsb_first_order() {
        let mut bits = BitCursor::new(0b1011_0110u8);
        assert!(!bits.read_bit());
        assert_eq!(bits.read_bits(2), 0b11);
        assert_eq!(bits.read_bits(3), 0b110);
        assert_eq!(bits.remaining(), 2);
        assert_eq!(bits.read_remaining(), 0b10);
        bits.finish();
    }

    #[test]
    fn test_full_width_read() {
        let mut bits = BitCursor::new(0xDEAD_BEEFu32);
        assert_eq!(bits.read_bits(32), 0xDEAD_BEEF);
        assert_eq!(bits.remaining(), 0);
        bits.finish();
    }

    #[test]
    fn test_read_remaining_widens() {
        let mut bits = BitCursor::new(0xF00Fu16);
        bits.skip(4);
        let rest: u32 = bits.read_remaining_into();
        assert_eq!(rest, 0x0F00);
    }

    #[test]
    fn test_read_from_stream_advances_one_unit() {
        let mut cur = SliceCursor::from_slice(&[0x34, 0x12, 0xFF]);
        let mut bits = BitCursor::<u16>::read_from(&mut cur).unwrap();
        assert_eq!(cur.position(), 2);
        assert_eq!(bits.read_bits(8), 0x34);
        assert_eq!(bits.read_bits(8), 0x12);
        bits.finish();
    }

    #[test]
    fn test_zero_width_read() {
        let mut bits = BitCursor::new(0xFFu8);
        assert_eq!(bits.read_bits(0), 0);
        assert_eq!(bits.remaining(), 8);
    }

    #[test]
    #[should_panic(expected = "bit layout overrun")]
    fn test_overrun_panics() {
        let mut bits = BitCursor::new(0u8);
        bits.skip(6);
        bits.read_bits(3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "bits unread")]
    fn test_finish_detects_short_layout() {
        let mut bits = BitCursor::new(0u16);
        bits.skip(15);
        bits.finish();
    }
}
