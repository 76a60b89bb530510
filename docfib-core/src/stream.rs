//! Positioned little-endian byte streams
//!
//! Every decoder in the crate reads through [`FormatRead`]. The position is
//! the number of bytes consumed since the start of the stream and only ever
//! moves forward during a decode.

use crate::error::FibError;
use crate::Result;
use bytes::{Buf, Bytes};
#[cfg(feature = "std")]
use std::io::{ErrorKind, Read};

/// A forward-only little-endian reader that knows its position
pub trait FormatRead {
    /// Current stream position in bytes
    fn position(&self) -> usize;

    /// Fill `buf` completely or fail without a partial read being observable
    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Read one byte
    fn read_u8(&mut self) -> Result<u8> {
        let mut b = [0u8; 1];
        self.read_exact_into(&mut b)?;
        Ok(b[0])
    }

    /// Read a little-endian `u16`
    fn read_u16(&mut self) -> Result<u16> {
        let mut b = [0u8; 2];
        self.read_exact_into(&mut b)?;
        Ok(u16::from_le_bytes(b))
    }

    /// Read a little-endian `u32`
    fn read_u32(&mut self) -> Result<u32> {
        let mut b = [0u8; 4];
        self.read_exact_into(&mut b)?;
        Ok(u32::from_le_bytes(b))
    }

    /// Read a little-endian `i16`
    fn read_i16(&mut self) -> Result<i16> {
        self.read_u16().map(|v| v as i16)
    }

    /// Read a little-endian `i32`
    fn read_i32(&mut self) -> Result<i32> {
        self.read_u32().map(|v| v as i32)
    }

    /// Read `n` bytes into a new buffer
    fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        let mut buf = alloc::vec![0u8; n];
        self.read_exact_into(&mut buf)?;
        Ok(Bytes::from(buf))
    }

    /// Consume `n` bytes without keeping them
    fn skip(&mut self, n: usize) -> Result<()> {
        let mut scratch = [0u8; 64];
        let mut left = n;
        while left > 0 {
            let step = left.min(scratch.len());
            self.read_exact_into(&mut scratch[..step])?;
            left -= step;
        }
        Ok(())
    }
}

impl<R: FormatRead + ?Sized> FormatRead for &mut R {
    fn position(&self) -> usize {
        (**self).position()
    }

    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_exact_into(buf)
    }
}

/// Seekable cursor over an in-memory stream
///
/// Reads never copy more than the requested bytes, and [`read_bytes`]
/// returns a slice sharing the underlying buffer.
///
/// [`read_bytes`]: FormatRead::read_bytes
#[derive(Debug, Clone)]
pub struct SliceCursor {
    buf: Bytes,
    pos: usize,
}

impl SliceCursor {
    /// Create a cursor at position 0
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    /// Create a cursor over a copy of `data`
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    /// Total stream length
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if the stream holds no bytes
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes left after the current position
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Move to an absolute position
    ///
    /// Seeking past the end is allowed; the next read reports truncation.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// The whole underlying stream
    pub fn get_ref(&self) -> &Bytes {
        &self.buf
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let fits = self
            .pos
            .checked_add(needed)
            .is_some_and(|end| end <= self.buf.len());
        if !fits {
            return Err(FibError::Truncated {
                offset: self.pos,
                needed,
            });
        }
        Ok(())
    }

    fn rest(&self) -> &[u8] {
        &self.buf[self.pos..]
    }
}

impl FormatRead for SliceCursor {
    fn position(&self) -> usize {
        self.pos
    }

    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
        self.ensure(buf.len())?;
        self.rest().copy_to_slice(buf);
        self.pos += buf.len();
        Ok(())
    }

    fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        let v = self.rest().get_u16_le();
        self.pos += 2;
        Ok(v)
    }

    fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        let v = self.rest().get_u32_le();
        self.pos += 4;
        Ok(v)
    }

    fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        let out = self.buf.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(out)
    }

    fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }
}

/// Cursor over any [`Read`] implementation
///
/// Counts consumed bytes so corruption errors carry stream offsets.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoCursor<R> {
    inner: R,
    pos: usize,
}

#[cfg(feature = "std")]
impl<R: Read> IoCursor<R> {
    /// Wrap a reader positioned at the start of the stream
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Unwrap the reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: Read> FormatRead for IoCursor<R> {
    fn position(&self) -> usize {
        self.pos
    }

    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.pos += buf.len();
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(FibError::Truncated {
                offset: self.pos,
                needed: buf.len(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_reads() {
        let mut cur = SliceCursor::from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xFF]);
        assert_eq!(cur.read_u16().unwrap(), 0x0201);
        assert_eq!(cur.read_u32().unwrap(), 0x0605_0403);
        assert_eq!(cur.read_u8().unwrap(), 0xFF);
        assert_eq!(cur.position(), 7);
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn test_truncated_read_keeps_position() {
        let mut cur = SliceCursor::from_slice(&[0xAA, 0xBB, 0xCC]);
        cur.read_u8().unwrap();
        let err = cur.read_u32().unwrap_err();
        assert_eq!(
            err,
            FibError::Truncated {
                offset: 1,
                needed: 4
            }
        );
        assert_eq!(cur.position(), 1);
    }

    #[test]
    fn test_read_bytes_shares_buffer() {
        let data = Bytes::from_static(b"0123456789");
        let mut cur = SliceCursor::new(data.clone());
        cur.skip(2).unwrap();
        let part = cur.read_bytes(3).unwrap();
        assert_eq!(part.as_ref(), b"234");
        assert_eq!(cur.position(), 5);
    }

    #[test]
    fn test_signed_reads() {
        let mut cur = SliceCursor::from_slice(&[0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]);
        assert_eq!(cur.read_i16().unwrap(), -2);
        assert_eq!(cur.read_i32().unwrap(), 0x7FFF_FFFF);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_io_cursor_matches_slice_cursor() {
        let data = [0x10u8, 0x20, 0x30, 0x40, 0x50];
        let mut io = IoCursor::new(std::io::Cursor::new(data));
        assert_eq!(io.read_u32().unwrap(), 0x4030_2010);
        assert_eq!(io.position(), 4);
        assert!(matches!(
            io.read_u16(),
            Err(FibError::Truncated { offset: 4, needed: 2 })
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_default_skip_crosses_scratch_size() {
        let data = std::vec![7u8; 200];
        let mut io = IoCursor::new(std::io::Cursor::new(data));
        io.skip(150).unwrap();
        assert_eq!(io.position(), 150);
        assert_eq!(io.read_u8().unwrap(), 7);
    }
}
