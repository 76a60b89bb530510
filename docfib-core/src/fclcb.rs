//! Offset/length descriptors and their cross-validation rules

use crate::context::{ContextFlag, Counter, DecodeContext};
use crate::error::{FibError, Violation};
use crate::stream::FormatRead;
use crate::Result;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A `(fc, lcb)` pair locating a substructure in the table stream
///
/// `lcb == 0` means the substructure is absent; `fc` is then meaningless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FcLcb {
    /// Byte offset into the target stream
    pub fc: u32,
    /// Byte length of the substructure
    pub lcb: u32,
}

/// How an entry's length relates to the decoding context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FcLcbRule {
    /// Length must be nonzero
    Mandatory,
    /// Length is nonzero exactly when the counter is nonzero
    MirrorsCount(Counter),
    /// Length must be zero when the counter is zero
    AbsentWithoutCount(Counter),
    /// Length may only be nonzero when the flag is set
    RequiresFlag(ContextFlag),
    /// Any value
    Unchecked,
    /// Undefined field, read for alignment only
    Ignored,
}

impl FcLcbRule {
    /// Check `entry` against this rule
    pub fn check(self, entry: FcLcb, ctx: &DecodeContext) -> core::result::Result<(), Violation> {
        let present = entry.is_present();
        match self {
            FcLcbRule::Mandatory if !present => Err(Violation::MissingMandatory),
            FcLcbRule::MirrorsCount(counter) => {
                let count = ctx.count(counter);
                match (count, present) {
                    (0, true) => Err(Violation::LengthWithoutCount { counter }),
                    (count, false) if count > 0 => {
                        Err(Violation::CountWithoutLength { counter, count })
                    }
                    _ => Ok(()),
                }
            }
            FcLcbRule::AbsentWithoutCount(counter) if present && ctx.count(counter) == 0 => {
                Err(Violation::LengthWithoutCount { counter })
            }
            FcLcbRule::RequiresFlag(flag) if present && !ctx.flag(flag) => {
                Err(Violation::FlagNotSet { flag })
            }
            _ => Ok(()),
        }
    }

    /// True for fields the format leaves undefined
    pub fn is_ignored(self) -> bool {
        matches!(self, FcLcbRule::Ignored)
    }
}

impl FcLcb {
    /// An absent entry
    pub const ABSENT: FcLcb = FcLcb { fc: 0, lcb: 0 };

    /// Create an entry
    pub const fn new(fc: u32, lcb: u32) -> Self {
        Self { fc, lcb }
    }

    /// True if the substructure exists
    pub const fn is_present(&self) -> bool {
        self.lcb != 0
    }

    /// One past the last byte covered
    pub const fn end(&self) -> u64 {
        self.fc as u64 + self.lcb as u64
    }

    /// Read one pair and validate it immediately
    ///
    /// On failure the reader is left just past the pair and the error
    /// carries the pair's starting offset.
    pub fn read<R: FormatRead + ?Sized>(
        reader: &mut R,
        field: &'static str,
        rule: FcLcbRule,
        ctx: &DecodeContext,
    ) -> Result<Self> {
        let offset = reader.position();
        let fc = reader.read_u32()?;
        let lcb = reader.read_u32()?;
        let entry = FcLcb { fc, lcb };
        if !rule.is_ignored() {
            rule.check(entry, ctx)
                .map_err(|v| FibError::corrupt(field, offset, v))?;
        }
        Ok(entry)
    }

    /// Check that the entry fits inside a stream of `stream_len` bytes
    pub fn check_bounds(&self, stream_len: usize, field: &'static str) -> Result<()> {
        if self.is_present() && self.end() > stream_len as u64 {
            return Err(FibError::corrupt(
                field,
                self.fc as usize,
                Violation::OutOfBounds {
                    end: self.end(),
                    limit: stream_len as u64,
                },
            ));
        }
        Ok(())
    }

    /// Slice the substructure out of `stream` without copying
    ///
    /// Returns `Ok(None)` for absent entries.
    pub fn locate(&self, stream: &Bytes, field: &'static str) -> Result<Option<Bytes>> {
        if !self.is_present() {
            return Ok(None);
        }
        self.check_bounds(stream.len(), field)?;
        let start = self.fc as usize;
        Ok(Some(stream.slice(start..start + self.lcb as usize)))
    }
}

/// One named entry of a decoded table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    /// Field name in stream order
    pub name: &'static str,
    /// Rule the entry was validated with
    pub rule: FcLcbRule,
    /// The decoded pair
    pub value: FcLcb,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::SliceCursor;

    fn pair(fc: u32, lcb: u32) -> SliceCursor {
        let mut data = fc.to_le_bytes().to_vec();
        data.extend_from_slice(&lcb.to_le_bytes());
        SliceCursor::new(data)
    }

    #[test]
    fn test_mandatory() {
        let ctx = DecodeContext::default();
        assert!(FcLcbRule::Mandatory.check(FcLcb::new(0x100, 1), &ctx).is_ok());
        assert_eq!(
            FcLcbRule::Mandatory.check(FcLcb::new(0x100, 0), &ctx),
            Err(Violation::MissingMandatory)
        );
    }

    #[test]
    fn test_mirrors_count_grid() {
        let rule = FcLcbRule::MirrorsCount(Counter::Comments);
        for count in [0u32, 1, 1000] {
            let ctx = DecodeContext::default().with_count(Counter::Comments, count);
            for lcb in [0u32, 12] {
                let ok = rule.check(FcLcb::new(0x400, lcb), &ctx).is_ok();
                assert_eq!(ok, (count == 0) == (lcb == 0), "count={count} lcb={lcb}");
            }
        }
    }

    #[test]
    fn test_absent_without_count() {
        let rule = FcLcbRule::AbsentWithoutCount(Counter::Endnotes);
        let empty = DecodeContext::default();
        let some = empty.with_count(Counter::Endnotes, 5);
        assert!(rule.check(FcLcb::ABSENT, &empty).is_ok());
        assert!(rule.check(FcLcb::ABSENT, &some).is_ok());
        assert!(rule.check(FcLcb::new(8, 8), &some).is_ok());
        assert_eq!(
            rule.check(FcLcb::new(8, 8), &empty),
            Err(Violation::LengthWithoutCount {
                counter: Counter::Endnotes
            })
        );
    }

    #[test]
    fn test_requires_flag() {
        let rule = FcLcbRule::RequiresFlag(ContextFlag::Glossary);
        let plain = DecodeContext::default();
        let glossary = plain.with_flag(ContextFlag::Glossary, true);
        assert!(rule.check(FcLcb::ABSENT, &plain).is_ok());
        assert!(rule.check(FcLcb::new(4, 4), &glossary).is_ok());
        assert!(rule.check(FcLcb::new(4, 4), &plain).is_err());
    }

    #[test]
    fn test_read_reports_pair_offset() {
        let mut cur = pair(0x200, 0);
        let err = FcLcb::read(&mut cur, "stshf", FcLcbRule::Mandatory, &DecodeContext::default())
            .unwrap_err();
        assert_eq!(
            err,
            FibError::Corrupt {
                field: "stshf",
                offset: 0,
                violation: Violation::MissingMandatory,
            }
        );
        assert_eq!(cur.position(), 8);
    }

    #[test]
    fn test_ignored_is_never_checked() {
        let mut cur = pair(0xFFFF_FFFF, 0xFFFF_FFFF);
        let entry =
            FcLcb::read(&mut cur, "unused", FcLcbRule::Ignored, &DecodeContext::default()).unwrap();
        assert_eq!(entry, FcLcb::new(0xFFFF_FFFF, 0xFFFF_FFFF));
    }

    #[test]
    fn test_locate() {
        let table = Bytes::from_static(b"abcdefghij");
        assert_eq!(
            FcLcb::new(2, 3).locate(&table, "x").unwrap().unwrap().as_ref(),
            b"cde"
        );
        assert_eq!(FcLcb::new(99, 0).locate(&table, "x").unwrap(), None);
        assert!(FcLcb::new(8, 3).locate(&table, "x").is_err());
        assert!(FcLcb::new(u32::MAX, u32::MAX).locate(&table, "x").is_err());
    }
}
