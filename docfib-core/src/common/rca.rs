use crate::stream::FormatRead;
use crate::validate::check_ordered;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Rectangle in twips (`RCA`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rca {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Right edge, never left of `left`
    pub right: i32,
    /// Bottom edge, never above `top`
    pub bottom: i32,
}

impl Rca {
    /// Decode the 16-byte record
    pub fn decode<R: FormatRead + ?Sized>(reader: &mut R) -> Result<Self> {
        let at = reader.position();
        let left = reader.read_i32()?;
        let top = reader.read_i32()?;
        let right = reader.read_i32()?;
        let bottom = reader.read_i32()?;
        check_ordered(left as i64, right as i64, "rca.right", at + 8)?;
        check_ordered(top as i64, bottom as i64, "rca.bottom", at + 12)?;
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Horizontal extent
    pub fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    /// Vertical extent
    pub fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FibError, Violation};
    use crate::stream::SliceCursor;

    fn rca(values: [i32; 4]) -> Result<Rca> {
        let data: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Rca::decode(&mut SliceCursor::new(data))
    }

    #[test]
    fn test_degenerate_rectangle_is_legal() {
        let r = rca([10, -5, 10, -5]).unwrap();
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 0);
    }

    #[test]
    fn test_misordered_edges() {
        let err = rca([11, 0, 10, 0]).unwrap_err();
        assert_eq!(
            err,
            FibError::Corrupt {
                field: "rca.right",
                offset: 8,
                violation: Violation::Misordered { low: 11, high: 10 },
            }
        );
        assert!(rca([0, 1, 0, 0]).is_err());
        assert_eq!(rca([i32::MIN, 0, i32::MAX, 0]).unwrap().width(), u32::MAX as i64);
    }
}
