//! Decode-then-check primitives for scalar fields
//!
//! Two policies exist. Closed codes must be one of a declared set and fail
//! fast with [`FibError::Corrupt`]. Bit-flag sets accept every raw value and
//! live next to the records that own them. Range checks never clamp.

use crate::error::{FibError, Violation};
use crate::Result;
use serde::{Deserialize, Serialize};

/// A scalar whose raw value must be one of a declared set
pub trait ClosedCode: Sized + Copy {
    /// Map a raw value to its named code, or `None` if undeclared
    fn from_raw(raw: u32) -> Option<Self>;

    /// The raw value this code was decoded from
    fn to_raw(self) -> u32;
}

/// Decode `raw` as a closed code, failing with corruption if undeclared
pub fn decode_code<T: ClosedCode>(raw: u32, field: &'static str, offset: usize) -> Result<T> {
    T::from_raw(raw)
        .ok_or_else(|| FibError::corrupt(field, offset, Violation::IllegalCode { raw }))
}

/// Check `min <= value <= max`
pub fn check_range(
    value: i64,
    min: i64,
    max: i64,
    field: &'static str,
    offset: usize,
) -> Result<()> {
    if value < min || value > max {
        return Err(FibError::corrupt(
            field,
            offset,
            Violation::OutOfRange { value, min, max },
        ));
    }
    Ok(())
}

/// Check that a fixed field holds its documented constant
pub fn check_constant(actual: u32, expected: u32, field: &'static str, offset: usize) -> Result<()> {
    if actual != expected {
        return Err(FibError::corrupt(
            field,
            offset,
            Violation::Unexpected { expected, actual },
        ));
    }
    Ok(())
}

/// Check that a lower sibling bound does not exceed the upper one
pub fn check_ordered(low: i64, high: i64, field: &'static str, offset: usize) -> Result<()> {
    if low > high {
        return Err(FibError::corrupt(
            field,
            offset,
            Violation::Misordered { low, high },
        ));
    }
    Ok(())
}

/// A scalar where zero selects an application default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultOr<T> {
    /// Raw value was zero
    Default,
    /// Raw value inside the declared range
    Explicit(T),
}

impl<T: Copy> DefaultOr<T> {
    /// The explicit value, or `default` when unset
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            DefaultOr::Default => default,
            DefaultOr::Explicit(v) => v,
        }
    }

    /// True when the raw value was zero
    pub fn is_default(&self) -> bool {
        matches!(self, DefaultOr::Default)
    }
}

impl DefaultOr<u16> {
    /// Decode a "zero or `min..=max`" field
    pub fn decode(raw: u16, min: u16, max: u16, field: &'static str, offset: usize) -> Result<Self> {
        if raw == 0 {
            return Ok(DefaultOr::Default);
        }
        check_range(raw as i64, min as i64, max as i64, field, offset)?;
        Ok(DefaultOr::Explicit(raw))
    }

    /// The raw value this was decoded from
    pub fn to_raw(self) -> u16 {
        self.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Parity {
        Even,
        Odd,
    }

    impl ClosedCode for Parity {
        fn from_raw(raw: u32) -> Option<Self> {
            match raw {
                0 => Some(Parity::Even),
                1 => Some(Parity::Odd),
                _ => None,
            }
        }

        fn to_raw(self) -> u32 {
            self as u32
        }
    }

    #[test]
    fn test_decode_code() {
        assert_eq!(decode_code::<Parity>(1, "parity", 0).unwrap(), Parity::Odd);
        let err = decode_code::<Parity>(2, "parity", 0x10).unwrap_err();
        assert_eq!(
            err,
            FibError::Corrupt {
                field: "parity",
                offset: 0x10,
                violation: Violation::IllegalCode { raw: 2 },
            }
        );
    }

    #[test]
    fn test_range_edges() {
        assert!(check_range(0, 0, 0x7FFF, "x", 0).is_ok());
        assert!(check_range(0x7FFF, 0, 0x7FFF, "x", 0).is_ok());
        assert!(check_range(-1, 0, 0x7FFF, "x", 0).is_err());
        assert!(check_range(0x8000, 0, 0x7FFF, "x", 0).is_err());
    }

    #[test]
    fn test_default_or() {
        assert_eq!(DefaultOr::decode(0, 10, 500, "zoom", 0).unwrap(), DefaultOr::Default);
        assert_eq!(
            DefaultOr::decode(10, 10, 500, "zoom", 0).unwrap(),
            DefaultOr::Explicit(10)
        );
        assert_eq!(
            DefaultOr::decode(500, 10, 500, "zoom", 0).unwrap(),
            DefaultOr::Explicit(500)
        );
        assert!(DefaultOr::decode(9, 10, 500, "zoom", 0).is_err());
        assert!(DefaultOr::decode(501, 10, 500, "zoom", 0).is_err());
        assert_eq!(DefaultOr::Explicit(120u16).to_raw(), 120);
        assert_eq!(DefaultOr::<u16>::Default.to_raw(), 0);
    }

    #[test]
    fn test_ordered() {
        assert!(check_ordered(5, 5, "edge", 0).is_ok());
        assert!(check_ordered(-3, 5, "edge", 0).is_ok());
        assert!(matches!(
            check_ordered(6, 5, "edge", 0),
            Err(FibError::Corrupt {
                violation: Violation::Misordered { low: 6, high: 5 },
                ..
            })
        ));
    }

    #[test]
    fn test_constant() {
        assert!(check_constant(0xA5EC, 0xA5EC, "wIdent", 0).is_ok());
        assert!(check_constant(0xA5ED, 0xA5EC, "wIdent", 0).is_err());
    }
}
