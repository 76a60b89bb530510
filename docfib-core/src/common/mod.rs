//! Small records shared by the property structures
//!
//! The DOP uses [`Dttm`] and [`Nfc`] directly; the border and rectangle
//! records are consumed by the property readers built on this crate.

mod brc;
mod dttm;
mod nfc;
mod rca;

pub use brc::{BorderStyle, BorderType, Brc, Brc80, Ico};
pub use dttm::Dttm;
pub use nfc::Nfc;
pub use rca::Rca;
