//! # Docfib Core
//!
//! A strict decoder for the File Information Block (FIB) and Document
//! Properties (DOP) of legacy binary word-processing documents.
//!
//! Every field is validated as it is read. The first violated invariant
//! aborts the decode with a [`FibError`] naming the field and its stream
//! offset; there is no best-effort recovery.
//!
//! ## Modules
//!
//! - `stream`: Positioned little-endian readers
//! - `bits`: Sub-byte bit fields within one storage unit
//! - `validate`: Closed codes, ranges and default-or-range values
//! - `context`: Counters and flags the offset/length table is checked against
//! - `fclcb`: Offset/length pairs and their rules
//! - `fib`: The FIB record chain
//! - `dop`: The DOP record chain
//! - `common`: Shared value records (dates, borders, rectangles, number formats)
//!
//! ## Example
//!
//! ```no_run
//! use docfib_core::{decode_dop, decode_fib_from_bytes};
//! use bytes::Bytes;
//!
//! # fn streams() -> (Bytes, Bytes) { unimplemented!() }
//! let (primary, table) = streams();
//! let fib = decode_fib_from_bytes(primary)?;
//! fib.check_table_bounds(table.len())?;
//! let dop = decode_dop(&fib, &table)?;
//! println!("{:?} zoom {:?}", fib.version(), dop.base().zoom_percent);
//! # Ok::<(), docfib_core::FibError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod bits;
pub mod common;
pub mod constants;
pub mod context;
pub mod dop;
pub mod error;
pub mod fclcb;
pub mod fib;
pub mod stream;
pub mod validate;

// Re-export commonly used types
pub use context::{ContextFlag, Counter, DecodeContext};
pub use dop::{decode_dop, Dop, DopVersion};
pub use error::{FibError, Violation};
pub use fclcb::{FcLcb, FcLcbRule, TableEntry};
pub use fib::{decode_fib, decode_fib_from_bytes, Fib, FibVersion, TableStream};
pub use stream::{FormatRead, SliceCursor};
#[cfg(feature = "std")]
pub use stream::IoCursor;
pub use validate::DefaultOr;

/// Result type alias for header decoding
pub type Result<T> = core::result::Result<T, FibError>;
