//! Unicode character-set representation for span matching
//!
//! This crate holds the set side of the unispan workspace: a canonical
//! code-point range list, a deterministic collection of multi-code-unit
//! string members, and the [`UnicodeSpanSet`] that composes the two behind
//! a frozen/mutable lifecycle. The matching algorithms live in the
//! `unispan-engine` crate and consume these types read-only.
//!
//! # Example
//!
//! ```rust
//! use unispan_core::UnicodeSpanSet;
//!
//! let mut set = UnicodeSpanSet::new();
//! set.add_char('a').unwrap();
//! set.add_string("ab").unwrap();
//! set.freeze();
//!
//! assert!(set.contains_char('a'));
//! assert!(set.contains_string("ab"));
//! assert!(set.add_char('b').is_err()); // frozen
//! ```

pub mod error;
pub mod range_set;
pub mod span_set;
pub mod string_set;
pub mod utf16;

pub use error::{Result, SetError};
pub use range_set::CodePointRangeSet;
pub use span_set::UnicodeSpanSet;
pub use string_set::StringMemberSet;
