//! Span matching over Unicode character-plus-string sets
//!
//! This crate answers "how much of this text matches this set" for
//! [`UnicodeSpanSet`](unispan_core::UnicodeSpanSet)s whose elements may be
//! single code points or whole multi-code-unit strings. Three conditions
//! are supported: `NotContained`, `Contained` (exhaustive over overlapping
//! string matches) and `Simple` (greedy longest match), each forward and
//! backward. Calls are pure functions of their arguments; the engine never
//! mutates the set and a frozen set can be spanned from many threads at
//! once.
//!
//! # Example
//!
//! ```rust
//! use unispan_core::UnicodeSpanSet;
//! use unispan_engine::{span, SpanCondition};
//!
//! let mut set = UnicodeSpanSet::new();
//! set.add_char('a').unwrap();
//! set.add_string("ab").unwrap();
//! set.add_string("abc").unwrap();
//! set.add_string("cd").unwrap();
//! set.freeze();
//!
//! let text: Vec<u16> = "acdabcdabccd".encode_utf16().collect();
//! assert_eq!(span(&set, &text, 0, SpanCondition::Contained).unwrap(), 12);
//! assert_eq!(span(&set, &text, 0, SpanCondition::Simple).unwrap(), 6);
//! ```

mod condition;
mod engine;
mod offsets;

pub use condition::SpanCondition;
pub use engine::{contains_all, contains_none, span, span_and_count, span_back, Spanning};
