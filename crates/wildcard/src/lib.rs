//! Byte-wise wildcard mask matching.
//!
//! A mask is a byte string where `*` matches any run of zero or more bytes and `?` matches
//! exactly one byte. Every other byte matches itself. The whole subject must match the whole
//! mask, there is no partial or streaming matching.
//!
//! # Mask Syntax
//!
//! - `*` - Matches zero or more bytes, a run of stars behaves as a single star
//! - `?` - Matches exactly one byte
//! - Any other byte matches itself, there is no escaping
//!
//! # Examples
//!
//! ```
//! use wildcard::{matches, matches_ci};
//!
//! assert!(matches(b"host.example.com", b"*.example.com"));
//! assert!(!matches(b"example.com", b"*.example.com"));
//! assert!(matches(b"aaa", b"a*a"));
//!
//! assert!(!matches(b"ABC", b"abc"));
//! assert!(matches_ci(b"ABC", b"a?c"));
//! ```
//!
//! # Case Mappings
//!
//! Case-insensitive matching folds both operands with a single-byte [`CaseMapping`] before
//! comparing them. The metacharacters are never folded.
//!
//! ```
//! use wildcard::{CaseMapping, matches_with};
//!
//! assert!(matches_with(CaseMapping::Rfc1459, b"Nick[away]", b"nick{*}"));
//! assert!(!matches_with(CaseMapping::Ascii, b"Nick[away]", b"nick{*}"));
//! ```
//!
//! # Complexity
//!
//! Matching backtracks over star expansions, preferring the shortest one. Only the most recent
//! star is retried, so memory use is constant and the work is bounded by the product of the
//! subject and mask lengths, e.g. `*aaaaaaaab` against a long run of `a` retries the whole
//! literal tail at every position. Use [`try_matches`] with a [`Budget`] to cap the work spent
//! on untrusted masks.
//!
//! ```
//! use wildcard::{Budget, try_matches};
//!
//! let subject = [b'a'; 1000];
//! let result = try_matches(&subject, b"*aaaaaaaaaaaaaaaaaaaaaaaaaaaaab", Budget::new(1000));
//! assert!(result.is_err());
//! ```

mod fold;
mod mask;
mod matcher;

pub use fold::{CaseMapping, UnknownCaseMapping, fold, matches_ci, matches_with};
pub use mask::Mask;
pub use matcher::{Budget, BudgetExceeded, matches, try_matches};
