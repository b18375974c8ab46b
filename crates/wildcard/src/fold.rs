use std::fmt;
use std::str::FromStr;

use crate::matcher::{Budget, BudgetExceeded, matches, try_matches};

/// Single-byte case mapping used to canonicalize subjects and masks.
///
/// All mappings fold to lowercase. Bytes outside of a mapping's table pass through unchanged,
/// the `*` and `?` metacharacters are never folded by any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMapping {
    /// `A`-`Z` fold to `a`-`z`.
    #[default]
    Ascii,
    /// [`Ascii`](Self::Ascii) plus `[]\~` folding to `{}|^`.
    Rfc1459,
    /// [`Ascii`](Self::Ascii) plus `[]\` folding to `{}|`.
    StrictRfc1459,
}

impl CaseMapping {
    /// All supported mappings.
    pub const ALL: [Self; 3] = [Self::Ascii, Self::Rfc1459, Self::StrictRfc1459];

    /// Returns the canonical name of the mapping, as advertised by IRC servers in `CASEMAPPING`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Rfc1459 => "rfc1459",
            Self::StrictRfc1459 => "strict-rfc1459",
        }
    }

    /// Folds a single byte.
    #[inline]
    pub fn fold(self, b: u8) -> u8 {
        match (self, b) {
            (_, b'A'..=b'Z') => b.to_ascii_lowercase(),
            (Self::Rfc1459 | Self::StrictRfc1459, b'[') => b'{',
            (Self::Rfc1459 | Self::StrictRfc1459, b']') => b'}',
            (Self::Rfc1459 | Self::StrictRfc1459, b'\\') => b'|',
            (Self::Rfc1459, b'~') => b'^',
            _ => b,
        }
    }

    /// Returns a folded copy of `bytes`.
    pub fn fold_bytes(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::Ascii => bytes.to_ascii_lowercase(),
            _ => bytes.iter().map(|&b| self.fold(b)).collect(),
        }
    }
}

impl fmt::Display for CaseMapping {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseMapping {
    type Err = UnknownCaseMapping;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mapping| mapping.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCaseMapping(s.to_owned()))
    }
}

/// Error returned when parsing an unsupported [`CaseMapping`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCaseMapping(pub String);

impl fmt::Display for UnknownCaseMapping {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown case mapping {:?}, use any of ", self.0)?;
        for (i, mapping) in CaseMapping::ALL.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", mapping.name())?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownCaseMapping {}

// ---

/// Folds a single byte with the given mapping.
///
/// Pure, allocation-free and total over the byte range.
#[inline]
pub fn fold(mapping: CaseMapping, b: u8) -> u8 {
    mapping.fold(b)
}

/// Tests whether `subject` fully matches `mask`, ignoring ASCII case.
///
/// Both operands are folded into private copies, the caller's buffers are left untouched.
///
/// # Examples
///
/// ```
/// use wildcard::matches_ci;
///
/// assert!(matches_ci(b"ABC", b"abc"));
/// assert!(matches_ci(b"ABC", b"a?c"));
/// assert!(!matches_ci(b"ABD", b"a?c"));
/// ```
#[inline]
pub fn matches_ci(subject: &[u8], mask: &[u8]) -> bool {
    matches_with(CaseMapping::Ascii, subject, mask)
}

/// Tests whether `subject` fully matches `mask` after folding both with `mapping`.
///
/// # Examples
///
/// ```
/// use wildcard::{CaseMapping, matches_with};
///
/// assert!(matches_with(CaseMapping::Rfc1459, b"NICK[m]", b"nick{*}"));
/// assert!(matches_with(CaseMapping::Rfc1459, b"away~", b"AWAY^"));
/// assert!(!matches_with(CaseMapping::StrictRfc1459, b"away~", b"AWAY^"));
/// ```
pub fn matches_with(mapping: CaseMapping, subject: &[u8], mask: &[u8]) -> bool {
    let (subject, mask) = fold_operands(mapping, subject, mask);
    matches(&subject, &mask)
}

/// Budgeted variant of [`matches_with`], where `None` compares case-sensitively.
pub(crate) fn try_matches_with(
    mapping: Option<CaseMapping>,
    subject: &[u8],
    mask: &[u8],
    budget: Budget,
) -> Result<bool, BudgetExceeded> {
    match mapping {
        None => try_matches(subject, mask, budget),
        Some(mapping) => {
            let (subject, mask) = fold_operands(mapping, subject, mask);
            try_matches(&subject, &mask, budget)
        }
    }
}

fn fold_operands(mapping: CaseMapping, subject: &[u8], mask: &[u8]) -> (Vec<u8>, Vec<u8>) {
    (mapping.fold_bytes(subject), mapping.fold_bytes(mask))
}
