use std::fmt;

use crate::fold::{CaseMapping, matches_with, try_matches_with};
use crate::matcher::{Budget, BudgetExceeded, matches};

/// An owned wildcard mask.
///
/// Any byte string is a valid mask, so construction is infallible.
///
/// # Examples
///
/// ```
/// use wildcard::{CaseMapping, Mask};
///
/// let mask = Mask::new("*!*@*.example.com");
/// assert!(mask.matches("nick!user@irc.example.com"));
/// assert!(!mask.matches("nick!user@example.com"));
/// assert!(mask.matches_ci("Nick!User@IRC.Example.COM"));
/// assert!(mask.matches_with(CaseMapping::Rfc1459, "Nick[m]!u@A.EXAMPLE.COM"));
/// assert_eq!(mask.to_string(), "*!*@*.example.com");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Mask {
    raw: Vec<u8>,
}

impl Mask {
    /// Creates a new mask from a byte string.
    pub fn new(raw: impl AsRef<[u8]>) -> Self {
        Self {
            raw: raw.as_ref().to_vec(),
        }
    }

    /// Returns the raw bytes of the mask.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Returns `true` if the mask contains no wildcards.
    pub fn is_literal(&self) -> bool {
        !self.raw.iter().any(|&b| b == b'*' || b == b'?')
    }

    /// Tests whether `subject` fully matches the mask, comparing bytes case-sensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Mask;
    ///
    /// let mask = Mask::new("nick!*@*");
    /// assert!(mask.matches("nick!user@host"));
    /// assert!(mask.matches(b"nick!@"));
    /// assert!(!mask.matches("Nick!user@host"));
    /// assert!(!mask.matches("nick"));
    /// ```
    #[inline]
    pub fn matches(&self, subject: impl AsRef<[u8]>) -> bool {
        matches(subject.as_ref(), &self.raw)
    }

    /// Tests whether `subject` fully matches the mask, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Mask;
    ///
    /// let mask = Mask::new("*.Example.com");
    /// assert!(mask.matches_ci("IRC.EXAMPLE.COM"));
    /// assert!(!mask.matches_ci("EXAMPLE.COM"));
    /// ```
    #[inline]
    pub fn matches_ci(&self, subject: impl AsRef<[u8]>) -> bool {
        self.matches_with(CaseMapping::Ascii, subject)
    }

    /// Tests whether `subject` fully matches the mask after folding both with `mapping`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{CaseMapping, Mask};
    ///
    /// let mask = Mask::new("[bot]*!*@*");
    /// assert!(mask.matches_with(CaseMapping::Rfc1459, "{BOT}42!u@h"));
    /// assert!(!mask.matches_with(CaseMapping::Ascii, "{BOT}42!u@h"));
    /// ```
    pub fn matches_with(&self, mapping: CaseMapping, subject: impl AsRef<[u8]>) -> bool {
        matches_with(mapping, subject.as_ref(), &self.raw)
    }

    /// Matches under a case mapping and a step budget.
    ///
    /// Pass `None` as `mapping` for a case-sensitive comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{Budget, BudgetExceeded, CaseMapping, Mask};
    ///
    /// let mask = Mask::new("*!*@*.EXAMPLE.com");
    /// assert_eq!(mask.try_matches(None, "n!u@a.example.com", Budget::new(100)), Ok(false));
    /// assert_eq!(mask.try_matches(Some(CaseMapping::Ascii), "n!u@a.example.com", Budget::new(100)), Ok(true));
    /// assert_eq!(
    ///     mask.try_matches(Some(CaseMapping::Ascii), "n!u@a.example.com", Budget::new(3)),
    ///     Err(BudgetExceeded { limit: 3 })
    /// );
    /// ```
    pub fn try_matches(
        &self,
        mapping: Option<CaseMapping>,
        subject: impl AsRef<[u8]>,
        budget: Budget,
    ) -> Result<bool, BudgetExceeded> {
        try_matches_with(mapping, subject.as_ref(), &self.raw, budget)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.raw))
    }
}

impl From<&str> for Mask {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Mask {
    fn from(raw: String) -> Self {
        Self { raw: raw.into_bytes() }
    }
}

impl From<Vec<u8>> for Mask {
    fn from(raw: Vec<u8>) -> Self {
        Self { raw }
    }
}

impl AsRef<[u8]> for Mask {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}
