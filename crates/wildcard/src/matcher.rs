use std::convert::Infallible;
use std::fmt;

use memchr::memchr;

const STAR: u8 = b'*';
const ANY: u8 = b'?';

/// Tests whether `subject` fully matches `mask`, comparing bytes case-sensitively.
///
/// The function is total: any pair of byte strings yields a result, including empty ones.
/// An empty mask matches only an empty subject, and a mask of stars matches anything.
/// It runs in constant memory and at most `O(subject.len() * mask.len())` time.
///
/// # Examples
///
/// ```
/// use wildcard::matches;
///
/// assert!(matches(b"", b""));
/// assert!(matches(b"", b"*"));
/// assert!(!matches(b"", b"?"));
/// assert!(!matches(b"x", b""));
///
/// assert!(matches(b"aXbXc", b"a*b*c"));
/// assert!(matches(b"abc", b"a*b*c"));
/// assert!(!matches(b"acb", b"a*b*c"));
/// ```
#[inline]
pub fn matches(subject: &[u8], mask: &[u8]) -> bool {
    match walk(subject, mask, &mut Unmetered) {
        Ok(matched) => matched,
        Err(never) => match never {},
    }
}

/// Tests whether `subject` fully matches `mask`, giving up once `budget` is spent.
///
/// Produces the same result as [`matches`] whenever the budget is sufficient.
///
/// # Examples
///
/// ```
/// use wildcard::{Budget, try_matches};
///
/// assert_eq!(try_matches(b"host.example.com", b"*.example.com", Budget::new(100)), Ok(true));
/// assert_eq!(try_matches(b"aaaa", b"*b", Budget::unlimited()), Ok(false));
/// ```
pub fn try_matches(subject: &[u8], mask: &[u8], budget: Budget) -> Result<bool, BudgetExceeded> {
    walk(subject, mask, &mut budget.meter())
}

// ---

/// Limit on the work a single match may perform.
///
/// A step is one comparison of a subject byte against a mask byte, or entering a run of stars.
/// Retrying from the last star, including skipping ahead to the next occurrence of the
/// literal after it, is part of the comparison that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Budget {
    limit: Option<u64>,
}

impl Budget {
    /// Creates a budget allowing at most `limit` steps.
    pub fn new(limit: u64) -> Self {
        Self { limit: Some(limit) }
    }

    /// Creates a budget that is never exhausted.
    pub fn unlimited() -> Self {
        Self { limit: None }
    }

    /// Returns the step limit, if any.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    fn meter(self) -> Remaining {
        Remaining {
            left: self.limit.unwrap_or(u64::MAX),
            limit: self.limit.unwrap_or(u64::MAX),
        }
    }
}

impl From<Option<u64>> for Budget {
    fn from(limit: Option<u64>) -> Self {
        Self { limit }
    }
}

/// Error returned by [`try_matches`] when the [`Budget`] runs out before a decision is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetExceeded {
    pub limit: u64,
}

impl fmt::Display for BudgetExceeded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "wildcard match exceeded the limit of {} steps", self.limit)
    }
}

impl std::error::Error for BudgetExceeded {}

// ---

trait Meter {
    type Error;

    fn tick(&mut self) -> Result<(), Self::Error>;
}

struct Unmetered;

impl Meter for Unmetered {
    type Error = Infallible;

    #[inline(always)]
    fn tick(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

struct Remaining {
    left: u64,
    limit: u64,
}

impl Meter for Remaining {
    type Error = BudgetExceeded;

    #[inline]
    fn tick(&mut self) -> Result<(), BudgetExceeded> {
        match self.left.checked_sub(1) {
            Some(left) => {
                self.left = left;
                Ok(())
            }
            None => Err(BudgetExceeded { limit: self.limit }),
        }
    }
}

// ---

// Only the most recent star is ever revisited: any expansion of an earlier star that
// reaches the later one can be replayed by the later star alone. Memory use is constant
// and the work is bounded by the product of the subject and mask lengths.
fn walk<M: Meter>(subject: &[u8], mask: &[u8], meter: &mut M) -> Result<bool, M::Error> {
    let (mut s, mut m) = (0, 0);
    // mask position after the last star and the subject position its expansion ends at
    let mut resume: Option<(usize, usize)> = None;

    while s < subject.len() {
        meter.tick()?;

        if mask.get(m) == Some(&STAR) {
            while mask.get(m) == Some(&STAR) {
                m += 1;
            }
            if m == mask.len() {
                return Ok(true);
            }
            resume = Some((m, s));
            continue;
        }

        match (mask.get(m), resume) {
            (Some(&wc), _) if wc == subject[s] || wc == ANY => {
                s += 1;
                m += 1;
            }
            (_, Some((after, end))) => {
                // the star absorbs one more byte, or everything up to the next occurrence of the literal
                let end = match mask[after] {
                    ANY => end + 1,
                    wc => match memchr(wc, &subject[end + 1..]) {
                        Some(i) => end + 1 + i,
                        None => return Ok(false),
                    },
                };
                resume = Some((after, end));
                s = end;
                m = after;
            }
            (_, None) => return Ok(false),
        }
    }

    Ok(mask[m..].iter().all(|&b| b == STAR))
}
