//! Sequence evaluation over `1..=N`.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use super::config::Configuration;
use super::types::{Entry, UpperBound};
use crate::error::{FizzBuzzError, Result};

/// Labels every integer in `1..=upper_bound`.
///
/// `None` selects the default FizzBuzz rules. The bound is checked before
/// any entry is produced; on error nothing is returned.
///
/// Entry `k` (0-based) is the label of `k + 1`.
///
/// # Panics
///
/// The whole sequence is allocated up front, so a bound whose entries do
/// not fit in memory panics with a capacity overflow (on 32-bit targets,
/// any bound above `u32::MAX`). Use [`Configuration::labels`] to walk
/// large ranges lazily.
///
/// # Examples
///
/// ```
/// use u_fizzbuzz::labeling::{evaluate, Entry};
/// use u_fizzbuzz::FizzBuzzError;
///
/// let entries = evaluate(5, None).unwrap();
/// assert_eq!(entries[2], Entry::Replacement("Fizz".into()));
/// assert_eq!(entries[3], Entry::Original(4));
///
/// assert_eq!(evaluate(3.5, None), Err(FizzBuzzError::InvalidRange));
/// ```
pub fn evaluate<N>(upper_bound: N, config: Option<&Configuration>) -> Result<Vec<Entry>>
where
    N: TryInto<UpperBound>,
    FizzBuzzError: From<N::Error>,
{
    let config = config.unwrap_or_else(|| Configuration::shared_default());
    Ok(config.labels(upper_bound)?.collect())
}

impl Configuration {
    /// Lazily labels `1..=upper_bound`.
    ///
    /// Yields the same entries as [`evaluate`], one at a time.
    pub fn labels<N>(&self, upper_bound: N) -> Result<Labels<'_>>
    where
        N: TryInto<UpperBound>,
        FizzBuzzError: From<N::Error>,
    {
        let upper_bound = upper_bound.try_into()?;
        Ok(Labels {
            config: self,
            range: 1..=upper_bound.get(),
        })
    }
}

/// Iterator returned by [`Configuration::labels`].
#[derive(Debug, Clone)]
pub struct Labels<'a> {
    config: &'a Configuration,
    range: RangeInclusive<u64>,
}

impl Iterator for Labels<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.range.next().map(|n| self.config.label(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Entry> {
        self.range.nth(n).map(|i| self.config.label(i))
    }
}

impl DoubleEndedIterator for Labels<'_> {
    fn next_back(&mut self) -> Option<Entry> {
        self.range.next_back().map(|n| self.config.label(n))
    }
}

impl FusedIterator for Labels<'_> {}
