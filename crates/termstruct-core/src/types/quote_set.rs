//! Per-date quote sets and multi-date quote histories.

use serde::Serialize;

use super::{BondQuote, Date};
use crate::error::{CoreError, CoreResult};

/// Tolerance, in years, when comparing maturity ladders across dates.
pub const LADDER_TOLERANCE: f64 = 1e-9;

/// One date's bond quotes, sorted by ascending maturity.
///
/// The bootstrap is only defined for maturity-sorted input, so the ordering
/// is enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSet {
    date: Date,
    quotes: Vec<BondQuote>,
}

impl QuoteSet {
    /// Creates a quote set, validating every quote and the maturity order.
    ///
    /// # Errors
    ///
    /// - `CoreError::EmptyInput` if `quotes` is empty
    /// - `CoreError::InvalidQuote` if any quote fails validation
    /// - `CoreError::UnsortedMaturities` if maturities are not strictly ascending
    pub fn new(date: Date, quotes: Vec<BondQuote>) -> CoreResult<Self> {
        if quotes.is_empty() {
            return Err(CoreError::empty_input(format!("no quotes for {date}")));
        }

        for (index, quote) in quotes.iter().enumerate() {
            quote.validate(index)?;
        }

        for (index, pair) in quotes.windows(2).enumerate() {
            if pair[1].maturity <= pair[0].maturity {
                return Err(CoreError::UnsortedMaturities {
                    index: index + 1,
                    prev: pair[0].maturity,
                    current: pair[1].maturity,
                });
            }
        }

        Ok(Self { date, quotes })
    }

    /// Sorts `quotes` by maturity, then builds the set.
    pub fn sorted(date: Date, mut quotes: Vec<BondQuote>) -> CoreResult<Self> {
        quotes.sort_by(|a, b| a.maturity.total_cmp(&b.maturity));
        Self::new(date, quotes)
    }

    /// Observation date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Quotes in ascending maturity order.
    #[must_use]
    pub fn quotes(&self) -> &[BondQuote] {
        &self.quotes
    }

    /// Number of quotes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false for a constructed set; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Iterator over quotes.
    pub fn iter(&self) -> std::slice::Iter<'_, BondQuote> {
        self.quotes.iter()
    }

    /// Maturity ladder of this date.
    #[must_use]
    pub fn maturities(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.maturity).collect()
    }

    /// Returns true when both sets share the same maturity ladder.
    #[must_use]
    pub fn same_ladder(&self, other: &QuoteSet) -> bool {
        self.len() == other.len()
            && self
                .quotes
                .iter()
                .zip(&other.quotes)
                .all(|(a, b)| (a.maturity - b.maturity).abs() <= LADDER_TOLERANCE)
    }
}

impl<'a> IntoIterator for &'a QuoteSet {
    type Item = &'a BondQuote;
    type IntoIter = std::slice::Iter<'a, BondQuote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

/// Chronologically ordered quote sets sharing one maturity ladder.
///
/// Point-to-point comparison across dates (log returns at fixed tenor
/// indices) requires that every date quotes the same maturities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteHistory {
    sets: Vec<QuoteSet>,
}

impl QuoteHistory {
    /// Creates a history from quote sets.
    ///
    /// # Errors
    ///
    /// - `CoreError::EmptyInput` if `sets` is empty
    /// - `CoreError::NonChronological` if dates are not strictly increasing
    /// - `CoreError::LadderMismatch` if any date's maturities differ from the first
    pub fn new(sets: Vec<QuoteSet>) -> CoreResult<Self> {
        let Some(first) = sets.first() else {
            return Err(CoreError::empty_input("no quote sets"));
        };

        for (index, pair) in sets.windows(2).enumerate() {
            if pair[1].date() <= pair[0].date() {
                return Err(CoreError::NonChronological {
                    index: index + 1,
                    prev: pair[0].date(),
                    current: pair[1].date(),
                });
            }
        }

        for set in &sets[1..] {
            if !set.same_ladder(first) {
                return Err(CoreError::LadderMismatch {
                    date: set.date(),
                    expected: first.maturities(),
                    got: set.maturities(),
                });
            }
        }

        log::debug!(
            "quote history: {} dates x {} maturities",
            sets.len(),
            first.len()
        );

        Ok(Self { sets })
    }

    /// Quote sets in chronological order.
    #[must_use]
    pub fn sets(&self) -> &[QuoteSet] {
        &self.sets
    }

    /// Observation dates in chronological order.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        self.sets.iter().map(QuoteSet::date).collect()
    }

    /// Shared maturity ladder.
    #[must_use]
    pub fn ladder(&self) -> Vec<f64> {
        self.sets[0].maturities()
    }

    /// Number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Always false for a constructed history; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterator over quote sets.
    pub fn iter(&self) -> std::slice::Iter<'_, QuoteSet> {
        self.sets.iter()
    }
}

impl<'a> IntoIterator for &'a QuoteHistory {
    type Item = &'a QuoteSet;
    type IntoIter = std::slice::Iter<'a, QuoteSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
