//! Month domain models.

use std::collections::HashMap;
use std::fmt;

use chrono::Datelike;
use serde::Serialize;

use super::MonthError;

/// Canonical English month names, January first.
pub const ENGLISH_MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month of the year, 0-indexed (January = 0).
///
/// Stored dates number their months 1-12, so anything comparing against a
/// sale date must go through [`MonthOrdinal::calendar_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthOrdinal(u32);

impl MonthOrdinal {
    pub fn new(ordinal: u32) -> Option<Self> {
        (ordinal < 12).then_some(Self(ordinal))
    }

    /// Builds the ordinal from a 1-indexed calendar month.
    pub fn from_calendar_month(month: u32) -> Option<Self> {
        month.checked_sub(1).and_then(Self::new)
    }

    /// Month of a calendar date; year and time of day are discarded.
    pub fn of_date<D: Datelike>(date: &D) -> Self {
        Self(date.month0())
    }

    pub fn ordinal(&self) -> u32 {
        self.0
    }

    pub fn calendar_month(&self) -> u32 {
        self.0 + 1
    }

    pub fn english_name(&self) -> &'static str {
        ENGLISH_MONTH_NAMES[self.0 as usize]
    }
}

impl fmt::Display for MonthOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Immutable lookup from lower-case month name to ordinal.
///
/// Supplied to the services at construction so resolution can be tested in
/// isolation and the accepted vocabulary stays out of the query code.
#[derive(Debug, Clone)]
pub struct MonthTable {
    by_name: HashMap<String, MonthOrdinal>,
}

impl MonthTable {
    /// Builds a table from `(name, ordinal)` pairs. Names are lower-cased.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, MonthOrdinal)>,
        S: AsRef<str>,
    {
        let by_name = entries
            .into_iter()
            .map(|(name, ordinal)| (name.as_ref().trim().to_lowercase(), ordinal))
            .collect();
        Self { by_name }
    }

    /// The twelve canonical English month names.
    pub fn english() -> Self {
        Self::new(
            ENGLISH_MONTH_NAMES
                .iter()
                .zip(0u32..)
                .filter_map(|(name, idx)| MonthOrdinal::new(idx).map(|m| (*name, m))),
        )
    }

    /// Resolves a month name, ignoring case and surrounding whitespace.
    pub fn resolve(&self, name: &str) -> Result<MonthOrdinal, MonthError> {
        let key = name.trim().to_lowercase();
        self.by_name
            .get(&key)
            .copied()
            .ok_or_else(|| MonthError::Invalid(name.to_string()))
    }

    /// Resolves an optional request parameter.
    ///
    /// An absent or blank parameter is `Missing`, which callers report
    /// differently from a name that is present but unknown.
    pub fn resolve_param(&self, param: Option<&str>) -> Result<MonthOrdinal, MonthError> {
        match param.map(str::trim) {
            None | Some("") => Err(MonthError::Missing),
            Some(name) => self.resolve(name),
        }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        Self::english()
    }
}
