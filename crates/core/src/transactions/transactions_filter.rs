//! The query predicate shared by the listing and every report.

use serde::Serialize;

use super::Transaction;
use crate::months::MonthOrdinal;

/// Month-of-year clause plus an optional free-text clause.
///
/// A record matches when its sale month equals `month` and, if search text is
/// present, the text occurs (case-insensitively) in the title, in the
/// description, or in the price's text form. The price clause is textual on
/// purpose: searching `10` matches `100`, `210` and `1099`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionFilter {
    month: MonthOrdinal,
    search: Option<String>,
}

impl TransactionFilter {
    /// Month-only predicate.
    pub fn for_month(month: MonthOrdinal) -> Self {
        Self {
            month,
            search: None,
        }
    }

    /// Adds the free-text clause. Blank text leaves the predicate month-only;
    /// otherwise the text is matched as given, surrounding spaces included.
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);
        self
    }

    pub fn month(&self) -> MonthOrdinal {
        self.month
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// In-memory evaluation of the predicate. Store implementations must
    /// select exactly the records this accepts.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if transaction.sale_month() != self.month {
            return false;
        }
        match &self.search {
            None => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                transaction.title.to_lowercase().contains(&needle)
                    || transaction.description.to_lowercase().contains(&needle)
                    || transaction.price_text().contains(&needle)
            }
        }
    }
}
