//! Price bands used to bucket records for the histogram.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{Result, ValidationError};

/// An inclusive `[min, max]` price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBand {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceBand {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min.normalize(), self.max.normalize())
    }
}

/// Ordered, non-overlapping list of price bands.
///
/// Bucket boundaries are a reporting decision, so the table is supplied as
/// configuration rather than derived from the data. The first band covers
/// `[min, max]`; every later band covers `(previous.max, max]`, so a price
/// such as `100.5` lands in `101-200` and nothing between two labels is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBandTable {
    bands: Vec<PriceBand>,
}

const DEFAULT_BANDS: [(i64, i64); 7] = [
    (0, 100),
    (101, 200),
    (201, 300),
    (301, 400),
    (401, 500),
    (501, 1000),
    (1001, 5000),
];

impl PriceBandTable {
    /// Validates and builds a table: at least one band, non-negative bounds,
    /// `min <= max`, strictly ascending without overlap.
    pub fn new(bands: Vec<PriceBand>) -> Result<Self> {
        if bands.is_empty() {
            return Err(invalid("at least one price band is required"));
        }
        for band in &bands {
            if band.min.is_sign_negative() {
                return Err(invalid(format!("band {} has a negative bound", band)));
            }
            if band.min > band.max {
                return Err(invalid(format!("band {} has min above max", band)));
            }
        }
        for pair in bands.windows(2) {
            if pair[1].min <= pair[0].max {
                return Err(invalid(format!(
                    "band {} overlaps or precedes band {}",
                    pair[1], pair[0]
                )));
            }
        }
        Ok(Self { bands })
    }

    /// Parses `"0-100,101-200,..."`.
    pub fn parse(spec: &str) -> Result<Self> {
        let bands = spec
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_band)
            .collect::<Result<Vec<_>>>()?;
        Self::new(bands)
    }

    /// Index of the band a price is counted in, or `None` when it lies below
    /// the first band or above the last.
    pub fn position(&self, price: Decimal) -> Option<usize> {
        let first = self.bands.first()?;
        if price < first.min {
            return None;
        }
        self.bands.iter().position(|band| price <= band.max)
    }

    pub fn bands(&self) -> &[PriceBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Default for PriceBandTable {
    /// The seven dashboard bands, 0-100 through 1001-5000.
    fn default() -> Self {
        Self {
            bands: DEFAULT_BANDS
                .iter()
                .map(|&(min, max)| PriceBand::new(Decimal::from(min), Decimal::from(max)))
                .collect(),
        }
    }
}

fn parse_band(raw: &str) -> Result<PriceBand> {
    let (min, max) = raw
        .split_once('-')
        .ok_or_else(|| invalid(format!("price band '{}' is not of the form min-max", raw)))?;
    let min = Decimal::from_str(min.trim()).map_err(ValidationError::from)?;
    let max = Decimal::from_str(max.trim()).map_err(ValidationError::from)?;
    Ok(PriceBand::new(min, max))
}

fn invalid(message: impl Into<String>) -> crate::Error {
    ValidationError::InvalidInput(message.into()).into()
}
