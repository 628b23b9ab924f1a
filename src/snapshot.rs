use crate::CatalogError;
use crate::prelude::*;
use crate::types::{Month, Year};
use chrono::{DateTime, Datelike, Local, TimeZone};

/// The current month and year, captured once from the host clock at
/// application bootstrap and read-only thereafter.
///
/// The snapshot never re-samples the clock: a value captured in March still
/// reports March after the calendar rolls over. Callers that need freshness
/// call [`ClockSnapshot::capture`] again and pass the new value along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct ClockSnapshot {
    year: Year,
    month: Month,
}

/// Error type for clock snapshot capture.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// Host clock reported a year outside the representable range.
    #[error("Host clock reported an unrepresentable year: {0}")]
    YearOutOfRange(i32),

    /// Clock components failed month/year validation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ClockSnapshot {
    /// Captures the current month and year from the host clock (local time).
    ///
    /// Intended to run once during application bootstrap; treat a failure as
    /// an unrecoverable startup fault rather than masking it.
    ///
    /// # Errors
    /// Returns `SnapshotError` if the clock reports a date outside the
    /// supported year range.
    pub fn capture() -> Result<Self, SnapshotError> {
        Self::from_datetime(&Local::now())
    }

    fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self, SnapshotError> {
        let raw_year = datetime.year();
        let year = u16::try_from(raw_year)
            .map_err(|_| SnapshotError::YearOutOfRange(raw_year))
            .and_then(|y| Year::new(y).map_err(SnapshotError::from))?;
        // chrono guarantees month() is in 1..=12
        let month = Month::new(datetime.month() as u8)?;
        Ok(Self { year, month })
    }

    /// Builds a snapshot from already-validated components.
    /// Useful for injection during tests or when the clock is read elsewhere.
    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Returns the captured month as u8, in [1,12]
    pub const fn current_month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the captured four-digit year as u16
    pub const fn current_year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the captured Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the captured Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Checks whether `month` equals the captured current month.
    ///
    /// Accepts any integer; values outside [1,12] simply compare unequal,
    /// no error is raised.
    pub fn is_current_month(&self, month: i32) -> bool {
        month == i32::from(self.month.get())
    }
}
