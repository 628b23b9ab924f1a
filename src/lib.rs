mod consts;
mod locale;
mod prelude;
mod snapshot;
mod types;

pub use consts::*;
pub use locale::Locale;
pub use snapshot::{ClockSnapshot, SnapshotError};
pub use types::{Month, Year};

use crate::prelude::*;
use serde::Serialize;

/// One calendar month prepared for display: a locale-fixed label paired
/// with its numeric value (1 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{label}")]
pub struct MonthDescriptor {
    /// Short human-readable label, e.g. "3月" or "March"
    pub label: &'static str,
    /// Calendar month number in [1,12]
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CatalogError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Unsupported locale: {_0}")]
    UnsupportedLocale(String),
}

impl std::error::Error for CatalogError {}

/// The fixed, ordered catalog of all twelve month descriptors for one locale.
///
/// Always holds exactly twelve descriptors with values 1..=12 ascending.
/// Immutable after construction; constructing it twice for the same locale
/// yields equal catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCatalog {
    locale: Locale,
    descriptors: [MonthDescriptor; MONTHS_PER_YEAR],
}

impl MonthCatalog {
    /// Builds the catalog for the given locale.
    /// Deterministic and infallible: label tables are complete static arrays.
    pub fn new(locale: Locale) -> Self {
        let labels = locale.month_labels();
        let descriptors = core::array::from_fn(|index| {
            let value = index as u8 + 1;
            MonthDescriptor {
                label: labels[value as usize],
                value,
            }
        });
        Self {
            locale,
            descriptors,
        }
    }

    /// Returns the locale this catalog was built for
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns all twelve descriptors, values 1..=12 ascending
    pub const fn descriptors(&self) -> &[MonthDescriptor; MONTHS_PER_YEAR] {
        &self.descriptors
    }

    /// Iterates the descriptors in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &MonthDescriptor> {
        self.descriptors.iter()
    }

    /// Returns the descriptor for a validated month
    pub const fn get(&self, month: Month) -> MonthDescriptor {
        self.descriptors[month.get() as usize - 1]
    }

    /// Returns the display label for a validated month
    pub const fn label(&self, month: Month) -> &'static str {
        self.get(month).label
    }
}

impl Default for MonthCatalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl<'a> IntoIterator for &'a MonthCatalog {
    type Item = &'a MonthDescriptor;
    type IntoIter = core::slice::Iter<'a, MonthDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

impl Serialize for MonthCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.descriptors.serialize(serializer)
    }
}
