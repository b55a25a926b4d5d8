use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::models::{DatasetColumn, SalesRecord};

/// Wire representation of the wildcard slicer value.
pub const WILDCARD: &str = "All";

/// Value of one slicer: either no predicate or an exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Slicer {
    #[default]
    All,
    Exact(String),
}

impl Slicer {
    pub fn exact(value: impl Into<String>) -> Self {
        Slicer::Exact(value.into())
    }

    /// Build a slicer from an optional raw value. Absent, empty and `"All"`
    /// all mean the wildcard.
    pub fn from_optional(value: Option<&str>) -> Self {
        match value {
            None => Slicer::All,
            Some(v) => Slicer::from(v.to_string()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Slicer::All)
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Slicer::All => true,
            Slicer::Exact(expected) => expected == value,
        }
    }

    /// Text shown for the slicer in the "selected values" panel.
    pub fn display_value(&self) -> &str {
        match self {
            Slicer::All => WILDCARD,
            Slicer::Exact(value) => value,
        }
    }
}

impl From<String> for Slicer {
    fn from(value: String) -> Self {
        if value.is_empty() || value == WILDCARD {
            Slicer::All
        } else {
            Slicer::Exact(value)
        }
    }
}

impl From<Slicer> for String {
    fn from(slicer: Slicer) -> Self {
        match slicer {
            Slicer::All => WILDCARD.to_string(),
            Slicer::Exact(value) => value,
        }
    }
}

impl fmt::Display for Slicer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_value())
    }
}

/// Active selection of the three dashboard slicers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub retailer: Slicer,
    #[serde(default)]
    pub month: Slicer,
    #[serde(default)]
    pub state: Slicer,
}

/// A slicer value that is not among the options offered for its column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidSlicerValue {
    pub column: DatasetColumn,
    pub value: String,
}

impl fmt::Display for InvalidSlicerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {} option", self.value, self.column)
    }
}

impl FilterSelection {
    /// The identity selection: every slicer is the wildcard.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(retailer: Slicer, month: Slicer, state: Slicer) -> Self {
        Self {
            retailer,
            month,
            state,
        }
    }

    pub fn from_query(retailer: Option<&str>, month: Option<&str>, state: Option<&str>) -> Self {
        Self::new(
            Slicer::from_optional(retailer),
            Slicer::from_optional(month),
            Slicer::from_optional(state),
        )
    }

    pub fn is_wildcard(&self) -> bool {
        self.retailer.is_wildcard() && self.month.is_wildcard() && self.state.is_wildcard()
    }

    /// True when the record satisfies every non-wildcard slicer.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.retailer.matches(&record.retailer)
            && self.month.matches(&record.month)
            && self.state.matches(&record.state)
    }

    fn slicers(&self) -> [(DatasetColumn, &Slicer); 3] {
        [
            (DatasetColumn::Retailer, &self.retailer),
            (DatasetColumn::Month, &self.month),
            (DatasetColumn::State, &self.state),
        ]
    }

    /// Values in this selection that `options` does not offer.
    pub fn invalid_values(&self, options: &SlicerOptions) -> Vec<InvalidSlicerValue> {
        self.slicers()
            .into_iter()
            .filter_map(|(column, slicer)| match slicer {
                Slicer::Exact(value) if !options.offers(column, value) => {
                    Some(InvalidSlicerValue {
                        column,
                        value: value.clone(),
                    })
                }
                _ => None,
            })
            .collect()
    }
}

/// Option lists offered by the three slicers, wildcard first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlicerOptions {
    pub retailers: Vec<String>,
    pub months: Vec<String>,
    pub states: Vec<String>,
}

impl SlicerOptions {
    pub fn from_records(records: &[SalesRecord]) -> Self {
        Self {
            retailers: slicer_options(records, DatasetColumn::Retailer),
            months: slicer_options(records, DatasetColumn::Month),
            states: slicer_options(records, DatasetColumn::State),
        }
    }

    pub fn for_column(&self, column: DatasetColumn) -> &[String] {
        match column {
            DatasetColumn::Retailer => &self.retailers,
            DatasetColumn::Month => &self.months,
            DatasetColumn::State => &self.states,
            _ => &[],
        }
    }

    fn offers(&self, column: DatasetColumn, value: &str) -> bool {
        // Options are sorted after the leading wildcard.
        self.for_column(column)
            .get(1..)
            .is_some_and(|values| values.binary_search_by(|v| v.as_str().cmp(value)).is_ok())
    }
}

/// Options for one slicer: the wildcard followed by the distinct values of
/// `column`, sorted case-sensitively.
pub fn slicer_options(records: &[SalesRecord], column: DatasetColumn) -> Vec<String> {
    let distinct: BTreeSet<&str> = records.iter().filter_map(|r| r.value(column)).collect();

    std::iter::once(WILDCARD.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}

/// Apply a full selection. Predicates are ANDed; wildcard slicers add none.
/// The result keeps dataset order.
pub fn filter_records(records: &[SalesRecord], selection: &FilterSelection) -> Vec<SalesRecord> {
    if selection.is_wildcard() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect()
}
