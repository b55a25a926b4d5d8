//! Geo-join of sales records with the state reference tables.
//!
//! Records whose state is missing from a reference table keep `None` geo
//! fields. They are left out of the per-state totals and get no map marker,
//! but never abort the join.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::formatting::{format_thousands, round1};
use crate::models::SalesRecord;
use crate::reference::{state_abbreviation, state_coordinates};

/// A sales record joined with its state's abbreviation and coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: SalesRecord,
    pub abbrev: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Summed revenue of one state, keyed by abbreviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRevenue {
    pub abbrev: String,
    pub total_sales: f64,
    /// Tooltip text, `"TX: $150"`.
    pub label: String,
}

/// Label marker placed at a record's state coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub label: Option<String>,
}

/// Choropleth series plus label markers for the revenue map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapData {
    pub states: Vec<StateRevenue>,
    pub markers: Vec<MapMarker>,
    /// Records whose state had no abbreviation.
    pub unmatched_records: usize,
}

/// One slice of a share (pie) chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSlice {
    pub label: String,
    pub count: usize,
    /// Percentage of the displayed total, rounded to one decimal.
    pub percent: f64,
    /// `"40.0% (2)"`
    pub display: String,
}

pub fn enrich(records: &[SalesRecord]) -> Vec<EnrichedRecord> {
    let mut misses = BTreeSet::new();
    let enriched: Vec<EnrichedRecord> = records
        .iter()
        .map(|record| {
            let abbrev = state_abbreviation(&record.state);
            let coords = state_coordinates(&record.state);
            if abbrev.is_none() || coords.is_none() {
                misses.insert(record.state.as_str());
            }
            EnrichedRecord {
                record: record.clone(),
                abbrev: abbrev.map(str::to_string),
                lat: coords.map(|c| c.lat),
                lon: coords.map(|c| c.lon),
            }
        })
        .collect();

    if !misses.is_empty() {
        debug!("No reference entry for states: {:?}", misses);
    }
    enriched
}

/// Map tooltip text for a state's revenue.
pub fn state_label(abbrev: &str, revenue: f64) -> String {
    format!("{}: ${}", abbrev, format_thousands(revenue))
}

/// Sum revenue per abbreviation, ordered by abbreviation. Records without an
/// abbreviation are skipped.
pub fn aggregate_by_state(enriched: &[EnrichedRecord]) -> Vec<StateRevenue> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for row in enriched {
        if let Some(abbrev) = row.abbrev.as_deref() {
            *totals.entry(abbrev).or_insert(0.0) += row.record.total_sales;
        }
    }

    totals
        .into_iter()
        .map(|(abbrev, total_sales)| StateRevenue {
            abbrev: abbrev.to_string(),
            total_sales,
            label: state_label(abbrev, total_sales),
        })
        .collect()
}

/// Percentage-of-total slices computed over exactly the values given.
///
/// Each slice shows its absolute count next to the rounded percentage. When
/// the total is zero every slice reports 0.0%.
pub fn share_labels(values: &[(String, usize)]) -> Vec<ShareSlice> {
    let total: usize = values.iter().map(|(_, count)| count).sum();

    values
        .iter()
        .map(|(label, count)| {
            let percent = if total == 0 {
                0.0
            } else {
                round1(*count as f64 / total as f64 * 100.0)
            };
            ShareSlice {
                label: label.clone(),
                count: *count,
                percent,
                display: format!("{:.1}% ({})", percent, count),
            }
        })
        .collect()
}

/// Build the map panel from the filtered subset.
pub fn build_map_data(filtered: &[SalesRecord]) -> MapData {
    let enriched = enrich(filtered);
    let states = aggregate_by_state(&enriched);
    let labels: BTreeMap<&str, &str> = states
        .iter()
        .map(|s| (s.abbrev.as_str(), s.label.as_str()))
        .collect();

    let markers = enriched
        .iter()
        .filter_map(|row| {
            let (lat, lon) = (row.lat?, row.lon?);
            Some(MapMarker {
                state: row.record.state.clone(),
                lat,
                lon,
                label: row
                    .abbrev
                    .as_deref()
                    .and_then(|a| labels.get(a))
                    .map(|l| l.to_string()),
            })
        })
        .collect();

    MapData {
        states,
        markers,
        unmatched_records: enriched.iter().filter(|r| r.abbrev.is_none()).count(),
    }
}
