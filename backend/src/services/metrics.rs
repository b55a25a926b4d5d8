use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::SalesRecord;
use crate::transformations::FilterSelection;

/// Scalar summaries over a sequence of records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub month_count: usize,
    pub retailer_count: usize,
    pub state_count: usize,
    pub total_revenue: f64,
}

/// Active slicer values together with the revenue they select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedValues {
    pub month: String,
    pub retailer: String,
    pub state: String,
    pub total_revenue: f64,
}

/// Metrics panel: review metrics ignore the selection, the rest honour it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub review: AggregateMetrics,
    pub selected: SelectedValues,
    pub filtered: AggregateMetrics,
}

/// Compute distinct counts and total revenue. An empty input yields zeros.
pub fn summarize(records: &[SalesRecord]) -> AggregateMetrics {
    let mut months = HashSet::new();
    let mut retailers = HashSet::new();
    let mut states = HashSet::new();
    let mut total_revenue = 0.0;

    for record in records {
        months.insert(record.month.as_str());
        retailers.insert(record.retailer.as_str());
        states.insert(record.state.as_str());
        total_revenue += record.total_sales;
    }

    AggregateMetrics {
        month_count: months.len(),
        retailer_count: retailers.len(),
        state_count: states.len(),
        total_revenue,
    }
}

pub fn selected_values(selection: &FilterSelection, filtered: &[SalesRecord]) -> SelectedValues {
    SelectedValues {
        month: selection.month.display_value().to_string(),
        retailer: selection.retailer.display_value().to_string(),
        state: selection.state.display_value().to_string(),
        total_revenue: filtered.iter().map(|r| r.total_sales).sum(),
    }
}

pub fn compute_metrics_summary(
    records: &[SalesRecord],
    filtered: &[SalesRecord],
    selection: &FilterSelection,
) -> MetricsSummary {
    MetricsSummary {
        review: summarize(records),
        selected: selected_values(selection, filtered),
        filtered: summarize(filtered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformations::Slicer;

    fn record(retailer: &str, month: &str, state: &str, total_sales: f64) -> SalesRecord {
        SalesRecord {
            retailer: retailer.to_string(),
            month: month.to_string(),
            state: state.to_string(),
            region: "West".to_string(),
            product: "Apparel".to_string(),
            total_sales,
        }
    }

    #[test]
    fn test_summarize_counts_distinct_values() {
        let records = vec![
            record("Walmart", "January", "Texas", 100.0),
            record("Walmart", "February", "Texas", 50.0),
            record("Amazon", "January", "Maine", 25.0),
        ];
        let metrics = summarize(&records);

        assert_eq!(metrics.month_count, 2);
        assert_eq!(metrics.retailer_count, 2);
        assert_eq!(metrics.state_count, 2);
        assert_eq!(metrics.total_revenue, 175.0);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), AggregateMetrics::default());
    }

    #[test]
    fn test_selected_values_echo_selection() {
        let filtered = vec![record("Amazon", "January", "Maine", 25.0)];
        let selection = FilterSelection::new(Slicer::exact("Amazon"), Slicer::All, Slicer::All);
        let selected = selected_values(&selection, &filtered);

        assert_eq!(selected.retailer, "Amazon");
        assert_eq!(selected.month, "All");
        assert_eq!(selected.state, "All");
        assert_eq!(selected.total_revenue, 25.0);
    }

    #[test]
    fn test_metrics_summary_scoping() {
        let records = vec![
            record("Walmart", "January", "Texas", 100.0),
            record("Amazon", "January", "Maine", 25.0),
        ];
        let filtered = vec![records[1].clone()];
        let selection = FilterSelection::new(Slicer::exact("Amazon"), Slicer::All, Slicer::All);
        let summary = compute_metrics_summary(&records, &filtered, &selection);

        assert_eq!(summary.review.total_revenue, 125.0);
        assert_eq!(summary.review.retailer_count, 2);
        assert_eq!(summary.filtered.total_revenue, 25.0);
        assert_eq!(summary.filtered.retailer_count, 1);
    }
}
