//! Series behind the dashboard's chart panels.
//!
//! Retailer counts and monthly revenue follow the active selection. Region
//! share and product revenue are computed over the whole dataset.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::geo::{share_labels, ShareSlice};
use crate::models::SalesRecord;

/// Number of rows shown in the dataset preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

const MONTH_NAMES: [&str; 12] = [
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub label: String,
    pub total_sales: f64,
}

/// One point of the revenue-by-month line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    /// Mean sale value of the month; this is what the line plots.
    pub mean_sales: f64,
    pub total_sales: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub sales_per_retailer: Vec<CategoryCount>,
    pub revenue_by_month: Vec<MonthlyRevenue>,
    pub region_share: Vec<ShareSlice>,
    pub revenue_by_product: Vec<CategoryRevenue>,
}

/// Number of records per retailer, ordered by retailer name.
pub fn sales_count_per_retailer(records: &[SalesRecord]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(&record.retailer).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Calendar position (0-based) of an English month name, full or
/// three-letter, case-insensitive.
fn month_position(month: &str) -> Option<usize> {
    let lower = month.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))
}

/// Mean, sum and count of sales per month.
///
/// Months are in calendar order when every value is a recognised month name,
/// otherwise in lexicographic order.
pub fn revenue_by_month(records: &[SalesRecord]) -> Vec<MonthlyRevenue> {
    let mut groups: HashMap<&str, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = groups.entry(&record.month).or_insert((0.0, 0));
        entry.0 += record.total_sales;
        entry.1 += 1;
    }

    let mut points: Vec<MonthlyRevenue> = groups
        .into_iter()
        .map(|(month, (total_sales, count))| MonthlyRevenue {
            month: month.to_string(),
            mean_sales: total_sales / count as f64,
            total_sales,
            count,
        })
        .collect();

    let calendar = points.iter().all(|p| month_position(&p.month).is_some());
    points.sort_by(|a, b| {
        let by_calendar = if calendar {
            month_position(&a.month).cmp(&month_position(&b.month))
        } else {
            Ordering::Equal
        };
        by_calendar.then_with(|| a.month.cmp(&b.month))
    });
    points
}

/// Record count per region, most frequent first, as labelled share slices.
pub fn region_share(records: &[SalesRecord]) -> Vec<ShareSlice> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(&record.region).or_insert(0) += 1;
    }

    let mut values: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(region, count)| (region.to_string(), count))
        .collect();
    values.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    share_labels(&values)
}

/// Summed sales per product, ordered by product name.
pub fn revenue_by_product(records: &[SalesRecord]) -> Vec<CategoryRevenue> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(&record.product).or_insert(0.0) += record.total_sales;
    }

    totals
        .into_iter()
        .map(|(label, total_sales)| CategoryRevenue {
            label: label.to_string(),
            total_sales,
        })
        .collect()
}

/// First `limit` records of `records`.
pub fn preview(records: &[SalesRecord], limit: usize) -> Vec<SalesRecord> {
    records.iter().take(limit).cloned().collect()
}

/// All chart series. `records` is the full dataset, `filtered` the subset
/// selected by the slicers.
pub fn build_chart_data(records: &[SalesRecord], filtered: &[SalesRecord]) -> ChartData {
    ChartData {
        sales_per_retailer: sales_count_per_retailer(filtered),
        revenue_by_month: revenue_by_month(filtered),
        region_share: region_share(records),
        revenue_by_product: revenue_by_product(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(retailer: &str, month: &str, region: &str, product: &str, total_sales: f64) -> SalesRecord {
        SalesRecord {
            retailer: retailer.to_string(),
            month: month.to_string(),
            state: "Texas".to_string(),
            region: region.to_string(),
            product: product.to_string(),
            total_sales,
        }
    }

    fn sample() -> Vec<SalesRecord> {
        vec![
            record("Walmart", "March", "South", "Apparel", 100.0),
            record("Walmart", "January", "South", "Footwear", 50.0),
            record("Amazon", "January", "West", "Apparel", 30.0),
            record("Foot Locker", "December", "South", "Apparel", 20.0),
        ]
    }

    #[test]
    fn test_sales_count_per_retailer() {
        let counts = sales_count_per_retailer(&sample());
        assert_eq!(
            counts,
            vec![
                CategoryCount { label: "Amazon".to_string(), count: 1 },
                CategoryCount { label: "Foot Locker".to_string(), count: 1 },
                CategoryCount { label: "Walmart".to_string(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_revenue_by_month_calendar_order() {
        let points = revenue_by_month(&sample());
        let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["January", "March", "December"]);

        assert_eq!(points[0].count, 2);
        assert_eq!(points[0].total_sales, 80.0);
        assert_eq!(points[0].mean_sales, 40.0);
    }

    #[test]
    fn test_revenue_by_month_lexicographic_fallback() {
        let records = vec![
            record("Walmart", "Q2", "South", "Apparel", 1.0),
            record("Walmart", "January", "South", "Apparel", 1.0),
            record("Walmart", "Q1", "South", "Apparel", 1.0),
        ];
        let months: Vec<String> = revenue_by_month(&records).into_iter().map(|p| p.month).collect();
        assert_eq!(months, vec!["January", "Q1", "Q2"]);
    }

    #[test]
    fn test_month_position() {
        assert_eq!(month_position("January"), Some(0));
        assert_eq!(month_position("dec"), Some(11));
        assert_eq!(month_position("Sept"), None);
        assert_eq!(month_position("Ma"), None);
    }

    #[test]
    fn test_region_share() {
        let slices = region_share(&sample());
        assert_eq!(slices[0].label, "South");
        assert_eq!(slices[0].count, 3);
        assert_eq!(slices[0].percent, 75.0);
        assert_eq!(slices[0].display, "75.0% (3)");
        assert_eq!(slices[1].label, "West");
        assert_eq!(slices[1].percent, 25.0);
    }

    #[test]
    fn test_revenue_by_product() {
        let totals = revenue_by_product(&sample());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].label, "Apparel");
        assert_eq!(totals[0].total_sales, 150.0);
        assert_eq!(totals[1].total_sales, 50.0);
    }

    #[test]
    fn test_preview_limit() {
        let records = sample();
        assert_eq!(preview(&records, 2).len(), 2);
        assert_eq!(preview(&records, DEFAULT_PREVIEW_ROWS).len(), 4);
        assert!(preview(&records, 0).is_empty());
    }

    #[test]
    fn test_chart_data_empty_filtered_subset() {
        let records = sample();
        let charts = build_chart_data(&records, &[]);
        assert!(charts.sales_per_retailer.is_empty());
        assert!(charts.revenue_by_month.is_empty());
        assert_eq!(charts.region_share.len(), 2);
        assert_eq!(charts.revenue_by_product.len(), 2);
    }
}
