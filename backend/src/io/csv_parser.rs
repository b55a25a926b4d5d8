use polars::prelude::*;
use std::io::Cursor;

use super::error::{LoadError, LoadResult};
use crate::models::{DatasetColumn, SalesRecord};

/// Parse raw CSV bytes into a Polars DataFrame with the expected column types.
///
/// Every column is read as String regardless of how the leading rows look, so
/// type inference never locks a column onto a narrower type. Every required
/// column must be present; `Total Sales` is then cast to Float64, and cells
/// that are not numbers become null. Extra columns are kept as read.
pub fn parse_sales_csv_bytes(bytes: Vec<u8>) -> LoadResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if let Some(missing) = DatasetColumn::REQUIRED
        .into_iter()
        .find(|c| !column_names.iter().any(|name| name == c.header()))
    {
        return Err(LoadError::MissingColumn(missing));
    }

    let df = df
        .lazy()
        .with_column(col(DatasetColumn::TotalSales.header()).cast(DataType::Float64))
        .collect()?;

    Ok(df)
}

/// Convert a typed DataFrame into sales records, preserving row order.
pub fn dataframe_to_records(df: &DataFrame) -> LoadResult<Vec<SalesRecord>> {
    let retailers = text_column(df, DatasetColumn::Retailer)?;
    let months = text_column(df, DatasetColumn::Month)?;
    let states = text_column(df, DatasetColumn::State)?;
    let regions = text_column(df, DatasetColumn::Region)?;
    let products = text_column(df, DatasetColumn::Product)?;
    let sales = df.column(DatasetColumn::TotalSales.header())?.f64()?;

    let text = |ca: &StringChunked, row: usize, column: DatasetColumn| {
        ca.get(row)
            .map(str::to_string)
            .ok_or(LoadError::InvalidValue { row, column })
    };

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let total_sales = sales.get(row).ok_or(LoadError::InvalidValue {
            row,
            column: DatasetColumn::TotalSales,
        })?;
        if !total_sales.is_finite() || total_sales < 0.0 {
            return Err(LoadError::InvalidSales {
                row,
                value: total_sales,
            });
        }

        records.push(SalesRecord {
            retailer: text(retailers, row, DatasetColumn::Retailer)?,
            month: text(months, row, DatasetColumn::Month)?,
            state: text(states, row, DatasetColumn::State)?,
            region: text(regions, row, DatasetColumn::Region)?,
            product: text(products, row, DatasetColumn::Product)?,
            total_sales,
        });
    }

    Ok(records)
}

fn text_column(df: &DataFrame, column: DatasetColumn) -> LoadResult<&StringChunked> {
    Ok(df.column(column.header())?.str()?)
}
