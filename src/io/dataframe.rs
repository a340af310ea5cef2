//! Conversion of fetched price records into the raw provider-convention
//! frame.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::models::{price_record::DailyPrice, schema};

/// Builds the raw price table from a fetched series.
///
/// Columns use the provider's lowercase names. The `date` column is always
/// present, with dtype `Date`; a price field that no record in the series
/// carries produces no column at all, so downstream column inspection sees
/// exactly what the vendor returned.
pub fn records_to_dataframe(records: &[DailyPrice]) -> Result<DataFrame, PolarsError> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    let dates: Vec<i32> = records
        .iter()
        .map(|r| (r.date - epoch).num_days() as i32)
        .collect();

    let mut columns =
        vec![Column::new(schema::provider::DATE.into(), dates).cast(&DataType::Date)?];

    let open: Vec<Option<f64>> = records.iter().map(|r| r.open).collect();
    if open.iter().any(Option::is_some) {
        columns.push(Column::new(schema::provider::OPEN.into(), open));
    }

    let high: Vec<Option<f64>> = records.iter().map(|r| r.high).collect();
    if high.iter().any(Option::is_some) {
        columns.push(Column::new(schema::provider::HIGH.into(), high));
    }

    let low: Vec<Option<f64>> = records.iter().map(|r| r.low).collect();
    if low.iter().any(Option::is_some) {
        columns.push(Column::new(schema::provider::LOW.into(), low));
    }

    let close: Vec<Option<f64>> = records.iter().map(|r| r.close).collect();
    if close.iter().any(Option::is_some) {
        columns.push(Column::new(schema::provider::CLOSE.into(), close));
    }

    let adj_close: Vec<Option<f64>> = records.iter().map(|r| r.adj_close).collect();
    if adj_close.iter().any(Option::is_some) {
        columns.push(Column::new(schema::provider::ADJ_CLOSE.into(), adj_close));
    }

    let volume: Vec<Option<i64>> = records.iter().map(|r| r.volume).collect();
    if volume.iter().any(Option::is_some) {
        columns.push(Column::new(schema::provider::VOLUME.into(), volume));
    }

    DataFrame::new(columns)
}
