use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::price_record::DailyPrice;

/// A single record from the Tiingo daily prices payload.
///
/// The endpoint returns a JSON array of these. Price fields are optional so
/// a payload without adjusted data still deserializes. Adjusted fields other
/// than `adjClose` (`adjHigh`, `adjOpen`, `divCash`, `splitFactor`, ...) are
/// not part of the legacy schema and are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiingoDailyRow {
    pub date: DateTime<Utc>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<i64>,
}

impl From<TiingoDailyRow> for DailyPrice {
    fn from(row: TiingoDailyRow) -> Self {
        DailyPrice {
            date: row.date.date_naive(),
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            adj_close: row.adj_close,
            volume: row.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn deserializes_a_daily_payload() {
        let payload = r#"[{
            "date": "2021-01-04T00:00:00.000Z",
            "close": 129.41,
            "high": 133.61,
            "low": 126.76,
            "open": 133.52,
            "volume": 143301887,
            "adjClose": 126.83,
            "adjHigh": 130.94,
            "adjLow": 124.23,
            "adjOpen": 130.86,
            "adjVolume": 143301887,
            "divCash": 0.0,
            "splitFactor": 1.0
        }]"#;

        let rows: Vec<TiingoDailyRow> = serde_json::from_str(payload).unwrap();
        assert_eq!(rows.len(), 1);

        let price = DailyPrice::from(rows.into_iter().next().unwrap());
        assert_eq!(price.date, NaiveDate::from_ymd_opt(2021, 1, 4).unwrap());
        assert_eq!(price.close, Some(129.41));
        assert_eq!(price.adj_close, Some(126.83));
        assert_eq!(price.volume, Some(143_301_887));
    }

    #[test]
    fn tolerates_missing_adjusted_fields() {
        let payload = r#"[{
            "date": "2021-01-04T00:00:00.000Z",
            "close": 129.41,
            "high": 133.61,
            "low": 126.76,
            "open": 133.52,
            "volume": 143301887
        }]"#;

        let rows: Vec<TiingoDailyRow> = serde_json::from_str(payload).unwrap();
        let price = DailyPrice::from(rows.into_iter().next().unwrap());

        assert_eq!(price.close, Some(129.41));
        assert_eq!(price.adj_close, None);
    }
}
