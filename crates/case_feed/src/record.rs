//! Wire types for the case series.

use crate::error::{FeedError, FeedResult};
use serde::{Deserialize, Serialize};

/// One day's reported statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date as reported by the source, e.g. `2021-01-01`.
    pub date: String,
    /// New cases by publish date. `null` on days with no report.
    #[serde(rename = "newCases")]
    pub new_cases: Option<u64>,
}

impl Record {
    /// The case count with a missing report read as zero.
    pub fn count(&self) -> u64 {
        self.new_cases.unwrap_or(0)
    }
}

/// Records in the order the source returned them.
///
/// The first element is treated as the most recent day. The order is trusted
/// as-is and never sorted by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub data: Vec<Record>,
}

impl TimeSeries {
    /// Decodes a response body of the form `{ "data": [ ... ] }`.
    pub fn from_json(body: &[u8]) -> FeedResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The record treated as "today": the first one in source order.
    pub fn latest(&self) -> FeedResult<&Record> {
        self.data
            .first()
            .ok_or_else(|| FeedError::UnexpectedShape("`data` is empty".into()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_source_order_and_nulls() {
        let body = br#"{"data":[
            {"date":"2021-01-02","newCases":54990},
            {"date":"2021-01-01","newCases":null}
        ]}"#;
        let series = TimeSeries::from_json(body).unwrap();

        assert_eq!(series.len(), 2);
        let latest = series.latest().unwrap();
        assert_eq!(latest.date, "2021-01-02");
        assert_eq!(latest.count(), 54990);
        assert_eq!(series.data[1].new_cases, None);
        assert_eq!(series.data[1].count(), 0);
    }

    #[test]
    fn latest_trusts_array_order() {
        let body = br#"{"data":[
            {"date":"2020-03-01","newCases":12},
            {"date":"2021-01-01","newCases":900}
        ]}"#;
        let series = TimeSeries::from_json(body).unwrap();
        assert_eq!(series.latest().unwrap().date, "2020-03-01");
    }

    #[test]
    fn wrong_shape_is_reported() {
        for body in [
            &br#"{"rows":[]}"#[..],
            &br#"{"data":{"date":"2021-01-01"}}"#[..],
            &br#"{"data":[{"date":"2021-01-01","newCases":-4}]}"#[..],
            &b"<html>maintenance</html>"[..],
        ] {
            let err = TimeSeries::from_json(body).unwrap_err();
            assert!(matches!(err, FeedError::UnexpectedShape(_)), "{err}");
        }
    }

    #[test]
    fn empty_series_has_no_latest() {
        let series = TimeSeries::from_json(br#"{"data":[]}"#).unwrap();
        assert!(series.is_empty());
        assert!(matches!(
            series.latest(),
            Err(FeedError::UnexpectedShape(_))
        ));
    }
}
