use lazy_static::lazy_static;
use regex::Regex;

use super::error::ParseError;
use super::marker::Marker;
use crate::model::MetricValue;

/// Parses a performance-data value such as `used=55%;90;95 total=100%`.
///
/// Units and `;warn;crit;min;max` thresholds are dropped. A single malformed
/// entry rejects the whole list.
pub fn parse_metric_list(marker: Marker, raw: &str) -> Result<Vec<MetricValue>, ParseError> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^([A-Za-z0-9_-]+)=(-?[0-9][.0-9]*)[A-Za-z%]*(?:;.*)?$").unwrap();
    }

    raw.split_whitespace()
        .map(|entry| match RE.captures(entry) {
            Some(caps) => Ok(MetricValue::new(&caps[1], &caps[2])),
            None => Err(ParseError::MetricEntryFormat {
                marker,
                entry: entry.to_owned(),
            }),
        })
        .collect()
}
