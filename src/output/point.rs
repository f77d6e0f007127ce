use std::collections::BTreeMap;

use log::warn;
use serde::Serialize;

use super::ident::sanitize_identifier;
use crate::model::{MetricValue, Record, Timestamp};

pub type Tags = BTreeMap<String, String>;

pub const HOST_TAG: &str = "host";
pub const CHECK_TAG: &str = "check";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Float(f32),
    Text(String),
}

impl FieldValue {
    /// 32-bit float when the text allows it, the raw text otherwise.
    pub fn coerce(raw: &str) -> Self {
        match raw.parse::<f32>() {
            Ok(n) if n.is_finite() => FieldValue::Float(n),
            _ => {
                warn!("non float perf value: {}", raw);
                FieldValue::Text(raw.to_owned())
            }
        }
    }
}

/// One time series sample: a single metric of a single record.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    measurement: String,
    tags: Tags,
    value: FieldValue,
    timestamp: Timestamp,
}

impl Point {
    pub fn new(record: &Record, metric: &MetricValue) -> Self {
        let mut tags = Tags::new();
        tags.insert(HOST_TAG.to_owned(), record.host_name.clone());
        tags.insert(
            CHECK_TAG.to_owned(),
            sanitize_identifier(&metric.name).into_owned(),
        );

        Self {
            measurement: record.service_description.clone(),
            tags,
            value: FieldValue::coerce(&metric.value),
            timestamp: record.timestamp,
        }
    }

    /// One point per metric, in the order the plugin reported them.
    pub fn from_record(record: &Record) -> Vec<Self> {
        record
            .metric_values
            .iter()
            .map(|metric| Self::new(record, metric))
            .collect()
    }

    #[inline]
    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    #[inline]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
