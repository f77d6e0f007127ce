use super::encoder::Encoder;
use crate::error::Result;
use crate::model::TimestampTrait;
use crate::output::{FieldValue, Point};

pub struct HumanReadableEncoder {}

impl HumanReadableEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for HumanReadableEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, point: &Point) -> Result<Vec<u8>> {
        let mut parts = vec![
            point.timestamp().to_string_secs(),
            point.measurement().to_owned(),
        ];
        parts.extend(point.tags().iter().map(|(key, val)| format!("{}={}", key, val)));
        parts.push(match point.value() {
            FieldValue::Float(n) => n.to_string(),
            FieldValue::Text(s) => format!("'{}'", s),
        });

        Ok(parts.join("\t").into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MetricValue, Record, Timestamp};

    #[test]
    fn test_encode() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let record = Record {
            timestamp: Timestamp::from_unix_secs(1617000000).expect("valid timestamp"),
            host_name: "web1".into(),
            service_description: "Root Partition".into(),
            metric_values: vec![MetricValue::new("used", "55")],
            ..Record::default()
        };

        let point = Point::from_record(&record).remove(0);
        assert_eq!(
            "2021-03-29T06:40:00Z\tRoot Partition\tcheck=used\thost=web1\t55",
            String::from_utf8(HumanReadableEncoder::new().encode(&point)?)?
        );
        Ok(())
    }
}
