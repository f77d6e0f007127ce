use super::encoder::Encoder;
use crate::error::Result;
use crate::model::TimestampTrait;
use crate::output::{FieldValue, Point};

const FIELD_KEY: &str = "value";

// InfluxDB line protocol, nanosecond precision:
//
//   Root\ Partition,check=used,host=web1 value=55 1617000000000000000
//   PING,check=rta,host=db-02 value="n/a" 1617000300000000000
pub struct InfluxLineEncoder {}

impl InfluxLineEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for InfluxLineEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for InfluxLineEncoder {
    fn encode(&self, point: &Point) -> Result<Vec<u8>> {
        let nanos = point
            .timestamp()
            .unix_nanos()
            .ok_or("timestamp does not fit line protocol precision")?;

        let mut line = escape(point.measurement(), &[',', ' ']);
        // Line protocol has no empty tag values.
        for (key, value) in point.tags().iter().filter(|(_, value)| !value.is_empty()) {
            line.push(',');
            line.push_str(&escape(key, &[',', '=', ' ']));
            line.push('=');
            line.push_str(&escape(value, &[',', '=', ' ']));
        }

        line.push(' ');
        line.push_str(FIELD_KEY);
        line.push('=');
        match point.value() {
            FieldValue::Float(n) => line.push_str(&n.to_string()),
            FieldValue::Text(s) => {
                line.push('"');
                line.push_str(&escape(s, &['\\', '"']));
                line.push('"');
            }
        }

        line.push(' ');
        line.push_str(&nanos.to_string());

        Ok(line.into_bytes())
    }
}

fn escape(s: &str, special: &[char]) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MetricValue, Record, Timestamp};

    fn record(service: &str, host: &str, metric: MetricValue) -> Record {
        Record {
            timestamp: Timestamp::from_unix_secs(1617000000).expect("valid timestamp"),
            host_name: host.into(),
            service_description: service.into(),
            metric_values: vec![metric],
            ..Record::default()
        }
    }

    #[test]
    fn test_encode() -> std::result::Result<(), Box<dyn std::error::Error>> {
        #[rustfmt::skip]
        let tests = [
            (
                record("Root Partition", "web1", MetricValue::new("used", "55")),
                r#"Root\ Partition,check=used,host=web1 value=55 1617000000000000000"#,
            ),
            (
                record("PING", "db-02", MetricValue::new("rta", "0.052000")),
                r#"PING,check=rta,host=db-02 value=0.052 1617000000000000000"#,
            ),
            (
                record("a,b", "x=y z", MetricValue::new("time", "1.2.3")),
                r#"a\,b,check=time,host=x\=y\ z value="1.2.3" 1617000000000000000"#,
            ),
            (
                record("Users", "web1", MetricValue::new("select", "-3")),
                r#"Users,check=select_,host=web1 value=-3 1617000000000000000"#,
            ),
            (
                record("Disk", "", MetricValue::new("used", "55")),
                r#"Disk,check=used value=55 1617000000000000000"#,
            ),
        ];

        let encoder = InfluxLineEncoder::new();
        for (record, expected) in &tests {
            let point = Point::from_record(record).remove(0);
            let actual = String::from_utf8(encoder.encode(&point)?)?;
            assert_eq!(*expected, actual);
        }
        Ok(())
    }

    #[test]
    fn test_escape_text_field() {
        assert_eq!(r#"say \"hi\" \\o/"#, escape(r#"say "hi" \o/"#, &['\\', '"']));
    }
}
