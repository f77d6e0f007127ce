use super::timestamp::{Timestamp, TimestampTrait};

/// Record kind declared by `service_perfdata_file_template`.
pub const SERVICE_PERF_DATA: &str = "SERVICEPERFDATA";

/// Record kind declared by `host_perfdata_file_template`.
pub const HOST_PERF_DATA: &str = "HOSTPERFDATA";

/// One `name=value` entry of a performance-data field.
///
/// The value stays textual: plugins are free to emit things that are not
/// floats, and coercion is left to whoever consumes the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricValue {
    pub name: String,
    pub value: String,
}

impl MetricValue {
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single perfdata line, decoded.
///
/// State and state type fields hold the raw integers the monitoring core
/// wrote (0..3 for OK/WARNING/CRITICAL/UNKNOWN, 0/1 for SOFT/HARD). No range
/// check is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub data_type: String,
    pub timestamp: Timestamp,
    /// Raw `TIMET::` seconds, kept apart from every state field.
    pub time_t: i64,
    pub host_name: String,

    pub host_check_command: String,
    pub host_state: i32,
    pub host_state_type: i32,

    pub service_description: String,
    pub service_check_command: String,
    pub service_state: i32,
    pub service_state_type: i32,

    pub metric_values: Vec<MetricValue>,
}

impl Record {
    /// Host check results carry no per-service metrics worth forwarding.
    pub fn is_host_only(&self) -> bool {
        self.data_type == HOST_PERF_DATA
    }
}

impl Default for Record {
    fn default() -> Self {
        Self {
            data_type: String::new(),
            timestamp: Timestamp::unix_epoch(),
            time_t: 0,
            host_name: String::new(),
            host_check_command: String::new(),
            host_state: 0,
            host_state_type: 0,
            service_description: String::new(),
            service_check_command: String::new(),
            service_state: 0,
            service_state_type: 0,
            metric_values: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = Record::default();
        assert_eq!(0, record.timestamp.timestamp());
        assert_eq!(0, record.time_t);
        assert!(record.metric_values.is_empty());
        assert!(!record.is_host_only());
    }

    #[test]
    fn test_is_host_only() {
        let tests = [
            (HOST_PERF_DATA, true),
            (SERVICE_PERF_DATA, false),
            ("hostperfdata", false),
            ("", false),
        ];

        for (data_type, expected) in &tests {
            let record = Record {
                data_type: data_type.to_string(),
                ..Record::default()
            };
            assert_eq!(*expected, record.is_host_only(), "data type {:?}", data_type);
        }
    }
}
