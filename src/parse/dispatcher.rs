use std::str::FromStr;

use log::{debug, error};

use super::error::ParseError;
use super::marker::{is_marker, IntegerPolicy, Marker};
use super::metrics::parse_metric_list;
use crate::model::{Record, Timestamp, TimestampTrait};

/// Builds a record out of a rejoined `MARKER::`/value token stream.
///
/// The token right after a marker is its value, unless it is a marker
/// itself, in which case the value is empty. Any other token stands where a
/// marker is expected and rejects the line as an unknown field.
pub fn dispatch<S: AsRef<str>>(tokens: &[S]) -> Result<Record, ParseError> {
    let mut record = Record::default();
    let mut tokens = tokens.iter().map(|token| token.as_ref()).peekable();

    while let Some(token) = tokens.next() {
        let marker = token.parse::<Marker>()?;
        let value = match tokens.next_if(|next| !is_marker(next)) {
            Some(value) => value,
            None => {
                if tokens.peek().is_none() {
                    debug!("field {} has no value at end of line", marker);
                }
                ""
            }
        };

        assign(&mut record, marker, value)?;
    }

    Ok(record)
}

fn assign(record: &mut Record, marker: Marker, value: &str) -> Result<(), ParseError> {
    match marker {
        Marker::DataType => record.data_type = value.to_owned(),
        Marker::TimeT => {
            if let Some(secs) = integer::<i64>(marker, value)? {
                match Timestamp::from_unix_secs(secs) {
                    Some(timestamp) => {
                        record.time_t = secs;
                        record.timestamp = timestamp;
                    }
                    None => error!("timestamp out of range for field ({}): ({})", marker, value),
                }
            }
        }
        Marker::HostName => record.host_name = value.to_owned(),
        Marker::HostCheckCommand => record.host_check_command = value.to_owned(),
        Marker::HostState => {
            if let Some(state) = integer(marker, value)? {
                record.host_state = state;
            }
        }
        Marker::HostStateType => {
            if let Some(state_type) = integer(marker, value)? {
                record.host_state_type = state_type;
            }
        }
        Marker::ServiceDesc => record.service_description = value.to_owned(),
        Marker::ServiceCheckCommand => record.service_check_command = value.to_owned(),
        Marker::ServiceState => {
            if let Some(state) = integer(marker, value)? {
                record.service_state = state;
            }
        }
        Marker::ServiceStateType => {
            if let Some(state_type) = integer(marker, value)? {
                record.service_state_type = state_type;
            }
        }
        Marker::HostPerfData | Marker::ServicePerfData => {
            record.metric_values = parse_metric_list(marker, value)?;
        }
    }
    Ok(())
}

// Ok(None) means the value was bad but the field is lenient about it.
fn integer<T: FromStr>(marker: Marker, value: &str) -> Result<Option<T>, ParseError> {
    match value.parse::<T>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            let err = ParseError::IntegerFormat {
                marker,
                raw: value.to_owned(),
            };
            match marker.integer_policy() {
                Some(IntegerPolicy::Lenient) => {
                    error!("{}", err);
                    Ok(None)
                }
                _ => Err(err),
            }
        }
    }
}
