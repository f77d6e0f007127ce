use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

const MARKER_SUFFIX: &str = "::";

/// Field markers understood in a perfdata line, e.g. `HOSTNAME::`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    DataType,
    TimeT,
    HostName,
    HostCheckCommand,
    HostState,
    HostStateType,
    HostPerfData,
    ServiceDesc,
    ServiceCheckCommand,
    ServiceState,
    ServiceStateType,
    ServicePerfData,
}

/// What to do when an integer field holds something that is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerPolicy {
    /// Reject the whole line.
    Fatal,
    /// Log, keep the field at its default and go on with the line.
    Lenient,
}

impl Marker {
    pub const ALL: [Marker; 12] = [
        Marker::DataType,
        Marker::TimeT,
        Marker::HostName,
        Marker::HostCheckCommand,
        Marker::HostState,
        Marker::HostStateType,
        Marker::HostPerfData,
        Marker::ServiceDesc,
        Marker::ServiceCheckCommand,
        Marker::ServiceState,
        Marker::ServiceStateType,
        Marker::ServicePerfData,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::DataType => "DATATYPE::",
            Marker::TimeT => "TIMET::",
            Marker::HostName => "HOSTNAME::",
            Marker::HostCheckCommand => "HOSTCHECKCOMMAND::",
            Marker::HostState => "HOSTSTATE::",
            Marker::HostStateType => "HOSTSTATETYPE::",
            Marker::HostPerfData => "HOSTPERFDATA::",
            Marker::ServiceDesc => "SERVICEDESC::",
            Marker::ServiceCheckCommand => "SERVICECHECKCOMMAND::",
            Marker::ServiceState => "SERVICESTATE::",
            Marker::ServiceStateType => "SERVICESTATETYPE::",
            Marker::ServicePerfData => "SERVICEPERFDATA::",
        }
    }

    /// Fields whose value may span several whitespace separated words.
    pub fn is_multi_word(&self) -> bool {
        match self {
            Marker::ServiceDesc
            | Marker::ServicePerfData
            | Marker::ServiceCheckCommand
            | Marker::HostPerfData
            | Marker::HostCheckCommand => true,
            _ => false,
        }
    }

    /// Per-field integer policy:
    ///
    /// | field                | on bad integer |
    /// |----------------------|----------------|
    /// | `TIMET::`            | lenient        |
    /// | `HOSTSTATE::`        | fatal          |
    /// | `HOSTSTATETYPE::`    | fatal          |
    /// | `SERVICESTATE::`     | fatal          |
    /// | `SERVICESTATETYPE::` | fatal          |
    ///
    /// Returns `None` for fields that are not integers at all.
    pub fn integer_policy(&self) -> Option<IntegerPolicy> {
        match self {
            Marker::TimeT => Some(IntegerPolicy::Lenient),
            Marker::HostState
            | Marker::HostStateType
            | Marker::ServiceState
            | Marker::ServiceStateType => Some(IntegerPolicy::Fatal),
            _ => None,
        }
    }

    /// Looks up a known marker by its exact spelling.
    pub fn lookup(token: &str) -> Option<Marker> {
        Marker::ALL.iter().find(|m| m.as_str() == token).copied()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Marker {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Marker::lookup(token).ok_or_else(|| ParseError::UnrecognizedField {
            marker: token.to_owned(),
        })
    }
}

/// Any token ending in `::` is taken for a field marker, known or not.
#[inline]
pub fn is_marker(token: &str) -> bool {
    token.ends_with(MARKER_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_markers() -> std::result::Result<(), ParseError> {
        for marker in Marker::ALL.iter() {
            assert_eq!(*marker, marker.as_str().parse::<Marker>()?);
            assert!(is_marker(marker.as_str()));
        }
        Ok(())
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let tests = ["hostname::", "HostName::", "HOSTNAME", "HOSTNAME:", "FOOBAR::"];

        for token in &tests {
            assert_eq!(
                Err(ParseError::UnrecognizedField {
                    marker: token.to_string()
                }),
                token.parse::<Marker>(),
            );
        }
    }

    #[test]
    fn test_lookup() {
        #[rustfmt::skip]
        let tests = [
            ("TIMET::", Some(Marker::TimeT)),
            ("SERVICEPERFDATA::", Some(Marker::ServicePerfData)),
            ("SERVICEPERFDATA", None),
            ("FOOBAR::", None),
            ("", None),
        ];

        for (token, expected) in &tests {
            assert_eq!(*expected, Marker::lookup(token), "while looking up {:?}", token);
        }
    }

    #[test]
    fn test_integer_policy() {
        assert_eq!(Some(IntegerPolicy::Lenient), Marker::TimeT.integer_policy());
        assert_eq!(Some(IntegerPolicy::Fatal), Marker::ServiceState.integer_policy());
        assert_eq!(Some(IntegerPolicy::Fatal), Marker::ServiceStateType.integer_policy());
        assert_eq!(Some(IntegerPolicy::Fatal), Marker::HostState.integer_policy());
        assert_eq!(Some(IntegerPolicy::Fatal), Marker::HostStateType.integer_policy());
        assert_eq!(None, Marker::HostName.integer_policy());
        assert_eq!(None, Marker::ServicePerfData.integer_policy());
    }

    #[test]
    fn test_multi_word_markers() {
        let multi: Vec<_> = Marker::ALL.iter().filter(|m| m.is_multi_word()).collect();
        assert_eq!(
            vec![
                &Marker::HostCheckCommand,
                &Marker::HostPerfData,
                &Marker::ServiceDesc,
                &Marker::ServiceCheckCommand,
                &Marker::ServicePerfData,
            ],
            multi
        );
    }
}
