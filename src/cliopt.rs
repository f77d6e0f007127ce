use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

use crate::output::{Encoder, HumanReadableEncoder, InfluxLineEncoder, JSONEncoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Influx,
    JSON,
    Human,
}

impl Encoding {
    pub fn encoder(&self) -> Box<dyn Encoder> {
        match self {
            Encoding::Influx => Box::new(InfluxLineEncoder::new()),
            Encoding::JSON => Box::new(JSONEncoder::new()),
            Encoding::Human => Box::new(HumanReadableEncoder::new()),
        }
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "influx" => Ok(Encoding::Influx),
            "json" => Ok(Encoding::JSON),
            "h" | "human" => Ok(Encoding::Human),
            _ => Err(format!("unsupported encoding '{}'", s)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "perfdata",
    about = "Turn Nagios/Icinga perfdata spool files into time series points"
)]
pub struct CliOpt {
    /// Perfdata file to read; stdin when omitted.
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Output encoding: influx, json or human.
    #[structopt(long = "encode", short = "e", default_value = "influx")]
    pub encode: Encoding,

    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opt = CliOpt::from_iter(&["perfdata"]);
        assert_eq!(None, opt.input);
        assert_eq!(Encoding::Influx, opt.encode);
        assert!(!opt.verbose);
    }

    #[test]
    fn test_args() {
        let opt = CliOpt::from_iter(&[
            "perfdata",
            "-e",
            "json",
            "-v",
            "/var/spool/service-perfdata",
        ]);
        assert_eq!(Some(PathBuf::from("/var/spool/service-perfdata")), opt.input);
        assert_eq!(Encoding::JSON, opt.encode);
        assert!(opt.verbose);
    }

    #[test]
    fn test_bad_encoding() {
        assert!(CliOpt::from_iter_safe(&["perfdata", "-e", "xml"]).is_err());
    }
}
