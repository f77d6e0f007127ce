//! Nagios/Icinga perfdata spool files to time series points.
//!
//! [`parse::parse_line`] decodes one `DATATYPE::... TIMET::... HOSTNAME::...`
//! line into a [`model::Record`]; [`output::PointSink`] turns records into
//! encoded points; [`runner::Runner`] ties a line source to a sink.

pub mod cliopt;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod parse;
pub mod runner;
