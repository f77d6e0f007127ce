//! Decoding of `service_perfdata_file`/`host_perfdata_file` lines.
//!
//! line -> tokenize -> rejoin -> dispatch (-> parse_metric_list) -> Record

mod dispatcher;
mod error;
mod line;
mod marker;
mod metrics;
mod rejoiner;
mod tokenizer;

pub use dispatcher::dispatch;
pub use error::ParseError;
pub use line::parse_line;
pub use marker::{is_marker, IntegerPolicy, Marker};
pub use metrics::parse_metric_list;
pub use rejoiner::rejoin;
pub use tokenizer::tokenize;
