mod encoder;
mod ident;
mod point;
mod sink;
mod writer;

pub use encoder::{Encoder, HumanReadableEncoder, InfluxLineEncoder, JSONEncoder};
pub use ident::{is_reserved, sanitize_identifier};
pub use point::{FieldValue, Point, Tags, CHECK_TAG, HOST_TAG};
pub use sink::{MetricSink, PointSink};
pub use writer::{LineWriter, Writer};
