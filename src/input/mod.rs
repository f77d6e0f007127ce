mod line;
mod reader;

pub use line::LineReader;
pub use reader::{RecordReader, Stats};
