use std::io;

use log::{error, trace};

use crate::error::Result;
use crate::model::Record;
use crate::parse::parse_line;

type LineIter = Box<dyn std::iter::Iterator<Item = io::Result<(usize, String)>>>;

/// Counters for a single pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub records: usize,
    pub rejected: usize,
}

/// Parses lines into records.
///
/// A line that fails to parse is logged and skipped; only a failing
/// underlying reader ends the iteration with an error.
pub struct RecordReader {
    inner: LineIter,
    stats: Stats,
}

impl RecordReader {
    pub fn new(inner: LineIter) -> Self {
        Self {
            inner,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

impl std::iter::Iterator for RecordReader {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (line_no, line) = match self.inner.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return Some(Err(("input reader failed", e).into())),
                None => return None, // EOF
            };

            self.stats.lines += 1;
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&line) {
                Ok(record) => {
                    trace!("line {}: {:?}", line_no, record);
                    self.stats.records += 1;
                    return Some(Ok(record));
                }
                Err(err) => {
                    error!("line {}: {}\nLine: {}", line_no, err, line);
                    self.stats.rejected += 1;
                    continue;
                }
            }
        }
    }
}
