use log::info;

use crate::error::Result;
use crate::input::{RecordReader, Stats};
use crate::output::MetricSink;

// Reader  == file | stdin              ->  Iterator<Result<(line_no, String)>>
// Records == Iterator<String>          ->  Iterator<Result<Record>>   (bad lines logged and skipped)
// Sink    == Record                    ->  Point* -> Encoder -> Writer
pub struct Runner {
    records: RecordReader,
    sink: Box<dyn MetricSink>,
}

impl Runner {
    pub fn new(records: RecordReader, sink: Box<dyn MetricSink>) -> Self {
        Self { records, sink }
    }

    pub fn run(&mut self) -> Result<Stats> {
        for record in &mut self.records {
            self.sink.send(&record?)?;
        }
        self.sink.flush()?;

        let stats = self.records.stats();
        info!(
            "{} line(s) read, {} record(s) parsed, {} line(s) rejected",
            stats.lines, stats.records, stats.rejected
        );
        Ok(stats)
    }
}
