use log::debug;

use super::encoder::Encoder;
use super::point::Point;
use super::writer::Writer;
use crate::error::Result;
use crate::model::Record;

/// Destination of parsed records.
///
/// Errors returned from here are transport failures; parse failures never
/// reach a sink.
pub trait MetricSink {
    fn send(&mut self, record: &Record) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Turns every service record into one point per metric and writes the
/// encoded points, one per line.
pub struct PointSink {
    writer: Box<dyn Writer>,
    encoder: Box<dyn Encoder>,
}

impl PointSink {
    pub fn new(writer: Box<dyn Writer>, encoder: Box<dyn Encoder>) -> Self {
        Self { writer, encoder }
    }
}

impl MetricSink for PointSink {
    fn send(&mut self, record: &Record) -> Result<()> {
        if record.is_host_only() {
            debug!("discarding host record for {}", record.host_name);
            return Ok(());
        }
        if record.service_description.is_empty() {
            debug!(
                "discarding record for {} without service description",
                record.host_name
            );
            return Ok(());
        }

        for point in Point::from_record(record) {
            let buf = self.encoder.encode(&point)?;
            self.writer
                .write(&buf)
                .map_err(|e| ("writer failed", e))?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| ("writer flush failed", e))?;
        Ok(())
    }
}
