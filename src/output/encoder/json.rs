use serde::Serialize;
use serde_json;

use super::encoder::Encoder;
use crate::error::Result;
use crate::output::{FieldValue, Point, Tags};

#[derive(Serialize)]
struct PointRepr<'a> {
    measurement: &'a str,
    tags: &'a Tags,
    value: &'a FieldValue,
    timestamp: i64,
}

pub struct JSONEncoder {}

impl JSONEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for JSONEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for JSONEncoder {
    fn encode(&self, point: &Point) -> Result<Vec<u8>> {
        let repr = PointRepr {
            measurement: point.measurement(),
            tags: point.tags(),
            value: point.value(),
            timestamp: point.timestamp().timestamp(),
        };

        serde_json::to_vec(&repr).map_err(|e| ("JSON serialization failed", e).into())
    }
}
