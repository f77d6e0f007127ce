use crate::error::Result;
use crate::output::Point;

pub trait Encoder {
    fn encode(&self, point: &Point) -> Result<Vec<u8>>;
}
