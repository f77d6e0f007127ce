mod encoder;
mod human;
mod influx;
mod json;

pub use encoder::Encoder;
pub use human::HumanReadableEncoder;
pub use influx::InfluxLineEncoder;
pub use json::JSONEncoder;
