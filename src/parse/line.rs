use super::dispatcher::dispatch;
use super::error::ParseError;
use super::rejoiner::rejoin;
use super::tokenizer::tokenize;
use crate::model::Record;

/// Parses one newline-stripped perfdata line.
///
/// Stateless; safe to call from any number of threads at once.
pub fn parse_line(line: &str) -> Result<Record, ParseError> {
    dispatch(&rejoin(&tokenize(line)))
}
