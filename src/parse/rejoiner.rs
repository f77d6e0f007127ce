use std::mem;

use log::trace;

use super::marker::{is_marker, Marker};

enum State<'a> {
    PassThrough,
    Accumulating { marker: Marker, words: Vec<&'a str> },
}

impl<'a> State<'a> {
    fn after(token: &str) -> Self {
        match Marker::lookup(token) {
            Some(marker) if marker.is_multi_word() => State::Accumulating {
                marker,
                words: Vec::new(),
            },
            _ => State::PassThrough,
        }
    }
}

/// Merges the words of multi-word fields back into a single value token.
///
/// The output alternates marker and value for every multi-word field; a
/// multi-word field directly followed by another marker (or by the end of
/// the line) gets an empty value. Unknown markers are passed through and
/// left for the dispatcher to reject.
pub fn rejoin(tokens: &[&str]) -> Vec<String> {
    let mut joined = Vec::with_capacity(tokens.len());
    let mut state = State::PassThrough;

    for &token in tokens {
        if is_marker(token) {
            let finished = mem::replace(&mut state, State::after(token));
            if let State::Accumulating { marker, words } = finished {
                trace!("{} joined from {} word(s)", marker, words.len());
                joined.push(words.join(" "));
            }
            joined.push(token.to_owned());
            continue;
        }

        match &mut state {
            State::Accumulating { words, .. } => words.push(token),
            State::PassThrough => joined.push(token.to_owned()),
        }
    }

    if let State::Accumulating { marker, words } = state {
        trace!("{} joined from {} word(s) at end of line", marker, words.len());
        joined.push(words.join(" "));
    }

    joined
}
