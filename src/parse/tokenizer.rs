use lazy_static::lazy_static;
use regex::Regex;

/// Splits a line on whitespace and detaches field markers glued to their
/// first value word (`HOSTNAME::web1` becomes `HOSTNAME::`, `web1`).
///
/// Never fails; any input is some sequence of tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^([A-Z]+::)(.+)$").unwrap();
    }

    let mut tokens = Vec::new();
    for token in line.split_whitespace() {
        match RE.captures(token) {
            Some(caps) => {
                let marker = caps.get(1).map_or("", |m| m.as_str());
                tokens.push(marker);
                tokens.push(&token[marker.len()..]);
            }
            None => tokens.push(token),
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        #[rustfmt::skip]
        let tests: &[(&str, &[&str])] = &[
            ("", &[]),
            ("   \t ", &[]),
            ("HOSTNAME::web1", &["HOSTNAME::", "web1"]),
            ("HOSTNAME:: web1", &["HOSTNAME::", "web1"]),
            ("HOSTNAME::", &["HOSTNAME::"]),
            ("SERVICEDESC::Root  Partition", &["SERVICEDESC::", "Root", "Partition"]),
            ("SERVICEPERFDATA::used=1;2;3\ttotal=4", &["SERVICEPERFDATA::", "used=1;2;3", "total=4"]),
            ("TIMET::1 HOSTNAME::a", &["TIMET::", "1", "HOSTNAME::", "a"]),
            ("A::B::c", &["A::", "B::c"]),
            ("lower::case", &["lower::case"]),
            ("fe80::1", &["fe80::1"]),
            ("plain words", &["plain", "words"]),
        ];

        for (input, expected) in tests {
            assert_eq!(expected.to_vec(), tokenize(input), "while tokenizing {:?}", input);
        }
    }
}
