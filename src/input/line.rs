use std::io::{self, BufRead};

/// Numbered lines with the trailing `\n` or `\r\n` removed.
pub struct LineReader<R> {
    inner: R,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line_no: 0 }
    }
}

impl<R: BufRead> std::iter::Iterator for LineReader<R> {
    type Item = io::Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.inner.read_until(b'\n', &mut buf) {
            Ok(0) => return None, // EOF
            Ok(_) => (),
            Err(e) => return Some(Err(e)),
        };

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        self.line_no += 1;
        Some(Ok((
            self.line_no,
            String::from_utf8_lossy(&buf).into_owned(),
        )))
    }
}
