//! Line buffer for one annotation block

/// Ordered content lines of a block under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lines(Vec<String>);

impl Lines {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a buffer that starts with one blank line (struct blocks)
    pub fn with_leading_blank() -> Self {
        Self(vec![String::new()])
    }

    /// Appends a directive
    ///
    /// Only the first physical line of `value` carries the `@directive`
    /// prefix; later lines continue the same logical directive.
    pub fn push(&mut self, directive: &str, value: &str) {
        let segments: Vec<&str> = value.split('\n').collect();
        let last = segments.len() - 1;

        for (i, segment) in segments.into_iter().enumerate() {
            // `\r\n` counts as one break; a trailing lone `\r` is kept
            let segment = if i < last {
                segment.strip_suffix('\r').unwrap_or(segment)
            } else {
                segment
            };

            if i == 0 {
                self.0.push(format!("@{} {}", directive, segment));
            } else {
                self.0.push(segment.to_string());
            }
        }
    }

    /// Ends a section with one blank separator line
    ///
    /// Does nothing on an empty buffer or one that already ends blank, so
    /// empty sections never produce separators.
    pub fn end_section(&mut self) {
        match self.0.last() {
            None => {}
            Some(last) if last.is_empty() => {}
            Some(_) => self.0.push(String::new()),
        }
    }

    /// Returns the lines so far
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns true if no line has been added
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops a trailing separator and wraps the lines in a comment block
    pub fn into_block(mut self, header: &str) -> String {
        if self.0.last().is_some_and(|l| l.is_empty()) {
            self.0.pop();
        }
        format!("{}\n * {}\n */", header, self.0.join("\n * "))
    }
}
