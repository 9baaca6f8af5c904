//! Line-oriented output accumulation with scoped indentation

const INDENT_UNIT: &str = "  ";

/// Accumulates generated lines with nested indentation
///
/// Every line printed between an `indent` and its matching `outdent` is
/// prefixed with one additional indentation unit. Blank lines carry no
/// padding.
#[derive(Debug, Default)]
pub struct IndentPrinter {
    buffer: String,
    depth: usize,
}

impl IndentPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indentation depth
    pub fn print_line(&mut self, line: &str) {
        if line.is_empty() {
            self.buffer.push('\n');
            return;
        }

        for _ in 0..self.depth {
            self.buffer.push_str(INDENT_UNIT);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Append an empty separating line
    pub fn blank(&mut self) {
        self.print_line("");
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn outdent(&mut self) {
        debug_assert!(self.depth > 0, "outdent without matching indent");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Whether anything has been buffered yet
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the printer and return the accumulated text
    pub fn finish(self) -> String {
        self.buffer
    }
}
