/// An indentation-tracking text accumulator for generated source.
#[derive(Debug, Default)]
pub struct CodeBuilder {
    text: String,
    indent: usize,
}

impl CodeBuilder {
    const INDENT: &'static str = "    ";

    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indent. An empty string writes a
    /// blank line with no trailing spaces.
    pub fn line(&mut self, line: &str) {
        if line.is_empty() {
            self.text.push('\n');
            return;
        }
        for _ in 0..self.indent {
            self.text.push_str(Self::INDENT);
        }
        self.text.push_str(line);
        self.text.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.line("");
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn unindent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write `{` and indent.
    pub fn open_brace(&mut self) {
        self.line("{");
        self.indent();
    }

    /// Unindent and close with the given brace line (`}`, `};`, …).
    pub fn close_brace(&mut self, closing: &str) {
        self.unindent();
        self.line(closing);
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/builder.rs"]
mod tests;
