//! Indentation-aware text buffer.

use phpcg_core::Indent;
use tracing::warn;

/// Append-only buffer that indents every line it starts.
///
/// Indentation belongs to line starts, not to `write` calls: text written
/// in several pieces is indented once, when its line begins. Empty lines are
/// never indented.
///
/// # Example
///
/// ```
/// use phpcg_codegen::Writer;
///
/// let mut writer = Writer::default();
/// writer
///     .writeln("if ($a) {")
///     .indent()
///     .write("return ")
///     .write("$a;")
///     .outdent()
///     .write("\n}");
///
/// assert_eq!(writer.content(), "if ($a) {\n    return $a;\n}");
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl Writer {
    /// Create a new Writer with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Append raw text, indenting each non-empty line it starts.
    pub fn write(&mut self, text: &str) -> &mut Self {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.buffer.push('\n');
            }
            if !line.is_empty() && self.at_line_start() {
                self.write_indent();
            }
            self.buffer.push_str(line);
        }
        self
    }

    /// Append text followed by a newline.
    pub fn writeln(&mut self, text: &str) -> &mut Self {
        self.write(text);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level. Stays at zero when already there.
    pub fn outdent(&mut self) -> &mut Self {
        if self.indent_level == 0 {
            warn!("outdent requested at indentation level zero");
        }
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Strip trailing whitespace, keeping one final newline if the buffer
    /// ended with one.
    pub fn rtrim(&mut self) -> &mut Self {
        let had_newline = self.buffer.ends_with('\n');
        self.trim_end();
        if had_newline {
            self.buffer.push('\n');
        }
        self
    }

    /// Strip all trailing whitespace including newlines.
    pub fn trim_end(&mut self) -> &mut Self {
        let len = self.buffer.trim_end().len();
        self.buffer.truncate(len);
        self
    }

    /// Clear the buffer and the indentation level.
    pub fn reset(&mut self) -> &mut Self {
        self.buffer.clear();
        self.indent_level = 0;
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the accumulated content.
    pub fn content(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the accumulated content.
    pub fn into_content(self) -> String {
        self.buffer
    }

    fn at_line_start(&self) -> bool {
        self.buffer.is_empty() || self.buffer.ends_with('\n')
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(Indent::PHP)
    }
}
