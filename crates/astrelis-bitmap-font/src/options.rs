/// Options controlling how a [`FontConfig`](crate::FontConfig) is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions {
    pub format: DocumentFormat,
    /// Spaces per nesting level. Only used by [`DocumentFormat::Pretty`].
    pub indent: usize,
}

impl Default for SaveOptions {
    fn default() -> Self {
        SaveOptions {
            format: DocumentFormat::Pretty,
            indent: 2,
        }
    }
}

impl SaveOptions {
    /// Single-line output.
    pub fn compact() -> Self {
        SaveOptions {
            format: DocumentFormat::Compact,
            ..Default::default()
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Human-readable, one field per line
    Pretty,
    /// No whitespace at all, for embedding or transport
    Compact,
}
