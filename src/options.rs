//! Conversion options.

/// What to do with a file holding an odd number of double quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteHandling {
    /// Fail with [`ConvertError::UnbalancedQuotes`](crate::ConvertError::UnbalancedQuotes).
    #[default]
    Reject,
    /// Split on quotes anyway; everything after the last quote counts as quoted.
    Reference,
}

/// Options for one conversion. A fresh set is typically built per input file.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Prepended to every command line (not to annotation lines), e.g. `"r1.conf:"`.
    pub prefix: Option<String>,
    /// Drop the `top`/`edit`/`annotate` lines normally printed after the commands.
    pub ignore_annotations: bool,
    pub quotes: QuoteHandling,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix used when several files are converted together: `"<source>:"`.
    pub fn with_source_prefix(mut self, source: &str) -> Self {
        self.prefix = Some(format!("{}:", source));
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn ignore_annotations(mut self, ignore: bool) -> Self {
        self.ignore_annotations = ignore;
        self
    }

    pub fn quotes(mut self, quotes: QuoteHandling) -> Self {
        self.quotes = quotes;
        self
    }

    pub(crate) fn prefix_str(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }
}
