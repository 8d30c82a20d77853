use std::path::PathBuf;

/// Flags that force digit-based phrasing for single units.
///
/// With both flags off, a count of exactly one unit is written idiomatically
/// ("Last month", "An hour ago").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// "1 month ago" instead of "Last month" for years, months, weeks and days
    pub numeric_dates: bool,
    /// "1 hour ago" instead of "An hour ago" for hours, minutes and seconds
    pub numeric_times: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_numeric_dates(mut self, numeric_dates: bool) -> Self {
        self.numeric_dates = numeric_dates;
        self
    }

    pub fn with_numeric_times(mut self, numeric_times: bool) -> Self {
        self.numeric_times = numeric_times;
        self
    }
}

/// How to assemble a formatter: which locale to use and which extra string
/// tables to merge over the bundled ones.
#[derive(Debug, Clone, Default)]
pub struct FormatterConfig {
    /// Locale identifier; `None` reads it from the environment
    pub locale: Option<String>,
    /// JSON string table merged over the bundled catalog
    pub extra_strings: Option<PathBuf>,
}

impl FormatterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_extra_strings(mut self, path: impl Into<PathBuf>) -> Self {
        self.extra_strings = Some(path.into());
        self
    }
}
