/// Default patterns for identifiers following the CMIP archive convention.
pub mod patterns {
    /// Embedded date-range pattern (`YYYYMMDD-YYYYMMDD` for daily products;
    /// monthly archives use `\d{6}-\d{6}` instead).
    pub const DATE_RANGE_PATTERN: &str = r"\d{8}-\d{8}";
    /// `chrono` format string matching each half of the default range pattern.
    pub const DATE_FORMAT: &str = "%Y%m%d";
    /// Ensemble realization token (for example `r10i1p1f1`).
    pub const REALIZATION_PATTERN: &str = r"r\d{1,2}i\d{1,2}p\d{1,2}f\d{1,2}";
}

/// Constants used by the lenient filtering and grouping paths.
pub mod filtering {
    /// Log message used when an unparseable identifier is dropped.
    pub const SKIP_UNPARSEABLE_MSG: &str = "skipping identifier without a usable date range";
}

/// Constants used by the catalog file helpers.
pub mod catalog {
    /// Default extension for persisted data-list files.
    pub const DEFAULT_CATALOG_EXTENSION: &str = ".txt";
}
