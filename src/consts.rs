/// Prefix carried by every error string shown on the page
pub(crate) const ERROR_PREFIX: &str = "Error:";

/// Gemini model used when neither CLI nor config names one
pub(crate) const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Base URL of the Gemini REST API
pub(crate) const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// SQLite file used when no database path is configured
pub(crate) const DEFAULT_DATABASE: &str = "placement.db";

/// Model request timeout in seconds
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Rupees per lakh; salaries are expressed in lakhs per annum (LPA)
pub(crate) const RUPEES_PER_LAKH: f64 = 100_000.0;
