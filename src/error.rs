use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
pub type ParseResult<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Invalid number format pattern: {0:?}")]
    InvalidPattern(String),
    #[error("Decimal and grouping separators must differ (both {0:?})")]
    AmbiguousSeparators(char),
    #[error("Invalid unit suffix {suffix:?} in locale {locale}")]
    InvalidSuffix { locale: String, suffix: String },
    #[error("Unit suffix {suffix:?} is used more than once in locale {locale}")]
    DuplicateSuffix { locale: String, suffix: String },
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
    #[error("Row has no integer value for column {0:?}")]
    MissingColumn(String),
}

/// Failure to read a duration from its textual form. Each variant keeps the raw input so
/// callers can produce a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty duration string")]
    Empty,
    #[error("Invalid number {number:?} in duration {input:?}")]
    InvalidNumber { input: String, number: String },
    #[error("Unknown time unit {suffix:?} in duration {input:?} (locale {locale})")]
    UnknownUnit {
        input: String,
        suffix: String,
        locale: String,
    },
}

impl ParseError {
    /// The raw text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseError::Empty => "",
            ParseError::InvalidNumber { input, .. } | ParseError::UnknownUnit { input, .. } => {
                input
            }
        }
    }
}
