use std::fmt;

/// Selection failures abort the command before any collection happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing is selected, or the user cancelled the pick.
    NoSelection,
    /// The selected object is not an alignment.
    InvalidObject(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no alignment selected"),
            Self::InvalidObject(kind) => {
                write!(f, "selected object is not an alignment: {kind}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

#[derive(Debug)]
pub enum FixtureError {
    /// Missing required column in the header row.
    MissingColumn(String),
    /// A field failed to parse as a number.
    Parse { line: usize, column: String, value: String },
    /// CSV reader error.
    Csv(String),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn(column) => write!(f, "missing column '{column}'"),
            Self::Parse { line, column, value } => {
                write!(f, "line {line}, column '{column}': cannot parse number '{value}'")
            }
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl std::error::Error for FixtureError {}
