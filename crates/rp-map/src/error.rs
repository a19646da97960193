use rp_core::ValidationError;
use thiserror::Error;

/// A malformed network description.  Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("map does not contain a '{0}' section")]
    MissingSection(&'static str),

    #[error("line {line}: '{section}' section declared twice")]
    DuplicateSection { line: usize, section: &'static str },

    #[error("line {line}: 'connections:' section must follow 'stations:'")]
    SectionOrder { line: usize },

    #[error("line {line}: entry outside of any section: {text}")]
    OutsideSection { line: usize, text: String },

    #[error("line {line}: invalid station format: {text}")]
    InvalidStation { line: usize, text: String },

    #[error("line {line}: invalid station coordinates: {text}")]
    InvalidCoordinates { line: usize, text: String },

    #[error("line {line}: invalid connection format: {text}")]
    InvalidConnection { line: usize, text: String },

    #[error("map contains more than {limit} stations")]
    TooManyStations { limit: usize },
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
