//! Error handling for FCMKit
//!
//! Provides error types for every stage of the conversion pipeline:
//! - Parse errors (path-data grammar)
//! - Encoding errors (curve conversion into cut-file segments)
//! - Input errors (document and piece level problems)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path-data parse error type
///
/// Raised while tokenizing a `d` attribute into draw commands.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The path data does not begin with a command letter
    #[error("Unexpected character '{character}' at offset {offset}: expected a command letter")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset into the path data.
        offset: usize,
    },

    /// A numeric argument could not be converted
    #[error("Invalid number '{token}' in '{command}' command")]
    InvalidNumber {
        /// The command letter the argument belongs to.
        command: char,
        /// The token that failed to parse.
        token: String,
    },
}

/// Encoding error type
///
/// Raised while converting draw commands into cut-file segments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    /// A smooth curve appeared with no segment before it to reflect
    #[error("'{command}' cannot start a subpath: no previous segment to reflect")]
    MissingPredecessor {
        /// The smooth command letter.
        command: char,
    },

    /// A fixed-point coordinate does not fit the cut-file integer range
    #[error("Coordinate {value} is outside the fixed-point range")]
    CoordinateOutOfRange {
        /// The offending value, in fixed-point units.
        value: f64,
    },

    /// A command the cut-file format cannot express
    #[error("Unsupported command '{command}'")]
    UnsupportedCommand {
        /// The rejected command letter.
        command: char,
    },
}

/// Input error type
///
/// Covers problems with the source document or a piece as a whole.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A piece has nothing to measure or cut
    #[error("Piece '{label}' has no drawable paths")]
    EmptyPiece {
        /// The label of the empty piece.
        label: String,
    },

    /// The document contains no path elements at all
    #[error("Document contains no <path> elements")]
    NoPaths,

    /// The document could not be read as SVG
    #[error("Invalid document: {reason}")]
    Document {
        /// The reason the document was rejected.
        reason: String,
    },
}

/// Main error type for FCMKit
///
/// A unified error type that can represent any failure of the conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Path-data parse error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Encoding error
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Input error
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Error {
    /// Check if this is a parse error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if this is an encoding error
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }

    /// Check if this is an input error
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Input(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
